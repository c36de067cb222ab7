//! Supervisor-call declarations.
//!
//! A [`Declaration`] is one catalog signature resolved for one register
//! width. Arguments are classified by naming convention: anything named
//! `out` or containing `out_` is an output, returned through a register when
//! written with `*` and through a caller buffer otherwise.

pub mod parser;

pub use parser::parse_declaration;

use crate::core::types::ResolvedType;

/// How an argument crosses the call boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// Read from an input register.
    Input,
    /// Written back through an output register after the call.
    ///
    /// `address` outputs are materialized as a full 64-bit word whatever the
    /// width, so the 32-bit variant does not truncate asymmetrically.
    OutputByValue { address: bool },
    /// Caller-supplied buffer address, passed through unchanged.
    OutputByPointer,
}

/// One argument of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub ty: ResolvedType,
    pub var_name: String,
    pub kind: ArgumentKind,
}

impl Argument {
    pub fn is_output(&self) -> bool {
        !matches!(self.kind, ArgumentKind::Input)
    }

    pub fn is_outptr(&self) -> bool {
        matches!(self.kind, ArgumentKind::OutputByPointer)
    }

    pub fn is_address(&self) -> bool {
        matches!(self.kind, ArgumentKind::OutputByValue { address: true })
    }

    /// Output returned through a register (not through a buffer).
    pub fn is_register_output(&self) -> bool {
        matches!(self.kind, ArgumentKind::OutputByValue { .. })
    }
}

/// A parsed and width-resolved signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub return_type: ResolvedType,
    pub name: String,
    pub arguments: Vec<Argument>,
}

impl Declaration {
    pub fn returns_value(&self) -> bool {
        !self.return_type.is_void()
    }

    pub fn register_outputs(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.iter().filter(|arg| arg.is_register_output())
    }
}
