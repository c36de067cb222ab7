// This module turns planned register layouts into the text fragments of the two generated
// C++ artifacts. marshal.rs emits the per-width wrapper functions (gather, call, scatter),
// declarations.rs the forward declarations, id enumeration and static size checks,
// dispatch.rs the id to wrapper tables and their switch dispatchers, and framing.rs holds
// the fixed banner, prologue and epilogue text the documents are wrapped in.

//! C++ fragment emission.

pub mod declarations;
pub mod dispatch;
pub mod framing;
pub mod marshal;

pub use declarations::{build_enum_declarations, build_fn_declaration, emit_size_check};
pub use dispatch::{DispatchTable, Route, RouteKind};
pub use framing::Framing;
pub use marshal::{emit_gather, emit_scatter, emit_wrapper};

/// Indentation used inside emitted bodies.
pub const INDENT: &str = "    ";

/// Join `lines`, indenting every non-empty line after the first.
pub fn indent_body(lines: &[String], indent: &str) -> String {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i > 0 && !line.is_empty() {
                format!("{indent}{line}")
            } else {
                line.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_body() {
        let lines = vec!["f() {".to_string(), "a;".to_string(), String::new(), "b;".to_string()];
        assert_eq!(indent_body(&lines, INDENT), "f() {\n    a;\n\n    b;");
    }
}
