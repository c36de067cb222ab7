//! Register width variants of the guest procedure-call standard.
//!
//! Both variants share one 8-slot transfer buffer of 64-bit words. The
//! narrow (AAPCS32) variant uses only the low 4 bytes of each slot and
//! guarantees 4 argument registers; the wide (AAPCS64) variant uses all
//! 8 bytes and guarantees 8.

use std::fmt;

/// Number of slots in the register transfer buffer.
pub const BANK_REGISTERS: usize = 8;

/// Register width selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterWidth {
    /// 32-bit guest running on the 64-bit kernel.
    Narrow,
    /// Native 64-bit guest.
    Wide,
}

impl RegisterWidth {
    /// Both widths, in emission order.
    pub const ALL: [RegisterWidth; 2] = [RegisterWidth::Narrow, RegisterWidth::Wide];

    /// Size of one register in bytes.
    pub const fn register_bytes(self) -> usize {
        match self {
            RegisterWidth::Narrow => 4,
            RegisterWidth::Wide => 8,
        }
    }

    /// Size of one register in bits.
    pub const fn register_bits(self) -> usize {
        self.register_bytes() * 8
    }

    /// Registers the convention assigns linearly before overflow.
    pub const fn abi_register_budget(self) -> usize {
        match self {
            RegisterWidth::Narrow => 4,
            RegisterWidth::Wide => 8,
        }
    }

    /// Suffix appended to per-width routine and wrapper names.
    pub const fn suffix(self) -> &'static str {
        match self {
            RegisterWidth::Narrow => "64From32",
            RegisterWidth::Wide => "64",
        }
    }

    /// Name of the width-specific dispatcher.
    pub fn dispatcher_name(self) -> String {
        format!("Call{}", self.register_bits())
    }
}

impl fmt::Display for RegisterWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterWidth::Narrow => write!(f, "aapcs32"),
            RegisterWidth::Wide => write!(f, "aapcs64"),
        }
    }
}
