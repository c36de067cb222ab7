//! Register-image model of the emitted marshalling helpers.
//!
//! Mirrors `GetArg32/64`, `SetArg32/64` and `Convert<T>` on the host side so
//! layouts can be checked by moving real bytes through the transfer buffer.
//! Words are laid out in host (little-endian) byte order.

use super::width::{RegisterWidth, BANK_REGISTERS};

/// The 8-slot transfer buffer shared by both widths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArgumentRegisters {
    slots: [u64; BANK_REGISTERS],
}

impl ArgumentRegisters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: [u64; BANK_REGISTERS]) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[u64; BANK_REGISTERS] {
        &self.slots
    }

    /// Read register `n`; the narrow width sees only the low 32 bits.
    pub fn get_arg(&self, width: RegisterWidth, n: usize) -> u64 {
        match width {
            RegisterWidth::Narrow => self.slots[n] as u32 as u64,
            RegisterWidth::Wide => self.slots[n],
        }
    }

    /// Write register `n`; narrow writes zero the upper half.
    pub fn set_arg(&mut self, width: RegisterWidth, n: usize, value: u64) {
        self.slots[n] = match width {
            RegisterWidth::Narrow => value as u32 as u64,
            RegisterWidth::Wide => value,
        };
    }

    /// Collect the registers in `sources` and reinterpret them as `size` bytes.
    pub fn gather(&self, width: RegisterWidth, sources: &[usize], size: usize) -> Vec<u8> {
        let word = width.register_bytes();
        let mut raw = Vec::with_capacity(sources.len() * word);
        for &reg in sources {
            raw.extend_from_slice(&self.get_arg(width, reg).to_le_bytes()[..word]);
        }
        convert_bytes(&raw, size)
    }

    /// Split `value` into register words and write them to `destinations`.
    pub fn scatter(&mut self, width: RegisterWidth, destinations: &[usize], value: &[u8]) {
        let word = width.register_bytes();
        let raw = convert_bytes(value, destinations.len() * word);
        for (chunk, &reg) in raw.chunks(word).zip(destinations) {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            self.set_arg(width, reg, u64::from_le_bytes(bytes));
        }
    }
}

/// Bytewise reinterpretation into `to_size` bytes.
///
/// Copies the overlapping prefix; anything past the source is zero.
pub fn convert_bytes(from: &[u8], to_size: usize) -> Vec<u8> {
    let mut to = vec![0u8; to_size];
    let len = from.len().min(to_size);
    to[..len].copy_from_slice(&from[..len]);
    to
}
