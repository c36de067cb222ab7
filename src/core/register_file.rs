//! Register bank allocation.
//!
//! Implements the "next general register number" (NGRN) assignment used by
//! the guest procedure-call standard, on top of a fixed physical bank of 8
//! transfer slots. Registers below the ABI budget are assigned at exactly the
//! NGRN; once the cursor passes the budget the value is packed into the
//! lowest free slot instead, since the host has no stack-passing channel.
//!
//! One allocator instance covers one bank (inputs, or return plus outputs)
//! for one declaration at one width.

use super::error::{GenError, GenResult};
use super::width::{RegisterWidth, BANK_REGISTERS};

/// Bit set tracking which slots of a bank are taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegBitSet {
    bits: u32,
}

impl RegBitSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if register is set.
    pub fn contains(&self, reg: usize) -> bool {
        reg < 32 && (self.bits & (1 << reg)) != 0
    }

    /// Set a register.
    pub fn set(&mut self, reg: usize) {
        if reg < 32 {
            self.bits |= 1 << reg;
        }
    }

    /// First clear register below `limit`.
    pub fn find_first_clear(&self, limit: usize) -> Option<usize> {
        let free = !self.bits & mask_below(limit);
        if free == 0 {
            None
        } else {
            Some(free.trailing_zeros() as usize)
        }
    }

    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Registers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..32).filter(move |&reg| self.contains(reg))
    }
}

fn mask_below(limit: usize) -> u32 {
    if limit >= 32 {
        u32::MAX
    } else {
        (1u32 << limit) - 1
    }
}

/// Registers chosen for one value and how far the NGRN cursor moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    pub registers: Vec<usize>,
    pub increment: usize,
}

/// Allocator for a single register bank.
#[derive(Debug, Clone)]
pub struct RegisterAllocator {
    assigned: RegBitSet,
    bank_registers: usize,
    register_bytes: usize,
    abi_register_budget: usize,
}

impl RegisterAllocator {
    pub fn new(bank_registers: usize, register_bytes: usize, abi_register_budget: usize) -> Self {
        Self {
            assigned: RegBitSet::new(),
            bank_registers,
            register_bytes,
            abi_register_budget,
        }
    }

    /// Allocator matching the convention of `width`.
    pub fn for_width(width: RegisterWidth) -> Self {
        Self::new(
            BANK_REGISTERS,
            width.register_bytes(),
            width.abi_register_budget(),
        )
    }

    pub fn register_bytes(&self) -> usize {
        self.register_bytes
    }

    pub fn assigned(&self) -> RegBitSet {
        self.assigned
    }

    /// Mark register `reg` as used.
    pub fn allocate(&mut self, reg: usize) -> GenResult<usize> {
        if self.assigned.contains(reg) {
            return Err(GenError::DoubleAllocation { register: reg });
        }
        if reg >= self.bank_registers {
            return Err(GenError::RegisterExhaustion {
                bank_size: self.bank_registers,
            });
        }
        log::trace!("allocated R{}", reg);
        self.assigned.set(reg);
        Ok(reg)
    }

    /// Allocate the lowest free register of the bank.
    pub fn allocate_first_free(&mut self) -> GenResult<usize> {
        match self.assigned.find_first_clear(self.bank_registers) {
            Some(reg) => self.allocate(reg),
            None => Err(GenError::RegisterExhaustion {
                bank_size: self.bank_registers,
            }),
        }
    }

    /// Place one register-sized value at `ngrn`.
    ///
    /// Returns the register and the cursor increment. Past the ABI budget the
    /// value goes to any free slot and the cursor does not advance.
    pub fn add_single(&mut self, ngrn: usize) -> GenResult<(usize, usize)> {
        if ngrn >= self.abi_register_budget {
            let reg = self.allocate_first_free()?;
            log::debug!("NGRN {} past budget {}, packed into R{}", ngrn, self.abi_register_budget, reg);
            Ok((reg, 0))
        } else {
            Ok((self.allocate(ngrn)?, 1))
        }
    }

    /// Place a value of `data_size` bytes starting at `ngrn`.
    ///
    /// Values wider than one register span `ceil(data_size / register_bytes)`
    /// slots; with `align` set an odd cursor is first bumped to an even one.
    pub fn add(&mut self, ngrn: usize, data_size: usize, align: bool) -> GenResult<Allocation> {
        if data_size <= self.register_bytes {
            let (reg, increment) = self.add_single(ngrn)?;
            return Ok(Allocation {
                registers: vec![reg],
                increment,
            });
        }

        let mut registers = Vec::with_capacity(data_size.div_ceil(self.register_bytes));
        let mut increment = if align { ngrn % 2 } else { 0 };
        let mut remaining = data_size;
        while remaining > 0 {
            let (reg, step) = self.add_single(ngrn + increment)?;
            registers.push(reg);
            increment += step;
            remaining = remaining.saturating_sub(self.register_bytes);
        }

        Ok(Allocation {
            registers,
            increment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regbitset_operations() {
        let mut set = RegBitSet::new();
        set.set(0);
        set.set(2);
        assert!(set.contains(0));
        assert!(!set.contains(1));
        assert_eq!(set.find_first_clear(8), Some(1));
        assert_eq!(set.count(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_double_allocation() {
        let mut alloc = RegisterAllocator::for_width(RegisterWidth::Wide);
        alloc.allocate(3).unwrap();
        let err = alloc.allocate(3).unwrap_err();
        assert!(matches!(err, GenError::DoubleAllocation { register: 3 }));
    }

    #[test]
    fn test_allocate_first_free_ascending() {
        let mut alloc = RegisterAllocator::for_width(RegisterWidth::Narrow);
        alloc.allocate(0).unwrap();
        alloc.allocate(2).unwrap();
        assert_eq!(alloc.allocate_first_free().unwrap(), 1);
        assert_eq!(alloc.allocate_first_free().unwrap(), 3);
    }

    #[test]
    fn test_exhaustion() {
        let mut alloc = RegisterAllocator::for_width(RegisterWidth::Wide);
        for _ in 0..BANK_REGISTERS {
            alloc.allocate_first_free().unwrap();
        }
        let err = alloc.allocate_first_free().unwrap_err();
        assert!(matches!(err, GenError::RegisterExhaustion { bank_size: 8 }));
    }

    #[test]
    fn test_add_single_within_budget() {
        let mut alloc = RegisterAllocator::for_width(RegisterWidth::Narrow);
        assert_eq!(alloc.add_single(2).unwrap(), (2, 1));
    }

    #[test]
    fn test_add_single_past_budget_falls_back() {
        let mut alloc = RegisterAllocator::for_width(RegisterWidth::Narrow);
        for ngrn in 0..4 {
            alloc.add_single(ngrn).unwrap();
        }
        // Cursor stays frozen at the budget; slots 4.. are handed out in order.
        assert_eq!(alloc.add_single(4).unwrap(), (4, 0));
        assert_eq!(alloc.add_single(4).unwrap(), (5, 0));
    }

    #[test]
    fn test_add_wide_value_spans_registers() {
        let mut alloc = RegisterAllocator::for_width(RegisterWidth::Narrow);
        let a = alloc.add(0, 8, false).unwrap();
        assert_eq!(a.registers, vec![0, 1]);
        assert_eq!(a.increment, 2);

        let mut alloc = RegisterAllocator::for_width(RegisterWidth::Wide);
        let a = alloc.add(0, 24, false).unwrap();
        assert_eq!(a.registers, vec![0, 1, 2]);
        assert_eq!(a.increment, 3);
    }

    #[test]
    fn test_add_aligns_odd_cursor() {
        let mut alloc = RegisterAllocator::for_width(RegisterWidth::Narrow);
        let a = alloc.add(1, 8, true).unwrap();
        assert_eq!(a.registers, vec![2, 3]);
        // One slot of padding plus two registers.
        assert_eq!(a.increment, 3);
    }

    #[test]
    fn test_add_without_align_ignores_parity() {
        let mut alloc = RegisterAllocator::for_width(RegisterWidth::Narrow);
        let a = alloc.add(1, 8, false).unwrap();
        assert_eq!(a.registers, vec![1, 2]);
        assert_eq!(a.increment, 2);
    }

    #[test]
    fn test_add_span_crossing_budget() {
        let mut alloc = RegisterAllocator::for_width(RegisterWidth::Narrow);
        alloc.allocate(0).unwrap();
        alloc.allocate(1).unwrap();
        alloc.allocate(2).unwrap();
        // Starts at NGRN 3, second half overflows into the lowest free slot.
        let a = alloc.add(3, 8, false).unwrap();
        assert_eq!(a.registers, vec![3, 4]);
        assert_eq!(a.increment, 1);
    }
}
