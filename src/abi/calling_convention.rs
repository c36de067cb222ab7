// This module maps a width-resolved supervisor-call declaration onto the guest's 8-slot
// register transfer buffer. Two independent allocators are driven over the arguments: the
// input bank follows the AAPCS argument order (register-returned outputs reserve their
// NGRN slot without being read, wide inputs start on an even register), and the output
// bank receives the return value first and then each register-returned output in
// declaration order with plain linear packing. Buffer-style outputs never reach the
// output bank; their guest address is read like any other input. The resulting
// RegisterLayout is all the marshalling emitter needs.

//! AAPCS32/AAPCS64 supervisor-call register layout.

use crate::core::error::GenResult;
use crate::core::register_file::{RegBitSet, RegisterAllocator};
use crate::core::types::ResolvedType;
use crate::core::width::RegisterWidth;
use crate::decl::Declaration;
use std::fmt;

/// Registers carrying the return value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnSlot {
    pub ty: ResolvedType,
    pub registers: Vec<usize>,
}

/// Registers an output argument is written back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSlot {
    pub ty: ResolvedType,
    pub var_name: String,
    pub registers: Vec<usize>,
    pub is_address: bool,
}

/// Registers an input argument is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSlot {
    pub ty: ResolvedType,
    pub var_name: String,
    pub registers: Vec<usize>,
}

/// Complete register assignment for one declaration at one width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterLayout {
    pub width: RegisterWidth,
    pub return_slot: Option<ReturnSlot>,
    pub output_slots: Vec<OutputSlot>,
    pub input_slots: Vec<InputSlot>,
}

impl RegisterLayout {
    /// Registers written after the call (return value and outputs).
    pub fn written_registers(&self) -> impl Iterator<Item = usize> + '_ {
        self.return_slot
            .iter()
            .flat_map(|slot| slot.registers.iter().copied())
            .chain(self.output_slots.iter().flat_map(|slot| slot.registers.iter().copied()))
    }

    /// Registers read before the call.
    pub fn read_registers(&self) -> impl Iterator<Item = usize> + '_ {
        self.input_slots.iter().flat_map(|slot| slot.registers.iter().copied())
    }
}

/// Assign registers to every value of `decl`.
pub fn plan_layout(decl: &Declaration, width: RegisterWidth) -> GenResult<RegisterLayout> {
    let mut input_alloc = RegisterAllocator::for_width(width);
    let mut output_alloc = RegisterAllocator::for_width(width);

    let mut input_slots = Vec::new();
    let mut input_ngrn = 0;
    for arg in &decl.arguments {
        if arg.is_register_output() {
            // Reserved so later inputs line up with the guest's call site.
            input_ngrn += 1;
            continue;
        }

        let alloc = input_alloc.add(input_ngrn, arg.ty.size, true)?;
        input_ngrn += alloc.increment;
        input_slots.push(InputSlot {
            ty: arg.ty.clone(),
            var_name: arg.var_name.clone(),
            registers: alloc.registers,
        });
    }

    let mut output_ngrn = 0;
    let return_slot = if decl.returns_value() {
        let alloc = output_alloc.add(output_ngrn, decl.return_type.size, false)?;
        output_ngrn += alloc.increment;
        Some(ReturnSlot {
            ty: decl.return_type.clone(),
            registers: alloc.registers,
        })
    } else {
        None
    };

    let mut output_slots = Vec::new();
    for arg in decl.register_outputs() {
        let alloc = output_alloc.add(output_ngrn, arg.ty.size, false)?;
        output_ngrn += alloc.increment;
        output_slots.push(OutputSlot {
            ty: arg.ty.clone(),
            var_name: arg.var_name.clone(),
            registers: alloc.registers,
            is_address: arg.is_address(),
        });
    }

    log::debug!(
        "{} [{}]: inputs {:?}, outputs {:?}",
        decl.name,
        width,
        describe(input_alloc.assigned()),
        describe(output_alloc.assigned())
    );

    Ok(RegisterLayout {
        width,
        return_slot,
        output_slots,
        input_slots,
    })
}

fn describe(set: RegBitSet) -> Vec<usize> {
    set.iter().collect()
}

fn fmt_regs(f: &mut fmt::Formatter<'_>, regs: &[usize]) -> fmt::Result {
    let names: Vec<String> = regs.iter().map(|r| format!("R{}", r)).collect();
    write!(f, "[{}]", names.join(", "))
}

impl fmt::Display for RegisterLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.width)?;
        if let Some(ret) = &self.return_slot {
            write!(f, "  return {} <- ", ret.ty.name)?;
            fmt_regs(f, &ret.registers)?;
            writeln!(f)?;
        }
        for out in &self.output_slots {
            let ty = if out.is_address { "uint64_t" } else { out.ty.name.as_str() };
            write!(f, "  output {} {} <- ", ty, out.var_name)?;
            fmt_regs(f, &out.registers)?;
            writeln!(f)?;
        }
        for input in &self.input_slots {
            write!(f, "  input  {} {} -> ", input.ty.name, input.var_name)?;
            fmt_regs(f, &input.registers)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
