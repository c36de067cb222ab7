// This module gathers the infrastructure shared by every stage of the generator: the error
// type, the register width variants, the type registry used to resolve and size type names,
// the per-bank register allocator implementing NGRN assignment with overflow packing, and a
// host-side model of the 8-slot transfer buffer used to check gather/scatter layouts.

//! Core generator infrastructure.
//!
//! # Key Components
//!
//! ## Errors (`error`)
//! - `GenError` for every fatal generation condition
//! - Catalog entry context attached at the pipeline boundary
//!
//! ## Widths (`width`)
//! - AAPCS32 and AAPCS64 register sizes, budgets and naming
//!
//! ## Types (`types`)
//! - Registry of type sizes plus per-width aliases
//!
//! ## Register Allocation (`register_file`)
//! - NGRN assignment inside the ABI budget
//! - Lowest-free-slot packing once the budget is exceeded
//!
//! ## Register Image (`registers`)
//! - Host model of `GetArg`/`SetArg`/`Convert`

pub mod error;
pub mod register_file;
pub mod registers;
pub mod types;
pub mod width;

pub use error::{GenError, GenResult};
pub use register_file::{Allocation, RegBitSet, RegisterAllocator};
pub use registers::{convert_bytes, ArgumentRegisters};
pub use types::{ResolvedType, TypeRegistry, VOID};
pub use width::{RegisterWidth, BANK_REGISTERS};
