//! svcgen - supervisor-call marshalling generator.
//!
//! Turns a catalog of kernel supervisor-call prototypes into the C++
//! wrappers that move arguments between the guest's 8-slot register buffer
//! and the kernel routines, for both the AAPCS32 and AAPCS64 conventions.
//!
//! # Primary Usage
//!
//! ```ignore
//! use svcgen::{Catalog, Generator};
//!
//! let generator = Generator::default();
//! let sources = generator.generate(&Catalog::horizon())?;
//! std::fs::write("svc.h", &sources.header)?;
//! std::fs::write("svc.cpp", &sources.source)?;
//! ```
//!
//! # Architecture
//!
//! - [`decl`] - Signature parsing and argument classification
//! - [`core`] - Errors, widths, type registry, register allocation
//! - [`abi`] - Register layout planning for one declaration
//! - [`emit`] - Wrapper, declaration and dispatcher text
//! - [`catalog`] - Built-in and file-loaded catalogs
//! - [`generator`] - The end-to-end pipeline

pub mod abi;
pub mod catalog;
pub mod core;
pub mod decl;
pub mod emit;
pub mod generator;

pub use abi::{plan_layout, RegisterLayout};
pub use catalog::{Catalog, CatalogEntry};
pub use self::core::{
    // Errors
    GenError, GenResult,
    // Configuration
    RegisterWidth, TypeRegistry, ResolvedType,
    // Register allocation
    RegisterAllocator, Allocation, ArgumentRegisters,
};
pub use decl::{parse_declaration, Argument, ArgumentKind, Declaration};
pub use emit::{DispatchTable, Framing};
pub use generator::{GeneratedSources, GenerationStats, Generator};
