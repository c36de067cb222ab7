//! Guest calling-convention layout.

pub mod calling_convention;

pub use calling_convention::{plan_layout, InputSlot, OutputSlot, RegisterLayout, ReturnSlot};
