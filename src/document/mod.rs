//! Printable bill assembly: formatting helpers, the document model and the assembler

pub mod assembler;
pub mod format;
pub mod model;

pub use assembler::*;
pub use format::*;
pub use model::*;
