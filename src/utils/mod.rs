//! Utility modules

pub mod memory_sink;
pub mod text;

pub use memory_sink::*;
pub use text::*;
