//! Ledger module containing row bookkeeping and totals computation

pub mod rows;
pub mod totals;

pub use rows::*;
pub use totals::*;
