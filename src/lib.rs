//! # Invoice Core
//!
//! Invoice totals and printable bill assembly for a simple charges-plus-fees
//! invoice.
//!
//! ## Features
//!
//! - **Ledger**: subtotal, grand total, balance and dues recomputed on demand
//!   from the current charge and adjustment rows
//! - **Row books**: ordered charge/adjustment collections with ids that are
//!   never reused
//! - **Document assembly**: a renderer-neutral bill (header, narrative, one
//!   ordered table, signature) built from the same rows and totals
//! - **Sinks**: async trait for rendering backends, with in-memory and
//!   plain-text implementations
//!
//! ## Quick Start
//!
//! ```rust
//! use invoice_core::{DocumentAssembler, InvoiceDraftBuilder, InvoiceHeader};
//! use bigdecimal::BigDecimal;
//!
//! let draft = InvoiceDraftBuilder::new(InvoiceHeader::default())
//!     .charge("Documentation Charge", 100)
//!     .addition("Commission", 50)
//!     .deduction("Advance", 120)
//!     .build();
//!
//! let totals = draft.totals();
//! assert_eq!(totals.balance, BigDecimal::from(30));
//!
//! let document = draft.document(&DocumentAssembler::default());
//! assert_eq!(document.table.rows.last().unwrap().amount(), "30.00");
//! ```

pub mod config;
pub mod document;
pub mod draft;
pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::*;
pub use document::*;
pub use draft::*;
pub use ledger::*;
pub use traits::*;
pub use types::*;
