//! # tally-core
//!
//! Core data types for the tally calculator engine.
//!
//! This crate provides the fundamental types used throughout tally:
//! - [`FormulaText`] and [`FormulaBuilder`] - immutable formula storage
//! - [`ResultValue`] - the write-once numeric result of an evaluation
//! - [`ParserVariant`] - which evaluation ordering to use
//! - [`HistoryEntry`] - the boundary type handed to history persistence
//!
//! ## Example
//!
//! ```rust
//! use tally_core::{FormulaBuilder, FormulaText};
//!
//! let formula = FormulaText::new("1+2").unwrap();
//! assert_eq!(formula.get(), "1+2=");
//!
//! // Built incrementally, the terminator locks the builder.
//! let mut builder = FormulaBuilder::new();
//! builder.append("1+2");
//! builder.append("=");
//! builder.append("+3"); // ignored
//! assert_eq!(builder.build().unwrap(), formula);
//! ```

pub mod error;
pub mod formula;
pub mod history;
pub mod result;
pub mod variant;

// Re-exports for convenience
pub use error::{Error, Result};
pub use formula::{FormulaBuilder, FormulaText, TERMINATOR};
pub use history::HistoryEntry;
pub use result::ResultValue;
pub use variant::ParserVariant;
