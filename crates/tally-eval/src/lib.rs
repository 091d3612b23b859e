//! # tally-eval
//!
//! Formula evaluation for the tally calculator engine.
//!
//! This crate provides:
//! - Exact decimal arithmetic ([`arith`])
//! - Multi-pass textual reduction ([`reduce`])
//! - The two evaluation orderings ([`evaluate`] with a
//!   [`ParserVariant`](tally_core::ParserVariant))
//!
//! A formula is evaluated by scanning its text left to right several times.
//! The first pass resolves parenthesized groups recursively; the remaining
//! passes fold operators into numbers, in an order fixed by the chosen
//! variant. Each pass leaves inactive operators as text for the next one.
//!
//! ## Example
//!
//! ```rust
//! use tally_core::ParserVariant;
//! use tally_eval::evaluate;
//!
//! let result = evaluate("30+11-22*4/2", ParserVariant::Sequential).unwrap();
//! assert_eq!(result.get(), 38.0);
//! ```

pub mod arith;
pub mod error;
pub mod reduce;
pub mod variant;

// Re-exports for convenience
pub use error::{EvalError, EvalResult};
pub use reduce::{reduce, ReductionMode, MAX_PARENTHESES_DEPTH};
pub use variant::{evaluate, evaluate_item};
