//! # tally
//!
//! A dual-mode formula calculator engine.
//!
//! Tally reduces a textual arithmetic formula to a numeric result with
//! exact decimal arithmetic. Two evaluation orderings are supported:
//!
//! - [`ParserVariant::Sequential`] folds strictly left to right, the way a
//!   desk calculator does (`2+3*4` is 20)
//! - [`ParserVariant::Precedence`] folds multiply/divide before plus/minus
//!   (`2+3*4` is 14)
//!
//! Parenthesized groups are resolved recursively in both orderings, and a
//! number directly in front of a group multiplies it (`9(3*9)` means
//! `9*(3*9)`).
//!
//! ## Example
//!
//! ```rust
//! use tally::prelude::*;
//!
//! let result = evaluate("6+3+9(3*9)+2", ParserVariant::Precedence).unwrap();
//! assert_eq!(result.get(), 254.0);
//!
//! // Division by zero and malformed text come back as recoverable errors.
//! let err = evaluate("1/0", ParserVariant::Sequential).unwrap_err();
//! assert!(err.is_recoverable());
//! ```

pub mod prelude;

// Re-export core types
pub use tally_core::{
    // Error types
    Error,
    // Formula storage
    FormulaBuilder,
    FormulaText,
    // History boundary type
    HistoryEntry,
    // Variant tag
    ParserVariant,
    Result,
    // Result storage
    ResultValue,
    TERMINATOR,
};

// Re-export evaluation types
pub use tally_eval::{
    evaluate, evaluate_item, reduce, EvalError, EvalResult, ReductionMode, MAX_PARENTHESES_DEPTH,
};
