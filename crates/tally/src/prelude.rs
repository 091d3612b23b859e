//! Prelude module - common imports for tally users
//!
//! ```rust
//! use tally::prelude::*;
//! ```

pub use crate::{
    // Evaluation
    evaluate,
    evaluate_item,
    // Error types
    EvalError,
    EvalResult,
    // Formula storage
    FormulaBuilder,
    FormulaText,
    // History boundary type
    HistoryEntry,
    // Variant tag
    ParserVariant,
    // Result storage
    ResultValue,
};
