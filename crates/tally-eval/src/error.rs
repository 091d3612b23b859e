//! Evaluation error types

use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = std::result::Result<T, EvalError>;

/// Errors that can occur while evaluating a formula
#[derive(Debug, Error)]
pub enum EvalError {
    /// Input text is not a well-formed formula
    #[error("Malformed formula: {0}")]
    MalformedFormula(String),

    /// Arithmetic attempted a division by zero
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// The input formula could not be constructed
    #[error(transparent)]
    Formula(#[from] tally_core::Error),

    /// Reduction produced text that is not a single number. This is an
    /// evaluator bug: well-formed input is reducible by construction.
    #[error("evaluator invariant violated: {reduced:?} did not reduce to a number")]
    InvariantViolation {
        /// The fully-reduced formula text that failed to parse
        reduced: String,
        /// The parse failure
        #[source]
        source: std::num::ParseFloatError,
    },
}

impl EvalError {
    /// Create a malformed-formula error with a descriptive cause.
    pub fn malformed<S: Into<String>>(cause: S) -> Self {
        EvalError::MalformedFormula(cause.into())
    }

    /// Whether the failure was caused by the input (worth re-prompting the
    /// user for) rather than by a bug inside the evaluator.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, EvalError::InvariantViolation { .. })
    }
}
