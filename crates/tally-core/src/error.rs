//! Error types for tally-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tally-core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Formula text was empty
    #[error("Formula text is empty")]
    EmptyFormula,

    /// History entry id below the new-entry sentinel
    #[error("History id {0} is below -1")]
    InvalidHistoryId(i64),

    /// Unknown parser variant tag read back from storage
    #[error("Unknown parser variant tag: {0}")]
    UnknownVariantTag(u8),
}
