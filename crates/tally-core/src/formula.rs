//! Formula text storage
//!
//! A formula is a plain string of digits, operators and parentheses, always
//! terminated by a `=` sentinel. [`FormulaText`] is the immutable stored
//! form; [`FormulaBuilder`] accumulates fragments until a terminator locks
//! it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The character that terminates every formula.
pub const TERMINATOR: char = '=';

/// An immutable arithmetic formula.
///
/// The stored text always ends with [`TERMINATOR`]; construction appends it
/// when the raw input lacks one. Equality and hashing are by content.
///
/// # Example
/// ```rust
/// use tally_core::FormulaText;
///
/// let formula = FormulaText::new("1+2").unwrap();
/// assert_eq!(formula.get(), "1+2=");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FormulaText(String);

impl FormulaText {
    /// Create a formula from raw text, appending the terminator if absent.
    ///
    /// Fails with [`Error::EmptyFormula`] when the input is empty.
    pub fn new<S: Into<String>>(raw: S) -> Result<Self> {
        let mut text = raw.into();
        if text.is_empty() {
            return Err(Error::EmptyFormula);
        }
        if !text.ends_with(TERMINATOR) {
            text.push(TERMINATOR);
        }
        Ok(FormulaText(text))
    }

    /// The stored text, including the trailing terminator.
    pub fn get(&self) -> &str {
        &self.0
    }

    /// The stored text without the trailing terminator.
    pub fn body(&self) -> &str {
        self.0.strip_suffix(TERMINATOR).unwrap_or(&self.0)
    }
}

impl TryFrom<String> for FormulaText {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self> {
        FormulaText::new(raw)
    }
}

impl From<FormulaText> for String {
    fn from(formula: FormulaText) -> String {
        formula.0
    }
}

impl fmt::Display for FormulaText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Append-only accumulator for building a [`FormulaText`] incrementally.
///
/// The moment an appended fragment ends with [`TERMINATOR`] the builder
/// locks: later appends are silent no-ops, not errors. `build` snapshots the
/// accumulated text without consuming the builder, so it can be called again
/// after further appends.
#[derive(Debug, Default)]
pub struct FormulaBuilder {
    text: String,
    locked: bool,
}

impl FormulaBuilder {
    /// Create an empty, unlocked builder.
    pub fn new() -> Self {
        FormulaBuilder::default()
    }

    /// Append a fragment (e.g. `"-6"` onto `"12+5"`).
    ///
    /// Ignored when the builder is already locked. Appending a fragment
    /// whose last character is [`TERMINATOR`] locks the builder.
    pub fn append(&mut self, fragment: &str) {
        if self.locked {
            return;
        }
        self.text.push_str(fragment);
        if self.text.ends_with(TERMINATOR) {
            self.locked = true;
        }
    }

    /// Whether a terminator has been appended.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Snapshot the accumulated text into a [`FormulaText`].
    ///
    /// The snapshot is not synchronized with the builder: appending after a
    /// `build` requires building again.
    pub fn build(&self) -> Result<FormulaText> {
        FormulaText::new(self.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_appends_terminator() {
        let formula = FormulaText::new("30+11-22*4/2").unwrap();
        assert_eq!(formula.get(), "30+11-22*4/2=");
    }

    #[test]
    fn new_keeps_existing_terminator() {
        let formula = FormulaText::new("1+2=").unwrap();
        assert_eq!(formula.get(), "1+2=");
    }

    #[test]
    fn new_rejects_empty_text() {
        assert_eq!(FormulaText::new(""), Err(Error::EmptyFormula));
    }

    #[test]
    fn body_strips_terminator() {
        let formula = FormulaText::new("1+2").unwrap();
        assert_eq!(formula.body(), "1+2");
    }

    #[test]
    fn equality_is_by_content() {
        let a = FormulaText::new("1+2").unwrap();
        let b = FormulaText::new("1+2=").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn builder_accumulates_fragments() {
        let mut builder = FormulaBuilder::new();
        builder.append("12+5");
        builder.append("-6");
        assert_eq!(builder.build().unwrap().get(), "12+5-6=");
    }

    #[test]
    fn builder_locks_on_terminator() {
        let mut builder = FormulaBuilder::new();
        builder.append("1+2=");
        assert!(builder.is_locked());
        builder.append("+3");
        assert_eq!(builder.build().unwrap().get(), "1+2=");
    }

    #[test]
    fn builder_build_does_not_consume() {
        let mut builder = FormulaBuilder::new();
        builder.append("7*3");
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first, second);

        builder.append("+1");
        assert_eq!(builder.build().unwrap().get(), "7*3+1=");
    }

    #[test]
    fn empty_builder_fails_to_build() {
        let builder = FormulaBuilder::new();
        assert_eq!(builder.build(), Err(Error::EmptyFormula));
    }

    #[test]
    fn serde_round_trip_is_verbatim() {
        let formula = FormulaText::new("6+3+9(3*9)+2").unwrap();
        let json = serde_json::to_string(&formula).unwrap();
        assert_eq!(json, "\"6+3+9(3*9)+2=\"");
        let back: FormulaText = serde_json::from_str(&json).unwrap();
        assert_eq!(back, formula);
    }

    #[test]
    fn deserialization_normalizes_missing_terminator() {
        let formula: FormulaText = serde_json::from_str("\"1+2\"").unwrap();
        assert_eq!(formula.get(), "1+2=");
    }
}
