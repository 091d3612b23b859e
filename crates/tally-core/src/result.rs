//! Calculation result storage

use serde::{Deserialize, Serialize};
use std::fmt;

/// The immutable numeric result of a completed evaluation.
///
/// Produced only as the terminal artifact of a successful evaluation or when
/// reconstituting persisted history. The wrapped value is write-once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultValue(f64);

impl ResultValue {
    /// Wrap a computed result.
    pub fn new(value: f64) -> Self {
        ResultValue(value)
    }

    /// The stored result.
    pub fn get(&self) -> f64 {
        self.0
    }

    /// Stored results cannot be overwritten.
    ///
    /// # Panics
    /// Always. Calling this is a programming error, not a runtime condition.
    pub fn set(&mut self, _value: f64) {
        panic!("ResultValue is write-once; stored results cannot be overwritten");
    }
}

impl From<ResultValue> for f64 {
    fn from(result: ResultValue) -> f64 {
        result.0
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stores_and_returns_value() {
        let result = ResultValue::new(38.0);
        assert_eq!(result.get(), 38.0);
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(ResultValue::new(105.0), ResultValue::new(105.0));
        assert_ne!(ResultValue::new(105.0), ResultValue::new(-3.0));
    }

    #[test]
    #[should_panic(expected = "write-once")]
    fn set_always_panics() {
        let mut result = ResultValue::new(1.0);
        result.set(2.0);
    }

    #[test]
    fn displays_as_plain_decimal() {
        assert_eq!(ResultValue::new(-3.0).to_string(), "-3");
        assert_eq!(ResultValue::new(0.3).to_string(), "0.3");
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&ResultValue::new(38.0)).unwrap();
        assert_eq!(json, "38.0");
        let back: ResultValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ResultValue::new(38.0));
    }
}
