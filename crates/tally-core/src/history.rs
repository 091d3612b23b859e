//! Calculation history entries
//!
//! The persistence layer stores one row per completed calculation. This type
//! is the boundary contract only: the storage itself lives outside the
//! engine.

use crate::error::{Error, Result};
use crate::formula::FormulaText;
use crate::result::ResultValue;
use crate::variant::ParserVariant;
use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One persisted calculation: the formula, its result, and which parser
/// variant produced it.
///
/// Serializes the formula as its verbatim string, the result as its numeric
/// value, and the variant as its integer tag, so a relational row maps onto
/// it field for field. Reconstitution re-validates the id invariant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    id: i64,
    formula: FormulaText,
    result: ResultValue,
    variant: ParserVariant,
}

impl HistoryEntry {
    /// Id of an entry that has not been stored yet.
    pub const NEW_ID: i64 = -1;

    /// Create an entry. `id` is the storage row id, or [`Self::NEW_ID`] for
    /// an entry that has not been inserted yet.
    ///
    /// Fails with [`Error::InvalidHistoryId`] when `id` is below the
    /// new-entry sentinel.
    pub fn new(
        id: i64,
        formula: FormulaText,
        result: ResultValue,
        variant: ParserVariant,
    ) -> Result<Self> {
        if id < Self::NEW_ID {
            return Err(Error::InvalidHistoryId(id));
        }
        Ok(HistoryEntry {
            id,
            formula,
            result,
            variant,
        })
    }

    /// The storage row id, or [`Self::NEW_ID`].
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The formula that was evaluated.
    pub fn formula(&self) -> &FormulaText {
        &self.formula
    }

    /// The evaluation result.
    pub fn result(&self) -> ResultValue {
        self.result
    }

    /// The variant that produced the result.
    pub fn variant(&self) -> ParserVariant {
        self.variant
    }

    /// Whether this entry still awaits insertion.
    pub fn is_new(&self) -> bool {
        self.id == Self::NEW_ID
    }

    /// The same entry under the id storage assigned to it.
    pub fn with_id(self, id: i64) -> Result<Self> {
        HistoryEntry::new(id, self.formula, self.result, self.variant)
    }
}

impl<'de> Deserialize<'de> for HistoryEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            id: i64,
            formula: FormulaText,
            result: ResultValue,
            variant: ParserVariant,
        }

        let raw = Raw::deserialize(deserializer)?;
        HistoryEntry::new(raw.id, raw.formula, raw.result, raw.variant).map_err(D::Error::custom)
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}{}", self.variant, self.formula, self.result)
    }
}
