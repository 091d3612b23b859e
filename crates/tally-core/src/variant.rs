//! Parser variant tags
//!
//! The two supported evaluation orderings. The variants are stateless value
//! objects: copy them freely, no registry or shared instance is involved.

use crate::error::{Error, Result};
use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which evaluation ordering produced (or should produce) a result.
///
/// Persisted as a stable integer tag, see [`ParserVariant::tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParserVariant {
    /// Strict left-to-right evaluation; `2+3*4` is 20.
    Sequential,
    /// Multiply and divide before plus and minus; `2+3*4` is 14.
    Precedence,
}

impl ParserVariant {
    /// The stable persistence tag: 0 = Sequential, 1 = Precedence.
    pub fn tag(&self) -> u8 {
        match self {
            ParserVariant::Sequential => 0,
            ParserVariant::Precedence => 1,
        }
    }

    /// Reconstruct a variant from its persistence tag.
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(ParserVariant::Sequential),
            1 => Ok(ParserVariant::Precedence),
            other => Err(Error::UnknownVariantTag(other)),
        }
    }

    /// Human-readable variant name.
    pub fn name(&self) -> &'static str {
        match self {
            ParserVariant::Sequential => "sequential",
            ParserVariant::Precedence => "precedence",
        }
    }
}

impl fmt::Display for ParserVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ParserVariant {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.tag())
    }
}

impl<'de> Deserialize<'de> for ParserVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = u8::deserialize(deserializer)?;
        ParserVariant::from_tag(tag).map_err(D::Error::custom)
    }
}
