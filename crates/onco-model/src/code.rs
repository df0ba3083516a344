//! Canonical code identifiers.

use serde::{Deserialize, Serialize};

/// A canonical code assigned to a term by the controlled vocabulary.
///
/// The extraction job emits plain integer concept codes, while topography
/// and legacy identifiers are strings; both shapes appear in the same
/// tables. Codes are not globally unique across entities — a
/// [`RecordKey`](crate::RecordKey) disambiguates.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Code {
    /// Integer concept code (e.g. `4029680`).
    Integer(i64),
    /// String identifier (e.g. `"C49.9"`).
    Text(String),
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Code {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for Code {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
