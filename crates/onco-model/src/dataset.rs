//! Diagnosis dataset entries.

use serde::{Deserialize, Serialize};

/// One row of the diagnosis dataset the search operates over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisEntry {
    /// Identifier returned to callers (e.g. an OMOP concept id).
    pub id: String,
    /// Observed ICD-O topography code; may be empty.
    pub topography: String,
    /// Display name matched against free-text queries.
    pub name: String,
}
