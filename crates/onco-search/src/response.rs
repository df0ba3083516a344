//! Serializable search request/response types.

use serde::{Deserialize, Serialize};

/// Display cap for result rows; `ids` always carries the full match set.
pub const DISPLAY_LIMIT: usize = 500;

/// A search request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    /// Free-text query matched against diagnosis names; empty means
    /// "filter only".
    #[serde(default)]
    pub query: String,
    /// Minimum fuzzy score (0–100) for name matches.
    #[serde(default)]
    pub threshold: u8,
    /// Required macrogrouping, or empty.
    #[serde(default)]
    pub macrogrouping: String,
    /// Required group, or empty.
    #[serde(default)]
    pub group: String,
    /// Required site, or empty.
    #[serde(default)]
    pub site: String,
}

/// One result row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// Dataset identifier.
    pub id: String,
    /// Diagnosis name.
    pub name: String,
    /// Fuzzy score rounded to one decimal; absent for filter-only
    /// searches.
    pub score: Option<f64>,
}

/// Search response.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// Full match count, independent of the display cap.
    pub total: usize,
    /// True when `total` exceeds the display cap.
    pub truncated: bool,
    /// All matching ids.
    pub ids: Vec<String>,
    /// Comma-joined ids for clipboard-style consumers.
    pub ids_csv: String,
    /// Up to [`DISPLAY_LIMIT`] result rows.
    pub results: Vec<SearchHit>,
}

impl SearchResponse {
    /// Response for "no search performed".
    pub fn empty() -> Self {
        Self {
            total: 0,
            truncated: false,
            ids: Vec::new(),
            ids_csv: String::new(),
            results: Vec::new(),
        }
    }
}
