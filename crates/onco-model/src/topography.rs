//! Topography classification types.
//!
//! ICD-O-3 topography codes classify anatomical sites hierarchically:
//! macrogrouping → group → site. Source tables describe each hierarchy
//! position with a compact code range expression; `onco-topography`
//! expands those expressions into [`CodeRangeRule`]s and builds the index
//! these types are projected from.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One source row of the topography classification table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopographyRow {
    /// Compact ICD-O-3 code range expression (e.g. `C34.1-34.9`).
    pub icdo3: String,
    /// Narrowest hierarchy level.
    pub site: String,
    /// Middle hierarchy level.
    pub group: String,
    /// Broadest hierarchy level.
    pub macrogrouping: String,
}

/// Position of an observed code within the classification hierarchy.
///
/// A single code may map to several distinct positions; duplicates by
/// value are suppressed when the index is built.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TopographyAttribute {
    /// Broadest hierarchy level.
    pub macrogrouping: String,
    /// Middle hierarchy level.
    pub group: String,
    /// Narrowest hierarchy level.
    pub site: String,
}

/// A single expanded code-range rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRangeRule {
    /// Canonical code with the major part zero-padded to two digits.
    pub code: String,
    /// Prefix rules match the bare major code and all of its decimal
    /// subsites; exact rules match the code alone.
    pub is_prefix: bool,
}

impl CodeRangeRule {
    /// Exact-match rule.
    pub fn exact(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            is_prefix: false,
        }
    }

    /// Prefix-match rule.
    pub fn prefix(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            is_prefix: true,
        }
    }

    /// True when the observed code falls under this rule.
    ///
    /// Prefix rules require the dot separator after the canonical code, so
    /// `C1` never matches `C10` incidentally.
    pub fn matches(&self, observed: &str) -> bool {
        match observed.strip_prefix(self.code.as_str()) {
            Some(rest) => rest.is_empty() || (self.is_prefix && rest.starts_with('.')),
            None => false,
        }
    }
}

/// Cascading filter option sets projected from a built topography index.
///
/// Every group under a macrogrouping and every site under a group is
/// derived from attribute triples actually present in the index — the
/// options are a projection, never hand-authored. All collections are
/// sorted for reproducible filter-menu rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// All non-empty macrogroupings.
    pub macrogroupings: Vec<String>,
    /// Groups available under each macrogrouping.
    pub groups: BTreeMap<String, Vec<String>>,
    /// Sites available under each group.
    pub sites: BTreeMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_rule_matches_only_itself() {
        let rule = CodeRangeRule::exact("C34.1");
        assert!(rule.matches("C34.1"));
        assert!(!rule.matches("C34.10"));
        assert!(!rule.matches("C34"));
    }

    #[test]
    fn prefix_rule_requires_dot_separator() {
        let rule = CodeRangeRule::prefix("C1");
        assert!(rule.matches("C1"));
        assert!(rule.matches("C1.9"));
        assert!(!rule.matches("C10"));
        assert!(!rule.matches("C10.2"));
    }
}
