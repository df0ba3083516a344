//! Fuzzy term matching over the vocabulary.

use std::cmp::Ordering;

use onco_model::{Code, VocabularyStore, normalize};

use crate::score::token_set_ratio;

/// Maximum number of candidates considered per query, before the
/// threshold cut.
pub const MAX_CANDIDATES: usize = 10;

/// A vocabulary term matched against a query.
#[derive(Debug, Clone)]
pub struct TermMatch {
    /// Original vocabulary term.
    pub term: String,
    /// Token-set similarity score in `[0, 100]`.
    pub score: f64,
    /// Codes registered for the term.
    pub codes: Vec<Code>,
}

/// Scores free text against the vocabulary terms.
///
/// Normalized terms are precomputed at construction so each call only
/// normalizes the query. Entries keep the store's sorted term order,
/// which is the documented tie order of equal-score candidates.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    entries: Vec<MatcherEntry>,
}

#[derive(Debug, Clone)]
struct MatcherEntry {
    term: String,
    normalized: String,
    codes: Vec<Code>,
}

impl TermMatcher {
    /// Prepares the matcher from the store's term table.
    ///
    /// Terms normalizing to the empty string can never match and are
    /// dropped up front.
    pub fn new(store: &VocabularyStore) -> Self {
        let entries = store
            .term_codes()
            .iter()
            .filter_map(|(term, codes)| {
                let normalized = normalize(term);
                if normalized.is_empty() {
                    return None;
                }
                Some(MatcherEntry {
                    term: term.clone(),
                    normalized,
                    codes: codes.clone(),
                })
            })
            .collect();
        Self { entries }
    }

    /// Number of matchable terms.
    pub fn term_count(&self) -> usize {
        self.entries.len()
    }

    /// Matches free text against the vocabulary.
    ///
    /// The top [`MAX_CANDIDATES`] terms by token-set score are selected,
    /// then candidates below the threshold are dropped. A query that
    /// normalizes to the empty string matches nothing.
    pub fn match_terms(&self, query: &str, threshold: u8) -> Vec<TermMatch> {
        let normalized_query = normalize(query);
        if normalized_query.is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &MatcherEntry)> = self
            .entries
            .iter()
            .map(|entry| (token_set_ratio(&normalized_query, &entry.normalized), entry))
            .collect();
        // Stable sort keeps vocabulary order between equal scores.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored.truncate(MAX_CANDIDATES);

        scored
            .into_iter()
            .filter(|(score, _)| *score >= f64::from(threshold))
            .map(|(score, entry)| TermMatch {
                term: entry.term.clone(),
                score,
                codes: entry.codes.clone(),
            })
            .collect()
    }
}

/// Flattens matched codes, keeping descending score order.
pub fn matched_codes(matches: &[TermMatch]) -> Vec<Code> {
    matches
        .iter()
        .flat_map(|candidate| candidate.codes.iter().cloned())
        .collect()
}

/// Matched terms in descending score order.
pub fn matched_terms(matches: &[TermMatch]) -> Vec<String> {
    matches
        .iter()
        .map(|candidate| candidate.term.clone())
        .collect()
}
