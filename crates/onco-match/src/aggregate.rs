//! Aggregation of fuzzy matches by shared-word overlap.

use std::collections::{BTreeMap, BTreeSet};

use onco_model::{Code, VocabularyStore, normalize};

use crate::matcher::TermMatch;

/// A match annotated with the variable metadata of its term.
#[derive(Debug, Clone)]
pub struct AnnotatedMatch {
    /// Token-set similarity score of the underlying match.
    pub score: f64,
    /// Variable the term belongs to.
    pub variable_name: String,
    /// Owning entity.
    pub entity: String,
    /// Canonical term from the record.
    pub term: String,
    /// Canonical code from the record.
    pub code: Code,
}

/// Groups matches by the words shared between query and matched term.
///
/// The group key is the sorted intersection of whitespace tokens of the
/// normalized query and the normalized matched term, joined by single
/// spaces — the words that justified the match. Matches below the
/// threshold are dropped; a matched term with no resolvable record is
/// skipped rather than failing the request.
pub fn aggregate(
    query: &str,
    matches: &[TermMatch],
    store: &VocabularyStore,
    threshold: u8,
) -> BTreeMap<String, Vec<AnnotatedMatch>> {
    let normalized_query = normalize(query);
    let query_tokens: BTreeSet<&str> = normalized_query.split_whitespace().collect();

    let mut groups: BTreeMap<String, Vec<AnnotatedMatch>> = BTreeMap::new();
    for candidate in matches {
        if candidate.score < f64::from(threshold) {
            continue;
        }
        let normalized_term = normalize(&candidate.term);
        let Some(record) = store.record_for_term(&normalized_term) else {
            tracing::debug!(term = %candidate.term, "matched term has no record, skipping");
            continue;
        };
        let shared: BTreeSet<&str> = normalized_term
            .split_whitespace()
            .filter(|token| query_tokens.contains(token))
            .collect();
        let key = shared.into_iter().collect::<Vec<_>>().join(" ");
        groups.entry(key).or_default().push(AnnotatedMatch {
            score: candidate.score,
            variable_name: record.variable_name.clone(),
            entity: record.entity.clone(),
            term: record.term.clone(),
            code: record.code.clone(),
        });
    }
    groups
}
