//! The startup-built search context.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use onco_match::{
    AnnotatedMatch, TermMatcher, aggregate, matched_codes, matched_terms, partial_score,
};
use onco_model::{Code, DiagnosisEntry, FilterOptions, TopographyRow, VocabularyStore, normalize};
use onco_topography::{TopographyFilter, TopographyIndex};

use crate::response::{DISPLAY_LIMIT, SearchHit, SearchRequest, SearchResponse};

/// Resolution of free clinical text against the vocabulary.
#[derive(Debug)]
pub struct Resolution {
    /// Matched codes, flattened in descending score order.
    pub codes: Vec<Code>,
    /// Matched vocabulary terms in the same order.
    pub terms: Vec<String>,
    /// Matches grouped by the words shared with the query.
    pub groups: BTreeMap<String, Vec<AnnotatedMatch>>,
}

/// The vocabulary resolution context.
///
/// Owns the diagnosis dataset, vocabulary store, prepared matcher and
/// topography index. Built once during the startup phase; every request
/// path takes `&self`, so concurrent callers share the instance without
/// coordination.
pub struct SearchService {
    entries: Vec<DiagnosisEntry>,
    vocabulary: VocabularyStore,
    matcher: TermMatcher,
    index: TopographyIndex,
}

impl SearchService {
    /// Builds the context from loaded tables.
    pub fn new(
        entries: Vec<DiagnosisEntry>,
        vocabulary: VocabularyStore,
        topography_rows: &[TopographyRow],
    ) -> Self {
        let index = TopographyIndex::build(
            topography_rows,
            entries.iter().map(|entry| entry.topography.as_str()),
        );
        let matcher = TermMatcher::new(&vocabulary);
        Self {
            entries,
            vocabulary,
            matcher,
            index,
        }
    }

    /// Number of dataset entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of distinct codes covered by the topography lookup.
    pub fn indexed_code_count(&self) -> usize {
        self.index.code_count()
    }

    /// Cascading filter options for selection UIs.
    pub fn filters(&self) -> &FilterOptions {
        self.index.filter_options()
    }

    /// Searches the diagnosis dataset.
    ///
    /// Applies the topography filter first, then fuzzy name matching when
    /// a query is present. With neither a query nor a constraint no
    /// search is performed and the response is explicitly empty.
    pub fn search(&self, request: &SearchRequest) -> SearchResponse {
        let query = request.query.trim();
        let filter = TopographyFilter {
            macrogrouping: request.macrogrouping.trim().to_string(),
            group: request.group.trim().to_string(),
            site: request.site.trim().to_string(),
        };
        if query.is_empty() && filter.is_empty() {
            return SearchResponse::empty();
        }

        let working = self.index.filter_entries(&self.entries, &filter);

        let mut results: Vec<SearchHit> = if query.is_empty() {
            working
                .iter()
                .map(|entry| SearchHit {
                    id: entry.id.clone(),
                    name: entry.name.clone(),
                    score: None,
                })
                .collect()
        } else {
            score_names(&working, query, request.threshold)
        };

        let total = results.len();
        let ids: Vec<String> = results.iter().map(|hit| hit.id.clone()).collect();
        let ids_csv = ids.join(",");
        let truncated = total > DISPLAY_LIMIT;
        results.truncate(DISPLAY_LIMIT);
        tracing::debug!(total, truncated, "search complete");

        SearchResponse {
            total,
            truncated,
            ids,
            ids_csv,
            results,
        }
    }

    /// Resolves free clinical text to vocabulary codes, with the
    /// word-overlap explanation groups.
    pub fn resolve(&self, text: &str, threshold: u8) -> Resolution {
        let matches = self.matcher.match_terms(text, threshold);
        let groups = aggregate(text, &matches, &self.vocabulary, threshold);
        Resolution {
            codes: matched_codes(&matches),
            terms: matched_terms(&matches),
            groups,
        }
    }
}

/// Scores the filtered entries' names against the query.
///
/// A query that normalizes to the empty string matches nothing rather
/// than degenerating every similarity score.
fn score_names(working: &[&DiagnosisEntry], query: &str, threshold: u8) -> Vec<SearchHit> {
    let normalized_query = normalize(query);
    if normalized_query.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit> = working
        .iter()
        .filter_map(|entry| {
            let score = partial_score(&normalized_query, &normalize(&entry.name));
            (score >= f64::from(threshold)).then(|| SearchHit {
                id: entry.id.clone(),
                name: entry.name.clone(),
                score: Some(round_one_decimal(score)),
            })
        })
        .collect();
    // Stable sort keeps dataset order between equal scores.
    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    hits
}

fn round_one_decimal(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}
