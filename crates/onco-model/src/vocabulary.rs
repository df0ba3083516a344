//! The in-memory controlled vocabulary.

use std::collections::BTreeMap;

use crate::Code;
use crate::record::{RecordKey, RecordRow, VariableRecord};
use crate::text::normalize;

/// Immutable store over the two vocabulary tables.
///
/// Built once at startup from the extraction job's term→code and
/// code→record tables. Request handlers share it by reference without
/// coordination; no mutating method is exposed after construction.
#[derive(Debug, Clone, Default)]
pub struct VocabularyStore {
    term_codes: BTreeMap<String, Vec<Code>>,
    records: BTreeMap<RecordKey, VariableRecord>,
    records_by_term: BTreeMap<String, RecordKey>,
}

impl VocabularyStore {
    /// Builds the store from the two input tables.
    ///
    /// Entity normalization runs before record keys are built (see
    /// [`RecordRow::into_keyed_record`]). Rows producing the same key
    /// overwrite earlier ones. The reverse index maps each normalized term
    /// to the first record in key order carrying it; later records with
    /// the same normalized term keep their keyed entry but do not win the
    /// term lookup.
    pub fn from_tables(
        term_codes: BTreeMap<String, Vec<Code>>,
        record_rows: Vec<RecordRow>,
    ) -> Self {
        let mut records = BTreeMap::new();
        for row in record_rows {
            let (key, record) = row.into_keyed_record();
            records.insert(key, record);
        }

        let mut records_by_term: BTreeMap<String, RecordKey> = BTreeMap::new();
        for key in records.keys() {
            let normalized = normalize(&key.term);
            if normalized.is_empty() {
                continue;
            }
            records_by_term
                .entry(normalized)
                .or_insert_with(|| key.clone());
        }

        Self {
            term_codes,
            records,
            records_by_term,
        }
    }

    /// Term→codes mapping, iterated in sorted term order.
    pub fn term_codes(&self) -> &BTreeMap<String, Vec<Code>> {
        &self.term_codes
    }

    /// Codes registered for an exact (un-normalized) term.
    pub fn codes_for_term(&self, term: &str) -> Option<&[Code]> {
        self.term_codes.get(term).map(Vec::as_slice)
    }

    /// Resolves a normalized term back to its variable record.
    pub fn record_for_term(&self, normalized_term: &str) -> Option<&VariableRecord> {
        let key = self.records_by_term.get(normalized_term)?;
        self.records.get(key)
    }

    /// All keyed records.
    pub fn records(&self) -> &BTreeMap<RecordKey, VariableRecord> {
        &self.records
    }

    /// Number of vocabulary terms.
    pub fn term_count(&self) -> usize {
        self.term_codes.len()
    }

    /// True when the term table is empty.
    pub fn is_empty(&self) -> bool {
        self.term_codes.is_empty()
    }
}
