//! Core data model for the diagnosis vocabulary resolution engine.
//!
//! Everything here is plain data: codes, variable records and their
//! composite keys, the immutable [`VocabularyStore`], topography
//! classification types and the shared text normalization policy.
//! Loading lives in `onco-ingest`; matching and indexing logic live in
//! `onco-match` and `onco-topography`.

pub mod code;
pub mod dataset;
pub mod record;
pub mod text;
pub mod topography;
pub mod vocabulary;

pub use code::Code;
pub use dataset::DiagnosisEntry;
pub use record::{RecordKey, RecordRow, VariableRecord};
pub use text::normalize;
pub use topography::{CodeRangeRule, FilterOptions, TopographyAttribute, TopographyRow};
pub use vocabulary::VocabularyStore;
