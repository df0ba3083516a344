//! Input table loading for the vocabulary resolution engine.
//!
//! Loads the four tables the out-of-scope extraction job produces: the
//! diagnosis dataset CSV, the topography classification CSV, and the
//! term→code / code→record JSON tables. Unreadable inputs are fatal;
//! incomplete rows are skipped and counted.

pub mod error;
pub mod loaders;

pub use error::{IngestError, Result};
pub use loaders::{
    load_diagnosis_entries, load_record_rows, load_term_table, load_topography_rows,
};
