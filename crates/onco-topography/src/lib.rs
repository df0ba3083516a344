//! ICD-O topography code handling.
//!
//! Expands compact code range expressions into exact/prefix match rules
//! and builds the hierarchical index behind cascading macrogrouping →
//! group → site filters.

pub mod expand;
pub mod index;

pub use expand::{expand, matches_any};
pub use index::{TopographyFilter, TopographyIndex};
