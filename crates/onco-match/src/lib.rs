//! Fuzzy lexical matching against the controlled vocabulary.
//!
//! [`TermMatcher`] scores free text against vocabulary terms with a
//! token-set similarity; [`aggregate`] groups the surviving candidates by
//! the words shared with the query and attaches variable/entity metadata,
//! so a curator can see *why* each code was suggested.

pub mod aggregate;
pub mod matcher;
pub mod score;

pub use aggregate::{AnnotatedMatch, aggregate};
pub use matcher::{MAX_CANDIDATES, TermMatch, TermMatcher, matched_codes, matched_terms};
pub use score::{partial_score, token_set_ratio};
