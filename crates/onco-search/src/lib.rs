//! Search service over the vocabulary and topography index.
//!
//! [`SearchService`] is the explicit context object built once at
//! startup: it owns the diagnosis dataset, the vocabulary store, the
//! prepared matcher and the topography index, and exposes the read-only
//! operations collaborators (an HTTP adapter, the CLI) call per request.

pub mod response;
pub mod service;

pub use response::{DISPLAY_LIMIT, SearchHit, SearchRequest, SearchResponse};
pub use service::{Resolution, SearchService};
