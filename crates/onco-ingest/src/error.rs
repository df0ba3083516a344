#![deny(unsafe_code)]

use std::path::PathBuf;

/// Errors raised while loading input tables.
///
/// Any of these during startup is fatal: the process must not begin
/// serving over a partially built vocabulary or index.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
