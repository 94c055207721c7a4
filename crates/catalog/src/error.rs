use std::path::PathBuf;

use thiserror::Error;

/// Fatal catalog loading failure.
///
/// Any of these aborts application startup; there is no partial catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
