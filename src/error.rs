use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort an extraction run.
///
/// Dangling `parent`/`ref` names are not errors; they resolve to empty values.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize bean report: {0}")]
    Report(#[from] serde_json::Error),
}
