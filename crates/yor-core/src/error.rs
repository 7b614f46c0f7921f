use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to encode report as JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write report to {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown tag group: {0}")]
    UnknownTagGroup(String),
}
