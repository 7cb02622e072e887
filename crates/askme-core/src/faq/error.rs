use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the FAQ document.
///
/// All of them are startup-fatal: the service cannot answer anything without a corpus.
#[derive(Debug, Error)]
pub enum FaqError {
    #[error("failed to read FAQ file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse FAQ document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("FAQ document contains no entries")]
    Empty,

    #[error("invalid FAQ id '{key}': ids must be integers >= 1")]
    InvalidId { key: String },

    #[error("FAQ id {id} appears more than once")]
    DuplicateId { id: u32 },

    #[error("FAQ question {id} has no answer")]
    MissingAnswer { id: u32 },

    #[error("FAQ answer '{key}' has no matching question")]
    OrphanAnswer { key: String },

    #[error("FAQ ids must be dense starting at 1: expected {expected}, found {found}")]
    NonDenseIds { expected: u32, found: u32 },
}
