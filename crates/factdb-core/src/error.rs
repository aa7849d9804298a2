// crates/factdb-core/src/error.rs

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FactError>;

/// Errors that can escape factdb-core.
///
/// Malformed numeric text and undecodable language lists are *not*
/// errors; they degrade to fallback values inside the model (see
/// [`crate::numeric::LooseNumber`]). Only missing files, broken payloads
/// and failed lookups surface here.
#[derive(Debug, Error)]
pub enum FactError {
    /// A dataset file or a record could not be found.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    /// The dataset is in a form this build cannot read (e.g. a `.gz`
    /// file without the `compact` feature).
    #[error("unsupported dataset: {0}")]
    Unsupported(String),
}
