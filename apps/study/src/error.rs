//! Application error types.
//!
//! Only `Load` and `Session` errors are user-visible; `OutOfRange` and
//! `NoActiveSession` guard internal cursor invariants and are logged by the
//! controller rather than shown.

use thiserror::Error;

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Dataset load failure. Fatal to the session; rendered to the user with no
/// automatic retry.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage port failure.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Session(#[from] vocab_core::SessionError),

    #[error("set index {index} out of range ({count} sets)")]
    OutOfRange { index: usize, count: usize },

    #[error("no active practice session")]
    NoActiveSession,
}
