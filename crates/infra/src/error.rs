use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("inventory file {} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode JSON from {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode inventory: {0}")]
    Encode(#[source] serde_json::Error),

    /// In-memory storage lock poisoned by a panicking writer.
    #[error("stock repository lock poisoned")]
    Poisoned,
}
