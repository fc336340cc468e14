//! Error types for loading collections and executing requests

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failures of the collection store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The collection document does not exist.
    #[error("collection not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The document is malformed or has an incompatible shape.
    #[error("invalid collection document {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the document failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of a single request execution.
///
/// Kept cloneable so a failed attempt can sit in the session state and be
/// rendered like any other result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecuteError {
    /// Transport-level failure: DNS, refused connection, TLS, invalid URL.
    #[error("network error: {0}")]
    Network(String),

    /// No complete response within the fixed timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

pub type StoreResult<T> = Result<T, StoreError>;
