//! Collaborator error types.

use thiserror::Error;

/// A remote document read or write failed.
///
/// Local in-memory state has already been applied by the time this is
/// surfaced; callers report it ("saved locally, sync pending") and may
/// retry the remote write. It never unwinds the local change.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteSyncError {
    /// The document service could not be reached.
    #[error("document store unavailable")]
    Unavailable,

    /// The document service rejected the operation.
    #[error("document store rejected the operation: {0}")]
    Rejected(String),
}

/// A browser-local key-value write failed (quota, serialization).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocalStoreError {
    /// The value could not be stored under the given key.
    #[error("local store write failed for key {key}: {reason}")]
    Write {
        /// Key the write was addressed to.
        key: String,
        /// Store-provided reason.
        reason: String,
    },
}
