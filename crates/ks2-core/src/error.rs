//! Store error types.
//!
//! Everything else in this crate is total over its input domain; the only
//! failures worth a type are the ones the backing key-value store reports.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading or writing a [`KeyValueStore`](crate::store::KeyValueStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read, written or removed.
    #[error("store I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized before writing.
    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The key contains characters that cannot name a storage slot.
    #[error("invalid store key: {0}")]
    InvalidKey(String),
}

impl StoreError {
    /// Returns `true` if the failure came from the filesystem.
    pub fn is_io(&self) -> bool {
        matches!(self, StoreError::Io { .. })
    }
}
