//! Store error types.
//!
//! The taxonomy is deliberately closed: anything the backend can fail with
//! surfaces as [`StoreError::Backend`], and row absence is expressed through
//! `Option` on the read methods rather than an error variant.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store adapter errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The underlying storage backend failed
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}
