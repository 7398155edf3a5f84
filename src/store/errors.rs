//! Record store errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by record store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record with the same value (equivalently, the same content hash)
    /// already exists
    #[error("string already exists in the store (hash {hash})")]
    Duplicate { hash: String },

    /// No record exists for the requested value or hash
    #[error("string does not exist in the store")]
    NotFound,
}
