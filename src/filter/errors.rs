//! Filter validation errors
//!
//! Construction fails fast: an invalid parameter rejects the whole filter
//! before any record is evaluated.

use thiserror::Error;

/// Result type for filter construction
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors raised while building a filter from query parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// A recognized parameter carried an unusable value
    #[error("invalid filter parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// A parameter name outside the supported filter set
    #[error("unknown filter parameter '{0}'")]
    UnknownParam(String),

    /// min_length and max_length describe an empty range
    #[error("min_length {min} cannot be greater than max_length {max}")]
    EmptyRange { min: usize, max: usize },
}

impl FilterError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParam {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
