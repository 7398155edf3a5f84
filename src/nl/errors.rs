//! Translation errors

use thiserror::Error;

/// Result type for phrase translation
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Errors raised while translating a natural-language phrase
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The phrase was empty or whitespace-only
    #[error("query must not be empty")]
    EmptyQuery,

    /// No translation rule matched the phrase
    #[error("unable to interpret query: {0}")]
    Unrecognized(String),
}
