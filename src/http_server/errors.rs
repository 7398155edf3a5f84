//! API error taxonomy
//!
//! Every core error is terminal for its request and surfaces directly as
//! an HTTP status; nothing is silently recovered or retried.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::filter::FilterError;
use crate::nl::TranslateError;
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API-facing errors with their HTTP status mapping
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request body had no 'value' field
    #[error("missing 'value' field")]
    MissingValue,

    /// Request body was not a JSON object
    #[error("request body must be a JSON object")]
    InvalidBody,

    /// The 'value' field was present but not a string
    #[error("'value' must be a string")]
    InvalidValueType,

    /// Store-level failure (duplicate or missing record)
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Malformed filter parameter
    #[error("{0}")]
    Filter(#[from] FilterError),

    /// Natural-language phrase could not be translated
    #[error("{0}")]
    Translate(#[from] TranslateError),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingValue => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody => StatusCode::BAD_REQUEST,
            ApiError::InvalidValueType => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(StoreError::Duplicate { .. }) => StatusCode::CONFLICT,
            ApiError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Filter(_) => StatusCode::BAD_REQUEST,
            ApiError::Translate(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MissingValue.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidValueType.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Store(StoreError::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Store(StoreError::Duplicate {
                hash: "h".to_string()
            })
            .status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_filter_and_translate_errors_map_to_bad_request() {
        let filter_err = ApiError::from(FilterError::UnknownParam("x".to_string()));
        assert_eq!(filter_err.status_code(), StatusCode::BAD_REQUEST);

        let translate_err = ApiError::from(TranslateError::EmptyQuery);
        assert_eq!(translate_err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_response_body() {
        let body = ErrorResponse::from(ApiError::MissingValue);
        assert_eq!(body.code, 400);
        assert!(body.error.contains("value"));
    }
}
