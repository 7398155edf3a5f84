//! HTTP API layer
//!
//! Axum router exposing the string analysis endpoints over a shared record
//! store and a pluggable natural-language translator.

mod config;
mod errors;
mod response;
mod server;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use response::{InterpretedQuery, ListResponse, NlListResponse};
pub use server::ApiServer;
