//! HTTP API server
//!
//! Axum-based server for the string analysis endpoints. Handlers stay thin:
//! parse, delegate to the store/filter/translator, serialize.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::filter::StringFilter;
use crate::nl::QueryTranslator;
use crate::store::{RecordStore, StringRecord};

use super::config::ServerConfig;
use super::errors::{ApiError, ApiResult};
use super::response::{ListResponse, NlListResponse};

/// API server state: the record store plus the phrase translator
pub struct ApiServer<S: RecordStore, T: QueryTranslator> {
    store: S,
    translator: T,
}

impl<S: RecordStore + 'static, T: QueryTranslator + 'static> ApiServer<S, T> {
    pub fn new(store: S, translator: T) -> Self {
        Self { store, translator }
    }

    /// Build the Axum router
    pub fn router(self, config: &ServerConfig) -> Router {
        // Permissive CORS when no origins are configured (development);
        // otherwise only the configured origins are allowed
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let state = Arc::new(self);

        // The static natural-language segment takes routing priority over
        // the `:value` capture, so that endpoint is never shadowed
        Router::new()
            .route("/health", get(health_handler))
            .route("/strings", get(list_handler).post(create_handler))
            .route(
                "/strings/filter-by-natural-language",
                get(nl_filter_handler),
            )
            .route("/strings/:value", get(get_handler).delete(delete_handler))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(state)
    }

    /// Bind and serve until shutdown
    pub async fn serve(self, config: ServerConfig) -> Result<(), std::io::Error> {
        let addr: SocketAddr = config
            .socket_addr()
            .parse()
            .expect("Invalid socket address");
        let router = self.router(&config);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(address = %addr, "strand HTTP server listening");
        axum::serve(listener, router).await
    }
}

/// Shared state type
type ServerState<S, T> = Arc<ApiServer<S, T>>;

/// Pull the 'value' field out of a request body.
///
/// Distinguishes a missing field (400) from a present field of the wrong
/// type (422).
fn extract_value(body: Value) -> ApiResult<String> {
    let mut map = match body {
        Value::Object(map) => map,
        _ => return Err(ApiError::InvalidBody),
    };
    match map.remove("value") {
        None => Err(ApiError::MissingValue),
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(ApiError::InvalidValueType),
    }
}

/// Liveness probe
async fn health_handler() -> Json<Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// POST /strings — analyze and insert a value
async fn create_handler<S: RecordStore + 'static, T: QueryTranslator + 'static>(
    State(server): State<ServerState<S, T>>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<StringRecord>)> {
    let value = extract_value(body)?;
    let record = server.store.insert(&value)?;

    tracing::info!(hash = %record.id, length = record.properties.length, "string inserted");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /strings — list records, optionally filtered by query parameters
async fn list_handler<S: RecordStore + 'static, T: QueryTranslator + 'static>(
    State(server): State<ServerState<S, T>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<ListResponse>> {
    let filter = StringFilter::parse(&params)?;
    let data = filter.apply(server.store.list_all());

    tracing::debug!(matched = data.len(), "filter applied");
    Ok(Json(ListResponse::new(data, filter)))
}

/// GET /strings/:value — fetch one record by its exact value
async fn get_handler<S: RecordStore + 'static, T: QueryTranslator + 'static>(
    State(server): State<ServerState<S, T>>,
    Path(value): Path<String>,
) -> ApiResult<Json<StringRecord>> {
    let record = server.store.get_by_value(&value)?;
    Ok(Json(record))
}

/// DELETE /strings/:value — remove one record by its exact value
async fn delete_handler<S: RecordStore + 'static, T: QueryTranslator + 'static>(
    State(server): State<ServerState<S, T>>,
    Path(value): Path<String>,
) -> ApiResult<StatusCode> {
    let record = server.store.delete(&value)?;

    tracing::info!(hash = %record.id, "string deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /strings/filter-by-natural-language — translate a phrase, then filter
async fn nl_filter_handler<S: RecordStore + 'static, T: QueryTranslator + 'static>(
    State(server): State<ServerState<S, T>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<NlListResponse>> {
    let phrase = params.get("query").cloned().unwrap_or_default();

    let filter = match server.translator.translate(&phrase) {
        Ok(filter) => filter,
        Err(err) => {
            tracing::debug!(phrase = %phrase, "translation failed");
            return Err(err.into());
        }
    };
    let data = filter.apply(server.store.list_all());

    Ok(Json(NlListResponse::new(data, phrase, filter)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nl::RuleTranslator;
    use crate::store::MemoryStore;

    #[test]
    fn test_router_builds() {
        let server = ApiServer::new(MemoryStore::new(), RuleTranslator::new());
        let _router = server.router(&ServerConfig::default());
    }

    #[test]
    fn test_extract_value() {
        let value = extract_value(serde_json::json!({"value": "hello"})).unwrap();
        assert_eq!(value, "hello");
    }

    #[test]
    fn test_extract_value_missing_field() {
        let err = extract_value(serde_json::json!({})).unwrap_err();
        assert!(matches!(err, ApiError::MissingValue));
    }

    #[test]
    fn test_extract_value_wrong_type() {
        let err = extract_value(serde_json::json!({"value": 123})).unwrap_err();
        assert!(matches!(err, ApiError::InvalidValueType));
    }

    #[test]
    fn test_extract_value_non_object_body() {
        let err = extract_value(serde_json::json!(["value"])).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBody));
    }
}
