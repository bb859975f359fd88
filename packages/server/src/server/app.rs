//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use docext::ExtractionService;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{AllowedOrigins, Config};
use crate::server::routes::{extract_handler, status_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub extraction: Arc<ExtractionService>,
}

/// CORS layer for the configured allow-list
///
/// `*` allows any origin, method and header without credentials (browsers
/// reject a wildcard origin with credentials). An explicit list mirrors the
/// requested method and headers and allows credentials.
pub fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    match origins {
        AllowedOrigins::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        AllowedOrigins::List(list) => {
            let origins: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        }
    }
}

/// Build the Axum application router
///
/// All configuration arrives through `config`; the extraction service is
/// passed in so tests can supply one backed by a mock fetcher.
pub fn build_app(config: &Config, extraction: Arc<ExtractionService>) -> Router {
    let state = AppState { extraction };

    Router::new()
        .route("/status", get(status_handler))
        .route("/extract", post(extract_handler))
        .with_state(state)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
}
