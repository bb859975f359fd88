use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    status: &'static str,
    message: &'static str,
    version: &'static str,
}

/// Liveness endpoint
///
/// Always returns 200 OK. No dependencies are checked.
pub async fn status_handler() -> Json<StatusResponse> {
    tracing::info!("Status endpoint called");

    Json(StatusResponse {
        status: "ok",
        message: "Document Extractor API is alive and kicking!",
        version: env!("CARGO_PKG_VERSION"),
    })
}
