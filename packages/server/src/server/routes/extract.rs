use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use docext::{ExtractedText, ExtractionRequest};

use crate::server::app::AppState;
use crate::server::error::ApiError;

/// Extract text from the document at `fileUrl`
///
/// - 200 `{text, character_count}` on success
/// - 400 `{detail}` for invalid URLs, unsupported types and malformed documents
/// - 500 `{detail}` for fetch failures and anything unexpected
/// - 4xx `{detail}` when the body is not `{"fileUrl": string}` JSON
pub async fn extract_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExtractionRequest>, JsonRejection>,
) -> Result<Json<ExtractedText>, ApiError> {
    let Json(request) = payload?;
    tracing::info!(url = %request.file_url, "Extracting text from URL");

    let extracted = state.extraction.extract(&request.file_url).await?;

    tracing::info!(
        url = %request.file_url,
        characters = extracted.character_count,
        "Successfully extracted text"
    );
    Ok(Json(extracted))
}
