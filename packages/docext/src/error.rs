//! Typed errors for the document extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can map each
//! failure class onto a response without string matching.

use thiserror::Error;

/// Errors that can occur while turning a document URL into text.
#[derive(Debug, Error)]
pub enum DocextError {
    /// The source document could not be fetched
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The requested URL is empty or not an http(s) URL
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Neither the URL suffix nor the content type names a supported format
    #[error("unsupported document type for {url} (content type: {content_type:?})")]
    UnsupportedType {
        url: String,
        content_type: Option<String>,
    },

    /// The parser rejected the document bytes
    #[error(transparent)]
    Extraction(ExtractionError),

    /// Anything else (staging I/O, a panicked parser task)
    #[error("unexpected error: {0}")]
    Unexpected(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DocextError {
    /// Whether the failure was caused by the request or the document itself
    /// rather than by the service or the network.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DocextError::InvalidUrl { .. }
                | DocextError::UnsupportedType { .. }
                | DocextError::Extraction(_)
        )
    }
}

// Staging failures are not the document's fault, so they are reported as
// unexpected instead of as a parse rejection.
impl From<ExtractionError> for DocextError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::Staging(e) => DocextError::Unexpected(Box::new(e)),
            other => DocextError::Extraction(other),
        }
    }
}

/// Errors that can occur while fetching a document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connection refused, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server answered with a non-2xx status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The request did not complete within the configured timeout
    #[error("timeout fetching: {url}")]
    Timeout { url: String },

    /// The response body is larger than the configured limit
    #[error("document exceeds {limit} bytes")]
    TooLarge { limit: u64 },
}

/// Errors raised by a document parser.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF extraction failed")]
    Pdf(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("DOCX extraction failed")]
    Docx(#[source] std::io::Error),

    /// Writing the staging file failed before the parser ran
    #[error("failed to stage document: {0}")]
    Staging(#[source] std::io::Error),
}

/// Result type alias for extraction service operations.
pub type Result<T> = std::result::Result<T, DocextError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for parser operations.
pub type ExtractResult<T> = std::result::Result<T, ExtractionError>;
