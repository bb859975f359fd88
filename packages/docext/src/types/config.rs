//! Configuration types for fetching and extraction.

use std::path::PathBuf;
use std::time::Duration;

/// Default outbound request timeout.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Default cap on a fetched document body (50 MiB).
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 50 * 1024 * 1024;

/// Default `User-Agent` sent with every fetch.
pub const DEFAULT_USER_AGENT: &str = concat!("docext/", env!("CARGO_PKG_VERSION"));

/// Configuration for the extraction service.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Timeout for the whole outbound request, body included.
    ///
    /// Default: 30 seconds.
    pub fetch_timeout: Duration,

    /// Reject documents larger than this many bytes (`None` = unlimited).
    ///
    /// Default: 50 MiB.
    pub max_document_bytes: Option<u64>,

    /// `User-Agent` header for outbound requests.
    pub user_agent: String,

    /// Directory for DOCX staging files. `None` uses the OS temp dir.
    pub staging_dir: Option<PathBuf>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            max_document_bytes: Some(DEFAULT_MAX_DOCUMENT_BYTES),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            staging_dir: None,
        }
    }
}

impl ExtractionConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Set the maximum document size.
    pub fn with_max_document_bytes(mut self, limit: Option<u64>) -> Self {
        self.max_document_bytes = limit;
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the DOCX staging directory.
    pub fn with_staging_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_dir = Some(dir.into());
        self
    }
}
