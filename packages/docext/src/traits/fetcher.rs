//! Fetcher trait for retrieving raw document bytes.
//!
//! The extraction service only needs "give me the bytes and the content type
//! for this URL". Keeping that behind a trait lets tests swap the network for
//! canned responses.
//!
//! # Usage
//!
//! ```rust,ignore
//! use docext::traits::fetcher::Fetcher;
//!
//! let resource = fetcher.fetch("https://example.com/report.pdf").await?;
//! println!("{} bytes, {:?}", resource.bytes.len(), resource.content_type);
//! ```

use async_trait::async_trait;

use crate::error::FetchResult;

/// Raw response for a fetched document.
///
/// Lives for a single request and is never persisted.
#[derive(Debug, Clone)]
pub struct FetchedResource {
    /// URL as requested by the caller
    pub source_url: String,

    /// URL after redirects (equals `source_url` when there were none)
    pub final_url: String,

    /// Response body
    pub bytes: Vec<u8>,

    /// `Content-Type` response header, if present
    pub content_type: Option<String>,
}

impl FetchedResource {
    /// Create a resource with no content type and no redirect.
    pub fn new(url: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let url = url.into();
        Self {
            final_url: url.clone(),
            source_url: url,
            bytes: bytes.into(),
            content_type: None,
        }
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the final URL after redirects.
    pub fn with_final_url(mut self, final_url: impl Into<String>) -> Self {
        self.final_url = final_url.into();
        self
    }

    /// Whether the request was redirected.
    pub fn was_redirected(&self) -> bool {
        self.final_url != self.source_url
    }
}

/// Retrieves a document by URL.
///
/// Implementations:
/// - `HttpFetcher` - single GET over `reqwest`
/// - `MockFetcher` - canned responses for tests
///
/// A fetch is one outbound call. Implementations must not retry.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the document at `url`.
    ///
    /// Fails on transport errors, non-2xx statuses and timeouts.
    async fn fetch(&self, url: &str) -> FetchResult<FetchedResource>;

    /// Get the fetcher name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
