//! Mock fetcher for testing.
//!
//! Provides a configurable mock implementation of the Fetcher trait.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::{FetchedResource, Fetcher};

/// A failure the mock should produce for a URL.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Transport error with the given message (e.g. connection refused)
    Connection(String),
    /// Non-2xx response
    Status(u16),
    /// Request timed out
    Timeout,
}

impl MockFailure {
    fn to_error(&self, url: &str) -> FetchError {
        match self {
            MockFailure::Connection(message) => FetchError::Http(message.clone().into()),
            MockFailure::Status(status) => FetchError::Status {
                url: url.to_string(),
                status: *status,
            },
            MockFailure::Timeout => FetchError::Timeout {
                url: url.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone)]
enum MockResponse {
    Resource(FetchedResource),
    Failure(MockFailure),
}

/// Mock fetcher for testing.
///
/// Unknown URLs answer with HTTP 404.
///
/// # Example
///
/// ```rust
/// use docext::fetchers::{FetchedResource, MockFetcher};
///
/// let mock = MockFetcher::new()
///     .with_resource(FetchedResource::new("https://example.com/a.pdf", b"%PDF-1.5".to_vec()));
/// ```
#[derive(Default)]
pub struct MockFetcher {
    /// Canned responses indexed by URL
    responses: Arc<RwLock<HashMap<String, MockResponse>>>,
    /// URLs requested, in order
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `resource` for its `source_url`.
    pub fn add_resource(&self, resource: FetchedResource) {
        let mut responses = self.responses.write().unwrap();
        responses.insert(
            resource.source_url.clone(),
            MockResponse::Resource(resource),
        );
    }

    /// Fail every fetch of `url` with `failure`.
    pub fn add_failure(&self, url: impl Into<String>, failure: MockFailure) {
        let mut responses = self.responses.write().unwrap();
        responses.insert(url.into(), MockResponse::Failure(failure));
    }

    /// Builder form of [`add_resource`](Self::add_resource).
    pub fn with_resource(self, resource: FetchedResource) -> Self {
        self.add_resource(resource);
        self
    }

    /// Builder form of [`add_failure`](Self::add_failure).
    pub fn with_failure(self, url: impl Into<String>, failure: MockFailure) -> Self {
        self.add_failure(url, failure);
        self
    }

    /// Get the number of times fetch was called.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Get the URLs that were requested.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Clear all recorded calls.
    pub fn reset_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

impl Clone for MockFetcher {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedResource> {
        self.calls.write().unwrap().push(url.to_string());

        let responses = self.responses.read().unwrap();
        match responses.get(url) {
            Some(MockResponse::Resource(resource)) => Ok(resource.clone()),
            Some(MockResponse::Failure(failure)) => Err(failure.to_error(url)),
            None => Err(MockFailure::Status(404).to_error(url)),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
