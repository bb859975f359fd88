//! Fetcher implementations.
//!
//! - `HttpFetcher` - one GET per document over `reqwest`
//! - `MockFetcher` - canned responses for tests

mod http;
mod mock;

pub use http::HttpFetcher;
pub use mock::{MockFailure, MockFetcher};

// Re-export from traits for convenience
pub use crate::traits::fetcher::{FetchedResource, Fetcher};
