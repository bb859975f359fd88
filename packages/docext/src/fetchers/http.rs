//! HTTP-based fetcher implementation.

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::{FetchedResource, Fetcher};
use crate::types::config::ExtractionConfig;

/// Fetcher that performs a single GET per document.
///
/// # Example
///
/// ```rust,ignore
/// use docext::{ExtractionConfig, HttpFetcher, Fetcher};
///
/// let fetcher = HttpFetcher::new(&ExtractionConfig::default())?;
/// let resource = fetcher.fetch("https://example.com/a.pdf").await?;
/// ```
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
    max_bytes: Option<u64>,
}

impl HttpFetcher {
    /// Create a fetcher from the timeout, size limit and user agent in
    /// `config`.
    pub fn new(config: &ExtractionConfig) -> FetchResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .build()
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
            max_bytes: config.max_document_bytes,
        })
    }

    fn check_size(&self, len: u64) -> FetchResult<()> {
        match self.max_bytes {
            Some(limit) if len > limit => Err(FetchError::TooLarge { limit }),
            _ => Ok(()),
        }
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Http(Box::new(err))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<FetchedResource> {
        debug!(url = %url, "HTTP fetch starting");

        let mut response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                transport_error(url, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "HTTP request returned error status");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if let Some(declared) = response.content_length() {
            self.check_size(declared)?;
        }

        // Capture final URL after redirects
        let final_url = response.url().to_string();

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        // Chunked bodies carry no Content-Length; enforce the limit per chunk
        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| transport_error(url, e))?
        {
            if let Err(e) = self.check_size((body.len() + chunk.len()) as u64) {
                warn!(url = %url, received = body.len(), "Document body over size limit");
                return Err(e);
            }
            body.extend_from_slice(&chunk);
        }

        debug!(
            url = %url,
            final_url = %final_url,
            content_type = ?content_type,
            bytes = body.len(),
            "HTTP fetch completed"
        );

        let mut resource = FetchedResource::new(url, body).with_final_url(final_url);
        if let Some(ct) = content_type {
            resource = resource.with_content_type(ct);
        }

        Ok(resource)
    }

    fn name(&self) -> &str {
        "http"
    }
}
