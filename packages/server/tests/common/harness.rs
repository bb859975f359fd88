//! Test harness for driving the router in-process.
//!
//! Requests go straight through `tower::ServiceExt::oneshot`; no socket is
//! bound for the API itself. Documents are served by a `MockFetcher` unless a
//! test opts into the real `HttpFetcher`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use docext::{
    DocxExtractor, ExtractionConfig, ExtractionService, FetchedResource, HttpFetcher, MockFailure,
    MockFetcher,
};
use serde_json::Value;
use server_core::server::build_app;
use server_core::{AllowedOrigins, Config};
use tempfile::TempDir;
use tower::ServiceExt;

/// Response captured from the router.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Parsed JSON body, `Value::Null` when the body is empty
    pub body: Value,
}

impl TestResponse {
    /// The `detail` field of an error body.
    pub fn detail(&self) -> &str {
        self.body["detail"].as_str().unwrap_or_default()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Router plus the mock behind it.
pub struct TestHarness {
    pub app: Router,
    pub fetcher: MockFetcher,
    /// Staging directory for DOCX files; removed when the harness drops
    pub staging_dir: TempDir,
}

impl TestHarness {
    /// Harness with the default configuration (`ALLOWED_ORIGINS=*`).
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Harness whose CORS policy allows exactly `origins`.
    pub fn with_origins(origins: &str) -> Self {
        Self::with_config(Config {
            allowed_origins: AllowedOrigins::parse(origins),
            ..Config::default()
        })
    }

    pub fn with_config(config: Config) -> Self {
        init_tracing();

        let fetcher = MockFetcher::new();
        let staging_dir = TempDir::new().unwrap();
        let service = ExtractionService::new(Arc::new(fetcher.clone()))
            .with_docx_parser(Arc::new(
                DocxExtractor::new().with_staging_dir(staging_dir.path()),
            ));

        Self {
            app: build_app(&config, Arc::new(service)),
            fetcher,
            staging_dir,
        }
    }

    /// Harness backed by the real HTTP fetcher.
    pub fn with_http_fetcher(config: ExtractionConfig) -> Self {
        init_tracing();

        let staging_dir = TempDir::new().unwrap();
        let service = ExtractionService::new(Arc::new(HttpFetcher::new(&config).unwrap()))
            .with_docx_parser(Arc::new(
                DocxExtractor::new().with_staging_dir(staging_dir.path()),
            ));

        Self {
            app: build_app(&Config::default(), Arc::new(service)),
            fetcher: MockFetcher::new(),
            staging_dir,
        }
    }

    /// Serve `bytes` at `url` with an optional content type.
    pub fn serve(&self, url: &str, bytes: Vec<u8>, content_type: Option<&str>) {
        let mut resource = FetchedResource::new(url, bytes);
        if let Some(content_type) = content_type {
            resource = resource.with_content_type(content_type);
        }
        self.fetcher.add_resource(resource);
    }

    pub fn fail(&self, url: &str, failure: MockFailure) {
        self.fetcher.add_failure(url, failure);
    }

    /// POST `{"fileUrl": url}` to `/extract`.
    pub async fn extract(&self, url: &str) -> TestResponse {
        let body = serde_json::json!({ "fileUrl": url });
        self.post_json("/extract", &body).await
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> TestResponse {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Respect RUST_LOG in tests: `RUST_LOG=debug cargo test -- --nocapture`
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
