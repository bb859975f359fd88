// Document Extractor - API Core
//
// HTTP API that fetches a PDF or DOCX by URL and returns its plain text.
// Fetching, sniffing and parsing live in the `docext` library; this crate
// holds configuration and the axum wiring.

pub mod config;
pub mod server;

pub use config::*;
