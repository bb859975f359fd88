//! Document Text Extraction Library
//!
//! Fetches a PDF or DOCX document from a URL and returns its plain text.
//! Binary format decoding is delegated to `lopdf` and `dotext`; this crate
//! owns the policy around them: sniffing the document type, dispatching to
//! the right parser, staging DOCX bytes on disk, and classifying failures.
//!
//! # Usage
//!
//! ```rust,ignore
//! use docext::{ExtractionConfig, ExtractionService};
//!
//! let service = ExtractionService::from_config(&ExtractionConfig::default())?;
//! let extracted = service.extract("https://example.com/report.pdf").await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (Fetcher, DocumentParser)
//! - [`types`] - Request, result and configuration types
//! - [`sniff`] - URL suffix / content type classification
//! - [`fetchers`] - Fetcher implementations (HttpFetcher, MockFetcher)
//! - [`parsers`] - Parser implementations (PdfExtractor, DocxExtractor)
//! - [`service`] - The fetch → sniff → parse pipeline
//! - [`testing`] - Fixture builders for tests

pub mod error;
pub mod fetchers;
pub mod parsers;
pub mod service;
pub mod sniff;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{DocextError, ExtractionError, FetchError};
pub use traits::{
    fetcher::{FetchedResource, Fetcher},
    parser::DocumentParser,
};
pub use types::{
    config::ExtractionConfig,
    document::{DocumentKind, ExtractedText, ExtractionRequest},
};

pub use fetchers::{HttpFetcher, MockFailure, MockFetcher};
pub use parsers::{DocxExtractor, PdfExtractor, DOCX_DOCUMENT_PART};
pub use service::ExtractionService;
pub use sniff::classify;
