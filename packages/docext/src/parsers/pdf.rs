//! PDF text extraction backed by `lopdf`.

use lopdf::Document;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

use super::panic_message;

use crate::error::{ExtractResult, ExtractionError};
use crate::traits::parser::DocumentParser;
use crate::types::document::DocumentKind;

/// Extracts page text from an in-memory PDF.
///
/// Pages are read in page-number order and joined with a newline. A page
/// that fails to decode fails the whole document.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

fn pdf_error(err: lopdf::Error) -> ExtractionError {
    ExtractionError::Pdf(err.to_string().into())
}

/// Load the document and read every page in order.
fn extract_pages(bytes: &[u8]) -> ExtractResult<String> {
    let doc = Document::load_mem(bytes).map_err(|e| {
        debug!(error = %e, bytes = bytes.len(), "PDF failed to load");
        pdf_error(e)
    })?;

    // BTreeMap keyed by page number, so iteration is document order
    let pages = doc.get_pages();
    let mut texts = Vec::with_capacity(pages.len());
    for &page_number in pages.keys() {
        let text = doc.extract_text(&[page_number]).map_err(|e| {
            debug!(page = page_number, error = %e, "PDF page text extraction failed");
            pdf_error(e)
        })?;
        texts.push(text.trim_end_matches(['\r', '\n']).to_string());
    }

    debug!(pages = texts.len(), "PDF text extracted");
    Ok(texts.join("\n").trim().to_string())
}

impl DocumentParser for PdfExtractor {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Pdf
    }

    fn extract(&self, bytes: &[u8]) -> ExtractResult<String> {
        // lopdf panics on some corrupted object streams
        match panic::catch_unwind(AssertUnwindSafe(|| extract_pages(bytes))) {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(&*payload);
                warn!(panic = %message, bytes = bytes.len(), "PDF parser panicked");
                Err(ExtractionError::Pdf(
                    format!("PDF parser panicked: {}", message).into(),
                ))
            }
        }
    }
}
