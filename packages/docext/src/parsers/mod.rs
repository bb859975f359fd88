//! Document parser implementations.
//!
//! - `PdfExtractor` - in-memory PDF via `lopdf`
//! - `DocxExtractor` - DOCX via `dotext`, staged through a temp file
//!
//! Both backends can panic on corrupted input; the extractors catch that and
//! report it as a rejected document.

mod docx;
mod pdf;

pub use docx::{DocxExtractor, DOCX_DOCUMENT_PART};
pub use pdf::PdfExtractor;

pub use crate::traits::parser::DocumentParser;

/// Best-effort text of a caught panic payload.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
