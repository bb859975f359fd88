//! Document parser trait.
//!
//! Binary format decoding lives in third-party crates. A `DocumentParser`
//! wraps one of them and turns document bytes into trimmed plain text.

use crate::error::ExtractResult;
use crate::types::document::DocumentKind;

/// Turns the bytes of one document format into plain text.
///
/// Parsing is synchronous and may block (file I/O, CPU-heavy decoding);
/// async callers should run it on a blocking thread.
pub trait DocumentParser: Send + Sync {
    /// The format this parser handles.
    fn kind(&self) -> DocumentKind;

    /// Extract the full text of the document.
    ///
    /// Either the whole document is extracted or an error is returned;
    /// partial text is never produced.
    fn extract(&self, bytes: &[u8]) -> ExtractResult<String>;

    /// Get the parser name (for logging/debugging).
    fn name(&self) -> &str {
        self.kind().as_str()
    }
}
