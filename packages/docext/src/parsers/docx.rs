//! DOCX text extraction backed by `dotext`.
//!
//! `dotext` only opens documents from a path, so the bytes are staged to a
//! uniquely named temp file first. The staging file is removed on every exit
//! path: explicitly after parsing, or by `NamedTempFile`'s `Drop` when
//! unwinding.
//!
//! `dotext` reads a zip without `word/document.xml` as an empty document, so
//! the archive is checked for that part before anything is staged.

use dotext::{Docx, MsDoc};
use std::io::{self, Cursor, Read, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};
use zip::ZipArchive;

use super::panic_message;
use crate::error::{ExtractResult, ExtractionError};
use crate::traits::parser::DocumentParser;
use crate::types::document::DocumentKind;

const STAGING_PREFIX: &str = "docext-";
const STAGING_SUFFIX: &str = ".docx";

/// Archive entry holding the main document body.
pub const DOCX_DOCUMENT_PART: &str = "word/document.xml";

/// Extracts text from a DOCX document via an on-disk staging file.
#[derive(Debug, Clone)]
pub struct DocxExtractor {
    staging_dir: PathBuf,
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxExtractor {
    /// Stage files in the OS temp dir.
    pub fn new() -> Self {
        Self {
            staging_dir: std::env::temp_dir(),
        }
    }

    /// Stage files in `dir` instead.
    pub fn with_staging_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.staging_dir = dir.into();
        self
    }

    pub fn staging_dir(&self) -> &Path {
        &self.staging_dir
    }

    /// Write `bytes` to a fresh staging file and make sure they hit the disk
    /// before the parser opens it.
    fn stage(&self, bytes: &[u8]) -> io::Result<NamedTempFile> {
        let mut staged = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .suffix(STAGING_SUFFIX)
            .tempfile_in(&self.staging_dir)?;
        staged.write_all(bytes)?;
        staged.flush()?;
        staged.as_file().sync_all()?;
        Ok(staged)
    }
}

/// Fail unless `bytes` is a zip archive with a main document part.
fn ensure_document_part(bytes: &[u8]) -> io::Result<()> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let has_document = archive.by_name(DOCX_DOCUMENT_PART).is_ok();
    if has_document {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("archive has no {}", DOCX_DOCUMENT_PART),
        ))
    }
}

fn read_docx(path: &Path) -> io::Result<String> {
    let mut doc = Docx::open(path)?;
    let mut text = String::new();
    doc.read_to_string(&mut text)?;
    Ok(text)
}

impl DocumentParser for DocxExtractor {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Docx
    }

    fn extract(&self, bytes: &[u8]) -> ExtractResult<String> {
        ensure_document_part(bytes).map_err(|e| {
            debug!(error = %e, bytes = bytes.len(), "Not a DOCX archive");
            ExtractionError::Docx(e)
        })?;

        let staged = self.stage(bytes).map_err(ExtractionError::Staging)?;
        let path = staged.path().to_path_buf();
        debug!(path = %path.display(), bytes = bytes.len(), "DOCX staged for parsing");

        // dotext panics on malformed document XML
        let parsed = panic::catch_unwind(AssertUnwindSafe(|| read_docx(&path)))
            .unwrap_or_else(|payload| {
                let message = panic_message(&*payload);
                warn!(panic = %message, "DOCX parser panicked");
                Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("DOCX parser panicked: {}", message),
                ))
            });

        // Removal failures are logged only; they never replace the parse outcome
        if let Err(e) = staged.close() {
            warn!(path = %path.display(), error = %e, "Failed to remove DOCX staging file");
        }

        let text = parsed.map_err(|e| {
            debug!(error = %e, "DOCX parse failed");
            ExtractionError::Docx(e)
        })?;

        Ok(text.trim().to_string())
    }
}
