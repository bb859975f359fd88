//! Request, result and classification types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of an extraction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRequest {
    #[serde(rename = "fileUrl")]
    pub file_url: String,
}

impl ExtractionRequest {
    pub fn new(file_url: impl Into<String>) -> Self {
        Self {
            file_url: file_url.into(),
        }
    }
}

/// Plain text extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    pub text: String,

    /// Number of Unicode scalar values in `text`, not bytes.
    pub character_count: usize,
}

impl ExtractedText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let character_count = text.chars().count();
        Self {
            text,
            character_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.character_count == 0
    }
}

/// Document format, as decided by sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Unsupported,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
            DocumentKind::Unsupported => "unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, DocumentKind::Unsupported)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
