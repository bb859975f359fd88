//! Document type sniffing.
//!
//! Decides which parser handles a fetched resource from two signals: the
//! suffix of the URL path and the `Content-Type` response header. The suffix
//! is checked first; either signal alone is enough.

use tracing::warn;
use url::Url;

use crate::types::document::DocumentKind;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Classify a resource by URL suffix, then by content type.
///
/// Rules, first match wins:
/// 1. path ends in `.pdf` → PDF
/// 2. path ends in `.docx` → DOCX
/// 3. content type contains `application/pdf` → PDF
/// 4. content type contains the DOCX MIME type → DOCX
/// 5. otherwise → Unsupported
///
/// Disagreeing signals are not an error; the suffix wins and a warning is
/// logged.
pub fn classify(url: &str, content_type: Option<&str>) -> DocumentKind {
    let by_suffix = kind_from_suffix(url);
    let by_content_type = content_type.map(kind_from_content_type);

    if by_suffix.is_supported() {
        if let Some(declared) = by_content_type.filter(|k| k.is_supported() && *k != by_suffix) {
            warn!(
                url = %url,
                content_type = ?content_type,
                suffix_kind = %by_suffix,
                declared_kind = %declared,
                "URL suffix and content type disagree, using suffix"
            );
        }
        return by_suffix;
    }

    by_content_type.unwrap_or(DocumentKind::Unsupported)
}

/// Classify by the suffix of the URL path (case-insensitive).
///
/// Query strings and fragments are ignored. Unparseable input is treated as a
/// bare path.
pub fn kind_from_suffix(url: &str) -> DocumentKind {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_ascii_lowercase(),
        Err(_) => url.to_ascii_lowercase(),
    };

    if path.ends_with(".pdf") {
        DocumentKind::Pdf
    } else if path.ends_with(".docx") {
        DocumentKind::Docx
    } else {
        DocumentKind::Unsupported
    }
}

/// Classify by `Content-Type` header (substring match, case-insensitive).
pub fn kind_from_content_type(content_type: &str) -> DocumentKind {
    let content_type = content_type.to_ascii_lowercase();

    if content_type.contains(PDF_MIME) {
        DocumentKind::Pdf
    } else if content_type.contains(DOCX_MIME) {
        DocumentKind::Docx
    } else {
        DocumentKind::Unsupported
    }
}
