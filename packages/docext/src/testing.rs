//! Testing utilities.
//!
//! Fixture builders for applications that test against the extraction
//! library without real documents on disk: PDFs via `lopdf`, DOCX archives
//! via `zip`. See also
//! [`MockFetcher`](crate::fetchers::MockFetcher).

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::ZipWriter;

use crate::parsers::DOCX_DOCUMENT_PART;

/// Build a PDF with one page per entry of `pages`, each page showing its
/// text in a standard Courier font.
///
/// ```rust
/// let pdf = docext::testing::sample_pdf(&["Hello"]).unwrap();
/// assert!(pdf.starts_with(b"%PDF"));
/// ```
pub fn sample_pdf(pages: &[&str]) -> lopdf::Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec![Object::Name(b"F1".to_vec()), Object::Integer(24)]),
                Operation::new("Td", vec![Object::Integer(72), Object::Integer(720)]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Count" => pages.len() as i64,
        "Kids" => kids,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(612),
            Object::Integer(792),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

/// Build a zip archive from `(name, contents)` entries, stored uncompressed.
///
/// Useful for DOCX-shaped inputs that [`sample_docx`] cannot express, such
/// as a malformed `word/document.xml` or a zip with no document part.
pub fn docx_archive(entries: &[(&str, &[u8])]) -> zip::result::ZipResult<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(zip::CompressionMethod::Stored);
    for (name, contents) in entries {
        writer.start_file(*name, options)?;
        writer.write_all(contents)?;
    }
    Ok(writer.finish()?.into_inner())
}

/// Build a minimal DOCX with one paragraph per entry of `paragraphs`.
///
/// ```rust
/// let docx = docext::testing::sample_docx(&["Hello"]).unwrap();
/// assert!(docx.starts_with(b"PK"));
/// ```
pub fn sample_docx(paragraphs: &[&str]) -> zip::result::ZipResult<Vec<u8>> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p))
        .collect();
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    );

    docx_archive(&[(DOCX_DOCUMENT_PART, document.as_bytes())])
}
