use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::format::DocumentFormat;

/// Main document part inside a WordprocessingML package
const DOCUMENT_PART: &str = "word/document.xml";

fn docx_error(reason: impl Into<String>) -> Error {
    Error::Extraction {
        format: DocumentFormat::Docx,
        reason: reason.into(),
    }
}

/// Upper bound on the decompressed size of the main document part
pub const MAX_DOCUMENT_XML_BYTES: u64 = 64 * 1024 * 1024;

/// Extract the raw text of a .docx package, discarding all formatting.
///
/// Paragraphs are terminated by a blank line, `w:tab` inside a run becomes a
/// tab and `w:br`/`w:cr` become newlines.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String> {
    let xml = read_document_part(bytes, MAX_DOCUMENT_XML_BYTES)?;
    document_xml_to_text(&xml)
}

/// Decompress `word/document.xml`, refusing parts larger than `cap` bytes.
fn read_document_part(bytes: &[u8], cap: u64) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| docx_error(format!("failed to read zip archive: {e}")))?;

    let part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| docx_error(format!("missing {DOCUMENT_PART}: {e}")))?;

    // The declared size comes from the archive and may lie; the read below
    // is bounded independently.
    if part.size() > cap {
        return Err(too_large(cap));
    }

    let mut raw = Vec::new();
    let read = part
        .take(cap.saturating_add(1))
        .read_to_end(&mut raw)
        .map_err(|e| docx_error(format!("failed to read {DOCUMENT_PART}: {e}")))?;

    if u64::try_from(read).unwrap_or(u64::MAX) > cap {
        return Err(too_large(cap));
    }

    String::from_utf8(raw).map_err(|e| docx_error(format!("{DOCUMENT_PART} is not UTF-8: {e}")))
}

fn too_large(cap: u64) -> Error {
    docx_error(format!("{DOCUMENT_PART} exceeds {cap} bytes when decompressed"))
}

fn document_xml_to_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:r" => in_run = true,
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                b"w:p" => text.push_str("\n\n"),
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                // w:tab also appears in paragraph tab stop definitions
                b"w:tab" if in_run => text.push('\t'),
                b"w:br" | b"w:cr" if in_run => text.push('\n'),
                b"w:p" => text.push_str("\n\n"),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text => {
                let chunk = e
                    .unescape()
                    .map_err(|e| docx_error(format!("invalid text in {DOCUMENT_PART}: {e}")))?;
                text.push_str(&chunk);
            }
            Ok(Event::CData(e)) if in_text => {
                text.push_str(&String::from_utf8_lossy(&e));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(docx_error(format!(
                    "malformed XML at position {}: {e}",
                    reader.error_position()
                )));
            }
        }
    }

    Ok(text)
}
