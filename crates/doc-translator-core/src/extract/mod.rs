//! Text extraction strategies, one per supported format.

mod docx;
mod pdf;
mod plain;

pub use docx::extract_docx_text;
pub use pdf::PdfDocument;
pub use plain::decode_plain_text;

use tracing::debug;

use crate::error::{Error, Result};
use crate::format::DocumentFormat;

/// Text pulled out of a document, tagged with the format it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub text: String,
    pub source_format: DocumentFormat,
}

impl ExtractionResult {
    /// True if nothing but whitespace was extracted.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Reject blank extractions, whatever the format.
    pub fn ensure_not_blank(self) -> Result<Self> {
        if self.is_blank() {
            return Err(Error::EmptyDocument);
        }
        Ok(self)
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Run the extractor for `format` over `bytes`.
///
/// Synchronous and potentially CPU heavy; async callers should run it on the
/// blocking pool. The PDF parser is only constructed inside its own branch.
pub fn extract_text(format: DocumentFormat, bytes: &[u8]) -> Result<ExtractionResult> {
    let text = match format {
        DocumentFormat::Pdf => PdfDocument::from_bytes(bytes)?.extract_text()?,
        DocumentFormat::Docx => extract_docx_text(bytes)?,
        DocumentFormat::PlainText => decode_plain_text(bytes),
    };

    debug!("Extracted {} bytes of text from {} document", text.len(), format);

    Ok(ExtractionResult {
        text,
        source_format: format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        let result = ExtractionResult {
            text: " \n\t ".to_string(),
            source_format: DocumentFormat::PlainText,
        };
        assert!(result.is_blank());
        assert!(matches!(result.ensure_not_blank(), Err(Error::EmptyDocument)));
    }

    #[test]
    fn test_plain_text_dispatch() {
        let result = extract_text(DocumentFormat::PlainText, "Hola".as_bytes()).unwrap();
        assert_eq!(result.text, "Hola");
        assert_eq!(result.source_format, DocumentFormat::PlainText);
        assert_eq!(result.char_count(), 4);
    }

    #[test]
    fn test_garbage_fails_per_format() {
        let garbage = b"definitely not a document";

        match extract_text(DocumentFormat::Pdf, garbage) {
            Err(Error::Extraction { format, .. }) => assert_eq!(format, DocumentFormat::Pdf),
            other => panic!("expected pdf extraction failure, got {other:?}"),
        }

        match extract_text(DocumentFormat::Docx, garbage) {
            Err(Error::Extraction { format, .. }) => assert_eq!(format, DocumentFormat::Docx),
            other => panic!("expected docx extraction failure, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_plain_text_is_blank() {
        let result = extract_text(DocumentFormat::PlainText, b"").unwrap();
        assert!(result.is_blank());
    }
}
