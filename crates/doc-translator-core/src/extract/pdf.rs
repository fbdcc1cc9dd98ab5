use lopdf::Document as LoDocument;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::format::DocumentFormat;

/// A parsed PDF, loaded from memory.
pub struct PdfDocument {
    inner: LoDocument,
    /// Page numbers (1-based, as lopdf numbers them) in document order
    pages: Vec<u32>,
}

fn pdf_error(reason: impl Into<String>) -> Error {
    Error::Extraction {
        format: DocumentFormat::Pdf,
        reason: reason.into(),
    }
}

impl PdfDocument {
    /// Parse a PDF from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let inner = LoDocument::load_mem(bytes)
            .map_err(|e| pdf_error(format!("Failed to parse PDF: {e}")))?;

        let pages = inner.get_pages().keys().copied().collect();

        Ok(Self { inner, pages })
    }

    /// Extract the text of every page, in page order.
    ///
    /// Pages whose content cannot be decoded are skipped with a warning; the
    /// document only fails if it has pages and none of them yield text.
    pub fn extract_text(&self) -> Result<String> {
        let mut text = String::new();
        let mut failures = 0usize;
        let mut last_failure = None;

        for &page in &self.pages {
            match self.inner.extract_text(&[page]) {
                Ok(page_text) => {
                    if !text.is_empty() && !text.ends_with('\n') {
                        text.push('\n');
                    }
                    text.push_str(&page_text);
                }
                Err(e) => {
                    warn!("Failed to extract text from page {}: {}", page, e);
                    failures += 1;
                    last_failure = Some(e.to_string());
                }
            }
        }

        if failures > 0 && failures == self.pages.len() {
            return Err(pdf_error(format!(
                "no page could be decoded ({})",
                last_failure.unwrap_or_default()
            )));
        }

        debug!(
            "Extracted text from {}/{} PDF pages",
            self.pages.len() - failures,
            self.pages.len()
        );

        Ok(text)
    }
}

impl std::fmt::Debug for PdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfDocument")
            .field("page_count", &self.pages.len())
            .field("version", &self.inner.version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_pdf() {
        let err = PdfDocument::from_bytes(b"hello").unwrap_err();
        assert!(matches!(
            err,
            Error::Extraction { format: DocumentFormat::Pdf, .. }
        ));
    }

    #[test]
    fn test_rejects_empty_bytes() {
        assert!(PdfDocument::from_bytes(&[]).is_err());
    }
}
