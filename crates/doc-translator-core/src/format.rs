//! Declared content type classification.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const PLAIN_TEXT_MIME: &str = "text/plain";

/// Document formats the pipeline can extract text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentFormat {
    /// Classify a declared MIME type.
    ///
    /// The declared type is trusted as-is: no content sniffing and no
    /// parameter stripping, so `text/plain; charset=utf-8` is rejected.
    pub fn from_mime(declared: &str) -> Result<Self> {
        match declared {
            PDF_MIME => Ok(Self::Pdf),
            DOCX_MIME => Ok(Self::Docx),
            PLAIN_TEXT_MIME => Ok(Self::PlainText),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }

    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => PDF_MIME,
            Self::Docx => DOCX_MIME,
            Self::PlainText => PLAIN_TEXT_MIME,
        }
    }

    /// Short human-readable name used in messages
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::PlainText => "TXT",
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_types() {
        assert_eq!(DocumentFormat::from_mime("application/pdf").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_mime(DOCX_MIME).unwrap(), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::from_mime("text/plain").unwrap(), DocumentFormat::PlainText);
    }

    #[test]
    fn test_mime_type_matches_classification() {
        for format in [DocumentFormat::Pdf, DocumentFormat::Docx, DocumentFormat::PlainText] {
            assert_eq!(DocumentFormat::from_mime(format.mime_type()).unwrap(), format);
        }
    }

    #[test]
    fn test_unsupported_type_is_echoed_verbatim() {
        for declared in [
            "image/png",
            "",
            "TEXT/PLAIN",
            "text/plain; charset=utf-8",
            "application/msword",
        ] {
            match DocumentFormat::from_mime(declared) {
                Err(Error::UnsupportedFormat(t)) => assert_eq!(t, declared),
                other => panic!("expected UnsupportedFormat for {declared:?}, got {other:?}"),
            }
        }
    }
}
