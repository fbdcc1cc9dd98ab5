//! Document Translator Core Library
//!
//! This library provides the document-to-translation pipeline:
//! - Format classification from the declared content type
//! - Text extraction for PDF, DOCX and plain text
//! - Character budget enforcement
//! - Translation to English via OpenAI-compatible APIs
//! - Classification of every failure into a caller-safe envelope

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod format;
pub mod limit;
pub mod translator;
pub mod util;

pub use config::{
    AppConfig, Lang, LanguageOption, TranslatorConfig, source_languages,
    DEFAULT_API_BASE, DEFAULT_MODEL, DEFAULT_SOURCE_LANG,
};
pub use document::UploadedDocument;
pub use error::{Error, ErrorEnvelope, ErrorKind, Result};
pub use extract::ExtractionResult;
pub use format::DocumentFormat;
pub use limit::{LimitedText, limit_chars, DEFAULT_MAX_CHARS};
pub use translator::{
    OpenAiTranslator, TranslationRequest, TranslationResponse, Translator, create_translator,
};

use std::sync::Arc;
use tracing::{Instrument, debug, info, info_span};
use uuid::Uuid;

/// High-level document translator that chains all pipeline stages
pub struct DocumentTranslator {
    translator: Arc<dyn Translator>,
    config: AppConfig,
}

impl DocumentTranslator {
    /// Create a new document translator with the given configuration.
    ///
    /// Fails with [`Error::MissingApiKey`] if no credential is configured.
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let translator = create_translator(&config.translator)?;

        Ok(Self { translator, config })
    }

    /// Create with a custom translator
    pub fn with_translator(translator: Arc<dyn Translator>, config: AppConfig) -> Self {
        Self { translator, config }
    }

    /// Run the full pipeline on one uploaded document.
    ///
    /// Stages run in order and the first failure ends the run.
    pub async fn translate(
        &self,
        document: UploadedDocument,
        source_lang: Lang,
    ) -> Result<TranslationResponse> {
        let span = info_span!("translate", run_id = %Uuid::new_v4());
        self.translate_impl(document, source_lang).instrument(span).await
    }

    async fn translate_impl(
        &self,
        document: UploadedDocument,
        source_lang: Lang,
    ) -> Result<TranslationResponse> {
        info!(
            "Received {} ({} bytes, {}), source language {}",
            document.file_name().unwrap_or("document"),
            document.size_bytes(),
            document.declared_type(),
            source_lang
        );

        let extraction = self.extract(&document).await?;
        drop(document);

        let request = self.build_request(extraction, source_lang);

        info!(
            "Translating {} characters with {}{}",
            request.text.chars().count(),
            self.translator.name(),
            if request.truncated { " (truncated)" } else { "" }
        );

        let translated_text = self.translator.translate(&request).await?;

        debug!("Translation returned {} characters", translated_text.chars().count());

        Ok(TranslationResponse { translated_text })
    }

    /// Classify the document and extract its text, rejecting blank results.
    pub async fn extract(&self, document: &UploadedDocument) -> Result<ExtractionResult> {
        let format = DocumentFormat::from_mime(document.declared_type())?;

        let result = match format {
            DocumentFormat::PlainText => extract::extract_text(format, document.bytes())?,
            DocumentFormat::Pdf | DocumentFormat::Docx => {
                // Parsing is CPU bound; keep it off the async runtime
                let bytes = document.bytes_shared();
                tokio::task::spawn_blocking(move || extract::extract_text(format, &bytes))
                    .await
                    .map_err(|e| Error::Extraction {
                        format,
                        reason: format!("extraction task failed: {e}"),
                    })??
            }
        };

        result.ensure_not_blank()
    }

    /// Apply the character budget and assemble the provider request.
    pub fn build_request(&self, extraction: ExtractionResult, source_lang: Lang) -> TranslationRequest {
        let limited = limit_chars(extraction.text, self.config.max_chars);

        TranslationRequest {
            text: limited.text,
            source_lang,
            model: self.config.translator.model.clone(),
            truncated: limited.truncated,
        }
    }

    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn translator_info(&self) -> translator::TranslatorInfo {
        self.translator.info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_api_key() {
        let result = DocumentTranslator::new(AppConfig::default());
        assert!(matches!(result, Err(Error::MissingApiKey)));
    }

    #[test]
    fn test_new_with_api_key() {
        let mut config = AppConfig::default();
        config.translator.api_key = Some("sk-test".to_string());
        let translator = DocumentTranslator::new(config).unwrap();
        assert_eq!(translator.translator_info().name, "OpenAI Compatible");
        assert_eq!(translator.config().max_chars, DEFAULT_MAX_CHARS);
    }
}
