use async_trait::async_trait;
use serde::Serialize;

use crate::config::Lang;
use crate::error::Result;

/// Information about a translator backend
#[derive(Debug, Clone)]
pub struct TranslatorInfo {
    /// Human-readable name
    pub name: &'static str,
}

/// Everything the provider needs for one translation, built once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    /// Text to translate, already within the character budget
    pub text: String,
    pub source_lang: Lang,
    pub model: String,
    /// Whether the text was cut to fit the budget
    pub truncated: bool,
}

/// Successful result of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    pub translated_text: String,
}

/// Trait for translation backends
#[async_trait]
pub trait Translator: Send + Sync {
    /// Get information about this translator
    fn info(&self) -> TranslatorInfo;

    /// Get the translator name (convenience method)
    fn name(&self) -> &'static str {
        self.info().name
    }

    /// Translate the request text to English
    async fn translate(&self, request: &TranslationRequest) -> Result<String>;
}
