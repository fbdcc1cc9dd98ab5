mod openai;
pub mod prompt;
mod response;
mod traits;

pub use openai::OpenAiTranslator;
pub use prompt::{ChatMessage, Role, SYSTEM_PROMPT, build_messages};
pub use response::parse_translation;
pub use traits::{TranslationRequest, TranslationResponse, Translator, TranslatorInfo};

use crate::config::TranslatorConfig;
use crate::error::Result;
use std::sync::Arc;

/// Create a translator from configuration
pub fn create_translator(config: &TranslatorConfig) -> Result<Arc<dyn Translator>> {
    let translator = OpenAiTranslator::new(config)?;

    Ok(Arc::new(translator))
}
