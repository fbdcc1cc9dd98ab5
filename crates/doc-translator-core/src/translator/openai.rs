use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, error, warn};

use super::prompt::{ChatMessage, build_messages};
use super::response::parse_translation;
use super::traits::{TranslationRequest, Translator, TranslatorInfo};
use crate::config::TranslatorConfig;
use crate::error::{Error, Result};

/// OpenAI-compatible chat-completion client
/// Works with: OpenRouter, OpenAI, llama.cpp server, Ollama, etc.
///
/// Sends exactly one request per translation. There is no retry and no
/// client-side timeout beyond reqwest's defaults.
pub struct OpenAiTranslator {
    client: Client,
    /// Full chat-completion endpoint URL
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage; 2],
}

impl OpenAiTranslator {
    /// Create a client from configuration.
    ///
    /// Fails with [`Error::MissingApiKey`] when no credential is configured.
    pub fn new(config: &TranslatorConfig) -> Result<Self> {
        let api_key = config.api_key().ok_or(Error::MissingApiKey)?.to_string();

        let client = Client::builder()
            .user_agent(concat!("doc-translator/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::ConfigInvalid {
                field: "http_client".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: config.completions_url(),
            api_key,
        })
    }

    /// Send the chat-completion request and return the raw response body.
    async fn send(&self, request: &TranslationRequest) -> Result<String> {
        let body = ChatRequest {
            model: &request.model,
            messages: build_messages(&request.text, &request.source_lang),
        };

        debug!(
            "Translation request to {} (model {}, {} chars)",
            self.endpoint,
            request.model,
            request.text.chars().count()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!("Request failed: {}", e);
                Error::ProviderUnreachable(e.to_string())
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            warn!("Failed to read response body: {}", e);
            Error::ProviderUnreachable(e.to_string())
        })?;

        if !status.is_success() {
            error!("Translation API error: {} - {}", status, text);
            return Err(Error::ProviderRequest {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    fn info(&self) -> TranslatorInfo {
        TranslatorInfo {
            name: "OpenAI Compatible",
        }
    }

    async fn translate(&self, request: &TranslationRequest) -> Result<String> {
        let body = self.send(request).await?;
        parse_translation(&body)
    }
}

impl std::fmt::Debug for OpenAiTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiTranslator")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
