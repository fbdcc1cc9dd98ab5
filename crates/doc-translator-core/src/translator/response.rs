use serde::Deserialize;
use tracing::error;

use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<serde_json::Value>,
}

fn invalid(reason: &str, body: &str) -> Error {
    error!("Invalid translation API response ({}): {}", reason, body);
    Error::InvalidProviderResponse {
        reason: reason.to_string(),
        body: body.to_string(),
    }
}

/// Pull the translated text out of a chat-completion body.
///
/// Requires `choices[0].message.content` to be a string with non-whitespace
/// content; returns it trimmed.
pub fn parse_translation(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| invalid(&format!("body is not a chat completion: {e}"), body))?;

    let choices = response
        .choices
        .ok_or_else(|| invalid("missing choices", body))?;

    let message = choices
        .into_iter()
        .next()
        .ok_or_else(|| invalid("empty choices", body))?
        .message
        .ok_or_else(|| invalid("first choice has no message", body))?;

    let Some(serde_json::Value::String(content)) = message.content else {
        return Err(invalid("message content is not a string", body));
    };

    let translated = content.trim();
    if translated.is_empty() {
        return Err(invalid("message content is empty", body));
    }

    Ok(translated.to_string())
}
