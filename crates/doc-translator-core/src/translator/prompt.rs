use serde::Serialize;

use crate::config::Lang;

pub const SYSTEM_PROMPT: &str = "You are a helpful translation assistant. Translate the user's text to English accurately. Preserve the original meaning and tone as much as possible. Only output the translated text, nothing else.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One role-tagged chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Build the instruction line for the user message.
fn language_instruction(source: &Lang) -> String {
    if source.is_auto() {
        "Detect the language of the following text and translate it accurately to English:"
            .to_string()
    } else {
        format!("Translate the following text from {source} to English:")
    }
}

/// Build the system and user messages, in that order.
pub fn build_messages(text: &str, source: &Lang) -> [ChatMessage; 2] {
    [
        ChatMessage {
            role: Role::System,
            content: SYSTEM_PROMPT.to_string(),
        },
        ChatMessage {
            role: Role::User,
            content: format!("{}\n\n{}", language_instruction(source), text),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_detect_prompt() {
        let [system, user] = build_messages("Bonjour", &Lang::auto());
        assert_eq!(system.role, Role::System);
        assert_eq!(system.content, SYSTEM_PROMPT);
        assert_eq!(user.role, Role::User);
        assert_eq!(
            user.content,
            "Detect the language of the following text and translate it accurately to English:\n\nBonjour"
        );
    }

    #[test]
    fn test_explicit_hint_is_verbatim() {
        for hint in ["Spanish", "es", "Klingon (tlhIngan)", ""] {
            let [_, user] = build_messages("Hola", &Lang::new(hint));
            assert!(user
                .content
                .starts_with(&format!("Translate the following text from {hint} to English")));
            assert!(user.content.ends_with("\n\nHola"));
        }
    }

    #[test]
    fn test_serialized_shape() {
        let messages = build_messages("x", &Lang::new("fr"));
        let json = serde_json::to_value(&messages).unwrap();
        assert_eq!(json[0]["role"], "system");
        assert_eq!(json[1]["role"], "user");
        assert_eq!(json[1]["content"], "Translate the following text from fr to English:\n\nx");
    }
}
