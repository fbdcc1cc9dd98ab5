//! Character budget enforcement for text sent to the provider.

use tracing::warn;

/// Default maximum number of characters submitted for translation
pub const DEFAULT_MAX_CHARS: usize = 50_000;

/// Text after the size limit has been applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitedText {
    pub text: String,
    /// Whether characters were dropped
    pub truncated: bool,
}

/// Keep at most `max_chars` characters of `text`.
///
/// Counts Unicode scalar values and cuts at the character boundary, with no
/// attempt to respect words or sentences.
pub fn limit_chars(mut text: String, max_chars: usize) -> LimitedText {
    let Some((cut, _)) = text.char_indices().nth(max_chars) else {
        return LimitedText {
            text,
            truncated: false,
        };
    };

    let original_len = text.len();
    text.truncate(cut);
    warn!(
        "Input text truncated to {} characters ({} of {} bytes kept)",
        max_chars,
        cut,
        original_len
    );

    LimitedText {
        text,
        truncated: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        let limited = limit_chars("hello".to_string(), 10);
        assert_eq!(limited.text, "hello");
        assert!(!limited.truncated);
    }

    #[test]
    fn test_exact_length_untouched() {
        let limited = limit_chars("hello".to_string(), 5);
        assert_eq!(limited.text, "hello");
        assert!(!limited.truncated);
    }

    #[test]
    fn test_truncates_to_prefix() {
        let limited = limit_chars("hello world".to_string(), 5);
        assert_eq!(limited.text, "hello");
        assert!(limited.truncated);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let limited = limit_chars("日本語のテキスト".to_string(), 3);
        assert_eq!(limited.text, "日本語");
        assert_eq!(limited.text.chars().count(), 3);
    }

    #[test]
    fn test_zero_budget() {
        let limited = limit_chars("abc".to_string(), 0);
        assert_eq!(limited.text, "");
        assert!(limited.truncated);
    }

    #[test]
    fn test_length_prefix_and_idempotence() {
        let input = "ñandú über café — ".repeat(40);
        let len = input.chars().count();

        for budget in [0, 1, 7, 100, len - 1, len, len + 5] {
            let once = limit_chars(input.clone(), budget);
            assert_eq!(once.text.chars().count(), len.min(budget));
            assert!(input.starts_with(&once.text));

            let twice = limit_chars(once.text.clone(), budget);
            assert_eq!(twice.text, once.text);
            assert!(!twice.truncated);
        }
    }
}
