use serde::{Deserialize, Serialize};

use crate::limit::DEFAULT_MAX_CHARS;

/// Source language hint: a language code, a language name, or `auto`.
///
/// Inserted verbatim into the prompt; no validation against a language list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lang(pub String);

impl Lang {
    /// Sentinel asking the provider to detect the source language
    pub const AUTO: &'static str = "auto";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn auto() -> Self {
        Self::new(Self::AUTO)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_auto(&self) -> bool {
        self.0 == Self::AUTO
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Lang {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Lang {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Default chat-completion API base
pub const DEFAULT_API_BASE: &str = "https://openrouter.ai/api/v1";
/// Default model identifier
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-pro-preview-03-25";

/// Provider configuration for an OpenAI-compatible chat-completion API.
#[derive(Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Bearer credential. Required; there is no default.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl TranslatorConfig {
    /// Create a new translator config
    pub fn new(
        api_base: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_base: api_base.into(),
            api_key,
            model: model.into(),
        }
    }

    /// The configured API key, treating an empty value as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Full URL of the chat-completion endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_key: None,
            model: default_model(),
        }
    }
}

impl std::fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("api_base", &self.api_base)
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("model", &self.model)
            .finish()
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Translator backend configuration
    #[serde(default)]
    pub translator: TranslatorConfig,

    /// Maximum characters submitted for translation
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

const fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            translator: TranslatorConfig::default(),
            max_chars: default_max_chars(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::error::Error> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            crate::error::Error::ConfigLoad(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, crate::error::Error> {
        let config: Self = toml::from_str(content).map_err(|e| {
            crate::error::Error::ConfigLoad(format!("Failed to parse config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no run could succeed with.
    pub fn validate(&self) -> Result<(), crate::error::Error> {
        if self.max_chars == 0 {
            return Err(crate::error::Error::ConfigInvalid {
                field: "max_chars".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.translator.model.trim().is_empty() {
            return Err(crate::error::Error::ConfigInvalid {
                field: "translator.model".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Load from default locations (~/.config/doc-translator/config.toml, ./config.toml)
    pub fn load() -> Self {
        // Try user config
        if let Some(config_dir) = crate::util::config_dir() {
            let user_config = config_dir.join("doc-translator").join("config.toml");
            if user_config.exists() {
                match Self::from_file(&user_config) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {}", user_config.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // Try local config
        let local_config = std::path::PathBuf::from("config.toml");
        if local_config.exists() {
            match Self::from_file(&local_config) {
                Ok(config) => {
                    tracing::debug!("Loaded config from ./config.toml");
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load ./config.toml: {}", e);
                }
            }
        }

        tracing::debug!("No config file found, using defaults");
        Self::default()
    }
}

/// A language option for UI dropdowns
#[derive(Debug, Clone)]
pub struct LanguageOption {
    /// Value sent as the source language hint (e.g., "auto", "es")
    pub code: &'static str,
    /// Display name (e.g., "Spanish")
    pub name: &'static str,
}

/// Source languages offered by the upload form.
pub fn source_languages() -> Vec<LanguageOption> {
    vec![
        LanguageOption { code: "auto", name: "Auto-detect" },
        LanguageOption { code: "es", name: "Spanish" },
        LanguageOption { code: "fr", name: "French" },
        LanguageOption { code: "de", name: "German" },
        LanguageOption { code: "it", name: "Italian" },
        LanguageOption { code: "pt", name: "Portuguese" },
        LanguageOption { code: "ru", name: "Russian" },
        LanguageOption { code: "zh", name: "Chinese" },
        LanguageOption { code: "ja", name: "Japanese" },
        LanguageOption { code: "ko", name: "Korean" },
        LanguageOption { code: "ar", name: "Arabic" },
    ]
}

/// Default source language code
pub const DEFAULT_SOURCE_LANG: &str = Lang::AUTO;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.max_chars, 50_000);
        assert_eq!(config.translator.api_base, DEFAULT_API_BASE);
        assert!(config.translator.api_key().is_none());
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let config = TranslatorConfig::new(DEFAULT_API_BASE, Some("  ".to_string()), DEFAULT_MODEL);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = TranslatorConfig::new(DEFAULT_API_BASE, Some("sk-secret".to_string()), DEFAULT_MODEL);
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_completions_url() {
        let config = TranslatorConfig::new("http://localhost:8080/v1/", None, "m");
        assert_eq!(config.completions_url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml("max_chars = 1000\n[translator]\nmodel = \"openai/gpt-4o\"\n").unwrap();
        assert_eq!(config.max_chars, 1000);
        assert_eq!(config.translator.model, "openai/gpt-4o");
        assert_eq!(config.translator.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_zero_budget_rejected() {
        assert!(AppConfig::from_toml("max_chars = 0").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[translator]\napi_base = \"http://127.0.0.1:9/v1\"").unwrap();
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.translator.api_base, "http://127.0.0.1:9/v1");
    }

    #[test]
    fn test_missing_file() {
        assert!(AppConfig::from_file("/nonexistent/doc-translator.toml").is_err());
    }

    #[test]
    fn test_lang_auto() {
        assert!(Lang::auto().is_auto());
        assert!(!Lang::new("Auto").is_auto());
        assert!(source_languages().iter().any(|l| l.code == DEFAULT_SOURCE_LANG));
    }
}
