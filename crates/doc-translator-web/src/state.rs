use doc_translator_core::{AppConfig, DocumentTranslator, Error, Result};
use tracing::{info, warn};

/// Global application state
///
/// Read-only after startup; every request runs its own pipeline pass.
pub struct AppState {
    /// `None` when no API key was configured at startup
    pipeline: Option<DocumentTranslator>,
}

impl AppState {
    /// Build the state from configuration.
    ///
    /// A missing API key does not stop the server: every translation request
    /// is answered with a configuration error instead. Any other invalid
    /// configuration is fatal.
    pub fn new(config: AppConfig) -> Result<Self> {
        let pipeline = match DocumentTranslator::new(config) {
            Ok(pipeline) => {
                info!("Translation backend: {}", pipeline.translator_info().name);
                Some(pipeline)
            }
            Err(Error::MissingApiKey) => {
                warn!("OPENROUTER_API_KEY not set; translation requests will fail");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(Self { pipeline })
    }

    /// Wrap an already constructed pipeline.
    #[cfg(test)]
    pub const fn with_pipeline(pipeline: DocumentTranslator) -> Self {
        Self {
            pipeline: Some(pipeline),
        }
    }

    /// The translation pipeline, or a configuration error if it is unavailable.
    pub fn pipeline(&self) -> Result<&DocumentTranslator> {
        self.pipeline.as_ref().ok_or(Error::MissingApiKey)
    }
}
