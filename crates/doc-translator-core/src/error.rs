use serde::Serialize;
use thiserror::Error;

use crate::format::DocumentFormat;

/// Unified error type for doc-translator-core
///
/// Every variant carries the full detail needed for server-side logs. What a
/// caller gets to see is decided by [`Error::envelope`], which never includes
/// provider bodies, transport errors or credentials.
#[derive(Error, Debug)]
pub enum Error {
    // ==========================================================================
    // Configuration Errors
    // ==========================================================================
    /// Provider API key not configured
    #[error("translation API key not configured")]
    MissingApiKey,

    /// Failed to load configuration file
    #[error("failed to load config: {0}")]
    ConfigLoad(String),

    /// Invalid configuration value
    #[error("invalid config value for '{field}': {reason}")]
    ConfigInvalid { field: String, reason: String },

    // ==========================================================================
    // Request Errors
    // ==========================================================================
    /// A required form field was not supplied
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The request body could not be read as a form
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// Declared content type outside the supported set
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    // ==========================================================================
    // Extraction Errors
    // ==========================================================================
    /// A format parser rejected the document bytes
    #[error("failed to extract text from {format} document: {reason}")]
    Extraction {
        format: DocumentFormat,
        reason: String,
    },

    /// Extraction produced no text (or only whitespace)
    #[error("document contains no extractable text")]
    EmptyDocument,

    // ==========================================================================
    // Provider Errors
    // ==========================================================================
    /// Provider answered with a non-2xx status
    #[error("translation API request failed: HTTP {status}: {body}")]
    ProviderRequest { status: u16, body: String },

    /// Provider could not be reached (DNS, connect, reset, body read)
    #[error("translation API unreachable: {0}")]
    ProviderUnreachable(String),

    /// Provider body did not have the expected shape
    #[error("invalid translation API response: {reason}")]
    InvalidProviderResponse { reason: String, body: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Closed set of failure kinds exposed at the HTTP boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Configuration,
    Validation,
    UnsupportedFormat,
    ExtractionFailure,
    EmptyDocument,
    ProviderRequestFailure,
    ProviderUnreachable,
    InvalidProviderResponse,
}

impl ErrorKind {
    /// HTTP status for this kind of failure.
    pub const fn http_status(self) -> u16 {
        match self {
            Self::Validation | Self::UnsupportedFormat | Self::EmptyDocument => 400,
            Self::Configuration | Self::ExtractionFailure | Self::InvalidProviderResponse => 500,
            Self::ProviderRequestFailure | Self::ProviderUnreachable => 502,
        }
    }
}

/// Caller-facing description of a failed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub kind: ErrorKind,
    pub message: String,
    pub http_status: u16,
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingApiKey | Self::ConfigLoad(_) | Self::ConfigInvalid { .. } => {
                ErrorKind::Configuration
            }
            Self::MissingField(_) | Self::MalformedRequest(_) => ErrorKind::Validation,
            Self::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Self::Extraction { .. } => ErrorKind::ExtractionFailure,
            Self::EmptyDocument => ErrorKind::EmptyDocument,
            Self::ProviderRequest { .. } => ErrorKind::ProviderRequestFailure,
            Self::ProviderUnreachable(_) => ErrorKind::ProviderUnreachable,
            Self::InvalidProviderResponse { .. } => ErrorKind::InvalidProviderResponse,
        }
    }

    /// Message safe to hand back to the caller.
    pub fn public_message(&self) -> String {
        match self {
            Self::MissingApiKey => "Server configuration error: API key missing.".to_string(),
            Self::ConfigLoad(_) | Self::ConfigInvalid { .. } => {
                "Server configuration error.".to_string()
            }
            Self::MissingField("file") => "No file uploaded.".to_string(),
            Self::MissingField("sourceLanguage") => "No source language specified.".to_string(),
            Self::MissingField(field) => format!("Missing required field: {field}."),
            Self::MalformedRequest(_) => "Invalid multipart form data.".to_string(),
            Self::UnsupportedFormat(declared) => format!("Unsupported file type: {declared}"),
            Self::Extraction { format, .. } => format!("Failed to parse {} file.", format.label()),
            Self::EmptyDocument => {
                "Could not extract text from the document or the document is empty.".to_string()
            }
            Self::ProviderRequest { status, .. } => {
                format!("Upstream translation request failed (HTTP {status}).")
            }
            Self::ProviderUnreachable(_) => "Failed to reach the translation service.".to_string(),
            Self::InvalidProviderResponse { .. } => {
                "Invalid response from translation service.".to_string()
            }
        }
    }

    /// Classify this error into the envelope returned to the caller.
    pub fn envelope(&self) -> ErrorEnvelope {
        let kind = self.kind();
        ErrorEnvelope {
            kind,
            message: self.public_message(),
            http_status: kind.http_status(),
        }
    }
}
