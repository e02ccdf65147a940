//! Error types for the course chatbot.
//!
//! One enum covers the whole crate: retrieval parameter validation,
//! runtime command targets, catalog loading, and provider failures.
//! Catalog-load warnings are data, not errors (see `catalog::loader`).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the chatbot.
#[derive(Error, Debug)]
pub enum ChatbotError {
    /// Bad strategy argument (e.g. `top_k == 0`)
    #[error("Invalid parameter `{param}`: {reason}")]
    InvalidParameter { param: &'static str, reason: String },

    /// Unrecognized retrieval strategy name in a `set strategy` command
    #[error("Unknown strategy: {0} (expected top_n, window, document or hierarchical)")]
    UnknownStrategy(String),

    /// Unrecognized provider name in a `set provider` command
    #[error("Unknown provider: {0} (expected ollama, openai or gemini)")]
    UnknownProvider(String),

    /// Catalog file missing at startup. The only fatal condition.
    #[error("Course catalog not found: {0}")]
    CatalogMissing(PathBuf),

    /// Provider cannot be reached or is not configured
    #[error("Provider {provider} unavailable: {reason}")]
    ProviderUnavailable {
        provider: &'static str,
        reason: String,
    },

    /// Provider was reached but the request failed
    #[error("Provider {provider} error: {reason}")]
    ProviderError {
        provider: &'static str,
        reason: String,
    },

    /// Embedding endpoint failure during the optional indexing step
    #[error("Embedding failed: {0}")]
    EmbeddingError(String),

    /// HTTP client errors
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON (de)serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ChatbotError {
    /// True for the two generation-failure kinds the controller surfaces
    /// to the user without ending the session.
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            ChatbotError::ProviderUnavailable { .. } | ChatbotError::ProviderError { .. }
        )
    }
}

/// Result type alias for chatbot operations
pub type Result<T> = std::result::Result<T, ChatbotError>;
