//! Generation providers: a uniform interface over swappable LLM
//! backends (local Ollama server, OpenAI, Gemini).
//!
//! The core only depends on [`AnswerProvider`]; everything
//! backend-specific lives in the per-provider modules. Missing
//! configuration (API keys, unreachable server) surfaces at call time
//! as `ProviderUnavailable`, never at startup.

pub mod gemini;
pub mod ollama;
pub mod openai;

pub use gemini::GeminiProvider;
pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

use std::fmt;

use async_trait::async_trait;

use crate::config::ProvidersConfig;
use crate::errors::{ChatbotError, Result};

/// Names of the selectable providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Ollama,
    OpenAi,
    Gemini,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 3] = [
        ProviderKind::Ollama,
        ProviderKind::OpenAi,
        ProviderKind::Gemini,
    ];

    /// Parse a runtime command target. Unknown names fail without
    /// touching the current selection.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "ollama" => Ok(ProviderKind::Ollama),
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" => Ok(ProviderKind::Gemini),
            other => Err(ChatbotError::UnknownProvider(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Ollama => "ollama",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability implemented by every generation backend.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Generate an answer for the question given the retrieved course
    /// context (already formatted as text).
    async fn generate_answer(&self, question: &str, context: &str) -> Result<String>;
}

/// Prompt shared by every backend.
pub fn build_prompt(question: &str, context: &str) -> String {
    if context.is_empty() {
        return format!(
            "You are an assistant for a university course catalog. \
             No matching course information was found.\n\nQuestion: {}",
            question
        );
    }
    format!(
        "You are an assistant for a university course catalog. \
         Answer the question using the course information below.\n\n\
         {}\n\nQuestion: {}",
        context, question
    )
}

/// Build the provider for a kind, wiring in config options.
pub fn build_provider(
    kind: ProviderKind,
    config: &ProvidersConfig,
) -> Result<Box<dyn AnswerProvider>> {
    Ok(match kind {
        ProviderKind::Ollama => Box::new(OllamaProvider::new(
            &config.ollama.base_url(),
            &config.ollama.model,
        )?),
        ProviderKind::OpenAi => Box::new(OpenAiProvider::new(&config.openai.model)?),
        ProviderKind::Gemini => Box::new(GeminiProvider::new(&config.gemini.model)?),
    })
}
