//! Gemini provider: Google hosted generateContent API.
//!
//! Same call-time key discipline as the OpenAI adapter, via
//! `GEMINI_API_KEY`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::{ChatbotError, Result};
use crate::providers::{build_prompt, AnswerProvider};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct GeminiProvider {
    client: Client,
    model: String,
}

impl GeminiProvider {
    pub fn new(model: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ChatbotError::HttpError)?;

        Ok(GeminiProvider {
            client,
            model: model.to_string(),
        })
    }

    fn api_key() -> Result<String> {
        std::env::var("GEMINI_API_KEY").map_err(|_| ChatbotError::ProviderUnavailable {
            provider: "gemini",
            reason: "GEMINI_API_KEY is not set".to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[async_trait]
impl AnswerProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate_answer(&self, question: &str, context: &str) -> Result<String> {
        let api_key = Self::api_key()?;
        let url = format!("{}/{}:generateContent", API_BASE, self.model);

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(question, context),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatbotError::ProviderUnavailable {
                provider: "gemini",
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ChatbotError::ProviderError {
                provider: "gemini",
                reason: format!("HTTP {}: {}", status, body),
            });
        }

        let parsed: GenerateContentResponse =
            response
                .json()
                .await
                .map_err(|e| ChatbotError::ProviderError {
                    provider: "gemini",
                    reason: format!("bad response: {}", e),
                })?;

        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| ChatbotError::ProviderError {
                provider: "gemini",
                reason: "response contained no candidates".to_string(),
            })
    }
}
