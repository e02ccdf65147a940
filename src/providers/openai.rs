//! OpenAI provider: hosted chat-completions API.
//!
//! The API key is read from `OPENAI_API_KEY` at call time, so a missing
//! key only fails the request that needed it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::{ChatbotError, Result};
use crate::providers::{build_prompt, AnswerProvider};

const API_URL: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct OpenAiProvider {
    client: Client,
    model: String,
}

impl OpenAiProvider {
    pub fn new(model: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ChatbotError::HttpError)?;

        Ok(OpenAiProvider {
            client,
            model: model.to_string(),
        })
    }

    fn api_key() -> Result<String> {
        std::env::var("OPENAI_API_KEY").map_err(|_| ChatbotError::ProviderUnavailable {
            provider: "openai",
            reason: "OPENAI_API_KEY is not set".to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[async_trait]
impl AnswerProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn generate_answer(&self, question: &str, context: &str) -> Result<String> {
        let api_key = Self::api_key()?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(question, context),
            }],
        };

        let response = self
            .client
            .post(API_URL)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatbotError::ProviderUnavailable {
                provider: "openai",
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ChatbotError::ProviderError {
                provider: "openai",
                reason: format!("HTTP {}: {}", status, body),
            });
        }

        let parsed: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| ChatbotError::ProviderError {
                    provider: "openai",
                    reason: format!("bad response: {}", e),
                })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ChatbotError::ProviderError {
                provider: "openai",
                reason: "response contained no choices".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parsing() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "CSE340 covers algorithms."}}
            ]
        }"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.choices[0].message.content,
            "CSE340 covers algorithms."
        );
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"model\":\"gpt-4o-mini\""));
        assert!(json.contains("\"role\":\"user\""));
    }
}
