//! Ollama provider: local model server, streaming generation.
//!
//! POSTs to `/api/generate` with `stream: true` and concatenates the
//! NDJSON chunks into the final answer. A connection failure means the
//! server is not running (`ProviderUnavailable`); a non-2xx status is a
//! `ProviderError`.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::{ChatbotError, Result};
use crate::providers::{build_prompt, AnswerProvider};

/// Request timeout. Generation on small local models can be slow.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
}

impl OllamaProvider {
    pub fn new(base_url: &str, model: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ChatbotError::HttpError)?;

        Ok(OllamaProvider {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    /// Check whether the Ollama server is reachable.
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/version", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateChunk {
    #[serde(default)]
    response: String,
    #[serde(default)]
    done: bool,
}

#[async_trait]
impl AnswerProvider for OllamaProvider {
    fn name(&self) -> &'static str {
        "ollama"
    }

    async fn generate_answer(&self, question: &str, context: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: build_prompt(question, context),
            stream: true,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatbotError::ProviderUnavailable {
                provider: "ollama",
                reason: format!("cannot reach {}: {}", self.base_url, e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ChatbotError::ProviderError {
                provider: "ollama",
                reason: format!("HTTP {}: {}", status, body),
            });
        }

        let mut stream = response.bytes_stream();
        let mut answer = String::new();
        let mut buffer = String::new();

        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(|e| ChatbotError::ProviderError {
                provider: "ollama",
                reason: format!("stream interrupted: {}", e),
            })?;
            buffer.push_str(&String::from_utf8_lossy(&bytes));

            // NDJSON: consume complete lines, keep the partial tail
            while let Some(pos) = buffer.find('\n') {
                let line: String = buffer.drain(..=pos).collect();
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let parsed: GenerateChunk =
                    serde_json::from_str(line).map_err(|e| ChatbotError::ProviderError {
                        provider: "ollama",
                        reason: format!("bad chunk: {}", e),
                    })?;
                answer.push_str(&parsed.response);
                if parsed.done {
                    return Ok(answer);
                }
            }
        }

        // Stream ended without a done marker; parse any leftover tail.
        let tail = buffer.trim();
        if !tail.is_empty() {
            if let Ok(parsed) = serde_json::from_str::<GenerateChunk>(tail) {
                answer.push_str(&parsed.response);
            }
        }

        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let provider = OllamaProvider::new("http://127.0.0.1:11434/", "phi3").unwrap();
        assert_eq!(provider.base_url, "http://127.0.0.1:11434");
    }

    #[test]
    fn test_chunk_deserialization() {
        let chunk: GenerateChunk =
            serde_json::from_str(r#"{"model":"phi3","response":"Hi","done":false}"#).unwrap();
        assert_eq!(chunk.response, "Hi");
        assert!(!chunk.done);
    }

    #[test]
    fn test_final_chunk_may_omit_response() {
        let chunk: GenerateChunk = serde_json::from_str(r#"{"done":true}"#).unwrap();
        assert_eq!(chunk.response, "");
        assert!(chunk.done);
    }
}
