//! Optional embedding step against the Ollama embeddings endpoint.
//!
//! Run once at startup to populate `Course::embedding`, and per query
//! when the catalog is fully embedded. Failures degrade to lexical
//! scoring; they never fail a request or startup.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::catalog::Course;
use crate::errors::{ChatbotError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct OllamaEmbedder {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest {
    model: String,
    prompt: String,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    embedding: Vec<f32>,
}

impl OllamaEmbedder {
    pub fn new(base_url: &str, model: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ChatbotError::HttpError)?;

        Ok(OllamaEmbedder {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Embed one text.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let url = format!("{}/api/embeddings", self.base_url);
        let request = EmbeddingRequest {
            model: self.model.clone(),
            prompt: text.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ChatbotError::EmbeddingError(format!("cannot reach {}: {}", self.base_url, e))
            })?;

        if !response.status().is_success() {
            return Err(ChatbotError::EmbeddingError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| ChatbotError::EmbeddingError(format!("bad response: {}", e)))?;

        if parsed.embedding.is_empty() {
            return Err(ChatbotError::EmbeddingError(
                "empty embedding returned".to_string(),
            ));
        }

        Ok(parsed.embedding)
    }

    /// Embed every course (`"{title}: {description}"`, the same text
    /// the lexical scorer indexes). Returns the number embedded; the
    /// caller treats any error as "continue without embeddings".
    pub async fn embed_catalog(&self, courses: &mut [Course]) -> Result<usize> {
        let mut embedded = 0;
        for course in courses.iter_mut() {
            let vector = self.embed(&course.indexed_text()).await?;
            course.embedding = Some(vector);
            embedded += 1;
        }
        Ok(embedded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let embedder = OllamaEmbedder::new("http://127.0.0.1:11434/", "nomic-embed-text").unwrap();
        assert_eq!(embedder.base_url, "http://127.0.0.1:11434");
    }

    #[test]
    fn test_embedding_response_parsing() {
        let parsed: EmbeddingResponse =
            serde_json::from_str(r#"{"embedding":[0.25,-0.5,1.0]}"#).unwrap();
        assert_eq!(parsed.embedding, vec![0.25, -0.5, 1.0]);
    }
}
