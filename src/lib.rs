//! CourseBuddy - RAG chatbot for a university course catalog
//!
//! Answers natural-language questions about a fixed course catalog by
//! routing each query to the cheapest matcher that can handle it,
//! retrieving relevant courses with a runtime-selectable strategy, and
//! handing the context to a swappable LLM provider for answer
//! synthesis.
//!
//! # Architecture
//!
//! - **catalog**: course records + JSONL loader (read-only after load)
//! - **routing**: chain of query matchers (id, title, fallback)
//! - **retrieval**: strategy trait + four variants, shared scoring
//! - **providers**: uniform interface over Ollama/OpenAI/Gemini
//! - **chatbot**: controller wiring one request end to end
//! - **repl**: interactive terminal loop

pub mod catalog;
pub mod chatbot;
pub mod cli;
pub mod config;
pub mod embedding;
pub mod errors;
pub mod providers;
pub mod repl;
pub mod retrieval;
pub mod routing;

// Re-export commonly used types
pub use chatbot::Chatbot;
pub use errors::{ChatbotError, Result};
