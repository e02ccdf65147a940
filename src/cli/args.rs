//! Command-line argument parsing.
//!
//! Flags override the corresponding config-file fields after loading.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// CourseBuddy - RAG chatbot for a university course catalog
#[derive(Parser, Debug)]
#[command(name = "coursebuddy")]
#[command(version)]
#[command(about = "Ask questions about a university course catalog", long_about = None)]
pub struct Args {
    /// One-shot question (starts the interactive chat when omitted)
    #[arg(value_name = "QUESTION")]
    pub question: Option<String>,

    /// Path to the JSONL course catalog
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Initial retrieval strategy (top_n, window, document, hierarchical)
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Initial answer provider (ollama, openai, gemini)
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Ollama model for generation
    #[arg(short, long)]
    pub model: Option<String>,

    /// Ollama host
    #[arg(long)]
    pub host: Option<String>,

    /// Ollama port
    #[arg(long)]
    pub port: Option<u16>,

    /// Courses returned by ranking strategies
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Skip the catalog embedding step (lexical matching only)
    #[arg(long)]
    pub no_embed: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive chat (the default with no question)
    Start,

    /// Display current configuration
    Config,
}

impl Args {
    /// Fold CLI overrides into the loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.catalog {
            config.catalog.path = path.display().to_string();
        }
        if let Some(strategy) = &self.strategy {
            config.retrieval.default_strategy = strategy.clone();
        }
        if let Some(provider) = &self.provider {
            config.providers.default = provider.clone();
        }
        if let Some(model) = &self.model {
            config.providers.ollama.model = model.clone();
        }
        if let Some(host) = &self.host {
            config.providers.ollama.host = host.clone();
        }
        if let Some(port) = self.port {
            config.providers.ollama.port = port;
        }
        if let Some(top_k) = self.top_k {
            config.retrieval.top_k = top_k;
        }
    }
}
