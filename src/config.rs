//! TOML configuration, stored at `~/.coursebuddy/config.toml`.
//!
//! Created with defaults on first run. CLI flags override individual
//! fields after loading (see `cli::args`).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the JSONL course file
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

/// Retrieval defaults shared by the strategies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Strategy active at startup
    #[serde(default = "default_strategy")]
    pub default_strategy: String,
    /// Courses returned by ranking strategies
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Courses kept on each side of the best match by the window strategy
    #[serde(default = "default_window_half_width")]
    pub window_half_width: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Provider active at startup
    #[serde(default = "default_provider")]
    pub default: String,
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    #[serde(default = "default_ollama_host")]
    pub host: String,
    #[serde(default = "default_ollama_port")]
    pub port: u16,
    #[serde(default = "default_ollama_model")]
    pub model: String,
    /// Model used for the catalog embedding step
    #[serde(default = "default_embed_model")]
    pub embed_model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    #[serde(default = "default_openai_model")]
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_gemini_model")]
    pub model: String,
}

fn default_catalog_path() -> String {
    "courses.jsonl".to_string()
}

fn default_strategy() -> String {
    "top_n".to_string()
}

fn default_top_k() -> usize {
    3
}

fn default_window_half_width() -> usize {
    2
}

fn default_provider() -> String {
    "ollama".to_string()
}

fn default_ollama_host() -> String {
    "127.0.0.1".to_string()
}

fn default_ollama_port() -> u16 {
    11434
}

fn default_ollama_model() -> String {
    "phi3".to_string()
}

fn default_embed_model() -> String {
    "nomic-embed-text".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            path: default_catalog_path(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        RetrievalConfig {
            default_strategy: default_strategy(),
            top_k: default_top_k(),
            window_half_width: default_window_half_width(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            default: default_provider(),
            ollama: OllamaConfig::default(),
            openai: OpenAiConfig::default(),
            gemini: GeminiConfig::default(),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        OllamaConfig {
            host: default_ollama_host(),
            port: default_ollama_port(),
            model: default_ollama_model(),
            embed_model: default_embed_model(),
        }
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        OpenAiConfig {
            model: default_openai_model(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        GeminiConfig {
            model: default_gemini_model(),
        }
    }
}

impl OllamaConfig {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Config {
    /// Load configuration from file, creating defaults if it doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents =
            fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;

        Ok(home.join(".coursebuddy").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.retrieval.top_k, 3);
        assert_eq!(config.retrieval.window_half_width, 2);
        assert_eq!(config.retrieval.default_strategy, "top_n");
        assert_eq!(config.providers.default, "ollama");
        assert_eq!(config.providers.ollama.base_url(), "http://127.0.0.1:11434");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [retrieval]
            top_k = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.retrieval.top_k, 5);
        assert_eq!(config.retrieval.window_half_width, 2);
        assert_eq!(config.providers.ollama.model, "phi3");
    }

    #[test]
    fn test_round_trip() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_string).unwrap();
        assert_eq!(parsed.catalog.path, config.catalog.path);
        assert_eq!(parsed.providers.gemini.model, config.providers.gemini.model);
    }
}
