//! Retrieval strategies: interchangeable algorithms that turn a query
//! and the catalog into a ranked context for generation.
//!
//! Strategies are selected by name at runtime and must be deterministic
//! for identical inputs. An empty catalog yields an empty context, not
//! an error; `top_k == 0` is rejected by every variant.

pub mod document;
pub mod hierarchical;
pub mod scoring;
pub mod top_n;
pub mod window;

pub use document::DocumentStrategy;
pub use hierarchical::HierarchicalStrategy;
pub use top_n::TopNStrategy;
pub use window::WindowStrategy;

use std::fmt;

use crate::catalog::{Catalog, Course};
use crate::config::RetrievalConfig;
use crate::errors::{ChatbotError, Result};

/// Names of the selectable strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    TopN,
    Window,
    Document,
    Hierarchical,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::TopN,
        StrategyKind::Window,
        StrategyKind::Document,
        StrategyKind::Hierarchical,
    ];

    /// Parse a runtime command target. Unknown names fail without
    /// touching the current selection.
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "top_n" => Ok(StrategyKind::TopN),
            "window" => Ok(StrategyKind::Window),
            "document" => Ok(StrategyKind::Document),
            "hierarchical" => Ok(StrategyKind::Hierarchical),
            other => Err(ChatbotError::UnknownStrategy(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::TopN => "top_n",
            StrategyKind::Window => "window",
            StrategyKind::Document => "document",
            StrategyKind::Hierarchical => "hierarchical",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query with its derived fields, built once per request and
/// discarded after the response.
#[derive(Debug, Clone)]
pub struct RetrievalQuery {
    pub text: String,
    pub tokens: Vec<String>,
    /// Present only when the whole catalog is embedded and the embedder
    /// succeeded for this query.
    pub embedding: Option<Vec<f32>>,
}

impl RetrievalQuery {
    pub fn new(text: &str) -> Self {
        RetrievalQuery {
            text: text.to_string(),
            tokens: scoring::tokenize(text),
            embedding: None,
        }
    }
}

/// One retrieved course with the reason it was selected.
#[derive(Debug, Clone)]
pub struct ContextEntry {
    pub course: Course,
    pub rationale: String,
    pub score: f32,
}

/// Ordered retrieval result handed to the generation provider.
/// Constructed by a strategy (or the controller's direct-match
/// shortcut), consumed once, never retained.
#[derive(Debug, Clone, Default)]
pub struct RetrievalContext {
    entries: Vec<ContextEntry>,
}

impl RetrievalContext {
    pub fn new() -> Self {
        RetrievalContext::default()
    }

    /// Single-course context for the router's direct-match shortcut.
    pub fn direct(course: Course, rationale: &str) -> Self {
        let mut context = RetrievalContext::new();
        context.push(course, rationale.to_string(), 1.0);
        context
    }

    pub fn push(&mut self, course: Course, rationale: String, score: f32) {
        self.entries.push(ContextEntry {
            course,
            rationale,
            score,
        });
    }

    pub fn entries(&self) -> &[ContextEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Format the context block for the provider prompt.
    pub fn to_prompt_block(&self) -> String {
        let mut parts = Vec::with_capacity(self.entries.len());
        for (i, entry) in self.entries.iter().enumerate() {
            parts.push(format!(
                "[Course {}] {} - {} ({})\n{}",
                i + 1,
                entry.course.id,
                entry.course.title,
                entry.rationale,
                entry.course.description
            ));
        }
        parts.join("\n\n")
    }
}

/// Capability implemented by every retrieval strategy.
pub trait RetrievalStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    /// Produce a ranked context of at most `top_k` courses.
    fn retrieve(
        &self,
        query: &RetrievalQuery,
        catalog: &Catalog,
        top_k: usize,
    ) -> Result<RetrievalContext>;
}

/// Build the strategy for a kind, wiring in config options.
pub fn build_strategy(kind: StrategyKind, config: &RetrievalConfig) -> Box<dyn RetrievalStrategy> {
    match kind {
        StrategyKind::TopN => Box::new(TopNStrategy),
        StrategyKind::Window => Box::new(WindowStrategy::new(config.window_half_width)),
        StrategyKind::Document => Box::new(DocumentStrategy),
        StrategyKind::Hierarchical => Box::new(HierarchicalStrategy),
    }
}

/// Callers are expected to validate, but every strategy defends too.
pub(crate) fn validate_top_k(top_k: usize) -> Result<()> {
    if top_k == 0 {
        return Err(ChatbotError::InvalidParameter {
            param: "top_k",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}
