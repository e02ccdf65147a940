//! Chatbot controller: wires one request through routing, retrieval,
//! and generation, and owns the active strategy/provider selection.

use colored::Colorize;

use crate::catalog::Catalog;
use crate::config::{Config, ProvidersConfig, RetrievalConfig};
use crate::embedding::OllamaEmbedder;
use crate::errors::Result;
use crate::providers::{build_provider, AnswerProvider, ProviderKind};
use crate::retrieval::{
    build_strategy, RetrievalContext, RetrievalQuery, RetrievalStrategy, StrategyKind,
};
use crate::routing::{QueryRouter, RouteResult};

/// Rationale attached to the router's direct-match shortcut contexts.
const DIRECT_ID_RATIONALE: &str = "direct id match";
const DIRECT_TITLE_RATIONALE: &str = "direct title match";

pub struct Chatbot {
    catalog: Catalog,
    router: QueryRouter,
    retrieval: RetrievalConfig,
    providers_config: ProvidersConfig,
    strategy_kind: StrategyKind,
    strategy: Box<dyn RetrievalStrategy>,
    provider_kind: ProviderKind,
    provider: Box<dyn AnswerProvider>,
    embedder: Option<OllamaEmbedder>,
}

impl Chatbot {
    /// Build a controller from config defaults. The catalog is owned
    /// and read-only from here on.
    pub fn new(catalog: Catalog, config: &Config) -> Result<Self> {
        let strategy_kind = StrategyKind::parse(&config.retrieval.default_strategy)?;
        let provider_kind = ProviderKind::parse(&config.providers.default)?;

        let strategy = build_strategy(strategy_kind, &config.retrieval);
        let provider = build_provider(provider_kind, &config.providers)?;

        Ok(Chatbot {
            catalog,
            router: QueryRouter::new(),
            retrieval: config.retrieval.clone(),
            providers_config: config.providers.clone(),
            strategy_kind,
            strategy,
            provider_kind,
            provider,
            embedder: None,
        })
    }

    /// Replace the provider instance (dependency injection for tests;
    /// the kind label is left as-is).
    pub fn with_provider(mut self, provider: Box<dyn AnswerProvider>) -> Self {
        self.provider = provider;
        self
    }

    /// Attach the query embedder. Without one, scoring is lexical.
    pub fn with_embedder(mut self, embedder: OllamaEmbedder) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy_kind
    }

    pub fn provider_kind(&self) -> ProviderKind {
        self.provider_kind
    }

    /// Switch the active retrieval strategy. An unknown name errors and
    /// leaves the current selection unchanged.
    pub fn set_strategy(&mut self, name: &str) -> Result<StrategyKind> {
        let kind = StrategyKind::parse(name)?;
        self.strategy_kind = kind;
        self.strategy = build_strategy(kind, &self.retrieval);
        Ok(kind)
    }

    /// Switch the active provider. Same validation discipline as
    /// [`Chatbot::set_strategy`]; construction never probes the backend,
    /// so missing keys still surface per request, not here.
    pub fn set_provider(&mut self, name: &str) -> Result<ProviderKind> {
        let kind = ProviderKind::parse(name)?;
        let provider = build_provider(kind, &self.providers_config)?;
        self.provider_kind = kind;
        self.provider = provider;
        Ok(kind)
    }

    /// Classify a question without retrieving.
    pub fn route(&self, question: &str) -> RouteResult {
        self.router.route(question, &self.catalog)
    }

    /// One full request: route, retrieve, generate.
    ///
    /// Generation failures are returned as errors for this request
    /// only; the active selections are never mutated by a failure.
    pub async fn ask(&self, question: &str) -> Result<String> {
        let context = self.retrieve_context(question).await?;
        self.provider
            .generate_answer(question, &context.to_prompt_block())
            .await
    }

    /// Routing + retrieval, no generation.
    ///
    /// A direct router match synthesizes a single-course context and
    /// bypasses the active strategy (precision over recall).
    pub async fn retrieve_context(&self, question: &str) -> Result<RetrievalContext> {
        match self.route(question) {
            RouteResult::DirectCourseMatch(course) => {
                Ok(RetrievalContext::direct(course, DIRECT_ID_RATIONALE))
            }
            RouteResult::DirectTitleMatch(course) => {
                Ok(RetrievalContext::direct(course, DIRECT_TITLE_RATIONALE))
            }
            RouteResult::SemanticFallback => {
                let query = self.build_query(question).await;
                self.strategy
                    .retrieve(&query, &self.catalog, self.retrieval.top_k)
            }
        }
    }

    /// Build the per-request query. The query embedding is only
    /// computed when the whole catalog is embedded; an embed failure
    /// degrades to lexical scoring instead of failing the request.
    async fn build_query(&self, question: &str) -> RetrievalQuery {
        let mut query = RetrievalQuery::new(question);

        if self.catalog.fully_embedded() {
            if let Some(embedder) = &self.embedder {
                match embedder.embed(question).await {
                    Ok(vector) => query.embedding = Some(vector),
                    Err(e) => {
                        eprintln!(
                            "{}",
                            format!("Warning: {}; using lexical matching", e).yellow()
                        );
                    }
                }
            }
        }

        query
    }
}
