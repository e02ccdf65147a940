//! Top-N strategy: rank every course, keep the best `top_k`.

use crate::catalog::Catalog;
use crate::errors::Result;
use crate::retrieval::{
    scoring, validate_top_k, RetrievalContext, RetrievalQuery, RetrievalStrategy, StrategyKind,
};

pub struct TopNStrategy;

impl RetrievalStrategy for TopNStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::TopN
    }

    fn retrieve(
        &self,
        query: &RetrievalQuery,
        catalog: &Catalog,
        top_k: usize,
    ) -> Result<RetrievalContext> {
        validate_top_k(top_k)?;

        let mut context = RetrievalContext::new();
        for (rank, (index, score)) in scoring::rank_catalog(query, catalog)
            .into_iter()
            .take(top_k)
            .enumerate()
        {
            let course = catalog.courses()[index].clone();
            context.push(course, format!("relevance rank {}", rank + 1), score);
        }

        Ok(context)
    }
}
