//! Document strategy: the single best-matching course, whole.
//!
//! For "give me the full description of one course" questions. The
//! record already carries the complete description, so no truncation
//! happens anywhere downstream.

use crate::catalog::Catalog;
use crate::errors::Result;
use crate::retrieval::{
    scoring, validate_top_k, RetrievalContext, RetrievalQuery, RetrievalStrategy, StrategyKind,
};

pub struct DocumentStrategy;

impl RetrievalStrategy for DocumentStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Document
    }

    fn retrieve(
        &self,
        query: &RetrievalQuery,
        catalog: &Catalog,
        top_k: usize,
    ) -> Result<RetrievalContext> {
        validate_top_k(top_k)?;

        if catalog.is_empty() {
            return Ok(RetrievalContext::new());
        }

        let ranked = scoring::rank_catalog(query, catalog);
        let (index, score) = ranked[0];
        let course = catalog.courses()[index].clone();

        let mut context = RetrievalContext::new();
        context.push(course, "best matching course document".to_string(), score);
        Ok(context)
    }
}
