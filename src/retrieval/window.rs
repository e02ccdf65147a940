//! Window strategy: a contiguous catalog slice around the best match.
//!
//! Models "show me courses around X" — the single most relevant course
//! plus its neighbors in catalog order, clamped at the catalog edges.

use crate::catalog::Catalog;
use crate::errors::Result;
use crate::retrieval::{
    scoring, validate_top_k, RetrievalContext, RetrievalQuery, RetrievalStrategy, StrategyKind,
};

pub struct WindowStrategy {
    half_width: usize,
}

impl WindowStrategy {
    pub fn new(half_width: usize) -> Self {
        WindowStrategy { half_width }
    }
}

impl RetrievalStrategy for WindowStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Window
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
        let (center, _) = ranked[0];

        let start = center.saturating_sub(self.half_width);
        let end = (center + self.half_width).min(catalog.len() - 1);

        let center_id = catalog.courses()[center].id.clone();
        let mut context = RetrievalContext::new();
        for index in start..=end {
            let course = catalog.courses()[index].clone();
            let score = scoring::score_course(query, &course);
            let rationale = if index == center {
                "best match".to_string()
            } else {
                format!("catalog neighbor of {}", center_id)
            };
            context.push(course, rationale, score);
        }

        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Course;
    use crate::errors::ChatbotError;

    fn sample() -> Catalog {
        Catalog::new(vec![
            Course::new("CSE101", "Intro to Programming", "Variables and loops."),
            Course::new("CSE205", "Data Structures", "Lists and trees."),
            Course::new("CSE310", "Operating Systems", "Processes and memory."),
            Course::new("CSE340", "Algorithms", "Sorting and graphs."),
            Course::new("CSE445", "Machine Learning", "Models and data."),
        ])
    }

    #[test]
    fn test_window_centered_on_best_match() {
        let query = RetrievalQuery::new("processes memory");
        let context = WindowStrategy::new(1).retrieve(&query, &sample(), 3).unwrap();
        let ids: Vec<&str> = context
            .entries()
            .iter()
            .map(|e| e.course.id.as_str())
            .collect();
        assert_eq!(ids, vec!["CSE205", "CSE310", "CSE340"]);
        assert_eq!(context.entries()[1].rationale, "best match");
    }

    #[test]
    fn test_window_clamps_at_start() {
        let query = RetrievalQuery::new("variables loops");
        let context = WindowStrategy::new(2).retrieve(&query, &sample(), 3).unwrap();
        let ids: Vec<&str> = context
            .entries()
            .iter()
            .map(|e| e.course.id.as_str())
            .collect();
        assert_eq!(ids, vec!["CSE101", "CSE205", "CSE310"]);
    }

    #[test]
    fn test_window_clamps_at_end() {
        let query = RetrievalQuery::new("models trained on data");
        let context = WindowStrategy::new(2).retrieve(&query, &sample(), 3).unwrap();
        let ids: Vec<&str> = context
            .entries()
            .iter()
            .map(|e| e.course.id.as_str())
            .collect();
        assert_eq!(ids, vec!["CSE310", "CSE340", "CSE445"]);
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let query = RetrievalQuery::new("anything");
        let err = WindowStrategy::new(1)
            .retrieve(&query, &sample(), 0)
            .unwrap_err();
        assert!(matches!(err, ChatbotError::InvalidParameter { .. }));
    }

    #[test]
    fn test_empty_catalog_gives_empty_context() {
        let query = RetrievalQuery::new("anything");
        let context = WindowStrategy::new(2)
            .retrieve(&query, &Catalog::default(), 3)
            .unwrap();
        assert!(context.is_empty());
    }
}
