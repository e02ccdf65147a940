//! Hierarchical strategy: coarse filter, then rank within the subset.
//!
//! Stage one narrows the catalog by a coarse key mentioned in the
//! query: a subject prefix ("cse") or a course-level token ("300" /
//! "300-level"). Stage two is a Top-N ranking inside that subset. An
//! empty subset falls back to ranking the full catalog, so the result
//! is never empty while the catalog has courses.

use crate::catalog::Catalog;
use crate::errors::Result;
use crate::retrieval::{
    scoring, validate_top_k, RetrievalContext, RetrievalQuery, RetrievalStrategy, StrategyKind,
};

pub struct HierarchicalStrategy;

impl HierarchicalStrategy {
    /// Indices of courses whose subject prefix or level digit appears
    /// in the query tokens.
    fn coarse_filter(query: &RetrievalQuery, catalog: &Catalog) -> Vec<usize> {
        let levels: Vec<char> = query
            .tokens
            .iter()
            .filter(|t| t.len() == 3 && t.ends_with("00"))
            .filter_map(|t| t.chars().next())
            .filter(|c| c.is_ascii_digit())
            .collect();

        catalog
            .courses()
            .iter()
            .enumerate()
            .filter(|(_, course)| {
                let prefix = course.subject_prefix();
                let prefix_hit = !prefix.is_empty() && query.tokens.contains(&prefix);
                let level_hit = course
                    .level_digit()
                    .map(|d| levels.contains(&d))
                    .unwrap_or(false);
                prefix_hit || level_hit
            })
            .map(|(index, _)| index)
            .collect()
    }
}

impl RetrievalStrategy for HierarchicalStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Hierarchical
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

        let subset = Self::coarse_filter(query, catalog);
        let (ranked, narrowed) = if subset.is_empty() {
            (scoring::rank_catalog(query, catalog), false)
        } else {
            (scoring::rank_subset(query, catalog, subset), true)
        };

        let mut context = RetrievalContext::new();
        for (rank, (index, score)) in ranked.into_iter().take(top_k).enumerate() {
            let course = catalog.courses()[index].clone();
            let rationale = if narrowed {
                format!("rank {} within matched subject/level", rank + 1)
            } else {
                format!("rank {} (full catalog fallback)", rank + 1)
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
            Course::new("CSE340", "Algorithms", "Sorting and graphs."),
            Course::new("MAT265", "Calculus", "Limits and derivatives."),
            Course::new("MAT343", "Linear Algebra", "Matrices and vectors."),
        ])
    }

    #[test]
    fn test_subject_prefix_narrows_candidates() {
        let query = RetrievalQuery::new("which MAT course covers matrices");
        let context = HierarchicalStrategy.retrieve(&query, &sample(), 2).unwrap();
        assert_eq!(context.len(), 2);
        for entry in context.entries() {
            assert!(entry.course.id.starts_with("MAT"));
        }
        assert_eq!(context.entries()[0].course.id, "MAT343");
    }

    #[test]
    fn test_level_token_narrows_candidates() {
        let query = RetrievalQuery::new("any good 300-level options?");
        let context = HierarchicalStrategy.retrieve(&query, &sample(), 4).unwrap();
        let ids: Vec<&str> = context
            .entries()
            .iter()
            .map(|e| e.course.id.as_str())
            .collect();
        assert_eq!(ids, vec!["CSE340", "MAT343"]);
    }

    #[test]
    fn test_falls_back_to_full_catalog() {
        // No subject or level mentioned: must still return results.
        let query = RetrievalQuery::new("something about sorting");
        let context = HierarchicalStrategy.retrieve(&query, &sample(), 2).unwrap();
        assert_eq!(context.len(), 2);
        assert_eq!(context.entries()[0].course.id, "CSE340");
        assert!(context.entries()[0].rationale.contains("fallback"));
    }

    #[test]
    fn test_never_empty_on_nonempty_catalog() {
        let query = RetrievalQuery::new("zzz qqq xxx");
        let context = HierarchicalStrategy.retrieve(&query, &sample(), 3).unwrap();
        assert!(!context.is_empty());
    }

    #[test]
    fn test_zero_top_k_rejected() {
        let query = RetrievalQuery::new("anything");
        let err = HierarchicalStrategy
            .retrieve(&query, &sample(), 0)
            .unwrap_err();
        assert!(matches!(err, ChatbotError::InvalidParameter { .. }));
    }

    #[test]
    fn test_empty_catalog_gives_empty_context() {
        let query = RetrievalQuery::new("anything");
        let context = HierarchicalStrategy
            .retrieve(&query, &Catalog::default(), 3)
            .unwrap();
        assert!(context.is_empty());
    }
}
