//! Relevance scoring shared by all retrieval strategies.
//!
//! Cosine similarity when both the query and the course carry an
//! embedding; otherwise a deterministic lexical fallback (fraction of
//! distinct query tokens present in the course text). Every strategy
//! scores through [`score_course`] so rankings stay comparable.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::catalog::{Catalog, Course};
use crate::retrieval::RetrievalQuery;

/// Lowercased alphanumeric tokens, in text order.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect()
}

/// Fraction of distinct query tokens that occur in `text`. Returns 0.0
/// for an empty query.
pub fn lexical_overlap(query_tokens: &[String], text: &str) -> f32 {
    let distinct: BTreeSet<&String> = query_tokens.iter().collect();
    if distinct.is_empty() {
        return 0.0;
    }

    let doc_tokens: BTreeSet<String> = tokenize(text).into_iter().collect();
    let matched = distinct
        .iter()
        .filter(|token| doc_tokens.contains(token.as_str()))
        .count();

    matched as f32 / distinct.len() as f32
}

/// Cosine similarity of two vectors. Mismatched lengths or zero norms
/// score 0.0 rather than erroring.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Score one course against the query.
pub fn score_course(query: &RetrievalQuery, course: &Course) -> f32 {
    match (&query.embedding, &course.embedding) {
        (Some(q), Some(c)) => cosine_similarity(q, c),
        _ => lexical_overlap(&query.tokens, &course.indexed_text()),
    }
}

/// Rank the whole catalog: descending score, ties broken by catalog
/// order. Deterministic for identical inputs.
pub fn rank_catalog(query: &RetrievalQuery, catalog: &Catalog) -> Vec<(usize, f32)> {
    rank_subset(query, catalog, (0..catalog.len()).collect())
}

/// Rank a subset of catalog indices with the same ordering rules.
pub fn rank_subset(
    query: &RetrievalQuery,
    catalog: &Catalog,
    indices: Vec<usize>,
) -> Vec<(usize, f32)> {
    let mut scored: Vec<(usize, f32)> = indices
        .into_iter()
        .filter_map(|i| catalog.get(i).map(|c| (i, score_course(query, c))))
        .collect();

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Course;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("What is CSE340, really?"),
            vec!["what", "is", "cse340", "really"]
        );
    }

    #[test]
    fn test_lexical_overlap_counts_distinct_tokens() {
        let query = tokenize("sorting sorting graphs");
        let score = lexical_overlap(&query, "Algorithms: Sorting and graphs.");
        // Two distinct query tokens, both present.
        assert!((score - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_lexical_overlap_empty_query() {
        assert_eq!(lexical_overlap(&[], "anything"), 0.0);
    }

    #[test]
    fn test_cosine_similarity_identical_vectors() {
        let v = vec![0.3, 0.4, 0.5];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_mismatched_lengths() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0]), 0.0);
    }

    #[test]
    fn test_cosine_similarity_zero_norm() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
    }

    #[test]
    fn test_score_falls_back_without_embeddings() {
        let query = RetrievalQuery::new("sorting graphs");
        let course = Course::new("CSE340", "Algorithms", "Sorting and graphs.");
        assert!(score_course(&query, &course) > 0.9);
    }

    #[test]
    fn test_score_uses_cosine_when_both_embedded() {
        let mut query = RetrievalQuery::new("anything");
        query.embedding = Some(vec![1.0, 0.0]);
        let mut course = Course::new("CSE340", "Algorithms", "Sorting and graphs.");
        course.embedding = Some(vec![0.0, 1.0]);
        // Orthogonal embeddings, even though the text would overlap.
        assert_eq!(score_course(&query, &course), 0.0);
    }

    #[test]
    fn test_rank_catalog_ties_keep_catalog_order() {
        let catalog = Catalog::new(vec![
            Course::new("CSE200", "Networks", "Packets."),
            Course::new("CSE201", "Networks II", "Packets."),
        ]);
        let query = RetrievalQuery::new("packets");
        let ranked = rank_catalog(&query, &catalog);
        assert_eq!(ranked[0].0, 0);
        assert_eq!(ranked[1].0, 1);
        assert_eq!(ranked[0].1, ranked[1].1);
    }
}
