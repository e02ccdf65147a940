//! The matcher chain itself.

use crate::catalog::Catalog;
use crate::routing::{CourseIdMatcher, RouteResult, TitleMatcher};

/// One link in the routing chain. Returns `None` to pass the query to
/// the next link.
pub trait QueryMatcher: Send + Sync {
    fn name(&self) -> &'static str;

    fn try_match(&self, query: &str, catalog: &Catalog) -> Option<RouteResult>;
}

/// Ordered chain of query matchers.
///
/// Stateless and side-effect-free; safe to share across requests.
pub struct QueryRouter {
    matchers: Vec<Box<dyn QueryMatcher>>,
}

impl QueryRouter {
    /// Default chain: course-id matcher, then title matcher.
    pub fn new() -> Self {
        QueryRouter {
            matchers: vec![Box::new(CourseIdMatcher), Box::new(TitleMatcher)],
        }
    }

    /// Classify a query. First matcher to fire wins; no match selects
    /// the semantic fallback.
    pub fn route(&self, query: &str, catalog: &Catalog) -> RouteResult {
        for matcher in &self.matchers {
            if let Some(result) = matcher.try_match(query, catalog) {
                return result;
            }
        }
        RouteResult::SemanticFallback
    }
}

impl Default for QueryRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Course;

    fn sample() -> Catalog {
        Catalog::new(vec![
            Course::new("CSE101", "Intro to Programming", "Variables and loops."),
            Course::new("CSE340", "Algorithms", "Sorting and graphs."),
        ])
    }

    #[test]
    fn test_id_beats_title() {
        // "Algorithms" appears as a title, but the id token wins because
        // the id matcher runs first.
        let router = QueryRouter::new();
        let result = router.route("is CSE101 harder than Algorithms?", &sample());
        match result {
            RouteResult::DirectCourseMatch(course) => assert_eq!(course.id, "CSE101"),
            other => panic!("expected id match, got {:?}", other),
        }
    }

    #[test]
    fn test_falls_through_to_title() {
        let router = QueryRouter::new();
        let result = router.route("what is Algorithms about", &sample());
        match result {
            RouteResult::DirectTitleMatch(course) => assert_eq!(course.id, "CSE340"),
            other => panic!("expected title match, got {:?}", other),
        }
    }

    #[test]
    fn test_no_match_is_fallback_not_error() {
        let router = QueryRouter::new();
        let result = router.route("what courses involve sorting", &sample());
        assert_eq!(result, RouteResult::SemanticFallback);
    }

    #[test]
    fn test_empty_catalog_routes_to_fallback() {
        let router = QueryRouter::new();
        let result = router.route("tell me about CSE101", &Catalog::default());
        assert_eq!(result, RouteResult::SemanticFallback);
    }
}
