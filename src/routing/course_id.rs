//! Course-id matcher: the fast, unambiguous path.

use crate::catalog::Catalog;
use crate::routing::{QueryMatcher, RouteResult};

/// Scans the query for a token that exactly matches a known course id
/// (case-insensitive). Adjacent token pairs are also tried, so
/// "CSE 101" matches the id "CSE101".
pub struct CourseIdMatcher;

impl QueryMatcher for CourseIdMatcher {
    fn name(&self) -> &'static str {
        "course_id"
    }

    fn try_match(&self, query: &str, catalog: &Catalog) -> Option<RouteResult> {
        let tokens: Vec<String> = query
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_ascii_lowercase())
            .collect();

        for token in &tokens {
            if let Some(course) = catalog.find_by_id(token) {
                return Some(RouteResult::DirectCourseMatch(course.clone()));
            }
        }

        // Second pass: ids split across two tokens ("cse" + "101")
        for pair in tokens.windows(2) {
            let joined = format!("{}{}", pair[0], pair[1]);
            if let Some(course) = catalog.find_by_id(&joined) {
                return Some(RouteResult::DirectCourseMatch(course.clone()));
            }
        }

        None
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
    fn test_exact_token_match() {
        let result = CourseIdMatcher.try_match("tell me about CSE101", &sample());
        assert_eq!(result.unwrap().course().unwrap().id, "CSE101");
    }

    #[test]
    fn test_case_insensitive() {
        let result = CourseIdMatcher.try_match("what is cse340?", &sample());
        assert_eq!(result.unwrap().course().unwrap().id, "CSE340");
    }

    #[test]
    fn test_spaced_id_matches() {
        let result = CourseIdMatcher.try_match("how hard is CSE 340 really", &sample());
        assert_eq!(result.unwrap().course().unwrap().id, "CSE340");
    }

    #[test]
    fn test_id_anywhere_in_query() {
        let result =
            CourseIdMatcher.try_match("my friend said CSE101 was fun, is that true?", &sample());
        assert!(result.is_some());
    }

    #[test]
    fn test_partial_token_does_not_match() {
        // "CSE1010" is a different token than "CSE101"
        let result = CourseIdMatcher.try_match("tell me about CSE1010", &sample());
        assert!(result.is_none());
    }

    #[test]
    fn test_unknown_id_passes_to_next_link() {
        let result = CourseIdMatcher.try_match("tell me about CSE999", &sample());
        assert!(result.is_none());
    }
}
