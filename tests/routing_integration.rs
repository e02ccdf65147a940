//! Integration tests for the query-routing chain.
//!
//! Exercises the router through the public crate surface with the same
//! two-course catalog a real session would start from.

use coursebuddy::catalog::{Catalog, Course};
use coursebuddy::routing::{QueryRouter, RouteResult};

fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Course::new(
            "CSE101",
            "Intro to Programming",
            "Variables, control flow, and functions.",
        ),
        Course::new("CSE340", "Algorithms", "Sorting, searching, and graphs."),
    ])
}

#[test]
fn id_token_routes_to_direct_course_match() {
    let router = QueryRouter::new();
    let result = router.route("tell me about CSE101", &sample_catalog());
    match result {
        RouteResult::DirectCourseMatch(course) => assert_eq!(course.id, "CSE101"),
        other => panic!("expected DirectCourseMatch, got {:?}", other),
    }
}

#[test]
fn id_token_wins_regardless_of_surrounding_text() {
    let router = QueryRouter::new();
    let catalog = sample_catalog();

    for query in [
        "CSE340",
        "is cse340 offered in fall?",
        "I heard Algorithms and CSE340 are the same thing",
        "compare CSE340 with something easier",
    ] {
        let result = router.route(query, &catalog);
        match result {
            RouteResult::DirectCourseMatch(course) => assert_eq!(course.id, "CSE340"),
            other => panic!("query {:?}: expected DirectCourseMatch, got {:?}", query, other),
        }
    }
}

#[test]
fn title_substring_routes_to_direct_title_match() {
    let router = QueryRouter::new();
    let result = router.route("what is Algorithms about", &sample_catalog());
    match result {
        RouteResult::DirectTitleMatch(course) => assert_eq!(course.id, "CSE340"),
        other => panic!("expected DirectTitleMatch, got {:?}", other),
    }
}

#[test]
fn title_tie_break_prefers_longest_then_catalog_order() {
    let catalog = Catalog::new(vec![
        Course::new("CSE340", "Algorithms", "Sorting and graphs."),
        Course::new("CSE540", "Data Algorithms", "Algorithms over massive data."),
    ]);
    let router = QueryRouter::new();

    // Both titles appear in the query; the longer one wins.
    let result = router.route("should I take Data Algorithms next term?", &catalog);
    match result {
        RouteResult::DirectTitleMatch(course) => assert_eq!(course.id, "CSE540"),
        other => panic!("expected DirectTitleMatch, got {:?}", other),
    }

    // Only the shorter title appears; it wins on its own.
    let result = router.route("how hard is Algorithms?", &catalog);
    match result {
        RouteResult::DirectTitleMatch(course) => assert_eq!(course.id, "CSE340"),
        other => panic!("expected DirectTitleMatch, got {:?}", other),
    }
}

#[test]
fn unmatched_query_falls_back_without_error() {
    let router = QueryRouter::new();
    let result = router.route("what courses involve sorting", &sample_catalog());
    assert_eq!(result, RouteResult::SemanticFallback);
}

#[test]
fn routing_is_deterministic_across_calls() {
    let router = QueryRouter::new();
    let catalog = sample_catalog();
    let first = router.route("what is Algorithms about", &catalog);
    let second = router.route("what is Algorithms about", &catalog);
    assert_eq!(first, second);
}
