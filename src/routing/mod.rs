//! Query routing: classify a raw question into exactly one handling
//! path before any retrieval runs.
//!
//! Matchers are tried in order, cheapest and most precise first, and
//! the chain short-circuits on the first hit. No match is not an error;
//! it selects the semantic fallback.

pub mod course_id;
pub mod router;
pub mod title;

pub use course_id::CourseIdMatcher;
pub use router::{QueryMatcher, QueryRouter};
pub use title::TitleMatcher;

use crate::catalog::Course;

/// Outcome of routing one query.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteResult {
    /// The query names a course id verbatim
    DirectCourseMatch(Course),
    /// The query contains a course title verbatim
    DirectTitleMatch(Course),
    /// No specialized matcher fired; the active strategy handles it
    SemanticFallback,
}

impl RouteResult {
    /// The matched course for either direct variant.
    pub fn course(&self) -> Option<&Course> {
        match self {
            RouteResult::DirectCourseMatch(c) | RouteResult::DirectTitleMatch(c) => Some(c),
            RouteResult::SemanticFallback => None,
        }
    }
}
