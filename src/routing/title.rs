//! Title matcher: verbatim course-title mention in the query.

use crate::catalog::Catalog;
use crate::routing::{QueryMatcher, RouteResult};

/// Checks whether any course title appears verbatim (case-insensitive)
/// in the query. Tie-break is deterministic: the longest matching title
/// wins, and equal lengths keep the earliest course in catalog order.
pub struct TitleMatcher;

impl QueryMatcher for TitleMatcher {
    fn name(&self) -> &'static str {
        "course_title"
    }

    fn try_match(&self, query: &str, catalog: &Catalog) -> Option<RouteResult> {
        let query_lower = query.to_lowercase();

        let mut best: Option<(usize, usize)> = None; // (catalog index, title length)
        for (index, course) in catalog.courses().iter().enumerate() {
            let title = course.title.to_lowercase();
            if title.is_empty() || !query_lower.contains(&title) {
                continue;
            }
            // Strictly-longer replaces; equal length keeps the earlier course.
            match best {
                Some((_, best_len)) if title.len() <= best_len => {}
                _ => best = Some((index, title.len())),
            }
        }

        best.map(|(index, _)| {
            RouteResult::DirectTitleMatch(catalog.courses()[index].clone())
        })
    }
}
