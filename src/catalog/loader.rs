//! JSONL catalog loader.
//!
//! One course object per line. Malformed or duplicate rows are skipped
//! and reported as warnings; only a missing file is fatal.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::catalog::course::Course;
use crate::errors::{ChatbotError, Result};

/// A skipped catalog row. Non-fatal; callers decide how to report it.
#[derive(Debug, Clone)]
pub struct CatalogWarning {
    /// 1-based line number in the source file
    pub line: usize,
    pub reason: String,
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.reason)
    }
}

/// Load courses from a newline-delimited JSON file.
///
/// Returns the parsed courses in file order plus one warning per
/// skipped line. Duplicate ids (case-insensitive) keep the first
/// occurrence.
pub fn load_catalog(path: &Path) -> Result<(Vec<Course>, Vec<CatalogWarning>)> {
    if !path.exists() {
        return Err(ChatbotError::CatalogMissing(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let mut courses = Vec::new();
    let mut warnings = Vec::new();
    let mut seen_ids = HashSet::new();

    for (idx, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match serde_json::from_str::<Course>(trimmed) {
            Ok(course) => {
                if course.id.trim().is_empty() {
                    warnings.push(CatalogWarning {
                        line: idx + 1,
                        reason: "empty course id".to_string(),
                    });
                    continue;
                }
                if !seen_ids.insert(course.normalized_id()) {
                    warnings.push(CatalogWarning {
                        line: idx + 1,
                        reason: format!("duplicate course id: {}", course.id),
                    });
                    continue;
                }
                courses.push(course);
            }
            Err(e) => {
                warnings.push(CatalogWarning {
                    line: idx + 1,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok((courses, warnings))
}
