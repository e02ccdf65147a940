//! Course record and id normalization.

use serde::{Deserialize, Serialize};

/// A single course in the catalog.
///
/// Records are immutable once the catalog is built. `embedding` is
/// populated by the optional indexing step at startup; records without
/// one are scored lexically instead of by cosine similarity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Department prefix + number, e.g. "CSE101". Unique per catalog.
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl Course {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Course {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            embedding: None,
        }
    }

    /// Canonical id form used for case-insensitive comparison.
    pub fn normalized_id(&self) -> String {
        normalize_id(&self.id)
    }

    /// The text that gets indexed and scored for this course.
    pub fn indexed_text(&self) -> String {
        format!("{}: {}", self.title, self.description)
    }

    /// Leading alphabetic part of the id ("CSE" for "CSE340"),
    /// lowercased. Empty when the id starts with a digit.
    pub fn subject_prefix(&self) -> String {
        self.id
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_ascii_lowercase()
    }

    /// First digit of the numeric part of the id ('3' for "CSE340").
    pub fn level_digit(&self) -> Option<char> {
        self.id.chars().find(|c| c.is_ascii_digit())
    }
}

/// Strip separators and lowercase, so "CSE 101", "cse-101" and "CSE101"
/// all compare equal.
pub fn normalize_id(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}
