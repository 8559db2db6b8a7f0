//! Submission draft model
//!
//! The record a user builds up in the submission wizard before it is
//! handed to the submission endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::content_type::ContentType;

/// Minimum number of tags a submission needs
pub const MIN_TAGS: usize = 1;

/// Maximum number of tags a submission may carry
pub const MAX_TAGS: usize = 8;

/// Maximum length of a single tag
pub const MAX_TAG_LEN: usize = 32;

/// Maximum title length
pub const MAX_TITLE_LEN: usize = 100;

/// Maximum description length
pub const MAX_DESCRIPTION_LEN: usize = 5000;

/// A post being composed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Post title
    pub title: String,

    /// Kind of media carried
    pub content_type: ContentType,

    /// Raw text for text posts, otherwise the uploaded file URL
    pub content: String,

    /// Optional cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ordered tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Research questions the submission responds to
    #[serde(default)]
    pub research_questions: Vec<String>,

    /// Where the author is from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Why a tag was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    /// Tag was blank after trimming
    Empty,
    /// Tag exceeds the length limit
    TooLong(usize),
    /// Tag already present (case-insensitive)
    Duplicate(String),
    /// Submission already carries the maximum number of tags
    LimitReached,
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Tag cannot be empty"),
            Self::TooLong(len) => {
                write!(f, "Tag too long ({} chars, max {})", len, MAX_TAG_LEN)
            }
            Self::Duplicate(tag) => write!(f, "Tag already added: {}", tag),
            Self::LimitReached => write!(f, "At most {} tags are allowed", MAX_TAGS),
        }
    }
}

impl std::error::Error for TagError {}

impl Submission {
    /// Create an empty draft of the given type
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            ..Self::default()
        }
    }

    /// Normalize a tag for comparison
    pub fn normalize_tag(tag: &str) -> String {
        tag.trim().to_lowercase()
    }

    /// Check whether the draft carries a tag (case-insensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = Self::normalize_tag(tag);
        self.tags.iter().any(|t| Self::normalize_tag(t) == wanted)
    }

    /// Add a tag, enforcing the tag rules
    pub fn add_tag(&mut self, tag: &str) -> Result<(), TagError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(TagError::Empty);
        }
        let len = tag.chars().count();
        if len > MAX_TAG_LEN {
            return Err(TagError::TooLong(len));
        }
        if self.has_tag(tag) {
            return Err(TagError::Duplicate(tag.to_string()));
        }
        if self.tags.len() >= MAX_TAGS {
            return Err(TagError::LimitReached);
        }
        self.tags.push(tag.to_string());
        Ok(())
    }

    /// Remove a tag (case-insensitive), returning whether it was present
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let wanted = Self::normalize_tag(tag);
        let before = self.tags.len();
        self.tags.retain(|t| Self::normalize_tag(t) != wanted);
        self.tags.len() != before
    }

    /// Whether the tag count is within the accepted range
    pub fn tag_count_valid(&self) -> bool {
        (MIN_TAGS..=MAX_TAGS).contains(&self.tags.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_tag_trims_and_rejects_duplicates() {
        let mut draft = Submission::default();
        draft.add_tag("  climate ").unwrap();
        assert_eq!(draft.tags, vec!["climate"]);
        assert_eq!(
            draft.add_tag("CLIMATE"),
            Err(TagError::Duplicate("CLIMATE".into()))
        );
        assert_eq!(draft.add_tag("   "), Err(TagError::Empty));
    }

    #[test]
    fn test_tag_limit() {
        let mut draft = Submission::default();
        for i in 0..MAX_TAGS {
            draft.add_tag(&format!("tag{}", i)).unwrap();
        }
        assert_eq!(draft.add_tag("one-more"), Err(TagError::LimitReached));
        assert_eq!(draft.tags.len(), MAX_TAGS);
        assert!(draft.tag_count_valid());
    }

    #[test]
    fn test_tag_too_long() {
        let mut draft = Submission::default();
        let long = "x".repeat(MAX_TAG_LEN + 1);
        assert_eq!(draft.add_tag(&long), Err(TagError::TooLong(MAX_TAG_LEN + 1)));
    }

    #[test]
    fn test_remove_tag() {
        let mut draft = Submission::default();
        draft.add_tag("Art").unwrap();
        assert!(draft.remove_tag("art"));
        assert!(!draft.remove_tag("art"));
        assert!(!draft.tag_count_valid());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let mut draft = Submission::new(ContentType::Video);
        draft.research_questions.push("What does home mean?".into());
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["contentType"], "VIDEO");
        assert!(json.get("researchQuestions").is_some());
        assert!(json.get("thumbnail").is_none());
    }
}
