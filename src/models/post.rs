//! Post model
//!
//! A published submission as stored in the archive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::content_type::ContentType;
use super::ids::{PostId, UserId};
use super::submission::Submission;

/// Gallery sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GallerySort {
    /// Newest first
    #[default]
    Latest,
    /// Oldest first
    Oldest,
    /// Most viewed first
    MostPopular,
    /// Least viewed first
    LeastPopular,
}

impl GallerySort {
    /// Parse a sort order from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "latest" | "newest" => Some(Self::Latest),
            "oldest" => Some(Self::Oldest),
            "most-popular" | "popular" => Some(Self::MostPopular),
            "least-popular" => Some(Self::LeastPopular),
            _ => None,
        }
    }
}

impl fmt::Display for GallerySort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => write!(f, "latest"),
            Self::Oldest => write!(f, "oldest"),
            Self::MostPopular => write!(f, "most-popular"),
            Self::LeastPopular => write!(f, "least-popular"),
        }
    }
}

/// A published post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier
    pub id: PostId,

    /// Post title
    pub title: String,

    /// Kind of media carried
    pub content_type: ContentType,

    /// Raw text or media URL
    pub content: String,

    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Description shown under the media
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Research questions the post responds to
    #[serde(default)]
    pub research_questions: Vec<String>,

    /// Author location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Author, None for anonymous posts
    #[serde(default)]
    pub user_id: Option<UserId>,

    /// Number of times the detail view was opened
    #[serde(default)]
    pub views: u64,

    /// When the post was published
    pub created_at: DateTime<Utc>,

    /// When the post was last modified
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a post from a submitted draft
    pub fn from_submission(submission: &Submission, user_id: Option<UserId>) -> Self {
        let now = Utc::now();
        let description = submission
            .description
            .as_ref()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty() && submission.content_type.accepts_description());
        let thumbnail = submission
            .thumbnail
            .as_ref()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty() && submission.content_type.accepts_thumbnail());

        Self {
            id: PostId::new(),
            title: submission.title.trim().to_string(),
            content_type: submission.content_type,
            content: submission.content.trim().to_string(),
            thumbnail,
            description,
            tags: submission.tags.clone(),
            research_questions: submission.research_questions.clone(),
            location: submission
                .location
                .as_ref()
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty()),
            user_id,
            views: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the post was submitted anonymously
    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_none()
    }

    /// Whether the given user authored the post
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == Some(user_id)
    }

    /// Record one view of the detail page
    pub fn record_view(&mut self) {
        self.views = self.views.saturating_add(1);
    }

    /// Check whether the post carries a tag (case-insensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = Submission::normalize_tag(tag);
        self.tags
            .iter()
            .any(|t| Submission::normalize_tag(t) == wanted)
    }

    /// Title shortened to `max_chars`, with an ellipsis when cut
    pub fn short_title(&self, max_chars: usize) -> String {
        if self.title.chars().count() > max_chars {
            let cut: String = self.title.chars().take(max_chars).collect();
            format!("{}...", cut)
        } else {
            self.title.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(content_type: ContentType) -> Submission {
        Submission {
            title: "  Rivers ".into(),
            content_type,
            content: "https://cdn.example/river.mp4".into(),
            thumbnail: Some("https://cdn.example/cover.png".into()),
            description: Some("Filmed at dawn".into()),
            tags: vec!["water".into()],
            research_questions: vec![],
            location: Some("  ".into()),
        }
    }

    #[test]
    fn test_from_submission_trims_and_keeps_fields() {
        let post = Post::from_submission(&draft(ContentType::Video), None);
        assert_eq!(post.title, "Rivers");
        assert_eq!(post.thumbnail.as_deref(), Some("https://cdn.example/cover.png"));
        assert_eq!(post.description.as_deref(), Some("Filmed at dawn"));
        assert!(post.location.is_none());
        assert!(post.is_anonymous());
        assert_eq!(post.views, 0);
    }

    #[test]
    fn test_from_submission_drops_fields_the_type_does_not_take() {
        let post = Post::from_submission(&draft(ContentType::Text), None);
        assert!(post.thumbnail.is_none());
        assert!(post.description.is_none());

        let post = Post::from_submission(&draft(ContentType::Image), None);
        assert!(post.thumbnail.is_none());
        assert!(post.description.is_some());
    }

    #[test]
    fn test_ownership() {
        let user = UserId::new();
        let post = Post::from_submission(&draft(ContentType::Audio), Some(user));
        assert!(post.is_owned_by(user));
        assert!(!post.is_owned_by(UserId::new()));
    }

    #[test]
    fn test_short_title() {
        let mut post = Post::from_submission(&draft(ContentType::Video), None);
        post.title = "a".repeat(30);
        assert_eq!(post.short_title(24), format!("{}...", "a".repeat(24)));
        assert_eq!(post.short_title(50), "a".repeat(30));
    }

    #[test]
    fn test_gallery_sort_parse() {
        assert_eq!(GallerySort::parse("most-popular"), Some(GallerySort::MostPopular));
        assert_eq!(GallerySort::parse("Oldest"), Some(GallerySort::Oldest));
        assert_eq!(GallerySort::parse("random"), None);
        assert_eq!(GallerySort::LeastPopular.to_string(), "least-popular");
    }
}
