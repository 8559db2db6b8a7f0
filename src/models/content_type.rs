//! Content type model
//!
//! The kind of media a submission carries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of media carried by a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentType {
    /// Written piece, content is the raw text
    #[default]
    Text,
    /// Image, content is the uploaded image URL
    Image,
    /// Video, content is the uploaded video URL
    Video,
    /// Audio, content is the uploaded audio URL
    Audio,
    /// PDF document, content is the uploaded file URL
    Pdf,
}

impl ContentType {
    /// All content types in selection order
    pub const ALL: [ContentType; 5] = [
        ContentType::Text,
        ContentType::Image,
        ContentType::Video,
        ContentType::Audio,
        ContentType::Pdf,
    ];

    /// Whether the content is an uploaded file (a URL) rather than raw text
    pub fn is_media(&self) -> bool {
        !matches!(self, Self::Text)
    }

    /// Whether a post of this type can carry a separate cover image
    pub fn accepts_thumbnail(&self) -> bool {
        !matches!(self, Self::Text | Self::Image)
    }

    /// Whether a post of this type can carry a description
    pub fn accepts_description(&self) -> bool {
        !matches!(self, Self::Text)
    }

    /// Lowercase label used in prompts ("image not added yet")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Pdf => "pdf",
        }
    }

    /// Parse content type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "image" | "img" => Some(Self::Image),
            "video" => Some(Self::Video),
            "audio" => Some(Self::Audio),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "Text"),
            Self::Image => write!(f, "Image"),
            Self::Video => write!(f, "Video"),
            Self::Audio => write!(f, "Audio"),
            Self::Pdf => write!(f, "PDF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ContentType::parse("TEXT"), Some(ContentType::Text));
        assert_eq!(ContentType::parse(" image "), Some(ContentType::Image));
        assert_eq!(ContentType::parse("pdf"), Some(ContentType::Pdf));
        assert_eq!(ContentType::parse("gif"), None);
    }

    #[test]
    fn test_step_capabilities() {
        assert!(!ContentType::Text.accepts_thumbnail());
        assert!(!ContentType::Text.accepts_description());
        assert!(!ContentType::Image.accepts_thumbnail());
        assert!(ContentType::Image.accepts_description());
        assert!(ContentType::Video.accepts_thumbnail());
        assert!(ContentType::Pdf.is_media());
    }

    #[test]
    fn test_serialization_matches_wire_names() {
        let json = serde_json::to_string(&ContentType::Pdf).unwrap();
        assert_eq!(json, "\"PDF\"");
        let parsed: ContentType = serde_json::from_str("\"AUDIO\"").unwrap();
        assert_eq!(parsed, ContentType::Audio);
    }
}
