//! Schema validation for submission drafts
//!
//! Produces per-field errors for inline display. Errors never block moving
//! between steps; they only block the final submit.

use std::fmt;

use crate::models::submission::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use crate::models::{ContentType, Submission, MAX_TAGS, MIN_TAGS};

use super::step::Step;

/// A logical field of the submission form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ContentType,
    Title,
    Content,
    Thumbnail,
    Description,
    Tags,
    ResearchQuestions,
    Location,
}

impl Field {
    /// Fields in review order
    pub const ALL: [Field; 8] = [
        Field::ContentType,
        Field::Title,
        Field::Content,
        Field::Thumbnail,
        Field::Description,
        Field::Tags,
        Field::ResearchQuestions,
        Field::Location,
    ];

    /// The step on which the field is edited
    pub fn step(self) -> Step {
        match self {
            Field::ContentType => Step::Type,
            Field::Title => Step::Title,
            Field::Content => Step::Content,
            Field::Thumbnail => Step::Thumbnail,
            Field::Description => Step::Description,
            Field::Tags => Step::Tags,
            Field::ResearchQuestions | Field::Location => Step::Questions,
        }
    }

    /// Whether a submission must fill the field
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Field::ContentType | Field::Title | Field::Content | Field::Tags
        )
    }

    /// Whether the field exists for the given content type
    pub fn applies_to(self, content_type: ContentType) -> bool {
        self.step().is_applicable(content_type)
    }

    /// Label shown on the review screen
    pub fn label(self) -> &'static str {
        match self {
            Field::ContentType => "Post Type",
            Field::Title => "Title",
            Field::Content => "Content",
            Field::Thumbnail => "Cover Image",
            Field::Description => "Description",
            Field::Tags => "Tags",
            Field::ResearchQuestions => "Research Questions",
            Field::Location => "Location",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A validation failure on one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Offending field
    pub field: Field,
    /// Message shown next to the field
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Whether a string looks like an uploaded-file URL
pub fn is_url(value: &str) -> bool {
    let value = value.trim();
    ["http://", "https://", "file://"]
        .iter()
        .any(|scheme| value.len() > scheme.len() && value.starts_with(scheme))
}

/// Validate a single field
pub fn validate_field(submission: &Submission, field: Field) -> Option<FieldError> {
    let content_type = submission.content_type;
    match field {
        Field::ContentType => None,
        Field::Title => {
            let title = submission.title.trim();
            if title.is_empty() {
                Some(FieldError::new(field, "Title is required"))
            } else if title.chars().count() > MAX_TITLE_LEN {
                Some(FieldError::new(
                    field,
                    format!("Title must be at most {} characters", MAX_TITLE_LEN),
                ))
            } else {
                None
            }
        }
        Field::Content => {
            let content = submission.content.trim();
            if content.is_empty() {
                if content_type.is_media() {
                    Some(FieldError::new(
                        field,
                        format!("Upload a {} file", content_type.label()),
                    ))
                } else {
                    Some(FieldError::new(field, "Content is required"))
                }
            } else if content_type.is_media() && !is_url(content) {
                Some(FieldError::new(field, "Content must be an uploaded file URL"))
            } else {
                None
            }
        }
        Field::Thumbnail => match submission.thumbnail.as_deref().map(str::trim) {
            Some(thumb) if !thumb.is_empty() && field.applies_to(content_type) && !is_url(thumb) => {
                Some(FieldError::new(field, "Cover image must be an uploaded file URL"))
            }
            _ => None,
        },
        Field::Description => match submission.description.as_deref() {
            Some(desc)
                if field.applies_to(content_type)
                    && desc.chars().count() > MAX_DESCRIPTION_LEN =>
            {
                Some(FieldError::new(
                    field,
                    format!(
                        "Description must be at most {} characters",
                        MAX_DESCRIPTION_LEN
                    ),
                ))
            }
            _ => None,
        },
        Field::Tags => {
            if submission.tags.len() < MIN_TAGS {
                Some(FieldError::new(field, "At least one tag is required"))
            } else if submission.tags.len() > MAX_TAGS {
                Some(FieldError::new(
                    field,
                    format!("At most {} tags are allowed", MAX_TAGS),
                ))
            } else {
                None
            }
        }
        Field::ResearchQuestions => {
            if submission.research_questions.iter().any(|q| q.trim().is_empty()) {
                Some(FieldError::new(field, "Research questions cannot be blank"))
            } else {
                None
            }
        }
        Field::Location => None,
    }
}

/// Validate the whole draft
pub fn validate(submission: &Submission) -> Vec<FieldError> {
    Field::ALL
        .iter()
        .filter_map(|field| validate_field(submission, *field))
        .collect()
}
