//! Review snapshot shown on the confirmation step
//!
//! A read-only projection of how complete the draft is. Every missing field
//! points back to the step where it is edited so the UI can offer a jump.

use crate::models::{ContentType, Submission};

use super::state::WizardState;
use super::step::Step;
use super::validation::{validate_field, Field};

/// Outcome of one field in the review
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The field has a value (rendered for display)
    Present(String),
    /// The field is empty; edit it on `step`
    Missing { step: Step },
    /// The field does not exist for this content type
    NotApplicable,
}

impl FieldOutcome {
    /// Step to navigate to, for missing fields
    pub fn hint(&self) -> Option<Step> {
        match self {
            Self::Missing { step } => Some(*step),
            _ => None,
        }
    }
}

/// One row of the review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    pub field: Field,
    pub required: bool,
    pub outcome: FieldOutcome,
    /// Inline validation message, if any
    pub error: Option<String>,
}

impl ReviewEntry {
    /// Whether this entry stops the draft from being submitted
    pub fn blocks_submission(&self) -> bool {
        self.error.is_some() || (self.required && self.outcome.hint().is_some())
    }
}

/// Review of a whole draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSnapshot {
    pub content_type: ContentType,
    pub entries: Vec<ReviewEntry>,
    pub tags: Vec<String>,
    pub consent_checked: bool,
    pub consent_error: bool,
}

impl ReviewSnapshot {
    /// Build the review for a wizard state
    pub fn build(state: &WizardState) -> Self {
        let submission = &state.submission;
        let entries = Field::ALL
            .iter()
            .map(|field| ReviewEntry {
                field: *field,
                required: field.is_required(),
                outcome: outcome_for(submission, *field),
                error: validate_field(submission, *field).map(|e| e.message),
            })
            .collect();

        Self {
            content_type: submission.content_type,
            entries,
            tags: submission.tags.clone(),
            consent_checked: state.consent.checked,
            consent_error: state.consent.show_error,
        }
    }

    /// Entry for a field
    pub fn entry(&self, field: Field) -> Option<&ReviewEntry> {
        self.entries.iter().find(|e| e.field == field)
    }

    /// Entries that stop the draft from being submitted
    pub fn blocking(&self) -> impl Iterator<Item = &ReviewEntry> {
        self.entries.iter().filter(|e| e.blocks_submission())
    }

    /// Step of the first blocking entry, in review order
    pub fn first_missing_step(&self) -> Option<Step> {
        self.blocking()
            .next()
            .map(|e| e.outcome.hint().unwrap_or_else(|| e.field.step()))
    }

    /// Whether the form is complete (consent is judged separately)
    pub fn is_complete(&self) -> bool {
        self.blocking().next().is_none()
    }
}

fn outcome_for(submission: &Submission, field: Field) -> FieldOutcome {
    if !field.applies_to(submission.content_type) {
        return FieldOutcome::NotApplicable;
    }

    let missing = FieldOutcome::Missing { step: field.step() };
    let text = |value: &str| {
        let value = value.trim();
        if value.is_empty() {
            missing.clone()
        } else {
            FieldOutcome::Present(value.to_string())
        }
    };

    match field {
        Field::ContentType => FieldOutcome::Present(submission.content_type.to_string()),
        Field::Title => text(&submission.title),
        Field::Content => text(&submission.content),
        Field::Thumbnail => text(submission.thumbnail.as_deref().unwrap_or("")),
        Field::Description => text(submission.description.as_deref().unwrap_or("")),
        Field::Location => text(submission.location.as_deref().unwrap_or("")),
        Field::Tags => {
            if submission.tag_count_valid() {
                FieldOutcome::Present(submission.tags.join(", "))
            } else {
                missing.clone()
            }
        }
        Field::ResearchQuestions => {
            if submission.research_questions.is_empty() {
                missing.clone()
            } else {
                FieldOutcome::Present(submission.research_questions.join("; "))
            }
        }
    }
}
