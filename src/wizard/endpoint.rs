//! The submission endpoint seam and submit outcomes

use thiserror::Error;

use crate::error::ArchiveResult;
use crate::models::{PostId, Submission, User};

use super::step::Step;
use super::validation::FieldError;

/// Accepts a finished submission and persists it somewhere
///
/// The author is passed explicitly; `None` means an anonymous post.
pub trait SubmissionEndpoint {
    fn submit(&self, author: Option<&User>, submission: &Submission) -> ArchiveResult<PostId>;
}

/// A submission the endpoint accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Success {
    /// Id of the new post
    pub post_id: PostId,
    /// Whether the post was published without an author
    pub anonymous: bool,
}

/// Why a submit attempt was refused
///
/// Every variant is recoverable: the wizard state is kept so the user can
/// fix the problem and try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    /// Research-use consent was not given
    #[error("You must agree to the terms and conditions.")]
    ConsentRequired,

    /// Submit was attempted away from the review step
    #[error("Submissions can only be sent from the review step (currently on {0})")]
    NotAtConfirm(Step),

    /// The form still has validation errors
    #[error("Form incomplete: {}", summarize(.0))]
    Invalid(Vec<FieldError>),

    /// The endpoint failed; the draft is preserved for a retry
    #[error("Something went wrong: {0}")]
    SubmissionFailed(String),
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
