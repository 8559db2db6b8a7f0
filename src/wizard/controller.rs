//! Wizard controller
//!
//! Owns the single [`WizardState`] of a submission session and is the only
//! thing that mutates it. Navigation is total over the step range; only
//! [`WizardController::submit`] can fail.

use crate::models::{ContentType, TagError, User};

use super::endpoint::{Rejected, SubmissionEndpoint, Success};
use super::review::ReviewSnapshot;
use super::state::WizardState;
use super::step::Step;
use super::validation::validate;

/// Drives one submission session
#[derive(Debug, Clone, Default)]
pub struct WizardController {
    state: WizardState,
}

impl WizardController {
    /// Start a fresh session on the welcome step
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Current step
    pub fn step(&self) -> Step {
        self.state.step
    }

    /// Selected content type
    pub fn content_type(&self) -> ContentType {
        self.state.submission.content_type
    }

    /// Discard the session and start over
    pub fn reset(&mut self) {
        self.state = WizardState::new();
    }

    // --- navigation ---

    /// Advance to the next step shown for the selected content type
    pub fn go_next(&mut self) -> Step {
        self.state.step = self.state.step.next_for(self.content_type());
        self.state.step
    }

    /// Return to the previous step shown for the selected content type
    pub fn go_back(&mut self) -> Step {
        self.state.step = self.state.step.prev_for(self.content_type());
        self.state.step
    }

    /// Jump to a step by ordinal index, clamped to the last step
    pub fn go_to(&mut self, index: usize) -> Step {
        self.state.step = Step::from_index(index);
        self.state.step
    }

    // --- field updates ---

    /// Change the content type
    ///
    /// Choosing the type already selected is a no-op. Any other choice clears
    /// the content so an upload for one type is never sent under another.
    pub fn set_content_type(&mut self, content_type: ContentType) {
        if content_type == self.state.submission.content_type {
            return;
        }
        self.state.submission.content_type = content_type;
        self.state.submission.content.clear();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.state.submission.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.state.submission.content = content.into();
    }

    pub fn set_thumbnail(&mut self, thumbnail: Option<String>) {
        self.state.submission.thumbnail = non_blank(thumbnail);
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.state.submission.description = non_blank(description);
    }

    pub fn set_location(&mut self, location: Option<String>) {
        self.state.submission.location = non_blank(location);
    }

    /// Add a tag (at most eight, no duplicates)
    pub fn add_tag(&mut self, tag: &str) -> Result<(), TagError> {
        self.state.submission.add_tag(tag)
    }

    /// Remove a tag by value
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.state.submission.remove_tag(tag)
    }

    /// Remove the most recently added tag
    pub fn pop_tag(&mut self) -> Option<String> {
        self.state.submission.tags.pop()
    }

    /// Add a research question; blank or repeated questions are ignored
    pub fn add_research_question(&mut self, question: &str) -> bool {
        let question = question.trim();
        let questions = &mut self.state.submission.research_questions;
        if question.is_empty() || questions.iter().any(|q| q == question) {
            return false;
        }
        questions.push(question.to_string());
        true
    }

    /// Remove a research question by value
    pub fn remove_research_question(&mut self, question: &str) -> bool {
        let questions = &mut self.state.submission.research_questions;
        let before = questions.len();
        questions.retain(|q| q != question.trim());
        questions.len() != before
    }

    /// Remove the most recently added research question
    pub fn pop_research_question(&mut self) -> Option<String> {
        self.state.submission.research_questions.pop()
    }

    /// Flip the consent box; ticking it clears the consent error
    pub fn toggle_consent(&mut self) -> bool {
        let consent = &mut self.state.consent;
        consent.checked = !consent.checked;
        if consent.checked {
            consent.show_error = false;
        }
        consent.checked
    }

    // --- review & submit ---

    /// Completeness review of the current draft
    pub fn build_review(&self) -> ReviewSnapshot {
        ReviewSnapshot::build(&self.state)
    }

    /// Send the draft to the endpoint
    ///
    /// Consent is checked first and never reaches the endpoint when missing.
    /// On endpoint failure the state is left exactly as it was; on success
    /// the session is reset.
    pub fn submit<E>(&mut self, author: Option<&User>, endpoint: &E) -> Result<Success, Rejected>
    where
        E: SubmissionEndpoint + ?Sized,
    {
        if !self.state.consent.checked {
            self.state.consent.show_error = true;
            return Err(Rejected::ConsentRequired);
        }

        if !self.state.is_at_confirm() {
            return Err(Rejected::NotAtConfirm(self.state.step));
        }

        let errors = validate(&self.state.submission);
        if !errors.is_empty() {
            return Err(Rejected::Invalid(errors));
        }

        match endpoint.submit(author, &self.state.submission) {
            Ok(post_id) => {
                self.reset();
                Ok(Success {
                    post_id,
                    anonymous: author.is_none(),
                })
            }
            Err(e) => Err(Rejected::SubmissionFailed(e.to_string())),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ArchiveError, ArchiveResult};
    use crate::models::{PostId, Submission};
    use std::cell::{Cell, RefCell};

    /// Endpoint double that records calls
    struct RecordingEndpoint {
        fail: bool,
        calls: Cell<usize>,
        last: RefCell<Option<Submission>>,
    }

    impl RecordingEndpoint {
        fn ok() -> Self {
            Self {
                fail: false,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::ok()
            }
        }
    }

    impl SubmissionEndpoint for RecordingEndpoint {
        fn submit(&self, _author: Option<&User>, submission: &Submission) -> ArchiveResult<PostId> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(submission.clone());
            if self.fail {
                Err(ArchiveError::Storage("disk full".into()))
            } else {
                Ok(PostId::new())
            }
        }
    }

    fn at(step: Step, content_type: ContentType) -> WizardController {
        let mut wizard = WizardController::new();
        wizard.set_content_type(content_type);
        wizard.go_to(step.index());
        wizard
    }

    fn ready_to_submit() -> WizardController {
        let mut wizard = at(Step::Confirm, ContentType::Text);
        wizard.set_title("Where I grew up");
        wizard.set_content("A short story about the river.");
        wizard.add_tag("home").unwrap();
        wizard
    }

    #[test]
    fn test_image_content_next_lands_on_description() {
        let mut wizard = at(Step::Content, ContentType::Image);
        assert_eq!(wizard.go_next(), Step::Description);
        assert_eq!(wizard.go_back(), Step::Content);
    }

    #[test]
    fn test_text_tags_back_lands_on_content() {
        let mut wizard = at(Step::Tags, ContentType::Text);
        assert_eq!(wizard.go_back(), Step::Content);
        assert_eq!(wizard.go_next(), Step::Tags);
    }

    #[test]
    fn test_navigation_is_idempotent_at_the_ends() {
        let mut wizard = at(Step::Confirm, ContentType::Video);
        assert_eq!(wizard.go_next(), Step::Confirm);
        assert_eq!(wizard.go_next(), Step::Confirm);

        let mut wizard = WizardController::new();
        assert_eq!(wizard.go_back(), Step::Welcome);
        assert_eq!(wizard.go_back(), Step::Welcome);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut wizard = WizardController::new();
        assert_eq!(wizard.go_to(99), Step::Confirm);
    }

    #[test]
    fn test_same_content_type_keeps_content() {
        let mut wizard = WizardController::new();
        wizard.set_content_type(ContentType::Video);
        wizard.set_content("https://cdn.example/clip.mp4");
        wizard.set_content_type(ContentType::Video);
        assert_eq!(wizard.state().submission.content, "https://cdn.example/clip.mp4");
    }

    #[test]
    fn test_different_content_type_clears_content() {
        let mut wizard = WizardController::new();
        wizard.set_content_type(ContentType::Video);
        wizard.set_content("https://cdn.example/clip.mp4");
        wizard.set_title("kept");
        wizard.set_content_type(ContentType::Audio);
        assert_eq!(wizard.state().submission.content, "");
        assert_eq!(wizard.state().submission.title, "kept");
        assert_eq!(wizard.content_type(), ContentType::Audio);
    }

    #[test]
    fn test_submit_without_consent_never_calls_endpoint() {
        let endpoint = RecordingEndpoint::ok();
        let mut wizard = ready_to_submit();

        assert_eq!(wizard.submit(None, &endpoint), Err(Rejected::ConsentRequired));
        assert_eq!(endpoint.calls.get(), 0);
        assert!(wizard.state().consent.show_error);
    }

    #[test]
    fn test_consent_error_clears_when_ticked() {
        let endpoint = RecordingEndpoint::ok();
        let mut wizard = ready_to_submit();
        let _ = wizard.submit(None, &endpoint);
        assert!(wizard.state().consent.show_error);

        assert!(wizard.toggle_consent());
        assert!(!wizard.state().consent.show_error);
    }

    #[test]
    fn test_failed_submission_preserves_state() {
        let endpoint = RecordingEndpoint::failing();
        let mut wizard = ready_to_submit();
        wizard.toggle_consent();
        let before = wizard.state().clone();

        let result = wizard.submit(None, &endpoint);
        assert!(matches!(result, Err(Rejected::SubmissionFailed(_))));
        assert_eq!(endpoint.calls.get(), 1);
        assert_eq!(wizard.state(), &before);
    }

    #[test]
    fn test_successful_submission_resets() {
        let endpoint = RecordingEndpoint::ok();
        let mut wizard = ready_to_submit();
        wizard.toggle_consent();

        let success = wizard.submit(None, &endpoint).unwrap();
        assert!(success.anonymous);
        assert_eq!(
            endpoint.last.borrow().as_ref().map(|s| s.title.clone()),
            Some("Where I grew up".to_string())
        );
        assert_eq!(wizard.state(), &WizardState::new());
    }

    #[test]
    fn test_submit_reports_author() {
        let endpoint = RecordingEndpoint::ok();
        let mut wizard = ready_to_submit();
        wizard.toggle_consent();
        let author = User::new("jo");
        let success = wizard.submit(Some(&author), &endpoint).unwrap();
        assert!(!success.anonymous);
    }

    #[test]
    fn test_submit_requires_confirm_step() {
        let endpoint = RecordingEndpoint::ok();
        let mut wizard = ready_to_submit();
        wizard.toggle_consent();
        wizard.go_back();

        assert_eq!(
            wizard.submit(None, &endpoint),
            Err(Rejected::NotAtConfirm(Step::Tags))
        );
        assert_eq!(endpoint.calls.get(), 0);
    }

    #[test]
    fn test_submit_rejects_missing_tags() {
        let endpoint = RecordingEndpoint::ok();
        let mut wizard = ready_to_submit();
        wizard.toggle_consent();
        wizard.remove_tag("home");

        match wizard.submit(None, &endpoint) {
            Err(Rejected::Invalid(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, crate::wizard::Field::Tags);
            }
            other => panic!("expected Invalid, got {:?}", other),
        }
        assert_eq!(endpoint.calls.get(), 0);
    }

    #[test]
    fn test_research_questions_and_optional_fields() {
        let mut wizard = WizardController::new();
        assert!(wizard.add_research_question("  What does home mean? "));
        assert!(!wizard.add_research_question("What does home mean?"));
        assert!(!wizard.add_research_question("   "));
        wizard.set_location(Some("   ".into()));
        wizard.set_description(Some("about".into()));

        let submission = &wizard.state().submission;
        assert_eq!(submission.research_questions, vec!["What does home mean?"]);
        assert!(submission.location.is_none());
        assert_eq!(submission.description.as_deref(), Some("about"));
        assert!(wizard.add_research_question("Who keeps us well?"));
        assert!(wizard.remove_research_question(" What does home mean?"));
        assert!(!wizard.remove_research_question("What does home mean?"));
        assert_eq!(wizard.pop_research_question().as_deref(), Some("Who keeps us well?"));
    }
}
