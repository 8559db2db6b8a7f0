//! Wizard session state

use crate::models::Submission;

use super::step::Step;

/// Research-use consent, kept apart from form validation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsentState {
    /// Whether the consent box is ticked
    pub checked: bool,
    /// Whether to show the "consent required" message
    pub show_error: bool,
}

/// Everything the wizard knows about one submission session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    /// Current step
    pub step: Step,
    /// The draft being composed
    pub submission: Submission,
    /// Consent flags
    pub consent: ConsentState,
}

impl WizardState {
    /// Fresh state on the welcome step
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the wizard is on its terminal step
    pub fn is_at_confirm(&self) -> bool {
        self.step == Step::LAST
    }
}
