//! Application state for the TUI
//!
//! The App owns the wizard controller for the session plus everything the
//! screen needs that the wizard does not care about: which field has
//! focus, the edit buffer, toasts and the help overlay.

use std::path::Path;

use crate::config::settings::Settings;
use crate::models::{ContentType, User};
use crate::services::ArchiveEndpoint;
use crate::storage::Storage;
use crate::upload::{LocalUploadService, UploadKind, UploadService};
use crate::wizard::{Rejected, Step, WizardController};

use super::widgets::input::TextInput;
use super::widgets::notification::{Notification, NotificationQueue};

/// Mode of input
///
/// While `Editing`, step navigation keys go to the text field instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// A text field the user can focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    ResearchQuestion,
    Location,
    Title,
    Content,
    Thumbnail,
    Description,
    Tag,
}

impl EditTarget {
    pub fn label(self) -> &'static str {
        match self {
            Self::ResearchQuestion => "Add question",
            Self::Location => "Location",
            Self::Title => "Title",
            Self::Content => "Content",
            Self::Thumbnail => "Cover image file",
            Self::Description => "Description",
            Self::Tag => "Add tag",
        }
    }

    /// Whether Enter appends the buffer to a list instead of storing it
    pub fn is_list(self) -> bool {
        matches!(self, Self::ResearchQuestion | Self::Tag)
    }

    /// Fields shown on a step, in Tab order
    pub fn for_step(step: Step) -> &'static [EditTarget] {
        match step {
            Step::Questions => &[Self::ResearchQuestion, Self::Location],
            Step::Title => &[Self::Title],
            Step::Content => &[Self::Content],
            Step::Thumbnail => &[Self::Thumbnail],
            Step::Description => &[Self::Description],
            Step::Tags => &[Self::Tag],
            Step::Welcome | Step::Type | Step::Confirm => &[],
        }
    }
}

/// Main application state
pub struct App<'a> {
    pub storage: &'a Storage,

    pub settings: &'a Settings,

    /// Signed-in user; None submits anonymously
    pub author: Option<User>,

    /// The submission session
    pub wizard: WizardController,

    pub should_quit: bool,

    pub input_mode: InputMode,

    pub active_dialog: ActiveDialog,

    /// Index into the current step's fields
    pub field_index: usize,

    /// Edit buffer for the focused field
    pub input: TextInput,

    /// Type under the cursor on the type step, applied only when confirmed
    pub highlighted_type: ContentType,

    pub notifications: NotificationQueue,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, author: Option<User>) -> Self {
        Self {
            storage,
            settings,
            author,
            wizard: WizardController::new(),
            should_quit: false,
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            field_index: 0,
            input: TextInput::new(),
            highlighted_type: ContentType::default(),
            notifications: NotificationQueue::new(),
            status_message: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn is_editing(&self) -> bool {
        self.input_mode == InputMode::Editing
    }

    // --- navigation ---

    pub fn next_step(&mut self) {
        self.wizard.go_next();
        self.on_step_changed();
    }

    pub fn prev_step(&mut self) {
        self.wizard.go_back();
        self.on_step_changed();
    }

    pub fn jump_to(&mut self, step: Step) {
        self.wizard.go_to(step.index());
        self.on_step_changed();
    }

    /// Jump to the step of the first field that blocks submission
    pub fn jump_to_first_missing(&mut self) {
        match self.wizard.build_review().first_missing_step() {
            Some(step) => {
                self.jump_to(step);
                self.set_status(format!("Jumped to {}", step.title()));
            }
            None => self.set_status("Nothing is missing"),
        }
    }

    fn on_step_changed(&mut self) {
        self.field_index = 0;
        self.highlighted_type = self.wizard.content_type();
        self.clear_status();
    }

    // --- fields ---

    /// Fields on the current step
    pub fn targets(&self) -> &'static [EditTarget] {
        EditTarget::for_step(self.wizard.step())
    }

    /// The field Enter would focus
    pub fn selected_target(&self) -> Option<EditTarget> {
        self.targets().get(self.field_index).copied()
    }

    /// Move to the next field on a multi-field step
    pub fn cycle_field(&mut self) {
        let count = self.targets().len();
        if count > 1 {
            self.field_index = (self.field_index + 1) % count;
        }
    }

    /// Move the highlight on the type step without touching the draft
    pub fn cycle_content_type(&mut self, forward: bool) {
        let all = ContentType::ALL;
        let current = all
            .iter()
            .position(|t| *t == self.highlighted_type)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % all.len()
        } else {
            (current + all.len() - 1) % all.len()
        };
        self.highlighted_type = all[next];
    }

    /// Apply the highlighted type; content is cleared only on a real change
    pub fn commit_content_type(&mut self) {
        if self.highlighted_type != self.wizard.content_type() {
            self.wizard.set_content_type(self.highlighted_type);
            self.set_status(format!("Post type set to {}", self.highlighted_type));
        }
    }

    /// Focus the selected field, loading its current value
    pub fn begin_edit(&mut self) {
        let Some(target) = self.selected_target() else {
            return;
        };

        let submission = &self.wizard.state().submission;
        let current = match target {
            EditTarget::Title => submission.title.clone(),
            EditTarget::Location => submission.location.clone().unwrap_or_default(),
            EditTarget::Description => submission.description.clone().unwrap_or_default(),
            EditTarget::Content if !submission.content_type.is_media() => submission.content.clone(),
            _ => String::new(),
        };

        self.input = TextInput::new()
            .label(target.label())
            .placeholder(placeholder_for(target, submission.content_type))
            .content(current)
            .focused(true);
        self.input_mode = InputMode::Editing;
    }

    /// Release focus without touching list or upload fields
    pub fn end_edit(&mut self) {
        self.input.focused = false;
        self.input.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Mirror the buffer into fields that track keystrokes directly
    pub fn sync_live_field(&mut self) {
        let Some(target) = self.selected_target() else {
            return;
        };
        let value = self.input.value().to_string();
        match target {
            EditTarget::Title => self.wizard.set_title(value),
            EditTarget::Location => self.wizard.set_location(Some(value)),
            EditTarget::Description => self.wizard.set_description(Some(value)),
            EditTarget::Content if !self.wizard.content_type().is_media() => {
                self.wizard.set_content(value)
            }
            _ => {}
        }
    }

    /// Handle Enter inside a focused field
    pub fn commit_edit(&mut self) {
        let Some(target) = self.selected_target() else {
            self.end_edit();
            return;
        };
        let value = self.input.value().trim().to_string();

        match target {
            EditTarget::Tag => {
                match self.wizard.add_tag(&value) {
                    Ok(()) => self.set_status(format!("Added tag '{}'", value)),
                    Err(e) => self.set_status(e.to_string()),
                }
                self.input.clear();
            }
            EditTarget::ResearchQuestion => {
                if self.wizard.add_research_question(&value) {
                    self.set_status("Question added");
                }
                self.input.clear();
            }
            EditTarget::Content if self.wizard.content_type().is_media() => {
                if let Some(kind) = UploadKind::for_content(self.wizard.content_type()) {
                    if let Some(url) = self.upload(&value, kind) {
                        self.wizard.set_content(url);
                        self.end_edit();
                    }
                }
            }
            EditTarget::Thumbnail => {
                if let Some(url) = self.upload(&value, UploadKind::Image) {
                    self.wizard.set_thumbnail(Some(url));
                    self.end_edit();
                }
            }
            _ => {
                self.sync_live_field();
                self.end_edit();
            }
        }
    }

    fn upload(&mut self, path: &str, kind: UploadKind) -> Option<String> {
        if path.is_empty() {
            return None;
        }
        let service = LocalUploadService::new(self.storage.paths());
        match service.upload(Path::new(path), kind) {
            Ok(url) => {
                self.notifications.push(Notification::success("Upload complete"));
                Some(url)
            }
            Err(e) => {
                self.notifications.push(Notification::error(e.to_string()));
                None
            }
        }
    }

    /// Remove the newest tag or question on list steps
    pub fn remove_last_entry(&mut self) {
        let removed = match self.wizard.step() {
            Step::Tags => self.wizard.pop_tag(),
            Step::Questions => self.wizard.pop_research_question(),
            _ => None,
        };
        if let Some(entry) = removed {
            self.set_status(format!("Removed '{}'", entry));
        }
    }

    // --- confirm ---

    pub fn toggle_consent(&mut self) {
        if self.wizard.toggle_consent() {
            self.set_status("Consent given");
        } else {
            self.set_status("Consent withdrawn");
        }
    }

    /// Submit the draft and report the outcome as a toast
    pub fn submit(&mut self) {
        let endpoint = ArchiveEndpoint::new(self.storage);
        match self.wizard.submit(self.author.as_ref(), &endpoint) {
            Ok(success) => {
                self.notifications
                    .push(Notification::success("Your post has been published!"));
                self.set_status(if success.anonymous {
                    format!("Published {} anonymously", success.post_id)
                } else {
                    format!("Published {}", success.post_id)
                });
                self.field_index = 0;
                self.highlighted_type = self.wizard.content_type();
            }
            Err(Rejected::ConsentRequired) => {
                self.notifications.push(Notification::error(
                    "You must agree to the terms and conditions.",
                ));
            }
            Err(Rejected::Invalid(errors)) => {
                let message = match errors.len() {
                    1 => format!("{} still needs attention. Press g to jump there.", errors[0].field),
                    n => format!("{} fields still need attention. Press g to jump to the first.", n),
                };
                self.notifications.push(Notification::warning(message));
            }
            Err(Rejected::SubmissionFailed(reason)) => {
                self.notifications
                    .push(Notification::error("Something went wrong."));
                self.set_status(reason);
            }
            Err(e @ Rejected::NotAtConfirm(_)) => self.set_status(e.to_string()),
        }
    }
}

fn placeholder_for(target: EditTarget, content_type: ContentType) -> String {
    match target {
        EditTarget::Content if content_type.is_media() => {
            format!("Path to a {} file", content_type.label())
        }
        EditTarget::Content => "Write your post".to_string(),
        EditTarget::Thumbnail => "Path to an image file".to_string(),
        EditTarget::Tag => "Type a tag and press Enter".to_string(),
        EditTarget::ResearchQuestion => "Type a question and press Enter".to_string(),
        EditTarget::Title => "Give your post a title".to_string(),
        EditTarget::Location => "Where are you? (optional)".to_string(),
        EditTarget::Description => "Tell us about it (optional)".to_string(),
    }
}
