//! Submission wizard
//!
//! The step sequencing, field updates, review and submit logic behind the
//! interactive submission screen. Nothing in here depends on a terminal or
//! on storage: persistence is reached only through [`SubmissionEndpoint`].
//!
//! # Example
//!
//! ```rust,ignore
//! use archive::wizard::{Step, WizardController};
//! use archive::models::ContentType;
//!
//! let mut wizard = WizardController::new();
//! wizard.set_content_type(ContentType::Image);
//! wizard.go_to(Step::Content.index());
//! assert_eq!(wizard.go_next(), Step::Description);
//! ```

pub mod controller;
pub mod endpoint;
pub mod review;
pub mod state;
pub mod step;
pub mod validation;

pub use controller::WizardController;
pub use endpoint::{Rejected, SubmissionEndpoint, Success};
pub use review::{FieldOutcome, ReviewEntry, ReviewSnapshot};
pub use state::{ConsentState, WizardState};
pub use step::Step;
pub use validation::{validate, Field, FieldError};
