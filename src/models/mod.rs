//! Core data models for Archive Our Youth
//!
//! This module contains the data structures of the archive domain:
//! submission drafts, published posts, users and their identifiers.

pub mod content_type;
pub mod ids;
pub mod post;
pub mod submission;
pub mod user;

pub use content_type::ContentType;
pub use ids::{PostId, UserId};
pub use post::{GallerySort, Post};
pub use submission::{Submission, TagError, MAX_TAGS, MIN_TAGS};
pub use user::User;
