//! Service layer for Archive Our Youth
//!
//! Business logic on top of the storage layer: validation, audit logging
//! and the queries behind the gallery and dashboard.

pub mod endpoint;
pub mod post;
pub mod user;

pub use endpoint::ArchiveEndpoint;
pub use post::{PostFilter, PostService, MAX_FILTER_TAGS};
pub use user::{Dashboard, UserService};
