//! Audit logging
//!
//! Post and user creations and deletions are appended to `audit.log` as
//! line-delimited JSON. The log is the archive's operational history; it
//! is read back by `archive history`.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
