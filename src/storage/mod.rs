//! Storage layer for Archive Our Youth
//!
//! JSON file repositories with atomic writes, plus the audit log.

pub mod file_io;
pub mod init;
pub mod posts;
pub mod users;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use posts::PostRepository;
pub use users::UserRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::ArchivePaths;
use crate::error::ArchiveResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: ArchivePaths,
    audit: AuditLogger,
    pub posts: PostRepository,
    pub users: UserRepository,
}

impl Storage {
    /// Open the archive rooted at `paths`, creating directories as needed
    pub fn new(paths: ArchivePaths) -> ArchiveResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            posts: PostRepository::new(paths.posts_file()),
            users: UserRepository::new(paths.users_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &ArchivePaths {
        &self.paths
    }

    /// The audit log
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&self) -> ArchiveResult<()> {
        self.posts.load()?;
        self.users.load()?;
        Ok(())
    }

    /// Record a creation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        actor: Option<&str>,
        entity: &T,
    ) -> ArchiveResult<()> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity).by(actor);
        self.audit.log(&entry)
    }

    /// Record a deletion in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        actor: Option<&str>,
        entity: &T,
    ) -> ArchiveResult<()> {
        let entry = AuditEntry::delete(entity_type, entity_id, entity_name, entity).by(actor);
        self.audit.log(&entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ArchivePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(temp_dir.path().join("uploads").exists());
        assert_eq!(storage.posts.count().unwrap(), 0);
    }

    #[test]
    fn test_log_helpers_write_audit_entries() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ArchivePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .log_create(EntityType::User, "usr-1", Some("jo".into()), Some("jo"), &"jo")
            .unwrap();
        storage
            .log_delete(EntityType::Post, "post-1", None, Some("jo"), &"gone")
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].operation, Operation::Delete);
        assert_eq!(entries[1].actor.as_deref(), Some("jo"));
    }
}
