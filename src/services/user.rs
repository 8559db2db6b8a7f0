//! User service
//!
//! Users are identified by handle. The first time a handle acts on the
//! archive a user record is created for it.

use chrono::{DateTime, Utc};

use crate::audit::EntityType;
use crate::error::{ArchiveError, ArchiveResult};
use crate::models::{Post, User};
use crate::storage::Storage;

/// What the dashboard shows for one user
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub user: User,
    pub member_since: DateTime<Utc>,
    /// The user's posts, newest first
    pub posts: Vec<Post>,
    pub total_views: u64,
}

impl Dashboard {
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }
}

/// Service for user management
pub struct UserService<'a> {
    storage: &'a Storage,
}

impl<'a> UserService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Look a user up by handle
    pub fn find(&self, handle: &str) -> ArchiveResult<Option<User>> {
        self.storage.users.get_by_handle(handle)
    }

    /// Resolve a handle to a user, registering it on first use
    pub fn identify(&self, handle: &str) -> ArchiveResult<User> {
        if let Some(user) = self.find(handle)? {
            return Ok(user);
        }

        let user = User::new(handle);
        user.validate()
            .map_err(|e| ArchiveError::Validation(e.to_string()))?;

        self.storage.users.upsert(user.clone())?;
        self.storage.users.save()?;

        self.storage.log_create(
            EntityType::User,
            user.id.to_string(),
            Some(user.handle.clone()),
            Some(user.handle.as_str()),
            &user,
        )?;

        Ok(user)
    }

    /// Resolve the optional `--user` handle
    pub fn identify_optional(&self, handle: Option<&str>) -> ArchiveResult<Option<User>> {
        match handle.map(str::trim).filter(|h| !h.is_empty()) {
            Some(handle) => self.identify(handle).map(Some),
            None => Ok(None),
        }
    }

    /// Build the dashboard for a user
    pub fn dashboard(&self, user: &User) -> ArchiveResult<Dashboard> {
        let posts = self.storage.posts.get_by_user(user.id)?;
        let total_views = posts.iter().map(|p| p.views).sum();

        Ok(Dashboard {
            user: user.clone(),
            member_since: user.created_at,
            posts,
            total_views,
        })
    }

    pub fn list(&self) -> ArchiveResult<Vec<User>> {
        self.storage.users.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ArchivePaths;
    use crate::models::{ContentType, Submission};
    use crate::services::PostService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ArchivePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_identify_registers_once() {
        let (_temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);

        let first = service.identify("RiverKid").unwrap();
        let second = service.identify("riverkid").unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(service.list().unwrap().len(), 1);
        assert_eq!(storage.audit().read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_identify_rejects_bad_handle() {
        let (_temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);
        assert!(service.identify("no spaces").unwrap_err().is_validation());
    }

    #[test]
    fn test_identify_optional() {
        let (_temp_dir, storage) = create_test_storage();
        let service = UserService::new(&storage);
        assert!(service.identify_optional(None).unwrap().is_none());
        assert!(service.identify_optional(Some("  ")).unwrap().is_none());
        assert!(service.identify_optional(Some("jo")).unwrap().is_some());
    }

    #[test]
    fn test_dashboard_counts_own_posts() {
        let (_temp_dir, storage) = create_test_storage();
        let users = UserService::new(&storage);
        let posts = PostService::new(&storage);
        let jo = users.identify("jo").unwrap();

        let draft = Submission {
            title: "Mine".into(),
            content: "words".into(),
            tags: vec!["t".into()],
            ..Submission::new(ContentType::Text)
        };
        let post = posts.create(Some(&jo), &draft).unwrap();
        posts.create(None, &draft).unwrap();
        posts.view(&post.id.to_string()).unwrap();

        let dashboard = users.dashboard(&jo).unwrap();
        assert_eq!(dashboard.post_count(), 1);
        assert_eq!(dashboard.total_views, 1);
        assert_eq!(dashboard.member_since, jo.created_at);
    }
}
