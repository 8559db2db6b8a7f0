//! Post service
//!
//! Publishing, the gallery query, the detail view and owner-only deletion.

use std::cmp::Reverse;

use crate::audit::EntityType;
use crate::error::{ArchiveError, ArchiveResult};
use crate::models::{ContentType, GallerySort, Post, PostId, Submission, User};
use crate::storage::Storage;
use crate::wizard::validate;

/// Maximum number of tags a gallery filter may combine
pub const MAX_FILTER_TAGS: usize = 5;

/// Gallery query
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    /// Case-insensitive substring of the title
    pub keyword: Option<String>,
    /// Tags every returned post must carry
    pub tags: Vec<String>,
    pub content_type: Option<ContentType>,
    pub sort: GallerySort,
}

impl PostFilter {
    fn matches(&self, post: &Post) -> bool {
        if let Some(keyword) = self.keyword.as_deref().map(str::trim) {
            if !keyword.is_empty() && !post.title.to_lowercase().contains(&keyword.to_lowercase()) {
                return false;
            }
        }
        if let Some(content_type) = self.content_type {
            if post.content_type != content_type {
                return false;
            }
        }
        self.tags.iter().all(|tag| post.has_tag(tag))
    }
}

/// Service for post management
pub struct PostService<'a> {
    storage: &'a Storage,
}

impl<'a> PostService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Publish a submission
    ///
    /// The draft is validated again here; the wizard is not the only caller.
    pub fn create(&self, author: Option<&User>, submission: &Submission) -> ArchiveResult<Post> {
        let errors = validate(submission);
        if !errors.is_empty() {
            let message = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ArchiveError::Validation(message));
        }

        let post = Post::from_submission(submission, author.map(|u| u.id));

        self.storage.posts.upsert(post.clone())?;
        if let Err(e) = self.persist_new(&post, author) {
            // Memory must match disk after a failed publish
            self.storage.posts.delete(post.id)?;
            let _ = self.storage.posts.save();
            return Err(e);
        }

        Ok(post)
    }

    fn persist_new(&self, post: &Post, author: Option<&User>) -> ArchiveResult<()> {
        self.storage.posts.save()?;
        self.storage.log_create(
            EntityType::Post,
            post.id.to_string(),
            Some(post.title.clone()),
            author.map(|u| u.handle.as_str()),
            post,
        )
    }

    pub fn get(&self, id: PostId) -> ArchiveResult<Option<Post>> {
        self.storage.posts.get(id)
    }

    /// Find a post by full UUID or short id (`post-1a2b3c4d`)
    pub fn find(&self, identifier: &str) -> ArchiveResult<Option<Post>> {
        if let Ok(id) = PostId::parse(identifier.trim()) {
            return self.storage.posts.get(id);
        }

        let mut matches = self.storage.posts.find_by_short_id(identifier)?;
        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(ArchiveError::Validation(format!(
                "'{}' matches {} posts; use a longer id",
                identifier, n
            ))),
        }
    }

    /// Open a post's detail view, counting the view
    pub fn view(&self, identifier: &str) -> ArchiveResult<Post> {
        let mut post = self
            .find(identifier)?
            .ok_or_else(|| ArchiveError::post_not_found(identifier))?;

        post.record_view();
        self.storage.posts.upsert(post.clone())?;
        self.storage.posts.save()?;

        Ok(post)
    }

    /// Gallery listing
    pub fn list(&self, filter: &PostFilter) -> ArchiveResult<Vec<Post>> {
        if filter.tags.len() > MAX_FILTER_TAGS {
            return Err(ArchiveError::Validation(format!(
                "At most {} tags can be combined in a filter",
                MAX_FILTER_TAGS
            )));
        }

        // get_all is newest first, and the sorts below are stable
        let mut posts: Vec<Post> = self
            .storage
            .posts
            .get_all()?
            .into_iter()
            .filter(|p| filter.matches(p))
            .collect();

        match filter.sort {
            GallerySort::Latest => {}
            GallerySort::Oldest => posts.reverse(),
            GallerySort::MostPopular => posts.sort_by_key(|p| Reverse(p.views)),
            GallerySort::LeastPopular => posts.sort_by_key(|p| p.views),
        }

        Ok(posts)
    }

    /// Delete a post on behalf of its author
    pub fn delete(&self, identifier: &str, actor: Option<&User>) -> ArchiveResult<Post> {
        let post = self
            .find(identifier)?
            .ok_or_else(|| ArchiveError::post_not_found(identifier))?;

        let actor = actor.ok_or_else(|| {
            ArchiveError::PermissionDenied("Sign in with --user to delete posts".into())
        })?;
        if !post.is_owned_by(actor.id) {
            return Err(ArchiveError::PermissionDenied(format!(
                "{} was not posted by {}",
                post.id, actor.handle
            )));
        }

        self.storage.posts.delete(post.id)?;
        self.storage.posts.save()?;

        self.storage.log_delete(
            EntityType::Post,
            post.id.to_string(),
            Some(post.title.clone()),
            Some(actor.handle.as_str()),
            &post,
        )?;

        Ok(post)
    }

    pub fn count(&self) -> ArchiveResult<usize> {
        self.storage.posts.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ArchivePaths;
    use chrono::Duration;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ArchivePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn text(title: &str, tags: &[&str]) -> Submission {
        Submission {
            title: title.into(),
            content: "body".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Submission::new(ContentType::Text)
        }
    }

    /// Store a post directly with a given age and view count
    fn seed(storage: &Storage, title: &str, days_old: i64, views: u64) -> Post {
        let mut post = Post::from_submission(&text(title, &["seed"]), None);
        post.created_at = post.created_at - Duration::days(days_old);
        post.views = views;
        storage.posts.upsert(post.clone()).unwrap();
        post
    }

    fn titles(posts: Vec<Post>) -> Vec<String> {
        posts.into_iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_create_persists_and_audits() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PostService::new(&storage);
        let author = User::new("jo");

        let post = service.create(Some(&author), &text("Hello", &["home"])).unwrap();
        assert_eq!(post.user_id, Some(author.id));
        assert_eq!(service.count().unwrap(), 1);

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].actor.as_deref(), Some("jo"));
    }

    #[test]
    fn test_create_rejects_invalid_draft() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PostService::new(&storage);

        let err = service.create(None, &text("No tags", &[])).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_sort_orders() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage, "old-popular", 3, 10);
        seed(&storage, "mid-quiet", 2, 1);
        seed(&storage, "new-mid", 1, 5);
        let service = PostService::new(&storage);

        let list = |sort| service.list(&PostFilter { sort, ..Default::default() }).unwrap();
        assert_eq!(titles(list(GallerySort::Latest)), ["new-mid", "mid-quiet", "old-popular"]);
        assert_eq!(titles(list(GallerySort::Oldest)), ["old-popular", "mid-quiet", "new-mid"]);
        assert_eq!(titles(list(GallerySort::MostPopular)), ["old-popular", "new-mid", "mid-quiet"]);
        assert_eq!(titles(list(GallerySort::LeastPopular)), ["mid-quiet", "new-mid", "old-popular"]);
    }

    #[test]
    fn test_popularity_ties_favour_newest() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage, "older", 2, 4);
        seed(&storage, "newer", 1, 4);
        let service = PostService::new(&storage);

        let filter = PostFilter {
            sort: GallerySort::MostPopular,
            ..Default::default()
        };
        assert_eq!(titles(service.list(&filter).unwrap()), ["newer", "older"]);
    }

    #[test]
    fn test_filters() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PostService::new(&storage);
        service.create(None, &text("Summer rain", &["weather", "home"])).unwrap();
        service.create(None, &text("Winter", &["weather"])).unwrap();

        let by_keyword = PostFilter {
            keyword: Some("RAIN".into()),
            ..Default::default()
        };
        assert_eq!(titles(service.list(&by_keyword).unwrap()), ["Summer rain"]);

        let by_tags = PostFilter {
            tags: vec!["weather".into(), "Home".into()],
            ..Default::default()
        };
        assert_eq!(titles(service.list(&by_tags).unwrap()), ["Summer rain"]);

        let by_type = PostFilter {
            content_type: Some(ContentType::Video),
            ..Default::default()
        };
        assert!(service.list(&by_type).unwrap().is_empty());
    }

    #[test]
    fn test_filter_tag_limit() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PostService::new(&storage);
        let filter = PostFilter {
            tags: (0..6).map(|i| format!("t{}", i)).collect(),
            ..Default::default()
        };
        assert!(service.list(&filter).unwrap_err().is_validation());
    }

    #[test]
    fn test_view_counts() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PostService::new(&storage);
        let post = service.create(None, &text("Seen", &["t"])).unwrap();

        service.view(&post.id.to_string()).unwrap();
        let again = service.view(&post.id.to_string()).unwrap();
        assert_eq!(again.views, 2);
        assert!(service.view("post-ffffffff").unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_requires_owner() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PostService::new(&storage);
        let owner = User::new("owner");
        let other = User::new("other");
        let post = service.create(Some(&owner), &text("Mine", &["t"])).unwrap();
        let id = post.id.to_string();

        assert!(matches!(
            service.delete(&id, None),
            Err(ArchiveError::PermissionDenied(_))
        ));
        assert!(matches!(
            service.delete(&id, Some(&other)),
            Err(ArchiveError::PermissionDenied(_))
        ));

        service.delete(&id, Some(&owner)).unwrap();
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_anonymous_post_cannot_be_deleted() {
        let (_temp_dir, storage) = create_test_storage();
        let service = PostService::new(&storage);
        let post = service.create(None, &text("Anon", &["t"])).unwrap();
        let someone = User::new("someone");

        assert!(service.delete(&post.id.to_string(), Some(&someone)).is_err());
    }
}
