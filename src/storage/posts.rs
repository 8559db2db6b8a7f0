//! Post repository backed by data/posts.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{ArchiveError, ArchiveResult};
use crate::models::{Post, PostId, UserId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of posts.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct PostData {
    pub posts: Vec<Post>,
}

/// Repository for post persistence
pub struct PostRepository {
    path: PathBuf,
    data: RwLock<HashMap<PostId, Post>>,
}

impl PostRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load posts from disk, replacing whatever is in memory
    pub fn load(&self) -> ArchiveResult<()> {
        let file_data: PostData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for post in file_data.posts {
            data.insert(post.id, post);
        }

        Ok(())
    }

    /// Save posts to disk, oldest first
    pub fn save(&self) -> ArchiveResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut posts: Vec<_> = data.values().cloned().collect();
        posts.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        write_json_atomic(&self.path, &PostData { posts })
    }

    /// Get a post by id
    pub fn get(&self, id: PostId) -> ArchiveResult<Option<Post>> {
        let data = self
            .data
            .read()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// All posts, newest first
    pub fn get_all(&self) -> ArchiveResult<Vec<Post>> {
        let data = self
            .data
            .read()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut posts: Vec<_> = data.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    /// Posts written by one user, newest first
    pub fn get_by_user(&self, user_id: UserId) -> ArchiveResult<Vec<Post>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|p| p.is_owned_by(user_id))
            .collect())
    }

    /// Find posts whose id starts with a short id such as `post-1a2b3c4d`
    pub fn find_by_short_id(&self, short: &str) -> ArchiveResult<Vec<Post>> {
        let data = self
            .data
            .read()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .values()
            .filter(|p| p.id.matches_short(short))
            .cloned()
            .collect())
    }

    /// Insert or replace a post
    pub fn upsert(&self, post: Post) -> ArchiveResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(post.id, post);
        Ok(())
    }

    /// Remove a post, returning it if it existed
    pub fn delete(&self, id: PostId) -> ArchiveResult<Option<Post>> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id))
    }

    pub fn count(&self) -> ArchiveResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContentType, Submission};
    use chrono::Duration;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, PostRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = PostRepository::new(temp_dir.path().join("posts.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn post(title: &str, user_id: Option<UserId>) -> Post {
        let submission = Submission {
            title: title.into(),
            content: "words".into(),
            tags: vec!["t".into()],
            ..Submission::new(ContentType::Text)
        };
        Post::from_submission(&submission, user_id)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        let p = post("Kept", None);
        let id = p.id;
        repo.upsert(p).unwrap();
        repo.save().unwrap();

        let repo2 = PostRepository::new(temp_dir.path().join("posts.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(id).unwrap().unwrap().title, "Kept");
    }

    #[test]
    fn test_get_all_newest_first() {
        let (_temp_dir, repo) = create_test_repo();
        let mut older = post("older", None);
        older.created_at = older.created_at - Duration::days(1);
        repo.upsert(older).unwrap();
        repo.upsert(post("newer", None)).unwrap();

        let titles: Vec<_> = repo.get_all().unwrap().into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["newer", "older"]);
    }

    #[test]
    fn test_get_by_user() {
        let (_temp_dir, repo) = create_test_repo();
        let me = UserId::new();
        repo.upsert(post("mine", Some(me))).unwrap();
        repo.upsert(post("anon", None)).unwrap();

        let mine = repo.get_by_user(me).unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "mine");
    }

    #[test]
    fn test_find_by_short_id_and_delete() {
        let (_temp_dir, repo) = create_test_repo();
        let p = post("short", None);
        let id = p.id;
        repo.upsert(p).unwrap();

        let short = id.to_string();
        let found = repo.find_by_short_id(&short).unwrap();
        assert_eq!(found.len(), 1);

        assert!(repo.delete(id).unwrap().is_some());
        assert!(repo.delete(id).unwrap().is_none());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
