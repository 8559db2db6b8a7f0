//! User repository backed by data/users.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{ArchiveError, ArchiveResult};
use crate::models::{User, UserId};

use super::file_io::{read_json, write_json_atomic};

/// On-disk layout of users.json
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct UserData {
    pub users: Vec<User>,
}

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserId, User>>,
    /// Index: normalized handle -> user_id
    by_handle: RwLock<HashMap<String, UserId>>,
}

impl UserRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_handle: RwLock::new(HashMap::new()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> ArchiveResult<()> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_handle = self
            .by_handle
            .write()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_handle.clear();

        for user in file_data.users {
            by_handle.insert(User::normalize_handle(&user.handle), user.id);
            data.insert(user.id, user);
        }

        Ok(())
    }

    /// Save users to disk, sorted by handle
    pub fn save(&self) -> ArchiveResult<()> {
        let data = self
            .data
            .read()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut users: Vec<_> = data.values().cloned().collect();
        users.sort_by_key(|u| User::normalize_handle(&u.handle));

        write_json_atomic(&self.path, &UserData { users })
    }

    pub fn get(&self, id: UserId) -> ArchiveResult<Option<User>> {
        let data = self
            .data
            .read()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// All users, sorted by handle
    pub fn get_all(&self) -> ArchiveResult<Vec<User>> {
        let data = self
            .data
            .read()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut users: Vec<_> = data.values().cloned().collect();
        users.sort_by_key(|u| User::normalize_handle(&u.handle));
        Ok(users)
    }

    /// Look a user up by handle (case-insensitive)
    pub fn get_by_handle(&self, handle: &str) -> ArchiveResult<Option<User>> {
        let data = self
            .data
            .read()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_handle = self
            .by_handle
            .read()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(by_handle
            .get(&User::normalize_handle(handle))
            .and_then(|id| data.get(id))
            .cloned())
    }

    /// Insert or update a user
    pub fn upsert(&self, user: User) -> ArchiveResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_handle = self
            .by_handle
            .write()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(old) = data.get(&user.id) {
            by_handle.remove(&User::normalize_handle(&old.handle));
        }
        by_handle.insert(User::normalize_handle(&user.handle), user.id);

        data.insert(user.id, user);
        Ok(())
    }

    pub fn count(&self) -> ArchiveResult<usize> {
        let data = self
            .data
            .read()
            .map_err(|e| ArchiveError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
