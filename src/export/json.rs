//! JSON export
//!
//! The complete archive with schema versioning.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ArchiveError, ArchiveResult};
use crate::models::{Post, User};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full archive export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Version of the tool that wrote the export
    pub app_version: String,

    pub users: Vec<User>,

    /// Posts, newest first
    pub posts: Vec<Post>,

    pub metadata: ExportMetadata,
}

/// Summary counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub post_count: usize,
    pub user_count: usize,
    pub anonymous_post_count: usize,
    pub total_views: u64,
}

impl FullExport {
    /// Snapshot the archive, refusing one with posts by unknown users
    pub fn from_storage(storage: &Storage) -> ArchiveResult<Self> {
        let users = storage.users.get_all()?;
        let posts = storage.posts.get_all()?;

        let metadata = ExportMetadata {
            post_count: posts.len(),
            user_count: users.len(),
            anonymous_post_count: posts.iter().filter(|p| p.is_anonymous()).count(),
            total_views: posts.iter().map(|p| p.views).sum(),
        };

        let export = Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            users,
            posts,
            metadata,
        };
        export.validate().map_err(ArchiveError::Export)?;
        Ok(export)
    }

    /// Check the schema version and that every author exists
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let user_ids: HashSet<_> = self.users.iter().map(|u| u.id).collect();
        for post in &self.posts {
            if let Some(user_id) = post.user_id {
                if !user_ids.contains(&user_id) {
                    return Err(format!(
                        "Post {} references unknown user {}",
                        post.id, user_id
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Write the full archive as JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> ArchiveResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ArchiveError::Export(e.to_string()))
}
