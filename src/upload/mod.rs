//! Media uploads
//!
//! Media posts carry a URL rather than the file itself. An [`UploadService`]
//! turns a local file into such a URL; [`LocalUploadService`] does it by
//! copying into the archive's `uploads/` directory.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::config::paths::ArchivePaths;
use crate::error::{ArchiveError, ArchiveResult};
use crate::models::ContentType;

/// What kind of file an upload must be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Image,
    Video,
    Audio,
    Pdf,
}

impl UploadKind {
    /// Upload kind for a post's main content, None for text posts
    pub fn for_content(content_type: ContentType) -> Option<Self> {
        match content_type {
            ContentType::Text => None,
            ContentType::Image => Some(Self::Image),
            ContentType::Video => Some(Self::Video),
            ContentType::Audio => Some(Self::Audio),
            ContentType::Pdf => Some(Self::Pdf),
        }
    }

    /// Accepted file extensions (lowercase)
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Image => &["png", "jpg", "jpeg", "gif", "webp"],
            Self::Video => &["mp4", "mov", "webm", "mkv"],
            Self::Audio => &["mp3", "wav", "ogg", "m4a", "flac"],
            Self::Pdf => &["pdf"],
        }
    }

    /// Whether a file path has an accepted extension
    pub fn accepts(self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.extensions().contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }
}

impl fmt::Display for UploadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
            Self::Audio => write!(f, "audio"),
            Self::Pdf => write!(f, "PDF"),
        }
    }
}

/// Turns a local file into a URL a post can reference
pub trait UploadService {
    fn upload(&self, file: &Path, kind: UploadKind) -> ArchiveResult<String>;

    /// Remove an upload that no post ended up referencing
    fn discard(&self, url: &str) -> ArchiveResult<()>;
}

/// Stores uploads under `<base>/uploads/<uuid>.<ext>`
pub struct LocalUploadService {
    dir: PathBuf,
}

impl LocalUploadService {
    pub fn new(paths: &ArchivePaths) -> Self {
        Self {
            dir: paths.uploads_dir(),
        }
    }
}

impl UploadService for LocalUploadService {
    fn upload(&self, file: &Path, kind: UploadKind) -> ArchiveResult<String> {
        if !file.is_file() {
            return Err(ArchiveError::Upload(format!(
                "File not found: {}",
                file.display()
            )));
        }
        if !kind.accepts(file) {
            return Err(ArchiveError::Upload(format!(
                "{} is not a supported {} file (expected one of: {})",
                file.display(),
                kind,
                kind.extensions().join(", ")
            )));
        }

        let ext = file
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        fs::create_dir_all(&self.dir)
            .map_err(|e| ArchiveError::Upload(format!("Failed to create uploads directory: {}", e)))?;

        let target = self.dir.join(format!("{}.{}", Uuid::new_v4(), ext));
        fs::copy(file, &target)
            .map_err(|e| ArchiveError::Upload(format!("Failed to store {}: {}", file.display(), e)))?;

        let absolute = target.canonicalize().unwrap_or(target);
        Ok(format!("file://{}", absolute.display()))
    }

    fn discard(&self, url: &str) -> ArchiveResult<()> {
        let Some(path) = url.strip_prefix("file://").map(PathBuf::from) else {
            return Ok(());
        };
        // Only files this service stored are ever removed
        let dir = self.dir.canonicalize().unwrap_or_else(|_| self.dir.clone());
        if path.parent() != Some(dir.as_path()) || !path.is_file() {
            return Ok(());
        }

        fs::remove_file(&path)
            .map_err(|e| ArchiveError::Upload(format!("Failed to remove {}: {}", path.display(), e)))
    }
}
