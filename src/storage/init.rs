//! First-run setup of the archive directory

use crate::config::paths::ArchivePaths;
use crate::error::ArchiveResult;

use super::file_io::write_json_atomic;
use super::posts::PostData;
use super::users::UserData;

/// Create the directory layout and empty data files
///
/// Existing data files are left untouched.
pub fn initialize_storage(paths: &ArchivePaths) -> ArchiveResult<()> {
    paths.ensure_directories()?;

    if !paths.posts_file().exists() {
        write_json_atomic(paths.posts_file(), &PostData::default())?;
    }
    if !paths.users_file().exists() {
        write_json_atomic(paths.users_file(), &UserData::default())?;
    }

    Ok(())
}

/// Whether the data files still need to be created
pub fn needs_initialization(paths: &ArchivePaths) -> bool {
    !paths.posts_file().exists() || !paths.users_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::file_io::read_json;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ArchivePaths::with_base_dir(temp_dir.path().to_path_buf());
        assert!(needs_initialization(&paths));

        initialize_storage(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.uploads_dir().exists());
        let posts: PostData = read_json(paths.posts_file()).unwrap();
        assert!(posts.posts.is_empty());
    }

    #[test]
    fn test_does_not_overwrite_existing_posts() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ArchivePaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.posts_file(), r#"{"posts": [], "extra": 1}"#).unwrap();

        initialize_storage(&paths).unwrap();

        let raw = std::fs::read_to_string(paths.posts_file()).unwrap();
        assert!(raw.contains("extra"));
    }
}
