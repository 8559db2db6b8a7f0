//! Local submission endpoint
//!
//! Connects the wizard to the archive: an accepted submission becomes a
//! stored post.

use crate::error::ArchiveResult;
use crate::models::{PostId, Submission, User};
use crate::storage::Storage;
use crate::wizard::SubmissionEndpoint;

use super::post::PostService;

/// Publishes submissions into the local archive
pub struct ArchiveEndpoint<'a> {
    storage: &'a Storage,
}

impl<'a> ArchiveEndpoint<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }
}

impl SubmissionEndpoint for ArchiveEndpoint<'_> {
    fn submit(&self, author: Option<&User>, submission: &Submission) -> ArchiveResult<PostId> {
        PostService::new(self.storage)
            .create(author, submission)
            .map(|post| post.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ArchivePaths;
    use crate::models::ContentType;
    use crate::wizard::{Rejected, Step, WizardController};
    use tempfile::TempDir;

    #[test]
    fn test_wizard_submits_through_archive() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(ArchivePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        storage.load_all().unwrap();
        let endpoint = ArchiveEndpoint::new(&storage);

        let mut wizard = WizardController::new();
        wizard.set_content_type(ContentType::Text);
        wizard.set_title("Bus stop");
        wizard.set_content("We wait.");
        wizard.add_tag("transit").unwrap();
        wizard.toggle_consent();
        wizard.go_to(Step::Confirm.index());

        let success = wizard.submit(None, &endpoint).unwrap();
        assert!(success.anonymous);

        let stored = storage.posts.get(success.post_id).unwrap().unwrap();
        assert_eq!(stored.title, "Bus stop");
        assert!(stored.is_anonymous());
    }

    #[test]
    fn test_failed_submit_retries_without_duplicate() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ArchivePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();
        let endpoint = ArchiveEndpoint::new(&storage);

        let mut wizard = WizardController::new();
        wizard.set_content_type(ContentType::Text);
        wizard.set_title("Bus stop");
        wizard.set_content("We wait.");
        wizard.add_tag("transit").unwrap();
        wizard.toggle_consent();
        wizard.go_to(Step::Confirm.index());

        // A non-empty directory in place of posts.json makes the save fail.
        let blocker = paths.posts_file();
        std::fs::create_dir_all(blocker.join("inner")).unwrap();

        let err = wizard.submit(None, &endpoint).unwrap_err();
        assert!(matches!(err, Rejected::SubmissionFailed(_)));
        assert_eq!(wizard.state().submission.title, "Bus stop");
        assert_eq!(storage.posts.count().unwrap(), 0);

        std::fs::remove_dir_all(&blocker).unwrap();
        wizard.submit(None, &endpoint).unwrap();

        let reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.posts.count().unwrap(), 1);
    }
}
