//! CSV export
//!
//! One row per post, spreadsheet friendly. List fields are joined with `; `.

use std::io::Write;

use crate::display::{author_label, author_lookup};
use crate::error::{ArchiveError, ArchiveResult};
use crate::storage::Storage;

const HEADER: [&str; 12] = [
    "ID",
    "Title",
    "Type",
    "Content",
    "Thumbnail",
    "Description",
    "Tags",
    "Research Questions",
    "Location",
    "Author",
    "Views",
    "Created At",
];

/// Write every post as CSV
pub fn export_posts_csv<W: Write>(storage: &Storage, writer: W) -> ArchiveResult<()> {
    let authors = author_lookup(storage.users.get_all()?);
    let posts = storage.posts.get_all()?;

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER)
        .map_err(|e| ArchiveError::Export(e.to_string()))?;

    for post in &posts {
        csv.write_record([
            post.id.as_uuid().to_string(),
            post.title.clone(),
            post.content_type.to_string(),
            post.content.clone(),
            post.thumbnail.clone().unwrap_or_default(),
            post.description.clone().unwrap_or_default(),
            post.tags.join("; "),
            post.research_questions.join("; "),
            post.location.clone().unwrap_or_default(),
            author_label(post, &authors),
            post.views.to_string(),
            post.created_at.to_rfc3339(),
        ])
        .map_err(|e| ArchiveError::Export(e.to_string()))?;
    }

    csv.flush().map_err(|e| ArchiveError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ArchivePaths;
    use crate::models::{ContentType, Submission};
    use crate::services::PostService;
    use tempfile::TempDir;

    #[test]
    fn test_csv_quotes_commas() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(ArchivePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        storage.load_all().unwrap();

        let draft = Submission {
            title: "Rain, again".into(),
            content: "It rained.".into(),
            tags: vec!["weather".into(), "city".into()],
            ..Submission::new(ContentType::Text)
        };
        PostService::new(&storage).create(None, &draft).unwrap();

        let mut buffer = Vec::new();
        export_posts_csv(&storage, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let mut lines = output.lines();
        assert!(lines.next().unwrap().starts_with("ID,Title,Type"));
        let row = lines.next().unwrap();
        assert!(row.contains("\"Rain, again\""));
        assert!(row.contains("weather; city"));
        assert!(row.contains("Anonymous"));
        assert!(lines.next().is_none());
    }
}
