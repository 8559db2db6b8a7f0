//! YAML export
//!
//! The same document as the JSON export, for reading by eye.

use std::io::Write;

use crate::error::{ArchiveError, ArchiveResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Write the full archive as YAML
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> ArchiveResult<()> {
    let export = FullExport::from_storage(storage)?;

    let header = format!(
        "# Archive Our Youth export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| ArchiveError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ArchiveError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ArchivePaths;
    use tempfile::TempDir;

    use crate::export::json::EXPORT_SCHEMA_VERSION;

    #[test]
    fn test_yaml_export_has_header_and_reads_back() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(ArchivePaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        storage.load_all().unwrap();

        let mut buffer = Vec::new();
        export_full_yaml(&storage, &mut buffer).unwrap();
        let yaml = String::from_utf8(buffer).unwrap();

        assert!(yaml.starts_with("# Archive Our Youth export"));
        let export: FullExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.post_count, 0);
    }
}
