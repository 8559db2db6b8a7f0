//! Export and history CLI commands

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{ArchiveError, ArchiveResult};
use crate::export::{export_full_json, export_full_yaml, export_posts_csv};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON, full archive
    Json,
    /// CSV, one row per post
    Csv,
    /// YAML, full archive, human-readable
    Yaml,
}

/// Export the archive to a file, or stdout when no file is given
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
    pretty: bool,
) -> ArchiveResult<()> {
    let mut writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ArchiveError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match format {
        ExportFormat::Json => export_full_json(storage, &mut writer, pretty)?,
        ExportFormat::Csv => export_posts_csv(storage, &mut writer)?,
        ExportFormat::Yaml => export_full_yaml(storage, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| ArchiveError::Export(e.to_string()))?;

    if let Some(path) = output {
        eprintln!(
            "Exported {} posts to: {}",
            storage.posts.count()?,
            path.display()
        );
    }

    Ok(())
}

/// Print the most recent audit log entries
pub fn handle_history_command(storage: &Storage, limit: usize) -> ArchiveResult<()> {
    let entries = storage.audit().read_recent(limit)?;
    if entries.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
