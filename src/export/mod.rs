//! Archive export
//!
//! - JSON: the full archive, machine readable
//! - YAML: the same document, human readable
//! - CSV: one row per post

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_posts_csv;
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
