//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod export;
pub mod post;

pub use export::{handle_export_command, handle_history_command, ExportFormat};
pub use post::{handle_post_command, PostCommands};
