//! Configuration module for Archive Our Youth
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ArchivePaths;
pub use settings::Settings;
