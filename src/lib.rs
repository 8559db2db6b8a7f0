//! Archive Our Youth - a terminal submission portal and archive
//!
//! Young people submit creative work (text, images, video, audio and PDF
//! documents) through a step-by-step wizard. Published posts are browsed
//! in a gallery, and everything is stored locally as JSON files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (submissions, posts, users)
//! - `wizard`: The submission wizard state machine, validation and review
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `upload`: File uploads for media posts
//! - `audit`: Audit logging system
//! - `export`: JSON, CSV and YAML export
//! - `cli`, `display`: Command handlers and their terminal output
//! - `tui`: The interactive wizard
//!
//! # Example
//!
//! ```rust,ignore
//! use archive::config::{paths::ArchivePaths, settings::Settings};
//!
//! let paths = ArchivePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tui;
pub mod upload;
pub mod wizard;

pub use error::{ArchiveError, ArchiveResult};
