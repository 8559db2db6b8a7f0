//! Terminal User Interface module
//!
//! The submission wizard as a full-screen ratatui app: one screen per
//! step, inline text fields, a review screen with the consent checkbox and
//! toast notifications for the outcome.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
