//! Layout definitions for the TUI
//!
//! The wizard screen is a header with the step title and progress, a body
//! for the current step and a one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the wizard
pub struct WizardLayout {
    /// Step title and progress gauge
    pub header: Rect,
    /// Current step
    pub body: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl WizardLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(5),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Area for a toast in the top-right corner
pub fn toast_rect(r: Rect) -> Rect {
    let width = 44.min(r.width);
    let height = 4.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}
