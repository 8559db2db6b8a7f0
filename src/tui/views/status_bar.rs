//! Status bar view
//!
//! Shows the post type, who is posting, the last status message and key
//! hints for the current mode.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.wizard.content_type()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];

    match &app.author {
        Some(user) => spans.push(Span::styled(
            format!("@{}", user.handle),
            Style::default().fg(Color::Green),
        )),
        None => spans.push(Span::styled("Anonymous", Style::default().fg(Color::Red))),
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = if app.is_editing() {
        "Enter save · Esc leave field"
    } else {
        "←/→ step · Enter edit · ? help · q quit"
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(hints.chars().count() as u16 + 1)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(hints)
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::White).bg(Color::DarkGray)),
        chunks[1],
    );
}
