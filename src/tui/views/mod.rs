//! TUI Views module
//!
//! The header with step progress, the body for the current step, the
//! status bar and any overlays on top.

pub mod review;
pub mod status_bar;
pub mod steps;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, WizardLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = WizardLayout::new(frame.area());

    render_header(frame, app, layout.header);
    steps::render(frame, app, layout.body);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(toast) = app.notifications.current() {
        frame.render_widget(NotificationWidget::new(toast), toast_rect(frame.area()));
    }

    if app.active_dialog == ActiveDialog::Help {
        dialogs::help::render(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let step = app.wizard.step();
    let (position, total) = step.progress(app.wizard.content_type());

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            " Archive Our Youth ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled(step.title(), Style::default().add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(title), rows[0]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(position as f64 / total.max(1) as f64)
        .label(format!("Step {} of {}", position, total));
    frame.render_widget(gauge, rows[1]);
}
