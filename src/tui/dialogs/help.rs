//! Help dialog
//!
//! Lists the keys for each context, highlighting the ones that apply to
//! the current step.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};
use crate::tui::layout::centered_rect;
use crate::wizard::Step;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.wizard.step()))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(step: Step) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for context in KeyContext::ALL {
        let active = match context {
            KeyContext::Global | KeyContext::Editing => true,
            KeyContext::TypePicker => step == Step::Type,
            KeyContext::Confirm => step == Step::Confirm,
        };
        let heading_color = if active { Color::Yellow } else { Color::DarkGray };

        lines.push(Line::from(vec![Span::styled(
            context.heading(),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(heading_color),
        )]));
        for kb in get_keybindings(context) {
            lines.push(key_line(&format_keybinding(kb), kb.description));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>8}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
