//! Per-step bodies of the wizard

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::models::{ContentType, MAX_TAGS};
use crate::tui::app::{App, EditTarget};
use crate::tui::widgets::TextInput;
use crate::wizard::Step;

use super::review;

/// Render the body for the current step
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let step = app.wizard.step();

    if step == Step::Confirm {
        review::render(frame, app, area);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let intro = intro_lines(app, step);
    let fields = app.targets();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(fields.len() as u16 * 2),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(intro).wrap(Wrap { trim: false }),
        chunks[0],
    );
    render_fields(frame, app, fields, chunks[1]);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn hint(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(Color::DarkGray)))
}

fn bullet(text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(Color::Cyan)),
        Span::raw(text.to_string()),
    ])
}

fn intro_lines(app: &App, step: Step) -> Vec<Line<'static>> {
    let submission = &app.wizard.state().submission;
    let content_type = submission.content_type;

    match step {
        Step::Welcome => vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Digital", Style::default().fg(Color::White)),
                Span::styled(
                    "Archive",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from("Submission Portal"),
            Line::from(""),
            hint("Press Enter to get started"),
        ],
        Step::Questions => {
            let mut lines = vec![
                heading("What questions is your work exploring?"),
                hint("Optional. Add as many as you like, then tell us where you are."),
                Line::from(""),
            ];
            lines.extend(submission.research_questions.iter().map(|q| bullet(q)));
            lines
        }
        Step::Type => {
            let mut lines = vec![
                heading("What kind of post is this?"),
                hint("Use ↑/↓ to choose and Enter to confirm. A new type clears content already added."),
                Line::from(""),
            ];
            for candidate in ContentType::ALL {
                let selected = candidate == app.highlighted_type;
                let marker = if selected { "(•) " } else { "( ) " };
                let style = if selected {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                lines.push(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(candidate.to_string(), style),
                    Span::styled(
                        format!("  {}", type_blurb(candidate)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
            lines
        }
        Step::Title => vec![heading("Give your post a title")],
        Step::Content if content_type.is_media() => {
            let mut lines = vec![
                heading(&format!("Upload your {}", content_type.label())),
                hint("Enter the path to a file on this computer."),
            ];
            if !submission.content.is_empty() {
                lines.push(Line::from(""));
                lines.push(uploaded_line(&submission.content));
            }
            lines
        }
        Step::Content => vec![heading("Write your post")],
        Step::Thumbnail => {
            let mut lines = vec![
                heading("Add a cover image"),
                hint("Optional. Shown in the gallery instead of a blank tile."),
            ];
            if let Some(thumbnail) = &submission.thumbnail {
                lines.push(Line::from(""));
                lines.push(uploaded_line(thumbnail));
            }
            lines
        }
        Step::Description => vec![
            heading("Describe your work"),
            hint("Optional."),
        ],
        Step::Tags => {
            let mut lines = vec![
                heading("Add tags"),
                hint(format!(
                    "{} of {} tags. Press x to remove the last one.",
                    submission.tags.len(),
                    MAX_TAGS
                )),
                Line::from(""),
            ];
            let chips: Vec<Span<'static>> = submission
                .tags
                .iter()
                .map(|tag| {
                    Span::styled(
                        format!(" #{} ", tag),
                        Style::default().fg(Color::Black).bg(Color::Cyan),
                    )
                })
                .flat_map(|chip| [chip, Span::raw(" ")])
                .collect();
            lines.push(Line::from(chips));
            lines
        }
        Step::Confirm => Vec::new(),
    }
}

fn type_blurb(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Text => "a story, poem or reflection",
        ContentType::Image => "a photo or artwork",
        ContentType::Video => "a video clip",
        ContentType::Audio => "a song or recording",
        ContentType::Pdf => "a document",
    }
}

fn uploaded_line(url: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("Uploaded: ", Style::default().fg(Color::Green)),
        Span::raw(url.to_string()),
    ])
}

/// Current value of a field shown when it is not focused
fn field_value(app: &App, target: EditTarget) -> String {
    let submission = &app.wizard.state().submission;
    match target {
        EditTarget::Title => submission.title.clone(),
        EditTarget::Location => submission.location.clone().unwrap_or_default(),
        EditTarget::Description => submission.description.clone().unwrap_or_default(),
        EditTarget::Content if !submission.content_type.is_media() => submission.content.clone(),
        _ => String::new(),
    }
}

fn render_fields(frame: &mut Frame, app: &App, fields: &[EditTarget], area: Rect) {
    for (index, target) in fields.iter().enumerate() {
        let row = Rect::new(area.x, area.y + index as u16 * 2, area.width, 1);
        if row.y >= area.y + area.height {
            break;
        }

        let selected = index == app.field_index;
        let marker = if selected { "▸ " } else { "  " };
        frame.render_widget(
            Paragraph::new(Span::styled(marker, Style::default().fg(Color::Cyan))),
            Rect::new(row.x, row.y, 2.min(row.width), 1),
        );
        let input_area = Rect::new(
            row.x + 2,
            row.y,
            row.width.saturating_sub(2),
            1,
        );

        if selected && app.is_editing() {
            frame.render_widget(&app.input, input_area);
        } else {
            let placeholder = if selected {
                "Press Enter to edit"
            } else {
                "Press Tab to select"
            };
            let display = TextInput::new()
                .label(target.label())
                .placeholder(placeholder)
                .content(field_value(app, *target));
            frame.render_widget(&display, input_area);
        }
    }
}
