//! Review step
//!
//! Shows each field of the draft with what is missing, followed by the
//! research consent checkbox.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::wizard::{FieldOutcome, ReviewEntry, ReviewSnapshot};

/// Longest value shown inline before it is cut
const PREVIEW_LEN: usize = 160;

const CONSENT_TEXT: &[&str] = &[
    "I agree that my submission can be used for research purposes. The Archive \
     contributes to a better understanding of youth and planetary well-being and \
     may be used in presentations, teaching and publications.",
    "All intellectual and creative rights remain yours.",
    "You can stop participating and delete your submission at any time by signing \
     in and deleting it, or by contacting the research team.",
    "You have the right to submit anonymously. Anonymous posts can only be removed \
     by contacting the research team.",
];

/// Render the review step
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Review Submission ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    let snapshot = app.wizard.build_review();
    let lines = review_lines(&snapshot, app.author.is_none(), &app.settings.consent_form_url);

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn review_lines(
    snapshot: &ReviewSnapshot,
    anonymous: bool,
    consent_form_url: &str,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if anonymous {
        lines.push(Line::from(vec![
            Span::raw("Posting "),
            Span::styled(
                "anonymously",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(", you will not be able to delete your post later without contacting us."),
        ]));
        lines.push(Line::from(""));
    }

    for entry in &snapshot.entries {
        if let Some(line) = entry_line(entry) {
            lines.push(line);
        }
        if let Some(error) = &entry.error {
            if entry.outcome.hint().is_none() {
                lines.push(Line::from(Span::styled(
                    format!("    {}", error),
                    Style::default().fg(Color::Red),
                )));
            }
        }
    }

    lines.push(Line::from(""));

    let checkbox = if snapshot.consent_checked { "[x] " } else { "[ ] " };
    let checkbox_style = if snapshot.consent_error {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let mut consent = CONSENT_TEXT.iter();
    if let Some(first) = consent.next() {
        lines.push(Line::from(vec![
            Span::styled(checkbox, checkbox_style),
            Span::raw(first.to_string()),
        ]));
    }
    for paragraph in consent {
        lines.push(Line::from(format!("    {}", paragraph)));
    }
    lines.push(Line::from(vec![
        Span::raw("    Read the full consent form: "),
        Span::styled(
            consent_form_url.to_string(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]));

    if snapshot.consent_error {
        lines.push(Line::from(Span::styled(
            "You must agree to the terms and conditions.",
            Style::default().fg(Color::Red),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "c toggle consent · Enter submit · g jump to first missing field",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

fn entry_line(entry: &ReviewEntry) -> Option<Line<'static>> {
    let label_style = if entry.blocks_submission() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let label = Span::styled(format!("{}: ", entry.field.label()), label_style);

    let value = match &entry.outcome {
        FieldOutcome::NotApplicable => return None,
        FieldOutcome::Present(value) => Span::raw(preview(value)),
        FieldOutcome::Missing { step } if entry.required => Span::styled(
            format!("{} is missing, go to {} to add it.", entry.field.label(), step.title()),
            Style::default().fg(Color::Red),
        ),
        FieldOutcome::Missing { .. } => {
            Span::styled("None", Style::default().fg(Color::DarkGray))
        }
    };

    Some(Line::from(vec![label, value]))
}

fn preview(value: &str) -> String {
    if value.chars().count() > PREVIEW_LEN {
        let cut: String = value.chars().take(PREVIEW_LEN).collect();
        format!("{}...", cut)
    } else {
        value.to_string()
    }
}
