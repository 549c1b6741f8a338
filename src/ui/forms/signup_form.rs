//! Sign-up form rendering

use super::field_renderer::{draw_checkbox, draw_field_error, draw_text_field};
use crate::app::App;
use crate::state::{FieldName, FormFocus, Phase, SubmissionOutcome};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Heading shown on the form border
pub const FORM_TITLE: &str = "Submitting a Form";

const PASSWORD_PLACEHOLDER: &str = "Type Password";

/// Draw the form with its outcome area, inputs and submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {FORM_TITLE} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = &app.state.form;
    let focus = app.state.focus;

    let outcome = outcome_paragraph(form.outcome(), form.phase());
    let outcome_rows = outcome_height(outcome.as_ref(), inner);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(outcome_rows),  // Outcome
            Constraint::Length(2),             // Password error
            Constraint::Length(3),             // Password
            Constraint::Length(1),             // Accept error
            Constraint::Length(3),             // Accept
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    if let Some(outcome) = outcome {
        frame.render_widget(outcome, chunks[0]);
    }

    draw_field_error(frame, chunks[1], form.errors().get(FieldName::Password));
    draw_text_field(
        frame,
        chunks[2],
        FieldName::Password.label(),
        &form.values().password,
        PASSWORD_PLACEHOLDER,
        focus == FormFocus::Password,
    );

    draw_field_error(frame, chunks[3], form.errors().get(FieldName::Accept));
    draw_checkbox(
        frame,
        chunks[4],
        FieldName::Accept.label(),
        form.values().accept,
        focus == FormFocus::Accept,
    );

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(18), Constraint::Min(0)])
        .split(chunks[5])[0];
    let label = if form.phase() == Phase::Submitting {
        "Submitting..."
    } else {
        "Submit"
    };
    render_button(
        frame,
        button_area,
        label,
        focus == FormFocus::Submit,
        app.state.can_submit(),
    );
}

/// Rows below the outcome area
const FIELD_ROWS: u16 = 2 + 3 + 1 + 3 + BUTTON_HEIGHT;

/// Rows reserved for the outcome even when it is short or empty
const MIN_OUTCOME_ROWS: u16 = 2;

/// Height of the outcome area: every wrapped line of the payload, as far as
/// the space left over by the fields allows
fn outcome_height(outcome: Option<&Paragraph>, inner: Rect) -> u16 {
    let width = inner.width.saturating_sub(2).max(1);
    let wanted = outcome
        .map(|p| u16::try_from(p.line_count(width)).unwrap_or(u16::MAX))
        .unwrap_or(0);
    let available = inner.height.saturating_sub(FIELD_ROWS);
    wanted.min(available).max(MIN_OUTCOME_ROWS)
}

/// The success or failure message shown above the form
fn outcome_paragraph(outcome: &SubmissionOutcome, phase: Phase) -> Option<Paragraph<'_>> {
    let span = match (outcome, phase) {
        (_, Phase::Submitting) => Span::styled("Sending...", Style::default().fg(Color::Yellow)),
        (SubmissionOutcome::Success(payload), _) => Span::styled(
            payload.as_str(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        (SubmissionOutcome::Failure(payload), _) => Span::styled(
            payload.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        (SubmissionOutcome::None, _) => return None,
    };

    Some(Paragraph::new(span).wrap(Wrap { trim: true }))
}
