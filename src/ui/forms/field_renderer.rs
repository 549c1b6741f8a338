//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn focus_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a single-line text input
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    is_active: bool,
) {
    let cursor = if is_active { "▌" } else { "" };

    let content = if value.is_empty() {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled(value, focus_style(is_active)),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(focus_style(is_active));

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Draw a labelled checkbox
pub fn draw_checkbox(frame: &mut Frame, area: Rect, label: &str, checked: bool, is_active: bool) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let mark_style = if checked {
        Style::default().fg(Color::Green)
    } else {
        focus_style(is_active)
    };

    let content = Line::from(vec![
        Span::styled(mark, mark_style),
        Span::raw(" "),
        Span::styled(label, focus_style(is_active)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_style(is_active));

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Draw an inline validation message; nothing is drawn for an empty message
pub fn draw_field_error(frame: &mut Frame, area: Rect, message: &str) {
    if message.is_empty() {
        return;
    }
    let paragraph = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
