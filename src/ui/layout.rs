//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::FormFocus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and the bottom status line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let submit_state = if app.state.can_submit() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };

    let spans = vec![
        submit_state,
        Span::styled(
            get_focus_hints(app.state.focus),
            Style::default().fg(Color::Gray),
        ),
        Span::raw(" | "),
        Span::styled(&app.state.endpoint, Style::default().fg(Color::Blue)),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the focused control
fn get_focus_hints(focus: FormFocus) -> String {
    match focus {
        FormFocus::Password => format!("Tab:next  type:edit  {SUBMIT_SHORTCUT}:submit  Esc:quit"),
        FormFocus::Accept => format!("Tab:next  Space:toggle  {SUBMIT_SHORTCUT}:submit  Esc:quit"),
        FormFocus::Submit => "Tab:next  Enter:submit  Esc:quit".to_string(),
    }
}
