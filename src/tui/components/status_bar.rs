//! Status bar - last notification on the left, hotkeys on the right.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::tui::theme::*;

/// Render the status line and the hotkey hints.
pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let layout = Layout::horizontal([Constraint::Min(0), Constraint::Length(44)]).split(area);

    let status = match (&app.drag, &app.status) {
        (Some(drag), _) => Line::from(vec![
            Span::styled("dragging ", Style::new().fg(DROP_MARKER)),
            Span::styled(drag.value.clone(), Style::new().fg(TEXT_WHITE)),
        ]),
        (None, Some(status)) => Line::styled(format!(" {}", status), Style::new().fg(LOGO_MINT)),
        (None, None) => Line::raw(""),
    };
    frame.render_widget(Paragraph::new(status), layout[0]);

    let hotkeys = Line::from(vec![
        Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" move · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[^S]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" accept · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[?]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" help · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" quit", Style::new().fg(TEXT_DIM)),
    ])
    .right_aligned();
    frame.render_widget(Paragraph::new(hotkeys), layout[1]);
}
