//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{App, ClickRegion};
use crate::events::Action;
use crate::tui::interaction::InteractiveRegion;
use crate::tui::theme::*;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Cursor",
        &[
            ("←/→ h/l ", "Focus left / right panel"),
            ("Tab     ", "Switch panel"),
            ("↑/↓ j/k ", "Move cursor"),
        ],
    ),
    (
        "Moving",
        &[
            ("Enter   ", "Move item to the other panel"),
            (">  <    ", "Move item right / left"),
            ("L  H    ", "Move all right / left"),
            ("K  J    ", "Shift item up / down"),
        ],
    ),
    (
        "Mouse",
        &[
            ("click   ", "Select item or press a control"),
            ("drag    ", "Reorder, or drop into the other panel"),
            ("wheel   ", "Scroll panel"),
        ],
    ),
    (
        "General",
        &[
            ("Ctrl+S  ", "Accept and print the result"),
            ("q / Esc ", "Quit without accepting"),
            ("?       ", "Toggle this help"),
        ],
    ),
];

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect, app: &mut App) {
    // Calculate centered popup area
    let popup_width = 50u16;
    let popup_height = 23u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![];

    for (title, keys) in SECTIONS {
        lines.push(Line::styled(*title, Style::new().fg(LOGO_LIGHT_BLUE).bold()));
        for (key, description) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}", key), Style::new().fg(TEXT_WHITE)),
                Span::styled(*description, Style::new().fg(TEXT_DIM)),
            ]));
        }
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(vec![
        Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" close", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .title(" Keyboard Shortcuts ")
        .title_style(Style::new().fg(LOGO_MINT).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_MINT))
        .style(Style::new().bg(Color::Black));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);

    // Clicks anywhere close the popup instead of reaching the panels below
    app.interactions.register(
        InteractiveRegion::clickable("help_popup", ClickRegion::from(area), Action::CloseHelp)
            .with_priority(10),
    );
}
