//! Move controls - the button column between the two panels.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::app::{App, ClickRegion};
use crate::events::Action;
use crate::mover::Side;
use crate::tui::theme::*;

/// One button: unicode icon, ascii fallback, action
const BUTTONS: [(&str, &str, Action); 4] = [
    ("⏩", ">>", Action::MoveAllRight),
    ("▶", ">", Action::MoveRight),
    ("◀", "<", Action::MoveLeft),
    ("⏪", "<<", Action::MoveAllLeft),
];

/// Render the four move buttons, vertically centered, and make them clickable.
pub fn render_controls(frame: &mut Frame, area: Rect, app: &mut App) {
    // buttons are separated by a blank row, with a wider gap between the
    // "right" pair and the "left" pair
    let offsets = [0u16, 2, 5, 7];
    let height = 8u16;
    let top = area.y + area.height.saturating_sub(height) / 2;

    let left_len = app.mover.unselected().len();
    let right_len = app.mover.selected().len();
    let has_left_cursor = app.mover.cursor_index(Side::Left).is_some();
    let has_right_cursor = app.mover.cursor_index(Side::Right).is_some();

    for ((icon, ascii, action), dy) in BUTTONS.iter().zip(offsets) {
        let y = top + dy;
        if y >= area.y + area.height {
            break;
        }

        let enabled = match action {
            Action::MoveAllRight => left_len > 0,
            Action::MoveRight => has_left_cursor,
            Action::MoveLeft => has_right_cursor,
            Action::MoveAllLeft => right_len > 0,
            _ => false,
        };

        let label = if app.view.show_icons { *icon } else { *ascii };
        let style = if enabled {
            Style::new().fg(LOGO_LIGHT_BLUE).bold()
        } else {
            Style::new().fg(TEXT_DIM)
        };

        let button_area = Rect::new(area.x, y, area.width, 1);
        let line = Line::styled(format!("[{}]", label), style).centered();
        frame.render_widget(Paragraph::new(line), button_area);

        app.interactions
            .register_click("move_control", ClickRegion::from(button_area), action.clone());
    }
}
