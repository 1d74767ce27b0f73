use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, InputMode};
use crate::mover::Side;
use super::components::{render_controls, render_help_popup, render_panel, render_status_bar};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Regions are rebuilt every frame
    app.interactions.clear();

    // Main vertical layout: logo, panels, status
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Logo + spacing
        Constraint::Min(0),    // Panels
        Constraint::Length(1), // Status + hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);

    // Horizontal split: left panel | controls | right panel
    let content_layout = Layout::horizontal([
        Constraint::Percentage(50),
        Constraint::Length(8),
        Constraint::Percentage(50),
    ])
    .split(main_layout[1]);

    render_panel(frame, content_layout[0], app, Side::Left);
    render_controls(frame, content_layout[1], app);
    render_panel(frame, content_layout[2], app, Side::Right);

    render_status_bar(frame, main_layout[2], app);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, area, app);
    }
}

fn render_logo(frame: &mut Frame, area: Rect) {
    // Center the colorful "mover" logo
    let padding = (area.width.saturating_sub(5)) / 2;
    let centered = Line::from(vec![
        Span::raw(" ".repeat(padding as usize)),
        Span::styled("m", Style::new().fg(LOGO_CORAL).bold()),
        Span::styled("o", Style::new().fg(LOGO_GOLD).bold()),
        Span::styled("v", Style::new().fg(LOGO_LIGHT_BLUE).bold()),
        Span::styled("e", Style::new().fg(LOGO_MINT).bold()),
        Span::styled("r", Style::new().fg(LOGO_CORAL).bold()),
    ]);

    let paragraph = Paragraph::new(centered);
    frame.render_widget(paragraph, area);
}
