//! Item panel component - one of the two lists.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, ClickRegion};
use crate::mover::Side;
use crate::tui::interaction::DropZone;
use crate::tui::theme::*;

/// Render the panel for `side` and register its rows for mouse handling.
pub fn render_panel(frame: &mut Frame, area: Rect, app: &mut App, side: Side) {
    let focused = app.focus == side;
    let len = app.mover.items(side).len();

    let border_color = if focused { LOGO_MINT } else { TEXT_DIM };
    let title = format!(" {} ({}) ", app.title(side), len);
    let block = Block::default()
        .title(title)
        .title_style(Style::new().fg(border_color).bold())
        .borders(Borders::ALL)
        .border_style(Style::new().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Scroll window follows the cursor unless a jump to the end is pending
    let cursor = app.mover.cursor_index(side);
    let scroll = app.scroll_mut(side);
    scroll.set_viewport(inner.height as usize);
    scroll.reconcile(cursor, len);
    let offset = scroll.offset();

    app.interactions.register_drop_zone(DropZone {
        side,
        bounds: ClickRegion::from(inner),
        offset,
        len,
    });

    // Insertion marker for a drag hovering over this panel
    let marker = app
        .drag
        .as_ref()
        .and_then(|d| d.hover)
        .filter(|t| t.side == side)
        .map(|t| t.index);
    let dragged = app
        .drag
        .as_ref()
        .filter(|d| d.side == side)
        .map(|d| d.value.clone());

    let mut lines: Vec<Line> = vec![];

    if len == 0 {
        lines.push(Line::styled("  (empty)", Style::new().fg(TEXT_DIM)));
    }

    let rows = inner.height as usize;
    for (row, item) in app.mover.items(side).iter().enumerate().skip(offset).take(rows) {
        let is_dragged = dragged.as_deref() == Some(item.value.as_str());
        let at_marker = marker == Some(row);

        let cursor = if at_marker {
            "▸ "
        } else if item.is_selected {
            "> "
        } else {
            "  "
        };

        let mut style = Style::new().fg(TEXT_WHITE);
        if item.is_selected {
            style = style.bg(CURSOR_BG).add_modifier(Modifier::BOLD);
        }
        if is_dragged {
            style = style.fg(TEXT_DIM).add_modifier(Modifier::ITALIC);
        }

        lines.push(Line::from(vec![
            Span::styled(
                cursor,
                if at_marker {
                    Style::new().fg(DROP_MARKER)
                } else {
                    Style::new().fg(LOGO_MINT)
                },
            ),
            Span::styled(item.label().to_string(), style),
        ]));

        let y = inner.y + (row - offset) as u16;
        app.interactions
            .register_item(side, row, ClickRegion::new(inner.x, y, inner.width, 1));
    }

    // Append slot: marker past the last row
    if marker == Some(len) && len >= offset && len - offset < rows {
        lines.push(Line::styled("▸ ", Style::new().fg(DROP_MARKER)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
