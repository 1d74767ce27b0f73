//! Mouse event handling and drag gesture recognition.
//!
//! Clicks and scrolls are dispatched through the interaction registry, which
//! is populated by UI components during each render. Press, drag and release
//! on an item row form a drag gesture; on release the pointer position is
//! resolved against the registered drop zones and reported as a `DragFact`.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::mover::DragFact;

use super::{Action, DropTarget};

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => app.interactions.handle_scroll_up(x, y),
        MouseEventKind::ScrollDown => app.interactions.handle_scroll_down(x, y),
        MouseEventKind::Down(MouseButton::Left) => app.interactions.handle_click(x, y),
        MouseEventKind::Drag(MouseButton::Left) if app.drag.is_some() => {
            Action::DragHover(drop_target(app, x, y))
        }
        MouseEventKind::Up(MouseButton::Left) => match &app.drag {
            Some(drag) => drop_target(app, x, y)
                .and_then(|target| {
                    DragFact::from_release(
                        drag.value.clone(),
                        drag.side,
                        drag.index,
                        target.side,
                        target.index,
                    )
                })
                .map(Action::Drag)
                .unwrap_or(Action::CancelDrag),
            None => Action::None,
        },
        _ => Action::None,
    }
}

/// Drop target under the pointer for the drag in flight.
///
/// Inside the source panel the item can only land on an existing row, so the
/// index is clamped to the last one; the other panel also accepts the slot
/// after its last item.
fn drop_target(app: &App, x: u16, y: u16) -> Option<DropTarget> {
    let drag = app.drag.as_ref()?;
    let mut target = app.interactions.drop_target(x, y)?;

    if target.side == drag.side {
        let len = app.mover.items(drag.side).len();
        target.index = target.index.min(len.saturating_sub(1));
    }

    Some(target)
}
