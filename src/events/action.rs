//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or customized.

use crate::mover::{DragFact, Side};

/// A row under the pointer that an item can be dropped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub side: Side,
    /// Insertion index; may equal the panel length (append)
    pub index: usize,
}

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit without accepting
    Quit,
    /// Quit and hand the result to the host
    Accept,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,

    // === Focus and cursor ===
    /// Focus a panel (and put the cursor in it)
    Focus(Side),
    /// Switch focus to the other panel
    ToggleFocus,
    /// Cursor up in the focused panel
    CursorUp,
    /// Cursor down in the focused panel
    CursorDown,

    // === Moves ===
    /// Move the cursor item of the focused panel to the other panel
    MoveFocused,
    /// Move the cursor item from left to right
    MoveRight,
    /// Move the cursor item from right to left
    MoveLeft,
    /// Move everything from left to right
    MoveAllRight,
    /// Move everything from right to left
    MoveAllLeft,
    /// Shift the cursor item one row up in its panel
    ShiftUp,
    /// Shift the cursor item one row down in its panel
    ShiftDown,

    // === Mouse drag ===
    /// Mouse pressed on an item: select it and start a possible drag
    PressItem { side: Side, index: usize },
    /// Pointer moved while dragging
    DragHover(Option<DropTarget>),
    /// Pointer released without a usable target
    CancelDrag,
    /// A completed drag gesture
    Drag(DragFact),

    // === Scrolling ===
    /// Scroll a panel by n rows (negative = up)
    ScrollPanel { side: Side, delta: i32 },

    /// No action
    None,
}

impl Action {
    /// Whether this action can change the collections
    pub fn mutates_lists(&self) -> bool {
        matches!(
            self,
            Action::MoveFocused
                | Action::MoveRight
                | Action::MoveLeft
                | Action::MoveAllRight
                | Action::MoveAllLeft
                | Action::ShiftUp
                | Action::ShiftDown
                | Action::Drag(_)
        )
    }

    /// Whether this action can move the cursor, so panels follow it again
    pub fn moves_cursor(&self) -> bool {
        self.mutates_lists()
            || matches!(
                self,
                Action::Focus(_)
                    | Action::ToggleFocus
                    | Action::CursorUp
                    | Action::CursorDown
                    | Action::PressItem { .. }
            )
    }
}
