use crate::config::Config;
use crate::events::{Action, DropTarget};
use crate::log;
use crate::mover::{DragFact, ListReconciler, MoverEvent, Side};
use crate::notification::EventSink;
use crate::scroll::PanelScroll;
use crate::source::ItemSet;
use crate::tui::interaction::InteractionRegistry;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal, // Moving items around
    Help,   // Help popup showing all hotkeys
}

/// A rectangular screen region for hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

impl From<ratatui::layout::Rect> for ClickRegion {
    fn from(rect: ratatui::layout::Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An item picked up by the mouse, waiting for release
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    pub value: String,
    pub side: Side,
    pub index: usize,
    /// Row currently under the pointer, if it is a valid drop target
    pub hover: Option<DropTarget>,
}

/// Static presentation settings taken from the configuration
#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub left_title: String,
    pub right_title: String,
    pub show_icons: bool,
}

pub struct App {
    pub mover: ListReconciler,
    pub input_mode: InputMode,
    pub focus: Side,
    pub view: ViewSettings,
    pub left_scroll: PanelScroll,
    pub right_scroll: PanelScroll,
    pub interactions: InteractionRegistry,
    pub drag: Option<DragGesture>,
    /// Last notification, shown in the status bar
    pub status: Option<String>,
    pub should_quit: bool,
    pub accepted: bool,
    sink: EventSink,
}

impl App {
    pub fn new(items: ItemSet, config: &Config, sink: EventSink) -> Self {
        let mover = ListReconciler::new(items.unselected, items.selected, config.mover_options());
        let focus = mover.selection().map(|(side, _)| side).unwrap_or(Side::Left);

        Self {
            mover,
            input_mode: InputMode::Normal,
            focus,
            view: ViewSettings {
                left_title: config.left_title().to_string(),
                right_title: config.right_title().to_string(),
                show_icons: config.show_icons(),
            },
            left_scroll: PanelScroll::default(),
            right_scroll: PanelScroll::default(),
            interactions: InteractionRegistry::new(),
            drag: None,
            status: None,
            should_quit: false,
            accepted: false,
            sink,
        }
    }

    pub fn title(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.view.left_title,
            Side::Right => &self.view.right_title,
        }
    }

    pub fn scroll_mut(&mut self, side: Side) -> &mut PanelScroll {
        match side {
            Side::Left => &mut self.left_scroll,
            Side::Right => &mut self.right_scroll,
        }
    }

    /// Hand the final contents of both panels back to the host.
    pub fn into_items(self) -> ItemSet {
        let (unselected, selected) = self.mover.into_parts();
        ItemSet {
            unselected,
            selected,
        }
    }

    /// Apply an action, then forward whatever the reconciler emitted.
    pub fn dispatch(&mut self, action: Action) {
        if action.mutates_lists() {
            log::log(&format!("Action: {:?}", action));
        }
        if action.moves_cursor() {
            self.left_scroll.follow_cursor();
            self.right_scroll.follow_cursor();
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Accept => {
                self.accepted = true;
                self.should_quit = true;
            }
            Action::OpenHelp => self.input_mode = InputMode::Help,
            Action::CloseHelp => self.input_mode = InputMode::Normal,

            Action::Focus(side) => self.focus_panel(side),
            Action::ToggleFocus => self.focus_panel(self.focus.opposite()),
            Action::CursorUp => {
                self.mover.select_prev(self.focus);
            }
            Action::CursorDown => {
                self.mover.select_next(self.focus);
            }

            Action::MoveFocused => self.move_from(self.focus),
            Action::MoveRight => self.move_from(Side::Left),
            Action::MoveLeft => self.move_from(Side::Right),
            Action::MoveAllRight => {
                self.mover.move_all_right();
                self.focus = Side::Right;
            }
            Action::MoveAllLeft => {
                self.mover.move_all_left();
                self.focus = Side::Left;
            }
            Action::ShiftUp => self.shift_cursor(-1),
            Action::ShiftDown => self.shift_cursor(1),

            Action::PressItem { side, index } => {
                self.select_row(side, index);
                self.drag = self.mover.items(side).get(index).map(|item| DragGesture {
                    value: item.value.clone(),
                    side,
                    index,
                    hover: None,
                });
            }
            Action::DragHover(target) => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.hover = target;
                }
            }
            Action::CancelDrag => self.drag = None,
            Action::Drag(fact) => {
                self.drag = None;
                self.apply_drag(&fact);
            }

            Action::ScrollPanel { side, delta } => {
                let len = self.mover.items(side).len();
                self.scroll_mut(side).scroll_by(delta, len);
            }

            Action::None => {}
        }

        self.forward_events();
    }

    /// Run deferred reconciler steps. Called once a frame has been drawn.
    pub fn settle(&mut self) {
        if self.mover.settle() > 0 {
            self.forward_events();
        }
    }

    fn focus_panel(&mut self, side: Side) {
        self.focus = side;
        if self.mover.cursor_index(side).is_none() {
            self.mover.select_item(side, None);
        }
    }

    fn select_row(&mut self, side: Side, index: usize) {
        let value = self.mover.items(side).get(index).map(|item| item.value.clone());
        if let Some(value) = value {
            self.mover.select_item(side, Some(&value));
            self.focus = side;
        }
    }

    fn move_from(&mut self, from: Side) {
        let moved = match from {
            Side::Left => self.mover.move_right(None, None),
            Side::Right => self.mover.move_left(None, None),
        };
        if moved {
            // the cursor follows the item once the move settles
            self.focus = from.opposite();
        }
    }

    /// Keyboard reordering goes through the same adapter as mouse drags.
    fn shift_cursor(&mut self, delta: i32) {
        let side = self.focus;
        let Some(index) = self.mover.cursor_index(side) else {
            return;
        };
        let len = self.mover.items(side).len();
        let target = if delta < 0 {
            index.checked_sub(1)
        } else if index + 1 < len {
            Some(index + 1)
        } else {
            None
        };
        let Some(target) = target else {
            return;
        };

        let value = self.mover.items(side)[index].value.clone();
        if let Some(fact) = DragFact::from_release(value, side, index, side, target) {
            self.apply_drag(&fact);
        }
    }

    fn apply_drag(&mut self, fact: &DragFact) {
        if self.mover.apply_drag(fact) {
            self.focus = match fact {
                DragFact::Reorder { side, .. } => *side,
                DragFact::Drop { source, .. } => source.opposite(),
            };
        }
    }

    fn forward_events(&mut self) {
        for event in self.mover.drain_events() {
            log::log_event(&event);
            match &event {
                MoverEvent::ScrollToEnd { side } => self.scroll_mut(*side).scroll_to_end(),
                _ => {
                    self.status = Some(event.summary());
                    self.sink.send(&event);
                }
            }
        }
    }
}
