//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};
use crate::mover::Side;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(app: &App, key: KeyEvent) -> Action {
    // Esc drops a drag in flight before it quits
    if key.code == KeyCode::Esc && app.drag.is_some() {
        return Action::CancelDrag;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') => Action::Accept,
            KeyCode::Char('c') => Action::Quit,
            _ => Action::None,
        };
    }

    if key.modifiers.contains(KeyModifiers::SHIFT) {
        match key.code {
            KeyCode::Up => return Action::ShiftUp,
            KeyCode::Down => return Action::ShiftDown,
            _ => {}
        }
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,

        // Focus
        KeyCode::Left | KeyCode::Char('h') => Action::Focus(Side::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::Focus(Side::Right),
        KeyCode::Tab | KeyCode::BackTab => Action::ToggleFocus,

        // Cursor
        KeyCode::Up | KeyCode::Char('k') => Action::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => Action::CursorDown,

        // Reorder
        KeyCode::Char('K') => Action::ShiftUp,
        KeyCode::Char('J') => Action::ShiftDown,

        // Moves
        KeyCode::Enter | KeyCode::Char(' ') => Action::MoveFocused,
        KeyCode::Char('>') => Action::MoveRight,
        KeyCode::Char('<') => Action::MoveLeft,
        KeyCode::Char('L') => Action::MoveAllRight,
        KeyCode::Char('H') => Action::MoveAllLeft,

        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => {
            Action::CloseHelp
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::notification::EventSink;
    use crate::source::ItemSet;

    fn app() -> App {
        App::new(ItemSet::demo(), &Config::default(), EventSink::disabled())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_keys() {
        let app = app();
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_key_event(&app, key(KeyCode::Enter)), Action::MoveFocused);
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('L'))), Action::MoveAllRight);
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('<'))), Action::MoveLeft);
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('h'))), Action::Focus(Side::Left));
    }

    #[test]
    fn test_modified_keys() {
        let app = app();
        let accept = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(&app, accept), Action::Accept);
        let shift_up = KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT);
        assert_eq!(handle_key_event(&app, shift_up), Action::ShiftUp);
    }

    #[test]
    fn test_esc_cancels_drag_before_quitting() {
        let mut app = app();
        app.dispatch(Action::PressItem { side: Side::Left, index: 0 });
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Action::CancelDrag);
        app.dispatch(Action::CancelDrag);
        assert_eq!(handle_key_event(&app, key(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn test_help_mode_closes() {
        let mut app = app();
        app.dispatch(Action::OpenHelp);
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('?'))), Action::CloseHelp);
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('L'))), Action::None);
    }
}
