//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `panel` - One item list with its cursor, scroll window and drop marker
//! - `controls` - The four move buttons between the panels
//! - `status_bar` - Last notification and hotkey hints
//! - `help_popup` - Help overlay with keybindings

mod controls;
mod help_popup;
mod panel;
mod status_bar;

pub use controls::render_controls;
pub use help_popup::render_help_popup;
pub use panel::render_panel;
pub use status_bar::render_status_bar;
