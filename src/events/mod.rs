//! Event handling module for keyboard and mouse events.
//!
//! Terminal events are translated into `Action`s here; the `App` applies
//! them. The mouse handler doubles as the drag gesture recognizer: it turns
//! press, drag and release into `DragFact`s for the reconciler.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::{Action, DropTarget};
pub use handler::EventHandler;
