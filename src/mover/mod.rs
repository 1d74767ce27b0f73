//! Dual-list mover core.
//!
//! Everything in here is independent of the terminal: two ordered
//! collections, a single selection cursor, move and reorder operations, a
//! drag-fact adapter and the notifications the host observes.

mod drag;
mod event;
mod item;
mod reconciler;

pub use drag::DragFact;
pub use event::MoverEvent;
pub use item::{DropLocation, Item, Side};
pub use reconciler::{ListReconciler, MoverOptions};
