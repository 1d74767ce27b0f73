//! Notifications emitted by the reconciler.

use serde::Serialize;

use super::item::{Item, Side};

/// Outbound notification for the host.
///
/// Drained from the reconciler with `ListReconciler::drain_events`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MoverEvent {
    /// A single item was moved into the other panel.
    ///
    /// `side` names the panel it landed in; `target` is that panel's
    /// contents once the move settled.
    ItemMoved {
        item: Item,
        side: Side,
        target: Vec<Item>,
    },
    /// A bulk move emptied one panel into the other.
    AllMoved { side: Side, count: usize },
    /// An item changed position within its own panel.
    Reordered {
        item: Item,
        side: Side,
        from: usize,
        to: usize,
    },
    /// View hook: the panel on `side` should scroll to its last row.
    ScrollToEnd { side: Side },
}

impl MoverEvent {
    /// Whether the host should see this event (as opposed to a view hook)
    pub fn is_notification(&self) -> bool {
        !matches!(self, MoverEvent::ScrollToEnd { .. })
    }

    /// One-line description for the status bar and log
    pub fn summary(&self) -> String {
        match self {
            MoverEvent::ItemMoved { item, side, .. } => {
                format!("moved '{}' to {}", item.label(), side.collection_name())
            }
            MoverEvent::AllMoved { side, count } => {
                format!("moved {} item(s) to {}", count, side.collection_name())
            }
            MoverEvent::Reordered { item, from, to, .. } => {
                format!("'{}' {} -> {}", item.label(), from + 1, to + 1)
            }
            MoverEvent::ScrollToEnd { side } => {
                format!("scroll {} to end", side.collection_name())
            }
        }
    }
}
