//! Drag adapter.
//!
//! Gesture capture lives outside the reconciler. Whatever recognizes a drag
//! reports the finished gesture as a [`DragFact`], and the adapter turns it
//! into a reorder or a cross-panel move.

use serde::{Deserialize, Serialize};

use crate::log;

use super::item::Side;
use super::reconciler::ListReconciler;

/// A completed drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragFact {
    /// Item dragged to a new position inside its own panel
    Reorder {
        value: String,
        side: Side,
        old_index: usize,
        new_index: usize,
    },
    /// Item dropped into the other panel at `target_index`
    Drop {
        value: String,
        source: Side,
        target_index: usize,
    },
}

impl DragFact {
    /// Build the fact for an item released at `(target_side, target_index)`.
    ///
    /// Returns `None` when the item was released where it started.
    pub fn from_release(
        value: impl Into<String>,
        source: Side,
        old_index: usize,
        target_side: Side,
        target_index: usize,
    ) -> Option<Self> {
        let value = value.into();
        if target_side == source {
            if target_index == old_index {
                return None;
            }
            Some(DragFact::Reorder {
                value,
                side: source,
                old_index,
                new_index: target_index,
            })
        } else {
            Some(DragFact::Drop {
                value,
                source,
                target_index,
            })
        }
    }

    pub fn value(&self) -> &str {
        match self {
            DragFact::Reorder { value, .. } | DragFact::Drop { value, .. } => value,
        }
    }
}

impl ListReconciler {
    /// Apply a drag fact. Unknown identities leave the state untouched.
    pub fn apply_drag(&mut self, fact: &DragFact) -> bool {
        let applied = match fact {
            DragFact::Reorder {
                value,
                side,
                old_index,
                new_index,
            } => self.reorder(*side, value, *old_index, *new_index),
            DragFact::Drop {
                value,
                source,
                target_index,
            } => self.drop_item(*source, value, *target_index),
        };

        if !applied {
            log::log(&format!("Ignored drag of unknown item '{}'", fact.value()));
        }
        applied
    }
}
