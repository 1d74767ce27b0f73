//! Component-level mouse interactivity system.
//!
//! This module provides a registry for handling mouse interactions at the
//! component level. Components register their interactive regions during
//! render, and mouse events are routed to the appropriate component.
//!
//! Besides clickable and scrollable regions, panels register a drop zone so
//! the drag recognizer can turn a pointer position into an insertion index.
//!
//! # Example
//!
//! ```ignore
//! // During render, register an interactive region:
//! registry.register(InteractiveRegion::clickable(
//!     "move_all_right",
//!     ClickRegion::new(x, y, width, 1),
//!     Action::MoveAllRight,
//! ));
//!
//! // Mouse events are dispatched to matching regions
//! ```

use crate::app::ClickRegion;
use crate::events::{Action, DropTarget};
use crate::mover::Side;

/// An interactive region that can respond to mouse events.
///
/// Components create these during render to define clickable/scrollable areas.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for this region (for debugging/logging)
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    /// Create a new scrollable region
    pub fn scrollable(
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// The rows of one panel as drawn in the last frame.
#[derive(Debug, Clone, Copy)]
pub struct DropZone {
    pub side: Side,
    /// Area holding the item rows (inside the border)
    pub bounds: ClickRegion,
    /// Index of the item drawn on the first row
    pub offset: usize,
    /// Number of items in the panel
    pub len: usize,
}

impl DropZone {
    /// Insertion index for a pointer at row `y`, clamped to `0..=len`.
    pub fn index_at(&self, y: u16) -> usize {
        let row = y.saturating_sub(self.bounds.y) as usize;
        (self.offset + row).min(self.len)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
///
/// Components register their interactive regions here during render,
/// and the mouse handler queries this registry to dispatch events.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
    drop_zones: Vec<DropZone>,
}

impl InteractionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            drop_zones: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
        self.drop_zones.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register a simple clickable region
    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    /// Register a region for one item row of a panel
    pub fn register_item(&mut self, side: Side, index: usize, bounds: ClickRegion) {
        self.register(InteractiveRegion::clickable(
            "panel_item",
            bounds,
            Action::PressItem { side, index },
        ));
    }

    /// Register a panel as a drop zone and as a scrollable region
    pub fn register_drop_zone(&mut self, zone: DropZone) {
        self.register(InteractiveRegion::scrollable(
            "panel",
            zone.bounds,
            Action::ScrollPanel {
                side: zone.side,
                delta: -1,
            },
            Action::ScrollPanel {
                side: zone.side,
                delta: 1,
            },
        ));
        self.drop_zones.push(zone);
    }

    /// Find the action to dispatch for a click at (x, y)
    ///
    /// Returns the action from the highest-priority region that contains the point
    /// and has a click handler.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.find(x, y, |r| r.on_click.as_ref())
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.find(x, y, |r| r.on_scroll_up.as_ref())
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.find(x, y, |r| r.on_scroll_down.as_ref())
    }

    /// Resolve the drop target under (x, y), if any
    pub fn drop_target(&self, x: u16, y: u16) -> Option<DropTarget> {
        self.drop_zones
            .iter()
            .find(|zone| zone.bounds.contains(x, y))
            .map(|zone| DropTarget {
                side: zone.side,
                index: zone.index_at(y),
            })
    }

    fn find<F>(&self, x: u16, y: u16, handler: F) -> Action
    where
        F: Fn(&InteractiveRegion) -> Option<&Action>,
    {
        let mut candidates: Vec<_> = self
            .regions
            .iter()
            .filter(|r| r.contains(x, y) && handler(r).is_some())
            .collect();

        candidates.sort_by(|a, b| b.priority.cmp(&a.priority));

        candidates
            .first()
            .and_then(|r| handler(r).cloned())
            .unwrap_or(Action::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region =
            InteractiveRegion::clickable("test", ClickRegion::new(10, 10, 20, 10), Action::None);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        registry.register(
            InteractiveRegion::clickable(
                "background",
                ClickRegion::new(0, 0, 100, 100),
                Action::MoveAllRight,
            )
            .with_priority(0),
        );

        registry.register(
            InteractiveRegion::clickable(
                "popup",
                ClickRegion::new(20, 20, 60, 60),
                Action::CloseHelp,
            )
            .with_priority(10),
        );

        assert_eq!(registry.handle_click(50, 50), Action::CloseHelp);
        assert_eq!(registry.handle_click(5, 5), Action::MoveAllRight);
        assert_eq!(registry.handle_scroll_up(5, 5), Action::None);
    }

    #[test]
    fn test_drop_target_uses_offset_and_clamps() {
        let mut registry = InteractionRegistry::new();
        registry.register_drop_zone(DropZone {
            side: Side::Right,
            bounds: ClickRegion::new(40, 2, 20, 10),
            offset: 3,
            len: 5,
        });

        assert_eq!(
            registry.drop_target(45, 3),
            Some(DropTarget { side: Side::Right, index: 4 })
        );
        // below the last item means append
        assert_eq!(
            registry.drop_target(45, 10),
            Some(DropTarget { side: Side::Right, index: 5 })
        );
        assert_eq!(registry.drop_target(10, 3), None);
        assert_eq!(
            registry.handle_scroll_down(45, 3),
            Action::ScrollPanel { side: Side::Right, delta: 1 }
        );
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut registry = InteractionRegistry::new();
        registry.register_item(Side::Left, 0, ClickRegion::new(0, 0, 10, 1));
        registry.clear();
        assert_eq!(registry.handle_click(1, 0), Action::None);
    }
}
