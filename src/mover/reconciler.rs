//! List reconciler: the state machine behind the two panels.
//!
//! Owns the `unselected` (left) and `selected` (right) collections and keeps
//! them consistent under single moves, bulk moves and drag reordering:
//!
//! - a value lives in at most one collection
//! - at most one item carries `is_selected` once pending steps have settled
//! - every completed single-item move produces exactly one `ItemMoved`
//!
//! Moves finish in two phases. The synchronous phase reshapes the
//! collections; the deferred phase (selecting the moved item in its new panel
//! and notifying the host) runs in [`ListReconciler::settle`], which the event
//! loop calls once the view has committed the frame showing the insertion.

use std::collections::VecDeque;

use crate::log;

use super::event::MoverEvent;
use super::item::{DropLocation, Item, Side};

/// Construction options for a [`ListReconciler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoverOptions {
    /// Insert position for moves without an explicit index
    pub drop_location: DropLocation,
    /// Remove values from `unselected` that are already in `selected`
    pub normalize: bool,
}

impl Default for MoverOptions {
    fn default() -> Self {
        Self {
            drop_location: DropLocation::Top,
            normalize: true,
        }
    }
}

/// Work queued for the next view commit.
#[derive(Debug, Clone)]
enum Deferred {
    /// Select a moved item in its new panel and notify the host.
    CompleteMove { item: Item, target: Side },
}

#[derive(Debug)]
pub struct ListReconciler {
    unselected: Vec<Item>,
    selected: Vec<Item>,
    options: MoverOptions,
    pending: VecDeque<Deferred>,
    events: Vec<MoverEvent>,
}

impl ListReconciler {
    pub fn new(unselected: Vec<Item>, selected: Vec<Item>, options: MoverOptions) -> Self {
        let mut reconciler = Self {
            unselected,
            selected,
            options,
            pending: VecDeque::new(),
            events: vec![],
        };

        if options.normalize {
            let removed = reconciler.normalize_lists();
            if removed > 0 {
                log::log(&format!("Normalization removed {} duplicate item(s)", removed));
            }
        }
        reconciler.enforce_single_cursor();

        reconciler
    }

    pub fn unselected(&self) -> &[Item] {
        &self.unselected
    }

    pub fn selected(&self) -> &[Item] {
        &self.selected
    }

    /// Collection on the given side
    pub fn items(&self, side: Side) -> &[Item] {
        match side {
            Side::Left => &self.unselected,
            Side::Right => &self.selected,
        }
    }

    fn items_mut(&mut self, side: Side) -> &mut Vec<Item> {
        match side {
            Side::Left => &mut self.unselected,
            Side::Right => &mut self.selected,
        }
    }

    /// Position of `value` within the collection on `side`
    pub fn position(&self, side: Side, value: &str) -> Option<usize> {
        self.items(side).iter().position(|item| item.value == value)
    }

    /// Index of the selected item on `side`, if the cursor is there
    pub fn cursor_index(&self, side: Side) -> Option<usize> {
        self.items(side).iter().position(|item| item.is_selected)
    }

    /// The current cursor: which panel holds it and the item itself.
    ///
    /// Derived from the `is_selected` flags; the left panel is checked first.
    pub fn selection(&self) -> Option<(Side, &Item)> {
        [Side::Left, Side::Right].into_iter().find_map(|side| {
            self.items(side)
                .iter()
                .find(|item| item.is_selected)
                .map(|item| (side, item))
        })
    }

    /// Whether deferred steps are waiting for [`settle`](Self::settle)
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<MoverEvent> {
        std::mem::take(&mut self.events)
    }

    /// Hand the collections back to the host as `(unselected, selected)`.
    pub fn into_parts(self) -> (Vec<Item>, Vec<Item>) {
        (self.unselected, self.selected)
    }

    // === Selection cursor ===

    /// Select `value` in the collection on `side`.
    ///
    /// Without a value the first item of that collection is selected. The
    /// flag is cleared in both collections first, so there is only ever one
    /// cursor. Returns `false` when there was nothing to select.
    pub fn select_item(&mut self, side: Side, value: Option<&str>) -> bool {
        let index = match value {
            Some(value) => self.position(side, value),
            None if self.items(side).is_empty() => None,
            None => Some(0),
        };

        match index {
            Some(index) => {
                self.select_at(side, index);
                true
            }
            None => false,
        }
    }

    /// Move the cursor one row down within `side` (clamped at the end).
    pub fn select_next(&mut self, side: Side) -> bool {
        let len = self.items(side).len();
        if len == 0 {
            return false;
        }
        let next = self
            .cursor_index(side)
            .map(|i| (i + 1).min(len - 1))
            .unwrap_or(0);
        self.select_at(side, next);
        true
    }

    /// Move the cursor one row up within `side` (clamped at the start).
    pub fn select_prev(&mut self, side: Side) -> bool {
        if self.items(side).is_empty() {
            return false;
        }
        let prev = self
            .cursor_index(side)
            .map(|i| i.saturating_sub(1))
            .unwrap_or(0);
        self.select_at(side, prev);
        true
    }

    fn select_at(&mut self, side: Side, index: usize) {
        self.clear_selection();
        if let Some(item) = self.items_mut(side).get_mut(index) {
            item.is_selected = true;
        }
    }

    fn clear_selection(&mut self) {
        for item in self.unselected.iter_mut().chain(self.selected.iter_mut()) {
            item.is_selected = false;
        }
    }

    // === Single-item moves ===

    /// Move an item from `unselected` into `selected`.
    ///
    /// See [`move_item`](Self::move_item).
    pub fn move_right(&mut self, value: Option<&str>, index: Option<usize>) -> bool {
        self.move_item(Side::Left, value, index)
    }

    /// Move an item from `selected` back into `unselected`.
    pub fn move_left(&mut self, value: Option<&str>, index: Option<usize>) -> bool {
        self.move_item(Side::Right, value, index)
    }

    /// Move one item out of the collection on `from` into the other one.
    ///
    /// The item is `value` if given, otherwise the selected item of the
    /// source. The source cursor advances to the item that took its place.
    /// With an explicit `index` the item is inserted there (clamped);
    /// otherwise the configured drop location decides. Selecting the item in
    /// its new panel and the `ItemMoved` notification happen in
    /// [`settle`](Self::settle).
    pub fn move_item(&mut self, from: Side, value: Option<&str>, index: Option<usize>) -> bool {
        let to = from.opposite();

        let found = match value {
            Some(value) => self.position(from, value),
            None => self.cursor_index(from),
        };
        let Some(idx) = found else {
            return false;
        };

        let mut item = self.items_mut(from).remove(idx);
        item.is_selected = false;

        let remaining = self.items(from).len();
        if remaining > 0 {
            self.select_at(from, idx.min(remaining - 1));
        }

        let drop_location = self.options.drop_location;
        let dest = self.items_mut(to);
        match index {
            Some(index) => {
                let at = index.min(dest.len());
                dest.insert(at, item.clone());
            }
            None if drop_location == DropLocation::Top => dest.insert(0, item.clone()),
            None => {
                dest.push(item.clone());
                self.events.push(MoverEvent::ScrollToEnd { side: to });
            }
        }

        log::log(&format!(
            "Moved '{}' from {} to {}",
            item.value,
            from.collection_name(),
            to.collection_name()
        ));
        self.pending.push_back(Deferred::CompleteMove { item, target: to });

        true
    }

    // === Bulk moves ===

    pub fn move_all_right(&mut self) -> usize {
        self.move_all(Side::Left)
    }

    pub fn move_all_left(&mut self) -> usize {
        self.move_all(Side::Right)
    }

    /// Move every item from `from` to the other collection.
    ///
    /// The source is walked tail to head and each item is appended to the
    /// destination, so one bulk move reverses the block and a second one in
    /// the opposite direction restores the original order. Emits a single
    /// `AllMoved` when anything moved. Returns the number of items moved.
    pub fn move_all(&mut self, from: Side) -> usize {
        let to = from.opposite();
        let source = std::mem::take(self.items_mut(from));
        let count = source.len();
        if count == 0 {
            return 0;
        }

        self.items_mut(to).extend(source.into_iter().rev());
        self.events.push(MoverEvent::AllMoved { side: to, count });
        log::log(&format!(
            "Moved all {} item(s) to {}",
            count,
            to.collection_name()
        ));

        count
    }

    // === Reordering ===

    /// Move `value` to `new_index` within its own collection and select it.
    ///
    /// The item is found by value; `old_index` is only what the gesture
    /// reported and loses to the resolved position when they disagree.
    pub fn reorder(&mut self, side: Side, value: &str, old_index: usize, new_index: usize) -> bool {
        let Some(from) = self.position(side, value) else {
            return false;
        };
        if from != old_index {
            log::log(&format!(
                "Reorder of '{}' reported index {} but item is at {}",
                value, old_index, from
            ));
        }

        let items = self.items_mut(side);
        let item = items.remove(from);
        let to = new_index.min(items.len());
        items.insert(to, item);
        self.select_at(side, to);

        if to != from {
            let item = self.items(side)[to].clone();
            self.events.push(MoverEvent::Reordered {
                item,
                side,
                from,
                to,
            });
        }

        true
    }

    // === Deferred phase ===

    /// Run the steps queued by moves, in order. Call after the view commits.
    ///
    /// Each moved item is looked up again by value: if a later operation
    /// already took it out of its target panel the selection is skipped, but
    /// the notification for the move that did happen is still sent. Returns
    /// the number of steps run.
    pub fn settle(&mut self) -> usize {
        let mut settled = 0;

        while let Some(step) = self.pending.pop_front() {
            match step {
                Deferred::CompleteMove { item, target } => {
                    let item = match self.position(target, &item.value) {
                        Some(pos) => {
                            self.select_at(target, pos);
                            self.items(target)[pos].clone()
                        }
                        None => {
                            log::log(&format!(
                                "'{}' left {} before the move settled",
                                item.value,
                                target.collection_name()
                            ));
                            item
                        }
                    };
                    let snapshot = self.items(target).to_vec();
                    self.events.push(MoverEvent::ItemMoved {
                        item,
                        side: target,
                        target: snapshot,
                    });
                }
            }
            settled += 1;
        }

        settled
    }

    // === Construction helpers ===

    /// Drop every `unselected` item whose value is also in `selected`.
    fn normalize_lists(&mut self) -> usize {
        if self.selected.is_empty() || self.unselected.is_empty() {
            return 0;
        }
        let before = self.unselected.len();
        let selected = &self.selected;
        self.unselected
            .retain(|item| !selected.iter().any(|s| s.value == item.value));
        before - self.unselected.len()
    }

    /// Keep only the first `is_selected` flag found (left panel first).
    fn enforce_single_cursor(&mut self) {
        let mut seen = false;
        for item in self.unselected.iter_mut().chain(self.selected.iter_mut()) {
            if item.is_selected {
                if seen {
                    item.is_selected = false;
                }
                seen = true;
            }
        }
    }

    // === Drag facts ===

    /// Complete a drop of `value` from `source` into the other panel.
    ///
    /// Moves through [`move_item`](Self::move_item) at `target_index`, then
    /// marks the item selected straight away so it is highlighted in the
    /// frame drawn before [`settle`](Self::settle).
    pub fn drop_item(&mut self, source: Side, value: &str, target_index: usize) -> bool {
        if !self.move_item(source, Some(value), Some(target_index)) {
            return false;
        }

        let target = source.opposite();
        if let Some(pos) = self.position(target, value) {
            self.select_at(target, pos);
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(value: &str) -> Item {
        Item::new(value, value.to_uppercase())
    }

    fn values(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.value.as_str()).collect()
    }

    fn selected_count(r: &ListReconciler) -> usize {
        r.unselected()
            .iter()
            .chain(r.selected())
            .filter(|i| i.is_selected)
            .count()
    }

    #[test]
    fn test_move_right_resolves_cursor_and_selects_next() {
        let mut r = ListReconciler::new(
            vec![item("a"), item("b").selected()],
            vec![],
            MoverOptions::default(),
        );

        assert!(r.move_right(None, None));

        assert_eq!(values(r.unselected()), vec!["a"]);
        assert!(r.unselected()[0].is_selected);
        assert_eq!(values(r.selected()), vec!["b"]);
        assert!(!r.selected()[0].is_selected);
        assert!(r.drain_events().is_empty());

        assert_eq!(r.settle(), 1);

        assert!(r.selected()[0].is_selected);
        assert!(!r.unselected()[0].is_selected);
        let events = r.drain_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            MoverEvent::ItemMoved { item, side, target } => {
                assert_eq!(item.value, "b");
                assert!(item.is_selected);
                assert_eq!(*side, Side::Right);
                assert_eq!(values(target), vec!["b"]);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_move_without_cursor_is_noop() {
        let mut r = ListReconciler::new(vec![item("a")], vec![], MoverOptions::default());
        assert!(!r.move_right(None, None));
        assert!(!r.move_left(None, None));
        assert!(!r.move_right(Some("missing"), None));
        assert_eq!(values(r.unselected()), vec!["a"]);
        assert!(!r.has_pending());
        r.settle();
        assert!(r.drain_events().is_empty());
    }

    #[test]
    fn test_move_top_inserts_at_front() {
        let mut r = ListReconciler::new(
            vec![item("a").selected()],
            vec![item("x"), item("y")],
            MoverOptions::default(),
        );
        r.move_right(None, None);
        assert_eq!(values(r.selected()), vec!["a", "x", "y"]);
        assert!(r.drain_events().is_empty());
    }

    #[test]
    fn test_move_bottom_appends_and_requests_scroll() {
        let options = MoverOptions {
            drop_location: DropLocation::Bottom,
            ..Default::default()
        };
        let mut r = ListReconciler::new(vec![item("a").selected()], vec![item("x")], options);
        r.move_right(None, None);
        assert_eq!(values(r.selected()), vec!["x", "a"]);
        assert_eq!(
            r.drain_events(),
            vec![MoverEvent::ScrollToEnd { side: Side::Right }]
        );
    }

    #[test]
    fn test_move_explicit_index_is_clamped() {
        let mut r = ListReconciler::new(
            vec![item("a"), item("b")],
            vec![item("x")],
            MoverOptions::default(),
        );
        r.move_right(Some("a"), Some(1));
        r.move_right(Some("b"), Some(99));
        assert_eq!(values(r.selected()), vec!["x", "a", "b"]);
    }

    #[test]
    fn test_move_last_item_selects_new_last() {
        let mut r = ListReconciler::new(
            vec![item("a"), item("b"), item("c").selected()],
            vec![],
            MoverOptions::default(),
        );
        r.move_right(None, None);
        assert_eq!(r.cursor_index(Side::Left), Some(1));
        assert_eq!(
            r.selection().map(|(s, i)| (s, i.value.clone())),
            Some((Side::Left, "b".to_string()))
        );
    }

    #[test]
    fn test_move_left_mirrors_move_right() {
        let mut r = ListReconciler::new(
            vec![item("a")],
            vec![item("x").selected(), item("y")],
            MoverOptions::default(),
        );
        assert!(r.move_left(None, None));
        assert_eq!(values(r.unselected()), vec!["x", "a"]);
        assert_eq!(values(r.selected()), vec!["y"]);
        r.settle();
        match r.drain_events().as_slice() {
            [MoverEvent::ItemMoved { item, side, .. }] => {
                assert_eq!(item.value, "x");
                assert_eq!(*side, Side::Left);
            }
            other => panic!("unexpected events {:?}", other),
        }
        assert_eq!(r.selection().map(|(s, _)| s), Some(Side::Left));
    }

    #[test]
    fn test_rapid_moves_notify_once_each() {
        let mut r = ListReconciler::new(
            vec![item("a").selected(), item("b"), item("c")],
            vec![],
            MoverOptions::default(),
        );
        r.move_right(None, None);
        r.move_right(None, None);
        r.move_right(None, None);
        assert!(!r.move_right(None, None));

        assert_eq!(r.settle(), 3);
        let moved: Vec<_> = r
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                MoverEvent::ItemMoved { item, .. } => Some(item.value),
                _ => None,
            })
            .collect();
        assert_eq!(moved, vec!["a", "b", "c"]);
        assert_eq!(values(r.selected()), vec!["c", "b", "a"]);
        // last settled move owns the cursor
        assert_eq!(r.selection().map(|(_, i)| i.value.as_str()), Some("c"));
        assert_eq!(selected_count(&r), 1);
    }

    #[test]
    fn test_settle_after_item_moved_back() {
        let mut r = ListReconciler::new(vec![item("a")], vec![], MoverOptions::default());
        r.move_right(Some("a"), None);
        r.move_left(Some("a"), None);
        assert_eq!(r.settle(), 2);

        let events = r.drain_events();
        assert_eq!(events.len(), 2);
        // first move's item is no longer on the right, second one lands left
        assert!(matches!(
            &events[0],
            MoverEvent::ItemMoved { side: Side::Right, target, .. } if target.is_empty()
        ));
        assert!(matches!(&events[1], MoverEvent::ItemMoved { side: Side::Left, .. }));
        assert_eq!(r.selection().map(|(s, i)| (s, i.value.as_str())), Some((Side::Left, "a")));
    }

    #[test]
    fn test_select_item_defaults_and_global_clear() {
        let mut r = ListReconciler::new(
            vec![item("a"), item("b")],
            vec![item("x").selected()],
            MoverOptions::default(),
        );
        assert!(r.select_item(Side::Left, None));
        assert!(r.unselected()[0].is_selected);
        assert!(!r.selected()[0].is_selected);

        assert!(r.select_item(Side::Left, Some("b")));
        assert_eq!(r.cursor_index(Side::Left), Some(1));
        assert_eq!(selected_count(&r), 1);

        // value from the wrong panel is ignored
        assert!(!r.select_item(Side::Right, Some("a")));
        assert_eq!(r.cursor_index(Side::Left), Some(1));
    }

    #[test]
    fn test_select_item_empty_collection_is_noop() {
        let mut r =
            ListReconciler::new(vec![item("a").selected()], vec![], MoverOptions::default());
        assert!(!r.select_item(Side::Right, None));
        assert!(r.unselected()[0].is_selected);
    }

    #[test]
    fn test_select_next_prev_clamp() {
        let mut r =
            ListReconciler::new(vec![item("a"), item("b")], vec![], MoverOptions::default());
        assert!(r.select_next(Side::Left));
        assert_eq!(r.cursor_index(Side::Left), Some(0));
        r.select_next(Side::Left);
        r.select_next(Side::Left);
        assert_eq!(r.cursor_index(Side::Left), Some(1));
        r.select_prev(Side::Left);
        r.select_prev(Side::Left);
        assert_eq!(r.cursor_index(Side::Left), Some(0));
        assert!(!r.select_next(Side::Right));
    }

    #[test]
    fn test_move_all_reverses_then_restores() {
        let mut r = ListReconciler::new(
            vec![item("a"), item("b"), item("c")],
            vec![],
            MoverOptions::default(),
        );
        assert_eq!(r.move_all_right(), 3);
        assert!(r.unselected().is_empty());
        assert_eq!(values(r.selected()), vec!["c", "b", "a"]);

        assert_eq!(r.move_all_left(), 3);
        assert_eq!(values(r.unselected()), vec!["a", "b", "c"]);
        assert!(r.selected().is_empty());

        assert_eq!(
            r.drain_events(),
            vec![
                MoverEvent::AllMoved { side: Side::Right, count: 3 },
                MoverEvent::AllMoved { side: Side::Left, count: 3 },
            ]
        );
    }

    #[test]
    fn test_move_all_appends_after_existing_and_keeps_cursor() {
        let mut r = ListReconciler::new(
            vec![item("a"), item("b").selected()],
            vec![item("x")],
            MoverOptions::default(),
        );
        r.move_all_right();
        assert_eq!(values(r.selected()), vec!["x", "b", "a"]);
        assert_eq!(r.selection().map(|(s, i)| (s, i.value.as_str())), Some((Side::Right, "b")));
    }

    #[test]
    fn test_move_all_empty_is_silent() {
        let mut r = ListReconciler::new(vec![], vec![item("x")], MoverOptions::default());
        assert_eq!(r.move_all_right(), 0);
        assert!(r.drain_events().is_empty());
    }

    #[test]
    fn test_normalization_removes_duplicates_from_unselected() {
        let r = ListReconciler::new(
            vec![item("1"), item("2")],
            vec![item("2")],
            MoverOptions::default(),
        );
        assert_eq!(values(r.unselected()), vec!["1"]);
        assert_eq!(values(r.selected()), vec!["2"]);
    }

    #[test]
    fn test_normalization_disabled_keeps_duplicates() {
        let options = MoverOptions {
            normalize: false,
            ..Default::default()
        };
        let r = ListReconciler::new(vec![item("1"), item("2")], vec![item("2")], options);
        assert_eq!(values(r.unselected()), vec!["1", "2"]);
    }

    #[test]
    fn test_construction_keeps_first_cursor() {
        let r = ListReconciler::new(
            vec![item("a"), item("b").selected()],
            vec![item("x").selected()],
            MoverOptions::default(),
        );
        assert_eq!(selected_count(&r), 1);
        assert_eq!(r.selection().map(|(_, i)| i.value.as_str()), Some("b"));
    }

    #[test]
    fn test_reorder_within_panel() {
        let mut r = ListReconciler::new(
            vec![item("v1"), item("v2"), item("v3")],
            vec![],
            MoverOptions::default(),
        );
        assert!(r.reorder(Side::Left, "v1", 0, 2));
        assert_eq!(values(r.unselected()), vec!["v2", "v3", "v1"]);
        assert!(r.unselected()[2].is_selected);
        assert!(matches!(
            r.drain_events().as_slice(),
            [MoverEvent::Reordered { from: 0, to: 2, side: Side::Left, .. }]
        ));
    }

    #[test]
    fn test_reorder_trusts_identity_over_reported_index() {
        let mut r = ListReconciler::new(
            vec![item("v1"), item("v2"), item("v3")],
            vec![],
            MoverOptions::default(),
        );
        // gesture claims v3 was at 0
        assert!(r.reorder(Side::Left, "v3", 0, 0));
        assert_eq!(values(r.unselected()), vec!["v3", "v1", "v2"]);
    }

    #[test]
    fn test_reorder_miss_is_noop() {
        let mut r = ListReconciler::new(vec![item("v1")], vec![item("x")], MoverOptions::default());
        assert!(!r.reorder(Side::Left, "x", 0, 0));
        assert!(!r.reorder(Side::Right, "nope", 0, 1));
        assert!(r.drain_events().is_empty());
    }

    #[test]
    fn test_drop_into_other_panel() {
        let mut r = ListReconciler::new(
            vec![item("v1"), item("v2")],
            vec![item("v5")],
            MoverOptions::default(),
        );
        assert!(r.drop_item(Side::Left, "v2", 0));
        assert_eq!(values(r.selected()), vec!["v2", "v5"]);
        assert_eq!(values(r.unselected()), vec!["v1"]);
        assert!(r.selected()[0].is_selected);
        assert_eq!(selected_count(&r), 1);

        r.settle();
        assert_eq!(selected_count(&r), 1);
        assert!(r.selected()[0].is_selected);
    }

    #[test]
    fn test_drop_unknown_identity_is_noop() {
        let mut r = ListReconciler::new(vec![item("v1")], vec![], MoverOptions::default());
        assert!(!r.drop_item(Side::Left, "v9", 0));
        assert!(!r.drop_item(Side::Right, "v1", 0));
        assert_eq!(values(r.unselected()), vec!["v1"]);
        assert!(!r.has_pending());
    }

    #[test]
    fn test_into_parts() {
        let r = ListReconciler::new(vec![item("a")], vec![item("b")], MoverOptions::default());
        let (left, right) = r.into_parts();
        assert_eq!(values(&left), vec!["a"]);
        assert_eq!(values(&right), vec!["b"]);
    }
}
