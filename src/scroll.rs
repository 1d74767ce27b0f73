//! Per-panel scroll state.
//!
//! Each panel shows a window of its collection. The window follows the
//! cursor and jumps to the end when the reconciler asks for it after
//! appending an item. Scrolling with the mouse wheel detaches the window from
//! the cursor until [`PanelScroll::follow_cursor`] is called again.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut scroll = PanelScroll::default();
//!
//! // In render, once the panel height is known:
//! scroll.set_viewport(rows);
//! scroll.ensure_visible(cursor, len);
//! let visible = &items[scroll.offset()..];
//! ```

/// Scroll offset of one panel.
#[derive(Debug, Clone, Default)]
pub struct PanelScroll {
    /// First visible row
    offset: usize,
    /// Number of rows the panel can show (from the last render)
    viewport: usize,
    /// Jump to the last row on the next render
    pending_end: bool,
    /// Wheel-scrolled away from the cursor
    detached: bool,
}

impl PanelScroll {
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Record how many rows the panel showed in the last render.
    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport = rows;
    }

    /// Scroll by `delta` rows, clamped to the collection length.
    pub fn scroll_by(&mut self, delta: i32, len: usize) {
        let max = self.max_offset(len);
        let next = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.offset + delta as usize
        };
        self.offset = next.min(max);
        if delta != 0 {
            self.detached = true;
        }
    }

    /// Keep the cursor in view again after a wheel scroll.
    pub fn follow_cursor(&mut self) {
        self.detached = false;
    }

    /// Request a jump to the last row; applied by [`reconcile`](Self::reconcile).
    pub fn scroll_to_end(&mut self) {
        self.pending_end = true;
    }

    /// Bring `index` into view.
    pub fn ensure_visible(&mut self, index: usize, len: usize) {
        if self.viewport == 0 {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.viewport {
            self.offset = index + 1 - self.viewport;
        }
        self.offset = self.offset.min(self.max_offset(len));
    }

    /// Settle the offset against the current collection before drawing.
    ///
    /// A pending jump to the end wins over following the cursor. A detached
    /// window only gets clamped.
    pub fn reconcile(&mut self, cursor: Option<usize>, len: usize) {
        if self.pending_end {
            self.pending_end = false;
            self.offset = self.max_offset(len);
            return;
        }
        match cursor {
            Some(index) if !self.detached => self.ensure_visible(index, len),
            _ => self.offset = self.offset.min(self.max_offset(len)),
        }
    }

    fn max_offset(&self, len: usize) -> usize {
        len.saturating_sub(self.viewport.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll(viewport: usize) -> PanelScroll {
        let mut s = PanelScroll::default();
        s.set_viewport(viewport);
        s
    }

    #[test]
    fn test_ensure_visible_follows_cursor() {
        let mut s = scroll(3);
        s.ensure_visible(5, 10);
        assert_eq!(s.offset(), 3);
        s.ensure_visible(1, 10);
        assert_eq!(s.offset(), 1);
        s.ensure_visible(2, 10);
        assert_eq!(s.offset(), 1);
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut s = scroll(4);
        s.scroll_by(-3, 10);
        assert_eq!(s.offset(), 0);
        s.scroll_by(100, 10);
        assert_eq!(s.offset(), 6);
        s.scroll_by(3, 2);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_scroll_to_end_wins_over_cursor() {
        let mut s = scroll(3);
        s.scroll_to_end();
        s.reconcile(Some(0), 8);
        assert_eq!(s.offset(), 5);
        // one-shot
        s.reconcile(Some(0), 8);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_wheel_scroll_detaches_until_follow() {
        let mut s = scroll(3);
        s.reconcile(Some(0), 10);
        s.scroll_by(4, 10);
        s.reconcile(Some(0), 10);
        assert_eq!(s.offset(), 4);

        s.follow_cursor();
        s.reconcile(Some(0), 10);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_reconcile_after_shrink() {
        let mut s = scroll(3);
        s.scroll_by(7, 10);
        s.reconcile(None, 4);
        assert_eq!(s.offset(), 1);
    }
}
