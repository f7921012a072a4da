//! Dirty-region FIFO.
//!
//! At most one entry per widget: a second invalidation merges into the
//! existing entry by rectangle union, keeping the entry's queue position
//! so a widget cannot be starved by repeated invalidation.

use alloc::collections::VecDeque;

use pane_abi::Rect;

use crate::widget::WidgetId;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DirtyRegion {
    pub widget: WidgetId,
    pub rect: Rect,
}

#[derive(Default)]
pub struct RedrawQueue {
    entries: VecDeque<DirtyRegion>,
}

impl RedrawQueue {
    pub const fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Queue `rect` for `widget`, merging with any entry already queued.
    ///
    /// A rect already covered by the queued entry changes nothing.
    pub fn push(&mut self, widget: WidgetId, rect: Rect) {
        if !rect.is_valid() {
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.widget == widget) {
            if !entry.rect.contains(&rect) {
                entry.rect = entry.rect.union(&rect);
            }
            return;
        }
        self.entries.push_back(DirtyRegion { widget, rect });
    }

    /// Take the oldest entry.
    pub fn pop(&mut self) -> Option<DirtyRegion> {
        self.entries.pop_front()
    }

    /// Drop the entry for `widget`, if any. Returns whether one existed.
    pub fn remove(&mut self, widget: WidgetId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.widget != widget);
        self.entries.len() != before
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_queued(&self, widget: WidgetId) -> bool {
        self.entries.iter().any(|e| e.widget == widget)
    }

    pub fn queued_rect(&self, widget: WidgetId) -> Option<Rect> {
        self.entries
            .iter()
            .find(|e| e.widget == widget)
            .map(|e| e.rect)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wid(n: u64) -> WidgetId {
        WidgetId(n)
    }

    #[test]
    fn fifo_order_is_first_invalidation_order() {
        let mut q = RedrawQueue::new();
        q.push(wid(1), Rect::new(0, 0, 9, 9));
        q.push(wid(2), Rect::new(10, 0, 19, 9));
        q.push(wid(1), Rect::new(0, 10, 9, 19));
        assert_eq!(q.len(), 2);
        assert_eq!(q.pop().unwrap().widget, wid(1));
        assert_eq!(q.pop().unwrap().widget, wid(2));
        assert!(q.pop().is_none());
    }

    #[test]
    fn push_merges_by_union() {
        let mut q = RedrawQueue::new();
        q.push(wid(1), Rect::new(0, 0, 4, 4));
        q.push(wid(1), Rect::new(10, 10, 14, 14));
        assert_eq!(q.queued_rect(wid(1)), Some(Rect::new(0, 0, 14, 14)));
    }

    #[test]
    fn contained_rect_is_a_noop() {
        let mut q = RedrawQueue::new();
        q.push(wid(1), Rect::new(0, 0, 20, 20));
        q.push(wid(1), Rect::new(5, 5, 10, 10));
        assert_eq!(q.queued_rect(wid(1)), Some(Rect::new(0, 0, 20, 20)));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn invalid_rect_is_dropped() {
        let mut q = RedrawQueue::new();
        q.push(wid(1), Rect::invalid());
        assert!(q.is_empty());
    }

    #[test]
    fn remove_reports_presence() {
        let mut q = RedrawQueue::new();
        q.push(wid(1), Rect::new(0, 0, 4, 4));
        assert!(q.remove(wid(1)));
        assert!(!q.remove(wid(1)));
        assert!(!q.is_queued(wid(1)));
    }
}
