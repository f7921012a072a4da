//! Clipping rectangle stack.
//!
//! The active clip is the intersection chain down the stack: each push
//! intersects the incoming rect with the current top, so every stacked
//! rect is contained in the screen-bounds base by construction. An empty
//! stack means the full screen is writable.

use alloc::vec::Vec;

use pane_abi::Rect;

#[derive(Debug)]
pub struct ClipStack {
    base: Rect,
    stack: Vec<Rect>,
}

impl ClipStack {
    /// Create a stack whose base clip is the full screen rect.
    pub fn new(screen: Rect) -> Self {
        Self {
            base: screen,
            stack: Vec::new(),
        }
    }

    /// Replace the base clip (screen resize). Any stacked rects are
    /// discarded; the caller re-establishes clips for the new bounds.
    pub fn set_base(&mut self, screen: Rect) {
        self.base = screen;
        self.stack.clear();
    }

    /// The rect currently limiting pixel writes.
    #[inline]
    pub fn current(&self) -> Rect {
        *self.stack.last().unwrap_or(&self.base)
    }

    /// Push the intersection of `rect` with the current clip.
    ///
    /// A disjoint rect pushes the empty sentinel, under which every draw
    /// is a no-op; the pairing with `pop` stays uniform either way.
    pub fn push(&mut self, rect: Rect) {
        let top = self.current();
        self.stack.push(top.intersect(&rect));
    }

    /// Restore the previous clip.
    ///
    /// Popping past the base is a bug in the caller's push/pop pairing;
    /// it is logged and otherwise ignored.
    pub fn pop(&mut self) {
        if self.stack.pop().is_none() {
            log::warn!("clip stack popped below its base");
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
