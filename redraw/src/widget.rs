//! Widget trait and identity.

use bitflags::bitflags;
use pane_abi::Rect;
use pane_gfx::{FontRegistry, Screen};

/// Stable widget handle, monotonic and never reused.
///
/// A stale id held after teardown resolves to nothing rather than to a
/// different widget.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct WidgetId(pub(crate) u64);

impl WidgetId {
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
    pub struct WidgetFlags: u32 {
        /// Never painted; dirty entries for it are consumed silently.
        const HIDDEN = 1 << 0;
        /// Painted, then dimmed to half intensity.
        const DISABLED = 1 << 1;
    }
}

/// Drawing context handed to widgets during repaint.
///
/// The screen arrives with the clip already narrowed to the area being
/// repainted, so a widget may paint its whole bounds unconditionally.
pub struct PaintCtx<'a> {
    pub screen: &'a mut Screen,
    pub fonts: &'a FontRegistry,
}

pub trait Widget {
    /// Screen-space bounds, inclusive.
    fn bounds(&self) -> Rect;

    fn flags(&self) -> WidgetFlags {
        WidgetFlags::empty()
    }

    /// Repaint the part of the widget inside `area`.
    fn draw(&mut self, ctx: &mut PaintCtx<'_>, area: Rect);
}
