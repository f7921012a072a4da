//! Shared-access wrapper around a [`RedrawManager`].

use alloc::boxed::Box;

use pane_abi::Rect;
use pane_gfx::screen::ScreenError;
use spin::Mutex;

use crate::clock::Clock;
use crate::manager::RedrawManager;
use crate::widget::{Widget, WidgetId};

/// One rendering core behind a lock.
///
/// Every forwarded call takes the lock for exactly that call; callers
/// needing several operations under one acquisition use [`Session::lock`].
pub struct Session {
    inner: Mutex<RedrawManager>,
}

impl Session {
    pub fn new(manager: RedrawManager) -> Self {
        Self {
            inner: Mutex::new(manager),
        }
    }

    pub fn lock(&self) -> spin::MutexGuard<'_, RedrawManager> {
        self.inner.lock()
    }

    pub fn register_widget(&self, widget: Box<dyn Widget>) -> WidgetId {
        self.inner.lock().register_widget(widget)
    }

    pub fn unregister_widget(&self, id: WidgetId) -> Option<Box<dyn Widget>> {
        self.inner.lock().unregister_widget(id)
    }

    pub fn invalidate(&self, id: WidgetId, rect: Rect) {
        self.inner.lock().invalidate(id, rect);
    }

    pub fn invalidate_widget(&self, id: WidgetId) {
        self.inner.lock().invalidate_widget(id);
    }

    pub fn exec_redraw(&self, avail_us: u64) -> usize {
        self.inner.lock().exec_redraw(avail_us)
    }

    pub fn exec_redraw_all(&self) {
        self.inner.lock().exec_redraw_all();
    }

    pub fn process_pixels(&self, max_pixels: u64) -> usize {
        self.inner.lock().process_pixels(max_pixels)
    }

    pub fn get_noque(&self) -> usize {
        self.inner.lock().get_noque()
    }

    pub fn is_queued(&self, id: WidgetId) -> bool {
        self.inner.lock().is_queued(id)
    }

    pub fn draw_widget(&self, id: WidgetId) {
        self.inner.lock().draw_widget(id);
    }

    pub fn draw_widgetarea(&self, id: WidgetId, rect: Rect) {
        self.inner.lock().draw_widgetarea(id, rect);
    }

    pub fn draw_area(&self, rect: Rect) {
        self.inner.lock().draw_area(rect);
    }

    pub fn resize(&self, width: u32, height: u32) -> Result<(), ScreenError> {
        self.inner.lock().resize(width, height)
    }

    pub fn replace_clock(&self, clock: Box<dyn Clock>) {
        self.inner.lock().set_clock(clock);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::NullClock;
    use crate::widget::{PaintCtx, WidgetFlags};
    use pane_gfx::Screen;

    struct Empty;

    impl Widget for Empty {
        fn bounds(&self) -> Rect {
            Rect::new(0, 0, 7, 7)
        }

        fn flags(&self) -> WidgetFlags {
            WidgetFlags::HIDDEN
        }

        fn draw(&mut self, _ctx: &mut PaintCtx<'_>, _area: Rect) {}
    }

    #[test]
    fn forwarded_calls_share_one_manager() {
        let session = Session::new(RedrawManager::new(
            Screen::create(16, 16, 16).unwrap(),
            Box::new(NullClock),
        ));
        let id = session.register_widget(Box::new(Empty));
        assert!(session.is_queued(id));
        session.exec_redraw_all();
        assert_eq!(session.get_noque(), 0);
        session.unregister_widget(id);
        session.invalidate_widget(id);
        assert_eq!(session.get_noque(), 0);
    }

    #[test]
    fn lock_allows_grouped_operations() {
        let session = Session::new(RedrawManager::new(
            Screen::create(16, 16, 16).unwrap(),
            Box::new(NullClock),
        ));
        let id = {
            let mut mgr = session.lock();
            let id = mgr.register_widget(Box::new(Empty));
            mgr.exec_redraw_all();
            id
        };
        assert!(!session.is_queued(id));
    }
}
