//! Redraw manager: widget registry, dirty queue, and the drain loops.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use pane_abi::{Canvas, Rect};
use pane_gfx::screen::ScreenError;
use pane_gfx::{FontRegistry, Screen, ops};

use crate::clock::Clock;
use crate::queue::{DirtyRegion, RedrawQueue};
use crate::widget::{PaintCtx, Widget, WidgetFlags, WidgetId};

type WidgetMap = BTreeMap<WidgetId, Box<dyn Widget>>;

pub struct RedrawManager {
    screen: Screen,
    fonts: FontRegistry,
    widgets: WidgetMap,
    queue: RedrawQueue,
    clock: Box<dyn Clock>,
    next_id: u64,
}

impl RedrawManager {
    pub fn new(screen: Screen, clock: Box<dyn Clock>) -> Self {
        Self {
            screen,
            fonts: FontRegistry::new(),
            widgets: WidgetMap::new(),
            queue: RedrawQueue::new(),
            clock,
            next_id: 1,
        }
    }

    /// Add a widget and queue its full area for painting.
    ///
    /// Ids are handed out monotonically and never reused.
    pub fn register_widget(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        let bounds = widget.bounds();
        self.widgets.insert(id, widget);
        self.queue.push(id, bounds);
        log::debug!("widget {} registered, bounds {bounds:?}", id.raw());
        id
    }

    /// Remove a widget.
    ///
    /// Its queue entry is dropped first, so the queue never holds an id
    /// the registry cannot resolve.
    pub fn unregister_widget(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        self.queue.remove(id);
        let widget = self.widgets.remove(&id);
        if widget.is_none() {
            log::debug!("unregister of unknown widget {}", id.raw());
        }
        widget
    }

    /// Queue part of a widget for repaint, clamped to its bounds.
    pub fn invalidate(&mut self, id: WidgetId, rect: Rect) {
        let Some(widget) = self.widgets.get(&id) else {
            return;
        };
        self.queue.push(id, rect.intersect(&widget.bounds()));
    }

    /// Queue a widget's whole area for repaint.
    pub fn invalidate_widget(&mut self, id: WidgetId) {
        let Some(widget) = self.widgets.get(&id) else {
            return;
        };
        self.queue.push(id, widget.bounds());
    }

    /// Number of widgets with a pending dirty entry.
    pub fn get_noque(&self) -> usize {
        self.queue.len()
    }

    pub fn is_queued(&self, id: WidgetId) -> bool {
        self.queue.is_queued(id)
    }

    pub fn widget_flags(&self, id: WidgetId) -> Option<WidgetFlags> {
        self.widgets.get(&id).map(|w| w.flags())
    }

    /// Drain dirty entries until `avail_us` microseconds have elapsed.
    ///
    /// The budget is checked after each entry, so a non-empty queue
    /// always makes progress, a zero budget included. Returns the number
    /// of entries still queued.
    pub fn exec_redraw(&mut self, avail_us: u64) -> usize {
        let start = self.clock.now_us();
        let mut painted = 0;
        while let Some(entry) = self.queue.pop() {
            Self::repaint(&mut self.screen, &self.fonts, &mut self.widgets, entry);
            painted += 1;
            if self.clock.now_us().saturating_sub(start) >= avail_us {
                break;
            }
        }
        log::trace!("exec_redraw: {painted} painted, {} queued", self.queue.len());
        self.queue.len()
    }

    /// Drain the queue completely, ignoring any budget.
    pub fn exec_redraw_all(&mut self) {
        while let Some(entry) = self.queue.pop() {
            Self::repaint(&mut self.screen, &self.fonts, &mut self.widgets, entry);
        }
    }

    /// Drain dirty entries until roughly `max_pixels` pixels were
    /// repainted.
    ///
    /// Cost of an entry is its queued rectangle's area, charged after
    /// painting it; like [`exec_redraw`] this processes at least one
    /// entry whenever the queue is non-empty, and returns the number of
    /// entries still queued.
    pub fn process_pixels(&mut self, max_pixels: u64) -> usize {
        let mut spent: u64 = 0;
        let mut painted = 0;
        while let Some(entry) = self.queue.pop() {
            Self::repaint(&mut self.screen, &self.fonts, &mut self.widgets, entry);
            painted += 1;
            spent = spent.saturating_add(entry.rect.area().max(0) as u64);
            if spent >= max_pixels {
                break;
            }
        }
        log::trace!("process_pixels: {painted} painted, {spent} pixels");
        self.queue.len()
    }

    /// Paint a widget immediately, bypassing the queue.
    pub fn draw_widget(&mut self, id: WidgetId) {
        let Some(widget) = self.widgets.get(&id) else {
            return;
        };
        let rect = widget.bounds();
        Self::repaint(
            &mut self.screen,
            &self.fonts,
            &mut self.widgets,
            DirtyRegion { widget: id, rect },
        );
    }

    /// Paint part of a widget immediately, bypassing the queue.
    pub fn draw_widgetarea(&mut self, id: WidgetId, rect: Rect) {
        Self::repaint(
            &mut self.screen,
            &self.fonts,
            &mut self.widgets,
            DirtyRegion { widget: id, rect },
        );
    }

    /// Paint every widget overlapping `rect` immediately, in
    /// registration order.
    pub fn draw_area(&mut self, rect: Rect) {
        let ids: Vec<WidgetId> = self
            .widgets
            .iter()
            .filter(|(_, w)| w.bounds().intersects(&rect))
            .map(|(&id, _)| id)
            .collect();
        for id in ids {
            self.draw_widgetarea(id, rect);
        }
    }

    /// Reallocate the screen and queue a full repaint of every widget.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ScreenError> {
        self.screen.resize(width, height)?;
        self.queue.clear();
        let ids: Vec<WidgetId> = self.widgets.keys().copied().collect();
        for id in ids {
            self.invalidate_widget(id);
        }
        Ok(())
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    pub fn fonts_mut(&mut self) -> &mut FontRegistry {
        &mut self.fonts
    }

    /// Swap the time source, e.g. once a platform timer is calibrated.
    pub fn set_clock(&mut self, clock: Box<dyn Clock>) {
        self.clock = clock;
    }

    fn repaint(
        screen: &mut Screen,
        fonts: &FontRegistry,
        widgets: &mut WidgetMap,
        entry: DirtyRegion,
    ) {
        let Some(widget) = widgets.get_mut(&entry.widget) else {
            return;
        };
        let flags = widget.flags();
        if flags.contains(WidgetFlags::HIDDEN) {
            return;
        }
        let area = entry
            .rect
            .intersect(&widget.bounds())
            .intersect(&screen.bounds());
        if !area.is_valid() {
            return;
        }
        screen.with_clip(area, |s| {
            let mut ctx = PaintCtx { screen: s, fonts };
            widget.draw(&mut ctx, area);
            if flags.contains(WidgetFlags::DISABLED) {
                ops::dim_rect(ctx.screen, area);
            }
        });
    }
}
