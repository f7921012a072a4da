//! Incremental redraw scheduling for the pane rendering core.
//!
//! Widgets register with a [`RedrawManager`], which tracks dirty regions
//! in a FIFO queue and repaints them either all at once or under a time
//! or pixel budget. [`Session`] wraps a manager in a lock for callers
//! that share one rendering core across contexts.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod clock;
pub mod manager;
pub mod queue;
pub mod session;
pub mod widget;

pub use clock::{Clock, NullClock};
pub use manager::RedrawManager;
pub use queue::{DirtyRegion, RedrawQueue};
pub use session::Session;
pub use widget::{PaintCtx, Widget, WidgetFlags, WidgetId};
