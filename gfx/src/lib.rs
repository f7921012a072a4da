//! Pixel backend of the pane rendering core.
//!
//! `Screen` owns the physical pixel buffer and its clip stack; `ops`
//! provides the clipped draw primitives, `text` the glyph blitter, and
//! `font` the capacity-bounded font registry with the string-metric
//! queries used for text layout and hit-testing.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod clip;
pub mod font;
pub mod ops;
pub mod screen;
pub mod text;

pub use clip::ClipStack;
pub use font::{Font, FontError, FontId, FontRegistry, MAX_FONTS};
pub use screen::{Screen, ScreenError};
