//! Shared data model of the pane rendering core.
//!
//! This crate provides the canonical definitions for everything the clip,
//! draw and redraw layers exchange: screen-space rectangles, colors, packed
//! pixel formats with their exact channel arithmetic, and the `Canvas`
//! drawing-surface trait. Having a single source of truth keeps the pixel
//! backend and the scheduler agreed on coordinate and color conventions.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod canvas;
pub mod color;
pub mod pixel;
pub mod rect;

pub use canvas::Canvas;
pub use color::{Color32, EncodedPixel};
pub use pixel::PixelFormat;
pub use rect::Rect;
