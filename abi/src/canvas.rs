//! Unified drawing surface trait.
//!
//! Implementors provide the low-level byte accessors; the higher-level
//! write paths are default methods built on them. Every default write path
//! clips against `clip_rect()` and the buffer bounds, so a pixel falling
//! outside either is a no-op and byte offsets handed to implementors are
//! always in range.

use crate::color::EncodedPixel;
use crate::pixel::PixelFormat;
use crate::rect::Rect;

pub trait Canvas {
    /// Buffer width in pixels.
    fn width(&self) -> u32;

    /// Buffer height in pixels.
    fn height(&self) -> u32;

    /// Row stride in bytes.
    fn pitch_bytes(&self) -> usize;

    /// Native pixel format of this surface.
    fn pixel_format(&self) -> PixelFormat;

    /// Read a single packed pixel at the given byte offset.
    ///
    /// Callers guarantee `byte_offset` lies within the buffer.
    fn read_encoded_at(&self, byte_offset: usize) -> EncodedPixel;

    /// Write a single packed pixel at the given byte offset.
    ///
    /// Callers guarantee `byte_offset` lies within the buffer.
    fn write_encoded_at(&mut self, byte_offset: usize, px: EncodedPixel);

    /// The active clipping rectangle. Surfaces without a clip stack report
    /// their full bounds.
    #[inline]
    fn clip_rect(&self) -> Rect {
        self.bounds()
    }

    #[inline]
    fn bytes_per_pixel(&self) -> u8 {
        self.pixel_format().bytes_per_pixel()
    }

    #[inline]
    fn bounds(&self) -> Rect {
        Rect::from_size(0, 0, self.width() as i32, self.height() as i32)
    }

    /// Clamp a horizontal span to the active clip and the buffer bounds.
    ///
    /// Returns `(row, x0, x1)` as in-range indices, or `None` when nothing
    /// of the span survives.
    #[inline]
    fn clip_span(&self, row: i32, x0: i32, x1: i32) -> Option<(usize, usize, usize)> {
        let clip = self.clip_rect().intersect(&self.bounds());
        if !clip.is_valid() || row < clip.y0 || row > clip.y1 {
            return None;
        }
        let x0 = x0.max(clip.x0);
        let x1 = x1.min(clip.x1);
        if x0 > x1 {
            return None;
        }
        Some((row as usize, x0 as usize, x1 as usize))
    }

    #[inline]
    fn byte_offset(&self, x: usize, y: usize) -> usize {
        y * self.pitch_bytes() + x * self.bytes_per_pixel() as usize
    }

    /// Draw a single packed pixel. Writes outside the clip are no-ops.
    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32, px: EncodedPixel) {
        let clip = self.clip_rect().intersect(&self.bounds());
        if !clip.contains_point(x, y) {
            return;
        }
        let off = self.byte_offset(x as usize, y as usize);
        self.write_encoded_at(off, px);
    }

    /// Blend a packed source pixel over the stored pixel at `(x, y)`.
    #[inline]
    fn blend_pixel(&mut self, x: i32, y: i32, src: EncodedPixel, alpha: u8) {
        let clip = self.clip_rect().intersect(&self.bounds());
        if !clip.contains_point(x, y) {
            return;
        }
        let off = self.byte_offset(x as usize, y as usize);
        let dst = self.read_encoded_at(off);
        let out = self.pixel_format().blend(dst, src, alpha);
        self.write_encoded_at(off, out);
    }

    /// Fill a clipped horizontal span with a packed pixel value.
    ///
    /// The default writes pixel by pixel; implementors can override with
    /// bulk writes.
    #[inline]
    fn fill_row_span(&mut self, row: i32, x0: i32, x1: i32, px: EncodedPixel) {
        let Some((row, x0, x1)) = self.clip_span(row, x0, x1) else {
            return;
        };
        for x in x0..=x1 {
            let off = self.byte_offset(x, row);
            self.write_encoded_at(off, px);
        }
    }

    /// Blend a packed source pixel over a clipped horizontal span.
    #[inline]
    fn blend_row_span(&mut self, row: i32, x0: i32, x1: i32, src: EncodedPixel, alpha: u8) {
        let Some((row, x0, x1)) = self.clip_span(row, x0, x1) else {
            return;
        };
        let fmt = self.pixel_format();
        for x in x0..=x1 {
            let off = self.byte_offset(x, row);
            let dst = self.read_encoded_at(off);
            self.write_encoded_at(off, fmt.blend(dst, src, alpha));
        }
    }

    /// Apply the fixed 50% dim over a clipped horizontal span.
    #[inline]
    fn dim_row_span(&mut self, row: i32, x0: i32, x1: i32) {
        let Some((row, x0, x1)) = self.clip_span(row, x0, x1) else {
            return;
        };
        let fmt = self.pixel_format();
        for x in x0..=x1 {
            let off = self.byte_offset(x, row);
            let dst = self.read_encoded_at(off);
            self.write_encoded_at(off, fmt.blend_half(dst));
        }
    }

    /// Fill a rectangle with a solid packed pixel value.
    #[inline]
    fn fill_rect_encoded(&mut self, x: i32, y: i32, w: i32, h: i32, px: EncodedPixel) {
        if w <= 0 || h <= 0 {
            return;
        }
        for row in y..y + h {
            self.fill_row_span(row, x, x + w - 1, px);
        }
    }

    /// Draw a horizontal line from `x0` to `x1` (inclusive).
    #[inline]
    fn hline(&mut self, x0: i32, x1: i32, y: i32, px: EncodedPixel) {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        self.fill_row_span(y, x0, x1, px);
    }

    /// Draw a vertical line from `y0` to `y1` (inclusive).
    #[inline]
    fn vline(&mut self, x: i32, y0: i32, y1: i32, px: EncodedPixel) {
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        for y in y0..=y1 {
            self.put_pixel(x, y, px);
        }
    }
}
