//! Drawing primitives generic over any [`Canvas`] target.
//!
//! Every routine clips against the target's current clip rectangle and
//! silently skips invalid or fully-clipped geometry.

use pane_abi::{Canvas, Color32, Rect};

/// Borrowed source image for blits, row-major `Color32` pixels.
#[derive(Copy, Clone)]
pub struct ImageRef<'a> {
    pub width: u32,
    pub height: u32,
    pub pixels: &'a [Color32],
}

impl<'a> ImageRef<'a> {
    /// `None` if the pixel slice does not cover `width * height`.
    pub fn new(width: u32, height: u32, pixels: &'a [Color32]) -> Option<Self> {
        if pixels.len() < width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> Color32 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

/// Opaque solid fill.
pub fn fill_rect<T: Canvas>(canvas: &mut T, rect: Rect, color: Color32) {
    if !rect.is_valid() {
        return;
    }
    let px = canvas.pixel_format().encode(color);
    for y in rect.y0..=rect.y1 {
        canvas.fill_row_span(y, rect.x0, rect.x1, px);
    }
}

/// Solid fill blended over existing content with a uniform alpha.
pub fn fill_rect_alpha<T: Canvas>(canvas: &mut T, rect: Rect, color: Color32, alpha: u8) {
    if !rect.is_valid() {
        return;
    }
    if alpha == 255 {
        fill_rect(canvas, rect, color);
        return;
    }
    if alpha == 0 {
        return;
    }
    let px = canvas.pixel_format().encode(color);
    for y in rect.y0..=rect.y1 {
        canvas.blend_row_span(y, rect.x0, rect.x1, px, alpha);
    }
}

/// One-pixel outline along the rectangle border.
pub fn frame_rect<T: Canvas>(canvas: &mut T, rect: Rect, color: Color32) {
    if !rect.is_valid() {
        return;
    }
    let px = canvas.pixel_format().encode(color);
    canvas.hline(rect.x0, rect.x1, rect.y0, px);
    if rect.y1 > rect.y0 {
        canvas.hline(rect.x0, rect.x1, rect.y1, px);
    }
    if rect.y1 > rect.y0 + 1 {
        canvas.vline(rect.x0, rect.y0 + 1, rect.y1 - 1, px);
        if rect.x1 > rect.x0 {
            canvas.vline(rect.x1, rect.y0 + 1, rect.y1 - 1, px);
        }
    }
}

/// Darken the region to half intensity, used for disabled widgets.
pub fn dim_rect<T: Canvas>(canvas: &mut T, rect: Rect) {
    if !rect.is_valid() {
        return;
    }
    for y in rect.y0..=rect.y1 {
        canvas.dim_row_span(y, rect.x0, rect.x1);
    }
}

/// Copy an image with its top-left corner at `(dst_x, dst_y)`.
///
/// Source pixels with alpha below 255 are blended, fully transparent
/// pixels are skipped outright.
pub fn blit_image<T: Canvas>(canvas: &mut T, dst_x: i32, dst_y: i32, img: ImageRef<'_>) {
    if img.width == 0 || img.height == 0 {
        return;
    }
    let dst = Rect::from_size(dst_x, dst_y, img.width as i32, img.height as i32);
    let visible = dst
        .intersect(&canvas.clip_rect())
        .intersect(&canvas.bounds());
    if !visible.is_valid() {
        return;
    }
    let fmt = canvas.pixel_format();
    for y in visible.y0..=visible.y1 {
        let src_y = (y - dst_y) as u32;
        for x in visible.x0..=visible.x1 {
            let src = img.pixel((x - dst_x) as u32, src_y);
            let alpha = src.alpha();
            if alpha == 0 {
                continue;
            }
            let off = canvas.byte_offset(x as usize, y as usize);
            let px = fmt.encode(src);
            if alpha == 255 {
                canvas.write_encoded_at(off, px);
            } else {
                let under = canvas.read_encoded_at(off);
                canvas.write_encoded_at(off, fmt.blend(under, px, alpha));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Screen;
    use pane_abi::EncodedPixel;

    fn white_px(scr: &Screen) -> EncodedPixel {
        scr.pixel_format().encode(Color32::WHITE)
    }

    #[test]
    fn fill_respects_clip() {
        let mut scr = Screen::create(8, 8, 16).unwrap();
        scr.with_clip(Rect::new(2, 2, 5, 5), |s| {
            fill_rect(s, Rect::new(0, 0, 7, 7), Color32::WHITE);
        });
        let w = white_px(&scr);
        assert_eq!(scr.pixel_at(2, 2), Some(w));
        assert_eq!(scr.pixel_at(5, 5), Some(w));
        assert_eq!(scr.pixel_at(1, 2), Some(EncodedPixel(0)));
        assert_eq!(scr.pixel_at(6, 5), Some(EncodedPixel(0)));
    }

    #[test]
    fn invalid_rect_draws_nothing() {
        let mut scr = Screen::create(8, 8, 16).unwrap();
        fill_rect(&mut scr, Rect::new(5, 5, 2, 2), Color32::WHITE);
        frame_rect(&mut scr, Rect::invalid(), Color32::WHITE);
        dim_rect(&mut scr, Rect::new(3, 3, 1, 3));
        assert!(scr.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn frame_touches_border_only() {
        let mut scr = Screen::create(6, 6, 32).unwrap();
        frame_rect(&mut scr, Rect::new(1, 1, 4, 4), Color32::WHITE);
        let w = white_px(&scr);
        assert_eq!(scr.pixel_at(1, 1), Some(w));
        assert_eq!(scr.pixel_at(4, 1), Some(w));
        assert_eq!(scr.pixel_at(1, 3), Some(w));
        assert_eq!(scr.pixel_at(4, 4), Some(w));
        assert_eq!(scr.pixel_at(2, 2), Some(EncodedPixel(0)));
        assert_eq!(scr.pixel_at(0, 0), Some(EncodedPixel(0)));
    }

    #[test]
    fn dim_halves_full_white() {
        let mut scr = Screen::create(4, 4, 16).unwrap();
        fill_rect(&mut scr, Rect::new(0, 0, 3, 3), Color32::WHITE);
        dim_rect(&mut scr, Rect::new(0, 0, 1, 3));
        assert_eq!(scr.pixel_at(0, 0), Some(EncodedPixel(0x7BEF)));
        assert_eq!(scr.pixel_at(2, 0), Some(EncodedPixel(0xFFFF)));
    }

    #[test]
    fn alpha_endpoints_are_exact() {
        let mut scr = Screen::create(4, 4, 32).unwrap();
        fill_rect(&mut scr, Rect::new(0, 0, 3, 3), Color32::rgb(10, 20, 30));
        let before = scr.pixel_at(1, 1).unwrap();
        fill_rect_alpha(&mut scr, Rect::new(0, 0, 3, 3), Color32::WHITE, 0);
        assert_eq!(scr.pixel_at(1, 1), Some(before));
        fill_rect_alpha(&mut scr, Rect::new(0, 0, 3, 3), Color32::WHITE, 255);
        assert_eq!(scr.pixel_at(1, 1), Some(white_px(&scr)));
    }

    #[test]
    fn blit_clips_and_skips_transparent() {
        let mut scr = Screen::create(4, 4, 32).unwrap();
        let pixels = [
            Color32::WHITE,
            Color32::TRANSPARENT,
            Color32::TRANSPARENT,
            Color32::WHITE,
        ];
        let img = ImageRef::new(2, 2, &pixels).unwrap();
        blit_image(&mut scr, -1, 0, img);
        // left column clipped away, transparent source left untouched
        assert_eq!(scr.pixel_at(0, 0), Some(EncodedPixel(0)));
        assert_eq!(scr.pixel_at(0, 1), Some(white_px(&scr)));
        assert!(ImageRef::new(3, 3, &pixels).is_none());
    }
}
