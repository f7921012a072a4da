//! Text drawing over any [`Canvas`] target.

use pane_abi::{Canvas, Color32, Rect};

use crate::font::{Font, FontId, FontRegistry};

/// Blend a byte string at `(x, y)` using the font's coverage image.
///
/// `(x, y)` is the top-left corner of the first glyph cell. Glyphs
/// outside the clip are skipped whole before any per-pixel work.
pub fn draw_text<T: Canvas>(
    canvas: &mut T,
    x: i32,
    y: i32,
    font: &Font,
    color: Color32,
    text: &[u8],
) {
    let px = canvas.pixel_format().encode(color);
    let clip = canvas.clip_rect().intersect(&canvas.bounds());
    if !clip.is_valid() {
        return;
    }
    let h = font.img_h() as i32;
    let mut pen = x;
    for &c in text {
        let w = font.char_width(c);
        if w == 0 {
            continue;
        }
        let cell = Rect::from_size(pen, y, w, h);
        if !cell.intersects(&clip) {
            pen += w;
            continue;
        }
        let off = font.char_offset(c);
        // rows above top and below bottom are padding with no ink
        for gy in font.top()..h - font.bottom() {
            for gx in 0..w {
                let alpha = font.coverage((off + gx) as u32, gy as u32);
                if alpha == 0 {
                    continue;
                }
                canvas.blend_pixel(pen + gx, y + gy, px, alpha);
            }
        }
        pen += w;
    }
}

/// [`draw_text`] resolving the font through a registry.
///
/// An unknown font id draws nothing, matching the zero metrics the
/// registry reports for it.
pub fn draw_text_id<T: Canvas>(
    canvas: &mut T,
    x: i32,
    y: i32,
    fonts: &FontRegistry,
    id: FontId,
    color: Color32,
    text: &[u8],
) {
    if let Some(font) = fonts.get(id) {
        draw_text(canvas, x, y, font, color, text);
    }
}
