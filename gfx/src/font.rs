//! Bitmap font registry and string metrics.
//!
//! A font is a horizontal strip of 8-bit coverage values plus per-byte
//! width and offset tables. Metrics never touch pixel data, so hit
//! testing and layout work the same whether or not text is ever drawn.

use alloc::vec::Vec;

pub const MAX_FONTS: usize = 4;

pub type FontId = u32;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FontError {
    /// Width/offset tables reference pixels outside the glyph image.
    BadTables,
    /// Glyph image smaller than `img_w * img_h`.
    ShortImage,
    /// All registry slots are taken.
    NoCapacity,
}

#[derive(Debug)]
pub struct Font {
    img_w: u32,
    img_h: u32,
    top: i32,
    bottom: i32,
    width_table: [i32; 256],
    offset_table: [i32; 256],
    image: Vec<u8>,
}

impl Font {
    /// Validate the tables against the glyph image and build the font.
    pub fn new(
        img_w: u32,
        img_h: u32,
        top: i32,
        bottom: i32,
        width_table: [i32; 256],
        offset_table: [i32; 256],
        image: Vec<u8>,
    ) -> Result<Self, FontError> {
        if image.len() < img_w as usize * img_h as usize {
            return Err(FontError::ShortImage);
        }
        if top < 0 || bottom < 0 || top + bottom > img_h as i32 {
            return Err(FontError::BadTables);
        }
        for c in 0..256 {
            let w = width_table[c];
            let off = offset_table[c];
            if w < 0 || off < 0 || off as i64 + w as i64 > img_w as i64 {
                return Err(FontError::BadTables);
            }
        }
        Ok(Self {
            img_w,
            img_h,
            top,
            bottom,
            width_table,
            offset_table,
            image,
        })
    }

    #[inline]
    pub fn img_w(&self) -> u32 {
        self.img_w
    }

    #[inline]
    pub fn img_h(&self) -> u32 {
        self.img_h
    }

    /// Rows of blank space above the glyph cells. No glyph carries ink
    /// there, so the blitter skips them.
    #[inline]
    pub fn top(&self) -> i32 {
        self.top
    }

    /// Rows of blank space below the glyph cells.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    #[inline]
    pub fn char_width(&self, c: u8) -> i32 {
        self.width_table[c as usize]
    }

    #[inline]
    pub fn char_offset(&self, c: u8) -> i32 {
        self.offset_table[c as usize]
    }

    /// Coverage value for one glyph-image texel.
    #[inline]
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        self.image[y as usize * self.img_w as usize + x as usize]
    }

    /// Advance width of `text` in pixels.
    pub fn str_width(&self, text: &[u8]) -> i32 {
        text.iter().map(|&c| self.width_table[c as usize]).sum()
    }

    /// Line height of this font, constant across strings.
    #[inline]
    pub fn str_height(&self) -> i32 {
        self.img_h as i32
    }

    /// Character index under horizontal pixel position `pixel_x`.
    ///
    /// A click left of a glyph's visual center maps to that glyph's
    /// index; past the end of the string it maps to `text.len()`, the
    /// caret-after-last position.
    pub fn char_index(&self, text: &[u8], pixel_x: i32) -> usize {
        let mut pos = 0;
        for (idx, &c) in text.iter().enumerate() {
            let w = self.width_table[c as usize];
            if pos >= pixel_x - (w >> 1) {
                return idx;
            }
            pos += w;
        }
        text.len()
    }
}

/// Fixed-slot font table keyed by [`FontId`].
pub struct FontRegistry {
    slots: [Option<Font>; MAX_FONTS],
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FontRegistry {
    pub const fn new() -> Self {
        Self {
            slots: [const { None }; MAX_FONTS],
        }
    }

    /// Store the font in the first free slot and return its id.
    pub fn register(&mut self, font: Font) -> Result<FontId, FontError> {
        for (id, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_none() {
                log::debug!("font {id} registered ({}x{})", font.img_w, font.img_h);
                *slot = Some(font);
                return Ok(id as FontId);
            }
        }
        log::warn!("font registry full, {MAX_FONTS} slots in use");
        Err(FontError::NoCapacity)
    }

    pub fn get(&self, id: FontId) -> Option<&Font> {
        self.slots.get(id as usize)?.as_ref()
    }

    /// String advance width for a font id, 0 for an unknown id.
    pub fn str_width(&self, id: FontId, text: &[u8]) -> i32 {
        self.get(id).map_or(0, |f| f.str_width(text))
    }

    /// String line height for a font id, 0 for an unknown id.
    pub fn str_height(&self, id: FontId) -> i32 {
        self.get(id).map_or(0, |f| f.str_height())
    }

    /// Character index under a pixel position, 0 for an unknown id.
    pub fn char_index(&self, id: FontId, text: &[u8], pixel_x: i32) -> usize {
        self.get(id).map_or(0, |f| f.char_index(text, pixel_x))
    }
}
