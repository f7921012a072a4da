//! Screen buffer owner.
//!
//! `Screen` binds a pixel format and resolution to an owned buffer and
//! carries the clip stack every draw consults. The buffer is created once
//! per resolution, reallocated on resize, and dropped at teardown; nothing
//! else ever aliases it.

use alloc::vec;
use alloc::vec::Vec;

use pane_abi::{Canvas, EncodedPixel, PixelFormat, Rect};

use crate::clip::ClipStack;

const MAX_DIMENSION: u32 = 16384;
const MAX_BUFFER_SIZE: usize = 64 * 1024 * 1024;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScreenError {
    /// The requested bit depth has no backend specialization.
    UnsupportedDepth,
    /// Zero or out-of-range width/height.
    InvalidDimensions,
    /// The buffer for this resolution would exceed the size cap.
    BufferTooLarge,
}

#[derive(Debug)]
pub struct Screen {
    data: Vec<u8>,
    width: u32,
    height: u32,
    format: PixelFormat,
    clip: ClipStack,
}

impl Screen {
    /// Allocate a zeroed buffer for the given resolution and depth and
    /// establish the initial full-screen clip.
    pub fn create(width: u32, height: u32, depth_bits: u8) -> Result<Self, ScreenError> {
        let Some(format) = PixelFormat::from_depth(depth_bits) else {
            log::warn!("screen create rejected: unsupported depth {depth_bits}");
            return Err(ScreenError::UnsupportedDepth);
        };
        let size = Self::buffer_size(width, height, format)?;
        log::debug!("screen create: {width}x{height} depth {depth_bits}");
        Ok(Self {
            data: vec![0; size],
            width,
            height,
            format,
            clip: ClipStack::new(Rect::from_size(0, 0, width as i32, height as i32)),
        })
    }

    fn buffer_size(width: u32, height: u32, format: PixelFormat) -> Result<usize, ScreenError> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(ScreenError::InvalidDimensions);
        }
        let size = width as usize * height as usize * format.bytes_per_pixel() as usize;
        if size > MAX_BUFFER_SIZE {
            return Err(ScreenError::BufferTooLarge);
        }
        Ok(size)
    }

    /// Reallocate for a new resolution, keeping the pixel format.
    ///
    /// The clip stack is reset to the new full-screen base; content is not
    /// preserved, the owner requeues a full redraw afterwards.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ScreenError> {
        let size = Self::buffer_size(width, height, self.format)?;
        log::debug!(
            "screen resize: {}x{} -> {width}x{height}",
            self.width,
            self.height
        );
        self.data = vec![0; size];
        self.width = width;
        self.height = height;
        self.clip
            .set_base(Rect::from_size(0, 0, width as i32, height as i32));
        Ok(())
    }

    /// Run `f` with `rect` pushed onto the clip stack.
    ///
    /// The pop happens on every exit path of `f`, so clip state cannot
    /// leak into subsequent unrelated draws.
    pub fn with_clip<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Self) -> R) -> R {
        self.clip.push(rect);
        let out = f(self);
        self.clip.pop();
        out
    }

    pub fn push_clip(&mut self, rect: Rect) {
        self.clip.push(rect);
    }

    pub fn pop_clip(&mut self) {
        self.clip.pop();
    }

    #[inline]
    pub fn clip_current(&self) -> Rect {
        self.clip.current()
    }

    #[inline]
    pub fn clip_depth(&self) -> usize {
        self.clip.depth()
    }

    #[inline]
    pub fn pitch(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel() as usize
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Read back the packed pixel at `(x, y)`; `None` outside the buffer.
    pub fn pixel_at(&self, x: i32, y: i32) -> Option<EncodedPixel> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let off = self.byte_offset(x as usize, y as usize);
        Some(self.read_encoded_at(off))
    }
}

impl Canvas for Screen {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pitch_bytes(&self) -> usize {
        self.pitch()
    }

    #[inline]
    fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    #[inline]
    fn clip_rect(&self) -> Rect {
        self.clip.current()
    }

    #[inline]
    fn read_encoded_at(&self, byte_offset: usize) -> EncodedPixel {
        match self.format {
            PixelFormat::Rgb565 => {
                let b = &self.data[byte_offset..byte_offset + 2];
                EncodedPixel(u16::from_le_bytes([b[0], b[1]]) as u32)
            }
            PixelFormat::Xrgb8888 => {
                let b = &self.data[byte_offset..byte_offset + 4];
                EncodedPixel(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            }
        }
    }

    #[inline]
    fn write_encoded_at(&mut self, byte_offset: usize, px: EncodedPixel) {
        match self.format {
            PixelFormat::Rgb565 => {
                let bytes = (px.to_u32() as u16).to_le_bytes();
                self.data[byte_offset..byte_offset + 2].copy_from_slice(&bytes);
            }
            PixelFormat::Xrgb8888 => {
                let bytes = px.to_u32().to_le_bytes();
                self.data[byte_offset..byte_offset + 4].copy_from_slice(&bytes);
            }
        }
    }

    #[inline]
    fn fill_row_span(&mut self, row: i32, x0: i32, x1: i32, px: EncodedPixel) {
        let Some((row, x0, x1)) = self.clip_span(row, x0, x1) else {
            return;
        };
        let bpp = self.format.bytes_per_pixel() as usize;
        let start = self.byte_offset(x0, row);
        let end = self.byte_offset(x1, row) + bpp;
        let span = &mut self.data[start..end];
        match self.format {
            PixelFormat::Rgb565 => {
                let bytes = (px.to_u32() as u16).to_le_bytes();
                for chunk in span.chunks_exact_mut(2) {
                    chunk.copy_from_slice(&bytes);
                }
            }
            PixelFormat::Xrgb8888 => {
                let bytes = px.to_u32().to_le_bytes();
                for chunk in span.chunks_exact_mut(4) {
                    chunk.copy_from_slice(&bytes);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pane_abi::Color32;

    #[test]
    fn create_validates_parameters() {
        assert!(Screen::create(320, 240, 16).is_ok());
        assert!(Screen::create(320, 240, 32).is_ok());
        assert_eq!(
            Screen::create(320, 240, 24).unwrap_err(),
            ScreenError::UnsupportedDepth
        );
        assert_eq!(
            Screen::create(0, 240, 16).unwrap_err(),
            ScreenError::InvalidDimensions
        );
        assert_eq!(
            Screen::create(20000, 240, 16).unwrap_err(),
            ScreenError::InvalidDimensions
        );
        assert_eq!(
            Screen::create(8192, 8192, 32).unwrap_err(),
            ScreenError::BufferTooLarge
        );
    }

    #[test]
    fn buffer_starts_zeroed_with_full_clip() {
        let scr = Screen::create(8, 4, 16).unwrap();
        assert!(scr.data().iter().all(|&b| b == 0));
        assert_eq!(scr.clip_current(), Rect::new(0, 0, 7, 3));
        assert_eq!(scr.pitch(), 16);
    }

    #[test]
    fn pixel_roundtrip_both_formats() {
        for depth in [16u8, 32] {
            let mut scr = Screen::create(4, 4, depth).unwrap();
            let px = scr.pixel_format().encode(Color32::rgb(0x12, 0x56, 0x9A));
            scr.put_pixel(2, 1, px);
            assert_eq!(scr.pixel_at(2, 1), Some(px));
            assert_eq!(scr.pixel_at(0, 0), Some(EncodedPixel(0)));
            assert_eq!(scr.pixel_at(4, 0), None);
            assert_eq!(scr.pixel_at(-1, 0), None);
        }
    }

    #[test]
    fn with_clip_pops_on_early_return() {
        let mut scr = Screen::create(10, 10, 16).unwrap();
        let out: Result<(), ()> = scr.with_clip(Rect::new(2, 2, 5, 5), |s| {
            assert_eq!(s.clip_current(), Rect::new(2, 2, 5, 5));
            Err(())
        });
        assert!(out.is_err());
        assert_eq!(scr.clip_depth(), 0);
        assert_eq!(scr.clip_current(), Rect::new(0, 0, 9, 9));
    }

    #[test]
    fn writes_outside_clip_are_noops() {
        let mut scr = Screen::create(10, 10, 16).unwrap();
        let white = scr.pixel_format().encode(Color32::WHITE);
        scr.with_clip(Rect::new(2, 2, 5, 5), |s| {
            s.put_pixel(0, 0, white);
            s.put_pixel(6, 3, white);
            s.put_pixel(3, 3, white);
        });
        assert_eq!(scr.pixel_at(0, 0), Some(EncodedPixel(0)));
        assert_eq!(scr.pixel_at(6, 3), Some(EncodedPixel(0)));
        assert_eq!(scr.pixel_at(3, 3), Some(white));
    }

    #[test]
    fn resize_reallocates_and_resets_clip() {
        let mut scr = Screen::create(8, 8, 32).unwrap();
        let px = scr.pixel_format().encode(Color32::WHITE);
        scr.put_pixel(1, 1, px);
        scr.push_clip(Rect::new(0, 0, 3, 3));
        scr.resize(16, 4).unwrap();
        assert_eq!(Canvas::width(&scr), 16);
        assert_eq!(Canvas::height(&scr), 4);
        assert_eq!(scr.clip_depth(), 0);
        assert_eq!(scr.clip_current(), Rect::new(0, 0, 15, 3));
        assert!(scr.data().iter().all(|&b| b == 0));
        assert_eq!(scr.resize(0, 4).unwrap_err(), ScreenError::InvalidDimensions);
    }
}
