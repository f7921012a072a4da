//! Packed pixel formats and their exact channel arithmetic.
//!
//! All blending operates directly on the packed bit layout, one channel
//! bitmask at a time, with no intermediate unpacked representation. The
//! 16-bit format groups red and blue under a shared mask (their fields are
//! far enough apart that a single multiply cannot carry between them) and
//! handles green separately; the 32-bit format does the same with the
//! byte-interleaved masks.

use crate::color::{Color32, EncodedPixel};

/// Red and blue fields of an RGB565 pixel.
const RGB565_RB: u32 = 0xF81F;
/// Green field of an RGB565 pixel.
const RGB565_G: u32 = 0x07E0;

/// Red and blue bytes of an XRGB8888 pixel.
const XRGB_RB: u32 = 0x00FF_00FF;
/// Green byte of an XRGB8888 pixel.
const XRGB_G: u32 = 0x0000_FF00;

/// Native pixel format of a screen buffer.
///
/// One variant per supported specialization, fixed at `Screen::create`
/// time. All drawing goes through `encode`/`blend`/`blend_half` on this
/// enum so every pixel write uses arithmetic matching the buffer's layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// 16-bit 5-6-5, alpha discarded on encode.
    #[default]
    Rgb565,
    /// 32-bit RGB with an unused X byte (kept zero).
    Xrgb8888,
}

impl PixelFormat {
    /// Map a buffer depth in bits to a supported format.
    #[inline]
    pub fn from_depth(bits: u8) -> Option<Self> {
        match bits {
            16 => Some(Self::Rgb565),
            32 => Some(Self::Xrgb8888),
            _ => None,
        }
    }

    #[inline]
    pub fn depth_bits(self) -> u8 {
        match self {
            Self::Rgb565 => 16,
            Self::Xrgb8888 => 32,
        }
    }

    #[inline]
    pub fn bytes_per_pixel(self) -> u8 {
        match self {
            Self::Rgb565 => 2,
            Self::Xrgb8888 => 4,
        }
    }

    /// Exact quantization from 32-bit RGBA into the native packed layout.
    ///
    /// Alpha is discarded; it only ever enters the pipeline as a blend
    /// weight, never as stored state.
    #[inline]
    pub fn encode(self, color: Color32) -> EncodedPixel {
        let r = color.red() as u32;
        let g = color.green() as u32;
        let b = color.blue() as u32;
        EncodedPixel(match self {
            Self::Rgb565 => ((r & 0xF8) << 8) | ((g & 0xFC) << 3) | (b >> 3),
            Self::Xrgb8888 => (r << 16) | (g << 8) | b,
        })
    }

    /// One-sided channel weighting of a packed pixel by `alpha`.
    ///
    /// For RGB565 this is the reference law:
    /// `(((alpha>>3) * (px & 0xF81F)) >> 5) & 0xF81F
    ///  | ((alpha * (px & 0x07E0)) >> 8) & 0x07E0`.
    /// The weighting saturates slightly below unity (31/32 for the 5-bit
    /// fields); `blend` restores bit-exactness at the alpha endpoints.
    #[inline]
    pub fn scale(self, px: EncodedPixel, alpha: u8) -> EncodedPixel {
        let v = px.to_u32();
        let a = alpha as u32;
        EncodedPixel(match self {
            Self::Rgb565 => {
                ((((a >> 3) * (v & RGB565_RB)) >> 5) & RGB565_RB)
                    | (((a * (v & RGB565_G)) >> 8) & RGB565_G)
            }
            Self::Xrgb8888 => {
                (((a * (v & XRGB_RB)) >> 8) & XRGB_RB) | (((a * (v & XRGB_G)) >> 8) & XRGB_G)
            }
        })
    }

    /// Per-channel linear interpolation between two packed pixels.
    ///
    /// `alpha == 255` reproduces `src` bit-exactly and `alpha == 0`
    /// contributes nothing from it. Interior alphas sum the two one-sided
    /// weightings; the masked terms stay within their channel fields, so
    /// plain addition cannot carry across channels.
    #[inline]
    pub fn blend(self, dst: EncodedPixel, src: EncodedPixel, alpha: u8) -> EncodedPixel {
        match alpha {
            0 => dst,
            255 => src,
            a => EncodedPixel(self.scale(src, a).to_u32() + self.scale(dst, 255 - a).to_u32()),
        }
    }

    /// Fixed 50%-toward-black dim, used for disabled widget rendering.
    ///
    /// Reference constant for RGB565: `blend_half(0xFFFF) == 0x7BEF`.
    #[inline]
    pub fn blend_half(self, px: EncodedPixel) -> EncodedPixel {
        let v = px.to_u32();
        EncodedPixel(match self {
            Self::Rgb565 => (v & 0xF7DE) >> 1,
            Self::Xrgb8888 => (v & 0x00FE_FEFE) >> 1,
        })
    }
}
