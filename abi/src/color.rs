/// Canonical color representation: 0xAARRGGBB.
///
/// Use `PixelFormat::encode()` to convert to an `EncodedPixel` for writing
/// into a specific screen buffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct Color32(pub u32);

impl Color32 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0x00000000);
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF000000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFFFFFF);

    /// Construct from individual RGBA components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Construct an opaque color from RGB.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Raw u32 value (0xAARRGGBB).
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }
}

/// A color value already packed for a specific `PixelFormat`.
///
/// Produced by `PixelFormat::encode()`. The internal representation matches
/// the screen buffer's native layout and can be written to pixel memory
/// directly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct EncodedPixel(pub u32);

impl EncodedPixel {
    /// Raw value for writing into a pixel buffer.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_accessors() {
        let c = Color32::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_u32(), 0x78123456);
        assert_eq!(c.red(), 0x12);
        assert_eq!(c.green(), 0x34);
        assert_eq!(c.blue(), 0x56);
        assert_eq!(c.alpha(), 0x78);
        assert_eq!(Color32::rgb(1, 2, 3).alpha(), 0xFF);
    }
}
