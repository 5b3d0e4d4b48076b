//! Packed 16-bit pixel colors

/// Pixel format of a [`PixelBuffer`](crate::PixelBuffer)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 5 bits red, 6 bits green, 5 bits blue, red in the high bits
    #[default]
    Rgb565,
}

impl PixelFormat {
    /// Bytes per pixel
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb565 => 2,
        }
    }

    /// Pack an 8-bit-per-channel color into this format
    pub const fn map_rgb(self, r: u8, g: u8, b: u8) -> u16 {
        match self {
            PixelFormat::Rgb565 => {
                (((r as u16) >> 3) << 11) | (((g as u16) >> 2) << 5) | ((b as u16) >> 3)
            }
        }
    }

    /// Expand a packed pixel back to 8 bits per channel
    ///
    /// The high bits are replicated into the low bits so full intensity
    /// maps back to 255.
    pub const fn unpack_rgb(self, pixel: u16) -> (u8, u8, u8) {
        match self {
            PixelFormat::Rgb565 => {
                let r = ((pixel >> 11) & 0x1f) as u8;
                let g = ((pixel >> 5) & 0x3f) as u8;
                let b = (pixel & 0x1f) as u8;
                ((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        let f = PixelFormat::Rgb565;
        assert_eq!(f.map_rgb(0, 0, 0), 0x0000);
        assert_eq!(f.map_rgb(0xff, 0, 0), 0xf800);
        assert_eq!(f.map_rgb(0, 0xff, 0), 0x07e0);
        assert_eq!(f.map_rgb(0, 0, 0xff), 0x001f);
        assert_eq!(f.map_rgb(0xff, 0xff, 0xff), 0xffff);
    }

    #[test]
    fn test_unpack_full_intensity() {
        let f = PixelFormat::Rgb565;
        assert_eq!(f.unpack_rgb(0xf800), (255, 0, 0));
        assert_eq!(f.unpack_rgb(0x07e0), (0, 255, 0));
        assert_eq!(f.unpack_rgb(0x001f), (0, 0, 255));
        assert_eq!(f.unpack_rgb(0xffff), (255, 255, 255));
    }

    #[test]
    fn test_unpack_loses_only_low_bits() {
        let f = PixelFormat::Rgb565;
        let (r, g, b) = f.unpack_rgb(f.map_rgb(200, 100, 50));
        assert!((r as i32 - 200).abs() < 8);
        assert!((g as i32 - 100).abs() < 4);
        assert!((b as i32 - 50).abs() < 8);
    }

    #[test]
    fn test_bytes_per_pixel() {
        assert_eq!(PixelFormat::Rgb565.bytes_per_pixel(), 2);
    }
}
