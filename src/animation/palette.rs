//! Frame colors

use hypercube_math::EdgeBand;
use hypercube_raster::PixelFormat;

/// Packed colors for one frame: background plus one color per edge band
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: u16,
    pub primary: u16,
    pub secondary: u16,
    pub bridge: u16,
}

impl Palette {
    /// Black background; red, green and blue bands
    pub fn map(format: PixelFormat) -> Self {
        Self {
            background: format.map_rgb(0x00, 0x00, 0x00),
            primary: format.map_rgb(0xff, 0x00, 0x00),
            secondary: format.map_rgb(0x00, 0xff, 0x00),
            bridge: format.map_rgb(0x00, 0x00, 0xff),
        }
    }

    /// Color of an edge band
    pub fn band(&self, band: EdgeBand) -> u16 {
        match band {
            EdgeBand::Primary => self.primary,
            EdgeBand::Secondary => self.secondary,
            EdgeBand::Bridge => self.bridge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb565_palette() {
        let palette = Palette::map(PixelFormat::Rgb565);
        assert_eq!(palette.background, 0x0000);
        assert_eq!(palette.band(EdgeBand::Primary), 0xf800);
        assert_eq!(palette.band(EdgeBand::Secondary), 0x07e0);
        assert_eq!(palette.band(EdgeBand::Bridge), 0x001f);
    }
}
