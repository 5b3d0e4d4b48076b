//! Supported cube dimensions

use serde::{Deserialize, Serialize};

/// Which hypercube to animate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Dimension {
    /// A 3D cube: 8 vertices, 12 edges
    Three,
    /// A 4D tesseract: 16 vertices, 32 edges
    Four,
}

impl Dimension {
    /// Number of spatial axes
    pub const fn axes(self) -> usize {
        match self {
            Dimension::Three => 3,
            Dimension::Four => 4,
        }
    }

    /// Viewport scale factor that fits the projected shape on screen
    pub const fn scale_factor(self) -> f64 {
        match self {
            Dimension::Three => 6.5,
            Dimension::Four => 7.5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Dimension::Three => "cube",
            Dimension::Four => "tesseract",
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::Four
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}D {}", self.axes(), self.name())
    }
}

/// Dimension number outside the supported set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionError(pub u8);

impl std::fmt::Display for DimensionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unsupported dimension {} (expected 3 or 4)", self.0)
    }
}

impl std::error::Error for DimensionError {}

impl TryFrom<u8> for Dimension {
    type Error = DimensionError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            3 => Ok(Dimension::Three),
            4 => Ok(Dimension::Four),
            other => Err(DimensionError(other)),
        }
    }
}

impl From<Dimension> for u8 {
    fn from(d: Dimension) -> Self {
        d.axes() as u8
    }
}
