//! Perspective projection down to 2D and viewport mapping
//!
//! Projection collapses one axis at a time, highest first. Collapsing axis
//! `k` with eye distance `e` scales every lower coordinate by `(e + v_k) / e`.
//! The divisor is always the eye distance, so a positive eye distance is all
//! it takes to rule out division by zero.

use crate::Vector;

/// Scale factor for collapsing one axis
#[inline]
pub fn perspective_factor(eye_distance: f64, coord: f64) -> f64 {
    (eye_distance + coord) / eye_distance
}

/// Error for an unusable eye distance
#[derive(Debug, Clone, PartialEq)]
pub enum PerspectiveError {
    /// Eye distance was zero, negative or not finite
    InvalidEyeDistance(f64),
    /// Number of eye distances does not match the number of collapsed axes
    AxisCount { expected: usize, got: usize },
}

impl std::fmt::Display for PerspectiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PerspectiveError::InvalidEyeDistance(d) => {
                write!(f, "Eye distance must be positive and finite, got {}", d)
            }
            PerspectiveError::AxisCount { expected, got } => {
                write!(f, "Expected {} eye distances, got {}", expected, got)
            }
        }
    }
}

impl std::error::Error for PerspectiveError {}

/// Chain of single-axis perspective projections from N dimensions to 2
///
/// Eye distances are ordered highest axis first: `[eye_w, eye_z]` for 4D,
/// `[eye_z]` for 3D.
#[derive(Clone, Debug, PartialEq)]
pub struct Perspective<const N: usize> {
    eye_distances: Vec<f64>,
}

impl<const N: usize> Perspective<N> {
    /// Build a projection chain, validating every eye distance
    pub fn new(eye_distances: &[f64]) -> Result<Self, PerspectiveError> {
        let expected = N.saturating_sub(2);
        if eye_distances.len() != expected {
            return Err(PerspectiveError::AxisCount {
                expected,
                got: eye_distances.len(),
            });
        }
        if let Some(&bad) = eye_distances.iter().find(|d| !(d.is_finite() && **d > 0.0)) {
            return Err(PerspectiveError::InvalidEyeDistance(bad));
        }
        Ok(Self {
            eye_distances: eye_distances.to_vec(),
        })
    }

    /// The same eye distance for every collapsed axis
    pub fn uniform(eye_distance: f64) -> Result<Self, PerspectiveError> {
        Self::new(&vec![eye_distance; N.saturating_sub(2)])
    }

    /// Eye distances, highest axis first
    pub fn eye_distances(&self) -> &[f64] {
        &self.eye_distances
    }

    /// Project a vector down to its final (x, y)
    pub fn project(&self, v: &Vector<N>) -> [f64; 2] {
        project(v, &self.eye_distances)
    }
}

/// Project `v` to 2D, collapsing axes from the highest down to z
///
/// `eye_distances[i]` is the eye distance for axis `N - 1 - i`. Callers must
/// pass positive eye distances; [`Perspective`] checks that once up front.
pub fn project<const N: usize>(v: &Vector<N>, eye_distances: &[f64]) -> [f64; 2] {
    debug_assert_eq!(eye_distances.len(), N.saturating_sub(2));

    let mut p = *v;
    for (axis, &eye) in (2..N).rev().zip(eye_distances.iter()) {
        let k = perspective_factor(eye, p[axis]);
        p.scale_leading(axis, k);
    }
    [p[0], p[1]]
}

/// Integer pixel coordinate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Maps projected 2D coordinates onto a pixel surface
///
/// `screen = size / 2 + coord * (size / scale_factor)`; the scale factor is
/// chosen so the projected shape fits the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub scale_factor: f64,
}

impl Viewport {
    pub const fn new(width: u32, height: u32, scale_factor: f64) -> Self {
        Self {
            width,
            height,
            scale_factor,
        }
    }

    /// Map a projected point to the nearest pixel
    pub fn transform(&self, p: [f64; 2]) -> ScreenPoint {
        ScreenPoint::new(
            Self::map_axis(self.width, self.scale_factor, p[0]),
            Self::map_axis(self.height, self.scale_factor, p[1]),
        )
    }

    #[inline]
    fn map_axis(size: u32, scale_factor: f64, coord: f64) -> i32 {
        let half = (size >> 1) as f64;
        (half + coord * (size as f64 / scale_factor)).round() as i32
    }
}
