//! Planar rotations in n-dimensional space
//!
//! Rotations happen in planes rather than around axes. A 3D cube rotates in
//! 3 planes (XY, XZ, YZ); a tesseract in 6 (XY, XZ, XW, YZ, YW, ZW).
//!
//! Planar rotations do not commute, so a set of angles is always applied in
//! the order of its plane list.

use crate::Vector;

/// A rotation plane, named by the two axes it rotates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationPlane {
    /// XY plane (rotation around Z in 3D)
    XY,
    /// XZ plane (rotation around Y in 3D)
    XZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YZ plane (rotation around X in 3D)
    YZ,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

/// Rotation planes of a 3D cube, in application order
pub const PLANES_3D: [RotationPlane; 3] = [RotationPlane::XY, RotationPlane::XZ, RotationPlane::YZ];

/// Rotation planes of a tesseract, in application order
pub const PLANES_4D: [RotationPlane; 6] = [
    RotationPlane::XY,
    RotationPlane::XZ,
    RotationPlane::XW,
    RotationPlane::YZ,
    RotationPlane::YW,
    RotationPlane::ZW,
];

impl RotationPlane {
    /// Axis indices `(from, to)` spanned by this plane
    #[inline]
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YZ => (1, 2),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }

    /// True if the plane involves the W axis
    #[inline]
    pub const fn involves_w(self) -> bool {
        self.axes().1 == 3
    }

    /// Short uppercase name, e.g. "XW"
    pub const fn name(self) -> &'static str {
        match self {
            RotationPlane::XY => "XY",
            RotationPlane::XZ => "XZ",
            RotationPlane::XW => "XW",
            RotationPlane::YZ => "YZ",
            RotationPlane::YW => "YW",
            RotationPlane::ZW => "ZW",
        }
    }
}

impl std::fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rotate `v` by `angle` radians within a single plane
///
/// `from' = cos·from − sin·to`, `to' = sin·from + cos·to`
#[inline]
pub fn rotate_in_plane<const N: usize>(v: &mut Vector<N>, plane: RotationPlane, angle: f64) {
    let (from, to) = plane.axes();
    debug_assert!(to < N, "plane {} needs at least {} axes", plane, to + 1);

    let (s, c) = angle.sin_cos();
    let a = v[from];
    let b = v[to];
    v[from] = c * a - s * b;
    v[to] = s * a + c * b;
}

/// Apply one planar rotation per plane, in order
pub fn rotate<const N: usize, const P: usize>(
    v: &mut Vector<N>,
    planes: &[RotationPlane; P],
    angles: &AngleSet<P>,
) {
    for (&plane, &angle) in planes.iter().zip(angles.as_array().iter()) {
        rotate_in_plane(v, plane, angle);
    }
}

/// One accumulated angle (radians) per rotation plane
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleSet<const P: usize> {
    angles: [f64; P],
}

impl<const P: usize> AngleSet<P> {
    /// All angles zero
    pub const fn zero() -> Self {
        Self { angles: [0.0; P] }
    }

    pub const fn from_array(angles: [f64; P]) -> Self {
        Self { angles }
    }

    #[inline]
    pub fn as_array(&self) -> &[f64; P] {
        &self.angles
    }

    #[inline]
    pub fn get(&self, plane_index: usize) -> f64 {
        self.angles[plane_index]
    }

    #[inline]
    pub fn set(&mut self, plane_index: usize, angle: f64) {
        self.angles[plane_index] = angle;
    }

    /// Add `delta` to the angle of one plane
    #[inline]
    pub fn advance(&mut self, plane_index: usize, delta: f64) {
        self.angles[plane_index] += delta;
    }

    /// True when every angle is finite
    pub fn is_finite(&self) -> bool {
        self.angles.iter().all(|a| a.is_finite())
    }
}

impl<const P: usize> Default for AngleSet<P> {
    fn default() -> Self {
        Self::zero()
    }
}
