//! N-dimensional vector type

/// A point in N-dimensional space
///
/// Coordinates live in a fixed-size array so rotation can address axes by
/// index, while `x`/`y`/`z`/`w` give readable access where the axis is known.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<const N: usize> {
    coords: [f64; N],
}

/// A point in 3D space
pub type Vector3 = Vector<3>;
/// A point in 4D space (w is the 4th spatial axis)
pub type Vector4 = Vector<4>;

impl<const N: usize> Vector<N> {
    /// Number of coordinates
    pub const DIM: usize = N;

    /// The origin
    pub const ZERO: Self = Self { coords: [0.0; N] };

    /// Create a vector from its coordinates
    #[inline]
    pub const fn from_array(coords: [f64; N]) -> Self {
        Self { coords }
    }

    /// Coordinates as an array
    #[inline]
    pub fn to_array(self) -> [f64; N] {
        self.coords
    }

    /// Coordinates as a slice
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.coords[1]
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.coords[2]
    }

    /// Multiply the first `count` coordinates by `factor`, leaving the rest untouched
    #[inline]
    pub fn scale_leading(&mut self, count: usize, factor: f64) {
        for c in &mut self.coords[..count] {
            *c *= factor;
        }
    }

    /// Largest per-axis difference to another vector
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// True when every coordinate is finite
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }
}

impl Vector<3> {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { coords: [x, y, z] }
    }
}

impl Vector<4> {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { coords: [x, y, z, w] }
    }

    #[inline]
    pub fn w(&self) -> f64 {
        self.coords[3]
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    fn from(coords: [f64; N]) -> Self {
        Self { coords }
    }
}

impl<const N: usize> std::ops::Index<usize> for Vector<N> {
    type Output = f64;
    #[inline]
    fn index(&self, axis: usize) -> &f64 {
        &self.coords[axis]
    }
}

impl<const N: usize> std::ops::IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, axis: usize) -> &mut f64 {
        &mut self.coords[axis]
    }
}
