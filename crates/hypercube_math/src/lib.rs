//! N-dimensional Mathematics for the Hypercube Renderer
//!
//! This crate provides the geometry and transform pipeline: vectors,
//! planar rotations, perspective projection and the canonical hypercube
//! wireframe.
//!
//! ## Core Types
//!
//! - [`Vector`] - fixed-size n-dimensional point with named and indexed access
//! - [`RotationPlane`] / [`AngleSet`] - rotation planes and per-plane angles
//! - [`Perspective`] - chained single-axis perspective projection
//! - [`Viewport`] / [`ScreenPoint`] - mapping to integer pixels
//!
//! ## Geometry
//!
//! - [`Hypercube`] - vertices, edges and color bands of a cube or tesseract

mod vector;
mod dimension;
pub mod rotation;
pub mod projection;
pub mod hypercube;

pub use vector::{Vector, Vector3, Vector4};
pub use dimension::{Dimension, DimensionError};
pub use rotation::{AngleSet, RotationPlane, PLANES_3D, PLANES_4D};
pub use projection::{Perspective, PerspectiveError, ScreenPoint, Viewport};
pub use hypercube::{Edge, EdgeBand, Hypercube};
