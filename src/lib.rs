//! Hypercube - rotating wireframe cube and tesseract
//!
//! The binary wires these pieces to a winit event loop:
//!
//! - [`animation`] - per-frame rotation, projection and drawing
//! - [`config`] - layered figment configuration
//! - [`input`] - keyboard and window events to actions
//! - [`systems`] - window and GPU presentation

pub mod animation;
pub mod config;
pub mod error;
pub mod input;
pub mod systems;

pub use error::InitError;
