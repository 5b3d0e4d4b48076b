//! Frame Presentation Library
//!
//! This crate provides the wgpu plumbing that shows a software-rasterized
//! [`PixelBuffer`](hypercube_raster::PixelBuffer) in a window.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::PresentPipeline`] - uploads the 16-bit frame and draws it full-screen

pub mod context;
pub mod pipeline;

pub use context::{RenderContext, RenderContextError};
pub use pipeline::PresentPipeline;

// Re-export the buffer type the pipeline consumes
pub use hypercube_raster::{PixelBuffer, PixelFormat};
