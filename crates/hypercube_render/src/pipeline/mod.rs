//! Rendering pipeline components
//!
//! This module contains the pipeline that puts a CPU-rasterized frame on
//! screen.

pub mod present_pipeline;

pub use present_pipeline::{bytes_per_row, PresentPipeline, FRAME_TEXTURE_FORMAT, FULLSCREEN_VERTEX_COUNT};
