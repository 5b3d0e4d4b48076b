//! Software Rasterization
//!
//! A 16-bit pixel surface and the integer line drawing used to render
//! wireframes into it.
//!
//! ## Key Components
//!
//! - [`PixelBuffer`] - RGB565 pixels with explicit width, height and stride
//! - [`PixelFormat`] - packing 8-bit channels into native pixels
//! - [`draw_line`] / [`LinePath`] - Bresenham line rasterization

pub mod color;
pub mod line;
pub mod pixel_buffer;

pub use color::PixelFormat;
pub use line::{draw_line, draw_line_unchecked, LinePath};
pub use pixel_buffer::{PixelBuffer, Rect};
