//! Application systems
//!
//! Window and GPU presentation, kept out of main.rs so the event loop only
//! wires them together.

mod render;
mod window;

pub use render::{RenderError, RenderSystem};
pub use window::{WindowError, WindowSystem};
