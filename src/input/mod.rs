//! Input handling module
//!
//! Maps raw window events to the few actions the animation reacts to.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};
