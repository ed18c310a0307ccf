//! Color values handed to shaders and clear passes.

mod color;

pub use color::Color;
