//! Prism engine crate.
//!
//! This crate owns the platform + GPU runtime pieces the demo builds on:
//! window and event loop, device/surface, frame timing, shader compilation
//! and per-draw uniform storage.

pub mod core;
pub mod device;
pub mod time;
pub mod window;

pub mod logging;
pub mod paint;
pub mod render;
