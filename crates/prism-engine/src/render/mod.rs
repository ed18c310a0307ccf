//! GPU rendering helpers.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into a
//! [`RenderTarget`] handed out by `core::FrameCtx::render`.
//!
//! Convention:
//! - geometry is given directly in normalized device coordinates
//! - per-draw values live in a [`DynamicUniformBuffer`] addressed by dynamic offset

mod ctx;
pub mod shader;
mod uniform;

pub use ctx::{RenderCtx, RenderTarget};
pub use shader::{compile_stage, validate_stage, ShaderCompileError};
pub use uniform::DynamicUniformBuffer;
