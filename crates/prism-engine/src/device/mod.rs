//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring, submitting and presenting frames for `core::FrameCtx::render`

mod context;
mod init;
mod surface;

pub use context::Gpu;
pub use init::GpuInit;
pub(crate) use surface::SurfaceErrorAction;
