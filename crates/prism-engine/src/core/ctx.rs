use winit::window::Window;

use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

/// What happened to the frame requested through [`FrameCtx::render`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameOutcome {
    /// `draw` ran and the frame was presented.
    Presented,
    /// Nothing was drawn: the window is minimized or the surface needs another try.
    Skipped,
    /// The surface failed for good; the app should exit.
    Exit,
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`] and
    /// [`RenderTarget`], then presents the frame.
    ///
    /// `draw` only runs when the result is [`FrameOutcome::Presented`].
    pub fn render<F>(&mut self, clear: Color, draw: F) -> FrameOutcome
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        if !self.gpu.is_drawable() {
            return FrameOutcome::Skipped;
        }

        let texture = match self.gpu.acquire() {
            Ok(texture) => texture,
            Err(SurfaceErrorAction::Fatal) => {
                log::error!("fatal surface error; exiting");
                return FrameOutcome::Exit;
            }
            Err(_) => return FrameOutcome::Skipped,
        };

        let view = texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.gpu.encoder();

        {
            let mut target = RenderTarget::new(&mut encoder, &view);
            target.clear(clear);
            draw(&self.gpu.render_ctx(), &mut target);
        }

        drop(view);
        self.window.pre_present_notify();
        self.gpu.present(encoder, texture);

        FrameOutcome::Presented
    }
}
