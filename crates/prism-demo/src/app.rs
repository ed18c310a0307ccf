use prism_engine::core::{App, AppControl, FrameCtx, FrameOutcome};
use prism_engine::paint::Color;
use prism_engine::time::FrameTime;
use prism_shader::ShaderProgramSource;

use crate::renderer::SceneRenderer;
use crate::spectrum::{Phase, Spectrum};

/// Ties the animation to the renderer: one `Spectrum::step` per presented frame.
pub struct PrismApp {
    renderer: SceneRenderer,
    spectrum: Spectrum,
    phase: Phase,
    cycles: u64,
    /// Frames presented so far.
    presented: u64,
    /// Value of `presented` when the current cycle began.
    cycle_start_frame: u64,
    cycle_secs: f32,
}

impl PrismApp {
    pub fn new(source: ShaderProgramSource) -> Self {
        let spectrum = Spectrum::new();
        Self {
            renderer: SceneRenderer::new(source),
            phase: spectrum.phase(),
            spectrum,
            cycles: 0,
            presented: 0,
            cycle_start_frame: 0,
            cycle_secs: 0.0,
        }
    }

    fn finish_frame(&mut self, outcome: FrameOutcome, time: FrameTime) -> AppControl {
        match outcome {
            FrameOutcome::Presented => {
                self.advance(time);
                AppControl::Continue
            }
            FrameOutcome::Skipped => AppControl::Continue,
            FrameOutcome::Exit => AppControl::Exit,
        }
    }

    fn advance(&mut self, time: FrameTime) {
        self.presented += 1;
        self.cycle_secs += time.dt;

        if self.spectrum.step() {
            self.cycles += 1;
            log::info!(
                "spectrum cycle {} complete: {} frames in {:.2}s",
                self.cycles,
                self.presented - self.cycle_start_frame,
                self.cycle_secs
            );
            self.cycle_start_frame = self.presented;
            self.cycle_secs = 0.0;
        }

        let phase = self.spectrum.phase();
        if phase != self.phase {
            log::debug!(
                "phase {:?} -> {:?} at frame {}",
                self.phase,
                phase,
                time.frame_index
            );
            self.phase = phase;
        }
    }
}

impl App for PrismApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let colors = self.spectrum.colors();
        let renderer = &mut self.renderer;
        let mut failed = false;

        let outcome = ctx.render(Color::BLACK, |rctx, target| {
            if let Err(e) = renderer.render(rctx, target, &colors) {
                log::error!("{e:#}");
                failed = true;
            }
        });

        if failed {
            return AppControl::Exit;
        }
        self.finish_frame(outcome, ctx.time)
    }
}
