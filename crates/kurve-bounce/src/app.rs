use kurve_engine::core::{App, AppControl, FrameCtx};
use kurve_engine::input::Key;
use kurve_engine::paint::Color;
use kurve_geom::{AnimatedDisc, Bounce, BounceConfig, ShaderParams};

use crate::renderer::BounceRenderer;

/// Per-process demo state: the disc persists for the life of the window and
/// is advanced once per frame.
pub struct BounceApp {
    config: BounceConfig,
    disc: AnimatedDisc,
    paused: bool,
    renderer: BounceRenderer,
}

impl BounceApp {
    pub fn new(config: BounceConfig) -> Self {
        Self {
            disc: config.initial_disc(),
            config,
            paused: false,
            renderer: BounceRenderer::new(),
        }
    }

    /// Advances the simulation by one frame unless paused.
    fn update(&mut self, frame_index: u64) {
        if self.paused {
            return;
        }

        match self.disc.step(self.config.bounds()) {
            Bounce::None => {}
            wall => log::debug!(
                "frame {frame_index}: bounced off {wall:?} wall, x = {:.1}, v = {}",
                self.disc.center.x,
                self.disc.velocity
            ),
        }
    }
}

impl App for BounceApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.key_pressed(Key::Escape) {
            return AppControl::Exit;
        }
        if ctx.input_frame.key_pressed(Key::Space) {
            self.paused = !self.paused;
            log::info!("{}", if self.paused { "paused" } else { "resumed" });
        }

        self.update(ctx.time.frame_index);

        let params = ShaderParams::new(&self.disc, &self.config);
        let renderer = &mut self.renderer;
        ctx.render(Color::YELLOW, |rctx, target| renderer.render(rctx, target, &params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_app_does_not_move() {
        let mut app = BounceApp::new(BounceConfig::default());
        let start = app.disc;
        app.paused = true;
        app.update(0);
        assert_eq!(app.disc, start);

        app.paused = false;
        app.update(1);
        assert_eq!(app.disc.center.x, start.center.x + start.velocity);
    }
}
