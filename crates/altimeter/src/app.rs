//! Per-frame instrument orchestration.

use std::io::Write;

use gauge_engine::core::{App, AppControl, FrameCtx};
use gauge_engine::device::Texture2d;
use gauge_engine::input::{Key, KeyEvent, KeyState};
use gauge_engine::paint::Color;
use gauge_engine::render::{DrawList, InstrumentPainter};

use crate::altitude::{Altitude, sweep_angle};
use crate::config::AltimeterConfig;
use crate::{dial, needle};

const CLEAR_COLOR: Color = Color::opaque(0.5, 0.5, 0.5);

pub struct AltimeterApp {
    config: AltimeterConfig,
    altitude: Altitude,
    list: DrawList,
    painter: Option<InstrumentPainter>,
}

impl AltimeterApp {
    pub fn new(config: AltimeterConfig) -> Self {
        let altitude = Altitude::new(config.step);
        Self {
            config,
            altitude,
            list: DrawList::new(),
            painter: None,
        }
    }

    /// Regenerates the frame's geometry in paint order: textured face, rim
    /// outline, visibility flag, the three needles coarse to fine, then the
    /// hub on top.
    fn record_scene(&mut self) {
        let feet = self.altitude.feet();
        let list = &mut self.list;
        list.clear();

        list.push_triangles(&dial::dial_face(dial::FACE_SEGMENTS));
        list.push_line_strip(&dial::dial_outline(dial::OUTLINE_SEGMENTS, dial::OUTLINE_COLOR));
        list.push_triangles(&dial::flag_trapezoid(
            dial::FLAG_LEFT,
            dial::FLAG_BOTTOM,
            dial::FLAG_RIGHT,
            dial::FLAG_TOP,
            dial::FLAG_INSET,
            dial::flag_color(feet),
        ));

        for spec in [needle::COARSE, needle::MEDIUM, needle::FINE] {
            let angle = sweep_angle(feet, spec.full_scale);
            list.push_triangles(&needle::tessellate(&spec, angle));
        }

        list.push_triangles(&dial::disc(dial::HUB_RADIUS, dial::HUB_SEGMENTS, dial::HUB_OUTER_COLOR));
        list.push_triangles(&dial::disc(
            dial::HUB_RADIUS / 2.5,
            dial::HUB_SEGMENTS,
            dial::HUB_INNER_COLOR,
        ));
    }

    // Readout, not a diagnostic: overwrite the same console line each frame.
    fn print_readout(&self) {
        print!("\raltitude: {:>7.0} ft", self.altitude.feet());
        let _ = std::io::stdout().flush();
    }
}

impl App for AltimeterApp {
    fn on_key(&mut self, event: KeyEvent) -> AppControl {
        if event.state != KeyState::Pressed {
            return AppControl::Continue;
        }

        match event.key {
            Key::ArrowUp => self.altitude.increase(),
            Key::ArrowDown => self.altitude.decrease(),
            _ => {}
        }

        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.record_scene();
        self.print_readout();

        // Texture load happens once, on the first frame with a live device.
        let AltimeterApp { config, list, painter, .. } = self;
        let painter = painter.get_or_insert_with(|| {
            let device = ctx.gpu.device();
            let queue = ctx.gpu.queue();

            let texture = match Texture2d::from_path(device, queue, &config.texture_path) {
                Ok(texture) => texture,
                Err(err) => {
                    log::error!(
                        "failed to load dial texture {}: {err:#}",
                        config.texture_path.display()
                    );
                    Texture2d::placeholder(device, queue)
                }
            };
            InstrumentPainter::new(texture)
        });

        ctx.render(CLEAR_COLOR, |rctx, target| painter.render(rctx, target, list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_engine::render::Topology;

    fn recorded(feet_steps: u32) -> AltimeterApp {
        let mut app = AltimeterApp::new(AltimeterConfig::default());
        for _ in 0..feet_steps {
            app.altitude.increase();
        }
        app.record_scene();
        app
    }

    #[test]
    fn scene_paints_face_outline_then_shapes() {
        let app = recorded(0);
        let batches = app.list.batches();

        // Face triangles, outline strip, then everything else merged back
        // into one triangle batch.
        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].topology, Topology::TriangleList);
        assert_eq!(batches[1].topology, Topology::LineStrip);
        assert_eq!(batches[2].topology, Topology::TriangleList);
    }

    #[test]
    fn scene_face_comes_first_and_is_textured() {
        let app = recorded(0);
        let first = app.list.vertices()[0];
        assert_eq!(first.textured, 1.0);
    }

    #[test]
    fn scene_vertex_count_is_stable_across_altitudes() {
        assert_eq!(
            recorded(0).list.vertices().len(),
            recorded(1_000).list.vertices().len()
        );
    }

    #[test]
    fn arrow_keys_adjust_altitude() {
        let mut app = AltimeterApp::new(AltimeterConfig::default());
        let press = |key| KeyEvent { key, state: KeyState::Pressed, repeat: false };

        app.on_key(press(Key::ArrowUp));
        app.on_key(press(Key::ArrowUp));
        assert_eq!(app.altitude.feet(), 20.0);

        app.on_key(press(Key::ArrowDown));
        assert_eq!(app.altitude.feet(), 10.0);

        // Releases are ignored.
        app.on_key(KeyEvent { key: Key::ArrowDown, state: KeyState::Released, repeat: false });
        assert_eq!(app.altitude.feet(), 10.0);
    }
}
