use glam::Vec2;
use nalgebra::Vector2;
use tiny_skia::*;

use crate::components::{PointMass, Role};
use crate::rendering::{Frame, TraceBuffer, Traces};
use crate::utils::{ConfigError, EnvError};
use crate::world::WorldState;

const TRACE_WIDTH: f32 = 2.0;

/// Rasterises a [`WorldState`] onto a square canvas.
///
/// World coordinates in `[-L, L]` map linearly onto `[0, window_size]`.
/// World +y points up while canvas rows grow downwards, so the vertical
/// axis is inverted:
///
/// ```text
/// px = (1 + x / L) * W / 2
/// py = (1 - y / L) * W / 2
/// ```
pub struct Renderer {
    window_size: u32,
    max_location: f64,
    canvas: Pixmap,
}

impl Renderer {
    pub fn new(window_size: u32, max_location: f64) -> Result<Self, EnvError> {
        let canvas = Pixmap::new(window_size, window_size).ok_or_else(|| {
            ConfigError::invalid("window_size", window_size, "cannot allocate canvas")
        })?;

        Ok(Self {
            window_size,
            max_location,
            canvas,
        })
    }

    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    /// Project a world position onto the canvas.
    pub fn to_canvas(&self, position: &Vector2<f64>) -> Vec2 {
        let half = self.window_size as f64 / 2.0;
        Vec2::new(
            ((1.0 + position.x / self.max_location) * half) as f32,
            ((1.0 - position.y / self.max_location) * half) as f32,
        )
    }

    /// Draw one frame. Traces, if given, are drawn underneath the markers.
    pub fn render(&mut self, world: &WorldState, traces: Option<&Traces>) -> Frame {
        self.canvas.fill(Color::WHITE);

        if let Some(traces) = traces {
            for object in world.objects() {
                self.draw_trace(object.role(), traces.get(object.role()));
            }
        }

        for object in world.objects() {
            self.draw_marker(object);
        }

        Frame::from_pixmap(&self.canvas)
    }

    fn paint_for(role: Role) -> Paint<'static> {
        let [r, g, b] = role.color();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, 255);
        paint.anti_alias = true;
        paint
    }

    fn draw_trace(&mut self, role: Role, trace: &TraceBuffer) {
        if trace.len() < 2 {
            return;
        }

        let mut pb = PathBuilder::new();
        for (idx, position) in trace.iter().enumerate() {
            let point = self.to_canvas(position);
            if idx == 0 {
                pb.move_to(point.x, point.y);
            } else {
                pb.line_to(point.x, point.y);
            }
        }
        let Some(path) = pb.finish() else {
            return;
        };

        let mut stroke = Stroke::default();
        stroke.width = TRACE_WIDTH;
        stroke.line_cap = LineCap::Round;
        stroke.line_join = LineJoin::Round;

        self.canvas.stroke_path(
            &path,
            &Self::paint_for(role),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    fn draw_marker(&mut self, object: &PointMass) {
        let center = self.to_canvas(&object.position);
        let radius = object.role().marker_radius();
        let Some(circle) = PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };

        self.canvas.fill_path(
            &circle,
            &Self::paint_for(object.role()),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}
