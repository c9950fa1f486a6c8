// Stroke rasterizer: circle stamps, DDA lines and the 4-point spline.
// Every pixel write goes through `set_pixel`/`clear_pixel`, which journal
// the change into the open stroke so it can be undone.
use crate::canvas::{BACKGROUND, Canvas};
use crate::color::Color;
use crate::journal::UndoHistory;
use crate::vec2::{Point, Vec2f};

/// Tangent scale of the Hermite spline (Catmull-Rom).
const SPLINE_TENSION: f32 = 0.5;
/// Number of segments the spline between p2 and p3 is cut into.
const SPLINE_SEGMENTS: usize = 5;

/// Upper bound on the stamped radius; keeps `r * r` well inside i32.
pub const MAX_RADIUS: i32 = 1024;

/// Brush parameters for one rasterization call.
#[derive(Debug, Clone, Copy)]
pub struct Brush {
    pub color: Color,
    /// Nominal radius in pixels before pressure scaling.
    pub radius: i32,
    /// Effective pressure scale applied to `radius`.
    pub scale: f32,
    /// False when the stroke started inside the right-edge exclusion band.
    pub enabled: bool,
}

impl Brush {
    pub fn effective_radius(&self) -> i32 {
        ((self.radius as f32 * self.scale) as i32).min(MAX_RADIUS)
    }
}

/// Mutable view over the canvas + journal used while painting a stroke.
pub struct Painter<'a> {
    canvas: &'a mut Canvas,
    history: &'a mut UndoHistory,
    brush: Brush,
}

impl<'a> Painter<'a> {
    pub fn new(canvas: &'a mut Canvas, history: &'a mut UndoHistory, brush: Brush) -> Self {
        Self { canvas, history, brush }
    }

    /// Fill every point with `dx²+dy² <= r²` around `origin` at full intensity.
    pub fn stamp_circle(&mut self, origin: Point) {
        if !self.brush.enabled {
            return;
        }
        let r = self.brush.effective_radius();
        for y in -r..=r {
            for x in -r..=r {
                if x * x + y * y <= r * r {
                    self.set_pixel(Point::new(origin.x + x, origin.y + y), 1.0);
                }
            }
        }
    }

    /// Stamp circles along the line, stepping one pixel along the dominant axis.
    pub fn draw_line(&mut self, from: Point, to: Point) {
        if from == to {
            self.stamp_circle(from);
            return;
        }

        let a = from.as_f32();
        let d = (to - from).as_f32();

        if d.x.abs() > d.y.abs() {
            // x-major: y follows the slope
            let slope = d.y / d.x;
            for x in from.x.min(to.x)..=from.x.max(to.x) {
                let y = a.y + (x as f32 - a.x) * slope;
                self.stamp_circle(Point::new(x, y as i32));
            }
        } else {
            let slope = d.x / d.y;
            for y in from.y.min(to.y)..=from.y.max(to.y) {
                let x = a.x + (y as f32 - a.y) * slope;
                self.stamp_circle(Point::new(x as i32, y));
            }
        }
    }

    /// Curve from `p2` to `p3`, tangents taken from `p1` and `p4`.
    pub fn draw_spline(&mut self, p1: Point, p2: Point, p3: Point, p4: Point) {
        let samples = spline_samples(p1, p2, p3, p4);
        for pair in samples.windows(2) {
            self.draw_line(pair[0], pair[1]);
        }
    }

    /// Brighten-only write; the change (if any) is journaled.
    pub fn set_pixel(&mut self, pos: Point, intensity: f32) {
        if !self.canvas.contains(pos) {
            return;
        }
        let px = self.canvas.pixel_mut(pos);
        let old = *px;
        *px = old.brightened(self.brush.color, intensity);
        let new = *px;
        if new != old {
            self.history.record(pos, new - old);
        }
    }

    /// Force a pixel back to background; the change (if any) is journaled.
    pub fn clear_pixel(&mut self, pos: Point) {
        if !self.canvas.contains(pos) {
            return;
        }
        let px = self.canvas.pixel_mut(pos);
        let old = *px;
        *px = BACKGROUND;
        if *px != old {
            self.history.record(pos, BACKGROUND - old);
        }
    }
}

/// Sample the cubic Hermite curve between `p2` and `p3` at
/// `t = 0, 0.2, .., 1.0`, truncating to pixel coordinates.
pub fn spline_samples(p1: Point, p2: Point, p3: Point, p4: Point) -> [Point; SPLINE_SEGMENTS + 1] {
    let (p1, p2, p3, p4) = (p1.as_f32(), p2.as_f32(), p3.as_f32(), p4.as_f32());
    let m2 = (p3 - p1) * SPLINE_TENSION;
    let m3 = (p4 - p2) * SPLINE_TENSION;

    let mut out = [Point::default(); SPLINE_SEGMENTS + 1];
    for (i, slot) in out.iter_mut().enumerate() {
        let t = i as f32 / SPLINE_SEGMENTS as f32;
        let (t2, t3) = (t * t, t * t * t);
        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h10 = t3 - 2.0 * t2 + t;
        let h11 = t3 - t2;
        let p: Vec2f = p2 * h00 + p3 * h01 + m2 * h10 + m3 * h11;
        *slot = p.trunc();
    }
    out
}
