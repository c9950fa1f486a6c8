// Pen state and the sliding path window that feeds the spline.
use crate::vec2::Point;

/// Pressure-to-brush-scale tuning (see `Config`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureCurve {
    /// Fraction of the gap to the raw pressure closed every tick.
    pub smoothing: f32,
    /// Scale used for devices that always report 1.0.
    pub no_pressure_scale: f32,
    pub min_scale: f32,
    pub gamma: f32,
}

impl Default for PressureCurve {
    fn default() -> Self {
        Self { smoothing: 0.3, no_pressure_scale: 0.35, min_scale: 0.05, gamma: 0.3 }
    }
}

#[derive(Debug, Clone)]
pub struct Pen {
    pub pos: Point,
    /// Where the current stroke started.
    pub drag_from: Point,
    /// Last raw pressure sample in [0, 1].
    pub pressure: f32,
    effective_pressure: f32,
    curve: PressureCurve,
}

impl Pen {
    pub fn new(curve: PressureCurve) -> Self {
        Self {
            pos: Point::default(),
            drag_from: Point::default(),
            pressure: 1.0,
            effective_pressure: 1.0,
            curve,
        }
    }

    pub fn effective_pressure(&self) -> f32 {
        self.effective_pressure
    }

    /// Per-tick smoothing. A raw reading of exactly 1.0 means the device has
    /// no pressure sensor, so snap instead of easing.
    pub fn update(&mut self) {
        if self.pressure == 1.0 {
            self.effective_pressure = 1.0;
        } else {
            self.effective_pressure +=
                (self.pressure - self.effective_pressure) * self.curve.smoothing;
        }
    }

    /// Multiplier applied to the brush radius.
    pub fn brush_scale(&self) -> f32 {
        if self.effective_pressure == 1.0 {
            self.curve.no_pressure_scale
        } else {
            self.effective_pressure.powf(self.curve.gamma).max(self.curve.min_scale)
        }
    }
}

/// Last up-to-4 pointer positions of the active stroke.
#[derive(Debug, Clone, Default)]
pub struct PathWindow {
    points: [Point; 4],
    len: usize,
}

impl PathWindow {
    pub const CAPACITY: usize = 4;

    /// Append a point. When full, the oldest point is dropped first.
    pub fn push(&mut self, p: Point) {
        if self.len == Self::CAPACITY {
            self.pop_front();
        }
        self.points[self.len] = p;
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<Point> {
        if self.len == 0 {
            return None;
        }
        let first = self.points[0];
        self.points.copy_within(1..self.len, 0);
        self.len -= 1;
        Some(first)
    }

    /// Reset to a single point.
    pub fn restart(&mut self, p: Point) {
        self.clear();
        self.push(p);
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points[..self.len]
    }
}
