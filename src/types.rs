// Types shared between the host window and the drawing session.
use crate::canvas::Canvas;
use crate::vec2::Point;
use std::time::Duration;

/// What the window displays: one 0x00RRGGBB word per pixel.
#[derive(Clone, Debug, Default)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Copy the whole canvas in, reallocating if the size changed.
    pub fn upload(&mut self, canvas: &Canvas) {
        self.width = canvas.width();
        self.height = canvas.height();
        self.pixels.clear();
        self.pixels.extend(canvas.pixels().iter().map(|c| c.to_0rgb()));
    }
}

/// One pointer reading: position in window pixels, pressure in [0, 1]
/// (1.0 for devices without pressure).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pos: Point,
    pub pressure: f32,
}

impl PointerSample {
    pub fn new(x: i32, y: i32, pressure: f32) -> Self {
        Self { pos: Point::new(x, y), pressure }
    }
}

/// Everything the session needs from the host for one tick.
#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    /// Current display size in pixels.
    pub size: (usize, usize),
    /// Present only while the primary button/touch is down.
    pub pointer: Option<PointerSample>,
    /// Primary went down this tick.
    pub primary_pressed: bool,
    /// Primary went up this tick.
    pub primary_released: bool,
    /// Back gesture is being held.
    pub back_held: bool,
    /// Back gesture was let go this tick.
    pub back_released: bool,
    /// Time since the previous tick.
    pub dt: Duration,
}
