// Drawing session: owns the canvas, undo history, pen and path window, and
// runs the per-frame controller. The host feeds one `FrameInput` per tick
// and presents `frame()` afterwards.
use crate::canvas::Canvas;
use crate::config::Config;
use crate::journal::UndoHistory;
use crate::pen::{PathWindow, Pen};
use crate::raster::{Brush, Painter};
use crate::types::{FrameBuffer, FrameInput, PointerSample};
use crate::vec2::Point;
use std::time::Duration;

/// Accumulates tick time while the back gesture is held.
#[derive(Debug, Default)]
struct Stopwatch {
    elapsed: Duration,
}

impl Stopwatch {
    fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn advance(&mut self, dt: Duration) {
        self.elapsed += dt;
    }

    fn time(&self) -> Duration {
        self.elapsed
    }
}

pub struct Session {
    config: Config,
    canvas: Canvas,
    history: UndoHistory,
    pen: Pen,
    path: PathWindow,
    last_sample: Option<PointerSample>,
    back_timer: Stopwatch,
    /// Last committed canvas, in display format.
    screen: FrameBuffer,
}

impl Session {
    pub fn new(config: Config, width: usize, height: usize) -> Self {
        let pen = Pen::new(config.pressure_curve());
        let mut session = Self {
            config,
            canvas: Canvas::new(width, height),
            history: UndoHistory::new(),
            pen,
            path: PathWindow::default(),
            last_sample: None,
            back_timer: Stopwatch::default(),
            screen: FrameBuffer::default(),
        };
        session.commit_canvas();
        session
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// What the host should present this frame.
    pub fn frame(&self) -> &FrameBuffer {
        &self.screen
    }

    /// One frame of the controller.
    pub fn tick(&mut self, input: &FrameInput) {
        let (w, h) = input.size;
        if (w, h) != (self.canvas.width(), self.canvas.height()) {
            self.on_screen_size_changed(w, h);
        }

        match input.pointer {
            None => {
                // Tracking lost or button released: finish with the last known sample.
                if self.history.is_stroke_open() && input.primary_released {
                    if let Some(last) = self.last_sample {
                        self.pen.pressure = last.pressure;
                        self.on_pen_drag(last.pos);
                    }
                    self.on_pen_up();
                }
            }
            Some(sample) => {
                self.last_sample = Some(sample);
                self.pen.pressure = sample.pressure;
                if input.primary_pressed {
                    self.on_pen_down(sample.pos);
                } else {
                    self.on_pen_drag(sample.pos);
                }
            }
        }

        self.handle_back_gesture(input);
        self.pen.update();
        self.commit_canvas();
    }

    /// Tap back to undo, hold it to clear.
    fn handle_back_gesture(&mut self, input: &FrameInput) {
        let long_press = self.config.long_press();
        if input.back_released && self.back_timer.time() < long_press {
            self.undo();
        } else if !input.back_held {
            self.back_timer.restart();
        } else {
            self.back_timer.advance(input.dt);
            if self.back_timer.time() >= long_press {
                self.clear_canvas();
            }
        }
    }

    fn on_screen_size_changed(&mut self, width: usize, height: usize) {
        log::info!(
            "Screen resized {}x{} -> {}x{}",
            self.canvas.width(),
            self.canvas.height(),
            width,
            height
        );
        self.canvas.resize(width, height);
        self.commit_canvas();
    }

    pub fn undo(&mut self) {
        if self.history.undo(&mut self.canvas) {
            self.path.clear();
            self.commit_canvas();
        }
    }

    pub fn clear_canvas(&mut self) {
        if !self.history.is_empty() || self.history.is_stroke_open() {
            log::info!("Clearing canvas ({} strokes dropped)", self.history.len());
        }
        self.canvas.clear();
        self.history.clear();
        self.path.clear();
        self.commit_canvas();
    }

    pub fn on_pen_down(&mut self, pos: Point) {
        if self.history.is_stroke_open() {
            // release was missed; finish the pending tail first
            self.on_pen_up();
        }
        log::debug!("stroke started at ({}, {})", pos.x, pos.y);
        self.history.begin_stroke();
        self.pen.pos = pos;
        self.pen.drag_from = pos;
        self.path.restart(pos);
        self.painter().stamp_circle(pos);
        self.commit_canvas();
    }

    pub fn on_pen_drag(&mut self, pos: Point) {
        if !self.history.is_stroke_open() {
            self.on_pen_down(pos);
            return;
        }
        if pos == self.pen.pos {
            return;
        }
        self.pen.pos = pos;
        self.path.push(pos);

        match *self.path.as_slice() {
            [a, b] => self.painter().draw_line(a, b),
            [p1, p2, p3, p4] => {
                self.painter().draw_spline(p1, p2, p3, p4);
                self.commit_canvas();
                self.path.pop_front();
            }
            _ => {}
        }
    }

    pub fn on_pen_up(&mut self) {
        match *self.path.as_slice() {
            [a, b] => self.painter().draw_line(a, b),
            [p1, p2, p3] => {
                let p4 = p3 + (p3 - p2);
                self.painter().draw_spline(p1, p2, p3, p4);
            }
            _ => {}
        }
        self.path.clear();
        self.commit_canvas();
        self.history.end_stroke();
    }

    fn commit_canvas(&mut self) {
        self.screen.upload(&self.canvas);
    }

    fn brush(&self) -> Brush {
        let right_limit = self.canvas.width() as i64 - self.config.edge_band as i64;
        Brush {
            color: self.config.brush_color,
            radius: self.config.brush_radius,
            scale: self.pen.brush_scale(),
            enabled: (self.pen.drag_from.x as i64) < right_limit,
        }
    }

    fn painter(&mut self) -> Painter<'_> {
        let brush = self.brush();
        Painter::new(&mut self.canvas, &mut self.history, brush)
    }
}
