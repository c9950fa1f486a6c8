// Window + input plumbing for the desktop host.
// Turns minifb's level-triggered mouse/key state into the per-tick
// `FrameInput` the drawing session consumes, and shows the committed canvas.

use crate::error::Error;
use crate::types::{FrameBuffer, FrameInput, PointerSample};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};
use std::time::Duration;

/// Key that plays the role of the platform back gesture.
const BACK_KEY: Key = Key::Backspace;

pub struct Drawer {
    window: Window,
    primary_was_down: bool,
}

impl Drawer {
    /// Create a resizable window; the canvas follows its client size.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: true, ..WindowOptions::default() };
        let window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window, primary_was_down: false })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current client area in pixels.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Snapshot this tick's input. The mouse has no pressure sensor, so
    /// samples always report 1.0.
    pub fn poll(&mut self, dt: Duration) -> FrameInput {
        let down = self.window.get_mouse_down(MouseButton::Left);
        let pressed = down && !self.primary_was_down;
        let released = !down && self.primary_was_down;
        self.primary_was_down = down;

        let pointer = if down {
            self.window
                .get_mouse_pos(MouseMode::Discard)
                .map(|(x, y)| PointerSample::new(x as i32, y as i32, 1.0))
        } else {
            None
        };

        FrameInput {
            size: self.size(),
            pointer,
            primary_pressed: pressed,
            primary_released: released,
            back_held: self.window.is_key_down(BACK_KEY),
            back_released: self.window.is_key_released(BACK_KEY),
            dt,
        }
    }
}
