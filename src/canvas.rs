// The authoritative paint surface: a dense row-major grid of `Color`.
// Invariant: `pixels.len() == width * height`.
use crate::color::Color;
use crate::vec2::Point;

/// Color of every pixel nothing has painted (and of newly exposed area).
pub const BACKGROUND: Color = Color::BLACK;

#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![BACKGROUND; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// True when `p` lies inside the canvas. Callers must check this before
    /// using `pixel` / `pixel_mut`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        p.y as usize * self.width + p.x as usize
    }

    /// Panics if `p` is outside (see `contains`).
    #[inline]
    pub fn pixel(&self, p: Point) -> Color {
        self.pixels[self.index(p)]
    }

    /// Panics if `p` is outside (see `contains`).
    #[inline]
    pub fn pixel_mut(&mut self, p: Point) -> &mut Color {
        let idx = self.index(p);
        &mut self.pixels[idx]
    }

    /// Reallocate to the new size, keeping the overlapping top-left rectangle.
    pub fn resize(&mut self, width: usize, height: usize) {
        let mut pixels = vec![BACKGROUND; width * height];
        let keep_w = self.width.min(width);
        for y in 0..self.height.min(height) {
            let src = y * self.width;
            let dst = y * width;
            pixels[dst..dst + keep_w].copy_from_slice(&self.pixels[src..src + keep_w]);
        }
        self.width = width;
        self.height = height;
        self.pixels = pixels;
    }

    /// Reset every pixel to background.
    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(w: usize, h: usize) -> Canvas {
        let mut c = Canvas::new(w, h);
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                *c.pixel_mut(Point::new(x, y)) = Color::rgb(x as u8, y as u8, 7);
            }
        }
        c
    }

    #[test]
    fn test_new_is_background() {
        let c = Canvas::new(4, 3);
        assert_eq!(c.pixels().len(), 12);
        assert!(c.pixels().iter().all(|&p| p == BACKGROUND));
    }

    #[test]
    fn test_contains() {
        let c = Canvas::new(4, 3);
        assert!(c.contains(Point::new(0, 0)));
        assert!(c.contains(Point::new(3, 2)));
        assert!(!c.contains(Point::new(4, 0)));
        assert!(!c.contains(Point::new(0, 3)));
        assert!(!c.contains(Point::new(-1, 1)));
    }

    #[test]
    fn test_grow_preserves_overlap_and_fills_background() {
        let mut c = checkerboard(5, 4);
        c.resize(8, 6);
        assert_eq!(c.pixels().len(), 48);
        for y in 0..6 {
            for x in 0..8 {
                let got = c.pixel(Point::new(x, y));
                if x < 5 && y < 4 {
                    assert_eq!(got, Color::rgb(x as u8, y as u8, 7));
                } else {
                    assert_eq!(got, BACKGROUND);
                }
            }
        }
    }

    #[test]
    fn test_mixed_resize_preserves_overlap() {
        let mut c = checkerboard(6, 3);
        c.resize(4, 5);
        assert_eq!((c.width(), c.height()), (4, 5));
        for y in 0..5 {
            for x in 0..4 {
                let expected =
                    if y < 3 { Color::rgb(x as u8, y as u8, 7) } else { BACKGROUND };
                assert_eq!(c.pixel(Point::new(x, y)), expected);
            }
        }
    }

    #[test]
    fn test_resize_to_zero_and_back() {
        let mut c = checkerboard(3, 3);
        c.resize(0, 0);
        assert!(c.pixels().is_empty());
        c.resize(2, 2);
        assert!(c.pixels().iter().all(|&p| p == BACKGROUND));
    }

    #[test]
    fn test_clear() {
        let mut c = checkerboard(3, 2);
        c.clear();
        assert!(c.pixels().iter().all(|&p| p == BACKGROUND));
    }
}
