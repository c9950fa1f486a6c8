// Undo journal: one sparse per-pixel diff per stroke.
//
// A stroke entry maps each touched point to `final - initial` (wrapping,
// see color.rs), so subtracting it from the live canvas restores the
// pre-stroke color exactly. History is an unbounded stack.
use crate::canvas::Canvas;
use crate::color::Color;
use crate::vec2::Point;
use std::collections::HashMap;

/// Accumulated pixel deltas of a single stroke.
#[derive(Debug, Clone, Default)]
pub struct StrokeDelta {
    deltas: HashMap<Point, Color>,
}

impl StrokeDelta {
    /// Fold another write at `pos` into the cumulative delta.
    pub fn record(&mut self, pos: Point, delta: Color) {
        *self.deltas.entry(pos).or_default() += delta;
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    #[cfg(test)]
    fn get(&self, pos: Point) -> Option<Color> {
        self.deltas.get(&pos).copied()
    }

    /// Subtract every delta from `canvas`. Points outside the (possibly
    /// resized) canvas are skipped. Returns how many pixels were restored.
    pub fn revert(&self, canvas: &mut Canvas) -> usize {
        let mut restored = 0;
        for (&pos, &delta) in &self.deltas {
            if canvas.contains(pos) {
                *canvas.pixel_mut(pos) -= delta;
                restored += 1;
            }
        }
        restored
    }
}

#[derive(Debug, Default)]
pub struct UndoHistory {
    open: Option<StrokeDelta>,
    strokes: Vec<StrokeDelta>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start journaling a new stroke. Closes any stroke still open.
    pub fn begin_stroke(&mut self) {
        self.end_stroke();
        self.open = Some(StrokeDelta::default());
    }

    pub fn is_stroke_open(&self) -> bool {
        self.open.is_some()
    }

    /// Record a pixel change for the open stroke. Returns false (and drops
    /// the change) when no stroke is open.
    pub fn record(&mut self, pos: Point, delta: Color) -> bool {
        match self.open.as_mut() {
            Some(stroke) => {
                stroke.record(pos, delta);
                true
            }
            None => false,
        }
    }

    /// Close the open stroke and push it onto the history. A stroke that
    /// touched no pixel is discarded. Returns the number of pixels the pushed
    /// stroke touched, `None` if nothing was pushed.
    pub fn end_stroke(&mut self) -> Option<usize> {
        let stroke = self.open.take()?;
        if stroke.is_empty() {
            log::debug!("discarding empty stroke");
            return None;
        }
        let touched = stroke.len();
        log::debug!("stroke closed, {touched} pixels journaled");
        self.strokes.push(stroke);
        Some(touched)
    }

    /// Pop the most recent stroke (closing an open one first) and revert it
    /// on `canvas`. Returns false if there was nothing to undo.
    pub fn undo(&mut self, canvas: &mut Canvas) -> bool {
        self.end_stroke();
        let Some(stroke) = self.strokes.pop() else {
            return false;
        };
        let restored = stroke.revert(canvas);
        log::debug!("undo restored {restored} of {} pixels", stroke.len());
        true
    }

    /// Drop all history, including an open stroke.
    pub fn clear(&mut self) {
        self.open = None;
        self.strokes.clear();
    }

    /// Number of closed, undoable strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    #[cfg(test)]
    fn last(&self) -> Option<&StrokeDelta> {
        self.strokes.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(canvas: &mut Canvas, history: &mut UndoHistory, pos: Point, color: Color) {
        let px = canvas.pixel_mut(pos);
        let old = *px;
        *px = color;
        history.record(pos, color - old);
    }

    #[test]
    fn test_repeated_writes_accumulate_into_one_entry() {
        let mut canvas = Canvas::new(4, 4);
        let mut history = UndoHistory::new();
        history.begin_stroke();
        let p = Point::new(1, 2);
        write(&mut canvas, &mut history, p, Color::rgb(10, 20, 30));
        write(&mut canvas, &mut history, p, Color::rgb(200, 20, 255));
        assert_eq!(history.end_stroke(), Some(1));
        assert_eq!(history.last().and_then(|s| s.get(p)), Some(Color::rgb(200, 20, 255)));
    }

    #[test]
    fn test_undo_restores_exactly() {
        let mut canvas = Canvas::new(4, 4);
        *canvas.pixel_mut(Point::new(0, 0)) = Color::rgb(250, 3, 9);
        let before = canvas.clone();

        let mut history = UndoHistory::new();
        history.begin_stroke();
        write(&mut canvas, &mut history, Point::new(0, 0), Color::rgb(4, 255, 9));
        write(&mut canvas, &mut history, Point::new(3, 3), Color::WHITE);
        write(&mut canvas, &mut history, Point::new(0, 0), Color::rgb(99, 1, 2));
        history.end_stroke();

        assert!(history.undo(&mut canvas));
        assert_eq!(canvas.pixels(), before.pixels());
        assert!(history.is_empty());
    }

    #[test]
    fn test_empty_stroke_is_discarded() {
        let mut history = UndoHistory::new();
        history.begin_stroke();
        assert!(history.is_stroke_open());
        assert_eq!(history.end_stroke(), None);
        assert!(!history.is_stroke_open());
        assert!(history.is_empty());
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut canvas = Canvas::new(2, 2);
        let mut history = UndoHistory::new();
        assert!(!history.undo(&mut canvas));
    }

    #[test]
    fn test_record_without_open_stroke_is_dropped() {
        let mut history = UndoHistory::new();
        assert!(!history.record(Point::new(0, 0), Color::WHITE));
        assert!(history.is_empty());
    }

    #[test]
    fn test_undo_closes_open_stroke_first() {
        let mut canvas = Canvas::new(3, 3);
        let mut history = UndoHistory::new();
        history.begin_stroke();
        write(&mut canvas, &mut history, Point::new(1, 1), Color::WHITE);
        assert!(history.undo(&mut canvas));
        assert!(!history.is_stroke_open());
        assert_eq!(canvas.pixel(Point::new(1, 1)), Color::BLACK);
    }

    #[test]
    fn test_undo_after_shrink_skips_out_of_bounds_points() {
        let mut canvas = Canvas::new(6, 6);
        let mut history = UndoHistory::new();
        history.begin_stroke();
        write(&mut canvas, &mut history, Point::new(1, 1), Color::WHITE);
        write(&mut canvas, &mut history, Point::new(5, 5), Color::WHITE);
        history.end_stroke();

        canvas.resize(3, 3);
        let stroke = history.last().cloned().unwrap();
        assert!(history.undo(&mut canvas));
        assert_eq!(stroke.revert(&mut Canvas::new(3, 3)), 1);
        assert!(canvas.pixels().iter().all(|&p| p == Color::BLACK));
    }

    #[test]
    fn test_stack_order() {
        let mut canvas = Canvas::new(2, 1);
        let mut history = UndoHistory::new();
        for x in 0..2 {
            history.begin_stroke();
            write(&mut canvas, &mut history, Point::new(x, 0), Color::WHITE);
            history.end_stroke();
        }
        assert_eq!(history.len(), 2);
        history.undo(&mut canvas);
        assert_eq!(canvas.pixel(Point::new(0, 0)), Color::WHITE);
        assert_eq!(canvas.pixel(Point::new(1, 0)), Color::BLACK);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut history = UndoHistory::new();
        history.begin_stroke();
        history.record(Point::new(0, 0), Color::WHITE);
        history.end_stroke();
        history.begin_stroke();
        history.clear();
        assert!(history.is_empty());
        assert!(!history.is_stroke_open());
    }
}
