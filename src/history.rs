use crate::stroke::Stroke;

/// Committed strokes in paint order.
///
/// Only grows at the end, and only shrinks by dropping the newest stroke.
#[derive(Debug, Default, Clone)]
pub struct StrokeHistory {
    strokes: Vec<Stroke>,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Remove the newest stroke. Does nothing on an empty history.
    pub fn remove_last_stroke(&mut self) -> Option<Stroke> {
        self.strokes.pop()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn last(&self) -> Option<&Stroke> {
        self.strokes.last()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
