use egui::{Color32, Pos2};

use crate::brush::BrushState;

// Committed stroke, read-only once it reaches the history
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

// Stroke still being drawn
#[derive(Debug, Clone, PartialEq)]
pub struct MutableStroke {
    points: Vec<Pos2>,
    color: Color32,
    thickness: f32,
}

impl Stroke {
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}

impl MutableStroke {
    // Start a stroke at `start` using a snapshot of the brush
    pub fn begin(brush: BrushState, start: Pos2) -> Self {
        Self {
            points: vec![start],
            color: brush.color,
            thickness: brush.thickness,
        }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    // Freeze into a committed stroke; None if there is nothing to paint
    pub fn finish(self) -> Option<Stroke> {
        if self.points.is_empty() {
            return None;
        }
        Some(Stroke {
            points: self.points,
            color: self.color,
            thickness: self.thickness,
        })
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
}
