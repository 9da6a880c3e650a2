use egui::{Color32, Pos2};
use log::debug;

use crate::brush::{BrushSize, BrushState, DEFAULT_DP_SCALE, to_render_units};
use crate::color::parse_color;
use crate::error::{EngineError, EngineResult};
use crate::history::StrokeHistory;
use crate::stroke::{MutableStroke, Stroke};

/// Whether a stroke is currently being drawn.
#[derive(Debug, Default, Clone)]
pub enum StrokeState {
    #[default]
    Idle,
    Active(MutableStroke),
}

/// One entry of the draw list: a polyline and the paint to draw it with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem<'a> {
    pub points: &'a [Pos2],
    pub color: Color32,
    pub thickness: f32,
}

impl<'a> From<&'a Stroke> for DrawItem<'a> {
    fn from(stroke: &'a Stroke) -> Self {
        Self {
            points: stroke.points(),
            color: stroke.color(),
            thickness: stroke.thickness(),
        }
    }
}

impl<'a> From<&'a MutableStroke> for DrawItem<'a> {
    fn from(stroke: &'a MutableStroke) -> Self {
        Self {
            points: stroke.points(),
            color: stroke.color(),
            thickness: stroke.thickness(),
        }
    }
}

/// Records freehand strokes and produces what has to be painted.
///
/// The host forwards pointer-down, pointer-move and pointer-up to
/// [`begin_stroke`](Self::begin_stroke), [`extend_stroke`](Self::extend_stroke)
/// and [`commit_stroke`](Self::commit_stroke), and reads
/// [`draw_list`](Self::draw_list) once per repaint.
#[derive(Debug, Clone)]
pub struct StrokeEngine {
    brush: BrushState,
    dp_scale: f32,
    history: StrokeHistory,
    state: StrokeState,
}

impl Default for StrokeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeEngine {
    /// Engine using [`DEFAULT_DP_SCALE`] with a black medium brush.
    pub fn new() -> Self {
        Self::build(DEFAULT_DP_SCALE)
    }

    /// Engine converting brush sizes with a custom density scale.
    pub fn with_scale(dp_scale: f32) -> EngineResult<Self> {
        if !dp_scale.is_finite() || dp_scale <= 0.0 {
            return Err(EngineError::InvalidScale(dp_scale));
        }
        Ok(Self::build(dp_scale))
    }

    fn build(dp_scale: f32) -> Self {
        let thickness = to_render_units(BrushSize::default().dp(), dp_scale);
        Self {
            brush: BrushState::new(Color32::BLACK, thickness),
            dp_scale,
            history: StrokeHistory::new(),
            state: StrokeState::Idle,
        }
    }

    /// Set the colour used by strokes begun from now on.
    pub fn set_brush_color(&mut self, color: &str) -> EngineResult<Color32> {
        let parsed = parse_color(color)?;
        self.brush.color = parsed;
        debug!("Brush color set to {color}");
        Ok(parsed)
    }

    /// Set the thickness, in device-independent units, used by strokes begun
    /// from now on. Returns the thickness in rendering units.
    pub fn set_brush_thickness(&mut self, size: f32) -> EngineResult<f32> {
        if !size.is_finite() || size <= 0.0 {
            return Err(EngineError::InvalidThickness(size));
        }
        self.brush.thickness = to_render_units(size, self.dp_scale);
        debug!("Brush thickness set to {} ({size}dp)", self.brush.thickness);
        Ok(self.brush.thickness)
    }

    /// Start a new stroke at `pos`. An uncommitted stroke is thrown away.
    pub fn begin_stroke(&mut self, pos: impl Into<Pos2>) {
        let pos = pos.into();
        if let StrokeState::Active(old) = &self.state {
            debug!("Discarding uncommitted stroke with {} points", old.points().len());
        }
        self.state = StrokeState::Active(MutableStroke::begin(self.brush, pos));
    }

    pub fn extend_stroke(&mut self, pos: impl Into<Pos2>) -> EngineResult<()> {
        match &mut self.state {
            StrokeState::Active(stroke) => {
                stroke.add_point(pos.into());
                Ok(())
            }
            StrokeState::Idle => Err(EngineError::NoActiveStroke),
        }
    }

    /// Move the in-progress stroke to the end of the history.
    pub fn commit_stroke(&mut self) -> EngineResult<()> {
        match std::mem::take(&mut self.state) {
            StrokeState::Active(stroke) => {
                if let Some(stroke) = stroke.finish() {
                    debug!("Committed stroke with {} points", stroke.points().len());
                    self.history.push(stroke);
                }
                Ok(())
            }
            StrokeState::Idle => Err(EngineError::NoActiveStroke),
        }
    }

    /// Remove the most recently committed stroke, if any.
    pub fn undo(&mut self) -> Option<Stroke> {
        let removed = self.history.remove_last_stroke();
        if removed.is_some() {
            debug!("Undo, {} strokes left", self.history.len());
        }
        removed
    }

    /// Everything to paint this frame, in paint order.
    pub fn draw_list(&self) -> Vec<DrawItem<'_>> {
        let mut items: Vec<DrawItem<'_>> = self.history.strokes().iter().map(DrawItem::from).collect();
        if let Some(stroke) = self.in_progress() {
            if !stroke.points().is_empty() {
                items.push(DrawItem::from(stroke));
            }
        }
        items
    }

    pub fn brush(&self) -> BrushState {
        self.brush
    }

    pub fn dp_scale(&self) -> f32 {
        self.dp_scale
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn in_progress(&self) -> Option<&MutableStroke> {
        match &self.state {
            StrokeState::Active(stroke) => Some(stroke),
            StrokeState::Idle => None,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, StrokeState::Active(_))
    }
}
