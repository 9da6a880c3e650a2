use egui::{Context, Pos2, Rect};
use log::debug;

use crate::engine::StrokeEngine;
use crate::error::EngineError;

/// Pointer events in canvas-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed inside the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved while the gesture is held
    PointerMove { pos: Pos2 },
    /// Primary button released, ending the gesture
    PointerUp,
}

/// A single frame's view of the primary pointer button.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
}

/// Converts raw egui pointer input into [`InputEvent`]s for one canvas.
pub struct InputHandler {
    canvas_rect: Rect,
    last_pos: Option<Pos2>,
    gesture_active: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pos: None,
            gesture_active: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture_active
    }

    /// Read this frame's pointer state from egui and translate it.
    ///
    /// `canvas_hovered` is false while another area (such as a window) covers
    /// the pointer, in which case presses are not treated as strokes.
    pub fn process_input(&mut self, ctx: &Context, canvas_hovered: bool) -> Vec<InputEvent> {
        let sample = ctx.input(|input| PointerSample {
            pos: input.pointer.interact_pos(),
            pressed: canvas_hovered && input.pointer.primary_pressed(),
            down: input.pointer.primary_down(),
            released: input.pointer.primary_released(),
        });
        self.translate(sample)
    }

    /// Translate one pointer sample.
    ///
    /// A gesture starts only when the press lands inside the canvas; after
    /// that, moves and the release are reported wherever the pointer goes.
    pub fn translate(&mut self, sample: PointerSample) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let origin = self.canvas_rect.min.to_vec2();

        if sample.pressed {
            if let Some(pos) = sample.pos.filter(|p| self.canvas_rect.contains(*p)) {
                events.push(InputEvent::PointerDown { pos: pos - origin });
                self.gesture_active = true;
                self.last_pos = Some(pos);
            }
        } else if self.gesture_active && sample.down {
            if let Some(pos) = sample.pos {
                if self.last_pos != Some(pos) {
                    events.push(InputEvent::PointerMove { pos: pos - origin });
                    self.last_pos = Some(pos);
                }
            }
        }

        if self.gesture_active && (sample.released || (!sample.down && !sample.pressed)) {
            events.push(InputEvent::PointerUp);
            self.gesture_active = false;
            self.last_pos = None;
        }

        events
    }
}

/// Apply one input event to the engine.
///
/// Moves and releases without a preceding press are ignored.
pub fn apply_event(engine: &mut StrokeEngine, event: InputEvent) {
    let result = match event {
        InputEvent::PointerDown { pos } => {
            engine.begin_stroke(pos);
            Ok(())
        }
        InputEvent::PointerMove { pos } => engine.extend_stroke(pos),
        InputEvent::PointerUp => engine.commit_stroke(),
    };

    if let Err(EngineError::NoActiveStroke) = result {
        debug!("Ignoring {event:?} with no stroke in progress");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn canvas() -> Rect {
        Rect::from_min_max(pos2(100.0, 50.0), pos2(300.0, 250.0))
    }

    fn press(x: f32, y: f32) -> PointerSample {
        PointerSample { pos: Some(pos2(x, y)), pressed: true, down: true, released: false }
    }

    fn drag(x: f32, y: f32) -> PointerSample {
        PointerSample { pos: Some(pos2(x, y)), pressed: false, down: true, released: false }
    }

    fn release(x: f32, y: f32) -> PointerSample {
        PointerSample { pos: Some(pos2(x, y)), pressed: false, down: false, released: true }
    }

    #[test]
    fn gesture_is_reported_in_canvas_coordinates() {
        let mut handler = InputHandler::new(canvas());

        assert_eq!(handler.translate(press(110.0, 60.0)), vec![InputEvent::PointerDown { pos: pos2(10.0, 10.0) }]);
        assert_eq!(handler.translate(drag(120.0, 70.0)), vec![InputEvent::PointerMove { pos: pos2(20.0, 20.0) }]);
        assert_eq!(handler.translate(release(120.0, 70.0)), vec![InputEvent::PointerUp]);
        assert!(!handler.is_gesture_active());
    }

    #[test]
    fn press_outside_canvas_is_ignored() {
        let mut handler = InputHandler::new(canvas());

        assert!(handler.translate(press(10.0, 10.0)).is_empty());
        assert!(handler.translate(drag(150.0, 100.0)).is_empty());
        assert!(handler.translate(release(150.0, 100.0)).is_empty());
    }

    #[test]
    fn drag_can_leave_canvas_once_started() {
        let mut handler = InputHandler::new(canvas());
        handler.translate(press(110.0, 60.0));

        assert_eq!(handler.translate(drag(400.0, 60.0)), vec![InputEvent::PointerMove { pos: pos2(300.0, 10.0) }]);
    }

    #[test]
    fn stationary_pointer_produces_no_moves() {
        let mut handler = InputHandler::new(canvas());
        handler.translate(press(110.0, 60.0));

        assert!(handler.translate(drag(110.0, 60.0)).is_empty());
        assert!(handler.translate(drag(110.0, 60.0)).is_empty());
    }

    #[test]
    fn lost_button_ends_gesture() {
        let mut handler = InputHandler::new(canvas());
        handler.translate(press(110.0, 60.0));

        let lost = PointerSample { pos: None, pressed: false, down: false, released: false };
        assert_eq!(handler.translate(lost), vec![InputEvent::PointerUp]);
    }

    #[test]
    fn click_within_one_frame_is_down_then_up() {
        let mut handler = InputHandler::new(canvas());
        let click = PointerSample { pos: Some(pos2(110.0, 60.0)), pressed: true, down: false, released: true };

        assert_eq!(
            handler.translate(click),
            vec![InputEvent::PointerDown { pos: pos2(10.0, 10.0) }, InputEvent::PointerUp]
        );
    }
}
