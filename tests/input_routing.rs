use egui::{Rect, pos2};
use touch_painter::input::{PointerSample, apply_event};
use touch_painter::{InputEvent, InputHandler, StrokeEngine};

fn sample(x: f32, y: f32, pressed: bool, down: bool, released: bool) -> PointerSample {
    PointerSample { pos: Some(pos2(x, y)), pressed, down, released }
}

#[test]
fn test_pointer_gesture_becomes_one_stroke() {
    let canvas = Rect::from_min_max(pos2(0.0, 40.0), pos2(400.0, 640.0));
    let mut handler = InputHandler::new(canvas);
    let mut engine = StrokeEngine::new();

    let frames = [
        sample(10.0, 50.0, true, true, false),
        sample(15.0, 55.0, false, true, false),
        sample(15.0, 55.0, false, true, false),
        sample(30.0, 70.0, false, true, false),
        sample(30.0, 70.0, false, false, true),
    ];
    for frame in frames {
        for event in handler.translate(frame) {
            apply_event(&mut engine, event);
        }
    }

    let strokes = engine.history().strokes();
    assert_eq!(strokes.len(), 1);
    assert_eq!(strokes[0].points(), &[pos2(10.0, 10.0), pos2(15.0, 15.0), pos2(30.0, 30.0)]);
    assert!(!engine.is_drawing());
}

#[test]
fn test_out_of_order_events_are_ignored() {
    let mut engine = StrokeEngine::new();

    apply_event(&mut engine, InputEvent::PointerMove { pos: pos2(1.0, 1.0) });
    apply_event(&mut engine, InputEvent::PointerUp);
    assert!(engine.history().is_empty());

    apply_event(&mut engine, InputEvent::PointerDown { pos: pos2(2.0, 2.0) });
    apply_event(&mut engine, InputEvent::PointerUp);
    apply_event(&mut engine, InputEvent::PointerUp);
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_repeated_pointer_down_restarts_stroke() {
    let mut engine = StrokeEngine::new();

    apply_event(&mut engine, InputEvent::PointerDown { pos: pos2(0.0, 0.0) });
    apply_event(&mut engine, InputEvent::PointerMove { pos: pos2(1.0, 1.0) });
    apply_event(&mut engine, InputEvent::PointerDown { pos: pos2(5.0, 5.0) });
    apply_event(&mut engine, InputEvent::PointerUp);

    assert_eq!(engine.history().strokes()[0].points(), &[pos2(5.0, 5.0)]);
}
