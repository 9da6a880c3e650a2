#![warn(clippy::all, rust_2018_idioms)]

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Painter")
            .with_inner_size([480.0, 800.0])
            .with_min_inner_size([320.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    eframe::run_native(
        "Painter",
        native_options,
        Box::new(|cc| Ok(Box::new(touch_painter::PainterApp::new(cc)))),
    )
}
