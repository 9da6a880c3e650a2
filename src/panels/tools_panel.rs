use egui::{Button, Color32, Stroke, vec2};

use crate::PainterApp;
use crate::brush::BrushSize;
use crate::color::parse_color;

const SWATCH_SIZE: f32 = 28.0;

pub fn tools_panel(app: &mut PainterApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("tools_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        palette_row(app, ui);
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            if ui.button(format!("Brush: {}", app.brush_size().label())).clicked() {
                app.set_show_size_chooser(true);
            }

            if ui.add_enabled(app.can_undo(), Button::new("Undo")).clicked() {
                app.undo();
            }

            if app.has_background() {
                if ui.button("Remove background").clicked() {
                    app.clear_background();
                }
            } else {
                ui.weak("Drop an image to set the background");
            }
        });
        ui.add_space(4.0);
    });

    size_chooser(app, ctx);
}

fn palette_row(app: &mut PainterApp, ui: &mut egui::Ui) {
    let mut clicked = None;

    ui.horizontal(|ui| {
        let selected = app.palette().selected_index();
        for (index, swatch) in app.palette().colors().iter().enumerate() {
            let fill = parse_color(swatch.tag).unwrap_or(Color32::TRANSPARENT);
            let outline = if index == selected {
                Stroke::new(3.0, ui.visuals().selection.stroke.color)
            } else {
                Stroke::new(1.0, Color32::GRAY)
            };

            let button = Button::new("").fill(fill).stroke(outline).min_size(vec2(SWATCH_SIZE, SWATCH_SIZE));
            if ui.add(button).on_hover_text(swatch.name).clicked() {
                clicked = Some(index);
            }
        }
    });

    if let Some(index) = clicked {
        app.select_color(index);
    }
}

fn size_chooser(app: &mut PainterApp, ctx: &egui::Context) {
    if !app.show_size_chooser() {
        return;
    }

    let mut open = true;
    let mut chosen = None;
    egui::Window::new("Brush size")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for size in BrushSize::ALL {
                    let label = format!("{} ({}dp)", size.label(), size.dp());
                    if ui.selectable_label(app.brush_size() == size, label).clicked() {
                        chosen = Some(size);
                    }
                }
            });
        });

    if let Some(size) = chosen {
        app.select_brush_size(size);
        open = false;
    }
    app.set_show_size_chooser(open);
}
