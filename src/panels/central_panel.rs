use crate::PainterApp;

pub fn central_panel(app: &mut PainterApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let canvas_rect = response.rect;

        // Handle input
        app.handle_input(ctx, &response);

        // Render the canvas
        app.render(&painter, canvas_rect);
    });
}
