use egui::{Color32, Rect};

use crate::background::{BackgroundImage, FileDropHandler};
use crate::brush::{BrushSize, Palette};
use crate::engine::StrokeEngine;
use crate::input::{InputHandler, apply_event};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::settings::PainterSettings;

pub struct PainterApp {
    engine: StrokeEngine,
    renderer: Renderer,
    palette: Palette,
    brush_size: BrushSize,
    background: Option<BackgroundImage>,
    input: InputHandler,
    file_drop: FileDropHandler,
    show_size_chooser: bool,
}

impl Default for PainterApp {
    fn default() -> Self {
        Self::with_settings(PainterSettings::default())
    }
}

impl PainterApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_settings(PainterSettings::load(cc.storage))
    }

    pub fn with_settings(settings: PainterSettings) -> Self {
        let palette = Palette::default();
        let settings = settings.sanitized(&palette);

        let mut app = Self {
            engine: StrokeEngine::new(),
            renderer: Renderer::new(),
            palette,
            brush_size: settings.brush_size,
            background: None,
            input: InputHandler::new(Rect::NOTHING),
            file_drop: FileDropHandler::new(),
            show_size_chooser: false,
        };
        app.select_brush_size(settings.brush_size);
        app.select_color(settings.palette_index);
        app
    }

    pub fn engine(&self) -> &StrokeEngine {
        &self.engine
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn brush_size(&self) -> BrushSize {
        self.brush_size
    }

    pub fn brush_color(&self) -> Color32 {
        self.engine.brush().color
    }

    pub fn settings(&self) -> PainterSettings {
        PainterSettings {
            brush_size: self.brush_size,
            palette_index: self.palette.selected_index(),
        }
    }

    pub fn select_brush_size(&mut self, size: BrushSize) {
        match self.engine.set_brush_thickness(size.dp()) {
            Ok(_) => {
                log::info!("Brush size selected: {}", size.label());
                self.brush_size = size;
            }
            Err(err) => log::error!("Could not apply brush size {}: {err}", size.label()),
        }
    }

    /// Make palette entry `index` the brush colour.
    ///
    /// The current swatch is applied again too, so this also initialises the
    /// engine's colour from a restored selection.
    pub fn select_color(&mut self, index: usize) {
        let swatch = if index == self.palette.selected_index() {
            self.palette.selected().cloned()
        } else {
            self.palette.select(index).cloned()
        };
        let Some(swatch) = swatch else {
            return;
        };

        match self.engine.set_brush_color(swatch.tag) {
            Ok(_) => log::info!("Brush color selected: {}", swatch.name),
            Err(err) => log::warn!("Palette entry {} rejected: {err}", swatch.name),
        }
    }

    pub fn undo(&mut self) {
        if self.engine.undo().is_none() {
            log::debug!("Nothing to undo");
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.engine.history().is_empty()
    }

    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    pub fn clear_background(&mut self) {
        self.background = None;
    }

    pub(crate) fn show_size_chooser(&self) -> bool {
        self.show_size_chooser
    }

    pub(crate) fn set_show_size_chooser(&mut self, show: bool) {
        self.show_size_chooser = show;
    }

    /// Pick up dropped files and use the newest image as background.
    pub(crate) fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.file_drop.preview_files_being_dropped(ctx);
        if let Some((name, image)) = self.file_drop.take_dropped_image(ctx) {
            self.background = Some(BackgroundImage::upload(ctx, &name, image));
        }
    }

    /// Route this frame's pointer input on the canvas into the engine.
    pub(crate) fn handle_input(&mut self, ctx: &egui::Context, canvas: &egui::Response) {
        self.input.set_canvas_rect(canvas.rect);
        let events = self.input.process_input(ctx, canvas.hovered());
        if !events.is_empty() {
            ctx.request_repaint();
        }
        for event in events {
            apply_event(&mut self.engine, event);
        }
    }

    pub(crate) fn render(&self, painter: &egui::Painter, canvas_rect: Rect) {
        let draw_list = self.engine.draw_list();
        self.renderer.render(painter, canvas_rect, self.background.as_ref(), &draw_list);
    }
}

impl eframe::App for PainterApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings().save(storage);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let undo_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z);
        if ctx.input_mut(|i| i.consume_shortcut(&undo_shortcut)) {
            self.undo();
        }

        self.handle_dropped_files(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
