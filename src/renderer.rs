use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke, Vec2, pos2};

use crate::background::BackgroundImage;
use crate::engine::DrawItem;

/// Colour of the canvas where no background image covers it
pub const CANVAS_COLOR: Color32 = Color32::WHITE;

/// Turn a draw list into shapes, one per item, in paint order.
///
/// Points are canvas-local and get shifted by `origin`. Every vertex gets a
/// dot of the brush diameter so joins and caps come out round, and a
/// single-point stroke is just that dot.
pub fn stroke_shapes(draw_list: &[DrawItem<'_>], origin: Pos2) -> Vec<Shape> {
    draw_list
        .iter()
        .map(|item| {
            let offset = origin.to_vec2();
            let points: Vec<Pos2> = item.points.iter().map(|p| *p + offset).collect();
            let radius = item.thickness / 2.0;

            if let [only] = points.as_slice() {
                return Shape::circle_filled(*only, radius, item.color);
            }

            let mut parts = Vec::with_capacity(points.len() + 1);
            parts.extend(points.iter().map(|p| Shape::circle_filled(*p, radius, item.color)));
            parts.push(Shape::line(points, Stroke::new(item.thickness, item.color)));
            Shape::Vec(parts)
        })
        .collect()
}

/// Largest rect with the image's aspect ratio that fits in `canvas`, centred.
pub fn fit_rect(image_size: Vec2, canvas: Rect) -> Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return canvas;
    }
    let scale = (canvas.width() / image_size.x).min(canvas.height() / image_size.y);
    Rect::from_center_size(canvas.center(), image_size * scale)
}

/// Paints the background and the strokes onto the canvas area.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders the current frame
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The canvas rectangle
    ///     background (Option<&BackgroundImage>): Image drawn under the strokes
    ///     draw_list (&[DrawItem]): Strokes to draw, in paint order
    pub fn render(
        &self,
        painter: &Painter,
        rect: Rect,
        background: Option<&BackgroundImage>,
        draw_list: &[DrawItem<'_>],
    ) {
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, CANVAS_COLOR);

        if let Some(background) = background {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(background.texture().id(), fit_rect(background.size(), rect), uv, Color32::WHITE);
        }

        painter.extend(stroke_shapes(draw_list, rect.min));
    }
}
