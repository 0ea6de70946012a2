use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use super::Canvas;

/// Paints onto an egui [`Painter`], shifting surface coordinates by the canvas origin.
pub struct EguiCanvas<'a> {
    painter: &'a Painter,
    origin: Vec2,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin: origin.to_vec2(),
        }
    }
}

impl Canvas for EguiCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.painter
            .rect_filled(rect.translate(self.origin), 0.0, color);
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.painter
            .line_segment([from + self.origin, to + self.origin], stroke);
    }

    fn circle_filled(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter.circle_filled(center + self.origin, radius, color);
    }

    fn circle_stroke(&mut self, center: Pos2, radius: f32, stroke: Stroke) {
        self.painter.circle_stroke(center + self.origin, radius, stroke);
    }

    fn triangle(&mut self, corners: [Pos2; 3], color: Color32) {
        let points = corners.iter().map(|corner| *corner + self.origin).collect();
        self.painter
            .add(Shape::convex_polygon(points, color, Stroke::NONE));
    }

    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, font: FontId, color: Color32) {
        self.painter
            .text(pos + self.origin, anchor, text, font, color);
    }
}
