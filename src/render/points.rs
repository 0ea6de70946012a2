use eframe::egui::{Align2, FontId, Stroke};

use crate::config::CULL_MARGIN;
use crate::scene::SceneModel;
use crate::view::Viewport;

use super::Canvas;
use super::style::{
    ACCENT, POINT_BORDER, POINT_LABEL, POINT_LABEL_SIZE, POINT_RADIUS, point_glow_rings,
};

/// Glow, disc, border and index label for every point near the surface.
pub(super) fn draw_points(canvas: &mut dyn Canvas, scene: &SceneModel, viewport: &Viewport) -> usize {
    let font = FontId::monospace(POINT_LABEL_SIZE);
    let mut painted = 0;

    for (index, point) in scene.points().iter().enumerate() {
        let center = viewport.to_surface(point.pos());
        if !viewport.surface_contains(center, CULL_MARGIN) {
            continue;
        }

        for (radius, color) in point_glow_rings() {
            canvas.circle_filled(center, radius, color);
        }
        canvas.circle_filled(center, POINT_RADIUS, ACCENT);
        canvas.circle_stroke(center, POINT_RADIUS, Stroke::new(2.0, POINT_BORDER));
        canvas.text(
            center,
            Align2::CENTER_CENTER,
            &index.to_string(),
            font.clone(),
            POINT_LABEL,
        );
        painted += 1;
    }

    painted
}
