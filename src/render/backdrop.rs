use eframe::egui::{Align2, FontId, Rect, pos2, vec2};

use crate::util::format_axis_value;
use crate::view::{GridPlan, Viewport};

use super::Canvas;
use super::style::{AXIS_LABEL_SIZE, ACCENT, BACKGROUND, axis_stroke, grid_stroke};

const LABEL_GAP: f32 = 5.0;

pub(super) fn draw_background(canvas: &mut dyn Canvas, surface: Rect) {
    canvas.fill_rect(surface, BACKGROUND);
}

pub(super) fn draw_grid(canvas: &mut dyn Canvas, viewport: &Viewport, grid: &GridPlan) {
    let size = viewport.surface_size();
    let stroke = grid_stroke();

    for &x in &grid.lines.xs {
        let sx = viewport.to_surface(vec2(x, 0.0)).x;
        canvas.line(pos2(sx, 0.0), pos2(sx, size.y), stroke);
    }
    for &y in &grid.lines.ys {
        let sy = viewport.to_surface(vec2(0.0, y)).y;
        canvas.line(pos2(0.0, sy), pos2(size.x, sy), stroke);
    }
}

/// Both axes through the logical origin, labelled at every grid line except 0.
///
/// Labels along an axis are skipped while that axis is outside the visible bounds.
pub(super) fn draw_axes(canvas: &mut dyn Canvas, viewport: &Viewport, grid: &GridPlan) {
    let size = viewport.surface_size();
    let origin = viewport.to_surface(vec2(0.0, 0.0));
    let stroke = axis_stroke();

    canvas.line(pos2(0.0, origin.y), pos2(size.x, origin.y), stroke);
    canvas.line(pos2(origin.x, 0.0), pos2(origin.x, size.y), stroke);

    let font = FontId::monospace(AXIS_LABEL_SIZE);

    let bounds = grid.bounds;
    if (bounds.min.y..=bounds.max.y).contains(&0.0) {
        for &x in grid.lines.xs.iter().filter(|x| **x != 0.0) {
            let at = viewport.to_surface(vec2(x, 0.0));
            canvas.text(
                pos2(at.x, at.y + LABEL_GAP),
                Align2::CENTER_TOP,
                &format_axis_value(x),
                font.clone(),
                ACCENT,
            );
        }
    }

    if (bounds.min.x..=bounds.max.x).contains(&0.0) {
        for &y in grid.lines.ys.iter().filter(|y| **y != 0.0) {
            let at = viewport.to_surface(vec2(0.0, y));
            canvas.text(
                pos2(at.x - LABEL_GAP, at.y),
                Align2::RIGHT_CENTER,
                &format_axis_value(y),
                font.clone(),
                ACCENT,
            );
        }
    }
}
