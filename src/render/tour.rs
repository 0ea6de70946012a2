use eframe::egui::{Align2, FontId, Pos2, Rect, Vec2, pos2, vec2};

use crate::config::CULL_MARGIN;
use crate::scene::SceneModel;
use crate::view::Viewport;

use super::style::{
    ARROW_SHAPE, EDGE_LABEL, TOUR, edge_label_size, edge_visible, tour_glow_stroke, tour_stroke,
};
use super::{Canvas, TourReveal};

/// Draws the revealed part of the tour and returns how many segments were painted.
pub(super) fn draw_tour(
    canvas: &mut dyn Canvas,
    scene: &SceneModel,
    viewport: &Viewport,
    reveal: TourReveal,
) -> usize {
    let surface = Rect::from_min_size(Pos2::ZERO, viewport.surface_size());
    let label_size = edge_label_size(viewport.zoom());
    let mut painted = 0;

    for position in 0..reveal.full_edges {
        let Some((from, to)) = scene.edge(position) else {
            continue;
        };
        let start = viewport.to_surface(from.pos());
        let end = viewport.to_surface(to.pos());
        if !edge_visible(surface, start, end, CULL_MARGIN) {
            continue;
        }

        draw_segment(canvas, start, end);
        let mid = start + (end - start) * 0.5;
        canvas.text(
            pos2(mid.x, mid.y - label_size * 0.8),
            Align2::CENTER_CENTER,
            &format!("{:.1}", from.distance(&to)),
            FontId::monospace(label_size),
            EDGE_LABEL,
        );
        painted += 1;
    }

    if reveal.has_partial()
        && let Some((from, to)) = scene.edge(reveal.full_edges)
    {
        let start = viewport.to_surface(from.pos());
        let end = viewport.to_surface(to.pos());
        let tip = start + (end - start) * reveal.partial;
        if edge_visible(surface, start, tip, CULL_MARGIN) {
            draw_segment(canvas, start, tip);
            painted += 1;
        }
    }

    if reveal.complete {
        draw_arrows(canvas, scene, viewport, surface);
    }

    painted
}

fn draw_segment(canvas: &mut dyn Canvas, start: Pos2, end: Pos2) {
    canvas.line(start, end, tour_glow_stroke());
    canvas.line(start, end, tour_stroke());
}

/// One arrowhead at the midpoint of every edge, pointing along the walk.
fn draw_arrows(canvas: &mut dyn Canvas, scene: &SceneModel, viewport: &Viewport, surface: Rect) {
    for position in 0..scene.tour().len() {
        let Some((from, to)) = scene.edge(position) else {
            continue;
        };
        let start = viewport.to_surface(from.pos());
        let end = viewport.to_surface(to.pos());
        let mid = start + (end - start) * 0.5;
        if !surface.expand(CULL_MARGIN).contains(mid) {
            continue;
        }

        let direction = end - start;
        let angle = direction.y.atan2(direction.x);
        canvas.triangle(arrow_corners(mid, angle), TOUR);
    }
}

fn arrow_corners(tip: Pos2, angle: f32) -> [Pos2; 3] {
    let (sin, cos) = angle.sin_cos();
    ARROW_SHAPE.map(|(x, y)| tip + rotate(vec2(x, y), sin, cos))
}

fn rotate(v: Vec2, sin: f32, cos: f32) -> Vec2 {
    vec2(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
