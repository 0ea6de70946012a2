use eframe::egui::{Color32, Pos2, Rect, Stroke};

pub(super) const BACKGROUND: Color32 = Color32::from_rgb(10, 14, 39);
pub(super) const ACCENT: Color32 = Color32::from_rgb(0, 255, 204);
pub(super) const TOUR: Color32 = Color32::from_rgb(255, 0, 255);
pub(super) const EDGE_LABEL: Color32 = Color32::from_rgb(255, 204, 0);
pub(super) const POINT_BORDER: Color32 = Color32::WHITE;
pub(super) const POINT_LABEL: Color32 = Color32::WHITE;

pub(super) const POINT_RADIUS: f32 = 6.0;
pub(super) const POINT_GLOW_RADIUS: f32 = 15.0;
pub(super) const TOUR_WIDTH: f32 = 3.0;
pub(super) const AXIS_LABEL_SIZE: f32 = 10.0;
pub(super) const POINT_LABEL_SIZE: f32 = 12.0;

/// Arrowhead outline pointing along +x with its tip at the origin.
pub(super) const ARROW_SHAPE: [(f32, f32); 3] = [(0.0, 0.0), (-8.0, -5.0), (-8.0, 5.0)];

pub(super) fn grid_stroke() -> Stroke {
    Stroke::new(1.0, Color32::from_rgba_unmultiplied(0, 255, 204, 38))
}

pub(super) fn axis_stroke() -> Stroke {
    Stroke::new(2.0, ACCENT)
}

pub(super) fn tour_stroke() -> Stroke {
    Stroke::new(TOUR_WIDTH, TOUR)
}

/// Wide translucent pass under each tour segment.
pub(super) fn tour_glow_stroke() -> Stroke {
    Stroke::new(TOUR_WIDTH * 3.0, Color32::from_rgba_unmultiplied(255, 0, 255, 40))
}

/// Rings approximating a radial glow that fades out at `POINT_GLOW_RADIUS`.
pub(super) fn point_glow_rings() -> impl Iterator<Item = (f32, Color32)> {
    const RINGS: usize = 5;
    (0..RINGS).map(|ring| {
        let t = ring as f32 / RINGS as f32;
        let radius = POINT_GLOW_RADIUS * (1.0 - t * 0.6);
        let alpha = (28.0 + t * 60.0) as u8;
        (radius, Color32::from_rgba_unmultiplied(0, 255, 204, alpha))
    })
}

/// Edge labels shrink as the view zooms in and grow as it zooms out, within limits.
pub(super) fn edge_label_size(zoom: f32) -> f32 {
    (10.0 / zoom).clamp(7.0, 24.0)
}

/// Whether the segment `start..end` touches `rect` grown by `padding` on every side.
pub(super) fn edge_visible(rect: Rect, start: Pos2, end: Pos2, padding: f32) -> bool {
    let area = rect.expand(padding);
    if !Rect::from_two_pos(start, end).intersects(area) {
        return false;
    }
    if area.contains(start) || area.contains(end) {
        return true;
    }
    rect_sides(area)
        .into_iter()
        .any(|(a, b)| segments_cross(start, end, a, b))
}

fn rect_sides(rect: Rect) -> [(Pos2, Pos2); 4] {
    let [top_left, top_right] = [rect.left_top(), rect.right_top()];
    let [bottom_right, bottom_left] = [rect.right_bottom(), rect.left_bottom()];
    [
        (top_left, top_right),
        (top_right, bottom_right),
        (bottom_right, bottom_left),
        (bottom_left, top_left),
    ]
}

/// Closed-segment intersection: each segment's endpoints lie on opposite sides
/// of the other's line, or on it.
fn segments_cross(p: Pos2, q: Pos2, a: Pos2, b: Pos2) -> bool {
    let side = |point: Pos2, from: Pos2, to: Pos2| {
        let along = to - from;
        let offset = point - from;
        along.x * offset.y - along.y * offset.x
    };
    side(a, p, q) * side(b, p, q) <= 0.0 && side(p, a, b) * side(q, a, b) <= 0.0
}
