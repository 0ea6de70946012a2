use eframe::egui::{Pos2, Vec2, vec2};

use crate::config::{GRID_BASE_UNIT, GRID_MAX_PIXELS, GRID_MIN_PIXELS};

use super::Viewport;

/// Axis-aligned rectangle on the logical plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogicalBounds {
    pub min: Vec2,
    pub max: Vec2,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLines {
    pub xs: Vec<f32>,
    pub ys: Vec<f32>,
}

/// Everything a frame needs to paint the grid and the axis labels.
#[derive(Clone, Debug, PartialEq)]
pub struct GridPlan {
    pub bounds: LogicalBounds,
    pub lines: GridLines,
}

impl GridPlan {
    #[must_use]
    pub fn for_viewport(viewport: &Viewport) -> Self {
        let spacing = compute_spacing(
            viewport.zoom(),
            GRID_BASE_UNIT,
            GRID_MIN_PIXELS,
            GRID_MAX_PIXELS,
        );
        let bounds = visible_logical_bounds(viewport);
        let lines = grid_lines(bounds, spacing);
        Self { bounds, lines }
    }
}

/// Doubles or halves `base_unit` until `spacing * zoom` falls in the pixel band.
///
/// The band must be at least an octave wide (`upper >= 2 * lower`) for the
/// result to land inside it.
#[must_use]
pub fn compute_spacing(zoom: f32, base_unit: f32, lower: f32, upper: f32) -> f32 {
    const MAX_STEPS: usize = 64;

    if !zoom.is_finite() || zoom <= 0.0 || base_unit <= 0.0 {
        return base_unit;
    }

    let mut spacing = base_unit;
    for _ in 0..MAX_STEPS {
        if spacing * zoom >= lower {
            break;
        }
        spacing *= 2.0;
    }
    for _ in 0..MAX_STEPS {
        if spacing * zoom <= upper {
            break;
        }
        spacing /= 2.0;
    }
    spacing
}

/// Logical rectangle currently covered by the surface.
#[must_use]
pub fn visible_logical_bounds(viewport: &Viewport) -> LogicalBounds {
    let top_left = viewport.to_logical(Pos2::ZERO);
    let bottom_right = viewport.to_logical(viewport.bottom_right());
    LogicalBounds {
        min: vec2(top_left.x.min(bottom_right.x), top_left.y.min(bottom_right.y)),
        max: vec2(top_left.x.max(bottom_right.x), top_left.y.max(bottom_right.y)),
    }
}

/// Multiples of `spacing` covering `bounds`, widened outward to the nearest line.
#[must_use]
pub fn grid_lines(bounds: LogicalBounds, spacing: f32) -> GridLines {
    if !spacing.is_finite() || spacing <= 0.0 {
        return GridLines::default();
    }

    GridLines {
        xs: multiples_covering(bounds.min.x, bounds.max.x, spacing),
        ys: multiples_covering(bounds.min.y, bounds.max.y, spacing),
    }
}

fn multiples_covering(min: f32, max: f32, spacing: f32) -> Vec<f32> {
    let first = (min / spacing).floor() as i64;
    let last = (max / spacing).ceil() as i64;
    (first..=last).map(|k| k as f32 * spacing).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::config::{MAX_ZOOM, MIN_ZOOM};

    #[test]
    fn spacing_at_unit_zoom_is_base() {
        assert_eq!(compute_spacing(1.0, 50.0, 30.0, 120.0), 50.0);
    }

    #[test]
    fn spacing_grows_when_zoomed_out() {
        assert_eq!(compute_spacing(0.1, 50.0, 30.0, 120.0), 400.0);
    }

    #[test]
    fn spacing_shrinks_when_zoomed_in() {
        assert_eq!(compute_spacing(10.0, 50.0, 30.0, 120.0), 6.25);
    }

    #[test]
    fn lines_are_snapped_and_inclusive() {
        let bounds = LogicalBounds {
            min: vec2(-120.0, 10.0),
            max: vec2(30.0, 99.0),
        };
        let lines = grid_lines(bounds, 50.0);
        assert_eq!(lines.xs, vec![-150.0, -100.0, -50.0, 0.0, 50.0]);
        assert_eq!(lines.ys, vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn lines_on_exact_multiples_are_not_widened() {
        let bounds = LogicalBounds {
            min: vec2(0.0, -50.0),
            max: vec2(100.0, 50.0),
        };
        let lines = grid_lines(bounds, 50.0);
        assert_eq!(lines.xs, vec![0.0, 50.0, 100.0]);
        assert_eq!(lines.ys, vec![-50.0, 0.0, 50.0]);
    }

    #[test]
    fn visible_bounds_follow_the_viewport() {
        let viewport = Viewport::new(800.0, 626.0);
        let bounds = visible_logical_bounds(&viewport);
        assert_eq!(bounds.min, vec2(-400.0, -300.0));
        assert_eq!(bounds.max, vec2(400.0, 326.0));
    }

    #[test]
    fn plan_covers_the_surface() {
        let mut viewport = Viewport::new(640.0, 480.0);
        viewport.zoom_at(eframe::egui::pos2(10.0, 10.0), 3.3);
        let plan = GridPlan::for_viewport(&viewport);
        let first_x = plan.lines.xs.first().copied().unwrap();
        let last_x = plan.lines.xs.last().copied().unwrap();
        assert!(first_x <= plan.bounds.min.x + 1e-3);
        assert!(last_x >= plan.bounds.max.x - 1e-3);
        let pixels = (plan.lines.xs[1] - plan.lines.xs[0]) * viewport.zoom();
        assert!((GRID_MIN_PIXELS - 1e-3..=GRID_MAX_PIXELS + 1e-3).contains(&pixels));
    }

    proptest! {
        #[test]
        fn spacing_lands_in_band(zoom in MIN_ZOOM..=MAX_ZOOM) {
            let spacing = compute_spacing(zoom, GRID_BASE_UNIT, GRID_MIN_PIXELS, GRID_MAX_PIXELS);
            let pixels = spacing * zoom;
            prop_assert!(pixels >= GRID_MIN_PIXELS && pixels <= GRID_MAX_PIXELS, "{pixels}");
        }
    }
}
