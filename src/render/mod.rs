//! Paints one frame of the scene onto a [`Canvas`].
//!
//! Layers go back to front: background, grid, axes and their labels, the
//! revealed part of the tour, then the points on top. Nothing here keeps
//! state between frames.

mod backdrop;
mod egui_canvas;
mod points;
mod reveal;
mod style;
mod tour;

#[cfg(test)]
mod recording;

use eframe::egui::{Align2, Color32, FontId, Pos2, Rect, Stroke};

use crate::scene::SceneModel;
use crate::view::{GridPlan, Viewport};

pub use egui_canvas::EguiCanvas;
pub use reveal::TourReveal;

/// Drawing surface in surface coordinates (origin at the top-left corner).
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color32);
    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke);
    fn circle_filled(&mut self, center: Pos2, radius: f32, color: Color32);
    fn circle_stroke(&mut self, center: Pos2, radius: f32, stroke: Stroke);
    fn triangle(&mut self, corners: [Pos2; 3], color: Color32);
    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, font: FontId, color: Color32);
}

/// Counts of what actually reached the canvas after culling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub points: usize,
    pub edges: usize,
}

pub fn render_scene(canvas: &mut dyn Canvas, scene: &SceneModel, viewport: &Viewport) -> RenderStats {
    let surface = Rect::from_min_size(Pos2::ZERO, viewport.surface_size());
    let grid = GridPlan::for_viewport(viewport);

    backdrop::draw_background(canvas, surface);
    backdrop::draw_grid(canvas, viewport, &grid);
    backdrop::draw_axes(canvas, viewport, &grid);

    let mut stats = RenderStats::default();
    if scene.has_tour() && scene.progress() > 0.0 {
        let reveal = TourReveal::at(scene.tour().len(), scene.progress());
        stats.edges = tour::draw_tour(canvas, scene, viewport, reveal);
    }
    stats.points = points::draw_points(canvas, scene, viewport);
    stats
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::recording::{Op, RecordingCanvas};
    use super::*;

    fn square_scene() -> SceneModel {
        let mut scene = SceneModel::new();
        for (x, y) in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)] {
            scene.add_point(vec2(x, y));
        }
        scene.set_tour(vec![0, 1, 2, 3]).unwrap();
        scene
    }

    #[test]
    fn layers_are_painted_back_to_front() {
        let mut scene = square_scene();
        scene.advance_progress(scene.generation(), 1.0);
        let viewport = Viewport::new(800.0, 600.0);
        let mut canvas = RecordingCanvas::default();

        let stats = render_scene(&mut canvas, &scene, &viewport);

        assert_eq!(stats, RenderStats { points: 4, edges: 4 });
        assert!(matches!(canvas.ops.first(), Some(Op::FillRect { .. })));

        let first_tour = canvas.first_index(|op| op.is_tour_line()).unwrap();
        let last_grid = canvas.last_index(|op| op.is_grid_line()).unwrap();
        let first_point = canvas.first_index(|op| op.is_point_disc()).unwrap();
        let last_arrow = canvas.last_index(|op| matches!(op, Op::Triangle { .. })).unwrap();
        assert!(last_grid < first_tour);
        assert!(last_arrow < first_point);
    }

    #[test]
    fn zero_progress_hides_the_tour() {
        let scene = square_scene();
        let viewport = Viewport::new(800.0, 600.0);
        let mut canvas = RecordingCanvas::default();

        let stats = render_scene(&mut canvas, &scene, &viewport);

        assert_eq!(stats.edges, 0);
        assert!(!canvas.ops.iter().any(Op::is_tour_line));
    }

    #[test]
    fn rendering_does_not_touch_the_scene() {
        let mut scene = square_scene();
        scene.advance_progress(scene.generation(), 0.4);
        let generation = scene.generation();
        let viewport = Viewport::new(50.0, 50.0);
        let mut canvas = RecordingCanvas::default();

        render_scene(&mut canvas, &scene, &viewport);

        assert_eq!(scene.generation(), generation);
        assert_eq!(scene.progress(), 0.4);
        assert_eq!(scene.tour(), &[0, 1, 2, 3]);
    }
}
