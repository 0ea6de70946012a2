use eframe::egui::{Pos2, Vec2, pos2, vec2};

use crate::config::{FOOTER_HEIGHT, MAX_ZOOM, MIN_ZOOM};

/// Uniform pan + zoom mapping between the logical plane and the drawing surface.
///
/// `surface = logical * zoom + offset`, where `offset` is the surface position
/// of the logical origin. Surface coordinates are relative to the top-left
/// corner of the drawing area.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    zoom: f32,
    offset: Vec2,
    surface_size: Vec2,
    footer_height: f32,
}

impl Viewport {
    /// A viewport with the origin centred in the usable part of the surface.
    #[must_use]
    pub fn new(surface_width: f32, surface_height: f32) -> Self {
        let mut viewport = Self {
            zoom: 1.0,
            offset: Vec2::ZERO,
            surface_size: Vec2::ZERO,
            footer_height: FOOTER_HEIGHT,
        };
        viewport.reset(surface_width, surface_height);
        viewport
    }

    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    #[must_use]
    pub fn surface_size(&self) -> Vec2 {
        self.surface_size
    }

    #[must_use]
    pub fn surface_center(&self) -> Pos2 {
        (self.surface_size * 0.5).to_pos2()
    }

    #[must_use]
    pub fn to_logical(&self, surface: Pos2) -> Vec2 {
        (surface.to_vec2() - self.offset) / self.zoom
    }

    #[must_use]
    pub fn to_surface(&self, logical: Vec2) -> Pos2 {
        (logical * self.zoom + self.offset).to_pos2()
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// Scales around `anchor` so the logical point under it stays put.
    ///
    /// Returns `false` when clamping turns the change into a no-op; the view is
    /// left untouched in that case.
    pub fn zoom_at(&mut self, anchor: Pos2, factor: f32) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }

        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if new_zoom == self.zoom {
            return false;
        }

        let before = self.to_logical(anchor);
        self.zoom = new_zoom;
        let after = self.to_logical(anchor);
        self.offset += (after - before) * self.zoom;
        true
    }

    /// Zoom back to 1.0 with the origin centred above the footer.
    pub fn reset(&mut self, surface_width: f32, surface_height: f32) {
        self.surface_size = vec2(surface_width.max(0.0), surface_height.max(0.0));
        self.zoom = 1.0;
        self.offset = vec2(
            self.surface_size.x / 2.0,
            (self.surface_size.y / 2.0) - (self.footer_height / 2.0),
        );
    }

    /// Records new surface dimensions; zoom and offset are unchanged.
    pub fn resize(&mut self, surface_width: f32, surface_height: f32) {
        self.surface_size = vec2(surface_width.max(0.0), surface_height.max(0.0));
    }

    #[must_use]
    pub fn surface_contains(&self, surface: Pos2, margin: f32) -> bool {
        surface.x >= -margin
            && surface.y >= -margin
            && surface.x <= self.surface_size.x + margin
            && surface.y <= self.surface_size.y + margin
    }

    #[must_use]
    pub fn bottom_right(&self) -> Pos2 {
        pos2(self.surface_size.x, self.surface_size.y)
    }
}
