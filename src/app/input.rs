use std::time::Instant;

use eframe::egui::Pos2;

use crate::config::ZOOM_STEP;
use crate::error::Result;
use crate::solver::Algorithm;

use super::session::{InteractionMode, Session};

/// Pointer, wheel, button and window events, in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum InputEvent {
    PointerMoved(Pos2),
    PointerLeft,
    PanStart(Pos2),
    PanMove(Pos2),
    PanEnd,
    PlacePoint(Pos2),
    /// `delta_y < 0` zooms in, matching browser wheel events.
    WheelZoom { at: Pos2, delta_y: f32 },
    ZoomIn,
    ZoomOut,
    ResetView,
    ClearAll,
    SetMode(InteractionMode),
    RequestSolve(Algorithm),
    Resize { width: f32, height: f32 },
}

impl Session {
    pub(crate) fn handle_input(&mut self, event: InputEvent, now: Instant) -> Result<()> {
        match event {
            InputEvent::PointerMoved(at) => {
                self.cursor = Some(self.viewport.to_logical(at));
            }
            InputEvent::PointerLeft => {
                self.cursor = None;
            }
            InputEvent::PanStart(at) => {
                self.pan_anchor = Some(at);
            }
            InputEvent::PanMove(at) => {
                if let Some(anchor) = self.pan_anchor.replace(at) {
                    self.viewport.pan(at - anchor);
                    self.needs_redraw = true;
                }
            }
            InputEvent::PanEnd => {
                self.pan_anchor = None;
            }
            InputEvent::PlacePoint(at) => {
                let logical = self.viewport.to_logical(at);
                let id = self.scene.add_point(logical);
                tracing::debug!(id, x = logical.x, y = logical.y, "point placed");
                self.clear_trace();
                self.needs_redraw = true;
            }
            InputEvent::WheelZoom { at, delta_y } => {
                if delta_y != 0.0 {
                    let factor = if delta_y < 0.0 {
                        1.0 + ZOOM_STEP
                    } else {
                        1.0 - ZOOM_STEP
                    };
                    self.zoom_at(at, factor);
                }
            }
            InputEvent::ZoomIn => {
                let center = self.viewport.surface_center();
                self.zoom_at(center, 1.0 + ZOOM_STEP);
            }
            InputEvent::ZoomOut => {
                let center = self.viewport.surface_center();
                self.zoom_at(center, 1.0 - ZOOM_STEP);
            }
            InputEvent::ResetView => {
                let size = self.viewport.surface_size();
                self.viewport.reset(size.x, size.y);
                tracing::debug!(offset = ?self.viewport.offset(), "view reset");
                self.needs_redraw = true;
            }
            InputEvent::ClearAll => {
                self.scheduler.cancel();
                self.scene.clear();
                self.clear_trace();
                self.needs_redraw = true;
            }
            InputEvent::SetMode(mode) => {
                self.mode = mode;
                self.pan_anchor = None;
            }
            InputEvent::RequestSolve(algorithm) => {
                self.algorithm = algorithm;
                self.request_solve(algorithm, now)?;
            }
            InputEvent::Resize { width, height } => {
                tracing::debug!(width, height, "surface resized");
                self.viewport.resize(width, height);
                self.viewport.reset(width, height);
                self.needs_redraw = true;
            }
        }
        Ok(())
    }

    fn zoom_at(&mut self, anchor: Pos2, factor: f32) {
        if self.viewport.zoom_at(anchor, factor) {
            self.needs_redraw = true;
        }
    }
}
