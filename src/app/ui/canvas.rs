use std::time::Instant;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Ui, pos2, vec2};

use crate::config::FOOTER_HEIGHT;
use crate::render::EguiCanvas;

use super::super::TspVoyagerApp;
use super::super::input::InputEvent;
use super::super::session::InteractionMode;

const FOOTER_BACKGROUND: Color32 = Color32::from_rgba_premultiplied(5, 7, 20, 220);
const FOOTER_TEXT: Color32 = Color32::from_rgb(180, 190, 210);

impl TspVoyagerApp {
    /// Allocates the drawing surface, feeds its input to the session and paints the scene.
    pub(in crate::app) fn draw_canvas(&mut self, ui: &mut Ui, now: Instant) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }

        if rect.size() != self.session.viewport.surface_size() {
            self.dispatch(
                InputEvent::Resize {
                    width: rect.width(),
                    height: rect.height(),
                },
                now,
            );
        }

        for event in self.collect_canvas_input(ui, rect, &response) {
            self.dispatch(event, now);
        }

        let painter = ui.painter_at(rect);
        let mut canvas = EguiCanvas::new(&painter, rect.min);
        self.session.render(&mut canvas);
        self.draw_footer(&painter, rect);
    }

    fn collect_canvas_input(&self, ui: &Ui, rect: Rect, response: &egui::Response) -> Vec<InputEvent> {
        let to_surface = |pos: Pos2| (pos - rect.min).to_pos2();
        let mut events = Vec::new();

        match response.hover_pos() {
            Some(pos) => events.push(InputEvent::PointerMoved(to_surface(pos))),
            None if self.session.cursor.is_some() => events.push(InputEvent::PointerLeft),
            None => {}
        }

        let panning = response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
            || (self.session.mode == InteractionMode::Pan
                && response.dragged_by(egui::PointerButton::Primary));
        if panning {
            let press_origin = ui.input(|input| input.pointer.press_origin());
            events.extend(pan_events(
                response.drag_started(),
                press_origin.map(to_surface),
                response.interact_pointer_pos().map(to_surface),
            ));
        }
        if response.drag_stopped() {
            events.push(InputEvent::PanEnd);
        }

        if self.session.mode == InteractionMode::Place
            && response.clicked_by(egui::PointerButton::Primary)
            && let Some(pos) = response.interact_pointer_pos()
        {
            events.push(InputEvent::PlacePoint(to_surface(pos)));
        }

        if response.hovered() {
            let scroll = ui.input(|input| input.raw_scroll_delta.y);
            if scroll.abs() > f32::EPSILON
                && let Some(pos) = response.hover_pos()
            {
                // egui scrolls positive upwards; wheel-up zooms in
                events.push(InputEvent::WheelZoom {
                    at: to_surface(pos),
                    delta_y: -scroll,
                });
            }
        }

        events
    }

    fn draw_footer(&self, painter: &egui::Painter, rect: Rect) {
        let footer = Rect::from_min_max(pos2(rect.min.x, rect.max.y - FOOTER_HEIGHT), rect.max);
        painter.rect_filled(footer, 0.0, FOOTER_BACKGROUND);

        let font = FontId::monospace(12.0);
        let baseline = footer.center().y;
        if let Some(cursor) = self.session.cursor_text() {
            painter.text(
                pos2(footer.min.x + 10.0, baseline),
                Align2::LEFT_CENTER,
                cursor,
                font.clone(),
                FOOTER_TEXT,
            );
        }

        let stats = self.session.render_stats();
        painter.text(
            footer.center(),
            Align2::CENTER_CENTER,
            format!("in view: {} points, {} edges", stats.points, stats.edges),
            font.clone(),
            FOOTER_TEXT,
        );
        painter.text(
            footer.right_center() - vec2(10.0, 0.0),
            Align2::RIGHT_CENTER,
            self.session.zoom_text(),
            font,
            FOOTER_TEXT,
        );
    }
}

/// Pan events for one frame of a drag, in surface coordinates.
///
/// egui reports a drag only once the pointer passes its drag threshold, so the
/// first frame anchors at the press origin and moves straight to the pointer.
fn pan_events(drag_started: bool, press_origin: Option<Pos2>, pointer: Option<Pos2>) -> Vec<InputEvent> {
    let mut events = Vec::with_capacity(2);
    if drag_started && let Some(origin) = press_origin.or(pointer) {
        events.push(InputEvent::PanStart(origin));
    }
    if let Some(at) = pointer {
        events.push(InputEvent::PanMove(at));
    }
    events
}
