use std::time::Instant;

use eframe::egui::{self, Align, Color32, Layout, RichText, Ui};

use crate::config::PlaybackKind;
use crate::solver::Algorithm;
use crate::util::format_trace_step;

use super::super::TspVoyagerApp;
use super::super::input::InputEvent;
use super::super::session::InteractionMode;

const NOTICE_COLOR: Color32 = Color32::from_rgb(255, 120, 120);
const BADGE_COLOR: Color32 = Color32::from_rgb(0, 255, 204);

impl TspVoyagerApp {
    pub(in crate::app) fn draw_top_bar(
        &mut self,
        ui: &mut Ui,
        now: Instant,
        events: &mut Vec<InputEvent>,
    ) {
        let session = &mut self.session;

        ui.horizontal(|ui| {
            ui.heading("tsp-voyager");
            ui.separator();

            let mut mode = session.mode;
            ui.selectable_value(&mut mode, InteractionMode::Place, "Place");
            ui.selectable_value(&mut mode, InteractionMode::Pan, "Pan");
            if mode != session.mode {
                events.push(InputEvent::SetMode(mode));
            }
            ui.separator();

            if ui.button("−").on_hover_text("Zoom out").clicked() {
                events.push(InputEvent::ZoomOut);
            }
            if ui.button("+").on_hover_text("Zoom in").clicked() {
                events.push(InputEvent::ZoomIn);
            }
            if ui.button("Reset view").clicked() {
                events.push(InputEvent::ResetView);
            }
            if ui.button("Clear").clicked() {
                events.push(InputEvent::ClearAll);
            }
            ui.separator();

            egui::ComboBox::from_id_salt("algorithm")
                .selected_text(session.algorithm.label())
                .show_ui(ui, |ui| {
                    for algorithm in Algorithm::ALL {
                        ui.selectable_value(&mut session.algorithm, algorithm, algorithm.label());
                    }
                });

            let solving = session.is_solving();
            let solve_button = ui.add_enabled(!solving, egui::Button::new("Solve"));
            if solve_button.clicked() {
                events.push(InputEvent::RequestSolve(session.algorithm));
            }
            if solving {
                ui.spinner();
            }
            if let Some((message, _)) = session.notice(now) {
                ui.label(RichText::new(message).color(NOTICE_COLOR));
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if let Some(badge) = session.badge() {
                    ui.label(RichText::new(badge).strong().color(BADGE_COLOR));
                }
                ui.label(format!("distance: {}", session.distance_text()));
                ui.label(format!("points: {}", session.point_count()));
            });
        });
    }

    pub(in crate::app) fn draw_exploration(&mut self, ui: &mut Ui) {
        let session = &mut self.session;

        ui.heading("Exploration");
        ui.horizontal(|ui| {
            ui.label("Playback:");
            let mut playback = session.playback;
            ui.selectable_value(&mut playback, PlaybackKind::Step, "Step");
            ui.selectable_value(&mut playback, PlaybackKind::Continuous, "Continuous");
            if playback != session.playback {
                session.set_playback(playback);
            }
            if session.is_animating() {
                ui.label(RichText::new("revealing").weak());
            }
        });
        ui.separator();

        if session.trace().is_empty() {
            ui.label(RichText::new("No route yet").weak());
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("exploration_trace_scroll")
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for step in session.trace() {
                    ui.monospace(format_trace_step(step));
                }
            });
    }
}
