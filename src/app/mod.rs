use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui::{self, Context, vec2};

use crate::animation::Wake;
use crate::config::Settings;
use crate::solver::SolveService;

mod input;
mod session;
mod ui;

use input::InputEvent;
use session::Session;

/// How often the UI checks on an in-flight solve.
const SOLVE_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct TspVoyagerApp {
    session: Session,
}

impl TspVoyagerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        settings: Settings,
        solver: Arc<dyn SolveService>,
    ) -> Self {
        let [width, height] = settings.window_size;
        Self {
            session: Session::new(settings, solver, vec2(width, height)),
        }
    }

    fn dispatch(&mut self, event: InputEvent, now: Instant) {
        if let Err(error) = self.session.handle_input(event, now) {
            tracing::debug!(%error, ?event, "input rejected");
        }
    }

    fn schedule_repaint(&mut self, ctx: &Context, wake: Option<Wake>, now: Instant) {
        match wake {
            Some(Wake::NextFrame) => ctx.request_repaint(),
            Some(Wake::After(delay)) => ctx.request_repaint_after(delay),
            Some(Wake::Done) | None => {}
        }
        if self.session.is_solving() {
            ctx.request_repaint_after(SOLVE_POLL_INTERVAL);
        }
        if let Some((_, remaining)) = self.session.notice(now) {
            ctx.request_repaint_after(remaining);
        }
        if self.session.take_redraw() {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for TspVoyagerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if let Some(Err(error)) = self.session.poll_solve(now) {
            tracing::debug!(%error, "solve result not applied");
        }
        let wake = self.session.tick_animation(now);

        let mut events = Vec::new();
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| self.draw_top_bar(ui, now, &mut events));

        egui::SidePanel::right("exploration")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| self.draw_exploration(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_canvas(ui, now));

        for event in events {
            self.dispatch(event, now);
        }

        self.schedule_repaint(ctx, wake, now);
    }
}
