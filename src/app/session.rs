use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui::{Pos2, Vec2};

use crate::animation::{AnimationScheduler, Tick, Wake};
use crate::config::{NOTICE_LIFETIME, PlaybackKind, Settings};
use crate::error::{Result, VoyagerError};
use crate::render::{Canvas, RenderStats, TourReveal, render_scene};
use crate::scene::{SceneModel, TraceStep, indices_from_route};
use crate::solver::{Algorithm, PendingSolve, SolveRequest, SolveResponse, SolveService, spawn_solve};
use crate::util::{format_cursor, format_distance, format_zoom};
use crate::view::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum InteractionMode {
    /// Primary click places a point.
    Place,
    /// Primary drag pans the view.
    Pan,
}

struct Notice {
    message: String,
    expires_at: Instant,
}

/// All state of one running front-end, owned in one place.
pub(crate) struct Session {
    pub(super) viewport: Viewport,
    pub(super) scene: SceneModel,
    pub(super) scheduler: AnimationScheduler,
    pub(super) mode: InteractionMode,
    pub(super) algorithm: Algorithm,
    pub(super) playback: PlaybackKind,
    pub(super) pan_anchor: Option<Pos2>,
    pub(super) cursor: Option<Vec2>,
    pub(super) needs_redraw: bool,
    settings: Settings,
    solver: Arc<dyn SolveService>,
    pending: Option<PendingSolve>,
    solved_with: Option<Algorithm>,
    trace: Vec<TraceStep>,
    notice: Option<Notice>,
    render_stats: RenderStats,
}

impl Session {
    pub(crate) fn new(settings: Settings, solver: Arc<dyn SolveService>, surface_size: Vec2) -> Self {
        let scheduler = AnimationScheduler::new(settings.playback_for(settings.playback));
        Self {
            viewport: Viewport::new(surface_size.x, surface_size.y),
            scene: SceneModel::new(),
            scheduler,
            mode: InteractionMode::Place,
            algorithm: settings.algorithm,
            playback: settings.playback,
            pan_anchor: None,
            cursor: None,
            needs_redraw: true,
            settings,
            solver,
            pending: None,
            solved_with: None,
            trace: Vec::new(),
            notice: None,
            render_stats: RenderStats::default(),
        }
    }

    pub(crate) fn set_playback(&mut self, kind: PlaybackKind) {
        self.playback = kind;
        self.scheduler.set_playback(self.settings.playback_for(kind));
    }

    /// Sends the current points to the solver on a worker thread.
    pub(crate) fn request_solve(&mut self, algorithm: Algorithm, now: Instant) -> Result<()> {
        if self.pending.is_some() {
            tracing::debug!("solve already in flight, ignoring request");
            return Ok(());
        }

        let count = self.scene.point_count();
        if count < 2 {
            let error = VoyagerError::InsufficientPoints { count };
            self.show_notice(error.notice(), now);
            return Err(error);
        }

        tracing::info!(points = count, ?algorithm, "requesting tour from solver");
        let request = SolveRequest {
            cities: self.scene.points().to_vec(),
            algorithm,
        };
        self.pending = Some(spawn_solve(
            Arc::clone(&self.solver),
            request,
            self.scene.generation(),
        ));
        Ok(())
    }

    /// Applies the solver's answer if it has arrived. `None` while still waiting.
    pub(crate) fn poll_solve(&mut self, now: Instant) -> Option<Result<()>> {
        let result = self.pending.as_ref()?.try_take()?;
        let pending = self.pending.take()?;
        Some(self.apply_solve_result(pending.generation, pending.algorithm, result, now))
    }

    /// Installs a solver response built from scene `generation`.
    ///
    /// Any failure leaves the tour as it was and raises a notice instead.
    pub(crate) fn apply_solve_result(
        &mut self,
        generation: u64,
        algorithm: Algorithm,
        result: std::result::Result<SolveResponse, String>,
        now: Instant,
    ) -> Result<()> {
        let outcome = self.install_tour(generation, result);
        match &outcome {
            Ok(()) => {
                self.solved_with = Some(algorithm);
                self.trace.clear();
                self.scheduler
                    .start(self.scene.generation(), self.scene.tour().len(), now);
                self.needs_redraw = true;
                tracing::info!(
                    ?algorithm,
                    distance = self.scene.tour_length(),
                    "tour received"
                );
            }
            Err(error) => {
                tracing::warn!(%error, "solve did not produce a tour");
                self.show_notice(error.notice(), now);
            }
        }
        outcome
    }

    fn install_tour(
        &mut self,
        generation: u64,
        result: std::result::Result<SolveResponse, String>,
    ) -> Result<()> {
        let response = result.map_err(VoyagerError::SolveRequestFailed)?;
        if generation != self.scene.generation() {
            return Err(VoyagerError::SceneChanged);
        }
        let indices = indices_from_route(&response.route, self.scene.point_count())?;
        self.scene.set_tour(indices)?;
        Ok(())
    }

    /// Advances playback; returns when the scheduler wants to run again.
    pub(crate) fn tick_animation(&mut self, now: Instant) -> Option<Wake> {
        let generation = self.scene.generation();
        match self.scheduler.tick(generation, now) {
            Tick::Idle | Tick::Aborted => None,
            Tick::Waiting(wake) => Some(wake),
            Tick::Frame(frame, wake) => {
                if self.scene.advance_progress(generation, frame.progress) {
                    if frame.refresh_trace {
                        let reveal = TourReveal::at(self.scene.tour().len(), self.scene.progress());
                        self.trace = self.scene.trace(reveal.full_edges);
                    }
                    self.needs_redraw = true;
                }
                Some(wake)
            }
        }
    }

    pub(crate) fn render(&mut self, canvas: &mut dyn Canvas) {
        self.render_stats = render_scene(canvas, &self.scene, &self.viewport);
        self.needs_redraw = false;
    }

    /// Whether state changed after the last paint of this frame.
    pub(crate) fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub(super) fn show_notice(&mut self, message: String, now: Instant) {
        self.notice = Some(Notice {
            message,
            expires_at: now + NOTICE_LIFETIME,
        });
    }

    pub(crate) fn notice(&self, now: Instant) -> Option<(&str, Duration)> {
        self.notice
            .as_ref()
            .filter(|notice| notice.expires_at > now)
            .map(|notice| (notice.message.as_str(), notice.expires_at - now))
    }

    pub(super) fn clear_trace(&mut self) {
        self.trace.clear();
    }

    pub(crate) fn is_solving(&self) -> bool {
        self.pending.is_some()
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.scheduler.is_active()
    }

    pub(crate) fn point_count(&self) -> usize {
        self.scene.point_count()
    }

    pub(crate) fn distance_text(&self) -> String {
        let distance = self.scene.has_tour().then(|| self.scene.tour_length());
        format_distance(distance)
    }

    pub(crate) fn zoom_text(&self) -> String {
        format_zoom(self.viewport.zoom())
    }

    pub(crate) fn cursor_text(&self) -> Option<String> {
        self.cursor.map(format_cursor)
    }

    pub(crate) fn trace(&self) -> &[TraceStep] {
        &self.trace
    }

    pub(crate) fn badge(&self) -> Option<&'static str> {
        self.solved_with.map(Algorithm::badge)
    }

    pub(crate) fn render_stats(&self) -> RenderStats {
        self.render_stats
    }
}

#[cfg(test)]
pub(super) mod tests {
    use anyhow::anyhow;
    use eframe::egui::vec2;

    use super::*;
    use crate::render::Canvas;

    pub(in crate::app) struct Fixed(pub(in crate::app) Vec<i64>);

    impl SolveService for Fixed {
        fn solve(&self, _request: &SolveRequest) -> anyhow::Result<SolveResponse> {
            Ok(SolveResponse {
                route: self.0.clone(),
            })
        }
    }

    struct Unreachable;

    impl SolveService for Unreachable {
        fn solve(&self, _request: &SolveRequest) -> anyhow::Result<SolveResponse> {
            Err(anyhow!("connection refused"))
        }
    }

    struct NullCanvas;

    impl Canvas for NullCanvas {
        fn fill_rect(&mut self, _: eframe::egui::Rect, _: eframe::egui::Color32) {}
        fn line(&mut self, _: Pos2, _: Pos2, _: eframe::egui::Stroke) {}
        fn circle_filled(&mut self, _: Pos2, _: f32, _: eframe::egui::Color32) {}
        fn circle_stroke(&mut self, _: Pos2, _: f32, _: eframe::egui::Stroke) {}
        fn triangle(&mut self, _: [Pos2; 3], _: eframe::egui::Color32) {}
        fn text(
            &mut self,
            _: Pos2,
            _: eframe::egui::Align2,
            _: &str,
            _: eframe::egui::FontId,
            _: eframe::egui::Color32,
        ) {
        }
    }

    pub(in crate::app) fn settings() -> Settings {
        Settings::new(
            "http://127.0.0.1:5000",
            PlaybackKind::Step,
            400,
            1000,
            Algorithm::NearestNeighbor,
            [1280.0, 800.0],
        )
        .unwrap()
    }

    pub(in crate::app) fn session_with(solver: impl SolveService + 'static) -> Session {
        Session::new(settings(), Arc::new(solver), vec2(800.0, 600.0))
    }

    fn add_points(session: &mut Session, points: &[(f32, f32)]) {
        for &(x, y) in points {
            session.scene.add_point(vec2(x, y));
        }
    }

    fn solve_and_wait(session: &mut Session, now: Instant) -> Result<()> {
        session.request_solve(Algorithm::NearestNeighbor, now)?;
        let pending = session.pending.take().unwrap();
        let result = pending.wait();
        session.apply_solve_result(pending.generation, pending.algorithm, result, now)
    }

    #[test]
    fn solve_with_one_point_never_dispatches() {
        let mut session = session_with(Fixed(vec![0]));
        add_points(&mut session, &[(0.0, 0.0)]);
        let now = Instant::now();

        let result = session.request_solve(Algorithm::HeldKarp, now);

        assert!(matches!(result, Err(VoyagerError::InsufficientPoints { count: 1 })));
        assert!(!session.is_solving());
        assert!(session.notice(now).is_some());
    }

    #[test]
    fn successful_solve_installs_tour_and_starts_playback() {
        let mut session = session_with(Fixed(vec![0, 2, 1]));
        add_points(&mut session, &[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let now = Instant::now();

        solve_and_wait(&mut session, now).unwrap();

        assert_eq!(session.scene.tour(), &[0, 2, 1]);
        assert_eq!(session.scene.progress(), 0.0);
        assert!(session.scheduler.is_active());
        assert_eq!(session.badge(), Some("NEAREST"));
        assert_eq!(session.distance_text(), "34.1");
        assert!(!session.is_solving());
    }

    #[test]
    fn failed_solve_keeps_points_and_previous_tour() {
        let mut session = session_with(Unreachable);
        add_points(&mut session, &[(0.0, 0.0), (3.0, 4.0)]);
        session.scene.set_tour(vec![1, 0]).unwrap();
        let now = Instant::now();

        let result = solve_and_wait(&mut session, now);

        assert!(matches!(result, Err(VoyagerError::SolveRequestFailed(_))));
        assert_eq!(session.point_count(), 2);
        assert_eq!(session.scene.tour(), &[1, 0]);
        assert!(!session.is_solving());
        assert_eq!(session.notice(now).map(|(text, _)| text), Some("Error solving TSP. Please try again."));

        session.scene.add_point(vec2(7.0, 7.0));
        assert_eq!(session.point_count(), 3);
    }

    #[test]
    fn invalid_route_is_rejected() {
        let mut session = session_with(Fixed(vec![0, 0, 1]));
        add_points(&mut session, &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);

        let result = solve_and_wait(&mut session, Instant::now());

        assert!(matches!(result, Err(VoyagerError::InvalidTour(_))));
        assert!(!session.scene.has_tour());
        assert!(!session.scheduler.is_active());
        assert_eq!(session.distance_text(), "—");
    }

    #[test]
    fn result_for_an_outdated_point_set_is_discarded() {
        let mut session = session_with(Fixed(vec![0, 1]));
        add_points(&mut session, &[(0.0, 0.0), (1.0, 0.0)]);
        let now = Instant::now();
        session.request_solve(Algorithm::BruteForce, now).unwrap();
        let pending = session.pending.take().unwrap();

        session.scene.add_point(vec2(2.0, 2.0));
        let result = session.apply_solve_result(pending.generation, pending.algorithm, pending.wait(), now);

        assert!(matches!(result, Err(VoyagerError::SceneChanged)));
        assert!(!session.scene.has_tour());
        assert_eq!(session.badge(), None);
    }

    #[test]
    fn step_playback_walks_the_tour_and_fills_the_trace() {
        let mut session = session_with(Fixed(vec![0, 1, 2]));
        add_points(&mut session, &[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]);
        let t0 = Instant::now();
        solve_and_wait(&mut session, t0).unwrap();

        assert_eq!(session.tick_animation(t0), Some(Wake::After(Duration::from_millis(400))));
        assert_eq!(session.trace().len(), 1);
        assert!((session.scene.progress() - 1.0 / 3.0).abs() < 1e-6);

        session.tick_animation(t0 + Duration::from_millis(400));
        assert_eq!(session.trace().len(), 2);

        assert_eq!(session.tick_animation(t0 + Duration::from_millis(800)), Some(Wake::Done));
        assert_eq!(session.scene.progress(), 1.0);
        assert_eq!(session.trace().len(), 3);
        assert_eq!(session.trace()[2].distance, 5.0);
        assert_eq!(session.tick_animation(t0 + Duration::from_secs(5)), None);
    }

    #[test]
    fn adding_a_point_mid_animation_stops_playback() {
        let mut session = session_with(Fixed(vec![0, 1, 2]));
        add_points(&mut session, &[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0)]);
        let t0 = Instant::now();
        solve_and_wait(&mut session, t0).unwrap();
        session.tick_animation(t0);

        session.scene.add_point(vec2(9.0, 9.0));

        assert_eq!(session.tick_animation(t0 + Duration::from_millis(400)), None);
        assert_eq!(session.scene.progress(), 0.0);
        assert!(!session.scheduler.is_active());
    }

    #[test]
    fn continuous_playback_reaches_the_end() {
        let mut session = session_with(Fixed(vec![1, 0]));
        session.set_playback(PlaybackKind::Continuous);
        add_points(&mut session, &[(0.0, 0.0), (3.0, 4.0)]);
        let t0 = Instant::now();
        solve_and_wait(&mut session, t0).unwrap();

        assert_eq!(session.tick_animation(t0 + Duration::from_millis(250)), Some(Wake::NextFrame));
        assert!(session.trace().is_empty());
        assert_eq!(session.tick_animation(t0 + Duration::from_millis(1000)), Some(Wake::Done));
        assert_eq!(session.scene.progress(), 1.0);
        assert_eq!(session.trace().len(), 2);
    }

    #[test]
    fn render_clears_the_redraw_flag() {
        let mut session = session_with(Fixed(vec![]));
        assert!(session.needs_redraw);
        session.render(&mut NullCanvas);
        assert!(!session.take_redraw());
        assert_eq!(session.render_stats(), RenderStats::default());
    }

    #[test]
    fn notice_expires() {
        let mut session = session_with(Fixed(vec![]));
        let now = Instant::now();
        session.show_notice("hello".to_owned(), now);
        assert_eq!(session.notice(now).map(|(text, _)| text), Some("hello"));
        assert!(session.notice(now + NOTICE_LIFETIME).is_none());
    }
}
