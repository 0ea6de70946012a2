use std::time::Duration;

use anyhow::{Result, bail};

use crate::animation::Playback;
use crate::solver::Algorithm;

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 10.0;
pub const ZOOM_STEP: f32 = 0.1;

/// Grid spacing at zoom 1.0, in logical units.
pub const GRID_BASE_UNIT: f32 = 50.0;
pub const GRID_MIN_PIXELS: f32 = 30.0;
pub const GRID_MAX_PIXELS: f32 = 120.0;

/// Height of the status footer painted over the bottom of the surface.
pub const FOOTER_HEIGHT: f32 = 26.0;

/// Points and edges further than this outside the surface are not painted.
pub const CULL_MARGIN: f32 = 50.0;

pub const NOTICE_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum PlaybackKind {
    /// Reveal one edge per step.
    Step,
    /// Ease over a fixed duration, one redraw per frame.
    Continuous,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub solve_url: String,
    /// `None` waits for the solver as long as it takes.
    pub solve_timeout: Option<Duration>,
    pub playback: PlaybackKind,
    pub step_delay: Duration,
    pub animation_duration: Duration,
    pub algorithm: Algorithm,
    pub window_size: [f32; 2],
}

impl Settings {
    pub fn new(
        server: &str,
        playback: PlaybackKind,
        step_delay_ms: u64,
        animation_ms: u64,
        algorithm: Algorithm,
        window_size: [f32; 2],
    ) -> Result<Self> {
        let server = server.trim().trim_end_matches('/');
        if server.is_empty() {
            bail!("solver server URL must not be empty");
        }
        if step_delay_ms == 0 {
            bail!("--step-delay-ms must be greater than zero");
        }
        if animation_ms == 0 {
            bail!("--animation-ms must be greater than zero");
        }
        if window_size.iter().any(|side| !side.is_finite() || *side < 200.0) {
            bail!("window size must be at least 200x200, got {window_size:?}");
        }

        Ok(Self {
            solve_url: format!("{server}/solve"),
            solve_timeout: None,
            playback,
            step_delay: Duration::from_millis(step_delay_ms),
            animation_duration: Duration::from_millis(animation_ms),
            algorithm,
            window_size,
        })
    }

    pub fn with_solve_timeout(mut self, timeout_ms: Option<u64>) -> Result<Self> {
        if timeout_ms == Some(0) {
            bail!("--solve-timeout-ms must be greater than zero when given");
        }
        self.solve_timeout = timeout_ms.map(Duration::from_millis);
        Ok(self)
    }

    #[must_use]
    pub fn playback_for(&self, kind: PlaybackKind) -> Playback {
        match kind {
            PlaybackKind::Step => Playback::StepLocked {
                step_delay: self.step_delay,
            },
            PlaybackKind::Continuous => Playback::FrameLocked {
                duration: self.animation_duration,
            },
        }
    }
}
