//! Drives tour playback progress over time.
//!
//! Both policies share one contract: [`AnimationScheduler::tick`] hands back
//! the next progress value for the renderer plus when it wants to be woken
//! again. A run is tied to the scene generation it started from and aborts
//! silently as soon as the scene moves on.

use std::time::{Duration, Instant};

/// How progress advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    /// One tour edge per step, `step_delay` apart.
    StepLocked { step_delay: Duration },
    /// Progress follows wall-clock time across `duration`, redrawn every frame.
    FrameLocked { duration: Duration },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    pub progress: f32,
    /// Whether the exploration trace should be rebuilt for this frame.
    pub refresh_trace: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wake {
    NextFrame,
    After(Duration),
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    /// Nothing is playing.
    Idle,
    /// Playing, but no new step is due yet.
    Waiting(Wake),
    /// New progress to paint.
    Frame(AnimationFrame, Wake),
    /// The scene changed under the run; it has been dropped.
    Aborted,
}

#[derive(Clone, Debug)]
struct ActiveRun {
    playback: Playback,
    generation: u64,
    edge_count: usize,
    started_at: Instant,
    steps_taken: usize,
}

#[derive(Clone, Debug)]
pub struct AnimationScheduler {
    playback: Playback,
    active: Option<ActiveRun>,
}

impl AnimationScheduler {
    #[must_use]
    pub fn new(playback: Playback) -> Self {
        Self {
            playback,
            active: None,
        }
    }

    /// Applies to the next run; a run already playing keeps its policy.
    pub fn set_playback(&mut self, playback: Playback) {
        self.playback = playback;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Begins playback of a tour with `edge_count` edges, replacing any run in flight.
    pub fn start(&mut self, generation: u64, edge_count: usize, now: Instant) {
        if edge_count == 0 {
            self.active = None;
            return;
        }

        self.active = Some(ActiveRun {
            playback: self.playback,
            generation,
            edge_count,
            started_at: now,
            steps_taken: 0,
        });
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn tick(&mut self, current_generation: u64, now: Instant) -> Tick {
        let Some(run) = self.active.as_mut() else {
            return Tick::Idle;
        };

        if run.generation != current_generation {
            tracing::debug!(
                started = run.generation,
                current = current_generation,
                "scene changed, dropping tour animation"
            );
            self.active = None;
            return Tick::Aborted;
        }

        let elapsed = now.saturating_duration_since(run.started_at);
        let tick = match run.playback {
            Playback::StepLocked { step_delay } => step_tick(run, step_delay, elapsed),
            Playback::FrameLocked { duration } => frame_tick(duration, elapsed),
        };

        if matches!(tick, Tick::Frame(_, Wake::Done)) {
            self.active = None;
        }
        tick
    }
}

fn step_tick(run: &mut ActiveRun, step_delay: Duration, elapsed: Duration) -> Tick {
    let due_at = step_delay.saturating_mul(run.steps_taken as u32);
    if elapsed < due_at {
        return Tick::Waiting(Wake::After(due_at - elapsed));
    }

    run.steps_taken += 1;
    let frame = AnimationFrame {
        progress: run.steps_taken as f32 / run.edge_count as f32,
        refresh_trace: true,
    };

    let wake = if run.steps_taken >= run.edge_count {
        Wake::Done
    } else {
        let next_due = step_delay.saturating_mul(run.steps_taken as u32);
        Wake::After(next_due.saturating_sub(elapsed))
    };
    Tick::Frame(frame, wake)
}

fn frame_tick(duration: Duration, elapsed: Duration) -> Tick {
    let progress = if duration.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
    };

    if progress >= 1.0 {
        Tick::Frame(
            AnimationFrame {
                progress: 1.0,
                refresh_trace: true,
            },
            Wake::Done,
        )
    } else {
        Tick::Frame(
            AnimationFrame {
                progress,
                refresh_trace: false,
            },
            Wake::NextFrame,
        )
    }
}
