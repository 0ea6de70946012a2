mod tour;

use eframe::egui::{Vec2, vec2};
use serde::Serialize;

use crate::error::TourError;

pub use tour::indices_from_route;

/// A placed point on the logical plane. `id` is its insertion index.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub id: usize,
}

impl Point {
    #[must_use]
    pub fn pos(&self) -> Vec2 {
        vec2(self.x, self.y)
    }

    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        (other.pos() - self.pos()).length()
    }
}

/// One walked edge, as listed in the exploration trace.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceStep {
    pub from: usize,
    pub to: usize,
    pub distance: f32,
}

/// Points, the tour over them and how much of that tour has been walked.
///
/// Every mutation of the point set drops the tour and rewinds progress, and
/// bumps `generation` so work started against an older snapshot can tell it
/// is stale.
#[derive(Clone, Debug, Default)]
pub struct SceneModel {
    points: Vec<Point>,
    tour: Vec<usize>,
    progress: f32,
    generation: u64,
}

impl SceneModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    #[must_use]
    pub fn has_tour(&self) -> bool {
        !self.tour.is_empty()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn add_point(&mut self, logical: Vec2) -> usize {
        let id = self.points.len();
        self.points.push(Point {
            x: logical.x,
            y: logical.y,
            id,
        });
        self.invalidate();
        id
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.invalidate();
    }

    /// Replaces the tour if `indices` is a permutation of the current points.
    ///
    /// On error the previous tour and progress are left as they were.
    pub fn set_tour(&mut self, indices: Vec<usize>) -> Result<(), TourError> {
        tour::validate_permutation(&indices, self.points.len())?;
        self.tour = indices;
        self.progress = 0.0;
        self.generation += 1;
        Ok(())
    }

    /// Moves progress forward for the snapshot identified by `generation`.
    ///
    /// Returns `false` without touching anything when the scene has changed
    /// since. Progress never moves backwards and is capped at 1.
    pub fn advance_progress(&mut self, generation: u64, progress: f32) -> bool {
        if generation != self.generation {
            return false;
        }
        self.progress = self.progress.max(progress.clamp(0.0, 1.0));
        true
    }

    /// Start and end of the edge leaving tour position `position`.
    #[must_use]
    pub fn edge(&self, position: usize) -> Option<(Point, Point)> {
        let len = self.tour.len();
        if position >= len {
            return None;
        }
        let from = self.points.get(self.tour[position])?;
        let to = self.points.get(self.tour[(position + 1) % len])?;
        Some((*from, *to))
    }

    #[must_use]
    pub fn edge_length(&self, position: usize) -> Option<f32> {
        self.edge(position).map(|(from, to)| from.distance(&to))
    }

    /// Length of the closed tour, 0 when there is none.
    #[must_use]
    pub fn tour_length(&self) -> f32 {
        (0..self.tour.len())
            .filter_map(|position| self.edge_length(position))
            .sum()
    }

    /// The first `edge_count` edges of the tour with their lengths.
    #[must_use]
    pub fn trace(&self, edge_count: usize) -> Vec<TraceStep> {
        (0..edge_count.min(self.tour.len()))
            .filter_map(|position| {
                let (from, to) = self.edge(position)?;
                Some(TraceStep {
                    from: from.id,
                    to: to.id,
                    distance: from.distance(&to),
                })
            })
            .collect()
    }

    fn invalidate(&mut self) {
        self.tour.clear();
        self.progress = 0.0;
        self.generation += 1;
    }
}
