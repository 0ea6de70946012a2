//! Boundary to the remote tour solver.
//!
//! Requests run on a worker thread and hand their outcome back over a
//! channel, so the UI thread only ever polls.

mod http;

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use serde::{Deserialize, Serialize};

use crate::scene::Point;

pub use http::HttpSolveService;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    NearestNeighbor,
    HeldKarp,
    BruteForce,
}

impl Algorithm {
    pub const ALL: [Self; 3] = [Self::NearestNeighbor, Self::HeldKarp, Self::BruteForce];

    pub fn label(self) -> &'static str {
        match self {
            Self::NearestNeighbor => "Nearest Neighbor",
            Self::HeldKarp => "Held-Karp (exact)",
            Self::BruteForce => "Brute Force",
        }
    }

    /// Short name shown on the badge once a tour from this algorithm is on screen.
    pub fn badge(self) -> &'static str {
        match self {
            Self::NearestNeighbor => "NEAREST",
            Self::HeldKarp => "HELD-KARP",
            Self::BruteForce => "BRUTE FORCE",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SolveRequest {
    pub cities: Vec<Point>,
    pub algorithm: Algorithm,
}

/// Only `route` is read; the server's rounded `distance` is recomputed locally.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SolveResponse {
    pub route: Vec<i64>,
}

pub trait SolveService: Send + Sync {
    fn solve(&self, request: &SolveRequest) -> anyhow::Result<SolveResponse>;
}

/// A solve in flight, tagged with the scene generation it was built from.
pub struct PendingSolve {
    pub generation: u64,
    pub algorithm: Algorithm,
    rx: Receiver<Result<SolveResponse, String>>,
}

impl PendingSolve {
    /// The outcome, once the worker has finished.
    pub fn try_take(&self) -> Option<Result<SolveResponse, String>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err("solver worker disconnected".to_owned())),
        }
    }

    #[cfg(test)]
    pub fn wait(&self) -> Result<SolveResponse, String> {
        self.rx
            .recv()
            .unwrap_or_else(|_| Err("solver worker disconnected".to_owned()))
    }
}

pub fn spawn_solve(
    service: Arc<dyn SolveService>,
    request: SolveRequest,
    generation: u64,
) -> PendingSolve {
    let (tx, rx) = mpsc::channel();
    let algorithm = request.algorithm;

    thread::spawn(move || {
        let result = service
            .solve(&request)
            .map_err(|error| format!("{error:#}"));
        let _ = tx.send(result);
    });

    PendingSolve {
        generation,
        algorithm,
        rx,
    }
}
