use thiserror::Error;

pub type Result<T> = std::result::Result<T, VoyagerError>;

/// Why an index sequence is not a tour over the current points.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TourError {
    #[error("tour has {actual} entries but there are {expected} points")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("tour index {index} is out of range for {point_count} points")]
    IndexOutOfRange { index: i64, point_count: usize },

    #[error("tour visits point {index} more than once")]
    DuplicateIndex { index: usize },
}

#[derive(Debug, Error)]
pub enum VoyagerError {
    #[error("solver returned an invalid tour: {0}")]
    InvalidTour(#[from] TourError),

    #[error("solve request failed: {0}")]
    SolveRequestFailed(String),

    #[error("at least 2 points are needed to solve, got {count}")]
    InsufficientPoints { count: usize },

    #[error("points changed while solving; result discarded")]
    SceneChanged,
}

impl VoyagerError {
    /// Short text for the transient notice in the top bar.
    #[must_use]
    pub fn notice(&self) -> String {
        match self {
            Self::InvalidTour(_) => "Solver returned an invalid route".to_owned(),
            Self::SolveRequestFailed(_) => "Error solving TSP. Please try again.".to_owned(),
            Self::InsufficientPoints { .. } => {
                "Please add at least 2 cities to solve TSP".to_owned()
            }
            Self::SceneChanged => "Points changed while solving; result discarded".to_owned(),
        }
    }
}
