/// How much of a tour to draw for a given progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TourReveal {
    /// Edges drawn end to end.
    pub full_edges: usize,
    /// Fraction of edge `full_edges` to draw, 0 when nothing is partial.
    pub partial: f32,
    /// Progress reached 1; arrowheads are drawn only then.
    pub complete: bool,
}

impl TourReveal {
    /// Values within this distance of a whole edge count are treated as whole,
    /// so step-locked progress `k / n` reveals exactly `k` edges.
    const SNAP: f32 = 1e-4;

    #[must_use]
    pub fn at(edge_count: usize, progress: f32) -> Self {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };

        let mut walked = edge_count as f32 * progress;
        if (walked - walked.round()).abs() < Self::SNAP {
            walked = walked.round();
        }

        let full_edges = (walked.floor() as usize).min(edge_count);
        let partial = if full_edges < edge_count {
            walked.fract()
        } else {
            0.0
        };

        Self {
            full_edges,
            partial,
            complete: progress >= 1.0,
        }
    }

    /// Whether edge `full_edges` is drawn truncated.
    #[must_use]
    pub fn has_partial(&self) -> bool {
        self.partial > 0.0
    }
}
