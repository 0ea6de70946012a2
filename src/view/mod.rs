//! Mapping between the logical plane and the drawing surface.

mod grid;
mod viewport;

pub use grid::GridPlan;
pub use viewport::Viewport;
