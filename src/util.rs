use eframe::egui::Vec2;

use crate::scene::TraceStep;

pub const NO_VALUE: &str = "—";

/// One decimal place, or a dash when there is no tour.
pub fn format_distance(distance: Option<f32>) -> String {
    match distance {
        Some(distance) => format!("{distance:.1}"),
        None => NO_VALUE.to_owned(),
    }
}

pub fn format_zoom(zoom: f32) -> String {
    format!("Zoom: {:.0}%", zoom * 100.0)
}

pub fn format_cursor(logical: Vec2) -> String {
    format!("X: {:.1}, Y: {:.1}", logical.x, logical.y)
}

pub fn format_trace_step(step: &TraceStep) -> String {
    format!("C{} → {:.2} → C{}", step.from, step.distance, step.to)
}

/// Axis labels are whole numbers; `-0` is printed as `0`.
pub fn format_axis_value(value: f32) -> String {
    let rounded = value.round();
    if rounded == 0.0 {
        "0".to_owned()
    } else {
        format!("{rounded:.0}")
    }
}
