use eframe::egui::{Align2, Color32, FontId, Pos2, Rect, Stroke};

use super::Canvas;
use super::style::{ACCENT, POINT_RADIUS, grid_stroke, tour_stroke};

#[derive(Clone, Debug, PartialEq)]
pub(super) enum Op {
    FillRect { rect: Rect, color: Color32 },
    Line { from: Pos2, to: Pos2, stroke: Stroke },
    CircleFilled { center: Pos2, radius: f32, color: Color32 },
    CircleStroke { center: Pos2, radius: f32, stroke: Stroke },
    Triangle { corners: [Pos2; 3], color: Color32 },
    Text { pos: Pos2, anchor: Align2, text: String, size: f32, color: Color32 },
}

impl Op {
    pub(super) fn is_grid_line(&self) -> bool {
        matches!(self, Self::Line { stroke, .. } if *stroke == grid_stroke())
    }

    pub(super) fn is_tour_line(&self) -> bool {
        matches!(self, Self::Line { stroke, .. } if *stroke == tour_stroke())
    }

    pub(super) fn is_point_disc(&self) -> bool {
        matches!(self, Self::CircleFilled { radius, color, .. } if *radius == POINT_RADIUS && *color == ACCENT)
    }
}

/// Canvas that remembers every call, for asserting on what a layer drew.
#[derive(Debug, Default)]
pub(super) struct RecordingCanvas {
    pub(super) ops: Vec<Op>,
}

impl RecordingCanvas {
    pub(super) fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub(super) fn first_index(&self, predicate: impl Fn(&Op) -> bool) -> Option<usize> {
        self.ops.iter().position(predicate)
    }

    pub(super) fn last_index(&self, predicate: impl Fn(&Op) -> bool) -> Option<usize> {
        self.ops.iter().rposition(predicate)
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.ops.push(Op::FillRect { rect, color });
    }

    fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.ops.push(Op::Line { from, to, stroke });
    }

    fn circle_filled(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.ops.push(Op::CircleFilled { center, radius, color });
    }

    fn circle_stroke(&mut self, center: Pos2, radius: f32, stroke: Stroke) {
        self.ops.push(Op::CircleStroke { center, radius, stroke });
    }

    fn triangle(&mut self, corners: [Pos2; 3], color: Color32) {
        self.ops.push(Op::Triangle { corners, color });
    }

    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, font: FontId, color: Color32) {
        self.ops.push(Op::Text {
            pos,
            anchor,
            text: text.to_owned(),
            size: font.size,
            color,
        });
    }
}
