// File: crates/chart-core/src/canvas.rs
// Summary: Drawing surface abstraction consumed by `Chart::draw`, plus an in-memory recorder.
// Notes:
// - Every draw call replaces the pixels it covers, alpha included. Drawing with
//   `Rgba::TRANSPARENT` therefore erases, which is how donut holes and gap cuts
//   are made. Only `composite` blends (source-over).

use crate::color::Rgba;
use crate::geometry::{Point, Rect};

pub trait Canvas: Sized {
    /// `(width, height)` in pixels.
    fn size(&self) -> (u32, u32);

    /// A fresh, fully transparent surface of the same size. `None` if the
    /// backend can not allocate one.
    fn new_layer(&self) -> Option<Self>;

    /// Stroke through `points`. `joined_curve` asks for round joins and caps
    /// so a dense sample run reads as one smooth curve.
    fn draw_polyline(&mut self, points: &[Point], color: Rgba, width: f64, joined_curve: bool);

    /// Fill the closed polygon through `points`.
    fn draw_polygon(&mut self, points: &[Point], fill: Rgba);

    /// Fill the ellipse inscribed in `bounds`.
    fn draw_ellipse(&mut self, bounds: Rect, fill: Rgba);

    /// Fill the wedge of the ellipse inscribed in `bounds` between two angles,
    /// in degrees clockwise from the positive x axis.
    fn draw_pie_slice(&mut self, bounds: Rect, start_angle: f64, end_angle: f64, fill: Rgba);

    /// Blend `layer` over this canvas with its origin at `offset`.
    fn composite(&mut self, layer: Self, offset: (i32, i32));
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Polyline { points: Vec<Point>, color: Rgba, width: f64, joined_curve: bool },
    Polygon { points: Vec<Point>, fill: Rgba },
    Ellipse { bounds: Rect, fill: Rgba },
    PieSlice { bounds: Rect, start_angle: f64, end_angle: f64, fill: Rgba },
    Composite { ops: Vec<DrawOp>, offset: (i32, i32) },
}

/// Canvas that keeps the calls it receives instead of rasterizing them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ops: Vec::new() }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Every op, with composited layers expanded in place.
    pub fn flattened(&self) -> Vec<&DrawOp> {
        fn walk<'a>(ops: &'a [DrawOp], out: &mut Vec<&'a DrawOp>) {
            for op in ops {
                match op {
                    DrawOp::Composite { ops, .. } => walk(ops, out),
                    other => out.push(other),
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.ops, &mut out);
        out
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn new_layer(&self) -> Option<Self> {
        Some(Self::new(self.width, self.height))
    }

    fn draw_polyline(&mut self, points: &[Point], color: Rgba, width: f64, joined_curve: bool) {
        self.ops.push(DrawOp::Polyline { points: points.to_vec(), color, width, joined_curve });
    }

    fn draw_polygon(&mut self, points: &[Point], fill: Rgba) {
        self.ops.push(DrawOp::Polygon { points: points.to_vec(), fill });
    }

    fn draw_ellipse(&mut self, bounds: Rect, fill: Rgba) {
        self.ops.push(DrawOp::Ellipse { bounds, fill });
    }

    fn draw_pie_slice(&mut self, bounds: Rect, start_angle: f64, end_angle: f64, fill: Rgba) {
        self.ops.push(DrawOp::PieSlice { bounds, start_angle, end_angle, fill });
    }

    fn composite(&mut self, layer: Self, offset: (i32, i32)) {
        self.ops.push(DrawOp::Composite { ops: layer.ops, offset });
    }
}
