// File: crates/chart-core/src/line.rs
// Summary: Line/area chart layout: weights -> source points -> interpolated curve, markers and fill polygon.

use tracing::debug;

use crate::config::{CurveStyle, LineConfig};
use crate::error::LayoutError;
use crate::geometry::Point;
use crate::interpolate::{interpolate, InterpolationKind};
use crate::scale::{scale, value_range};

/// Geometry of a line chart, in canvas pixels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineGeometry {
    /// One point per item, in item order.
    pub source: Vec<Point>,
    /// Smoothed curve through the source points.
    pub curve: Vec<Point>,
    /// Centers of the bold markers.
    pub markers: Vec<Point>,
    pub marker_radius: f64,
    /// Curve closed against the bottom edge; empty for a single item.
    pub fill: Vec<Point>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineLayout {
    pub width: f64,
    pub height: f64,
    pub min_height: f64,
    pub point_radius: f64,
    pub sample_count: Option<usize>,
    pub kind: InterpolationKind,
    pub only_source_points: bool,
    /// Markers on every selected point; otherwise only the curve ends.
    pub mark_points: bool,
}

impl LineLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_style(width, height, 0.0, &CurveStyle::line())
    }

    pub fn from_config(config: &LineConfig) -> Self {
        let size = config.size();
        Self::with_style(size.width as f64, size.height as f64, config.min_height() as f64, config.style())
    }

    fn with_style(width: f64, height: f64, min_height: f64, style: &CurveStyle) -> Self {
        Self {
            width,
            height,
            min_height,
            point_radius: style.point_radius(),
            sample_count: style.sample_count,
            kind: style.interpolation,
            only_source_points: style.only_source_points,
            mark_points: style.point_width > 0,
        }
    }

    pub fn compute(&self, weights: &[f64]) -> Result<LineGeometry, LayoutError> {
        if weights.is_empty() {
            return Ok(LineGeometry { marker_radius: self.point_radius, ..LineGeometry::default() });
        }
        let source = source_points(weights, self.width, self.height, self.point_radius, self.min_height);

        if let [single] = source.as_slice() {
            return Ok(LineGeometry {
                source: vec![*single],
                curve: vec![*single],
                markers: vec![*single],
                marker_radius: self.point_radius,
                fill: Vec::new(),
            });
        }

        let curve = interpolate(&source, self.sample_count, self.kind)?;
        debug!(items = weights.len(), samples = curve.len(), kind = %self.kind, "line layout");

        let markers = if !self.mark_points {
            vec![source[0], source[source.len() - 1]]
        } else if self.only_source_points {
            source.clone()
        } else {
            curve.clone()
        };

        let mut fill = Vec::with_capacity(curve.len() + 2);
        fill.push(Point::new(source[0].x, self.height));
        fill.extend_from_slice(&curve);
        fill.push(Point::new(source[source.len() - 1].x, self.height));

        Ok(LineGeometry { source, curve, markers, marker_radius: self.point_radius, fill })
    }
}

/// Control points for a row of weights laid across a `width` x `height` box.
///
/// x is spread evenly over `[point_radius, width - point_radius]`; y is the
/// inverted weight scaled into `[point_radius, height - point_radius - min_height]`
/// so heavier items sit higher. A single item is centered horizontally. When
/// every weight is zero the points rest on the bottom margin.
pub(crate) fn source_points(
    weights: &[f64],
    width: f64,
    height: f64,
    point_radius: f64,
    min_height: f64,
) -> Vec<Point> {
    let n = weights.len();
    let max_weight = value_range(weights).map_or(0.0, |(_, hi)| hi);

    let ys = if max_weight == 0.0 {
        vec![height - point_radius; n]
    } else {
        let inverted: Vec<f64> = weights.iter().map(|w| max_weight - w).collect();
        scale(&inverted, point_radius, height - point_radius - min_height)
    };

    let xs = if n == 1 {
        vec![width / 2.0]
    } else {
        let spacing = width / (n - 1) as f64;
        let raw: Vec<f64> = (0..n).map(|i| spacing * i as f64).collect();
        scale(&raw, point_radius, width - point_radius)
    };

    xs.into_iter().zip(ys).map(Point::from).collect()
}
