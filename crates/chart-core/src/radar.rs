// File: crates/chart-core/src/radar.rs
// Summary: Radar (spider) chart layout: closed weight loop -> interpolated curve -> circular projection.

use tracing::debug;

use crate::config::RadarConfig;
use crate::error::LayoutError;
use crate::geometry::Point;
use crate::interpolate::{interpolate, InterpolationKind};
use crate::line::source_points;
use crate::projector::{CircularProjector, ProjectionDomain, RadialMapping};

/// Geometry of a radar chart on a `2 * radius` square canvas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RadarGeometry {
    pub center: Point,
    /// One projected point per item, in item order.
    pub vertices: Vec<Point>,
    /// Closed curve: the last point equals the first.
    pub curve: Vec<Point>,
    pub markers: Vec<Point>,
    pub marker_radius: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadarLayout {
    pub radius: f64,
    pub min_radius: f64,
    pub start_angle: f64,
    pub point_radius: f64,
    pub sample_count: Option<usize>,
    pub kind: InterpolationKind,
    pub only_source_points: bool,
    pub mark_points: bool,
}

impl RadarLayout {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            min_radius: 0.0,
            start_angle: 0.0,
            point_radius: 0.5,
            sample_count: None,
            kind: InterpolationKind::Linear,
            only_source_points: true,
            mark_points: false,
        }
    }

    pub fn from_config(config: &RadarConfig) -> Self {
        let style = config.style();
        Self {
            radius: config.radius() as f64,
            min_radius: config.min_radius() as f64,
            start_angle: config.start_angle(),
            point_radius: style.point_radius(),
            sample_count: style.sample_count,
            kind: style.interpolation,
            only_source_points: style.only_source_points,
            mark_points: style.point_width > 0,
        }
    }

    fn projector(&self, all_zero: bool) -> CircularProjector {
        // heavier items reach further out; an all-zero chart collapses onto
        // the minimum radius
        let mapping = if all_zero { RadialMapping::Direct } else { RadialMapping::Inverted };
        CircularProjector::new(self.radius - self.point_radius, self.min_radius, self.start_angle)
            .with_center(Point::new(self.radius, self.radius))
            .with_mapping(mapping)
    }

    pub fn compute(&self, weights: &[f64]) -> Result<RadarGeometry, LayoutError> {
        let center = Point::new(self.radius, self.radius);
        let Some(&first) = weights.first() else {
            return Ok(RadarGeometry { center, marker_radius: self.point_radius, ..RadarGeometry::default() });
        };

        let mut closed = Vec::with_capacity(weights.len() + 1);
        closed.extend_from_slice(weights);
        closed.push(first);

        let side = self.radius * 2.0;
        let source = source_points(&closed, side, side, self.point_radius, 0.0);
        let samples = interpolate(&source, self.sample_count, self.kind)?;

        let projector = self.projector(weights.iter().all(|&w| w == 0.0));
        let Some(domain) = ProjectionDomain::of(&source) else {
            return Ok(RadarGeometry { center, ..RadarGeometry::default() });
        };

        let mut vertices = projector.project_in(&source, domain);
        vertices.pop();
        let mut curve = projector.project_in(&samples, domain);
        // both ends sit on the duplicated first item; make the seam exact
        if let Some(&head) = curve.first() {
            let last = curve.len() - 1;
            curve[last] = head;
        }
        debug!(items = weights.len(), samples = curve.len(), kind = %self.kind, "radar layout");

        let markers = if !self.mark_points {
            curve.first().copied().into_iter().collect()
        } else if self.only_source_points {
            vertices.clone()
        } else {
            curve[..curve.len() - 1].to_vec()
        };

        Ok(RadarGeometry { center, vertices, curve, markers, marker_radius: self.point_radius })
    }
}
