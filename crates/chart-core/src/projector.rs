// File: crates/chart-core/src/projector.rs
// Summary: Circular projection of (position, magnitude) samples onto canvas-space points.

use crate::geometry::{normalize_degrees, Point, PolarSample};
use crate::scale::{value_range, LinearMap};

/// Direction of the magnitude -> radius map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RadialMapping {
    /// Smallest magnitude on `min_radius`, largest on `radius`.
    #[default]
    Direct,
    /// Largest magnitude on `min_radius`, smallest on `radius`.
    Inverted,
}

/// Ranges a projection is fitted against. Positions map onto the angular span,
/// magnitudes onto `[min_radius, radius]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionDomain {
    pub positions: (f64, f64),
    pub magnitudes: (f64, f64),
}

impl ProjectionDomain {
    /// Domain spanned by the x (position) and y (magnitude) of `samples`.
    pub fn of(samples: &[Point]) -> Option<Self> {
        let xs: Vec<f64> = samples.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = samples.iter().map(|p| p.y).collect();
        Some(Self { positions: value_range(&xs)?, magnitudes: value_range(&ys)? })
    }
}

/// Wraps a linear sequence of samples around a circle.
///
/// Sample x is the position along the sequence and y the magnitude. The first
/// position lands on `start_angle` and the last on `start_angle + span`; with
/// the default full-turn span a sequence whose last sample duplicates the first
/// closes on itself. Magnitudes go through the value scaler into
/// `[min_radius, radius]` in the configured direction. The center defaults to
/// `(radius, radius)`, the middle of a `2 * radius` square canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularProjector {
    center: Point,
    radius: f64,
    min_radius: f64,
    start_angle: f64,
    span: f64,
    mapping: RadialMapping,
}

impl CircularProjector {
    pub fn new(radius: f64, min_radius: f64, start_angle: f64) -> Self {
        Self {
            center: Point::new(radius, radius),
            radius,
            min_radius,
            start_angle: normalize_degrees(start_angle),
            span: 360.0,
            mapping: RadialMapping::Direct,
        }
    }

    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Angular extent in degrees; below 360 gives an open arc.
    pub fn with_span(mut self, span: f64) -> Self {
        self.span = span;
        self
    }

    pub fn with_mapping(mut self, mapping: RadialMapping) -> Self {
        self.mapping = mapping;
        self
    }

    pub fn center(&self) -> Point { self.center }
    pub fn start_angle(&self) -> f64 { self.start_angle }

    /// Magnitude -> radius map for the given magnitude range. A flat range
    /// lands on `min_radius` for the direct mapping and on `radius` for the
    /// inverted one.
    pub fn radial_map(&self, (lo, hi): (f64, f64)) -> LinearMap {
        match self.mapping {
            RadialMapping::Direct => LinearMap::fit(lo, hi, self.min_radius, self.radius),
            RadialMapping::Inverted => LinearMap::fit(lo, hi, self.radius, self.min_radius),
        }
    }

    /// Angle (degrees) of a position within `(first, last)`.
    pub fn angle_at(&self, position: f64, (first, last): (f64, f64)) -> f64 {
        if last == first {
            return self.start_angle;
        }
        self.start_angle + self.span * (position - first) / (last - first)
    }

    /// Project against the samples' own domain.
    pub fn project(&self, samples: &[Point]) -> Vec<Point> {
        match ProjectionDomain::of(samples) {
            Some(domain) => self.project_in(samples, domain),
            None => Vec::new(),
        }
    }

    /// Project against an explicit domain, so several sample sets (control
    /// points and their resampled curve) share one radial scale.
    pub fn project_in(&self, samples: &[Point], domain: ProjectionDomain) -> Vec<Point> {
        self.polar_in(samples, domain)
            .into_iter()
            .map(|s| s.to_point(self.center))
            .collect()
    }

    pub fn polar_in(&self, samples: &[Point], domain: ProjectionDomain) -> Vec<PolarSample> {
        let radial = self.radial_map(domain.magnitudes);
        samples
            .iter()
            .map(|p| PolarSample::new(self.angle_at(p.x, domain.positions), radial.apply(p.y)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn closed_loop_quarter_steps() {
        // five samples, last duplicates first: 0, 90, 180, 270, 360 degrees
        let samples: Vec<Point> = (0..5).map(|i| Point::new(i as f64, 1.0)).collect();
        let out = CircularProjector::new(10.0, 0.0, 0.0)
            .with_mapping(RadialMapping::Inverted)
            .project(&samples);
        assert!(close(out[0], Point::new(20.0, 10.0)));
        assert!(close(out[1], Point::new(10.0, 20.0)));
        assert!(close(out[2], Point::new(0.0, 10.0)));
        assert!(close(out[4], out[0]));
    }

    #[test]
    fn direct_and_inverted_radii() {
        let samples = [Point::new(0.0, 0.0), Point::new(1.0, 4.0)];
        let direct = CircularProjector::new(10.0, 2.0, 0.0).with_span(180.0);
        let p = direct.project(&samples);
        assert!((p[0].distance(direct.center()) - 2.0).abs() < 1e-9);
        assert!((p[1].distance(direct.center()) - 10.0).abs() < 1e-9);

        let inverted = direct.with_mapping(RadialMapping::Inverted);
        let q = inverted.project(&samples);
        assert!((q[0].distance(inverted.center()) - 10.0).abs() < 1e-9);
        assert!((q[1].distance(inverted.center()) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn start_angle_full_turn_is_identical() {
        let samples: Vec<Point> = (0..7).map(|i| Point::new(i as f64, (i % 3) as f64)).collect();
        let a = CircularProjector::new(50.0, 5.0, 0.0).project(&samples);
        let b = CircularProjector::new(50.0, 5.0, 360.0).project(&samples);
        assert_eq!(a, b);
    }
}
