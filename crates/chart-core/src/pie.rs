// File: crates/chart-core/src/pie.rs
// Summary: Pie/donut layout: weight-proportional angular partition, emboss offsets, gap cuts.

use tracing::{debug, trace};

use crate::color::Paint;
use crate::config::PieConfig;
use crate::geometry::{normalize_degrees, Point, PolarSample, Rect};
use crate::item::WeightedItem;
use crate::scale::{value_range, LinearMap};

/// One wedge of a pie, ready to hand to a canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliceDescriptor {
    /// Degrees, clockwise from the positive x axis.
    pub start_angle: f64,
    pub end_angle: f64,
    /// How far the wedge is pulled in from the full radius.
    pub radial_offset: f64,
    pub outer_radius: f64,
    /// Radius of the transparent hole; 0 for a full pie.
    pub inner_radius: f64,
    pub color: Paint,
}

impl SliceDescriptor {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Bounding box of the wedge's circle.
    pub fn bounds(&self, center: Point) -> Rect {
        Rect::around(center, self.outer_radius)
    }

    /// Bounding box of the donut hole, if any.
    pub fn hole(&self, center: Point) -> Option<Rect> {
        (self.inner_radius > 0.0).then(|| Rect::around(center, self.inner_radius))
    }
}

/// A transparent stroke from the center to the rim along a slice boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GapCut {
    pub from: Point,
    pub to: Point,
    pub width: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PieGeometry {
    pub center: Point,
    pub radius: f64,
    pub slices: Vec<SliceDescriptor>,
    pub gaps: Vec<GapCut>,
    /// Transparent disc at the center where the gap cuts meet.
    pub center_cutout: Option<Rect>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieLayout {
    pub radius: f64,
    /// Donut wall width; 0 for a full pie.
    pub thickness: f64,
    pub start_angle: f64,
    pub emboss: f64,
    pub gap: f64,
}

impl PieLayout {
    pub fn new(radius: f64) -> Self {
        Self { radius, thickness: 0.0, start_angle: 0.0, emboss: 0.0, gap: 0.0 }
    }

    pub fn from_config(config: &PieConfig) -> Self {
        Self {
            radius: config.radius() as f64,
            thickness: config.thickness() as f64,
            start_angle: config.start_angle(),
            emboss: config.emboss() as f64,
            gap: config.gap() as f64,
        }
    }

    /// `(start, end)` of each slice. Spans are proportional to weight and add
    /// up to a full turn; a zero total splits the circle evenly.
    pub fn angles(&self, weights: &[f64]) -> Vec<(f64, f64)> {
        let n = weights.len();
        if n == 0 {
            return Vec::new();
        }
        let start = normalize_degrees(self.start_angle);
        // weights are taken relative to the heaviest so the sum stays finite
        let max_weight = weights.iter().copied().fold(0.0, f64::max);
        let shares: Vec<f64> = if max_weight > 0.0 {
            weights.iter().map(|w| w / max_weight).collect()
        } else {
            vec![0.0; n]
        };
        let total: f64 = shares.iter().sum();

        if total == 0.0 {
            debug!(items = n, "pie weights sum to zero, splitting evenly");
            let step = 360.0 / n as f64;
            return (0..n)
                .map(|i| (start + step * i as f64, start + step * (i + 1) as f64))
                .collect();
        }

        let mut acc = 0.0;
        shares
            .iter()
            .map(|w| {
                let from = start + (acc / total) * 360.0;
                acc += w;
                (from, start + (acc / total) * 360.0)
            })
            .collect()
    }

    /// Radial offset per slice in `[0, |emboss|]`. Positive emboss pulls the
    /// lighter slices in, negative emboss pulls the heavier ones in. Uniform
    /// weights get no offset.
    pub fn offsets(&self, weights: &[f64]) -> Vec<f64> {
        let depth = self.emboss.abs();
        let Some((lo, hi)) = value_range(weights) else {
            return Vec::new();
        };
        if depth == 0.0 || lo == hi {
            return vec![0.0; weights.len()];
        }
        let map = if self.emboss > 0.0 {
            LinearMap::fit(lo, hi, depth, 0.0)
        } else {
            LinearMap::fit(lo, hi, 0.0, depth)
        };
        weights.iter().map(|&w| map.apply(w)).collect()
    }

    pub fn compute(&self, items: &[WeightedItem]) -> PieGeometry {
        let center = Point::new(self.radius, self.radius);
        let weights: Vec<f64> = items.iter().map(|i| i.weight).collect();
        let angles = self.angles(&weights);
        let offsets = self.offsets(&weights);

        let slices: Vec<SliceDescriptor> = items
            .iter()
            .zip(angles.iter().zip(&offsets))
            .enumerate()
            .map(|(index, (item, (&(start, end), &offset)))| {
                trace!(index, start, end, offset, "pie slice");
                SliceDescriptor {
                    start_angle: start,
                    end_angle: end,
                    radial_offset: offset,
                    outer_radius: self.radius - offset,
                    inner_radius: if self.thickness > 0.0 {
                        self.radius - self.thickness + offset
                    } else {
                        0.0
                    },
                    color: item.color,
                }
            })
            .collect();

        let (gaps, center_cutout) = if self.gap > 0.0 && !slices.is_empty() {
            let cuts = slices
                .iter()
                .map(|s| GapCut {
                    from: center,
                    to: PolarSample::new(s.start_angle, self.radius).to_point(center),
                    width: self.gap,
                })
                .collect();
            (cuts, Some(Rect::around(center, self.gap / 2.0)))
        } else {
            (Vec::new(), None)
        };

        debug!(items = items.len(), gaps = gaps.len(), "pie layout");
        PieGeometry { center, radius: self.radius, slices, gaps, center_cutout }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(weights: &[f64]) -> Vec<WeightedItem> {
        weights.iter().map(|&w| WeightedItem::new(w)).collect()
    }

    #[test]
    fn spans_follow_weights() {
        let angles = PieLayout::new(100.0).angles(&[1.0, 2.0, 1.0]);
        assert_eq!(angles, vec![(0.0, 90.0), (90.0, 270.0), (270.0, 360.0)]);
    }

    #[test]
    fn huge_weights_still_fill_the_turn() {
        let layout = PieLayout::new(100.0);
        for weights in [[1e307, 1e307], [1e308, 1e308], [f64::MAX, f64::MAX]] {
            let angles = layout.angles(&weights);
            assert_eq!(angles, vec![(0.0, 180.0), (180.0, 360.0)], "weights {weights:?}");
        }
        let angles = layout.angles(&[f64::MAX, 0.0, f64::MAX / 2.0]);
        assert_eq!(angles.last().unwrap().1, 360.0);
        assert!((angles[0].1 - 240.0).abs() < 1e-9);
        assert!(angles.iter().all(|(s, e)| s.is_finite() && e.is_finite() && e >= s));
    }

    #[test]
    fn huge_weights_emboss_finitely() {
        let mut layout = PieLayout::new(100.0);
        layout.emboss = 10.0;
        let offsets = layout.offsets(&[0.0, f64::MAX]);
        assert_eq!(offsets[0], 10.0);
        assert!(offsets[1].abs() < 1e-9);
    }

    #[test]
    fn zero_total_splits_evenly() {
        let angles = PieLayout::new(100.0).angles(&[0.0, 0.0, 0.0]);
        for (start, end) in angles {
            assert!((end - start - 120.0).abs() < 1e-9);
        }
    }

    #[test]
    fn emboss_direction() {
        let mut layout = PieLayout::new(100.0);
        layout.emboss = 20.0;
        assert_eq!(layout.offsets(&[1.0, 3.0, 2.0]), vec![20.0, 0.0, 10.0]);
        layout.emboss = -20.0;
        assert_eq!(layout.offsets(&[1.0, 3.0, 2.0]), vec![0.0, 20.0, 10.0]);
        assert_eq!(layout.offsets(&[5.0, 5.0]), vec![0.0, 0.0]);
    }

    #[test]
    fn donut_wall_shrinks_with_offset() {
        let mut layout = PieLayout::new(100.0);
        layout.thickness = 40.0;
        layout.emboss = 10.0;
        let g = layout.compute(&items(&[1.0, 2.0]));
        let light = g.slices[0];
        assert_eq!(light.outer_radius, 90.0);
        assert_eq!(light.inner_radius, 70.0);
        let heavy = g.slices[1];
        assert_eq!(heavy.outer_radius, 100.0);
        assert_eq!(heavy.inner_radius, 60.0);
    }

    #[test]
    fn gap_cuts_every_boundary() {
        let mut layout = PieLayout::new(50.0);
        layout.gap = 6.0;
        let g = layout.compute(&items(&[1.0, 1.0, 1.0, 1.0]));
        assert_eq!(g.gaps.len(), 4);
        assert_eq!(g.center_cutout, Some(Rect::from_ltrb(47.0, 47.0, 53.0, 53.0)));
        // gaps never narrow the slices
        assert!(g.slices.iter().all(|s| (s.sweep() - 90.0).abs() < 1e-9));
        let first = g.gaps[0].to;
        assert!((first.x - 100.0).abs() < 1e-9 && (first.y - 50.0).abs() < 1e-9);
    }
}
