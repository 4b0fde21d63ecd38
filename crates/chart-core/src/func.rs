// File: crates/chart-core/src/func.rs
// Summary: Function graphs: y = f(x) sampled across the canvas width, drawn as a joined stroke with end markers.
// Notes:
// - The canvas spans `[-x_range, x_range]` horizontally and `[-y_range, y_range]`
//   vertically, origin in the middle, y growing upwards.
// - The function is a plain closure, so a graph is not part of `ChartKind`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canvas::Canvas;
use crate::chart::draw_curve;
use crate::color::Paint;
use crate::config::CurveStyle;
use crate::error::ConfigError;
use crate::geometry::Point;
use crate::grid::linspace;
use crate::line::LineGeometry;
use crate::types::{point_radius, Size, THICKNESS};

/// Default half-width of both axes.
pub const RESOLUTION: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FuncConfigBuilder", into = "FuncConfigBuilder")]
pub struct FuncConfig {
    size: Size,
    thickness: u32,
    outline: Paint,
    resolution: (f64, f64),
    sample_count: Option<usize>,
}

impl FuncConfig {
    pub fn builder(width: u32, height: u32) -> FuncConfigBuilder {
        FuncConfigBuilder { size: Size::new(width, height), ..FuncConfigBuilder::default() }
    }

    pub fn to_builder(&self) -> FuncConfigBuilder {
        (*self).into()
    }

    pub fn size(&self) -> Size { self.size }
    pub fn thickness(&self) -> u32 { self.thickness }
    pub fn outline(&self) -> Paint { self.outline }
    /// Half-widths `(x, y)` of the plotted window.
    pub fn resolution(&self) -> (f64, f64) { self.resolution }
    pub fn sample_count(&self) -> Option<usize> { self.sample_count }

    /// Stroke-only curve style the graph is drawn with.
    pub fn style(&self) -> CurveStyle {
        CurveStyle::line()
            .with_thickness(self.thickness)
            .with_fill(Paint::None)
            .with_outline(self.outline)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuncConfigBuilder {
    size: Size,
    thickness: u32,
    outline: Paint,
    resolution: (f64, f64),
    sample_count: Option<usize>,
}

impl Default for FuncConfigBuilder {
    fn default() -> Self {
        Self {
            size: Size::default(),
            thickness: THICKNESS,
            outline: Paint::Random,
            resolution: (RESOLUTION, RESOLUTION),
            sample_count: None,
        }
    }
}

impl FuncConfigBuilder {
    pub fn size(mut self, size: impl Into<Size>) -> Self { self.size = size.into(); self }
    pub fn thickness(mut self, thickness: u32) -> Self { self.thickness = thickness; self }
    pub fn outline(mut self, outline: impl Into<Paint>) -> Self { self.outline = outline.into(); self }
    pub fn resolution(mut self, x: f64, y: f64) -> Self { self.resolution = (x, y); self }
    pub fn sample_count(mut self, count: usize) -> Self { self.sample_count = Some(count); self }

    pub fn build(self) -> Result<FuncConfig, ConfigError> {
        let Size { width, height } = self.size;
        if self.size.is_empty() {
            return Err(ConfigError::NonPositiveSize { width, height });
        }
        let (x, y) = self.resolution;
        if !(x.is_finite() && y.is_finite() && x > 0.0 && y > 0.0) {
            return Err(ConfigError::NonPositiveResolution { x, y });
        }
        Ok(FuncConfig {
            size: self.size,
            thickness: self.thickness,
            outline: self.outline,
            resolution: self.resolution,
            sample_count: self.sample_count,
        })
    }
}

impl TryFrom<FuncConfigBuilder> for FuncConfig {
    type Error = ConfigError;
    fn try_from(b: FuncConfigBuilder) -> Result<Self, Self::Error> { b.build() }
}

impl From<FuncConfig> for FuncConfigBuilder {
    fn from(c: FuncConfig) -> Self {
        Self {
            size: c.size,
            thickness: c.thickness,
            outline: c.outline,
            resolution: c.resolution,
            sample_count: c.sample_count,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FuncLayout {
    pub width: f64,
    pub height: f64,
    /// Inset from the left and right edges, and the end marker radius.
    pub point_radius: f64,
    pub x_range: f64,
    pub y_range: f64,
    pub sample_count: Option<usize>,
}

impl FuncLayout {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            point_radius: point_radius(0, THICKNESS),
            x_range: RESOLUTION,
            y_range: RESOLUTION,
            sample_count: None,
        }
    }

    pub fn from_config(config: &FuncConfig) -> Self {
        let size = config.size();
        let (x_range, y_range) = config.resolution();
        Self {
            width: size.width as f64,
            height: size.height as f64,
            point_radius: point_radius(0, config.thickness()),
            x_range,
            y_range,
            sample_count: config.sample_count(),
        }
    }

    /// Explicit count when it is at least 2, otherwise one sample every
    /// `point_radius` pixels (at least one pixel apart).
    pub fn samples(&self) -> usize {
        match self.sample_count {
            Some(n) if n >= 2 => n,
            _ => {
                let span = (self.width - 2.0 * self.point_radius).max(0.0);
                let step = self.point_radius.max(1.0);
                ((span / step).floor() as usize + 1).max(2)
            }
        }
    }

    /// Canvas x to function x.
    pub fn to_value(&self, px: f64) -> f64 {
        (px / self.width - 0.5) * 2.0 * self.x_range
    }

    /// Function y to canvas y.
    pub fn to_pixel(&self, y: f64) -> f64 {
        self.height - (y / (2.0 * self.y_range) + 0.5) * self.height
    }

    /// Sample `f` across the canvas. Non-finite results are left out of the
    /// curve; the markers sit on its first and last points.
    pub fn compute<F>(&self, f: F) -> LineGeometry
    where
        F: Fn(f64) -> f64,
    {
        let n = self.samples();
        let curve: Vec<Point> = linspace(self.point_radius, self.width - self.point_radius, n)
            .into_iter()
            .filter_map(|px| {
                let y = f(self.to_value(px));
                y.is_finite().then(|| Point::new(px, self.to_pixel(y)))
            })
            .collect();
        debug!(samples = n, kept = curve.len(), "function layout");

        let markers = match (curve.first(), curve.last()) {
            (Some(&first), Some(&last)) if curve.len() > 1 => vec![first, last],
            (Some(&only), _) => vec![only],
            _ => Vec::new(),
        };
        LineGeometry {
            source: curve.clone(),
            curve,
            markers,
            marker_radius: self.point_radius,
            fill: Vec::new(),
        }
    }
}

/// A configured graph of one function.
#[derive(Clone, Debug)]
pub struct FuncGraph<F> {
    config: FuncConfig,
    func: F,
}

impl<F> FuncGraph<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(config: FuncConfig, func: F) -> Self {
        Self { config, func }
    }

    pub fn config(&self) -> &FuncConfig {
        &self.config
    }

    /// Swap in a new configuration; the function is kept.
    pub fn reconfigure(&mut self, builder: FuncConfigBuilder) -> Result<(), ConfigError> {
        self.config = builder.build()?;
        Ok(())
    }

    pub fn canvas_size(&self) -> Size {
        self.config.size()
    }

    pub fn layout(&self) -> LineGeometry {
        FuncLayout::from_config(&self.config).compute(&self.func)
    }

    /// Draw the stroke and its end markers. `rng` resolves a random outline.
    pub fn draw<C, R>(&self, canvas: &mut C, rng: &mut R)
    where
        C: Canvas,
        R: Rng + ?Sized,
    {
        let g = self.layout();
        draw_curve(canvas, &self.config.style(), &g.fill, &g.curve, &g.markers, g.marker_radius, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(samples: usize) -> FuncLayout {
        let mut layout = FuncLayout::new(200.0, 100.0);
        layout.point_radius = 5.0;
        layout.sample_count = Some(samples);
        layout
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identity_runs_corner_to_corner() {
        let g = layout(3).compute(|x| x);
        let xs: Vec<f64> = g.curve.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = g.curve.iter().map(|p| p.y).collect();
        assert_eq!(xs, vec![5.0, 100.0, 195.0]);
        assert!(close(ys[0], 97.5) && close(ys[1], 50.0) && close(ys[2], 2.5), "{ys:?}");
        assert_eq!(g.markers, vec![g.curve[0], g.curve[2]]);
        assert_eq!(g.marker_radius, 5.0);
        assert!(g.fill.is_empty());
    }

    #[test]
    fn axes_follow_resolution() {
        let mut l = layout(2);
        l.x_range = 20.0;
        l.y_range = 5.0;
        assert!(close(l.to_value(0.0), -20.0));
        assert!(close(l.to_value(200.0), 20.0));
        assert!(close(l.to_pixel(5.0), 0.0));
        assert!(close(l.to_pixel(-5.0), 100.0));
    }

    #[test]
    fn non_finite_values_are_dropped() {
        let g = layout(3).compute(|x| if x == 0.0 { f64::NAN } else { x });
        assert_eq!(g.curve.len(), 2);
        assert_eq!(g.markers.len(), 2);

        let g = layout(3).compute(|_| f64::INFINITY);
        assert!(g.curve.is_empty() && g.markers.is_empty());
    }

    #[test]
    fn default_sampling_steps_by_marker_radius() {
        let mut l = layout(0);
        l.sample_count = None;
        assert_eq!(l.samples(), 39);
        assert_eq!(FuncLayout::new(200.0, 100.0).samples(), 200);
    }

    #[test]
    fn resolution_must_be_positive() {
        assert_eq!(
            FuncConfig::builder(100, 100).resolution(0.0, 5.0).build(),
            Err(ConfigError::NonPositiveResolution { x: 0.0, y: 5.0 })
        );
        assert!(FuncConfig::builder(100, 100).resolution(f64::INFINITY, 5.0).build().is_err());
        assert!(matches!(FuncConfig::builder(0, 100).build(), Err(ConfigError::NonPositiveSize { .. })));

        let cfg: FuncConfig = serde_json::from_str(r#"{"thickness": 10, "resolution": [20.0, 20.0]}"#).unwrap();
        assert_eq!(cfg.resolution(), (20.0, 20.0));
        assert!(serde_json::from_str::<FuncConfig>(r#"{"resolution": [-1.0, 1.0]}"#).is_err());
    }
}
