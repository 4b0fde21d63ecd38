// File: crates/chart-core/src/config.rs
// Summary: Validated chart configurations (line, radar, pie/donut) and their builders.
// Notes:
// - Configs only come out of `build()`, which checks every cross-field rule at
//   once. Edits go through `to_builder()`.
// - Deserialization routes through the builders (`try_from`).

use serde::{Deserialize, Deserializer, Serialize};

use crate::color::Paint;
use crate::error::ConfigError;
use crate::interpolate::InterpolationKind;
use crate::types::{point_radius, Size, RADIUS, THICKNESS};

/// Stroke, fill and marker options shared by line and radar charts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveStyle {
    /// Outline stroke width; 0 is drawn as 1.
    pub thickness: u32,
    pub fill: Paint,
    pub outline: Paint,
    /// Marker diameter. 0 marks only the curve ends, sized from `thickness`.
    pub point_width: u32,
    /// Put markers on the source items only, not on interpolated samples.
    pub only_source_points: bool,
    /// Number of curve samples; `None` means twice the number of items.
    pub sample_count: Option<usize>,
    pub interpolation: InterpolationKind,
}

impl CurveStyle {
    pub fn line() -> Self {
        Self {
            thickness: THICKNESS,
            fill: Paint::Random,
            outline: Paint::Random,
            point_width: 0,
            only_source_points: false,
            sample_count: None,
            interpolation: InterpolationKind::Linear,
        }
    }

    pub fn radar() -> Self {
        Self { only_source_points: true, ..Self::line() }
    }

    pub fn with_thickness(mut self, thickness: u32) -> Self { self.thickness = thickness; self }
    pub fn with_fill(mut self, fill: impl Into<Paint>) -> Self { self.fill = fill.into(); self }
    pub fn with_outline(mut self, outline: impl Into<Paint>) -> Self { self.outline = outline.into(); self }
    pub fn with_point_width(mut self, width: u32) -> Self { self.point_width = width; self }
    pub fn with_only_source_points(mut self, only: bool) -> Self { self.only_source_points = only; self }
    pub fn with_sample_count(mut self, count: usize) -> Self { self.sample_count = Some(count); self }
    pub fn with_interpolation(mut self, kind: InterpolationKind) -> Self { self.interpolation = kind; self }

    pub fn point_radius(&self) -> f64 {
        point_radius(self.point_width, self.thickness)
    }

    /// Stroke width actually used when drawing.
    pub fn stroke_width(&self) -> u32 {
        self.thickness.max(1)
    }
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self::line()
    }
}

/// A `CurveStyle` with every field optional, laid over a chart's own defaults.
#[derive(Default, Deserialize)]
#[serde(default)]
struct CurveStylePatch {
    thickness: Option<u32>,
    fill: Option<Paint>,
    outline: Option<Paint>,
    point_width: Option<u32>,
    only_source_points: Option<bool>,
    sample_count: Option<usize>,
    interpolation: Option<InterpolationKind>,
}

impl CurveStylePatch {
    fn over(self, base: CurveStyle) -> CurveStyle {
        CurveStyle {
            thickness: self.thickness.unwrap_or(base.thickness),
            fill: self.fill.unwrap_or(base.fill),
            outline: self.outline.unwrap_or(base.outline),
            point_width: self.point_width.unwrap_or(base.point_width),
            only_source_points: self.only_source_points.unwrap_or(base.only_source_points),
            sample_count: self.sample_count.or(base.sample_count),
            interpolation: self.interpolation.unwrap_or(base.interpolation),
        }
    }
}

/// Radar styles fill missing fields from `CurveStyle::radar()`.
fn radar_style<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CurveStyle, D::Error> {
    CurveStylePatch::deserialize(deserializer).map(|patch| patch.over(CurveStyle::radar()))
}

// ---- line -------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LineConfigBuilder", into = "LineConfigBuilder")]
pub struct LineConfig {
    size: Size,
    min_height: u32,
    style: CurveStyle,
}

impl LineConfig {
    pub fn builder(width: u32, height: u32) -> LineConfigBuilder {
        LineConfigBuilder { size: Size::new(width, height), ..LineConfigBuilder::default() }
    }

    pub fn to_builder(&self) -> LineConfigBuilder {
        (*self).into()
    }

    pub fn size(&self) -> Size { self.size }
    /// Space kept free under the lowest point.
    pub fn min_height(&self) -> u32 { self.min_height }
    pub fn style(&self) -> &CurveStyle { &self.style }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfigBuilder {
    size: Size,
    min_height: u32,
    style: CurveStyle,
}

impl Default for LineConfigBuilder {
    fn default() -> Self {
        Self { size: Size::default(), min_height: 0, style: CurveStyle::line() }
    }
}

impl LineConfigBuilder {
    pub fn size(mut self, size: impl Into<Size>) -> Self { self.size = size.into(); self }
    pub fn min_height(mut self, min_height: u32) -> Self { self.min_height = min_height; self }
    pub fn style(mut self, style: CurveStyle) -> Self { self.style = style; self }

    pub fn build(self) -> Result<LineConfig, ConfigError> {
        let Size { width, height } = self.size;
        if self.size.is_empty() {
            return Err(ConfigError::NonPositiveSize { width, height });
        }
        let diameter = self.style.point_radius() * 2.0;
        if self.min_height as f64 + diameter > height as f64 {
            return Err(ConfigError::MinHeightExceedsHeight {
                min_height: self.min_height,
                point_width: diameter.ceil() as u32,
                height,
            });
        }
        Ok(LineConfig { size: self.size, min_height: self.min_height, style: self.style })
    }
}

impl TryFrom<LineConfigBuilder> for LineConfig {
    type Error = ConfigError;
    fn try_from(b: LineConfigBuilder) -> Result<Self, Self::Error> { b.build() }
}

impl From<LineConfig> for LineConfigBuilder {
    fn from(c: LineConfig) -> Self {
        Self { size: c.size, min_height: c.min_height, style: c.style }
    }
}

// ---- radar ------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RadarConfigBuilder", into = "RadarConfigBuilder")]
pub struct RadarConfig {
    radius: u32,
    min_radius: u32,
    start_angle: f64,
    style: CurveStyle,
}

impl RadarConfig {
    pub fn builder(radius: u32) -> RadarConfigBuilder {
        RadarConfigBuilder { radius, ..RadarConfigBuilder::default() }
    }

    pub fn to_builder(&self) -> RadarConfigBuilder {
        (*self).into()
    }

    pub fn radius(&self) -> u32 { self.radius }
    /// Smallest distance between the center and a point.
    pub fn min_radius(&self) -> u32 { self.min_radius }
    pub fn start_angle(&self) -> f64 { self.start_angle }
    pub fn style(&self) -> &CurveStyle { &self.style }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfigBuilder {
    radius: u32,
    min_radius: u32,
    start_angle: f64,
    #[serde(default = "CurveStyle::radar", deserialize_with = "radar_style")]
    style: CurveStyle,
}

impl Default for RadarConfigBuilder {
    fn default() -> Self {
        Self { radius: RADIUS, min_radius: 0, start_angle: 0.0, style: CurveStyle::radar() }
    }
}

impl RadarConfigBuilder {
    pub fn radius(mut self, radius: u32) -> Self { self.radius = radius; self }
    pub fn min_radius(mut self, min_radius: u32) -> Self { self.min_radius = min_radius; self }
    pub fn start_angle(mut self, degrees: f64) -> Self { self.start_angle = degrees; self }
    pub fn style(mut self, style: CurveStyle) -> Self { self.style = style; self }

    pub fn build(self) -> Result<RadarConfig, ConfigError> {
        if self.radius == 0 {
            return Err(ConfigError::NonPositiveSize { width: 0, height: 0 });
        }
        if !self.start_angle.is_finite() {
            return Err(ConfigError::NonFiniteAngle(self.start_angle));
        }
        let point_radius = self.style.point_radius();
        if self.min_radius as f64 + point_radius > self.radius as f64 {
            return Err(ConfigError::MinRadiusExceedsRadius {
                min_radius: self.min_radius,
                point_radius,
                radius: self.radius,
            });
        }
        Ok(RadarConfig {
            radius: self.radius,
            min_radius: self.min_radius,
            start_angle: self.start_angle,
            style: self.style,
        })
    }
}

impl TryFrom<RadarConfigBuilder> for RadarConfig {
    type Error = ConfigError;
    fn try_from(b: RadarConfigBuilder) -> Result<Self, Self::Error> { b.build() }
}

impl From<RadarConfig> for RadarConfigBuilder {
    fn from(c: RadarConfig) -> Self {
        Self { radius: c.radius, min_radius: c.min_radius, start_angle: c.start_angle, style: c.style }
    }
}

// ---- pie / donut ------------------------------------------------------------

/// Pie chart options. A non-zero `thickness` turns the pie into a donut whose
/// wall is `thickness` pixels wide.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PieConfigBuilder", into = "PieConfigBuilder")]
pub struct PieConfig {
    radius: u32,
    thickness: u32,
    start_angle: f64,
    emboss: i32,
    gap: u32,
}

impl PieConfig {
    pub fn builder(radius: u32) -> PieConfigBuilder {
        PieConfigBuilder { radius, ..PieConfigBuilder::default() }
    }

    pub fn to_builder(&self) -> PieConfigBuilder {
        (*self).into()
    }

    pub fn radius(&self) -> u32 { self.radius }
    /// Donut wall width; 0 for a full pie.
    pub fn thickness(&self) -> u32 { self.thickness }
    pub fn start_angle(&self) -> f64 { self.start_angle }
    /// Radial difference between the heaviest and lightest slice. Negative
    /// values shrink heavier slices instead of lighter ones.
    pub fn emboss(&self) -> i32 { self.emboss }
    /// Width of the transparent cut between slices.
    pub fn gap(&self) -> u32 { self.gap }
    pub fn is_donut(&self) -> bool { self.thickness > 0 }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieConfigBuilder {
    radius: u32,
    thickness: u32,
    start_angle: f64,
    emboss: i32,
    gap: u32,
}

impl Default for PieConfigBuilder {
    fn default() -> Self {
        Self { radius: RADIUS, thickness: 0, start_angle: 0.0, emboss: 0, gap: 0 }
    }
}

impl PieConfigBuilder {
    pub fn radius(mut self, radius: u32) -> Self { self.radius = radius; self }
    pub fn thickness(mut self, thickness: u32) -> Self { self.thickness = thickness; self }
    pub fn start_angle(mut self, degrees: f64) -> Self { self.start_angle = degrees; self }
    pub fn emboss(mut self, emboss: i32) -> Self { self.emboss = emboss; self }
    pub fn gap(mut self, gap: u32) -> Self { self.gap = gap; self }

    /// Enforces `radius >= thickness >= 2 * |emboss|`; a full pie
    /// (`thickness == 0`) bounds the emboss by the radius instead.
    pub fn build(self) -> Result<PieConfig, ConfigError> {
        if self.radius == 0 {
            return Err(ConfigError::NonPositiveSize { width: 0, height: 0 });
        }
        if !self.start_angle.is_finite() {
            return Err(ConfigError::NonFiniteAngle(self.start_angle));
        }
        if self.thickness > self.radius {
            return Err(ConfigError::ThicknessExceedsRadius {
                thickness: self.thickness,
                radius: self.radius,
            });
        }
        let emboss_span = u64::from(self.emboss.unsigned_abs()) * 2;
        if self.thickness > 0 && emboss_span > u64::from(self.thickness) {
            return Err(ConfigError::EmbossExceedsThickness {
                emboss: self.emboss,
                thickness: self.thickness,
            });
        }
        if self.thickness == 0 && emboss_span > u64::from(self.radius) {
            return Err(ConfigError::EmbossExceedsRadius { emboss: self.emboss, radius: self.radius });
        }
        Ok(PieConfig {
            radius: self.radius,
            thickness: self.thickness,
            start_angle: self.start_angle,
            emboss: self.emboss,
            gap: self.gap,
        })
    }
}

impl TryFrom<PieConfigBuilder> for PieConfig {
    type Error = ConfigError;
    fn try_from(b: PieConfigBuilder) -> Result<Self, Self::Error> { b.build() }
}

impl From<PieConfig> for PieConfigBuilder {
    fn from(c: PieConfig) -> Self {
        Self {
            radius: c.radius,
            thickness: c.thickness,
            start_angle: c.start_angle,
            emboss: c.emboss,
            gap: c.gap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pie_thickness_bounded_by_radius() {
        let err = PieConfig::builder(500).thickness(600).build().unwrap_err();
        assert_eq!(err, ConfigError::ThicknessExceedsRadius { thickness: 600, radius: 500 });
        assert!(PieConfig::builder(500).thickness(500).build().is_ok());
    }

    #[test]
    fn pie_emboss_bounded_by_half_thickness() {
        assert!(PieConfig::builder(500).thickness(300).emboss(-150).build().is_ok());
        let err = PieConfig::builder(500).thickness(300).emboss(151).build().unwrap_err();
        assert_eq!(err, ConfigError::EmbossExceedsThickness { emboss: 151, thickness: 300 });
        assert!(matches!(
            PieConfig::builder(100).emboss(51).build(),
            Err(ConfigError::EmbossExceedsRadius { .. })
        ));
    }

    #[test]
    fn to_builder_keeps_values() {
        let cfg = PieConfig::builder(200).thickness(80).emboss(20).gap(4).start_angle(90.0).build().unwrap();
        assert_eq!(cfg.to_builder().build().unwrap(), cfg);
        // shrinking the radius below the wall is rejected as a whole
        assert!(cfg.to_builder().radius(50).build().is_err());
    }

    #[test]
    fn radar_min_radius_checked() {
        assert!(RadarConfig::builder(100).min_radius(100).build().is_err());
        assert!(RadarConfig::builder(100).min_radius(50).build().is_ok());
        assert!(RadarConfig::builder(100).start_angle(f64::NAN).build().is_err());
    }

    #[test]
    fn line_size_and_margin_checked() {
        assert!(matches!(
            LineConfig::builder(0, 100).build(),
            Err(ConfigError::NonPositiveSize { .. })
        ));
        let tall_markers = CurveStyle::line().with_point_width(40);
        assert!(LineConfig::builder(300, 100).min_height(70).style(tall_markers).build().is_err());
        assert!(LineConfig::builder(300, 100).min_height(60).style(tall_markers).build().is_ok());
    }

    #[test]
    fn deserialization_is_validated() {
        let ok: PieConfig = serde_json::from_str(r#"{"radius": 500, "thickness": 300, "emboss": 50}"#).unwrap();
        assert_eq!(ok.emboss(), 50);
        let bad = serde_json::from_str::<PieConfig>(r#"{"radius": 500, "thickness": 600}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn radar_defaults_mark_source_points() {
        let cfg = RadarConfig::builder(100).build().unwrap();
        assert!(cfg.style().only_source_points);
        let cfg = LineConfig::builder(100, 100).build().unwrap();
        assert!(!cfg.style().only_source_points);
    }

    #[test]
    fn partial_radar_style_keeps_radar_defaults() {
        let cfg: RadarConfig = serde_json::from_str(r#"{"radius": 100}"#).unwrap();
        assert_eq!(*cfg.style(), CurveStyle::radar());

        let cfg: RadarConfig =
            serde_json::from_str(r#"{"radius": 100, "style": {"thickness": 4, "interpolation": "cubic"}}"#).unwrap();
        assert!(cfg.style().only_source_points);
        assert_eq!(cfg.style().thickness, 4);
        assert_eq!(cfg.style().interpolation, InterpolationKind::Cubic);

        let cfg: RadarConfig =
            serde_json::from_str(r#"{"radius": 100, "style": {"only_source_points": false}}"#).unwrap();
        assert!(!cfg.style().only_source_points);

        // line charts keep the line defaults
        let cfg: LineConfig = serde_json::from_str(r#"{"size": {"width": 300, "height": 100}, "style": {"thickness": 4}}"#).unwrap();
        assert!(!cfg.style().only_source_points);
    }
}
