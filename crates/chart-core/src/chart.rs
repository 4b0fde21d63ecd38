// File: crates/chart-core/src/chart.rs
// Summary: Chart struct (configuration + weighted items), layout dispatch and the canvas draw pipeline.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::config::{
    CurveStyle, LineConfig, LineConfigBuilder, PieConfig, PieConfigBuilder, RadarConfig,
    RadarConfigBuilder,
};
use crate::error::{ChartError, ConfigError, ItemError, LayoutError, Result};
use crate::geometry::{Point, Rect};
use crate::item::WeightedItem;
use crate::line::{LineGeometry, LineLayout};
use crate::pie::{PieGeometry, PieLayout};
use crate::radar::{RadarGeometry, RadarLayout};
use crate::types::Size;

/// Which chart is drawn, with its validated configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartKind {
    Line(LineConfig),
    Radar(RadarConfig),
    Pie(PieConfig),
}

impl ChartKind {
    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Line(_) => "line",
            ChartKind::Radar(_) => "radar",
            ChartKind::Pie(_) => "pie",
        }
    }

    pub fn canvas_size(&self) -> Size {
        match self {
            ChartKind::Line(c) => c.size(),
            ChartKind::Radar(c) => Size::square(c.radius()),
            ChartKind::Pie(c) => Size::square(c.radius()),
        }
    }
}

impl From<LineConfig> for ChartKind {
    fn from(c: LineConfig) -> Self { ChartKind::Line(c) }
}

impl From<RadarConfig> for ChartKind {
    fn from(c: RadarConfig) -> Self { ChartKind::Radar(c) }
}

impl From<PieConfig> for ChartKind {
    fn from(c: PieConfig) -> Self { ChartKind::Pie(c) }
}

impl TryFrom<LineConfigBuilder> for ChartKind {
    type Error = ConfigError;
    fn try_from(b: LineConfigBuilder) -> Result<Self, Self::Error> { b.build().map(ChartKind::Line) }
}

impl TryFrom<RadarConfigBuilder> for ChartKind {
    type Error = ConfigError;
    fn try_from(b: RadarConfigBuilder) -> Result<Self, Self::Error> { b.build().map(ChartKind::Radar) }
}

impl TryFrom<PieConfigBuilder> for ChartKind {
    type Error = ConfigError;
    fn try_from(b: PieConfigBuilder) -> Result<Self, Self::Error> { b.build().map(ChartKind::Pie) }
}

/// Laid-out chart, ready for a canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Line(LineGeometry),
    Radar(RadarGeometry),
    Pie(PieGeometry),
}

/// On-disk form of a chart. Items are validated on the way in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    pub kind: ChartKind,
    #[serde(default)]
    pub items: Vec<WeightedItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ChartDocument")]
pub struct Chart {
    kind: ChartKind,
    items: Vec<WeightedItem>,
}

impl Chart {
    pub fn new(kind: impl Into<ChartKind>) -> Self {
        Self { kind: kind.into(), items: Vec::new() }
    }

    pub fn line(config: LineConfig) -> Self { Self::new(config) }
    pub fn radar(config: RadarConfig) -> Self { Self::new(config) }
    pub fn pie(config: PieConfig) -> Self { Self::new(config) }

    pub fn kind(&self) -> &ChartKind {
        &self.kind
    }

    /// Swap in a new configuration, validated as a whole. On error the chart
    /// keeps its previous configuration.
    pub fn reconfigure<B>(&mut self, builder: B) -> Result<(), ConfigError>
    where
        B: TryInto<ChartKind, Error = ConfigError>,
    {
        self.kind = builder.try_into()?;
        Ok(())
    }

    pub fn items(&self) -> &[WeightedItem] {
        &self.items
    }

    pub fn weights(&self) -> Vec<f64> {
        self.items.iter().map(|i| i.weight).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn add_item(&mut self, item: WeightedItem) -> Result<(), ItemError> {
        item.validate(0)?;
        self.items.push(item);
        Ok(())
    }

    /// Append all `items`, or none of them if any is invalid. Error indices
    /// refer to positions in `items`.
    pub fn add_items(&mut self, items: &[WeightedItem]) -> Result<(), ItemError> {
        for (index, item) in items.iter().enumerate() {
            item.validate(index)?;
        }
        self.items.extend_from_slice(items);
        Ok(())
    }

    /// Remove the first item equal to `item`.
    pub fn remove_item(&mut self, item: &WeightedItem) -> Result<WeightedItem, ItemError> {
        let pos = self.items.iter().position(|i| i == item).ok_or(ItemError::NotFound { index: 0 })?;
        Ok(self.items.remove(pos))
    }

    /// Remove one matching item per entry of `items`. Nothing is removed if
    /// any entry has no match left.
    pub fn remove_items(&mut self, items: &[WeightedItem]) -> Result<(), ItemError> {
        let mut remaining = self.items.clone();
        for (index, item) in items.iter().enumerate() {
            let pos = remaining.iter().position(|i| i == item).ok_or(ItemError::NotFound { index })?;
            remaining.remove(pos);
        }
        self.items = remaining;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// `(width, height)` for line charts, `(2 * radius, 2 * radius)` otherwise.
    pub fn canvas_size(&self) -> Size {
        self.kind.canvas_size()
    }

    pub fn layout(&self) -> Result<Geometry, LayoutError> {
        let weights = self.weights();
        Ok(match &self.kind {
            ChartKind::Line(c) => Geometry::Line(LineLayout::from_config(c).compute(&weights)?),
            ChartKind::Radar(c) => Geometry::Radar(RadarLayout::from_config(c).compute(&weights)?),
            ChartKind::Pie(c) => Geometry::Pie(PieLayout::from_config(c).compute(&self.items)),
        })
    }

    /// Lay the chart out and draw it onto `canvas`. `rng` resolves every
    /// `Paint::Random` in a fixed order: fill, outline, then slices.
    pub fn draw<C, R>(&self, canvas: &mut C, rng: &mut R) -> Result<()>
    where
        C: Canvas,
        R: Rng + ?Sized,
    {
        debug!(kind = self.kind.name(), items = self.items.len(), "draw chart");
        let weights = self.weights();
        match &self.kind {
            ChartKind::Line(c) => {
                let g = LineLayout::from_config(c).compute(&weights)?;
                draw_curve(canvas, c.style(), &g.fill, &g.curve, &g.markers, g.marker_radius, rng);
            }
            ChartKind::Radar(c) => {
                let g = RadarLayout::from_config(c).compute(&weights)?;
                draw_curve(canvas, c.style(), &g.curve, &g.curve, &g.markers, g.marker_radius, rng);
            }
            ChartKind::Pie(c) => {
                let g = PieLayout::from_config(c).compute(&self.items);
                draw_pie(canvas, &g, rng)?;
            }
        }
        Ok(())
    }
}

impl TryFrom<ChartDocument> for Chart {
    type Error = ItemError;
    fn try_from(doc: ChartDocument) -> Result<Self, Self::Error> {
        let mut chart = Chart::new(doc.kind);
        chart.add_items(&doc.items)?;
        Ok(chart)
    }
}

impl From<Chart> for ChartDocument {
    fn from(c: Chart) -> Self {
        Self { kind: c.kind, items: c.items }
    }
}

// ---- helpers ----------------------------------------------------------------

pub(crate) fn draw_curve<C: Canvas, R: Rng + ?Sized>(
    canvas: &mut C,
    style: &CurveStyle,
    fill: &[Point],
    curve: &[Point],
    markers: &[Point],
    marker_radius: f64,
    rng: &mut R,
) {
    let fill_color = style.fill.resolve(rng);
    let outline_color = style.outline.resolve(rng);

    if let Some(color) = fill_color {
        if fill.len() >= 3 {
            canvas.draw_polygon(fill, color);
        }
    }
    let Some(color) = outline_color else {
        return;
    };
    if curve.len() >= 2 {
        canvas.draw_polyline(curve, color, style.stroke_width() as f64, true);
    }
    for &m in markers {
        canvas.draw_ellipse(Rect::around(m, marker_radius), color);
    }
}

fn draw_pie<C: Canvas, R: Rng + ?Sized>(canvas: &mut C, g: &PieGeometry, rng: &mut R) -> Result<()> {
    for slice in &g.slices {
        let Some(color) = slice.color.resolve(rng) else {
            continue;
        };
        // one layer per wedge; the hole clears this wedge only
        let mut layer = canvas.new_layer().ok_or_else(|| {
            let (width, height) = canvas.size();
            ChartError::LayerAllocation { width, height }
        })?;
        layer.draw_pie_slice(slice.bounds(g.center), slice.start_angle, slice.end_angle, color);
        if let Some(hole) = slice.hole(g.center) {
            layer.draw_ellipse(hole, Rgba::TRANSPARENT);
        }
        canvas.composite(layer, (0, 0));
    }

    for cut in &g.gaps {
        canvas.draw_polyline(&[cut.from, cut.to], Rgba::TRANSPARENT, cut.width, false);
    }
    if let Some(disc) = g.center_cutout {
        canvas.draw_ellipse(disc, Rgba::TRANSPARENT);
    }
    Ok(())
}
