// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the layout engine, chart model and canvas abstraction.

pub mod canvas;
pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod func;
pub mod geometry;
pub mod grid;
pub mod interpolate;
pub mod item;
pub mod line;
pub mod pie;
pub mod projector;
pub mod radar;
pub mod scale;
pub mod types;

pub use canvas::{Canvas, DrawOp, RecordingCanvas};
pub use chart::{Chart, ChartDocument, ChartKind, Geometry};
pub use color::{Paint, Rgba};
pub use config::{CurveStyle, LineConfig, PieConfig, RadarConfig};
pub use error::{ChartError, ColorParseError, ConfigError, ItemError, LayoutError, Result};
pub use func::{FuncConfig, FuncGraph, FuncLayout};
pub use geometry::{Point, PolarSample, Rect};
pub use interpolate::{interpolate, InterpolationKind};
pub use item::WeightedItem;
pub use line::{LineGeometry, LineLayout};
pub use pie::{GapCut, PieGeometry, PieLayout, SliceDescriptor};
pub use projector::{CircularProjector, RadialMapping};
pub use radar::{RadarGeometry, RadarLayout};
pub use scale::{scale, LinearMap};
pub use types::Size;
