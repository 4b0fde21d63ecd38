// File: crates/chart-core/src/error.rs
// Summary: Typed errors for configuration, layout, item collections and color parsing.

use thiserror::Error;

use crate::interpolate::InterpolationKind;

/// Rejected chart configuration. Raised when a config is built or a chart is
/// reconfigured, never at draw time.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("chart size must be positive, got {width}x{height}")]
    NonPositiveSize { width: u32, height: u32 },

    #[error("thickness {thickness} can not be bigger than radius {radius}")]
    ThicknessExceedsRadius { thickness: u32, radius: u32 },

    #[error("emboss {emboss} can not be bigger than half of thickness {thickness}")]
    EmbossExceedsThickness { emboss: i32, thickness: u32 },

    #[error("emboss {emboss} can not be bigger than half of radius {radius}")]
    EmbossExceedsRadius { emboss: i32, radius: u32 },

    #[error("minimum radius {min_radius} plus point radius {point_radius} exceeds radius {radius}")]
    MinRadiusExceedsRadius { min_radius: u32, point_radius: f64, radius: u32 },

    #[error("minimum height {min_height} plus point width {point_width} exceeds height {height}")]
    MinHeightExceedsHeight { min_height: u32, point_width: u32, height: u32 },

    #[error("function resolution must be positive and finite, got ({x}, {y})")]
    NonPositiveResolution { x: f64, y: f64 },

    #[error("start angle must be finite, got {0}")]
    NonFiniteAngle(f64),

    #[error("unknown interpolation kind '{0}'")]
    UnknownInterpolation(String),
}

/// Failure while turning weights into geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("{kind} interpolation needs at least {required} control points, got {actual}")]
    InsufficientPoints {
        kind: InterpolationKind,
        required: usize,
        actual: usize,
    },

    #[error("control point x values must be strictly increasing (at index {index})")]
    NonIncreasingX { index: usize },

    #[error("control point {index} is not finite")]
    NonFinitePoint { index: usize },

    #[error("{kind} spline system is singular for the given control points")]
    SingularSpline { kind: InterpolationKind },
}

/// Rejected mutation of a chart's item collection. The collection is left
/// untouched when this is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ItemError {
    #[error("item {index} has invalid weight {weight}; weights must be finite and non-negative")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("item {index} is not part of the chart")]
    NotFound { index: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("hex color must have 6 or 8 digits, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex digits in '{0}'")]
    InvalidDigit(String),
}

/// Umbrella error for chart-level operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Item(#[from] ItemError),

    #[error("canvas could not allocate a {width}x{height} layer")]
    LayerAllocation { width: u32, height: u32 },
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
