// File: crates/chart-core/src/interpolate.rs
// Summary: Curve resampling over control points with selectable kernels (step, linear, B-spline degree 0..3).

use std::fmt;
use std::iter::repeat;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, LayoutError};
use crate::geometry::{clamp, Point};
use crate::grid::linspace;
use crate::scale::value_range;

/// Interpolation kernel used to smooth a curve through its control points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InterpolationKind {
    /// Piecewise-linear.
    #[default]
    Linear,
    /// Step to the closest control point; ties go to the preceding point.
    Nearest,
    /// Step to the closest control point; ties go to the following point.
    NearestUp,
    /// Zero-order hold (degree 0 spline). Holds the previous value, and the
    /// last x evaluates to the last y rather than the one before it, so it
    /// matches `Previous` everywhere.
    Zero,
    /// Degree 1 spline.
    Slinear,
    /// Degree 2 spline through every control point.
    Quadratic,
    /// Degree 3 not-a-knot spline through every control point.
    Cubic,
    /// Value of the last control point at or before x.
    Previous,
    /// Value of the first control point at or after x.
    Next,
}

impl InterpolationKind {
    pub const ALL: [InterpolationKind; 9] = [
        InterpolationKind::Linear,
        InterpolationKind::Nearest,
        InterpolationKind::NearestUp,
        InterpolationKind::Zero,
        InterpolationKind::Slinear,
        InterpolationKind::Quadratic,
        InterpolationKind::Cubic,
        InterpolationKind::Previous,
        InterpolationKind::Next,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            InterpolationKind::Linear => "linear",
            InterpolationKind::Nearest => "nearest",
            InterpolationKind::NearestUp => "nearest-up",
            InterpolationKind::Zero => "zero",
            InterpolationKind::Slinear => "slinear",
            InterpolationKind::Quadratic => "quadratic",
            InterpolationKind::Cubic => "cubic",
            InterpolationKind::Previous => "previous",
            InterpolationKind::Next => "next",
        }
    }

    /// Spline degree for the spline-backed kinds.
    pub const fn spline_degree(self) -> Option<usize> {
        match self {
            InterpolationKind::Zero => Some(0),
            InterpolationKind::Slinear => Some(1),
            InterpolationKind::Quadratic => Some(2),
            InterpolationKind::Cubic => Some(3),
            _ => None,
        }
    }

    /// Fewest control points this kind accepts.
    pub fn min_points(self) -> usize {
        match self.spline_degree() {
            Some(degree) => (degree + 1).max(2),
            None => 2,
        }
    }
}

impl fmt::Display for InterpolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterpolationKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownInterpolation(s.to_string()))
    }
}

/// Number of output samples: the requested count, or twice the number of
/// control points when none (or zero) is requested.
pub fn resolve_sample_count(requested: Option<usize>, control_points: usize) -> usize {
    match requested {
        Some(n) if n > 0 => n,
        _ => control_points * 2,
    }
}

/// Resample `points` into `sample_count` points evenly spaced over the input
/// x range. Output y is clamped to the input y range so spline overshoot never
/// leaves the data envelope.
pub fn interpolate(
    points: &[Point],
    sample_count: Option<usize>,
    kind: InterpolationKind,
) -> Result<Vec<Point>, LayoutError> {
    let required = kind.min_points();
    if points.len() < required {
        return Err(LayoutError::InsufficientPoints { kind, required, actual: points.len() });
    }
    validate_control_points(points)?;

    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let kernel = Kernel::build(kind, &xs, &ys)?;

    let (y_min, y_max) = value_range(&ys).unwrap_or_default();
    let num = resolve_sample_count(sample_count, points.len());
    let out = linspace(xs[0], xs[xs.len() - 1], num)
        .into_iter()
        .map(|x| Point::new(x, clamp(kernel.eval(&xs, &ys, x), y_min, y_max)))
        .collect();
    Ok(out)
}

fn validate_control_points(points: &[Point]) -> Result<(), LayoutError> {
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(LayoutError::NonFinitePoint { index });
    }
    match points.windows(2).position(|w| w[1].x <= w[0].x) {
        Some(i) => Err(LayoutError::NonIncreasingX { index: i + 1 }),
        None => Ok(()),
    }
}

enum Kernel {
    Linear,
    Nearest { round_up: bool },
    Previous,
    Next,
    Spline(BSpline),
}

impl Kernel {
    fn build(kind: InterpolationKind, xs: &[f64], ys: &[f64]) -> Result<Self, LayoutError> {
        let kernel = match (kind, kind.spline_degree()) {
            (_, Some(degree)) => BSpline::interpolating(xs, ys, degree)
                .map(Kernel::Spline)
                .ok_or(LayoutError::SingularSpline { kind })?,
            (InterpolationKind::Nearest, None) => Kernel::Nearest { round_up: false },
            (InterpolationKind::NearestUp, None) => Kernel::Nearest { round_up: true },
            (InterpolationKind::Previous, None) => Kernel::Previous,
            (InterpolationKind::Next, None) => Kernel::Next,
            _ => Kernel::Linear,
        };
        Ok(kernel)
    }

    fn eval(&self, xs: &[f64], ys: &[f64], x: f64) -> f64 {
        let n = xs.len();
        // first control point at or after x
        let hi = xs.partition_point(|&v| v < x);
        match self {
            Kernel::Linear => {
                if hi == 0 {
                    ys[0]
                } else if hi >= n {
                    ys[n - 1]
                } else if xs[hi] == x {
                    ys[hi]
                } else {
                    let lo = hi - 1;
                    let t = (x - xs[lo]) / (xs[hi] - xs[lo]);
                    ys[lo] + t * (ys[hi] - ys[lo])
                }
            }
            Kernel::Nearest { round_up } => {
                if hi == 0 {
                    ys[0]
                } else if hi >= n {
                    ys[n - 1]
                } else {
                    let lo = hi - 1;
                    let below = x - xs[lo];
                    let above = xs[hi] - x;
                    let take_hi = if *round_up { above <= below } else { above < below };
                    if take_hi { ys[hi] } else { ys[lo] }
                }
            }
            Kernel::Previous => {
                let after = xs.partition_point(|&v| v <= x);
                ys[after.saturating_sub(1)]
            }
            Kernel::Next => ys[hi.min(n - 1)],
            Kernel::Spline(spline) => spline.eval(x),
        }
    }
}

/// Interpolating B-spline: passes exactly through every control point.
#[derive(Clone, Debug)]
struct BSpline {
    knots: Vec<f64>,
    coeffs: Vec<f64>,
    degree: usize,
}

impl BSpline {
    /// Solve the collocation system for coefficients. Returns `None` when the
    /// system is numerically singular.
    fn interpolating(xs: &[f64], ys: &[f64], degree: usize) -> Option<Self> {
        let n = xs.len();
        let mut spline = Self {
            knots: interpolation_knots(xs, degree),
            coeffs: vec![0.0; n],
            degree,
        };
        debug_assert_eq!(spline.knots.len(), n + degree + 1);

        let mut matrix = vec![vec![0.0; n]; n];
        for (row, &x) in matrix.iter_mut().zip(xs) {
            let span = spline.span(x);
            for (r, b) in spline.basis(span, x).into_iter().enumerate() {
                row[span - degree + r] = b;
            }
        }
        spline.coeffs = solve_dense(matrix, ys.to_vec())?;
        Some(spline)
    }

    /// Knot interval containing `x`, restricted to the valid spans.
    fn span(&self, x: f64) -> usize {
        let upper = self.knots.partition_point(|&t| t <= x);
        upper.saturating_sub(1).clamp(self.degree, self.coeffs.len() - 1)
    }

    /// The `degree + 1` non-zero basis functions on `span` evaluated at `x`
    /// (Cox-de Boor triangle).
    fn basis(&self, span: usize, x: f64) -> Vec<f64> {
        let p = self.degree;
        let t = &self.knots;
        let mut n = vec![0.0; p + 1];
        let mut left = vec![0.0; p + 1];
        let mut right = vec![0.0; p + 1];
        n[0] = 1.0;
        for j in 1..=p {
            left[j] = x - t[span + 1 - j];
            right[j] = t[span + j] - x;
            let mut saved = 0.0;
            for r in 0..j {
                let denom = right[r + 1] + left[j - r];
                let temp = if denom == 0.0 { 0.0 } else { n[r] / denom };
                n[r] = saved + right[r + 1] * temp;
                saved = left[j - r] * temp;
            }
            n[j] = saved;
        }
        n
    }

    fn eval(&self, x: f64) -> f64 {
        let span = self.span(x);
        let first = span - self.degree;
        self.basis(span, x)
            .iter()
            .zip(&self.coeffs[first..=span])
            .map(|(b, c)| b * c)
            .sum()
    }
}

/// Knot vector for interpolation at the sites `xs`: clamped ends, interior
/// knots at the sites (odd degree, not-a-knot) or at interval midpoints
/// (degree 2).
fn interpolation_knots(xs: &[f64], degree: usize) -> Vec<f64> {
    let n = xs.len();
    let (first, last) = (xs[0], xs[n - 1]);
    let mut knots = Vec::with_capacity(n + degree + 1);
    match degree {
        0 => {
            knots.extend_from_slice(xs);
            knots.push(last);
        }
        1 => {
            knots.push(first);
            knots.extend_from_slice(xs);
            knots.push(last);
        }
        2 => {
            knots.extend(repeat(first).take(3));
            knots.extend(xs.windows(2).map(|w| (w[0] + w[1]) * 0.5).skip(1).take(n - 3));
            knots.extend(repeat(last).take(3));
        }
        _ => {
            let m = (degree - 1) / 2;
            knots.extend(repeat(first).take(degree + 1));
            knots.extend_from_slice(&xs[m + 1..n - m - 1]);
            knots.extend(repeat(last).take(degree + 1));
        }
    }
    knots
}

/// Gaussian elimination with partial pivoting.
fn solve_dense(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();
    for col in 0..n {
        let pivot = (col..n).max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))?;
        if a[pivot][col].abs() < 1e-12 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        let (upper, lower) = a.split_at_mut(col + 1);
        let pivot_row = &upper[col];
        for (offset, row) in lower.iter_mut().enumerate() {
            let factor = row[col] / pivot_row[col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                row[k] -= factor * pivot_row[k];
            }
            b[col + 1 + offset] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let tail: f64 = (i + 1..n).map(|k| a[i][k] * x[k]).sum();
        x[i] = (b[i] - tail) / a[i][i];
    }
    Some(x)
}
