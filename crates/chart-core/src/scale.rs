// File: crates/chart-core/src/scale.rs
// Summary: Affine value scaling (data range -> target range) with a flat fallback for uniform input.

/// The affine map `f(v) = slope * v + intercept` that sends the observed
/// `[vmin, vmax]` onto `[target_min, target_max]`.
///
/// When the observed range is degenerate (`vmin == vmax`) the map is flat and
/// sends every value to `target_min`, so uniform input never divides by zero.
/// `target_min > target_max` is allowed and yields an inverted map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearMap {
    pub fn fit(vmin: f64, vmax: f64, target_min: f64, target_max: f64) -> Self {
        if vmax == vmin {
            return Self::constant(target_min);
        }
        let slope = (target_max - target_min) / (vmax - vmin);
        Self { slope, intercept: target_min - slope * vmin }
    }

    /// Fit against the range of `values`. Empty input yields a flat map.
    pub fn fit_values(values: &[f64], target_min: f64, target_max: f64) -> Self {
        match value_range(values) {
            Some((lo, hi)) => Self::fit(lo, hi, target_min, target_max),
            None => Self::constant(target_min),
        }
    }

    pub const fn constant(value: f64) -> Self {
        Self { slope: 0.0, intercept: value }
    }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        self.slope * v + self.intercept
    }

    pub fn is_flat(&self) -> bool {
        self.slope == 0.0
    }
}

/// `(min, max)` of `values`, or `None` when empty.
pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    let mut it = values.iter().copied();
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

/// Remap `values` into `[target_min, target_max]`, preserving length and order.
pub fn scale(values: &[f64], target_min: f64, target_max: f64) -> Vec<f64> {
    let map = LinearMap::fit_values(values, target_min, target_max);
    values.iter().map(|&v| map.apply(v)).collect()
}
