// File: crates/chart-core/src/item.rs
// Summary: Weighted item model shared by every chart kind.

use serde::{Deserialize, Serialize};

use crate::color::Paint;
use crate::error::ItemError;

/// One weighted entry of a chart. Position in the chart's item list decides
/// its place along the line, around the radar or around the pie.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedItem {
    pub weight: f64,
    /// Slice color for pies; line and radar charts use their own fill/outline.
    #[serde(default)]
    pub color: Paint,
}

impl WeightedItem {
    pub fn new(weight: f64) -> Self {
        Self { weight, color: Paint::Random }
    }

    /// Construct enforcing the weight invariant (finite, non-negative).
    pub fn try_new(weight: f64) -> Result<Self, ItemError> {
        let item = Self::new(weight);
        item.validate(0)?;
        Ok(item)
    }

    pub fn with_color(mut self, color: impl Into<Paint>) -> Self {
        self.color = color.into();
        self
    }

    /// Check the weight invariant, reporting `index` on failure.
    pub fn validate(&self, index: usize) -> Result<(), ItemError> {
        if self.weight.is_finite() && self.weight >= 0.0 {
            Ok(())
        } else {
            Err(ItemError::InvalidWeight { index, weight: self.weight })
        }
    }
}

impl Default for WeightedItem {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn rejects_bad_weights() {
        assert!(WeightedItem::try_new(0.0).is_ok());
        assert!(WeightedItem::try_new(-1.0).is_err());
        assert!(WeightedItem::try_new(f64::NAN).is_err());
        assert!(WeightedItem::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn color_defaults_to_random() {
        let item: WeightedItem = serde_json::from_str(r#"{"weight": 3}"#).unwrap();
        assert_eq!(item.color, Paint::Random);
        let item = WeightedItem::new(2.0).with_color(Rgba::BLACK);
        assert_eq!(item.color, Paint::Solid(Rgba::BLACK));
    }
}
