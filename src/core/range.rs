use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Immutable snapshot of one axis' data extent.
///
/// Recomputed whenever the owning dataset or an explicit override changes;
/// never mutated in place. A zero-width range is legal (single-value data)
/// and flows through the mapper's degenerate policy instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    min: f64,
    max: f64,
    is_log: bool,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> SceneResult<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(SceneError::InvalidData(
                "axis range must be finite with min <= max".to_owned(),
            ));
        }
        Ok(Self {
            min,
            max,
            is_log: false,
        })
    }

    pub fn log(min: f64, max: f64) -> SceneResult<Self> {
        let mut range = Self::new(min, max)?;
        range.is_log = true;
        Ok(range)
    }

    /// Tight range over a value slice. `None` when no finite value exists.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &value in values {
            if value.is_finite() {
                min = min.min(value);
                max = max.max(value);
            }
        }
        if min > max {
            return None;
        }
        Some(Self {
            min,
            max,
            is_log: false,
        })
    }

    /// Synthetic unit span used by forward-Z depth axes.
    #[must_use]
    pub const fn unit() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            is_log: false,
        }
    }

    #[must_use]
    pub const fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub const fn is_log(self) -> bool {
        self.is_log
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}
