use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Box-space extents derived from per-axis aspect ratios and the 2D view
/// size. Recomputed whenever the view resizes or aspect settings change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl BoxDimensions {
    pub fn new(width: f64, height: f64, depth: f64) -> SceneResult<Self> {
        for (name, value) in [("width", width), ("height", height), ("depth", depth)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SceneError::InvalidData(format!(
                    "box {name} must be finite and >= 0"
                )));
            }
        }
        Ok(Self {
            width,
            height,
            depth,
        })
    }

    #[must_use]
    pub fn as_vec(self) -> DVec3 {
        DVec3::new(self.width, self.height, self.depth)
    }
}

/// Axis-aligned 3D bounds in box space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds3D {
    pub min: DVec3,
    pub max: DVec3,
}

impl Bounds3D {
    #[must_use]
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self {
            min: min.min(max),
            max: max.max(min),
        }
    }

    #[must_use]
    pub fn from_dimensions(dimensions: BoxDimensions) -> Self {
        Self {
            min: DVec3::ZERO,
            max: dimensions.as_vec(),
        }
    }

    #[must_use]
    pub fn size(self) -> DVec3 {
        self.max - self.min
    }

    #[must_use]
    pub fn center(self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn contains(self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}
