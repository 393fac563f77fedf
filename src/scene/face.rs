use glam::DVec3;

use crate::render::{Color, Path2D};
use crate::scene::side::Side;

/// One planar quad of the axis box: 4 ordered corners in box space, a base
/// fill, and a 2D grid path in face-local coordinates. Faces are owned
/// exclusively by their [`AxisBoxShape`](crate::scene::AxisBoxShape) and are
/// rebuilt with it.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisBoxFace {
    pub side: Side,
    pub corners: [DVec3; 4],
    pub color: Color,
    pub opacity: f64,
    /// Grid lines in face-local (u, v) coordinates.
    pub grid: Path2D,
    /// Set by camera-facing determination; false until first update.
    pub facing: bool,
}

impl AxisBoxFace {
    /// Outward normal from the stored corner winding.
    ///
    /// Falls back to the side's canonical normal for degenerate (zero-area)
    /// faces so downstream facing logic never sees a NaN direction.
    #[must_use]
    pub fn computed_normal(&self) -> DVec3 {
        let edge_a = self.corners[1] - self.corners[0];
        let edge_b = self.corners[3] - self.corners[0];
        let cross = edge_a.cross(edge_b);
        if cross.length_squared() <= f64::EPSILON {
            return self.side.outward_normal();
        }
        cross.normalize()
    }
}
