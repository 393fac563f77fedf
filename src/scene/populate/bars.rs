//! Bar3D population: extrudes 2D bar footprints into boxes along Z.

use glam::DVec3;
use tracing::warn;

use crate::error::{SceneError, SceneResult};
use crate::render::{Color, Shape3D};
use crate::scene::axis_box::AxisBoxShape;

/// Fraction of the box depth a bar may occupy at most.
const MAX_BAR_DEPTH_RATIO: f64 = 0.8;

/// One bar's footprint in box-local X/Y, produced by the 2D bar layout
/// collaborator (section width, per-trace offsets). `y` is the bar base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarFootprint {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChartData {
    pub footprints: Vec<BarFootprint>,
    /// Animation progress in [0, 1]; scales bar height linearly.
    pub reveal: f64,
}

pub(super) fn populate_bars(box_shape: &mut AxisBoxShape, data: &BarChartData) -> SceneResult<()> {
    if !data.reveal.is_finite() {
        return Err(SceneError::InvalidData(
            "bar reveal must be finite".to_owned(),
        ));
    }
    // reveal == 0 short-circuits: no bars at all, not zero-height bars.
    if data.reveal <= 0.0 {
        return Ok(());
    }
    let reveal = data.reveal.min(1.0);

    let depth = box_shape.dimensions().depth;
    for footprint in &data.footprints {
        if !footprint.x.is_finite()
            || !footprint.y.is_finite()
            || !footprint.width.is_finite()
            || !footprint.height.is_finite()
        {
            warn!(?footprint, "skipping bar with non-finite footprint");
            continue;
        }
        if footprint.width < 0.0 || footprint.height < 0.0 {
            warn!(?footprint, "skipping bar with negative extent");
            continue;
        }

        let bar_depth = footprint.width.min(MAX_BAR_DEPTH_RATIO * depth);
        let near_z = (depth - bar_depth) * 0.5;
        box_shape.push_content(Shape3D::Box3 {
            min: DVec3::new(footprint.x, footprint.y, near_z),
            max: DVec3::new(
                footprint.x + footprint.width,
                footprint.y + footprint.height * reveal,
                near_z + bar_depth,
            ),
            color: footprint.color,
        });
    }
    Ok(())
}
