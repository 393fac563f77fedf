//! Line3D population: each enabled trace becomes a ribbon slab stacked
//! along the synthetic depth axis, so traces sit side by side instead of
//! overlapping.

use glam::DVec2;

use crate::core::mapper::map_axis_value;
use crate::core::AxisRange;
use crate::error::{SceneError, SceneResult};
use crate::render::{Color, Shape3D};
use crate::scene::axis_box::AxisBoxShape;

/// Slab thickness as a fraction of one trace's depth section.
const SLAB_THICKNESS_RATIO: f64 = 0.2;

#[derive(Debug, Clone, PartialEq)]
pub struct RibbonTrace {
    /// Data-space line points, in drawing order.
    pub points: Vec<DVec2>,
    pub color: Color,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RibbonChartData {
    pub traces: Vec<RibbonTrace>,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    /// Animation progress in [0, 1]; truncates the drawn line length.
    pub reveal: f64,
}

pub(super) fn populate_ribbons(
    box_shape: &mut AxisBoxShape,
    data: &RibbonChartData,
) -> SceneResult<()> {
    if !data.reveal.is_finite() {
        return Err(SceneError::InvalidData(
            "ribbon reveal must be finite".to_owned(),
        ));
    }
    if data.reveal <= 0.0 {
        return Ok(());
    }
    let reveal = data.reveal.min(1.0);

    let enabled: Vec<&RibbonTrace> = data.traces.iter().filter(|trace| trace.enabled).collect();
    if enabled.is_empty() {
        return Ok(());
    }

    let dims = box_shape.dimensions();
    let section_depth = dims.depth / enabled.len() as f64;
    let thickness = section_depth * SLAB_THICKNESS_RATIO;

    // The trace closes down to its baseline: y = 0 in data space, clamped to
    // the visible axis extent.
    let baseline = map_axis_value(data.y_range.clamp(0.0), data.y_range, 0.0, dims.height);

    for (slot, trace) in enabled.iter().enumerate() {
        if trace.points.len() < 2 {
            continue;
        }

        let keep = ((trace.points.len() as f64) * reveal).ceil() as usize;
        let keep = keep.clamp(2, trace.points.len());

        let mut outline = Vec::with_capacity(keep + 2);
        for point in &trace.points[..keep] {
            outline.push(DVec2::new(
                map_axis_value(point.x, data.x_range, 0.0, dims.width),
                map_axis_value(point.y, data.y_range, 0.0, dims.height),
            ));
        }

        let first_x = outline[0].x;
        let last_x = outline[outline.len() - 1].x;
        outline.push(DVec2::new(last_x, baseline));
        outline.push(DVec2::new(first_x, baseline));

        box_shape.push_content(Shape3D::Slab {
            outline,
            z_center: section_depth * (slot as f64 + 0.5),
            thickness,
            color: trace.color,
        });
    }
    Ok(())
}
