//! Contour3D population: mesh triangles become colored facets inside the
//! box, visible from both sides.

use glam::DVec3;

use crate::contour::{Mesh, contour_colors};
use crate::core::mapper::map_axis_value;
use crate::core::AxisRange;
use crate::error::SceneResult;
use crate::render::Shape3D;
use crate::scene::axis_box::AxisBoxShape;

#[derive(Debug, Clone, PartialEq)]
pub struct FacetChartData {
    pub mesh: Mesh,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub z_range: AxisRange,
    /// Band count used to quantize facet colors.
    pub level_count: usize,
}

pub(super) fn populate_facets(
    box_shape: &mut AxisBoxShape,
    data: &FacetChartData,
) -> SceneResult<()> {
    if data.mesh.is_empty() || data.level_count == 0 {
        return Ok(());
    }

    let dims = box_shape.dimensions();
    let colors = contour_colors(data.level_count);
    let z_min = data.z_range.min();
    let z_span = data.z_range.span();

    for triangle in data.mesh.triangles() {
        let points = data.mesh.triangle_points(*triangle);

        // Standard Z-up orientation: data X -> width, data Y -> depth,
        // data Z -> height.
        let mapped = points.map(|point| {
            DVec3::new(
                map_axis_value(point.x, data.x_range, 0.0, dims.width),
                map_axis_value(point.z, data.z_range, 0.0, dims.height),
                map_axis_value(point.y, data.y_range, 0.0, dims.depth),
            )
        });

        let mean_z = (points[0].z + points[1].z + points[2].z) / 3.0;
        let level = if z_span > 0.0 {
            (((mean_z - z_min) / z_span) * data.level_count as f64).floor() as usize
        } else {
            0
        };
        let color = colors[level.min(data.level_count - 1)];

        // Front-facing facet plus a reversed back-face duplicate, so the
        // facet stays visible from both sides.
        box_shape.push_content(Shape3D::Triangle {
            points: mapped,
            color,
        });
        box_shape.push_content(Shape3D::Triangle {
            points: [mapped[2], mapped[1], mapped[0]],
            color,
        });
    }
    Ok(())
}
