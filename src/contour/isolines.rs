//! Contour level partitioning and isoline band extraction.
//!
//! Bands are extracted per triangle: each mesh triangle is clipped against
//! the half-space `z >= level`, contributing one ring to a multi-ring
//! polygon. Under nonzero-winding fill the union of rings composites to the
//! same region a stitched boundary would, with no hull special cases.

use glam::{DVec2, DVec3};
use smallvec::SmallVec;

use crate::contour::color::contour_colors;
use crate::contour::mesh::Mesh;
use crate::core::mapper::map_axis_value;
use crate::core::{AxisRange, MinMax, Viewport};
use crate::render::Color;

/// One contour band: a Z range plus its resolved ramp color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourLevel {
    pub index: usize,
    pub z_min: f64,
    pub z_max: f64,
    pub color: Color,
}

/// Closed 2D polygon, possibly multi-ring, in data or display space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    rings: Vec<Vec<DVec2>>,
}

impl Polygon {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ring(&mut self, ring: Vec<DVec2>) {
        if ring.len() >= 3 {
            self.rings.push(ring);
        }
    }

    #[must_use]
    pub fn rings(&self) -> &[Vec<DVec2>] {
        &self.rings
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Axis-aligned bounding box over every ring point.
    #[must_use]
    pub fn bounding_box(&self) -> Option<(DVec2, DVec2)> {
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        let mut any = false;
        for ring in &self.rings {
            for point in ring {
                min = min.min(*point);
                max = max.max(*point);
                any = true;
            }
        }
        any.then_some((min, max))
    }

    /// Bounding-box area; 0 for an empty polygon.
    #[must_use]
    pub fn bbox_area(&self) -> f64 {
        self.bounding_box()
            .map(|(min, max)| (max.x - min.x) * (max.y - min.y))
            .unwrap_or(0.0)
    }

    /// Maps every point from data space into display pixels. The Y axis is
    /// inverted so larger data values land higher on screen.
    #[must_use]
    pub fn to_display(
        &self,
        x_range: AxisRange,
        y_range: AxisRange,
        viewport: Viewport,
    ) -> Polygon {
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let rings = self
            .rings
            .iter()
            .map(|ring| {
                ring.iter()
                    .map(|point| {
                        DVec2::new(
                            map_axis_value(point.x, x_range, 0.0, width),
                            map_axis_value(point.y, y_range, height, 0.0),
                        )
                    })
                    .collect()
            })
            .collect();
        Polygon { rings }
    }
}

/// Partitions `z` into `count` equal, contiguous bands:
/// `z_min_i = z.min + i * span / count`.
#[must_use]
pub fn contour_ranges(z: MinMax, count: usize) -> Vec<MinMax> {
    if count == 0 {
        return Vec::new();
    }
    let step = z.span() / count as f64;
    (0..count)
        .map(|index| {
            let lo = z.min + index as f64 * step;
            let hi = if index + 1 == count {
                z.max
            } else {
                z.min + (index + 1) as f64 * step
            };
            MinMax::new(lo, hi)
        })
        .collect()
}

/// Full level descriptors: band ranges zipped with ramp colors.
#[must_use]
pub fn contour_levels(z: MinMax, count: usize) -> Vec<ContourLevel> {
    let colors = contour_colors(count);
    contour_ranges(z, count)
        .into_iter()
        .zip(colors)
        .enumerate()
        .map(|(index, (range, color))| ContourLevel {
            index,
            z_min: range.min,
            z_max: range.max,
            color,
        })
        .collect()
}

/// Boundary polygon of the region where `z >= level` over the mesh.
///
/// Empty mesh or a level above every sample yields an empty polygon.
#[must_use]
pub fn contour_shape(mesh: &Mesh, level: f64) -> Polygon {
    let mut polygon = Polygon::new();
    for triangle in mesh.triangles() {
        let points = mesh.triangle_points(*triangle);
        if let Some(ring) = clip_triangle_above(points, level) {
            polygon.push_ring(ring.to_vec());
        }
    }
    polygon
}

/// Clips one triangle against `z >= level`, yielding the surviving ring
/// (3 or 4 points) or `None` when the triangle lies fully below.
fn clip_triangle_above(points: [DVec3; 3], level: f64) -> Option<SmallVec<[DVec2; 4]>> {
    let above: SmallVec<[bool; 3]> = points.iter().map(|p| p.z >= level).collect();
    let above_count = above.iter().filter(|&&a| a).count();

    match above_count {
        0 => None,
        3 => Some(points.iter().map(|p| DVec2::new(p.x, p.y)).collect()),
        _ => {
            let mut ring: SmallVec<[DVec2; 4]> = SmallVec::new();
            for i in 0..3 {
                let j = (i + 1) % 3;
                if above[i] {
                    ring.push(DVec2::new(points[i].x, points[i].y));
                }
                if above[i] != above[j] {
                    ring.push(edge_crossing(points[i], points[j], level));
                }
            }
            Some(ring)
        }
    }
}

/// Linear interpolation of the level crossing along one triangle edge.
/// `t` is clamped to [0, 1]; equal endpoint values cannot reach here with
/// differing classifications, but a flat edge degrades to the midpoint.
fn edge_crossing(a: DVec3, b: DVec3, level: f64) -> DVec2 {
    let denominator = b.z - a.z;
    let t = if denominator == 0.0 {
        0.5
    } else {
        ((level - a.z) / denominator).clamp(0.0, 1.0)
    };
    DVec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

#[cfg(test)]
mod tests {
    use super::{clip_triangle_above, contour_ranges};
    use crate::core::MinMax;
    use glam::DVec3;

    #[test]
    fn ranges_partition_evenly_and_contiguously() {
        let ranges = contour_ranges(MinMax::new(0.0, 80.0), 8);
        assert_eq!(ranges.len(), 8);
        for (index, range) in ranges.iter().enumerate() {
            assert_eq!(range.min, index as f64 * 10.0);
            assert_eq!(range.max, (index + 1) as f64 * 10.0);
        }
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].max, pair[1].min);
        }
    }

    #[test]
    fn zero_levels_partition_to_nothing() {
        assert!(contour_ranges(MinMax::new(0.0, 1.0), 0).is_empty());
    }

    #[test]
    fn fully_above_triangle_survives_whole() {
        let ring = clip_triangle_above(
            [
                DVec3::new(0.0, 0.0, 5.0),
                DVec3::new(1.0, 0.0, 6.0),
                DVec3::new(0.0, 1.0, 7.0),
            ],
            4.0,
        )
        .expect("ring");
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn fully_below_triangle_is_dropped() {
        let ring = clip_triangle_above(
            [
                DVec3::new(0.0, 0.0, 1.0),
                DVec3::new(1.0, 0.0, 2.0),
                DVec3::new(0.0, 1.0, 3.0),
            ],
            4.0,
        );
        assert!(ring.is_none());
    }

    #[test]
    fn single_vertex_above_yields_clipped_corner() {
        let ring = clip_triangle_above(
            [
                DVec3::new(0.0, 0.0, 10.0),
                DVec3::new(2.0, 0.0, 0.0),
                DVec3::new(0.0, 2.0, 0.0),
            ],
            5.0,
        )
        .expect("ring");
        assert_eq!(ring.len(), 3);
        // Crossing on the first edge sits halfway along it.
        assert!((ring[1].x - 1.0).abs() <= 1e-9);
    }

    #[test]
    fn two_vertices_above_yield_a_quad() {
        let ring = clip_triangle_above(
            [
                DVec3::new(0.0, 0.0, 10.0),
                DVec3::new(2.0, 0.0, 10.0),
                DVec3::new(0.0, 2.0, 0.0),
            ],
            5.0,
        )
        .expect("ring");
        assert_eq!(ring.len(), 4);
    }
}
