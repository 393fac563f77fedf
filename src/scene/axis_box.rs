//! Axis-box geometry: dimension derivation, six-face synthesis, per-face
//! grids, and camera-facing state.
//!
//! Each rebuild produces a fresh [`AxisBoxShape`] assigned atomically by the
//! caller, so an in-progress rebuild is never observable.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::core::mapper::map_axis_value;
use crate::core::{AxisKind, ChartKind, Intervals, Orientation, Viewport};
use crate::error::{SceneError, SceneResult};
use crate::render::{Color, Path2D, Shape3D};
use crate::scene::bounds::{Bounds3D, BoxDimensions};
use crate::scene::camera::{Camera, is_facing};
use crate::scene::face::AxisBoxFace;
use crate::scene::side::Side;

const DEFAULT_FACE_COLOR: Color = Color::rgb(0.93, 0.94, 0.96);
const DEFAULT_FACE_OPACITY: f64 = 1.0;

/// Per-axis aspect collaborator: maps an axis and the 2D view size to a
/// sizing ratio for the box.
pub trait AspectProvider {
    fn aspect(&self, axis: AxisKind, view_width: f64, view_height: f64) -> f64;
}

/// Fixed per-axis ratios, the stock aspect collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRatios {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for AspectRatios {
    fn default() -> Self {
        Self {
            x: 1.0,
            y: 0.8,
            z: 0.7,
        }
    }
}

impl AspectProvider for AspectRatios {
    fn aspect(&self, axis: AxisKind, _view_width: f64, _view_height: f64) -> f64 {
        match axis {
            AxisKind::X => self.x,
            AxisKind::Y => self.y,
            AxisKind::Z => self.z,
        }
    }
}

/// Tick intervals for the three data axes of one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisIntervals {
    pub x: Intervals,
    pub y: Intervals,
    pub z: Intervals,
}

impl AxisIntervals {
    #[must_use]
    pub fn new(x: Intervals, y: Intervals, z: Intervals) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn get(&self, axis: AxisKind) -> &Intervals {
        match axis {
            AxisKind::X => &self.x,
            AxisKind::Y => &self.y,
            AxisKind::Z => &self.z,
        }
    }
}

/// Box extent along the box axis that renders `axis` under `orientation`.
#[must_use]
pub fn data_axis_extent(axis: AxisKind, orientation: Orientation, dims: BoxDimensions) -> f64 {
    match orientation {
        Orientation::Standard => match axis {
            AxisKind::X => dims.width,
            AxisKind::Y => dims.depth,
            AxisKind::Z => dims.height,
        },
        Orientation::ForwardZ => match axis {
            AxisKind::X => dims.width,
            AxisKind::Y => dims.height,
            AxisKind::Z => dims.depth,
        },
    }
}

/// Derives box dimensions from the aspect collaborator and view size.
///
/// All three extents hang off the single Y-derived scale factor, so changing
/// the view height alone rescales the whole box uniformly.
pub fn compute_dimensions(
    viewport: Viewport,
    aspects: &dyn AspectProvider,
) -> SceneResult<BoxDimensions> {
    if !viewport.is_valid() {
        return Err(SceneError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let view_w = f64::from(viewport.width);
    let view_h = f64::from(viewport.height);

    let aspect_x = aspects.aspect(AxisKind::X, view_w, view_h);
    let aspect_y = aspects.aspect(AxisKind::Y, view_w, view_h);
    let aspect_z = aspects.aspect(AxisKind::Z, view_w, view_h);
    for (axis, value) in [("x", aspect_x), ("y", aspect_y), ("z", aspect_z)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(SceneError::InvalidData(format!(
                "aspect ratio for {axis} must be finite and > 0"
            )));
        }
    }

    let height = aspect_y * view_h;
    let width = height / aspect_y * aspect_x;
    let depth = height / aspect_y * aspect_z;
    BoxDimensions::new(width, height, depth)
}

/// The six-faced rectangular prism bounding a 3D chart, plus its populated
/// content shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisBoxShape {
    chart_kind: ChartKind,
    dimensions: BoxDimensions,
    bounds: Bounds3D,
    faces: Vec<AxisBoxFace>,
    contents: Vec<Shape3D>,
}

impl AxisBoxShape {
    #[must_use]
    pub fn chart_kind(&self) -> ChartKind {
        self.chart_kind
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.chart_kind.orientation()
    }

    #[must_use]
    pub fn dimensions(&self) -> BoxDimensions {
        self.dimensions
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds3D {
        self.bounds
    }

    #[must_use]
    pub fn faces(&self) -> &[AxisBoxFace] {
        &self.faces
    }

    #[must_use]
    pub fn face(&self, side: Side) -> &AxisBoxFace {
        &self.faces[face_index(side)]
    }

    #[must_use]
    pub fn contents(&self) -> &[Shape3D] {
        &self.contents
    }

    pub(crate) fn push_content(&mut self, shape: Shape3D) {
        self.contents.push(shape);
    }

    /// Recomputes the facing flag of every face for the given camera.
    ///
    /// Each opposite pair is resolved from the first member's computed
    /// normal; the partner always gets the logical negation, so exactly one
    /// of each pair is marked facing.
    pub fn update_facing(&mut self, camera: &Camera) {
        for (near, far) in [
            (Side::Front, Side::Back),
            (Side::Left, Side::Right),
            (Side::Bottom, Side::Top),
        ] {
            let facing = is_facing(self.face(near).computed_normal(), camera);
            self.faces[face_index(near)].facing = facing;
            self.faces[face_index(far)].facing = !facing;
        }
    }

    /// Sides currently marked camera-facing, in canonical order.
    pub fn facing_sides(&self) -> impl Iterator<Item = Side> + '_ {
        self.faces
            .iter()
            .filter(|face| face.facing)
            .map(|face| face.side)
    }

    /// A face's grid lines lifted from its local plane into box space.
    #[must_use]
    pub fn grid_segments(&self, side: Side) -> Vec<(DVec3, DVec3)> {
        let face = self.face(side);
        let mut segments = Vec::with_capacity(face.grid.segment_count());
        let mut pen: Option<DVec2> = None;
        for command in face.grid.commands() {
            match command {
                crate::render::PathCommand::MoveTo(point) => pen = Some(*point),
                crate::render::PathCommand::LineTo(point) => {
                    if let Some(from) = pen {
                        segments.push((
                            face_point(side, self.dimensions, from.x, from.y),
                            face_point(side, self.dimensions, point.x, point.y),
                        ));
                    }
                    pen = Some(*point);
                }
                crate::render::PathCommand::Close => pen = None,
            }
        }
        segments
    }
}

const fn face_index(side: Side) -> usize {
    match side {
        Side::Front => 0,
        Side::Back => 1,
        Side::Left => 2,
        Side::Right => 3,
        Side::Top => 4,
        Side::Bottom => 5,
    }
}

/// Builds the axis box for one chart: dimensions, six grid-bearing faces,
/// and the bounding volume. Content population is a separate pass
/// ([`populate`](crate::scene::populate::populate)).
pub struct AxisBoxBuilder<'a> {
    chart_kind: ChartKind,
    viewport: Viewport,
    aspects: &'a dyn AspectProvider,
    intervals: &'a AxisIntervals,
    face_color: Color,
    face_opacity: f64,
}

impl<'a> AxisBoxBuilder<'a> {
    #[must_use]
    pub fn new(
        chart_kind: ChartKind,
        viewport: Viewport,
        aspects: &'a dyn AspectProvider,
        intervals: &'a AxisIntervals,
    ) -> Self {
        Self {
            chart_kind,
            viewport,
            aspects,
            intervals,
            face_color: DEFAULT_FACE_COLOR,
            face_opacity: DEFAULT_FACE_OPACITY,
        }
    }

    #[must_use]
    pub fn with_face_style(mut self, color: Color, opacity: f64) -> Self {
        self.face_color = color;
        self.face_opacity = opacity;
        self
    }

    pub fn build(&self) -> SceneResult<AxisBoxShape> {
        let dims = compute_dimensions(self.viewport, self.aspects)?;
        let orientation = self.chart_kind.orientation();

        let mut faces = Vec::with_capacity(Side::ALL.len());
        for side in Side::ALL {
            faces.push(self.build_face(side, orientation, dims));
        }

        Ok(AxisBoxShape {
            chart_kind: self.chart_kind,
            dimensions: dims,
            bounds: Bounds3D::from_dimensions(dims),
            faces,
            contents: Vec::new(),
        })
    }

    fn build_face(&self, side: Side, orientation: Orientation, dims: BoxDimensions) -> AxisBoxFace {
        let (u_extent, v_extent) = face_plane_extents(side, dims);
        let mut corners = [
            face_point(side, dims, 0.0, 0.0),
            face_point(side, dims, u_extent, 0.0),
            face_point(side, dims, u_extent, v_extent),
            face_point(side, dims, 0.0, v_extent),
        ];

        // Winding must agree with the canonical outward direction; flip it
        // when floating-point normal computation lands on the far side.
        let edge_a = corners[1] - corners[0];
        let edge_b = corners[3] - corners[0];
        if edge_a.cross(edge_b).dot(side.outward_normal()) < 0.0 {
            corners.reverse();
        }

        AxisBoxFace {
            side,
            corners,
            color: self.face_color,
            opacity: self.face_opacity,
            grid: self.build_grid(side, orientation, u_extent, v_extent),
            facing: false,
        }
    }

    /// Rasterizes the face grid: one moveTo/lineTo pair per full interval,
    /// in two independent passes over the face's local directions.
    fn build_grid(
        &self,
        side: Side,
        orientation: Orientation,
        u_extent: f64,
        v_extent: f64,
    ) -> Path2D {
        let (u_axis, v_axis) = side.plane_axes(orientation);
        let mut grid = Path2D::new();

        let u_intervals = self.intervals.get(u_axis);
        for value in u_intervals.full_values() {
            let u = map_axis_value(value, u_intervals.range(), 0.0, u_extent);
            grid.segment(DVec2::new(u, 0.0), DVec2::new(u, v_extent));
        }

        let v_intervals = self.intervals.get(v_axis);
        for value in v_intervals.full_values() {
            let v = map_axis_value(value, v_intervals.range(), 0.0, v_extent);
            grid.segment(DVec2::new(0.0, v), DVec2::new(u_extent, v));
        }

        grid
    }
}

/// Extents of a face's local (u, v) plane.
fn face_plane_extents(side: Side, dims: BoxDimensions) -> (f64, f64) {
    match side {
        Side::Front | Side::Back => (dims.width, dims.height),
        Side::Left | Side::Right => (dims.depth, dims.height),
        Side::Top | Side::Bottom => (dims.width, dims.depth),
    }
}

/// Box-space position of a face-local (u, v) point.
fn face_point(side: Side, dims: BoxDimensions, u: f64, v: f64) -> DVec3 {
    match side {
        Side::Front => DVec3::new(u, v, 0.0),
        Side::Back => DVec3::new(u, v, dims.depth),
        Side::Left => DVec3::new(0.0, v, u),
        Side::Right => DVec3::new(dims.width, v, u),
        Side::Top => DVec3::new(u, dims.height, v),
        Side::Bottom => DVec3::new(u, 0.0, v),
    }
}
