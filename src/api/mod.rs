//! Engine assembly: owns the axis box, contour caches, camera and ranges,
//! and exposes the invalidation hooks collaborators call.

mod invalidation;

pub use invalidation::{InvalidationTopic, InvalidationTopics};

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::contour::{ContourEngine, ContourLevel, ContourStyle, Polygon};
use crate::core::mapper::map_axis_value;
use crate::core::{AxisKind, AxisRange, ChartKind, Intervals, MinMax, Viewport};
use crate::error::{SceneError, SceneResult};
use crate::render::{
    Color, FilledPolygon, Path2D, PathCommand, Renderer, SceneFrame, Shape3D, StrokedPath,
};
use crate::scene::axis_box::{
    AspectRatios, AxisBoxBuilder, AxisBoxShape, AxisIntervals, compute_dimensions,
    data_axis_extent,
};
use crate::scene::bounds::BoxDimensions;
use crate::scene::camera::Camera;
use crate::scene::populate::{ChartContent, populate};

const GRID_COLOR: Color = Color::rgb(0.72, 0.74, 0.78);
const ISOLINE_COLOR: Color = Color::rgb(0.2, 0.22, 0.27);
const HULL_COLOR: Color = Color::rgb(0.35, 0.38, 0.45);
const MESH_COLOR: Color = Color::rgb(0.55, 0.58, 0.65);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneEngineConfig {
    pub viewport: Viewport,
    pub chart_kind: ChartKind,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub z_range: AxisRange,
    pub aspects: AspectRatios,
    pub contour_style: ContourStyle,
}

impl SceneEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport, chart_kind: ChartKind) -> Self {
        Self {
            viewport,
            chart_kind,
            x_range: AxisRange::unit(),
            y_range: AxisRange::unit(),
            z_range: AxisRange::unit(),
            aspects: AspectRatios::default(),
            contour_style: ContourStyle::default(),
        }
    }

    #[must_use]
    pub fn with_x_range(mut self, range: AxisRange) -> Self {
        self.x_range = range;
        self
    }

    #[must_use]
    pub fn with_y_range(mut self, range: AxisRange) -> Self {
        self.y_range = range;
        self
    }

    #[must_use]
    pub fn with_z_range(mut self, range: AxisRange) -> Self {
        self.z_range = range;
        self
    }

    #[must_use]
    pub fn with_aspects(mut self, aspects: AspectRatios) -> Self {
        self.aspects = aspects;
        self
    }

    #[must_use]
    pub fn with_contour_style(mut self, style: ContourStyle) -> Self {
        self.contour_style = style;
        self
    }
}

/// One chart view's scene engine.
///
/// Owns its caches exclusively; all rebuilds run synchronously on the
/// caller's thread, triggered through the typed invalidation hooks.
pub struct SceneEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    chart_kind: ChartKind,
    x_range: AxisRange,
    y_range: AxisRange,
    z_range: AxisRange,
    aspects: AspectRatios,
    camera: Camera,
    content: Option<ChartContent>,
    contours: ContourEngine,
    axis_box: Option<AxisBoxShape>,
    pending_invalidation: InvalidationTopics,
}

impl<R: Renderer> SceneEngine<R> {
    pub fn new(renderer: R, config: SceneEngineConfig) -> SceneResult<Self> {
        if !config.viewport.is_valid() {
            return Err(SceneError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        Ok(Self {
            renderer,
            viewport: config.viewport,
            chart_kind: config.chart_kind,
            x_range: config.x_range,
            y_range: config.y_range,
            z_range: config.z_range,
            aspects: config.aspects,
            camera: Camera::default(),
            content: None,
            contours: ContourEngine::new(config.contour_style),
            axis_box: None,
            // The first gate call builds the initial scene.
            pending_invalidation: InvalidationTopics::from_topic(InvalidationTopic::Geometry),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn chart_kind(&self) -> ChartKind {
        self.chart_kind
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn axis_box(&self) -> Option<&AxisBoxShape> {
        self.axis_box.as_ref()
    }

    #[must_use]
    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    #[must_use]
    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    #[must_use]
    pub fn z_range(&self) -> AxisRange {
        self.z_range
    }

    /// Box dimensions the current view and aspect settings produce.
    pub fn preferred_dimensions(&self) -> SceneResult<BoxDimensions> {
        compute_dimensions(self.viewport, &self.aspects)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> SceneResult<()> {
        if !viewport.is_valid() {
            return Err(SceneError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if viewport != self.viewport {
            self.viewport = viewport;
            self.invalidate_geometry();
            self.invalidate_contours_display();
        }
        Ok(())
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
        self.invalidate_camera();
    }

    pub fn set_chart_kind(&mut self, chart_kind: ChartKind) {
        if chart_kind == self.chart_kind {
            return;
        }
        self.chart_kind = chart_kind;
        // Stale content of another kind must not survive the switch.
        self.content = None;
        self.invalidate_geometry();
    }

    pub fn set_x_range(&mut self, range: AxisRange) {
        self.x_range = range;
        self.invalidate_geometry();
        self.invalidate_contours_display();
    }

    pub fn set_y_range(&mut self, range: AxisRange) {
        self.y_range = range;
        self.invalidate_geometry();
        self.invalidate_contours_display();
    }

    pub fn set_z_range(&mut self, range: AxisRange) {
        self.z_range = range;
        self.invalidate_geometry();
        self.invalidate_contours_display();
    }

    pub fn set_aspects(&mut self, aspects: AspectRatios) {
        self.aspects = aspects;
        self.invalidate_geometry();
    }

    /// Installs chart content for the next rebuild. The kind must match the
    /// engine's chart kind.
    pub fn set_content(&mut self, content: ChartContent) -> SceneResult<()> {
        if content.kind() != self.chart_kind {
            return Err(SceneError::InvalidData(format!(
                "content kind {:?} does not match chart kind {:?}",
                content.kind(),
                self.chart_kind
            )));
        }
        self.content = Some(content);
        self.invalidate_geometry();
        Ok(())
    }

    pub fn clear_content(&mut self) {
        self.content = None;
        self.invalidate_geometry();
    }

    /// Replaces the contour dataset snapshot.
    pub fn set_contour_samples(&mut self, samples: Vec<DVec3>) {
        self.contours.set_samples(samples);
        let mut topics = InvalidationTopics::from_topic(InvalidationTopic::ContourData)
            .with_topic(InvalidationTopic::ContourDisplay);
        if self.chart_kind == ChartKind::Contour3d {
            topics = topics.with_topic(InvalidationTopic::Geometry);
        }
        self.merge_pending(topics);
    }

    pub fn set_level_count(&mut self, level_count: usize) {
        self.contours.set_level_count(level_count);
        let mut topics = InvalidationTopics::from_topic(InvalidationTopic::ContourData)
            .with_topic(InvalidationTopic::ContourDisplay);
        if self.chart_kind == ChartKind::Contour3d {
            topics = topics.with_topic(InvalidationTopic::Geometry);
        }
        self.merge_pending(topics);
    }

    /// Fits the engine's axis ranges to the current contour samples.
    pub fn autoscale_from_samples(&mut self) -> SceneResult<()> {
        let Some((min, max)) = self.contours.sample_bounds() else {
            return Ok(());
        };
        let z = self.contours.z_range();
        self.x_range = AxisRange::new(min.x, max.x)?;
        self.y_range = AxisRange::new(min.y, max.y)?;
        self.z_range = AxisRange::new(z.min, z.max)?;
        self.invalidate_geometry();
        self.invalidate_contours_display();
        Ok(())
    }

    // Contour product delegations.

    pub fn contour_ranges(&mut self) -> Vec<MinMax> {
        self.contours.ranges()
    }

    pub fn contour_levels(&mut self) -> &[ContourLevel] {
        self.contours.levels()
    }

    pub fn contour_shapes(&mut self) -> &[Polygon] {
        self.contours.data_shapes()
    }

    pub fn contour_shape(&mut self, index: usize) -> SceneResult<&Polygon> {
        self.contours.data_shape(index)
    }

    pub fn contour_display_shapes(&mut self) -> SceneResult<&[Polygon]> {
        let (x_range, y_range, viewport) = (self.x_range, self.y_range, self.viewport);
        self.contours.display_shapes(x_range, y_range, viewport)
    }

    pub fn hull_path(&mut self) -> &Polygon {
        self.contours.hull_path()
    }

    pub fn mesh_path(&mut self) -> &Path2D {
        self.contours.mesh_path()
    }

    pub fn paint_order(&mut self) -> &[usize] {
        self.contours.paint_order()
    }

    #[must_use]
    pub fn contour_colors(&self) -> Vec<Color> {
        self.contours.colors()
    }

    #[must_use]
    pub fn contour_style(&self) -> ContourStyle {
        self.contours.style()
    }

    // Rebuild machinery.

    pub(super) fn refresh_facing(&mut self) {
        if let Some(axis_box) = &mut self.axis_box {
            axis_box.update_facing(&self.camera);
        }
    }

    /// Builds a fresh axis box for the current state and assigns it
    /// atomically; on error the previous box stays untouched.
    pub(super) fn rebuild_geometry(&mut self) -> SceneResult<()> {
        let orientation = self.chart_kind.orientation();
        let dims = compute_dimensions(self.viewport, &self.aspects)?;

        let content = self.effective_content()?;

        let x = Intervals::compute(
            self.x_range,
            data_axis_extent(AxisKind::X, orientation, dims),
        );
        let y = Intervals::compute(
            self.y_range,
            data_axis_extent(AxisKind::Y, orientation, dims),
        );
        // The depth axis of forward-Z charts is synthetic: no data range
        // backs it, so its intervals come from an explicit branch.
        let z = match self.chart_kind {
            ChartKind::Bar3d => Intervals::unit_span(),
            ChartKind::Line3d => Intervals::categories(
                content
                    .as_ref()
                    .map_or(0, ChartContent::enabled_trace_count),
            ),
            ChartKind::Contour3d => Intervals::compute(
                self.z_range,
                data_axis_extent(AxisKind::Z, orientation, dims),
            ),
        };
        let intervals = AxisIntervals::new(x, y, z);

        let mut axis_box =
            AxisBoxBuilder::new(self.chart_kind, self.viewport, &self.aspects, &intervals)
                .build()?;
        if let Some(content) = &content {
            populate(&mut axis_box, content)?;
        }
        axis_box.update_facing(&self.camera);

        self.axis_box = Some(axis_box);
        Ok(())
    }

    /// Content used for the rebuild: explicit host content, or facets
    /// derived from the contour mesh for contour charts.
    fn effective_content(&mut self) -> SceneResult<Option<ChartContent>> {
        if let Some(content) = &self.content {
            return Ok(Some(content.clone()));
        }
        if self.chart_kind == ChartKind::Contour3d {
            let level_count = self.contours.style().level_count;
            let mesh = self.contours.mesh().clone();
            if mesh.is_empty() {
                return Ok(None);
            }
            return Ok(Some(ChartContent::facets(
                mesh,
                self.x_range,
                self.y_range,
                self.z_range,
                level_count,
            )));
        }
        Ok(None)
    }

    /// Composes the draw pass for the current scene: visible faces with
    /// their grids, populated content, and (for contour charts) display
    /// bands in paint order plus optional hull/mesh overlays.
    pub fn build_scene_frame(&mut self) -> SceneResult<SceneFrame> {
        self.rebuild_if_invalidated()?;
        if self.axis_box.is_none() {
            self.rebuild_geometry()?;
        }

        let mut polygons = Vec::new();
        let mut paths = Vec::new();
        if self.chart_kind == ChartKind::Contour3d {
            let style = self.contours.style();
            let colors = self.contours.colors();
            let order = self.contours.paint_order().to_vec();
            let (x_range, y_range, viewport) = (self.x_range, self.y_range, self.viewport);
            let display = self.contours.display_shapes(x_range, y_range, viewport)?;
            for index in order {
                if let (Some(shape), Some(color)) = (display.get(index), colors.get(index)) {
                    polygons.push(FilledPolygon {
                        rings: shape.rings().to_vec(),
                        color: *color,
                    });
                }
            }

            if style.show_isolines {
                let mut path = Path2D::new();
                for shape in display {
                    for ring in shape.rings() {
                        append_ring(&mut path, ring);
                    }
                }
                if !path.is_empty() {
                    paths.push(StrokedPath {
                        path,
                        stroke_width: style.isoline_width,
                        color: ISOLINE_COLOR,
                    });
                }
            }

            if style.show_hull {
                let hull_rings = self.contours.hull_path().rings().to_vec();
                let mut path = Path2D::new();
                for ring in hull_rings {
                    append_ring(&mut path, &ring);
                }
                paths.push(StrokedPath {
                    path: path_to_display(&path, x_range, y_range, viewport),
                    stroke_width: style.isoline_width,
                    color: HULL_COLOR,
                });
            }
            if style.show_mesh {
                let mesh_path = self.contours.mesh_path().clone();
                paths.push(StrokedPath {
                    path: path_to_display(&mesh_path, x_range, y_range, viewport),
                    stroke_width: style.isoline_width,
                    color: MESH_COLOR,
                });
            }
        }

        let Some(axis_box) = &self.axis_box else {
            return Err(SceneError::InvalidData(
                "scene frame requested before a successful rebuild".to_owned(),
            ));
        };

        let mut frame = SceneFrame::new(self.viewport);
        for face in axis_box.faces() {
            if !face.facing {
                continue;
            }
            frame.shapes.push(Shape3D::Quad {
                corners: face.corners,
                color: face.color,
                opacity: face.opacity,
            });
            for (from, to) in axis_box.grid_segments(face.side) {
                frame.shapes.push(Shape3D::Segment {
                    from,
                    to,
                    color: GRID_COLOR,
                });
            }
        }
        frame.shapes.extend(axis_box.contents().iter().cloned());
        frame.polygons = polygons;
        frame.paths = paths;

        frame.validate()?;
        Ok(frame)
    }

    /// Builds the frame and hands it to the renderer backend.
    pub fn render(&mut self) -> SceneResult<()> {
        let frame = self.build_scene_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

fn append_ring(path: &mut Path2D, ring: &[DVec2]) {
    let Some(first) = ring.first() else {
        return;
    };
    path.move_to(*first);
    for point in &ring[1..] {
        path.line_to(*point);
    }
    path.close();
}

fn path_to_display(
    path: &Path2D,
    x_range: AxisRange,
    y_range: AxisRange,
    viewport: Viewport,
) -> Path2D {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let convert = |point: DVec2| {
        DVec2::new(
            map_axis_value(point.x, x_range, 0.0, width),
            map_axis_value(point.y, y_range, height, 0.0),
        )
    };

    let mut converted = Path2D::new();
    for command in path.commands() {
        match command {
            PathCommand::MoveTo(point) => converted.move_to(convert(*point)),
            PathCommand::LineTo(point) => converted.line_to(convert(*point)),
            PathCommand::Close => converted.close(),
        }
    }
    converted
}
