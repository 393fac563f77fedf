//! Contour derivation behind a two-tier cache.
//!
//! Tier one ("data") holds everything derived from the dataset alone: the
//! mesh, level partition, band polygons, hull, debug edge path, and paint
//! order. Tier two ("display") holds the pixel-space conversion of the band
//! polygons. Invalidation is push-based: collaborators call the typed
//! `invalidate_*` methods; nothing here dirty-checks its inputs.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::contour::color::{contour_colors, paint_order};
use crate::contour::isolines::{
    ContourLevel, Polygon, contour_levels, contour_ranges, contour_shape,
};
use crate::contour::mesh::Mesh;
use crate::core::{AxisRange, MinMax, Viewport};
use crate::error::{SceneError, SceneResult};
use crate::render::{Color, Path2D};

/// Style settings for contour charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContourStyle {
    /// Number of equal-width Z bands.
    pub level_count: usize,
    pub show_isolines: bool,
    pub show_hull: bool,
    pub show_mesh: bool,
    pub isoline_width: f64,
}

impl Default for ContourStyle {
    fn default() -> Self {
        Self {
            level_count: 8,
            show_isolines: true,
            show_hull: false,
            show_mesh: false,
            isoline_width: 1.0,
        }
    }
}

/// Owner of one chart's contour caches. Exclusively owned by a single
/// chart-view instance; never shared across threads or instances.
#[derive(Debug, Default)]
pub struct ContourEngine {
    samples: Vec<DVec3>,
    style: ContourStyle,

    // Data tier: derived from samples + style only.
    mesh: Option<Mesh>,
    levels: Option<Vec<ContourLevel>>,
    data_shapes: Option<Vec<Polygon>>,
    hull: Option<Polygon>,
    mesh_path: Option<Path2D>,
    paint: Option<Vec<usize>>,

    // Display tier: additionally depends on axis ranges and viewport.
    display_shapes: Option<Vec<Polygon>>,
}

impl ContourEngine {
    #[must_use]
    pub fn new(style: ContourStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn style(&self) -> ContourStyle {
        self.style
    }

    /// Replaces the dataset snapshot and drops both cache tiers.
    pub fn set_samples(&mut self, samples: Vec<DVec3>) {
        self.samples = samples;
        self.invalidate_all();
    }

    /// Changes the band count. The mesh only depends on the samples, so it
    /// survives; every level-derived product is dropped.
    pub fn set_level_count(&mut self, level_count: usize) {
        if self.style.level_count == level_count {
            return;
        }
        self.style.level_count = level_count;
        self.levels = None;
        self.data_shapes = None;
        self.paint = None;
        self.display_shapes = None;
    }

    pub fn set_style(&mut self, style: ContourStyle) {
        let level_count_changed = style.level_count != self.style.level_count;
        self.style = style;
        if level_count_changed {
            self.levels = None;
            self.data_shapes = None;
            self.paint = None;
            self.display_shapes = None;
        }
    }

    /// Drops both cache tiers (dataset changed).
    pub fn invalidate_all(&mut self) {
        debug!("contour caches invalidated (data tier)");
        self.mesh = None;
        self.levels = None;
        self.data_shapes = None;
        self.hull = None;
        self.mesh_path = None;
        self.paint = None;
        self.display_shapes = None;
    }

    /// Drops only the display tier (axis range or view changed).
    pub fn invalidate_display(&mut self) {
        debug!("contour caches invalidated (display tier)");
        self.display_shapes = None;
    }

    /// Z extent of the current dataset; a degenerate `[0, 0]` band when no
    /// triangulable data exists.
    pub fn z_range(&mut self) -> MinMax {
        self.ensure_mesh();
        match &self.mesh {
            Some(mesh) => mesh.z_range().unwrap_or(MinMax::new(0.0, 0.0)),
            None => MinMax::new(0.0, 0.0),
        }
    }

    pub fn mesh(&mut self) -> &Mesh {
        let samples = &self.samples;
        self.mesh.get_or_insert_with(|| Mesh::triangulate(samples))
    }

    /// Band descriptors for the configured level count.
    pub fn levels(&mut self) -> &[ContourLevel] {
        self.ensure_levels();
        self.levels.as_deref().unwrap_or(&[])
    }

    /// Equal-width band ranges over the dataset's Z extent.
    pub fn ranges(&mut self) -> Vec<MinMax> {
        let z = self.z_range();
        contour_ranges(z, self.style.level_count)
    }

    /// Data-space band polygons, one per level, cached until the dataset or
    /// level count changes.
    pub fn data_shapes(&mut self) -> &[Polygon] {
        self.ensure_data_shapes();
        self.data_shapes.as_deref().unwrap_or(&[])
    }

    /// Bounds-checked access to one band polygon. An index at or above the
    /// configured level count is a caller bug (stale level count) and fails
    /// fast instead of fabricating geometry.
    pub fn data_shape(&mut self, index: usize) -> SceneResult<&Polygon> {
        let count = self.style.level_count;
        if index >= count {
            return Err(SceneError::LevelOutOfRange { index, count });
        }
        self.ensure_data_shapes();
        self.data_shapes
            .as_deref()
            .and_then(|shapes| shapes.get(index))
            .ok_or(SceneError::LevelOutOfRange { index, count })
    }

    /// Hull polygon of the sample domain.
    pub fn hull_path(&mut self) -> &Polygon {
        self.ensure_mesh();
        if self.hull.is_none() {
            let mut hull = Polygon::new();
            if let Some(mesh) = &self.mesh {
                hull.push_ring(mesh.hull());
            }
            self.hull = Some(hull);
        }
        self.hull.get_or_insert_with(Polygon::new)
    }

    /// Debug overlay of every mesh edge.
    pub fn mesh_path(&mut self) -> &Path2D {
        self.ensure_mesh();
        if self.mesh_path.is_none() {
            let path = match &self.mesh {
                Some(mesh) => mesh.edge_path(),
                None => Path2D::new(),
            };
            self.mesh_path = Some(path);
        }
        self.mesh_path.get_or_insert_with(Path2D::new)
    }

    /// Back-to-front paint order over the data-space band polygons.
    pub fn paint_order(&mut self) -> &[usize] {
        self.ensure_data_shapes();
        if self.paint.is_none() {
            let order = paint_order(self.data_shapes.as_deref().unwrap_or(&[]));
            self.paint = Some(order);
        }
        self.paint.as_deref().unwrap_or(&[])
    }

    /// Discrete band colors for the configured level count.
    #[must_use]
    pub fn colors(&self) -> Vec<Color> {
        contour_colors(self.style.level_count)
    }

    /// Display-space band polygons for the given projection. Cached until
    /// `invalidate_display` (or a data-tier invalidation) drops them.
    pub fn display_shapes(
        &mut self,
        x_range: AxisRange,
        y_range: AxisRange,
        viewport: Viewport,
    ) -> SceneResult<&[Polygon]> {
        if !viewport.is_valid() {
            return Err(SceneError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.ensure_data_shapes();
        if self.display_shapes.is_none() {
            let converted = self
                .data_shapes
                .as_deref()
                .unwrap_or(&[])
                .iter()
                .map(|shape| shape.to_display(x_range, y_range, viewport))
                .collect();
            self.display_shapes = Some(converted);
        }
        Ok(self.display_shapes.as_deref().unwrap_or(&[]))
    }

    /// XY hull points of the current samples without building a mesh;
    /// used by hosts for quick extent queries.
    #[must_use]
    pub fn sample_bounds(&self) -> Option<(DVec2, DVec2)> {
        let mut min = DVec2::splat(f64::INFINITY);
        let mut max = DVec2::splat(f64::NEG_INFINITY);
        let mut any = false;
        for sample in &self.samples {
            if sample.x.is_finite() && sample.y.is_finite() {
                min = min.min(DVec2::new(sample.x, sample.y));
                max = max.max(DVec2::new(sample.x, sample.y));
                any = true;
            }
        }
        any.then_some((min, max))
    }

    fn ensure_mesh(&mut self) {
        if self.mesh.is_none() {
            self.mesh = Some(Mesh::triangulate(&self.samples));
        }
    }

    fn ensure_levels(&mut self) {
        if self.levels.is_some() {
            return;
        }
        let z = self.z_range();
        self.levels = Some(contour_levels(z, self.style.level_count));
    }

    fn ensure_data_shapes(&mut self) {
        self.ensure_levels();
        if self.data_shapes.is_some() {
            return;
        }
        if let (Some(mesh), Some(levels)) = (&self.mesh, &self.levels) {
            let shapes = levels
                .iter()
                .map(|level| contour_shape(mesh, level.z_min))
                .collect();
            self.data_shapes = Some(shapes);
        }
    }
}
