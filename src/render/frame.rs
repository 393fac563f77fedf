use crate::core::Viewport;
use crate::error::{SceneError, SceneResult};
use crate::render::{FilledPolygon, Shape3D, StrokedPath};

/// Backend-agnostic scene for one chart draw pass.
///
/// Built fresh per rebuild and handed to the backend whole, so a backend
/// never observes a partially updated scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub viewport: Viewport,
    pub shapes: Vec<Shape3D>,
    pub polygons: Vec<FilledPolygon>,
    pub paths: Vec<StrokedPath>,
}

impl SceneFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            shapes: Vec::new(),
            polygons: Vec::new(),
            paths: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: Shape3D) -> Self {
        self.shapes.push(shape);
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: FilledPolygon) -> Self {
        self.polygons.push(polygon);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: StrokedPath) -> Self {
        self.paths.push(path);
        self
    }

    pub fn validate(&self) -> SceneResult<()> {
        if !self.viewport.is_valid() {
            return Err(SceneError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for shape in &self.shapes {
            shape.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.polygons.is_empty() && self.paths.is_empty()
    }
}
