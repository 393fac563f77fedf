use crate::error::SceneResult;
use crate::render::{Renderer, SceneFrame};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_shape_count: usize,
    pub last_polygon_count: usize,
    pub last_path_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SceneFrame) -> SceneResult<()> {
        frame.validate()?;
        self.last_shape_count = frame.shapes.len();
        self.last_polygon_count = frame.polygons.len();
        self.last_path_count = frame.paths.len();
        Ok(())
    }
}
