mod frame;
mod null_renderer;
mod primitives;

pub use frame::SceneFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, FilledPolygon, Path2D, PathCommand, Shape3D, StrokedPath};

use crate::error::SceneResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `SceneFrame` so
/// drawing code remains isolated from scene construction and cache logic.
pub trait Renderer {
    fn render(&mut self, frame: &SceneFrame) -> SceneResult<()>;
}
