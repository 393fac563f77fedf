//! chart-scene3d: 3D chart scene construction and contour extraction.
//!
//! This crate is the geometry core of a desktop chart-authoring application.
//! It builds the camera-facing "axis box" for 3D chart types, populates it
//! with chart-specific content (bars, ribbons, triangulated facets), and
//! extracts filled contour bands from scattered or gridded samples via
//! Delaunay triangulation. The surrounding UI consumes results through the
//! backend-agnostic `render` seam.

pub mod api;
pub mod contour;
pub mod core;
pub mod error;
pub mod render;
pub mod scene;
pub mod telemetry;

pub use api::{SceneEngine, SceneEngineConfig};
pub use error::{SceneError, SceneResult};
