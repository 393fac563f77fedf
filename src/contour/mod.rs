pub mod cache;
pub mod color;
pub mod isolines;
pub mod mesh;

pub use cache::{ContourEngine, ContourStyle};
pub use color::{CONTOUR_RAMP, contour_colors, paint_order};
pub use isolines::{ContourLevel, Polygon, contour_levels, contour_ranges, contour_shape};
pub use mesh::Mesh;
