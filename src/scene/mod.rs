pub mod axis_box;
pub mod bounds;
pub mod camera;
pub mod face;
pub mod populate;
pub mod side;

pub use axis_box::{
    AspectProvider, AspectRatios, AxisBoxBuilder, AxisBoxShape, AxisIntervals, compute_dimensions,
    data_axis_extent,
};
pub use bounds::{Bounds3D, BoxDimensions};
pub use camera::{Camera, is_facing};
pub use face::AxisBoxFace;
pub use populate::{
    BarChartData, BarFootprint, ChartContent, FacetChartData, RibbonChartData, RibbonTrace,
    populate, trace_from_points,
};
pub use side::Side;
