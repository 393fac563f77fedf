pub mod intervals;
pub mod mapper;
pub mod range;
pub mod types;

pub use intervals::{IntervalTick, Intervals};
pub use mapper::{map_axis_value, map_log_value, map_value, unmap_axis_value};
pub use range::AxisRange;
pub use types::{AxisKind, ChartKind, MinMax, Orientation, Viewport};
