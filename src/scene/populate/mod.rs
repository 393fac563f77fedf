//! Chart-type-specific content population of a built axis box.
//!
//! Dispatch is an exhaustive match over the closed [`ChartContent`] variant,
//! one populator per chart kind. Empty content (no traces, no triangles) is
//! a no-op: the box still stands, just empty.

mod bars;
mod facets;
mod ribbons;

use glam::DVec2;

use crate::contour::Mesh;
use crate::core::{AxisRange, ChartKind};
use crate::error::{SceneError, SceneResult};
use crate::render::Color;
use crate::scene::axis_box::AxisBoxShape;

pub use bars::{BarChartData, BarFootprint};
pub use facets::FacetChartData;
pub use ribbons::{RibbonChartData, RibbonTrace};

/// Chart content tagged by kind, the populator's dispatch payload.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartContent {
    Bars(BarChartData),
    Ribbons(RibbonChartData),
    Facets(FacetChartData),
}

impl ChartContent {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Bars(_) => ChartKind::Bar3d,
            Self::Ribbons(_) => ChartKind::Line3d,
            Self::Facets(_) => ChartKind::Contour3d,
        }
    }

    /// Trace count used for the Line3D synthetic depth axis.
    #[must_use]
    pub fn enabled_trace_count(&self) -> usize {
        match self {
            Self::Ribbons(data) => data.traces.iter().filter(|trace| trace.enabled).count(),
            Self::Bars(_) | Self::Facets(_) => 0,
        }
    }
}

/// Adds the content's 3D primitives into the box.
///
/// The content kind must match the box's chart kind; a mismatch is a caller
/// bug and fails fast.
pub fn populate(box_shape: &mut AxisBoxShape, content: &ChartContent) -> SceneResult<()> {
    if content.kind() != box_shape.chart_kind() {
        return Err(SceneError::InvalidData(format!(
            "content kind {:?} does not match box chart kind {:?}",
            content.kind(),
            box_shape.chart_kind()
        )));
    }

    match content {
        ChartContent::Bars(data) => bars::populate_bars(box_shape, data),
        ChartContent::Ribbons(data) => ribbons::populate_ribbons(box_shape, data),
        ChartContent::Facets(data) => facets::populate_facets(box_shape, data),
    }
}

/// Shorthand constructors for hosts assembling content.
impl ChartContent {
    #[must_use]
    pub fn bars(footprints: Vec<BarFootprint>, reveal: f64) -> Self {
        Self::Bars(BarChartData { footprints, reveal })
    }

    #[must_use]
    pub fn ribbons(
        traces: Vec<RibbonTrace>,
        x_range: AxisRange,
        y_range: AxisRange,
        reveal: f64,
    ) -> Self {
        Self::Ribbons(RibbonChartData {
            traces,
            x_range,
            y_range,
            reveal,
        })
    }

    #[must_use]
    pub fn facets(
        mesh: Mesh,
        x_range: AxisRange,
        y_range: AxisRange,
        z_range: AxisRange,
        level_count: usize,
    ) -> Self {
        Self::Facets(FacetChartData {
            mesh,
            x_range,
            y_range,
            z_range,
            level_count,
        })
    }
}

/// A ribbon trace from plain XY pairs.
#[must_use]
pub fn trace_from_points(points: &[(f64, f64)], color: Color) -> RibbonTrace {
    RibbonTrace {
        points: points.iter().map(|&(x, y)| DVec2::new(x, y)).collect(),
        color,
        enabled: true,
    }
}
