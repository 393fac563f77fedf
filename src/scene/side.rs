//! Face sides and the side -> axis-pair lookup.
//!
//! Box space is right-handed: X grows right (width), Y grows up (height),
//! Z grows into the screen (depth). Which *data* axes a face's grid renders
//! depends on the chart orientation; the lookup is pure and exhaustive, so
//! an unknown side cannot reach runtime.

use serde::{Deserialize, Serialize};

use crate::core::{AxisKind, Orientation};
use glam::DVec3;

/// One face of the axis box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub const ALL: [Self; 6] = [
        Self::Front,
        Self::Back,
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
    ];

    /// The paired face on the opposite side of the box.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }

    /// Box axis perpendicular to this face's plane.
    #[must_use]
    pub const fn perpendicular_axis(self) -> AxisKind {
        match self {
            Self::Front | Self::Back => AxisKind::Z,
            Self::Left | Self::Right => AxisKind::X,
            Self::Top | Self::Bottom => AxisKind::Y,
        }
    }

    /// True when the face sits at the far extent of its perpendicular axis
    /// (back/right/top), false at the origin plane.
    #[must_use]
    pub const fn is_far(self) -> bool {
        matches!(self, Self::Back | Self::Right | Self::Top)
    }

    /// Canonical outward normal in box space.
    #[must_use]
    pub const fn outward_normal(self) -> DVec3 {
        match self {
            Self::Front => DVec3::new(0.0, 0.0, -1.0),
            Self::Back => DVec3::new(0.0, 0.0, 1.0),
            Self::Left => DVec3::new(-1.0, 0.0, 0.0),
            Self::Right => DVec3::new(1.0, 0.0, 0.0),
            Self::Top => DVec3::new(0.0, 1.0, 0.0),
            Self::Bottom => DVec3::new(0.0, -1.0, 0.0),
        }
    }

    /// Data axes rendered by this face's grid, as (horizontal, vertical) in
    /// the face's local plane.
    #[must_use]
    pub const fn plane_axes(self, orientation: Orientation) -> (AxisKind, AxisKind) {
        match orientation {
            Orientation::Standard => match self {
                Self::Front | Self::Back => (AxisKind::X, AxisKind::Z),
                Self::Left | Self::Right => (AxisKind::Y, AxisKind::Z),
                Self::Top | Self::Bottom => (AxisKind::X, AxisKind::Y),
            },
            Orientation::ForwardZ => match self {
                Self::Front | Self::Back => (AxisKind::X, AxisKind::Y),
                Self::Left | Self::Right => (AxisKind::Z, AxisKind::Y),
                Self::Top | Self::Bottom => (AxisKind::X, AxisKind::Z),
            },
        }
    }
}
