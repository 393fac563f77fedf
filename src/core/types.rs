use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One axis of the data cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisKind {
    X,
    Y,
    Z,
}

impl AxisKind {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];
}

/// Closed set of 3D chart types served by the scene builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Bar3d,
    Line3d,
    Contour3d,
}

impl ChartKind {
    /// Axis orientation rule for this chart type.
    ///
    /// Bar and line charts run a synthetic Z axis into the screen; contour
    /// charts are standard Z-up with data Y mapped to box depth.
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Bar3d | Self::Line3d => Orientation::ForwardZ,
            Self::Contour3d => Orientation::Standard,
        }
    }
}

/// How the data cube's axes map onto the box's width/height/depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Z-up: data X -> width, data Y -> depth, data Z -> height.
    Standard,
    /// Forward-Z: data X -> width, data Y -> height, synthetic Z -> depth.
    ForwardZ,
}

/// Inclusive-exclusive value band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}
