use glam::{DVec2, DVec3};

use crate::error::{SceneError, SceneResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels, e.g. hex ramp constants.
    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(red as f64 / 255.0, green as f64 / 255.0, blue as f64 / 255.0)
    }

    /// Channel-wise linear blend toward `other`; `t` is clamped to [0, 1].
    /// Endpoints return the exact input colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        if t == 0.0 {
            return self;
        }
        if t == 1.0 {
            return other;
        }
        Self::rgba(
            self.red + (other.red - self.red) * t,
            self.green + (other.green - self.green) * t,
            self.blue + (other.blue - self.blue) * t,
            self.alpha + (other.alpha - self.alpha) * t,
        )
    }

    pub fn validate(self) -> SceneResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SceneError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// One step of a 2D path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    Close,
}

/// Ordered moveTo/lineTo path, e.g. a face grid or the debug mesh overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path2D {
    commands: Vec<PathCommand>,
}

impl Path2D {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: DVec2) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn line_to(&mut self, point: DVec2) {
        self.commands.push(PathCommand::LineTo(point));
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Appends one straight segment as a moveTo/lineTo pair.
    pub fn segment(&mut self, from: DVec2, to: DVec2) {
        self.move_to(from);
        self.line_to(to);
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of drawn segments (lineTo commands).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::LineTo(_)))
            .count()
    }

    pub fn validate(&self) -> SceneResult<()> {
        for command in &self.commands {
            let point = match command {
                PathCommand::MoveTo(point) | PathCommand::LineTo(point) => point,
                PathCommand::Close => continue,
            };
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(SceneError::InvalidData(
                    "path coordinates must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// 3D content emitted by the axis-box populators.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape3D {
    /// Planar quad in box space; winding encodes the outward normal.
    Quad {
        corners: [DVec3; 4],
        color: Color,
        opacity: f64,
    },
    /// Axis-aligned extruded bar.
    Box3 {
        min: DVec3,
        max: DVec3,
        color: Color,
    },
    /// Filled triangle; winding encodes facing.
    Triangle { points: [DVec3; 3], color: Color },
    /// Stroked line segment in box space (face grid lines).
    Segment {
        from: DVec3,
        to: DVec3,
        color: Color,
    },
    /// Closed 2D outline extruded to a thin slab centered on `z_center`.
    Slab {
        outline: Vec<DVec2>,
        z_center: f64,
        thickness: f64,
        color: Color,
    },
}

impl Shape3D {
    pub fn validate(&self) -> SceneResult<()> {
        match self {
            Self::Quad {
                corners,
                color,
                opacity,
            } => {
                for corner in corners {
                    validate_point3(*corner)?;
                }
                if !opacity.is_finite() || !(0.0..=1.0).contains(opacity) {
                    return Err(SceneError::InvalidData(
                        "quad opacity must be finite and in [0, 1]".to_owned(),
                    ));
                }
                color.validate()
            }
            Self::Box3 { min, max, color } => {
                validate_point3(*min)?;
                validate_point3(*max)?;
                if min.x > max.x || min.y > max.y || min.z > max.z {
                    return Err(SceneError::InvalidData(
                        "box min must not exceed max on any axis".to_owned(),
                    ));
                }
                color.validate()
            }
            Self::Triangle { points, color } => {
                for point in points {
                    validate_point3(*point)?;
                }
                color.validate()
            }
            Self::Segment { from, to, color } => {
                validate_point3(*from)?;
                validate_point3(*to)?;
                color.validate()
            }
            Self::Slab {
                outline,
                z_center,
                thickness,
                color,
            } => {
                for point in outline {
                    if !point.x.is_finite() || !point.y.is_finite() {
                        return Err(SceneError::InvalidData(
                            "slab outline coordinates must be finite".to_owned(),
                        ));
                    }
                }
                if !z_center.is_finite() || !thickness.is_finite() || *thickness < 0.0 {
                    return Err(SceneError::InvalidData(
                        "slab placement must be finite with non-negative thickness".to_owned(),
                    ));
                }
                color.validate()
            }
        }
    }
}

/// Filled 2D polygon in display space (contour bands after projection).
#[derive(Debug, Clone, PartialEq)]
pub struct FilledPolygon {
    pub rings: Vec<Vec<DVec2>>,
    pub color: Color,
}

impl FilledPolygon {
    pub fn validate(&self) -> SceneResult<()> {
        for ring in &self.rings {
            for point in ring {
                if !point.x.is_finite() || !point.y.is_finite() {
                    return Err(SceneError::InvalidData(
                        "polygon coordinates must be finite".to_owned(),
                    ));
                }
            }
        }
        self.color.validate()
    }
}

/// Stroked 2D path in display space (isolines, hull, debug mesh).
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedPath {
    pub path: Path2D,
    pub stroke_width: f64,
    pub color: Color,
}

impl StrokedPath {
    pub fn validate(&self) -> SceneResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(SceneError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.path.validate()?;
        self.color.validate()
    }
}

fn validate_point3(point: DVec3) -> SceneResult<()> {
    if !point.x.is_finite() || !point.y.is_finite() || !point.z.is_finite() {
        return Err(SceneError::InvalidData(
            "3D coordinates must be finite".to_owned(),
        ));
    }
    Ok(())
}
