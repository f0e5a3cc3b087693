use std::fmt;

use crate::error::{OperationError, Result};
use crate::math::{raycast_2d, Point2, Vector2};
use crate::plan::FloorPlan;

/// Estimated extent of the space around a probe point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoomExtent {
    /// At least one axis saw no wall in either direction.
    Open,
    /// Axis-aligned extent in real-world units.
    Size { width: f64, height: f64 },
}

impl fmt::Display for RoomExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Size { width, height } => {
                write_dimension(f, *width)?;
                write!(f, " x ")?;
                write_dimension(f, *height)
            }
        }
    }
}

/// Writes a dimension rounded to one decimal, dropping a trailing `.0`.
fn write_dimension(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract().abs() < f64::EPSILON {
        write!(f, "{rounded:.0}")
    } else {
        write!(f, "{rounded:.1}")
    }
}

/// Estimates the enclosing rectangle around a point by casting one ray
/// in each axis direction against the wall centerlines.
///
/// Width is the sum of the left and right hit distances, height the sum
/// of up and down (screen coordinates, `+y` down), each divided by the
/// scale factor. A coarse estimate for informational display: diagonal
/// walls and non-rectangular rooms are measured only where the four rays
/// happen to cross them.
pub struct RoomSize {
    origin: Point2,
    pixels_per_unit: f64,
}

impl RoomSize {
    /// Creates a new `RoomSize` query.
    ///
    /// `pixels_per_unit` is the plan's scale factor: how many image
    /// pixels one real-world unit spans.
    #[must_use]
    pub fn new(origin: Point2, pixels_per_unit: f64) -> Self {
        Self {
            origin,
            pixels_per_unit,
        }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the scale factor is not
    /// finite and positive.
    pub fn execute(&self, plan: &FloorPlan) -> Result<RoomExtent> {
        if !(self.pixels_per_unit.is_finite() && self.pixels_per_unit > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "pixels_per_unit must be finite and positive, got {}",
                self.pixels_per_unit
            ))
            .into());
        }

        let segments = plan.segments();

        // A miss contributes zero to its axis.
        let left = self.ray(&segments, Vector2::new(-1.0, 0.0));
        let right = self.ray(&segments, Vector2::new(1.0, 0.0));
        let up = self.ray(&segments, Vector2::new(0.0, -1.0));
        let down = self.ray(&segments, Vector2::new(0.0, 1.0));

        let width_px = left + right;
        let height_px = up + down;
        if width_px <= 0.0 || height_px <= 0.0 {
            return Ok(RoomExtent::Open);
        }

        Ok(RoomExtent::Size {
            width: width_px / self.pixels_per_unit,
            height: height_px / self.pixels_per_unit,
        })
    }

    fn ray(&self, segments: &[(Point2, Point2)], dir: Vector2) -> f64 {
        raycast_2d::cast_ray(&self.origin, &dir, segments).unwrap_or(0.0)
    }
}
