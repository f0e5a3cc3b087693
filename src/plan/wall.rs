use serde::{Deserialize, Serialize};

use crate::math::{Point2, TOLERANCE};

use super::Point2D;

/// Wall classification as emitted by the digitization pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WallKind {
    Wall,
    Window,
    Door,
    Opening,
}

/// Door subtype, only meaningful on walls of kind [`WallKind::Door`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DoorKind {
    Single,
    Double,
    Sliding,
}

/// A primitive wall segment: the flat, line-based shape the upstream
/// pipeline produces. Doors, windows and openings arrive as walls of the
/// corresponding kind, drawn as short segments on top of their host wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    pub id: String,
    pub start: Point2D,
    pub end: Point2D,
    #[serde(rename = "type")]
    pub kind: WallKind,
    pub is_external: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_load_bearing: Option<bool>,
    #[serde(
        rename = "doorType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub door_kind: Option<DoorKind>,
}

impl Wall {
    /// Creates a wall with no load-bearing flag and no door subtype.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        start: Point2D,
        end: Point2D,
        kind: WallKind,
        is_external: bool,
    ) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            kind,
            is_external,
            is_load_bearing: None,
            door_kind: None,
        }
    }

    /// Segment length in pixels.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Segment midpoint.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        Point2::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// True when the wall cannot be used as geometry: a non-finite
    /// coordinate or a zero-length span.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let finite = self.start.x.is_finite()
            && self.start.y.is_finite()
            && self.end.x.is_finite()
            && self.end.y.is_finite();
        !finite || self.length() < TOLERANCE
    }

    /// True for the kinds that participate in wall connectivity.
    ///
    /// `Opening` counts as structural on purpose: an open passage still
    /// connects the rooms on either side, so it is carried as a regular
    /// edge rather than a hole.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self.kind, WallKind::Wall | WallKind::Opening)
    }
}
