pub mod room;
pub mod wall;

pub use room::RoomLabel;
pub use wall::{DoorKind, Wall, WallKind};

use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// A 2D point in image-pixel space (simplified for serialization).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn to_nalgebra(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    #[must_use]
    pub fn from_nalgebra(p: &Point2) -> Self {
        Self { x: p.x, y: p.y }
    }

    #[must_use]
    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned bounding box over plan coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    fn grow_to(&mut self, p: &Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }
}

/// The flat primitive model: the only data shape exchanged with the rest
/// of the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FloorPlan {
    pub walls: Vec<Wall>,
    pub rooms: Vec<RoomLabel>,
}

impl FloorPlan {
    /// Creates an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Endpoint pairs of every usable wall, for ray and intersection
    /// queries. Degenerate walls are left out so their coordinates never
    /// reach the segment math.
    #[must_use]
    pub fn segments(&self) -> Vec<(Point2, Point2)> {
        self.walls
            .iter()
            .filter(|w| !w.is_degenerate())
            .map(|w| (w.start.to_nalgebra(), w.end.to_nalgebra()))
            .collect()
    }

    /// Axis-aligned bounds of the plan's wall centerlines, or `None` for
    /// a plan with no usable walls.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        let mut bounds: Option<Aabb> = None;
        for (start, end) in self.segments() {
            for p in [start, end] {
                match bounds {
                    None => bounds = Some(Aabb { min: p, max: p }),
                    Some(ref mut b) => b.grow_to(&p),
                }
            }
        }
        bounds
    }
}
