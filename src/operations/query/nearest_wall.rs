use crate::math::{distance_2d, offset_2d, Point2};
use crate::plan::FloorPlan;

/// Result of a nearest wall query.
#[derive(Debug, Clone, Copy)]
pub struct NearestWallResult {
    /// Index of the wall in the plan's wall list.
    pub index: usize,
    /// The closest point on that wall's centerline.
    pub point: Point2,
    /// Normalized offset of the closest point along the wall.
    pub offset: f64,
    /// Distance from the query point to the closest point.
    pub distance: f64,
}

/// Finds the wall centerline nearest to a given point.
pub struct NearestWall {
    point: Point2,
}

impl NearestWall {
    /// Creates a new `NearestWall` query.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self { point }
    }

    /// Executes the query. Returns `None` when the plan has no usable
    /// walls; degenerate walls are never candidates.
    #[must_use]
    pub fn execute(&self, plan: &FloorPlan) -> Option<NearestWallResult> {
        let mut best: Option<NearestWallResult> = None;
        for (index, wall) in plan.walls.iter().enumerate() {
            if wall.is_degenerate() {
                continue;
            }
            let start = wall.start.to_nalgebra();
            let end = wall.end.to_nalgebra();
            let distance = distance_2d::point_to_segment_dist(&self.point, &start, &end);
            match best {
                Some(ref b) if b.distance <= distance => {}
                _ => {
                    let offset = offset_2d::segment_offset_of_point(&start, &end, &self.point);
                    best = Some(NearestWallResult {
                        index,
                        point: offset_2d::point_at_offset(&start, &end, offset),
                        offset,
                        distance,
                    });
                }
            }
        }
        best
    }
}
