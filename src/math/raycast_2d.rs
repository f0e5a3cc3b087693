use super::intersect_2d::line_line_intersect_2d;
use super::{Point2, Vector2, TOLERANCE};

/// Distance along a ray to its first crossing of a single segment.
///
/// `dir` must be unit length for the returned parameter to be a distance;
/// [`cast_ray`] takes care of that. Returns `None` when the ray is
/// parallel to the segment, crosses its line outside the segment, or
/// would have to travel backwards.
#[must_use]
pub fn ray_segment_intersect_2d(
    origin: &Point2,
    dir: &Vector2,
    a: &Point2,
    b: &Point2,
) -> Option<f64> {
    let seg_dir = Vector2::new(b.x - a.x, b.y - a.y);
    let (t, u) = line_line_intersect_2d(origin, dir, a, &seg_dir)?;

    let eps = TOLERANCE;
    if t > eps && u >= -eps && u <= 1.0 + eps {
        Some(t)
    } else {
        None
    }
}

/// Casts a ray from `origin` along `dir` against a set of segments and
/// returns the smallest strictly positive hit distance.
///
/// `None` means the ray escapes every segment (the "open" sentinel).
/// A zero-length direction hits nothing. The direction is normalized
/// internally, so the result is a distance regardless of `dir`'s length.
#[must_use]
pub fn cast_ray(origin: &Point2, dir: &Vector2, segments: &[(Point2, Point2)]) -> Option<f64> {
    let len = dir.norm();
    if len < TOLERANCE {
        return None;
    }
    let unit = dir / len;

    let mut closest: Option<f64> = None;
    for (a, b) in segments {
        if let Some(t) = ray_segment_intersect_2d(origin, &unit, a, b) {
            match closest {
                Some(best) if best <= t => {}
                _ => closest = Some(t),
            }
        }
    }
    closest
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // Axis-aligned 100x100 room with corners at (0,0) and (100,100).
    fn square_room() -> Vec<(Point2, Point2)> {
        vec![
            (Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)),
            (Point2::new(100.0, 0.0), Point2::new(100.0, 100.0)),
            (Point2::new(100.0, 100.0), Point2::new(0.0, 100.0)),
            (Point2::new(0.0, 100.0), Point2::new(0.0, 0.0)),
        ]
    }

    #[test]
    fn ray_hits_each_square_side_at_fifty() {
        let walls = square_room();
        let center = Point2::new(50.0, 50.0);
        let dirs = [
            Vector2::new(-1.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, -1.0),
            Vector2::new(0.0, 1.0),
        ];
        for dir in &dirs {
            let d = cast_ray(&center, dir, &walls).unwrap();
            assert_relative_eq!(d, 50.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn ray_picks_nearest_of_stacked_walls() {
        let walls = vec![
            (Point2::new(0.0, 10.0), Point2::new(100.0, 10.0)),
            (Point2::new(0.0, 30.0), Point2::new(100.0, 30.0)),
        ];
        let d = cast_ray(&Point2::new(50.0, 0.0), &Vector2::new(0.0, 1.0), &walls).unwrap();
        assert_relative_eq!(d, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn ray_ignores_walls_behind_origin() {
        let walls = vec![(Point2::new(0.0, -5.0), Point2::new(100.0, -5.0))];
        let hit = cast_ray(&Point2::new(50.0, 0.0), &Vector2::new(0.0, 1.0), &walls);
        assert!(hit.is_none(), "hit={hit:?}");
    }

    #[test]
    fn ray_parallel_to_wall_is_open() {
        let walls = vec![(Point2::new(0.0, 10.0), Point2::new(100.0, 10.0))];
        let hit = cast_ray(&Point2::new(50.0, 0.0), &Vector2::new(1.0, 0.0), &walls);
        assert!(hit.is_none(), "hit={hit:?}");
    }

    #[test]
    fn ray_misses_segment_off_to_the_side() {
        // Wall line crosses the ray's path, but the segment ends before it.
        let walls = vec![(Point2::new(60.0, 10.0), Point2::new(100.0, 10.0))];
        let hit = cast_ray(&Point2::new(50.0, 0.0), &Vector2::new(0.0, 1.0), &walls);
        assert!(hit.is_none(), "hit={hit:?}");
    }

    #[test]
    fn ray_with_no_segments_is_open() {
        let hit = cast_ray(&Point2::new(0.0, 0.0), &Vector2::new(1.0, 0.0), &[]);
        assert!(hit.is_none());
    }

    #[test]
    fn ray_zero_direction_is_open() {
        let walls = square_room();
        let hit = cast_ray(&Point2::new(50.0, 50.0), &Vector2::new(0.0, 0.0), &walls);
        assert!(hit.is_none());
    }

    #[test]
    fn ray_distance_independent_of_dir_length() {
        let walls = square_room();
        let d = cast_ray(&Point2::new(50.0, 50.0), &Vector2::new(8.0, 0.0), &walls).unwrap();
        assert_relative_eq!(d, 50.0, epsilon = 1e-9);
    }
}
