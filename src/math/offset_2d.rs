use super::Point2;

/// Returns the normalized offset in `[0, 1]` of the projection of `p`
/// onto the segment from `a` to `b`.
///
/// `0.0` maps to `a`, `1.0` to `b`; projections beyond either endpoint
/// are clamped. A degenerate segment (`a` = `b`) returns `0.5` by
/// convention, so callers always receive a usable midpoint offset.
#[must_use]
pub fn segment_offset_of_point(a: &Point2, b: &Point2, p: &Point2) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return 0.5;
    }

    let t = ((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq;
    t.clamp(0.0, 1.0)
}

/// Returns the point at normalized offset `t` along the segment from
/// `a` to `b`. Inverse of [`segment_offset_of_point`] for `t` in `[0, 1]`.
#[must_use]
pub fn point_at_offset(a: &Point2, b: &Point2, t: f64) -> Point2 {
    Point2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}
