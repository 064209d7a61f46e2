use super::{Point2, TOLERANCE};

/// Where two bounded segments meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    pub point: Point2,
    /// Parameter along the first segment, in `[0, 1]`.
    pub t: f64,
    /// Parameter along the second segment, in `[0, 1]`.
    pub u: f64,
}

/// Intersects segment `a0 -> a1` with segment `b0 -> b1`.
///
/// Directions whose sine is below [`TOLERANCE`] count as parallel and never
/// meet, so collinear overlaps report nothing. `tolerance` is a distance:
/// a crossing up to that far beyond either end is accepted and clamped onto
/// the segment, which catches crossings landing on a shared vertex.
#[must_use]
pub fn intersect_segments(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    tolerance: f64,
) -> Option<SegmentHit> {
    let da = a1 - a0;
    let db = b1 - b0;
    let (len_a, len_b) = (da.norm(), db.norm());
    if len_a <= 0.0 || len_b <= 0.0 {
        return None;
    }

    let denom = da.perp(&db);
    if denom.abs() <= TOLERANCE * len_a * len_b {
        return None;
    }

    let offset = b0 - a0;
    let t = offset.perp(&db) / denom;
    let u = offset.perp(&da) / denom;

    let within = |s: f64, slack: f64| (-slack..=1.0 + slack).contains(&s);
    if !within(t, tolerance / len_a) || !within(u, tolerance / len_b) {
        return None;
    }

    let t = t.clamp(0.0, 1.0);
    Some(SegmentHit {
        point: point_at(a0, a1, t),
        t,
        u: u.clamp(0.0, 1.0),
    })
}

/// Linear interpolation between `a` and `b` at parameter `t`.
#[must_use]
pub fn point_at(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}
