use crate::geometry::{Polygon, Segment};

use super::intersections::Intersection;

/// Classification of a segment relative to the other operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
}

/// Classifies a segment by testing its midpoint against `other`.
///
/// The midpoint keeps the test away from the shared intersection vertices,
/// where containment is undefined.
#[must_use]
pub fn classify_segment(segment: &Segment, other: &Polygon) -> PointClassification {
    if other.contains_point(&segment.midpoint()) {
        PointClassification::Inside
    } else {
        PointClassification::Outside
    }
}

/// Returns `true` if every vertex of `inner` lies inside `outer`.
#[must_use]
pub fn fully_contains(outer: &Polygon, inner: &Polygon) -> bool {
    !inner.is_empty() && inner.points().iter().all(|p| outer.contains_point(p))
}

/// Returns `true` if the operands neither cross nor nest.
#[must_use]
pub fn disjoint(a: &Polygon, b: &Polygon, intersections: &[Intersection]) -> bool {
    intersections.is_empty() && !fully_contains(a, b) && !fully_contains(b, a)
}
