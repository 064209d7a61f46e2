use crate::geometry::Polygon;
use crate::math::intersect_2d::{intersect_segments, SegmentHit};
use crate::math::polygon_2d::points_coincide;
use crate::math::Point2;

/// A crossing between an edge of operand A and an edge of operand B.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Position in discovery order; also the marker id attached to split segments.
    pub id: usize,
    pub point: Point2,
    /// Index of the edge of A the point lies on.
    pub edge_a: usize,
    /// Index of the edge of B the point lies on.
    pub edge_b: usize,
    /// Parameter along edge A (0..1).
    pub t_a: f64,
    /// Parameter along edge B (0..1).
    pub t_b: f64,
}

/// Strategy for computing the crossings between two polygons.
pub trait IntersectionFinder {
    /// Returns every crossing between the edges of `a` and `b`, deduplicated
    /// by point within `tolerance`, in discovery order.
    ///
    /// `tolerance` also bounds how far past an edge end a crossing may land.
    fn find(&self, a: &Polygon, b: &Polygon, tolerance: f64) -> Vec<Intersection>;
}

/// All-pairs edge test, O(n * m).
///
/// Collinear and overlapping edge pairs produce no records.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceFinder;

impl IntersectionFinder for BruteForceFinder {
    fn find(&self, a: &Polygon, b: &Polygon, tolerance: f64) -> Vec<Intersection> {
        let mut results: Vec<Intersection> = Vec::new();

        for (edge_a, a0, a1) in a.edges() {
            for (edge_b, b0, b1) in b.edges() {
                let Some(SegmentHit { point, t, u }) =
                    intersect_segments(&a0, &a1, &b0, &b1, tolerance)
                else {
                    continue;
                };

                // The same crossing shows up once per edge sharing a vertex.
                if results
                    .iter()
                    .any(|existing| points_coincide(&existing.point, &point, tolerance))
                {
                    continue;
                }

                results.push(Intersection {
                    id: results.len(),
                    point,
                    edge_a,
                    edge_b,
                    t_a: t,
                    t_b: u,
                });
            }
        }

        results
    }
}

/// Finds all intersections with the default [`BruteForceFinder`].
#[must_use]
pub fn find_intersections(a: &Polygon, b: &Polygon, tolerance: f64) -> Vec<Intersection> {
    BruteForceFinder.find(a, b, tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Polygon {
        Polygon::from_coords(&[(x, y), (x + w, y), (x + w, y + h), (x, y + h)])
    }

    #[test]
    fn overlapping_squares_cross_twice() {
        let hits = find_intersections(&rect(0.0, 0.0, 10.0, 10.0), &rect(5.0, 5.0, 10.0, 10.0), 1e-9);
        assert_eq!(hits.len(), 2);

        let first = &hits[0];
        assert_eq!(first.id, 0);
        assert_eq!(first.edge_a, 1);
        assert_eq!(first.edge_b, 0);
        assert!((first.point.x - 10.0).abs() < 1e-9);
        assert!((first.point.y - 5.0).abs() < 1e-9);
        assert!((first.t_a - 0.5).abs() < 1e-9);
        assert!((first.t_b - 0.5).abs() < 1e-9);

        assert_eq!(hits[1].id, 1);
        assert!((hits[1].point.x - 5.0).abs() < 1e-9);
        assert!((hits[1].point.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_squares_do_not_cross() {
        let hits =
            find_intersections(&rect(0.0, 0.0, 10.0, 10.0), &rect(20.0, 20.0, 10.0, 10.0), 1e-9);
        assert!(hits.is_empty());
    }

    #[test]
    fn nested_squares_do_not_cross() {
        let hits =
            find_intersections(&rect(0.0, 0.0, 100.0, 100.0), &rect(25.0, 25.0, 50.0, 50.0), 1e-9);
        assert!(hits.is_empty());
    }

    #[test]
    fn crossing_through_a_vertex_is_reported_once() {
        // The triangle's apex (5, 10) sits exactly on the square's top edge and
        // is shared by two triangle edges.
        let square = rect(0.0, 0.0, 10.0, 10.0);
        let tri = Polygon::from_coords(&[(2.0, 12.0), (5.0, 10.0), (8.0, 12.0)]);
        let hits = find_intersections(&square, &tri, 1e-9);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].point.x - 5.0).abs() < 1e-9);
        assert!((hits[0].point.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn collinear_edges_are_ignored() {
        // Shares the segment x = 10, 0..10 with the first square only along a
        // collinear overlap.
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 2.0, 5.0, 5.0);
        let hits = find_intersections(&a, &b, 1e-9);
        // Only the collinear edge touches; perpendicular edges meet it at
        // their endpoints (10, 2) and (10, 7).
        assert!(hits
            .iter()
            .all(|h| (h.point.x - 10.0).abs() < 1e-9));
    }

    #[test]
    fn tolerance_admits_near_miss_at_edge_end() {
        // The triangle apex stops 1e-7 short of the square's top edge.
        let square = rect(0.0, 0.0, 10.0, 10.0);
        let tri = Polygon::from_coords(&[(2.0, 12.0), (5.0, 10.0 + 1e-7), (8.0, 12.0)]);
        assert!(find_intersections(&square, &tri, 1e-9).is_empty());

        let hits = find_intersections(&square, &tri, 1e-6);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].point.y - 10.0).abs() < 1e-9);
    }
}
