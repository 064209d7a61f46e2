use tracing::{debug, warn};

use crate::geometry::Polygon;
use crate::math::intersect_2d::intersect_segments;
use crate::math::polygon_2d::{midpoint, points_coincide};
use crate::math::Point2;

/// Bridge parameters closer than this to either end count as touching the
/// bridge endpoint rather than crossing it.
const BRIDGE_END_SLACK: f64 = 1e-9;

/// Consecutive points closer than this are merged after bridging.
const MERGE_TOLERANCE: f64 = 1e-12;

/// Cuts `inner` out of `outer` as a single self-touching loop.
///
/// Both polygons must be wound counter-clockwise and `inner` must lie
/// strictly inside `outer`. The loop walks `outer` up to the bridge vertex,
/// crosses a zero-width bridge, walks `inner` clockwise all the way round,
/// bridges back and finishes `outer`. Under even-odd fill the bridge edges
/// cancel out.
///
/// The bridge joins the closest vertex pair whose connecting segment crosses
/// no edge of either polygon. A bridge that runs along an edge is not
/// detected, since parallel edges never report a crossing. If every pair is
/// blocked the closest pair is used anyway.
#[must_use]
pub fn bridge_hole(outer: &Polygon, inner: &Polygon) -> Polygon {
    let outer_pts = outer.points();
    let inner_pts = inner.points();
    let (oi, ii) = bridge_endpoints(outer, inner);

    let m = inner_pts.len();
    let mut points = Vec::with_capacity(outer_pts.len() + m + 2);
    points.extend_from_slice(&outer_pts[..=oi]);
    // inner[ii], inner[ii - 1], ..., inner[ii + 1], then inner[ii] again.
    for k in 0..=m {
        points.push(inner_pts[(ii + m - k % m) % m]);
    }
    points.extend_from_slice(&outer_pts[oi..]);
    // A bridge between coincident vertices leaves repeated points.
    points.dedup_by(|a, b| points_coincide(a, b, MERGE_TOLERANCE));

    Polygon::new(points)
}

/// Folds clockwise loops into the counter-clockwise loop that encloses them.
///
/// A traced union can enclose a region neither operand covers; that region
/// comes back as a separate clockwise loop. Each such hole is bridged into the
/// smallest enclosing outer loop, so every returned polygon is wound
/// counter-clockwise.
#[must_use]
pub fn attach_holes(loops: Vec<Polygon>) -> Vec<Polygon> {
    let (mut outers, holes): (Vec<Polygon>, Vec<Polygon>) =
        loops.into_iter().partition(Polygon::is_ccw);
    if holes.is_empty() {
        return outers;
    }

    for hole in holes {
        let hole = hole.reversed();
        let container = outers
            .iter()
            .enumerate()
            .filter(|(_, outer)| encloses(outer, &hole))
            .min_by(|l, r| l.1.area().total_cmp(&r.1.area()))
            .map(|(i, _)| i);

        match container {
            Some(i) => {
                debug!(hole_area = hole.area(), "bridging enclosed hole");
                outers[i] = bridge_hole(&outers[i], &hole);
            }
            None => {
                warn!(area = hole.area(), "clockwise loop has no enclosing boundary");
                outers.push(hole);
            }
        }
    }
    outers
}

/// Returns `true` if any edge midpoint of `hole` lies inside `outer`.
fn encloses(outer: &Polygon, hole: &Polygon) -> bool {
    hole.edges()
        .any(|(_, a, b)| outer.contains_point(&midpoint(&a, &b)))
}

/// Indices of the `(outer, inner)` vertex pair to bridge, nearest first.
fn bridge_endpoints(outer: &Polygon, inner: &Polygon) -> (usize, usize) {
    let mut pairs: Vec<(usize, usize, f64)> = outer
        .points()
        .iter()
        .enumerate()
        .flat_map(|(i, p)| {
            inner
                .points()
                .iter()
                .enumerate()
                .map(move |(j, q)| (i, j, (p - q).norm_squared()))
        })
        .collect();
    pairs.sort_by(|l, r| l.2.total_cmp(&r.2));

    let clear = pairs.iter().find(|&&(i, j, _)| {
        let (from, to) = (outer.points()[i], inner.points()[j]);
        !crosses_any_edge(&from, &to, outer) && !crosses_any_edge(&from, &to, inner)
    });
    if clear.is_none() {
        warn!("every hole bridge crosses an edge, using the closest pair");
    }
    clear
        .or_else(|| pairs.first())
        .map_or((0, 0), |&(i, j, _)| (i, j))
}

/// Returns `true` if some edge of `poly` meets the open segment `from -> to`.
fn crosses_any_edge(from: &Point2, to: &Point2, poly: &Polygon) -> bool {
    poly.edges().any(|(_, a, b)| {
        intersect_segments(from, to, &a, &b, 0.0)
            .is_some_and(|hit| hit.t > BRIDGE_END_SLACK && hit.t < 1.0 - BRIDGE_END_SLACK)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Polygon {
        Polygon::from_coords(&[(x, y), (x + w, y), (x + w, y + h), (x, y + h)])
    }

    #[test]
    fn bridged_area_is_outer_minus_inner() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(25.0, 25.0, 50.0, 50.0);
        let holed = bridge_hole(&outer, &inner);

        // 4 outer + 4 inner + closing inner vertex + repeated outer vertex.
        assert_eq!(holed.len(), 10);
        assert!((holed.signed_area() - 7500.0).abs() < 1e-9);
    }

    #[test]
    fn hole_interior_is_outside_under_even_odd() {
        let outer = rect(0.0, 0.0, 10.0, 10.0);
        let inner = rect(4.0, 4.0, 2.0, 2.0);
        let holed = bridge_hole(&outer, &inner);

        assert!(!holed.contains_point(&Point2::new(5.0, 5.0)));
        assert!(holed.contains_point(&Point2::new(1.0, 8.0)));
        assert!(holed.contains_point(&Point2::new(8.0, 1.5)));
        assert!(!holed.contains_point(&Point2::new(11.0, 5.0)));
    }

    #[test]
    fn clockwise_loop_is_bridged_into_its_container() {
        let outer = rect(0.0, 0.0, 10.0, 10.0);
        let hole = rect(4.0, 4.0, 2.0, 2.0).reversed();
        let far = rect(20.0, 0.0, 1.0, 1.0);
        let result = attach_holes(vec![outer, hole, far]);

        assert_eq!(result.len(), 2);
        assert!((result[0].signed_area() - 96.0).abs() < 1e-9);
        assert!(!result[0].contains_point(&Point2::new(5.0, 5.0)));
        assert!((result[1].area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn orphan_clockwise_loop_is_reoriented() {
        let result = attach_holes(vec![rect(0.0, 0.0, 2.0, 2.0).reversed()]);
        assert_eq!(result.len(), 1);
        assert!(result[0].is_ccw());
    }

    #[test]
    fn bridge_uses_closest_vertices() {
        let outer = rect(0.0, 0.0, 10.0, 10.0);
        let inner = rect(7.0, 7.0, 2.0, 2.0);
        let holed = bridge_hole(&outer, &inner);
        let pts = holed.points();
        // Outer walk reaches (10, 10), then jumps to inner corner (9, 9).
        assert_eq!(pts[2], Point2::new(10.0, 10.0));
        assert_eq!(pts[3], Point2::new(9.0, 9.0));
        // Inner is walked clockwise: (9, 9) -> (9, 7).
        assert_eq!(pts[4], Point2::new(9.0, 7.0));
    }

    #[test]
    fn bridge_skips_pair_blocked_by_hole_edge() {
        // The closest pair is (5, 0) and the notch vertex (5, 4), but that
        // bridge would cut through the hole's bottom edge at (5, 2).
        let outer = Polygon::from_coords(&[
            (-10.0, 0.0),
            (5.0, 0.0),
            (20.0, 0.0),
            (20.0, 20.0),
            (-10.0, 20.0),
        ]);
        let inner =
            Polygon::from_coords(&[(1.0, 2.0), (9.0, 2.0), (9.0, 6.0), (5.0, 4.0), (1.0, 6.0)]);
        let holed = bridge_hole(&outer, &inner);
        let pts = holed.points();

        assert_eq!(pts[1], Point2::new(5.0, 0.0));
        assert_eq!(pts[2], Point2::new(1.0, 2.0));
        assert!((holed.signed_area() - 576.0).abs() < 1e-9);
        assert!(!holed.contains_point(&Point2::new(5.0, 3.0)));
        assert!(holed.contains_point(&Point2::new(5.0, 1.0)));
    }

    #[test]
    fn bridge_between_touching_vertices_has_no_repeats() {
        // The hole touches the outer boundary at (6, 5).
        let outer = Polygon::from_coords(&[
            (0.0, 0.0),
            (9.0, 0.0),
            (9.0, 5.0),
            (6.0, 5.0),
            (6.0, 7.0),
            (3.0, 7.0),
            (3.0, 5.0),
            (0.0, 5.0),
        ]);
        let inner = rect(3.0, 3.0, 3.0, 2.0);
        let holed = bridge_hole(&outer, &inner);
        let pts = holed.points();

        assert!(pts
            .windows(2)
            .all(|w| !points_coincide(&w[0], &w[1], MERGE_TOLERANCE)));
        assert!((holed.signed_area() - 45.0).abs() < 1e-9);
        assert!(!holed.contains_point(&Point2::new(4.5, 4.0)));
        assert!(holed.contains_point(&Point2::new(4.5, 6.0)));
    }
}
