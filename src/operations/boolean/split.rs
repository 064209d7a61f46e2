use crate::geometry::{Polygon, PolygonSource, Segment};
use crate::math::polygon_2d::points_coincide;
use crate::math::Point2;

use super::intersections::Intersection;

/// Splits every edge of `polygon` at the intersections lying on it.
///
/// Cuts use the intersection's stored point, so both operands agree on the
/// exact coordinates. Each sub-segment keeps its source tag and original
/// edge index; an endpoint that coincides with an intersection (including a
/// crossing that lands on an existing vertex) carries that intersection's id.
#[must_use]
pub fn split_polygon(
    polygon: &Polygon,
    source: PolygonSource,
    intersections: &[Intersection],
    tolerance: f64,
) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(polygon.len() + intersections.len());

    for (edge_index, start, end) in polygon.edges() {
        let mut cuts: Vec<(f64, Point2)> = intersections
            .iter()
            .filter_map(|isect| {
                let (edge, t) = match source {
                    PolygonSource::A => (isect.edge_a, isect.t_a),
                    PolygonSource::B => (isect.edge_b, isect.t_b),
                };
                (edge == edge_index).then_some((t, isect.point))
            })
            .collect();
        cuts.sort_by(|l, r| l.0.total_cmp(&r.0));

        let mut stops = Vec::with_capacity(cuts.len() + 2);
        stops.push(start);
        for (_, point) in cuts {
            if !points_coincide(&point, &start, tolerance) && !points_coincide(&point, &end, tolerance)
            {
                stops.push(point);
            }
        }
        stops.push(end);

        for pair in stops.windows(2) {
            if points_coincide(&pair[0], &pair[1], tolerance) {
                continue;
            }
            let mut segment = Segment::new(pair[0], pair[1], source, edge_index);
            segment.start_marker = marker_at(&segment.start, intersections, tolerance);
            segment.end_marker = marker_at(&segment.end, intersections, tolerance);
            segments.push(segment);
        }
    }

    segments
}

/// Returns the id of the intersection located at `point`, if any.
fn marker_at(point: &Point2, intersections: &[Intersection], tolerance: f64) -> Option<usize> {
    intersections
        .iter()
        .find(|isect| points_coincide(&isect.point, point, tolerance))
        .map(|isect| isect.id)
}
