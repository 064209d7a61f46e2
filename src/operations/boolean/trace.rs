use slotmap::{new_key_type, SlotMap};
use tracing::{trace, warn};

use crate::geometry::{Polygon, Segment};
use crate::math::polygon_2d::points_coincide;
use crate::math::{Point2, TOLERANCE};

use super::options::BooleanOptions;
use super::select::Handoff;

new_key_type! {
    /// Handle to a segment still waiting to be stitched.
    pub struct SegmentId;
}

/// Loops recovered from a set of kept segments.
#[derive(Debug, Default)]
pub struct TraceOutcome {
    /// Closed loops with at least 3 points.
    pub loops: Vec<Polygon>,
    /// Number of abandoned chains that could not be closed.
    pub broken: usize,
}

enum Step {
    Close,
    Next(SegmentId),
    Broken,
}

/// Stitches directed segments into closed loops.
///
/// Greedy walk: from the current end point, follow an unused segment that
/// starts exactly there, using `handoff` to break ties at intersections.
/// Without an exact match the nearest start within the stitch tolerance is
/// taken. A chain that cannot be extended or closed is dropped, never forced shut.
#[must_use]
pub fn trace_loops(segments: &[Segment], handoff: Handoff, options: &BooleanOptions) -> TraceOutcome {
    let mut pool: SlotMap<SegmentId, Segment> = SlotMap::with_capacity_and_key(segments.len());
    for segment in segments {
        pool.insert(*segment);
    }

    let mut outcome = TraceOutcome::default();

    while let Some(start_id) = find_start_segment(&pool) {
        let Some(first) = pool.remove(start_id) else {
            break;
        };

        let Some(points) = trace_one_loop(first, &mut pool, handoff, options) else {
            warn!(
                start = ?first.start,
                remaining = pool.len(),
                "abandoning boundary chain that does not close"
            );
            outcome.broken += 1;
            continue;
        };

        let points = remove_repeated_points(points, options.point_tolerance);
        let polygon = Polygon::new(points);
        if polygon.len() >= 3 && polygon.area() > TOLERANCE {
            outcome.loops.push(polygon);
        } else {
            trace!(points = polygon.len(), "dropping degenerate loop");
            outcome.broken += 1;
        }
    }

    outcome
}

/// Finds the unused segment whose start is lowest (then leftmost).
fn find_start_segment(pool: &SlotMap<SegmentId, Segment>) -> Option<SegmentId> {
    let mut best: Option<(SegmentId, Point2)> = None;
    for (id, segment) in pool {
        let p = segment.start;
        match best {
            Some((_, b)) if !(p.y < b.y - TOLERANCE || ((p.y - b.y).abs() < TOLERANCE && p.x < b.x)) => {}
            _ => best = Some((id, p)),
        }
    }
    best.map(|(id, _)| id)
}

/// Walks from `first` until the loop closes. Returns the start point of every
/// segment used, or `None` if the chain breaks.
fn trace_one_loop(
    first: Segment,
    pool: &mut SlotMap<SegmentId, Segment>,
    handoff: Handoff,
    options: &BooleanOptions,
) -> Option<Vec<Point2>> {
    let loop_start = first.start;
    let mut points = vec![first.start];
    let mut current = first;

    loop {
        match next_step(pool, &current, &loop_start, points.len(), handoff, options) {
            Step::Close => return Some(points),
            Step::Next(id) => {
                current = pool.remove(id)?;
                points.push(current.start);
            }
            Step::Broken => return None,
        }
    }
}

fn next_step(
    pool: &SlotMap<SegmentId, Segment>,
    current: &Segment,
    loop_start: &Point2,
    points_so_far: usize,
    handoff: Handoff,
    options: &BooleanOptions,
) -> Step {
    let end = current.end;
    let can_close = points_so_far >= 3;

    if can_close && points_coincide(&end, loop_start, options.point_tolerance) {
        return Step::Close;
    }

    let exact: Vec<(SegmentId, &Segment)> = pool
        .iter()
        .filter(|(_, s)| points_coincide(&s.start, &end, options.point_tolerance))
        .collect();
    if let Some(id) = pick_exact(&exact, current, handoff) {
        return Step::Next(id);
    }

    // Fall back to the nearest start within the stitch window.
    let nearest = pool
        .iter()
        .map(|(id, s)| (id, (s.start - end).norm()))
        .filter(|&(_, gap)| gap <= options.stitch_tolerance)
        .min_by(|l, r| l.1.total_cmp(&r.1));

    let closing_gap = (end - loop_start).norm();
    if can_close
        && closing_gap <= options.stitch_tolerance
        && nearest.map_or(true, |(_, gap)| closing_gap <= gap)
    {
        return Step::Close;
    }

    match nearest {
        Some((id, gap)) => {
            trace!(gap, "bridging to nearest segment start");
            Step::Next(id)
        }
        None => Step::Broken,
    }
}

/// Chooses among segments starting exactly at the current end point.
fn pick_exact(
    candidates: &[(SegmentId, &Segment)],
    current: &Segment,
    handoff: Handoff,
) -> Option<SegmentId> {
    if candidates.len() > 1 && current.ends_at_intersection() {
        let preferred = match handoff {
            Handoff::OtherSource => current.source.other(),
            Handoff::SameSource => current.source,
        };
        if let Some((id, _)) = candidates.iter().find(|(_, s)| s.source == preferred) {
            trace!(?preferred, marker = ?current.end_marker, "hand-off at intersection");
            return Some(*id);
        }
    }
    candidates.first().map(|(id, _)| *id)
}

/// Removes consecutive duplicates, including a duplicate of the first point at the end.
fn remove_repeated_points(points: Vec<Point2>, tolerance: f64) -> Vec<Point2> {
    let mut result: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        if result
            .last()
            .map_or(true, |last| !points_coincide(last, &p, tolerance))
        {
            result.push(p);
        }
    }
    while result.len() > 1 && points_coincide(&result[0], &result[result.len() - 1], tolerance) {
        result.pop();
    }
    result
}
