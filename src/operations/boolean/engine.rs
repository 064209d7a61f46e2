use tracing::debug;

use crate::error::{OperationError, PolyboolError, Result};
use crate::geometry::{Polygon, PolygonSource, Segment};

use super::classify::{classify_segment, disjoint, fully_contains};
use super::hole::attach_holes;
use super::intersections::{BruteForceFinder, IntersectionFinder};
use super::options::BooleanOptions;
use super::select::{handoff_preference, should_keep_segment, BooleanOp, KeepDecision, PrimitiveOp};
use super::split::split_polygon;
use super::trace::trace_loops;

/// Computes `op` on two polygons with default options.
///
/// Always returns a list: disjoint unions and exclusions yield several loops.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if either operand has fewer than
/// 3 points, a non-finite coordinate or zero area, and
/// `OperationError::EmptyResult` if the result has no closed boundary.
pub fn boolean_op(a: &Polygon, b: &Polygon, op: BooleanOp) -> Result<Vec<Polygon>> {
    boolean_execute(&BruteForceFinder, a, b, op, &BooleanOptions::default())
}

/// Executes a boolean operation using the given intersection finder.
///
/// Both operands are validated before any geometric work happens.
///
/// # Errors
///
/// See [`boolean_op`].
pub fn boolean_execute<F: IntersectionFinder>(
    finder: &F,
    a: &Polygon,
    b: &Polygon,
    op: BooleanOp,
    options: &BooleanOptions,
) -> Result<Vec<Polygon>> {
    validate_operand(a, "A")?;
    validate_operand(b, "B")?;

    let a = a.to_ccw();
    let b = b.to_ccw();

    let loops = match op.primitive() {
        Some(primitive) => execute_primitive(finder, &a, &b, primitive, options)?,
        None => execute_exclusion(finder, &a, &b, options)?,
    };
    Ok(attach_holes(loops))
}

fn validate_operand(polygon: &Polygon, name: &str) -> Result<()> {
    polygon.validate().map_err(|err| match err {
        PolyboolError::Geometry(geometry) => {
            OperationError::InvalidInput(format!("operand {name}: {geometry}")).into()
        }
        other => other,
    })
}

/// Runs one pass of the pipeline on counter-clockwise operands.
///
/// Holes come back as separate clockwise loops; [`boolean_execute`] bridges
/// them once all passes are done.
fn execute_primitive<F: IntersectionFinder>(
    finder: &F,
    a: &Polygon,
    b: &Polygon,
    op: PrimitiveOp,
    options: &BooleanOptions,
) -> Result<Vec<Polygon>> {
    // Step 1: Identical boundaries would be classified on the boundary itself.
    if a.same_boundary(b, options.point_tolerance) {
        debug!(?op, "operands share the same boundary");
        return handle_coincident(a, op);
    }

    // Step 2: AABB early-out
    if !a
        .bounding_box()
        .overlaps(&b.bounding_box(), options.point_tolerance)
    {
        debug!(?op, "bounding boxes do not overlap");
        return handle_disjoint(a, b, op);
    }

    // Step 3: Find all edge crossings
    let intersections = finder.find(a, b, options.point_tolerance);
    debug!(?op, count = intersections.len(), "found intersections");

    if intersections.is_empty() {
        return handle_no_intersection(a, b, op);
    }

    // Step 4: Split both boundaries and keep segments per the rule table
    let mut kept: Vec<Segment> = Vec::new();
    for (polygon, other, source) in [(a, b, PolygonSource::A), (b, a, PolygonSource::B)] {
        for segment in split_polygon(polygon, source, &intersections, options.point_tolerance) {
            let classification = classify_segment(&segment, other);
            match should_keep_segment(source, classification, op) {
                KeepDecision::Keep => kept.push(segment),
                KeepDecision::KeepReversed => kept.push(segment.reversed()),
                KeepDecision::Discard => {}
            }
        }
    }
    debug!(?op, kept = kept.len(), "selected boundary segments");

    if kept.len() < 3 {
        return Err(OperationError::EmptyResult(format!(
            "{op:?} kept only {} boundary segments",
            kept.len()
        ))
        .into());
    }

    // Step 5: Stitch kept segments into closed loops
    let outcome = trace_loops(&kept, handoff_preference(op), options);
    debug!(
        ?op,
        loops = outcome.loops.len(),
        broken = outcome.broken,
        "traced boundary loops"
    );

    if outcome.loops.is_empty() {
        return Err(OperationError::EmptyResult(format!(
            "{op:?} could not close any boundary loop"
        ))
        .into());
    }

    Ok(outcome.loops)
}

/// Exclusion is `(A ∪ B) - (A ∩ B)`, computed by three pipeline passes.
///
/// Only the counter-clockwise loops of the union are cut. Its holes lie
/// outside the overlap and are carried through untouched.
fn execute_exclusion<F: IntersectionFinder>(
    finder: &F,
    a: &Polygon,
    b: &Polygon,
    options: &BooleanOptions,
) -> Result<Vec<Polygon>> {
    let union = execute_primitive(finder, a, b, PrimitiveOp::Union, options)?;
    let overlap = match execute_primitive(finder, a, b, PrimitiveOp::Intersect, options) {
        Ok(overlap) => overlap,
        Err(err) if err.is_empty_result() => {
            debug!("exclusion of non-overlapping operands equals their union");
            return Ok(union);
        }
        Err(err) => return Err(err),
    };

    let (mut pieces, mut holes): (Vec<Polygon>, Vec<Polygon>) =
        union.into_iter().partition(Polygon::is_ccw);
    for cut in overlap.iter().filter(|cut| cut.is_ccw()) {
        let mut next = Vec::with_capacity(pieces.len());
        for piece in &pieces {
            match execute_primitive(finder, piece, cut, PrimitiveOp::Subtract, options) {
                Ok(parts) => {
                    let (outer, inner): (Vec<Polygon>, Vec<Polygon>) =
                        parts.into_iter().partition(Polygon::is_ccw);
                    next.extend(outer);
                    holes.extend(inner);
                }
                Err(err) if err.is_empty_result() => {}
                Err(err) => return Err(err),
            }
        }
        pieces = next;
    }

    if pieces.is_empty() {
        return Err(OperationError::EmptyResult(
            "exclusion removed the entire union".into(),
        )
        .into());
    }
    pieces.extend(holes);
    Ok(pieces)
}

fn handle_coincident(a: &Polygon, op: PrimitiveOp) -> Result<Vec<Polygon>> {
    match op {
        PrimitiveOp::Union | PrimitiveOp::Intersect => Ok(vec![a.clone()]),
        PrimitiveOp::Subtract => Err(OperationError::EmptyResult(
            "subtracting a polygon from itself leaves nothing".into(),
        )
        .into()),
    }
}

/// Handles operands that neither cross nor nest.
fn handle_disjoint(a: &Polygon, b: &Polygon, op: PrimitiveOp) -> Result<Vec<Polygon>> {
    match op {
        // No single boundary encloses both.
        PrimitiveOp::Union => Ok(vec![a.clone(), b.clone()]),
        PrimitiveOp::Intersect => Err(OperationError::EmptyResult(
            "intersection of disjoint polygons is empty".into(),
        )
        .into()),
        PrimitiveOp::Subtract => Ok(vec![a.clone()]),
    }
}

/// Handles operands whose edges never cross: one contains the other, or
/// they are disjoint.
fn handle_no_intersection(a: &Polygon, b: &Polygon, op: PrimitiveOp) -> Result<Vec<Polygon>> {
    if fully_contains(a, b) {
        debug!(?op, "B lies inside A");
        return Ok(match op {
            PrimitiveOp::Union => vec![a.clone()],
            PrimitiveOp::Intersect => vec![b.clone()],
            PrimitiveOp::Subtract => vec![a.clone(), b.reversed()],
        });
    }

    if fully_contains(b, a) {
        debug!(?op, "A lies inside B");
        return match op {
            PrimitiveOp::Union => Ok(vec![b.clone()]),
            PrimitiveOp::Intersect => Ok(vec![a.clone()]),
            PrimitiveOp::Subtract => Err(OperationError::EmptyResult(
                "subtraction where A is inside B produces empty result".into(),
            )
            .into()),
        };
    }

    debug_assert!(disjoint(a, b, &[]));
    handle_disjoint(a, b, op)
}
