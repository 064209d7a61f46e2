use crate::geometry::PolygonSource;

use super::classify::PointClassification;

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Intersect,
    /// `A - B`.
    Subtract,
    /// Symmetric difference, `(A ∪ B) - (A ∩ B)`.
    Exclusion,
}

impl BooleanOp {
    /// The single-pass operation this maps to, or `None` for [`BooleanOp::Exclusion`],
    /// which is composed from several passes.
    #[must_use]
    pub fn primitive(self) -> Option<PrimitiveOp> {
        match self {
            Self::Union => Some(PrimitiveOp::Union),
            Self::Intersect => Some(PrimitiveOp::Intersect),
            Self::Subtract => Some(PrimitiveOp::Subtract),
            Self::Exclusion => None,
        }
    }
}

/// An operation executed by one run of the split/classify/select/trace pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveOp {
    Union,
    Intersect,
    Subtract,
}

/// Decision about whether to keep a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepDecision {
    Keep,
    KeepReversed,
    Discard,
}

/// Determines whether a segment should be kept based on its classification
/// relative to the other operand.
///
/// | Segment | vs other operand | Union   | Subtract(A-B)  | Intersect |
/// |---------|------------------|---------|----------------|-----------|
/// | from A  | OUTSIDE B        | keep    | keep           | discard   |
/// | from A  | INSIDE B         | discard | discard        | keep      |
/// | from B  | OUTSIDE A        | keep    | discard        | discard   |
/// | from B  | INSIDE A         | discard | keep (reverse) | keep      |
#[must_use]
pub fn should_keep_segment(
    source: PolygonSource,
    classification: PointClassification,
    op: PrimitiveOp,
) -> KeepDecision {
    let inside = classification == PointClassification::Inside;
    let keep_when_inside = match (op, source) {
        (PrimitiveOp::Union, _) | (PrimitiveOp::Subtract, PolygonSource::A) => false,
        (PrimitiveOp::Intersect, _) | (PrimitiveOp::Subtract, PolygonSource::B) => true,
    };

    if inside != keep_when_inside {
        KeepDecision::Discard
    } else if op == PrimitiveOp::Subtract && source == PolygonSource::B {
        // B's boundary becomes the cut, walked against its own winding.
        KeepDecision::KeepReversed
    } else {
        KeepDecision::Keep
    }
}

/// Which segment the tracer prefers when several start at an intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handoff {
    /// Switch to the other operand's boundary.
    OtherSource,
    /// Stay on the current operand's boundary.
    SameSource,
}

/// Hand-off preference matching the keep rule of `op`.
#[must_use]
pub fn handoff_preference(op: PrimitiveOp) -> Handoff {
    match op {
        PrimitiveOp::Union | PrimitiveOp::Subtract => Handoff::OtherSource,
        PrimitiveOp::Intersect => Handoff::SameSource,
    }
}
