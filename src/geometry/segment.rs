use crate::math::polygon_2d::midpoint;
use crate::math::Point2;

/// Which operand a segment originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonSource {
    A,
    B,
}

impl PolygonSource {
    /// Returns the opposite operand.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// A directed piece of an operand's boundary.
///
/// `edge_index` is the index of the original edge it was cut from. The
/// markers hold the id of the intersection the segment starts or ends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
    pub source: PolygonSource,
    pub edge_index: usize,
    pub start_marker: Option<usize>,
    pub end_marker: Option<usize>,
}

impl Segment {
    /// Creates an unmarked segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2, source: PolygonSource, edge_index: usize) -> Self {
        Self {
            start,
            end,
            source,
            edge_index,
            start_marker: None,
            end_marker: None,
        }
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        midpoint(&self.start, &self.end)
    }

    /// Returns the segment traversed in the opposite direction, markers swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            source: self.source,
            edge_index: self.edge_index,
            start_marker: self.end_marker,
            end_marker: self.start_marker,
        }
    }

    #[must_use]
    pub fn ends_at_intersection(&self) -> bool {
        self.end_marker.is_some()
    }
}
