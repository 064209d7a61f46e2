use crate::error::Result;
use crate::geometry::Polygon;

use super::engine::boolean_execute;
use super::intersections::BruteForceFinder;
use super::options::BooleanOptions;
use super::select::BooleanOp;

/// Computes the region covered by either of two polygons.
pub struct Union<'a> {
    a: &'a Polygon,
    b: &'a Polygon,
    options: BooleanOptions,
}

impl<'a> Union<'a> {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(a: &'a Polygon, b: &'a Polygon) -> Self {
        Self {
            a,
            b,
            options: BooleanOptions::default(),
        }
    }

    /// Overrides the tolerances used by the pipeline.
    #[must_use]
    pub fn with_options(mut self, options: BooleanOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the union.
    ///
    /// Overlapping operands merge into one loop; disjoint operands come back
    /// unchanged as two loops.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for a malformed operand.
    pub fn execute(&self) -> Result<Vec<Polygon>> {
        boolean_execute(&BruteForceFinder, self.a, self.b, BooleanOp::Union, &self.options)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn union_of_crossing_rectangles() {
        let a = Polygon::from_coords(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let b = Polygon::from_coords(&[(5.0, -5.0), (15.0, -5.0), (15.0, 5.0), (5.0, 5.0)]);
        let result = Union::new(&a, &b).execute().unwrap();
        assert_eq!(result.len(), 1);
        assert!((result[0].area() - 175.0).abs() < 1e-9);
    }

    #[test]
    fn tolerances_can_be_overridden() {
        let a = Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let b = a.translated(10.0, 0.0);
        let result = Union::new(&a, &b)
            .with_options(BooleanOptions::default().with_stitch_tolerance(0.5))
            .execute()
            .unwrap();
        assert_eq!(result.len(), 2);
    }
}
