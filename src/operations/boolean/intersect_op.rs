use crate::error::Result;
use crate::geometry::Polygon;

use super::engine::boolean_execute;
use super::intersections::BruteForceFinder;
use super::options::BooleanOptions;
use super::select::BooleanOp;

/// Computes the region covered by both polygons.
pub struct Intersect<'a> {
    a: &'a Polygon,
    b: &'a Polygon,
    options: BooleanOptions,
}

impl<'a> Intersect<'a> {
    /// Creates a new `Intersect` operation.
    #[must_use]
    pub fn new(a: &'a Polygon, b: &'a Polygon) -> Self {
        Self {
            a,
            b,
            options: BooleanOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: BooleanOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the intersection.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::EmptyResult` if the operands do not overlap.
    pub fn execute(&self) -> Result<Vec<Polygon>> {
        boolean_execute(
            &BruteForceFinder,
            self.a,
            self.b,
            BooleanOp::Intersect,
            &self.options,
        )
    }
}
