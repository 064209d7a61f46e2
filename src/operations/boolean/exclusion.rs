use crate::error::Result;
use crate::geometry::Polygon;

use super::engine::boolean_execute;
use super::intersections::BruteForceFinder;
use super::options::BooleanOptions;
use super::select::BooleanOp;

/// Computes the region covered by exactly one of two polygons.
///
/// Runs the pipeline three times: union, intersection, then the union minus
/// each intersection piece.
pub struct Exclusion<'a> {
    a: &'a Polygon,
    b: &'a Polygon,
    options: BooleanOptions,
}

impl<'a> Exclusion<'a> {
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

    /// Executes the exclusion.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::EmptyResult` if the operands coincide.
    pub fn execute(&self) -> Result<Vec<Polygon>> {
        boolean_execute(
            &BruteForceFinder,
            self.a,
            self.b,
            BooleanOp::Exclusion,
            &self.options,
        )
    }
}
