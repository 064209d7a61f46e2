use crate::error::Result;
use crate::geometry::Polygon;

use super::engine::boolean_execute;
use super::intersections::BruteForceFinder;
use super::options::BooleanOptions;
use super::select::BooleanOp;

/// Computes `minuend - subtrahend`.
pub struct Subtract<'a> {
    minuend: &'a Polygon,
    subtrahend: &'a Polygon,
    options: BooleanOptions,
}

impl<'a> Subtract<'a> {
    /// Creates a new `Subtract` operation.
    #[must_use]
    pub fn new(minuend: &'a Polygon, subtrahend: &'a Polygon) -> Self {
        Self {
            minuend,
            subtrahend,
            options: BooleanOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: BooleanOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the subtraction.
    ///
    /// A subtrahend lying strictly inside the minuend is cut out through a
    /// zero-width bridge, giving a single loop.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::EmptyResult` if nothing of the minuend remains.
    pub fn execute(&self) -> Result<Vec<Polygon>> {
        boolean_execute(
            &BruteForceFinder,
            self.minuend,
            self.subtrahend,
            BooleanOp::Subtract,
            &self.options,
        )
    }
}
