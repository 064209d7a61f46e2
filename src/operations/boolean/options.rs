/// Tolerances controlling a boolean operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BooleanOptions {
    /// Two points closer than this on both axes are the same point.
    /// Used for intersection dedupe, marker matching and loop closing.
    pub point_tolerance: f64,
    /// Maximum gap the tracer bridges when no segment starts exactly at the
    /// current end point.
    pub stitch_tolerance: f64,
}

impl Default for BooleanOptions {
    fn default() -> Self {
        Self {
            point_tolerance: 1e-9,
            stitch_tolerance: 1.0,
        }
    }
}

impl BooleanOptions {
    #[must_use]
    pub fn with_point_tolerance(mut self, tolerance: f64) -> Self {
        self.point_tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_stitch_tolerance(mut self, tolerance: f64) -> Self {
        self.stitch_tolerance = tolerance;
        self
    }
}
