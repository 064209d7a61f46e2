pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// Determinant threshold below which two segments are treated as parallel.
pub const TOLERANCE: f64 = 1e-10;
