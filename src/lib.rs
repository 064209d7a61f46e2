//! Boolean operations (union, intersection, difference, exclusion) on simple
//! 2D polygons, plus adapters to and from application shape records.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod shape;
pub mod tessellation;

pub use error::{PolyboolError, Result};
pub use geometry::Polygon;
pub use operations::boolean::{boolean_op, BooleanOp, BooleanOptions};
