pub mod bounding_box;
pub mod polygon;
pub mod segment;

pub use bounding_box::BoundingBox;
pub use polygon::Polygon;
pub use segment::{PolygonSource, Segment};
