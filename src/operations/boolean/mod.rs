mod classify;
mod engine;
mod exclusion;
mod hole;
mod intersect_op;
mod intersections;
mod options;
mod select;
mod shapes;
mod split;
mod subtract;
mod trace;
mod union;

pub use classify::{classify_segment, fully_contains, PointClassification};
pub use engine::{boolean_execute, boolean_op};
pub use exclusion::Exclusion;
pub use intersect_op::Intersect;
pub use intersections::{find_intersections, BruteForceFinder, Intersection, IntersectionFinder};
pub use options::BooleanOptions;
pub use select::BooleanOp;
pub use shapes::ShapeBoolean;
pub use subtract::Subtract;
pub use union::Union;
