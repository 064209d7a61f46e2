mod make_shape;

pub use make_shape::{generate_id, MakeShape};
