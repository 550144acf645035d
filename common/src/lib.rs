pub mod shapes;
pub mod vector;

pub use shapes::{as_shape, Aabb, Circle, Segment, Shape, ShapeEnum};
pub use vector::Vector;
