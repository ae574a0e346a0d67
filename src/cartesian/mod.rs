mod determinant;
mod point;
mod polygon;
mod segment;

pub use self::point::Point;
pub use self::polygon::{Polygon, Position};
pub use self::segment::{Crossing, OnLine, Segment};

pub(crate) use self::polygon::{position, signed_area};
