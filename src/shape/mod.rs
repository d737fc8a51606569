//! Shapes supported by sataxis.

pub use self::cuboid::Cuboid;
pub use self::polygon::Polygon;
pub use self::segment::Segment;

mod cuboid;
mod polygon;
mod segment;
