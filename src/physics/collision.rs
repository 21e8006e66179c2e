mod aabb;
pub use aabb::AABB;

mod circle;
pub use circle::{Circle, CircleDesc};

mod polygon;
pub use polygon::ConvexPolygon;

mod segment;
pub use segment::{Segment, SegmentDesc};

mod hitbox;
pub use hitbox::{Hitbox, HitboxDesc};

pub mod shape_shape;

pub mod query;

/// Errors produced when building a collision shape out of invalid data.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Vertex data has an odd number of coordinates ({0})")]
    OddCoordinateCount(usize),
    #[error("A polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("Polygon edge {index} has zero length")]
    DegenerateEdge { index: usize },
    #[error("Circle radius must not be negative, got {0}")]
    NegativeRadius(f32),
}
