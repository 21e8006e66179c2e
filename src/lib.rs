pub mod math;
pub use math::{uv, Angle, Mat4, TransformBuilder, Unit, Vec2};

pub mod physics;
pub use physics::collision::{
    self, query, shape_shape, Circle, CircleDesc, ConvexPolygon, Hitbox, HitboxDesc, Segment,
    SegmentDesc, ShapeError, AABB,
};
