//! Narrow-phase 2D collision detection.
//!
//! Shapes are created once and moved every frame by handing their model matrix to
//! [`ConvexPolygon::transform`] (or by setting a circle's center),
//! after which the pairwise tests in [`collision::shape_shape`] can be run on them.

pub mod collision;
pub use collision::{Circle, ConvexPolygon, Hitbox, Segment, ShapeError, AABB};
