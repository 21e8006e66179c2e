use super::{shape_shape, Circle, ConvexPolygon, ShapeError, AABB};
use crate::math::{Mat4, Vec2};

/// Any shape that can collide with the others.
///
/// The minimum translation vectors returned by [`mtv`][Self::mtv]
/// always move `self` out of `other`, whichever pair of shapes it is.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "HitboxDesc", into = "HitboxDesc")
)]
pub enum Hitbox {
    Circle(Circle),
    Polygon(ConvexPolygon),
}

impl Hitbox {
    /// Circle center or the mean of the polygon's current vertices.
    pub fn center(&self) -> Vec2 {
        match self {
            Hitbox::Circle(c) => c.center(),
            Hitbox::Polygon(p) => p.center(),
        }
    }

    pub fn aabb(&self) -> AABB {
        match self {
            Hitbox::Circle(c) => c.aabb(),
            Hitbox::Polygon(p) => p.aabb(),
        }
    }

    /// Apply a model matrix to a polygon hitbox.
    /// Circles are positioned with [`Circle::set_center`] instead and are left unchanged.
    pub fn transform(&mut self, matrix: &Mat4) {
        if let Hitbox::Polygon(p) = self {
            p.transform(matrix);
        }
    }

    /// Check two hitboxes for intersection.
    pub fn is_colliding(&self, other: &Hitbox) -> bool {
        match (self, other) {
            (Hitbox::Circle(c1), Hitbox::Circle(c2)) => shape_shape::circle_circle(c1, c2),
            (Hitbox::Polygon(p1), Hitbox::Polygon(p2)) => shape_shape::polygon_polygon(p1, p2),
            (Hitbox::Polygon(p), Hitbox::Circle(c)) | (Hitbox::Circle(c), Hitbox::Polygon(p)) => {
                shape_shape::polygon_circle(p, c)
            }
        }
    }

    /// The vector that moves `self` out of `other`, or `None` if they don't intersect.
    pub fn mtv(&self, other: &Hitbox) -> Option<Vec2> {
        match (self, other) {
            // circle_circle_mtv moves the second circle
            (Hitbox::Circle(c1), Hitbox::Circle(c2)) => {
                flip(shape_shape::circle_circle_mtv(c1, c2))
            }
            (Hitbox::Polygon(p1), Hitbox::Polygon(p2)) => shape_shape::polygon_polygon_mtv(p1, p2),
            (Hitbox::Polygon(p), Hitbox::Circle(c)) => shape_shape::polygon_circle_mtv(p, c),
            (Hitbox::Circle(c), Hitbox::Polygon(p)) => {
                flip(shape_shape::polygon_circle_mtv(p, c))
            }
        }
    }
}

fn flip(mtv: Option<Vec2>) -> Option<Vec2> {
    mtv.map(|v| -v)
}

impl From<Circle> for Hitbox {
    fn from(c: Circle) -> Self {
        Hitbox::Circle(c)
    }
}

impl From<ConvexPolygon> for Hitbox {
    fn from(p: ConvexPolygon) -> Self {
        Hitbox::Polygon(p)
    }
}

/// Serialized form of a [`Hitbox`]. Polygons are stored with their untransformed vertices.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub enum HitboxDesc {
    Circle { center: [f32; 2], radius: f32 },
    Polygon { vertices: Vec<[f32; 2]> },
}

impl TryFrom<HitboxDesc> for Hitbox {
    type Error = ShapeError;

    fn try_from(desc: HitboxDesc) -> Result<Self, Self::Error> {
        match desc {
            HitboxDesc::Circle { center, radius } => {
                Ok(Hitbox::Circle(Circle::try_new(Vec2::from(center), radius)?))
            }
            HitboxDesc::Polygon { vertices } => {
                Ok(Hitbox::Polygon(ConvexPolygon::try_from(vertices)?))
            }
        }
    }
}

impl From<Hitbox> for HitboxDesc {
    fn from(hitbox: Hitbox) -> Self {
        match hitbox {
            Hitbox::Circle(c) => HitboxDesc::Circle {
                center: [c.center().x, c.center().y],
                radius: c.radius(),
            },
            Hitbox::Polygon(p) => HitboxDesc::Polygon {
                vertices: p.into(),
            },
        }
    }
}
