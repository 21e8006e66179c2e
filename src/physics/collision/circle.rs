use super::{shape_shape, ShapeError, AABB};
use crate::math::Vec2;
use std::f32::consts::PI;

/// A circular hitbox.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CircleDesc", into = "CircleDesc")
)]
pub struct Circle {
    center: Vec2,
    radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        debug_assert!(radius >= 0.0, "negative circle radius");
        Circle { center, radius }
    }

    /// Create a circle, rejecting negative radii.
    pub fn try_new(center: Vec2, radius: f32) -> Result<Self, ShapeError> {
        if radius < 0.0 {
            return Err(ShapeError::NegativeRadius(radius));
        }
        Ok(Circle { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    /// Move the center by the given offsets.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.center.x += dx;
        self.center.y += dy;
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        debug_assert!(radius >= 0.0, "negative circle radius");
        self.radius = radius;
    }

    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    pub fn set_diameter(&mut self, diameter: f32) {
        self.set_radius(diameter / 2.0);
    }

    pub fn area(&self) -> f32 {
        PI * self.radius * self.radius
    }

    pub fn circumference(&self) -> f32 {
        2.0 * PI * self.radius
    }

    pub fn aabb(&self) -> AABB {
        AABB::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.diameter(),
            self.diameter(),
        )
    }

    /// See [`shape_shape::circle_circle`].
    pub fn is_colliding(&self, other: &Circle) -> bool {
        shape_shape::circle_circle(self, other)
    }

    /// See [`shape_shape::circle_circle_mtv`].
    pub fn mtv(&self, other: &Circle) -> Option<Vec2> {
        shape_shape::circle_circle_mtv(self, other)
    }
}

/// Serialized form of a [`Circle`].
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct CircleDesc {
    pub center: [f32; 2],
    pub radius: f32,
}

impl TryFrom<CircleDesc> for Circle {
    type Error = ShapeError;

    fn try_from(desc: CircleDesc) -> Result<Self, Self::Error> {
        Circle::try_new(Vec2::from(desc.center), desc.radius)
    }
}

impl From<Circle> for CircleDesc {
    fn from(c: Circle) -> Self {
        CircleDesc {
            center: [c.center.x, c.center.y],
            radius: c.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_properties() {
        let mut c = Circle::new(Vec2::new(1.0, 2.0), 3.0);
        assert_eq!(c.diameter(), 6.0);
        assert!((c.area() - 9.0 * PI).abs() < 1e-4);
        assert!((c.circumference() - 6.0 * PI).abs() < 1e-4);

        c.set_diameter(10.0);
        assert_eq!(c.radius(), 5.0);
        assert_eq!(c.aabb(), AABB::new(-4.0, -3.0, 10.0, 10.0));
    }

    #[test]
    fn translate_is_additive() {
        let mut c = Circle::new(Vec2::zero(), 1.0);
        c.translate(2.0, -1.0);
        c.translate(0.5, 0.5);
        assert_eq!(c.center(), Vec2::new(2.5, -0.5));
        c.set_center(Vec2::new(7.0, 7.0));
        assert_eq!(c.center(), Vec2::new(7.0, 7.0));
    }

    #[test]
    fn negative_radius_is_rejected() {
        assert_eq!(
            Circle::try_new(Vec2::zero(), -1.0),
            Err(ShapeError::NegativeRadius(-1.0))
        );
        assert!(Circle::try_new(Vec2::zero(), 0.0).is_ok());
    }
}
