//! Intersection queries for points and segments vs. hitboxes.

use super::{Circle, Hitbox, Segment};
use crate::math::Vec2;

/// Check whether or not a point is inside a hitbox. Points on the boundary are outside.
pub fn point_hitbox(point: Vec2, hitbox: &Hitbox) -> bool {
    match hitbox {
        Hitbox::Circle(c) => (point - c.center()).mag_sq() < c.radius() * c.radius(),
        Hitbox::Polygon(p) => p.contains_point(point),
    }
}

/// The first point along `segment`, starting from its start point,
/// where it touches the boundary of the hitbox.
///
/// A segment starting inside the hitbox hits where it exits.
pub fn segment_hitbox(segment: &Segment, hitbox: &Hitbox) -> Option<Vec2> {
    let t = match hitbox {
        Hitbox::Circle(c) => segment_circle_t(segment, c),
        Hitbox::Polygon(p) => p
            .edges()
            .filter_map(|edge| segment.intersection_t(&edge))
            .fold(None, |first: Option<f32>, t| {
                Some(first.map_or(t, |first| first.min(t)))
            }),
    }?;
    Some(segment.point_at(t))
}

fn segment_circle_t(segment: &Segment, circle: &Circle) -> Option<f32> {
    // solve |start + t * dir - center|^2 = r^2 for t
    let dir = segment.direction();
    let from_center = segment.start - circle.center();
    let a = dir.mag_sq();
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * from_center.dot(dir);
    let c = from_center.mag_sq() - circle.radius() * circle.radius();

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let enter = (-b - root) / (2.0 * a);
    let exit = (-b + root) / (2.0 * a);
    [enter, exit]
        .into_iter()
        .find(|t| (0.0..=1.0).contains(t))
}
