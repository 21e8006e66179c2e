//! Pairwise intersection tests between hitbox shapes.
//!
//! Minimum translation vectors (MTVs) are returned as `Some(vector)` on collision
//! and `None` otherwise. Which of the two shapes the vector moves differs per pair
//! and is stated on each function; [`Hitbox::mtv`][super::Hitbox::mtv]
//! normalizes this so the vector always moves the receiver.

use super::{Circle, ConvexPolygon, AABB};
use crate::math::{Unit, Vec2};
use itertools::Itertools;

//
// BOX <-> BOX
//

/// Check two axis-aligned boxes for overlap. Touching edges don't count.
#[inline]
pub fn aabb_aabb(a: &AABB, b: &AABB) -> bool {
    a.overlaps(b)
}

//
// CIRCLE <-> CIRCLE
//

/// Check whether the centers of two circles are closer than the sum of their radii.
pub fn circle_circle(c1: &Circle, c2: &Circle) -> bool {
    let dist = (c2.center() - c1.center()).mag();
    dist < c1.radius() + c2.radius()
}

/// The vector that moves `c2` out of `c1` along the line between their centers.
///
/// Concentric circles are separated along the x axis.
pub fn circle_circle_mtv(c1: &Circle, c2: &Circle) -> Option<Vec2> {
    let offset = c2.center() - c1.center();
    let dist = offset.mag();
    let r_sum = c1.radius() + c2.radius();

    if !(dist < r_sum) {
        return None;
    }
    if dist == 0.0 {
        log::debug!("Concentric circles, separating along the x axis");
        return Some(Vec2::new(r_sum, 0.0));
    }

    Some(offset * ((r_sum - dist) / dist))
}

//
// POLYGON <-> CIRCLE
//

/// The point on edge `cur -> next` closest to `center` and the distance to it.
///
/// The edge must have non-zero length.
fn edge_distance(cur: Vec2, next: Vec2, center: Vec2) -> (Vec2, f32) {
    let edge = next - cur;
    let to_center = center - cur;
    let dot = to_center.dot(edge);
    let len_sq = edge.mag_sq();

    if dot < 0.0 {
        // center projects before the start of the edge
        (cur, to_center.mag())
    } else if dot > len_sq {
        // center projects past the end of the edge
        (next, (center - next).mag())
    } else {
        let closest = cur + edge * (dot / len_sq);
        (closest, (center - closest).mag())
    }
}

/// Distances below this fraction of the edge length count as lying on the edge.
const ON_EDGE_TOLERANCE: f32 = 1e-5;

/// Check whether any edge of the polygon is closer to the circle's center than its radius.
///
/// A circle lying entirely inside the polygon without reaching any of its edges
/// is not considered colliding.
pub fn polygon_circle(poly: &ConvexPolygon, circle: &Circle) -> bool {
    let center = circle.center();
    let r = circle.radius();
    poly.points()
        .iter()
        .circular_tuple_windows()
        .any(|(cur, next)| edge_distance(*cur, *next, center).1 < r)
}

/// The vector that moves `poly` out of `circle`.
///
/// Returns `Some` exactly when [`polygon_circle`] returns `true`.
/// The direction comes from the edge closest to the circle's center
/// (the first one in vertex order on ties).
pub fn polygon_circle_mtv(poly: &ConvexPolygon, circle: &Circle) -> Option<Vec2> {
    let center = circle.center();
    let r = circle.radius();

    let (edge_idx, closest, dist) = poly
        .points()
        .iter()
        .circular_tuple_windows()
        .enumerate()
        .map(|(i, (cur, next))| {
            let (point, dist) = edge_distance(*cur, *next, center);
            (i, point, dist)
        })
        .fold(None, |best: Option<(usize, Vec2, f32)>, candidate| match best {
            Some(best) if best.2 <= candidate.2 => Some(best),
            _ => Some(candidate),
        })?;

    if !(dist < r) {
        return None;
    }

    let points = poly.points();
    let edge_len = (points[(edge_idx + 1) % points.len()] - points[edge_idx]).mag();
    if dist <= ON_EDGE_TOLERANCE * edge_len {
        // center on the boundary, push along the edge normal
        let axis = *poly.axes()[edge_idx];
        let axis = if axis.dot(poly.center() - center) < 0.0 {
            -axis
        } else {
            axis
        };
        return Some(axis * r);
    }

    let towards_edge = (closest - center) / dist;
    if poly.contains_point(center) {
        // the edge has to cross over the center and then clear the radius
        Some(-towards_edge * (r + dist))
    } else {
        Some(towards_edge * (r - dist))
    }
}

//
// POLYGON <-> POLYGON
//

#[derive(Clone, Copy, Debug)]
struct Projection {
    min: f32,
    max: f32,
}

fn project(points: &[Vec2], axis: Vec2) -> Projection {
    points.iter().fold(
        Projection {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        },
        |proj, p| {
            let d = p.dot(axis);
            Projection {
                min: proj.min.min(d),
                max: proj.max.max(d),
            }
        },
    )
}

/// Check two convex polygons for intersection with the separating axis theorem.
#[inline]
pub fn polygon_polygon(poly: &ConvexPolygon, other: &ConvexPolygon) -> bool {
    polygon_polygon_mtv(poly, other).is_some()
}

/// The vector that moves `poly` out of `other`, found with the separating axis theorem.
///
/// Every edge normal of `poly` and then of `other` is tested in vertex order,
/// and the first axis with the smallest overlap gives the direction.
/// Polygons whose projections only touch on some axis are not colliding.
///
/// The sign is chosen so the vector points from the mean of `other`'s vertices
/// towards the mean of `poly`'s. This is a heuristic
/// and can pick the far side when one polygon is much larger than the other.
pub fn polygon_polygon_mtv(poly: &ConvexPolygon, other: &ConvexPolygon) -> Option<Vec2> {
    let mut min_overlap = f32::INFINITY;
    let mut min_axis = Unit::unit_x();

    for axis in poly.axes().iter().chain(other.axes()) {
        let proj1 = project(poly.points(), **axis);
        let proj2 = project(other.points(), **axis);

        if proj1.max <= proj2.min || proj2.max <= proj1.min {
            log::trace!("Separating axis found: {:?}", **axis);
            return None;
        }

        let overlap = (proj2.max - proj1.min).min(proj1.max - proj2.min);
        if overlap < min_overlap {
            min_overlap = overlap;
            min_axis = *axis;
        }
    }

    let mtv = *min_axis * min_overlap;
    let center_to_center = poly.center() - other.center();
    if center_to_center.dot(mtv) < 0.0 {
        Some(-mtv)
    } else {
        Some(mtv)
    }
}
