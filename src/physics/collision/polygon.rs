use super::{shape_shape, Circle, Segment, ShapeError, AABB};
use crate::math::{self as m, Mat4, Unit, Vec2};
use itertools::Itertools;

/// A convex polygon hitbox.
///
/// Holds the vertices it was created with and a second buffer of current vertices
/// which is overwritten by [`transform`][Self::transform].
/// Every edge has a unit-length normal axis that is kept in sync with the current vertices;
/// with clockwise winding the axes point out of the polygon, with counterclockwise winding in.
///
/// Edges must have non-zero length. This is checked on construction,
/// but a transform that collapses an edge produces non-finite axes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<[f32; 2]>", into = "Vec<[f32; 2]>")
)]
pub struct ConvexPolygon {
    base: Vec<Vec2>,
    points: Vec<Vec2>,
    axes: Vec<Unit<Vec2>>,
}

impl ConvexPolygon {
    /// Create a polygon out of vertices in a consistent winding order.
    pub fn new(vertices: impl IntoIterator<Item = Vec2>) -> Result<Self, ShapeError> {
        let base: Vec<Vec2> = vertices.into_iter().collect();
        if base.len() < 3 {
            return Err(ShapeError::TooFewVertices(base.len()));
        }
        if let Some(index) = base
            .iter()
            .circular_tuple_windows()
            .position(|(a, b)| (*b - *a).mag_sq() == 0.0)
        {
            return Err(ShapeError::DegenerateEdge { index });
        }

        log::debug!("Created a convex polygon with {} vertices", base.len());

        let mut poly = ConvexPolygon {
            points: base.clone(),
            axes: Vec::with_capacity(base.len()),
            base,
        };
        poly.compute_axes();
        Ok(poly)
    }

    /// Create a polygon out of interleaved coordinates `[x0, y0, x1, y1, ...]`.
    pub fn from_flat(data: &[f32]) -> Result<Self, ShapeError> {
        if data.len() % 2 != 0 {
            return Err(ShapeError::OddCoordinateCount(data.len()));
        }
        Self::new(data.chunks_exact(2).map(|xy| Vec2::new(xy[0], xy[1])))
    }

    /// Create a rectangle with its minimum corner at `(x, y)`, wound counterclockwise.
    pub fn rectangle(x: f32, y: f32, w: f32, h: f32) -> Result<Self, ShapeError> {
        Self::new([
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x, y + h),
        ])
    }

    fn compute_axes(&mut self) {
        self.axes.clear();
        self.axes.extend(
            self.points
                .iter()
                .circular_tuple_windows()
                .map(|(a, b)| Unit::new_normalize(m::left_normal(*b - *a))),
        );
    }

    /// Set the current vertices to the original vertices transformed by a model matrix.
    ///
    /// The transform is always applied to the original vertices,
    /// so calling this repeatedly does not accumulate.
    pub fn transform(&mut self, matrix: &Mat4) {
        for (point, base) in self.points.iter_mut().zip(&self.base) {
            *point = m::transform_point_2d(matrix, *base);
        }
        self.compute_axes();
    }

    /// Restore the current vertices to the original ones.
    pub fn reset(&mut self) {
        self.points.copy_from_slice(&self.base);
        self.compute_axes();
    }

    /// The current (transformed) vertices.
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// The vertices the polygon was created with.
    #[inline]
    pub fn base_points(&self) -> &[Vec2] {
        &self.base
    }

    /// Unit normals of the current edges, one per edge in vertex order.
    #[inline]
    pub fn axes(&self) -> &[Unit<Vec2>] {
        &self.axes
    }

    /// The current edges in vertex order, the last one closing the loop.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points
            .iter()
            .circular_tuple_windows()
            .map(|(a, b)| Segment::new(*a, *b))
    }

    /// The mean of the current vertices.
    pub fn center(&self) -> Vec2 {
        self.points.iter().fold(Vec2::zero(), |acc, p| acc + *p) / self.points.len() as f32
    }

    /// The area-weighted centroid of the current vertices.
    ///
    /// Falls back to [`center`][Self::center] if the polygon has collapsed to zero area.
    pub fn centroid(&self) -> Vec2 {
        let (cross_sum, weighted) = self.points.iter().circular_tuple_windows().fold(
            (0.0, Vec2::zero()),
            |(area, acc), (a, b)| {
                let cross = m::cross(*a, *b);
                (area + cross, acc + (*a + *b) * cross)
            },
        );
        if cross_sum == 0.0 {
            return self.center();
        }
        // cross_sum is twice the signed area
        weighted / (3.0 * cross_sum)
    }

    /// Signed area of the current vertices, positive for counterclockwise winding.
    pub fn signed_area(&self) -> f32 {
        self.points
            .iter()
            .circular_tuple_windows()
            .map(|(a, b)| m::cross(*a, *b))
            .sum::<f32>()
            / 2.0
    }

    /// Check whether a point is strictly inside the current polygon.
    /// Works for either winding; points on an edge are outside.
    pub fn contains_point(&self, p: Vec2) -> bool {
        let mut left = false;
        let mut right = false;
        for (a, b) in self.points.iter().circular_tuple_windows() {
            let side = m::cross(*b - *a, p - *a);
            if side > 0.0 {
                left = true;
            } else if side < 0.0 {
                right = true;
            } else {
                return false;
            }
        }
        left != right
    }

    /// Bounds of the current vertices.
    pub fn aabb(&self) -> AABB {
        AABB::from_points(self.points.iter().copied()).unwrap_or_default()
    }

    /// See [`shape_shape::polygon_polygon`].
    pub fn is_colliding(&self, other: &ConvexPolygon) -> bool {
        shape_shape::polygon_polygon(self, other)
    }

    /// See [`shape_shape::polygon_polygon_mtv`].
    pub fn mtv(&self, other: &ConvexPolygon) -> Option<Vec2> {
        shape_shape::polygon_polygon_mtv(self, other)
    }

    /// See [`shape_shape::polygon_circle`].
    pub fn is_colliding_circle(&self, circle: &Circle) -> bool {
        shape_shape::polygon_circle(self, circle)
    }

    /// See [`shape_shape::polygon_circle_mtv`].
    pub fn mtv_circle(&self, circle: &Circle) -> Option<Vec2> {
        shape_shape::polygon_circle_mtv(self, circle)
    }
}

impl TryFrom<Vec<[f32; 2]>> for ConvexPolygon {
    type Error = ShapeError;

    fn try_from(vertices: Vec<[f32; 2]>) -> Result<Self, Self::Error> {
        ConvexPolygon::new(vertices.into_iter().map(Vec2::from))
    }
}

impl From<ConvexPolygon> for Vec<[f32; 2]> {
    fn from(poly: ConvexPolygon) -> Self {
        poly.base.into_iter().map(|v| [v.x, v.y]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Angle, TransformBuilder};

    fn assert_points_close(a: &[Vec2], b: &[Vec2]) {
        assert_eq!(a.len(), b.len());
        for (pa, pb) in a.iter().zip(b) {
            assert!((*pa - *pb).mag() < 1e-4, "{a:?} != {b:?}");
        }
    }

    fn unit_square() -> ConvexPolygon {
        ConvexPolygon::from_flat(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]).unwrap()
    }

    #[test]
    fn invalid_vertex_data_is_rejected() {
        assert_eq!(
            ConvexPolygon::from_flat(&[0.0, 0.0, 1.0]),
            Err(ShapeError::OddCoordinateCount(3))
        );
        assert_eq!(
            ConvexPolygon::from_flat(&[0.0, 0.0, 1.0, 1.0]),
            Err(ShapeError::TooFewVertices(2))
        );
        assert_eq!(
            ConvexPolygon::from_flat(&[0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0]),
            Err(ShapeError::DegenerateEdge { index: 1 })
        );
        // the closing edge counts too
        assert_eq!(
            ConvexPolygon::from_flat(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0]),
            Err(ShapeError::DegenerateEdge { index: 3 })
        );
    }

    #[test]
    fn unit_square_axes_are_axis_aligned() {
        let sq = unit_square();
        itertools::assert_equal(
            sq.axes().iter().map(|a| **a),
            [
                Vec2::new(0.0, 1.0),
                Vec2::new(-1.0, 0.0),
                Vec2::new(0.0, -1.0),
                Vec2::new(1.0, 0.0),
            ],
        );
    }

    #[test]
    fn axes_are_unit_length() {
        let tri = ConvexPolygon::from_flat(&[0.0, 0.0, 4.0, 1.0, -2.0, 3.0]).unwrap();
        for axis in tri.axes() {
            assert!((axis.mag() - 1.0).abs() < 1e-5);
        }
        // perpendicular to their edges
        for (edge, axis) in tri.edges().zip(tri.axes()) {
            assert!(edge.direction().dot(**axis).abs() < 1e-5);
        }
    }

    #[test]
    fn axis_count_matches_points_after_transform() {
        let mut poly = ConvexPolygon::from_flat(&[0.0, 0.0, 2.0, 0.0, 3.0, 1.0, 1.0, 2.0, -1.0, 1.0])
            .unwrap();
        assert_eq!(poly.axes().len(), poly.points().len());
        for deg in [0.0, 30.0, 90.0, 271.0] {
            poly.transform(
                &TransformBuilder::new()
                    .with_position([deg, -deg])
                    .with_rotation(Angle::Deg(deg))
                    .build(),
            );
            assert_eq!(poly.axes().len(), poly.points().len());
            assert_eq!(poly.points().len(), 5);
        }
    }

    #[test]
    fn identity_transform_is_idempotent() {
        let mut poly = ConvexPolygon::from_flat(&[-1.5, 0.0, 2.0, -1.0, 2.5, 3.0]).unwrap();
        let base = poly.base_points().to_vec();
        poly.transform(&Mat4::identity());
        poly.transform(&Mat4::identity());
        assert_points_close(poly.points(), &base);
        assert_points_close(poly.base_points(), &base);
    }

    #[test]
    fn transforms_do_not_accumulate() {
        let mut sq = unit_square();
        let shift = TransformBuilder::new().with_position([5.0, 0.0]).build();
        sq.transform(&shift);
        sq.transform(&shift);
        assert_points_close(
            sq.points(),
            &[
                Vec2::new(5.0, 0.0),
                Vec2::new(6.0, 0.0),
                Vec2::new(6.0, 1.0),
                Vec2::new(5.0, 1.0),
            ],
        );

        sq.reset();
        assert_points_close(sq.points(), sq.base_points());
    }

    #[test]
    fn rotation_rotates_axes() {
        let mut sq = unit_square();
        sq.transform(&TransformBuilder::from(Angle::Deg(90.0)).build());
        // first edge now points up, so its left normal points to -x
        assert!((*sq.axes()[0] - Vec2::new(-1.0, 0.0)).mag() < 1e-5);
    }

    #[test]
    fn centers_and_bounds() {
        let tri = ConvexPolygon::from_flat(&[0.0, 0.0, 3.0, 0.0, 0.0, 3.0]).unwrap();
        assert_points_close(&[tri.center()], &[Vec2::new(1.0, 1.0)]);
        assert_points_close(&[tri.centroid()], &[Vec2::new(1.0, 1.0)]);
        assert!((tri.signed_area() - 4.5).abs() < 1e-5);
        assert_eq!(tri.aabb(), AABB::new(0.0, 0.0, 3.0, 3.0));

        // mean and centroid differ when vertices are unevenly spread
        let quad =
            ConvexPolygon::from_flat(&[0.0, 0.0, 4.0, 0.0, 4.0, 2.0, 3.9, 2.0]).unwrap();
        assert!((quad.center() - quad.centroid()).mag() > 0.1);
    }

    #[test]
    fn point_containment_ignores_winding() {
        let ccw = unit_square();
        let cw = ConvexPolygon::from_flat(&[0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0]).unwrap();
        for sq in [&ccw, &cw] {
            assert!(sq.contains_point(Vec2::new(0.5, 0.5)));
            assert!(!sq.contains_point(Vec2::new(1.5, 0.5)));
            assert!(!sq.contains_point(Vec2::new(1.0, 0.5)));
        }
        assert!(ccw.signed_area() > 0.0 && cw.signed_area() < 0.0);
    }

    #[test]
    fn rectangle_matches_flat_data() {
        let rect = ConvexPolygon::rectangle(1.0, 2.0, 3.0, 4.0).unwrap();
        assert_eq!(
            rect,
            ConvexPolygon::from_flat(&[1.0, 2.0, 4.0, 2.0, 4.0, 6.0, 1.0, 6.0]).unwrap()
        );
        assert_eq!(rect.edges().count(), 4);
        assert!(matches!(
            ConvexPolygon::rectangle(0.0, 0.0, 0.0, 1.0),
            Err(ShapeError::DegenerateEdge { .. })
        ));
    }

    #[test]
    fn circle_checks_match_shape_functions() {
        let sq = unit_square();
        let touching = Circle::new(Vec2::new(0.5, 1.3), 0.5);
        assert!(sq.is_colliding_circle(&touching));
        assert_eq!(
            sq.mtv_circle(&touching),
            shape_shape::polygon_circle_mtv(&sq, &touching)
        );

        let away = Circle::new(Vec2::new(3.0, 3.0), 0.5);
        assert!(!sq.is_colliding_circle(&away));
        assert_eq!(sq.mtv_circle(&away), None);
    }
}
