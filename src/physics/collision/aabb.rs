use crate::math::{self as m, Mat4, Vec2, Vec4};

/// An axis-aligned bounding box defined by its minimum corner and extents.
///
/// `w` and `h` are never negative for boxes built by this crate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub struct AABB {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl AABB {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w >= 0.0 && h >= 0.0, "AABB with negative extents");
        AABB { x, y, w, h }
    }

    /// Create a box from its minimum corner and a `[width, height]` size.
    pub fn from_position_size(position: Vec2, size: impl Into<[f32; 2]>) -> Self {
        let [w, h] = size.into();
        AABB::new(position.x, position.y, w, h)
    }

    /// The tightest box containing all the given points, or `None` if there are none.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (min.min_by_component(p), max.max_by_component(p))
        });
        Some(AABB::from_min_max(min, max))
    }

    fn from_min_max(min: Vec2, max: Vec2) -> Self {
        AABB {
            x: min.x,
            y: min.y,
            w: max.x - min.x,
            h: max.y - min.y,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// The four corners, counterclockwise starting from the minimum corner.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.w, self.y),
            Vec2::new(self.x + self.w, self.y + self.h),
            Vec2::new(self.x, self.y + self.h),
        ]
    }

    /// Check whether two boxes overlap.
    ///
    /// Boxes that only share an edge or a corner do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &AABB) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Check whether a point is strictly inside the box.
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.x + self.w && p.y > self.y && p.y < self.y + self.h
    }

    /// Apply a model matrix to the corners of this box
    /// and return the axis-aligned box that fits around the result.
    ///
    /// Rotations make the box grow to contain the rotated corners;
    /// the result is always axis-aligned in the destination space.
    pub fn transform(&self, matrix: &Mat4) -> AABB {
        let mut min = Vec2::broadcast(f32::INFINITY);
        let mut max = Vec2::broadcast(f32::NEG_INFINITY);
        for corner in self.corners() {
            let t = *matrix * Vec4::new(corner.x, corner.y, 0.0, 1.0);
            let t = Vec2::new(t.x, t.y);
            min = min.min_by_component(t);
            max = max.max_by_component(t);
        }
        AABB::from_min_max(min, max)
    }

    /// Transform only the translation and 2x2 block of the matrix.
    /// Equivalent to [`transform`][Self::transform] for any matrix without perspective.
    pub fn transform_2d(&self, matrix: &Mat4) -> AABB {
        AABB::from_points(self.corners().map(|c| m::transform_point_2d(matrix, c)))
            .unwrap_or(*self)
    }
}
