//! Types, aliases and helper operations for doing 2D collision math with `ultraviolet`.
use std::f32::consts::PI;
pub use ultraviolet as uv;

pub type Vec2 = uv::Vec2;
pub type Vec4 = uv::Vec4;
/// A column-major 4x4 model matrix, laid out the same way as OpenGL matrices.
///
/// Collision shapes only ever read the top-left 2x2 block and the translation column.
pub type Mat4 = uv::Mat4;

/// A rotation amount. Plain `f32`s convert to degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Deserialize, serde::Serialize))]
pub enum Angle {
    Rad(f32),
    Deg(f32),
}
impl Angle {
    #[inline]
    pub fn deg(&self) -> f32 {
        match self {
            Angle::Rad(rad) => rad * 180.0 / PI,
            Angle::Deg(deg) => *deg,
        }
    }

    /// Radians, as expected by `sin_cos` when building matrices.
    #[inline]
    pub fn rad(&self) -> f32 {
        match self {
            Angle::Rad(rad) => *rad,
            Angle::Deg(deg) => deg * PI / 180.0,
        }
    }
}
impl Default for Angle {
    fn default() -> Self {
        Angle::Rad(0.0)
    }
}
impl From<f32> for Angle {
    fn from(deg: f32) -> Self {
        Angle::Deg(deg)
    }
}

/// A vector known to have unit length, such as a polygon's edge normals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unit<T>(T);

impl Unit<Vec2> {
    /// A zero vector gives NaN components.
    pub fn new_normalize(v: Vec2) -> Self {
        Unit(v / v.mag())
    }

    pub const fn new_unchecked(v: Vec2) -> Self {
        Unit(v)
    }

    pub fn unit_x() -> Self {
        Unit(Vec2::unit_x())
    }

}

impl<T> std::ops::Deref for Unit<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::Neg for Unit<T>
where
    T: std::ops::Neg,
{
    type Output = Unit<<T as std::ops::Neg>::Output>;

    fn neg(self) -> Self::Output {
        Unit(-self.0)
    }
}

// Vec2 utils

#[inline]
pub fn left_normal(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}
#[inline]
pub fn right_normal(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}
#[inline]
pub fn unit_left_normal(u: Unit<Vec2>) -> Unit<Vec2> {
    Unit::new_unchecked(left_normal(*u))
}
#[inline]
pub fn unit_right_normal(u: Unit<Vec2>) -> Unit<Vec2> {
    Unit::new_unchecked(right_normal(*u))
}

/// The z component of the 3D cross product of two vectors on the xy plane.
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

// matrix utils

/// Transform a point on the z = 0 plane with a model matrix,
/// using only the top-left 2x2 block and the translation column.
///
/// Any z or perspective component of the matrix is ignored.
#[inline]
pub fn transform_point_2d(m: &Mat4, p: Vec2) -> Vec2 {
    let c0 = m.cols[0];
    let c1 = m.cols[1];
    let c3 = m.cols[3];
    Vec2::new(
        c0.x * p.x + c1.x * p.y + c3.x,
        c0.y * p.x + c1.y * p.y + c3.y,
    )
}

/// A builder to create 2D model [`Mat4`][self::Mat4]s
/// out of a position, a rotation about the z axis and a scale.
///
/// The resulting matrix applies scale first, then rotation, then translation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TransformBuilder {
    position: [f32; 2],
    rotation: Angle,
    scale: [f32; 2],
}
impl TransformBuilder {
    pub fn new() -> Self {
        TransformBuilder {
            position: [0.0, 0.0],
            rotation: Angle::default(),
            scale: [1.0, 1.0],
        }
    }
    #[inline]
    pub fn with_position(mut self, pos: impl Into<[f32; 2]>) -> Self {
        self.position = pos.into();
        self
    }
    #[inline]
    pub fn with_rotation(mut self, angle: Angle) -> Self {
        self.rotation = angle;
        self
    }
    #[inline]
    pub fn with_scale(mut self, scale: impl Into<[f32; 2]>) -> Self {
        self.scale = scale.into();
        self
    }
    #[inline]
    pub fn with_uniform_scale(self, scale: f32) -> Self {
        self.with_scale([scale, scale])
    }
    pub fn build(self) -> Mat4 {
        let (sin, cos) = self.rotation.rad().sin_cos();
        let [sx, sy] = self.scale;
        let [x, y] = self.position;
        Mat4::new(
            Vec4::new(cos * sx, sin * sx, 0.0, 0.0),
            Vec4::new(-sin * sy, cos * sy, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(x, y, 0.0, 1.0),
        )
    }
}
impl Default for TransformBuilder {
    fn default() -> Self {
        Self::new()
    }
}
impl From<TransformBuilder> for Mat4 {
    fn from(tb: TransformBuilder) -> Mat4 {
        tb.build()
    }
}
impl From<[f32; 2]> for TransformBuilder {
    fn from(vec: [f32; 2]) -> Self {
        TransformBuilder::new().with_position(vec)
    }
}
impl From<Vec2> for TransformBuilder {
    fn from(vec: Vec2) -> Self {
        TransformBuilder::new().with_position(vec)
    }
}
impl From<Angle> for TransformBuilder {
    fn from(angle: Angle) -> Self {
        TransformBuilder::new().with_rotation(angle)
    }
}
