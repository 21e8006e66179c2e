use crate::math::{self as m, Vec2};

/// A line segment between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-types",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "SegmentDesc", into = "SegmentDesc")
)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Segment { start, end }
    }

    /// The vector from start to end. Not normalized.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    pub fn length(&self) -> f32 {
        self.direction().mag()
    }

    /// The point at parameter `t`, where 0 is the start and 1 the end.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.start + self.direction() * t
    }

    /// The parameter along `self` at which the two segments cross,
    /// or `None` if they are parallel or don't reach each other.
    /// Endpoints count as crossing.
    pub fn intersection_t(&self, other: &Segment) -> Option<f32> {
        let d1 = self.direction();
        let d2 = other.direction();
        let det = m::cross(d1, d2);
        if det == 0.0 {
            // parallel or collinear
            return None;
        }
        let r = self.start - other.start;
        let ua = m::cross(d2, r) / det;
        let ub = m::cross(d1, r) / det;
        if (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub) {
            Some(ua)
        } else {
            None
        }
    }

    /// The point where the two segments cross, see [`intersection_t`][Self::intersection_t].
    pub fn intersection(&self, other: &Segment) -> Option<Vec2> {
        self.intersection_t(other).map(|t| self.point_at(t))
    }
}

/// Serialized form of a [`Segment`].
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentDesc {
    pub start: [f32; 2],
    pub end: [f32; 2],
}

impl From<SegmentDesc> for Segment {
    fn from(desc: SegmentDesc) -> Self {
        Segment::new(Vec2::from(desc.start), Vec2::from(desc.end))
    }
}

impl From<Segment> for SegmentDesc {
    fn from(s: Segment) -> Self {
        SegmentDesc {
            start: [s.start.x, s.start.y],
            end: [s.end.x, s.end.y],
        }
    }
}
