//! Axis-aligned rectangle primitive.

use cgmath::{EuclideanSpace, InnerSpace, Point2, Vector2};

use super::{Aabb, Polygon, Projection};
use crate::math::clamp;
use crate::Real;

/// Axis-aligned rectangle, `(x, y, w, h)` in local coordinates.
///
/// The coordinate system has y increasing downward by convention
/// (inherited from the windowing collaborator); nothing in this crate
/// depends on that direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge, in local coordinates.
    pub x: Real,
    /// Top edge, in local coordinates.
    pub y: Real,
    /// Width. Always `>= 0`.
    pub w: Real,
    /// Height. Always `>= 0`.
    pub h: Real,
}

impl Rect {
    /// Create a new rectangle. `w` and `h` are clamped to `>= 0`.
    pub fn new(x: Real, y: Real, w: Real, h: Real) -> Self {
        Rect {
            x,
            y,
            w: w.max(0.0),
            h: h.max(0.0),
        }
    }

    /// Left edge, in local coordinates.
    #[inline]
    pub fn left(&self) -> Real {
        self.x
    }

    /// Right edge, in local coordinates.
    #[inline]
    pub fn right(&self) -> Real {
        self.x + self.w
    }

    /// Top edge, in local coordinates.
    #[inline]
    pub fn top(&self) -> Real {
        self.y
    }

    /// Bottom edge, in local coordinates.
    #[inline]
    pub fn bottom(&self) -> Real {
        self.y + self.h
    }

    /// Local-space axis-aligned bounding box (identical to the rectangle
    /// itself, expressed as an [`Aabb`]).
    pub fn bound(&self) -> Aabb {
        Aabb::new(
            Point2::new(self.left(), self.top()),
            Point2::new(self.right(), self.bottom()),
        )
    }

    /// Four CCW-wound corners, in local coordinates: top-left, bottom-left,
    /// bottom-right, top-right (CCW under the y-down convention).
    pub fn corners(&self) -> [Point2<Real>; 4] {
        [
            Point2::new(self.left(), self.top()),
            Point2::new(self.left(), self.bottom()),
            Point2::new(self.right(), self.bottom()),
            Point2::new(self.right(), self.top()),
        ]
    }

    /// Convert to an equivalent 4-vertex CCW polygon.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.corners().to_vec())
    }

    /// 1D projection of the rectangle, translated by `position`, onto
    /// `axis`.
    pub fn projection(&self, position: Point2<Real>, axis: Vector2<Real>) -> Projection {
        let corners = self.corners();
        let mut min = (corners[0] + position.to_vec()).to_vec().dot(axis);
        let mut max = min;
        for c in &corners[1..] {
            let proj = (*c + position.to_vec()).to_vec().dot(axis);
            if proj < min {
                min = proj;
            } else if proj > max {
                max = proj;
            }
        }
        Projection::new(min, max)
    }

    /// Closest point on (or in) the rectangle to `point`, with the
    /// rectangle translated by `position`.
    pub fn closest_point(&self, position: Point2<Real>, point: Point2<Real>) -> Point2<Real> {
        let min = Point2::new(self.left(), self.top()) + position.to_vec();
        let max = Point2::new(self.right(), self.bottom()) + position.to_vec();
        Point2::new(clamp(point.x, min.x, max.x), clamp(point.y, min.y, max.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_bounds() {
        let r = Rect::new(0.0, 0.0, 10.0, 5.0);
        assert_eq!(0.0, r.left());
        assert_eq!(10.0, r.right());
        assert_eq!(0.0, r.top());
        assert_eq!(5.0, r.bottom());
    }

    #[test]
    fn test_negative_dims_clamped() {
        let r = Rect::new(0.0, 0.0, -1.0, -2.0);
        assert_eq!(0.0, r.w);
        assert_eq!(0.0, r.h);
    }

    #[test]
    fn test_to_polygon_has_four_ccw_vertices() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let p = r.to_polygon();
        assert_eq!(4, p.vertices().len());
    }

    #[test]
    fn test_projection_axis_aligned() {
        let r = Rect::new(-5.0, -5.0, 10.0, 10.0);
        let proj = r.projection(Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
        assert_eq!(-5.0, proj.min);
        assert_eq!(5.0, proj.max);
    }

    #[test]
    fn test_closest_point_clamps_into_rect() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let p = r.closest_point(Point2::new(0.0, 0.0), Point2::new(20.0, 5.0));
        assert_eq!(Point2::new(10.0, 5.0), p);
    }
}
