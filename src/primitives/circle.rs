//! Circle primitive.

use cgmath::{EuclideanSpace, InnerSpace, Point2, Vector2};
use std::f64::consts::PI;

use super::{Aabb, Polygon, Projection};
use crate::Real;

/// Circle, centered on its [`Collidable::position`](super::Collidable::position)
/// — local coordinates carry only a radius, keeping the shape's
/// intrinsic frame separate from the object's world placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Radius. Always `>= 0`.
    pub radius: Real,
}

impl Circle {
    /// Create a new circle. `radius` is clamped to `>= 0`.
    pub fn new(radius: Real) -> Self {
        Circle {
            radius: radius.max(0.0),
        }
    }

    /// Local-space axis-aligned bounding box, centered on the origin.
    pub fn bound(&self) -> Aabb {
        Aabb::new(
            Point2::new(-self.radius, -self.radius),
            Point2::new(self.radius, self.radius),
        )
    }

    /// 1D projection of the circle, translated by `position`, onto
    /// `axis`. `axis` need not be unit length; the projection is scaled
    /// by `axis`'s own magnitude the same way a polygon's projection is,
    /// so the two remain comparable on the same axis.
    pub fn projection(&self, position: Point2<Real>, axis: Vector2<Real>) -> Projection {
        let center_proj = position.to_vec().dot(axis);
        let radius_proj = self.radius * axis.magnitude();
        Projection::new(center_proj - radius_proj, center_proj + radius_proj)
    }

    /// Closest point on the circle's boundary to `point`, with the circle
    /// translated by `position`. Falls back to the circle's rightmost
    /// point if `point` coincides with the center exactly.
    pub fn closest_point(&self, position: Point2<Real>, point: Point2<Real>) -> Point2<Real> {
        let offset = point - position;
        if offset.magnitude2() == 0.0 {
            return position + Vector2::new(self.radius, 0.0);
        }
        position + offset.normalize() * self.radius
    }

    /// Approximate the circle with a regular `segments`-gon, CCW-wound,
    /// in local coordinates. Used to hand a circle to SAT or ray code
    /// paths written for polygons (e.g. hybrid SAT's circle-vs-polygon
    /// fallback).
    pub fn to_polygon(&self, segments: usize) -> Polygon {
        let segments = segments.max(3);
        let step = 2.0 * PI / segments as f64;
        let vertices: Vec<Point2<Real>> = (0..segments)
            .map(|i| {
                let theta = step * i as f64;
                Point2::new(
                    self.radius * theta.cos() as Real,
                    self.radius * theta.sin() as Real,
                )
            })
            .collect();
        Polygon::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_radius_clamped() {
        let c = Circle::new(-5.0);
        assert_eq!(0.0, c.radius);
    }

    #[test]
    fn test_bound_is_square() {
        let c = Circle::new(3.0);
        let b = c.bound();
        assert_eq!(Point2::new(-3.0, -3.0), b.min);
        assert_eq!(Point2::new(3.0, 3.0), b.max);
    }

    #[test]
    fn test_projection_centered_at_origin() {
        let c = Circle::new(2.0);
        let proj = c.projection(Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
        assert_approx_eq::assert_approx_eq!(-2.0, proj.min);
        assert_approx_eq::assert_approx_eq!(2.0, proj.max);
    }

    #[test]
    fn test_closest_point_on_boundary() {
        let c = Circle::new(5.0);
        let p = c.closest_point(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        assert_approx_eq::assert_approx_eq!(5.0, p.x);
        assert_approx_eq::assert_approx_eq!(0.0, p.y);
    }

    #[test]
    fn test_to_polygon_vertex_count_and_radius() {
        let c = Circle::new(4.0);
        let poly = c.to_polygon(12);
        assert_eq!(12, poly.vertices().len());
        for v in poly.vertices() {
            assert_approx_eq::assert_approx_eq!(4.0, v.to_vec().magnitude());
        }
    }
}
