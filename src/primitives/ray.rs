//! Ray and line segment primitives, the query shapes used by the
//! `intersect` suite.

use cgmath::{InnerSpace, Point2, Vector2};

use crate::Real;

/// A ray: an origin and a direction, extending infinitely (or, where a
/// caller supplies a `max_t`, up to that parametric distance).
///
/// `direction` is stored as given; callers that need a unit direction
/// (e.g. [`crate::math::closest_point_on_line`]) normalize it themselves,
/// the same way the original C++ `Ray` left normalization to its callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Point2<Real>,
    /// Ray direction. Not required to be unit length.
    pub direction: Vector2<Real>,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Point2<Real>, direction: Vector2<Real>) -> Self {
        Ray { origin, direction }
    }

    /// The point at parametric distance `t` along the ray:
    /// `origin + direction * t`.
    pub fn at(&self, t: Real) -> Point2<Real> {
        self.origin + self.direction * t
    }

    /// A ray with a unit-length direction, or `None` if `direction` is
    /// (numerically) the zero vector.
    pub fn normalized(&self) -> Option<Self> {
        if self.direction.magnitude2() == 0.0 {
            return None;
        }
        Some(Ray::new(self.origin, self.direction.normalize()))
    }
}

/// A finite line segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// First endpoint.
    pub a: Point2<Real>,
    /// Second endpoint.
    pub b: Point2<Real>,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(a: Point2<Real>, b: Point2<Real>) -> Self {
        LineSegment { a, b }
    }

    /// Vector from `a` to `b`.
    pub fn direction(&self) -> Vector2<Real> {
        self.b - self.a
    }

    /// Length of the segment.
    pub fn length(&self) -> Real {
        self.direction().magnitude()
    }

    /// The point at parametric distance `t` (`0` at `a`, `1` at `b`)
    /// along the segment. `t` is not clamped.
    pub fn at(&self, t: Real) -> Point2<Real> {
        self.a + self.direction() * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let r = Ray::new(Point2::new(0.0, 0.0), Vector2::new(2.0, 0.0));
        assert_eq!(Point2::new(4.0, 0.0), r.at(2.0));
    }

    #[test]
    fn test_ray_normalized_zero_direction() {
        let r = Ray::new(Point2::new(0.0, 0.0), Vector2::new(0.0, 0.0));
        assert!(r.normalized().is_none());
    }

    #[test]
    fn test_segment_length_and_at() {
        let s = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert_approx_eq::assert_approx_eq!(5.0, s.length());
        assert_eq!(Point2::new(1.5, 2.0), s.at(0.5));
    }
}
