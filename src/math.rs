//! Scalar and vector algebra helpers (layer L1).
//!
//! Free functions layered on top of `cgmath`'s `Point2`/`Vector2` —
//! `triple_product` and friends build on cgmath's vector math rather
//! than hand-rolling it from scratch.

use cgmath::{InnerSpace, Vector2};

use crate::constants::EPSILON;
use crate::Real;

/// Check if a value is almost zero (within `tolerance` of zero, exclusive).
#[inline]
pub fn almost_zero(t: Real, tolerance: Real) -> bool {
    -tolerance < t && t < tolerance
}

/// Check if two values are almost the same (their difference is less than
/// `tolerance`).
#[inline]
pub fn almost_equals(a: Real, b: Real, tolerance: Real) -> bool {
    (a - b).abs() < tolerance
}

/// Check if two vectors are almost the same, applying `tolerance`
/// independently to both components.
#[inline]
pub fn almost_equals_vec(a: Vector2<Real>, b: Vector2<Real>, tolerance: Real) -> bool {
    almost_equals(a.x, b.x, tolerance) && almost_equals(a.y, b.y, tolerance)
}

/// The only sanctioned equality test on `gFloat`-like values, using the
/// crate-wide [`EPSILON`](crate::constants::EPSILON).
#[inline]
pub fn nearly_zero(t: Real) -> bool {
    almost_zero(t, EPSILON)
}

/// Clamp `val` between `bound_one` and `bound_two`, in either order.
#[inline]
pub fn clamp(val: Real, bound_one: Real, bound_two: Real) -> Real {
    let (min, max) = if bound_one <= bound_two {
        (bound_one, bound_two)
    } else {
        (bound_two, bound_one)
    };
    val.clamp(min, max)
}

/// Check if `val` lies between the two bounds, in either order, inclusive.
#[inline]
pub fn is_between(val: Real, bound_one: Real, bound_two: Real) -> bool {
    let (min, max) = if bound_one <= bound_two {
        (bound_one, bound_two)
    } else {
        (bound_two, bound_one)
    };
    val >= min && val <= max
}

/// 2D "cross product": the scalar z-component of the 3D cross product of
/// `a` and `b` extended with a zero z.
#[inline]
pub fn cross2(a: Vector2<Real>, b: Vector2<Real>) -> Real {
    a.x * b.y - a.y * b.x
}

/// Rotate `v` by -90 degrees.
#[inline]
pub fn perp_cw(v: Vector2<Real>) -> Vector2<Real> {
    Vector2::new(v.y, -v.x)
}

/// Rotate `v` by +90 degrees.
#[inline]
pub fn perp_ccw(v: Vector2<Real>) -> Vector2<Real> {
    Vector2::new(-v.y, v.x)
}

/// Project `v` onto the `onto` axis (need not be unit length) and scale
/// the result to have signed magnitude `dist` along that axis's
/// direction.
///
/// Used by the mover to turn "how far is left to travel" into "how far is
/// left to travel along the contact tangent", shrinking towards zero as
/// `v` approaches perpendicular to `onto`.
#[inline]
pub fn project(v: Vector2<Real>, onto: Vector2<Real>, dist: Real) -> Vector2<Real> {
    let onto_n = onto.normalize();
    let theta = v.dot(onto_n);
    onto_n * theta * dist
}

/// Reflect `v` off a surface with unit normal `n`.
#[inline]
pub fn reflect(v: Vector2<Real>, n: Vector2<Real>) -> Vector2<Real> {
    v - n * (2.0 * v.dot(n))
}

/// Closest point on the infinite line through `origin` in direction `dir`
/// (`dir` must be unit length) to `point`.
#[inline]
pub fn closest_point_on_line(
    origin: cgmath::Point2<Real>,
    dir: Vector2<Real>,
    point: cgmath::Point2<Real>,
) -> cgmath::Point2<Real> {
    origin + dir * (point - origin).dot(dir)
}

/// Closest point on the infinite line through `a` and `b` to `point`.
#[inline]
pub fn closest_point_on_segment_line(
    a: cgmath::Point2<Real>,
    b: cgmath::Point2<Real>,
    point: cgmath::Point2<Real>,
) -> cgmath::Point2<Real> {
    let dir = b - a;
    a + dir * ((point - a).dot(dir) / dir.magnitude2())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Point2;

    #[test]
    fn test_almost_zero() {
        assert!(almost_zero(0.0, EPSILON));
        assert!(almost_zero(1e-8, EPSILON));
        assert!(!almost_zero(1e-3, EPSILON));
    }

    #[test]
    fn test_clamp() {
        assert_eq!(5.0, clamp(10.0, 0.0, 5.0));
        assert_eq!(5.0, clamp(10.0, 5.0, 0.0));
        assert_eq!(2.0, clamp(2.0, 0.0, 5.0));
    }

    #[test]
    fn test_perp() {
        let v = Vector2::new(1.0, 0.0);
        assert_eq!(Vector2::new(0.0, -1.0), perp_cw(v));
        assert_eq!(Vector2::new(0.0, 1.0), perp_ccw(v));
    }

    #[test]
    fn test_reflect() {
        let v = Vector2::new(1.0, -1.0);
        let n = Vector2::new(0.0, 1.0);
        let r = reflect(v, n);
        assert_approx_eq::assert_approx_eq!(1.0, r.x);
        assert_approx_eq::assert_approx_eq!(1.0, r.y);
    }

    #[test]
    fn test_project_parallel_is_full_distance() {
        let dir = Vector2::new(1.0, 0.0);
        let tangent = Vector2::new(1.0, 0.0);
        let p = project(dir, tangent, 10.0);
        assert_approx_eq::assert_approx_eq!(10.0, p.magnitude());
    }

    #[test]
    fn test_project_perpendicular_is_zero() {
        let dir = Vector2::new(0.0, 1.0);
        let tangent = Vector2::new(1.0, 0.0);
        let p = project(dir, tangent, 10.0);
        assert_approx_eq::assert_approx_eq!(0.0, p.magnitude());
    }

    #[test]
    fn test_closest_point_on_line() {
        let origin = Point2::new(0.0, 0.0);
        let dir = Vector2::new(1.0, 0.0);
        let p = closest_point_on_line(origin, dir, Point2::new(5.0, 3.0));
        assert_approx_eq::assert_approx_eq!(5.0, p.x);
        assert_approx_eq::assert_approx_eq!(0.0, p.y);
    }
}
