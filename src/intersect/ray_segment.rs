//! Ray-segment intersection.

use cgmath::{InnerSpace, Point2};

use crate::math::cross2;
use crate::primitives::{LineSegment, Ray};
use crate::Real;

/// Find where (if anywhere) `r` first hits `l`.
///
/// For a collinear overlapping segment, the returned point is the one
/// closest to the ray's origin. Ported from
/// `IntersectionMath::intersects(Ray, LineSegment, Coordinate2D&)`.
pub fn ray_segment_intersection(r: &Ray, l: &LineSegment) -> Option<Point2<Real>> {
    if l.a == l.b {
        return if super::point::point_on_ray(r, l.a) { Some(l.a) } else { None };
    }

    // Bounds test: either endpoint must be at or beyond the origin along the ray's direction.
    let behind_y = if r.direction.y >= 0.0 {
        l.a.y < r.origin.y && l.b.y < r.origin.y
    } else {
        l.a.y > r.origin.y && l.b.y > r.origin.y
    };
    let behind_x = if r.direction.x >= 0.0 {
        l.a.x < r.origin.x && l.b.x < r.origin.x
    } else {
        l.a.x > r.origin.x && l.b.x > r.origin.x
    };
    if behind_x || behind_y {
        return None;
    }

    let s = l.b - l.a;
    let qp = l.a - r.origin;
    let rxs = cross2(r.direction, s);
    let qpxr = cross2(qp, r.direction);

    if rxs == 0.0 {
        if qpxr != 0.0 {
            return None; // Parallel, not collinear.
        }
        let r2 = r.direction.magnitude2();
        let t0 = qp.dot(r.direction) / r2;
        let s_dot_r = s.dot(r.direction);
        return if s_dot_r < 0.0 {
            if t0 >= 0.0 {
                let t1 = t0 + s_dot_r / r2;
                Some(if t1 > 0.0 { r.origin + t1 * r.direction } else { r.origin })
            } else {
                None
            }
        } else if t0 + s_dot_r / r2 >= 0.0 {
            Some(if t0 > 0.0 { r.origin + t0 * r.direction } else { r.origin })
        } else {
            None
        };
    }

    let t = cross2(qp, s) / rxs;
    let u = qpxr / rxs;
    if t >= 0.0 && (0.0..=1.0).contains(&u) {
        Some(r.origin + t * r.direction)
    } else {
        None
    }
}

/// Like [`ray_segment_intersection`], but a segment exactly parallel and
/// collinear with the ray is never reported as an intersection — used by
/// callers that sweep ray direction across a polygon's own edges, where
/// the ray is expected to graze its own boundary.
pub fn ray_segment_intersection_ignore_parallel(r: &Ray, l: &LineSegment) -> Option<Point2<Real>> {
    let s = l.b - l.a;
    if cross2(r.direction, s) == 0.0 {
        return None;
    }
    ray_segment_intersection(r, l)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector2;

    #[test]
    fn test_ray_hits_segment() {
        let r = Ray::new(Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
        let l = LineSegment::new(Point2::new(5.0, -5.0), Point2::new(5.0, 5.0));
        let p = ray_segment_intersection(&r, &l).unwrap();
        assert_approx_eq::assert_approx_eq!(5.0, p.x);
        assert_approx_eq::assert_approx_eq!(0.0, p.y);
    }

    #[test]
    fn test_ray_misses_segment_behind_origin() {
        let r = Ray::new(Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
        let l = LineSegment::new(Point2::new(-5.0, -5.0), Point2::new(-5.0, 5.0));
        assert!(ray_segment_intersection(&r, &l).is_none());
    }

    #[test]
    fn test_ignore_parallel_excludes_collinear() {
        let r = Ray::new(Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0));
        let l = LineSegment::new(Point2::new(5.0, 0.0), Point2::new(10.0, 0.0));
        assert!(ray_segment_intersection_ignore_parallel(&r, &l).is_none());
        assert!(ray_segment_intersection(&r, &l).is_some());
    }
}
