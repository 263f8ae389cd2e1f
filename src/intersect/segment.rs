//! Segment-segment intersection.

use cgmath::{InnerSpace, Point2};

use crate::math::cross2;
use crate::primitives::LineSegment;
use crate::Real;

fn direction(a: Point2<Real>, b: Point2<Real>, c: Point2<Real>) -> Real {
    cross2(c - a, b - a)
}

fn on_segment(a: Point2<Real>, b: Point2<Real>, c: Point2<Real>) -> bool {
    (a.x <= c.x || b.x <= c.x) && (c.x <= a.x || c.x <= b.x) && (a.y <= c.y || b.y <= c.y) && (c.y <= a.y || c.y <= b.y)
}

/// Fast boolean-only test for whether `a` and `b` cross, without finding
/// the intersection point.
///
/// Ported from `IntersectionMath::intersects(LineSegment, LineSegment)`'s
/// orientation test.
pub fn segments_intersect(a: &LineSegment, b: &LineSegment) -> bool {
    let d1 = direction(b.a, b.b, a.a);
    let d2 = direction(b.a, b.b, a.b);
    let d3 = direction(a.a, a.b, b.a);
    let d4 = direction(a.a, a.b, b.b);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0)) && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
        || (d1 == 0.0 && on_segment(b.a, b.b, a.a))
        || (d2 == 0.0 && on_segment(b.a, b.b, a.b))
        || (d3 == 0.0 && on_segment(a.a, a.b, b.a))
        || (d4 == 0.0 && on_segment(a.a, a.b, b.b))
}

/// Find where (if anywhere) `a` and `b` intersect.
///
/// For collinear overlapping segments, the returned point is the point
/// of overlap closest to `a`'s start. Ported from
/// `IntersectionMath::intersects(LineSegment, LineSegment, Coordinate2D&)`.
pub fn segment_intersection(a: &LineSegment, b: &LineSegment) -> Option<Point2<Real>> {
    let a_min_x = a.a.x.min(a.b.x);
    let a_max_x = a.a.x.max(a.b.x);
    let a_min_y = a.a.y.min(a.b.y);
    let a_max_y = a.a.y.max(a.b.y);
    let b_min_x = b.a.x.min(b.b.x);
    let b_max_x = b.a.x.max(b.b.x);
    let b_min_y = b.a.y.min(b.b.y);
    let b_max_y = b.a.y.max(b.b.y);
    if a_min_x > b_max_x || a_max_x < b_min_x || a_min_y > b_max_y || a_max_y < b_min_y {
        return None;
    }

    if a.a == a.b {
        return if super::point::point_on_segment(b, a.a) { Some(a.a) } else { None };
    }
    if b.a == b.b {
        return if super::point::point_on_segment(a, b.a) { Some(b.a) } else { None };
    }

    let r = a.b - a.a;
    let s = b.b - b.a;
    let qp = b.a - a.a;
    let rxs = cross2(r, s);
    let qpxr = cross2(qp, r);

    if rxs == 0.0 {
        if qpxr != 0.0 {
            return None; // Parallel, not collinear.
        }
        let r2 = r.magnitude2();
        let t0 = qp.dot(r) / r2;
        let s_dot_r = s.dot(r);
        let t1 = t0 + s_dot_r / r2;
        return if s_dot_r < 0.0 {
            if 0.0 <= t0 && t1 <= 1.0 {
                Some(if t1 > 0.0 { a.a + t1 * r } else { a.a })
            } else {
                None
            }
        } else if 0.0 <= t1 && t0 <= 1.0 {
            Some(if t0 > 0.0 { a.a + t0 * r } else { a.a })
        } else {
            None
        };
    }

    let t = cross2(qp, s) / rxs;
    let u = qpxr / rxs;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a.a + t * r)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing_segments() {
        let a = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        let b = LineSegment::new(Point2::new(0.0, 10.0), Point2::new(10.0, 0.0));
        assert!(segments_intersect(&a, &b));
        let p = segment_intersection(&a, &b).unwrap();
        assert_approx_eq::assert_approx_eq!(5.0, p.x);
        assert_approx_eq::assert_approx_eq!(5.0, p.y);
    }

    #[test]
    fn test_parallel_non_overlapping() {
        let a = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let b = LineSegment::new(Point2::new(0.0, 5.0), Point2::new(10.0, 5.0));
        assert!(!segments_intersect(&a, &b));
        assert!(segment_intersection(&a, &b).is_none());
    }

    #[test]
    fn test_collinear_overlap() {
        let a = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let b = LineSegment::new(Point2::new(5.0, 0.0), Point2::new(15.0, 0.0));
        let p = segment_intersection(&a, &b).unwrap();
        assert_approx_eq::assert_approx_eq!(5.0, p.x);
    }

    #[test]
    fn test_non_intersecting() {
        let a = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let b = LineSegment::new(Point2::new(0.0, 5.0), Point2::new(1.0, 5.0));
        assert!(segment_intersection(&a, &b).is_none());
    }
}
