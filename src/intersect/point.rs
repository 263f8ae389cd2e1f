//! Point-in-shape tests.

use cgmath::{EuclideanSpace, InnerSpace, Point2};

use crate::constants::EPSILON;
use crate::primitives::{LineSegment, Ray, Rect};
use crate::Real;

/// Whether `p` is inside or on the boundary of `r`, translated by
/// `position`.
pub fn point_in_rect(r: &Rect, position: Point2<Real>, p: Point2<Real>) -> bool {
    p.x >= r.left() + position.x - EPSILON
        && p.x <= r.right() + position.x + EPSILON
        && p.y >= r.top() + position.y - EPSILON
        && p.y <= r.bottom() + position.y + EPSILON
}

/// Whether `p` lies on the (finite) segment `l`.
///
/// Ported from the bounding-box-then-line-equation test in the original
/// `IntersectionMath::intersects(LineSegment, Coordinate2D)`.
pub fn point_on_segment(l: &LineSegment, p: Point2<Real>) -> bool {
    let min_x = l.a.x.min(l.b.x);
    let max_x = l.a.x.max(l.b.x);
    let min_y = l.a.y.min(l.b.y);
    let max_y = l.a.y.max(l.b.y);
    if p.x + EPSILON < min_x || p.x - EPSILON > max_x || p.y + EPSILON < min_y || p.y - EPSILON > max_y {
        return false;
    }
    let denom = l.b.x - l.a.x;
    if denom.abs() < EPSILON {
        return true; // Vertical segment; bounding box check already passed.
    }
    let numer = l.b.y - l.a.y;
    if numer.abs() < EPSILON {
        return true; // Horizontal segment; bounding box check already passed.
    }
    let slope = numer / denom;
    let intercept = l.a.y - slope * l.a.x;
    (slope * p.x + intercept - p.y).abs() < EPSILON
}

/// Whether `p` lies on `r` (forward of the origin, along the ray's
/// direction).
///
/// Ported from `IntersectionMath::intersects(Ray, Coordinate2D)`.
pub fn point_on_ray(r: &Ray, p: Point2<Real>) -> bool {
    let forward_y = if r.direction.y >= 0.0 {
        p.y + EPSILON >= r.origin.y
    } else {
        p.y - EPSILON <= r.origin.y
    };
    let forward_x = if r.direction.x >= 0.0 {
        p.x + EPSILON >= r.origin.x
    } else {
        p.x - EPSILON <= r.origin.x
    };
    if !forward_x || !forward_y {
        return false;
    }
    if r.direction.x.abs() < EPSILON {
        return (p.x - r.origin.x).abs() < EPSILON
            && if r.direction.y > 0.0 {
                p.y >= r.origin.y
            } else {
                p.y <= r.origin.y
            };
    }
    if r.direction.y.abs() < EPSILON {
        return (p.y - r.origin.y).abs() < EPSILON
            && if r.direction.x > 0.0 {
                p.x >= r.origin.x
            } else {
                p.x <= r.origin.x
            };
    }
    let slope = r.direction.y / r.direction.x;
    let intercept = r.origin.y - slope * r.origin.x;
    (slope * p.x + intercept - p.y).abs() < EPSILON
}

/// Whether `p` is inside or on the boundary of `poly`, translated by
/// `position`, via the standard signed-crossing-number test.
pub fn point_in_polygon(poly: &crate::primitives::Polygon, position: Point2<Real>, p: Point2<Real>) -> bool {
    let verts = poly.vertices();
    let n = verts.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = verts[i] + position.to_vec();
        let vj = verts[j] + position.to_vec();
        if point_on_segment(&LineSegment::new(vi, vj), p) {
            return true;
        }
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_at_y = vi.x + (p.y - vi.y) * (vj.x - vi.x) / (vj.y - vi.y);
            if p.x < x_at_y {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector2;

    #[test]
    fn test_point_in_rect() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(point_in_rect(&r, Point2::new(0.0, 0.0), Point2::new(5.0, 5.0)));
        assert!(!point_in_rect(&r, Point2::new(0.0, 0.0), Point2::new(20.0, 5.0)));
    }

    #[test]
    fn test_point_on_segment() {
        let l = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        assert!(point_on_segment(&l, Point2::new(5.0, 5.0)));
        assert!(!point_on_segment(&l, Point2::new(5.0, 6.0)));
    }

    #[test]
    fn test_point_on_ray() {
        let r = Ray::new(Point2::new(0.0, 0.0), Vector2::new(1.0, 1.0));
        assert!(point_on_ray(&r, Point2::new(5.0, 5.0)));
        assert!(!point_on_ray(&r, Point2::new(-5.0, -5.0)));
    }

    #[test]
    fn test_point_in_polygon() {
        let square = crate::primitives::Polygon::new(vec![
            Point2::new(1.0, 1.0),
            Point2::new(-1.0, 1.0),
            Point2::new(-1.0, -1.0),
            Point2::new(1.0, -1.0),
        ]);
        assert!(point_in_polygon(&square, Point2::new(0.0, 0.0), Point2::new(0.0, 0.0)));
        assert!(!point_in_polygon(&square, Point2::new(0.0, 0.0), Point2::new(5.0, 5.0)));
    }
}
