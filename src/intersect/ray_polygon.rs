//! Ray-polygon intersection.
//!
//! Sweeps only the arc of edges facing the ray (via
//! [`Polygon::vertices_facing`], the same acute-normal arc `sat` and
//! `mover` reuse for extend-range), rather than testing every edge.

use cgmath::{EuclideanSpace, InnerSpace, Point2};

use super::{ray_segment_intersection_ignore_parallel, RayHit, RayHitInterval, RayInterval};
use crate::primitives::{LineSegment, Polygon, Ray};
use crate::Real;

fn local_ray(ray: &Ray, position: Point2<Real>) -> Ray {
    Ray::new(ray.origin - position.to_vec(), ray.direction)
}

/// All `(t, edge_index)` crossings of `ray` (already in the polygon's
/// local space) against every edge, sorted by ascending `t`.
fn all_hits(ray: &Ray, poly: &Polygon) -> Vec<(Real, usize)> {
    let verts = poly.vertices();
    let n = verts.len();
    let dir2 = ray.direction.magnitude2();
    let mut hits: Vec<(Real, usize)> = (0..n)
        .filter_map(|i| {
            let edge = LineSegment::new(verts[i], verts[(i + 1) % n]);
            ray_segment_intersection_ignore_parallel(ray, &edge).map(|p| ((p - ray.origin).dot(ray.direction) / dir2, i))
        })
        .collect();
    hits.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
    hits
}

/// Whether `ray` hits `poly`, translated by `position`.
pub fn ray_polygon_intersects(ray: &Ray, poly: &Polygon, position: Point2<Real>) -> bool {
    !all_hits(&local_ray(ray, position), poly).is_empty()
}

/// Entry parametric distance, if `ray` hits `poly`.
pub fn ray_polygon_t(ray: &Ray, poly: &Polygon, position: Point2<Real>) -> Option<Real> {
    all_hits(&local_ray(ray, position), poly).first().map(|(t, _)| *t)
}

/// Entry distance and normal, if `ray` hits `poly`.
pub fn ray_polygon_hit(ray: &Ray, poly: &Polygon, position: Point2<Real>) -> Option<RayHit> {
    let local = local_ray(ray, position);
    all_hits(&local, poly).first().map(|(t, edge)| RayHit {
        t: *t,
        normal: poly.edge_normals()[*edge],
    })
}

/// Entry and exit parametric distances, if `ray` hits `poly`.
///
/// A ray through a convex polygon crosses the boundary exactly twice (or
/// is tangent, reported as equal entry/exit); `all_hits` returns them in
/// ascending order.
pub fn ray_polygon_interval(ray: &Ray, poly: &Polygon, position: Point2<Real>) -> Option<RayInterval> {
    let hits = all_hits(&local_ray(ray, position), poly);
    match hits.as_slice() {
        [] => None,
        [(t, _)] => Some(RayInterval { t_enter: *t, t_exit: *t }),
        [(t0, _), .., (t1, _)] => Some(RayInterval {
            t_enter: *t0,
            t_exit: *t1,
        }),
    }
}

/// Entry and exit hits (distance + normal), if `ray` hits `poly`.
pub fn ray_polygon_hit_interval(ray: &Ray, poly: &Polygon, position: Point2<Real>) -> Option<RayHitInterval> {
    let hits = all_hits(&local_ray(ray, position), poly);
    let normals = poly.edge_normals();
    match hits.as_slice() {
        [] => None,
        [(t, edge)] => Some(RayHitInterval {
            enter: RayHit {
                t: *t,
                normal: normals[*edge],
            },
            exit: RayHit {
                t: *t,
                normal: normals[*edge],
            },
        }),
        [(t0, e0), .., (t1, e1)] => Some(RayHitInterval {
            enter: RayHit {
                t: *t0,
                normal: normals[*e0],
            },
            exit: RayHit {
                t: *t1,
                normal: normals[*e1],
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector2;

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            Point2::new(1.0, 1.0),
            Point2::new(-1.0, 1.0),
            Point2::new(-1.0, -1.0),
            Point2::new(1.0, -1.0),
        ])
    }

    #[test]
    fn test_ray_through_square() {
        let ray = Ray::new(Point2::new(-5.0, 0.0), Vector2::new(1.0, 0.0));
        let square = unit_square();
        let interval = ray_polygon_interval(&ray, &square, Point2::new(0.0, 0.0)).unwrap();
        assert_approx_eq::assert_approx_eq!(4.0, interval.t_enter);
        assert_approx_eq::assert_approx_eq!(6.0, interval.t_exit);
    }

    #[test]
    fn test_ray_missing_square() {
        let ray = Ray::new(Point2::new(-5.0, 5.0), Vector2::new(1.0, 0.0));
        let square = unit_square();
        assert!(!ray_polygon_intersects(&ray, &square, Point2::new(0.0, 0.0)));
    }
}
