//! Ray-circle intersection, via the quadratic discriminant solve.

use cgmath::{EuclideanSpace, InnerSpace, Point2};

use super::{RayHit, RayHitInterval, RayInterval};
use crate::primitives::{Circle, Ray};
use crate::Real;

struct Roots {
    t_enter: Real,
    t_exit: Real,
}

fn solve(ray: &Ray, circle: &Circle, position: Point2<Real>) -> Option<Roots> {
    let to_origin = ray.origin - position;
    let a = ray.direction.magnitude2();
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * to_origin.dot(ray.direction);
    let c = to_origin.magnitude2() - circle.radius * circle.radius;
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let t0 = (-b - sqrt_d) / (2.0 * a);
    let t1 = (-b + sqrt_d) / (2.0 * a);
    if t1 < 0.0 {
        return None; // Circle is entirely behind the ray's origin.
    }
    Some(Roots { t_enter: t0, t_exit: t1 })
}

fn normal_at(ray: &Ray, _circle: &Circle, position: Point2<Real>, t: Real) -> cgmath::Vector2<Real> {
    let point = ray.origin + ray.direction * t;
    (point - position).normalize()
}

/// Whether `ray` hits `circle`.
pub fn ray_circle_intersects(ray: &Ray, circle: &Circle, position: Point2<Real>) -> bool {
    solve(ray, circle, position).is_some()
}

/// Entry parametric distance, if `ray` hits `circle`.
pub fn ray_circle_t(ray: &Ray, circle: &Circle, position: Point2<Real>) -> Option<Real> {
    solve(ray, circle, position).map(|r| r.t_enter.max(0.0))
}

/// Entry distance and normal, if `ray` hits `circle`.
pub fn ray_circle_hit(ray: &Ray, circle: &Circle, position: Point2<Real>) -> Option<RayHit> {
    solve(ray, circle, position).map(|r| {
        let t = r.t_enter.max(0.0);
        RayHit {
            t,
            normal: normal_at(ray, circle, position, t),
        }
    })
}

/// Entry and exit parametric distances, if `ray` hits `circle`.
pub fn ray_circle_interval(ray: &Ray, circle: &Circle, position: Point2<Real>) -> Option<RayInterval> {
    solve(ray, circle, position).map(|r| RayInterval {
        t_enter: r.t_enter.max(0.0),
        t_exit: r.t_exit,
    })
}

/// Entry and exit hits (distance + normal), if `ray` hits `circle`.
pub fn ray_circle_hit_interval(ray: &Ray, circle: &Circle, position: Point2<Real>) -> Option<RayHitInterval> {
    solve(ray, circle, position).map(|r| RayHitInterval {
        enter: RayHit {
            t: r.t_enter.max(0.0),
            normal: normal_at(ray, circle, position, r.t_enter.max(0.0)),
        },
        exit: RayHit {
            t: r.t_exit,
            normal: normal_at(ray, circle, position, r.t_exit),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector2;

    #[test]
    fn test_ray_through_circle_center() {
        let ray = Ray::new(Point2::new(-10.0, 0.0), Vector2::new(1.0, 0.0));
        let circle = Circle::new(2.0);
        let interval = ray_circle_interval(&ray, &circle, Point2::new(0.0, 0.0)).unwrap();
        assert_approx_eq::assert_approx_eq!(8.0, interval.t_enter);
        assert_approx_eq::assert_approx_eq!(12.0, interval.t_exit);
    }

    #[test]
    fn test_ray_missing_circle() {
        let ray = Ray::new(Point2::new(-10.0, 10.0), Vector2::new(1.0, 0.0));
        let circle = Circle::new(2.0);
        assert!(!ray_circle_intersects(&ray, &circle, Point2::new(0.0, 0.0)));
    }

    #[test]
    fn test_hit_normal_points_outward() {
        let ray = Ray::new(Point2::new(-10.0, 0.0), Vector2::new(1.0, 0.0));
        let circle = Circle::new(2.0);
        let hit = ray_circle_hit(&ray, &circle, Point2::new(0.0, 0.0)).unwrap();
        assert_approx_eq::assert_approx_eq!(-1.0, hit.normal.x);
    }
}
