//! Ray-rectangle intersection, via the slab method.

use cgmath::{Point2, Vector2};

use super::{RayHit, RayHitInterval, RayInterval};
use crate::primitives::{Ray, Rect};
use crate::Real;

/// Entry/exit parametric distances and the axis each slab crossing
/// happened on, used internally to derive normals.
struct Slabs {
    t_enter: Real,
    t_exit: Real,
    enter_axis: Axis,
    exit_axis: Axis,
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

fn slab_test(ray: &Ray, rect: &Rect, position: Point2<Real>) -> Option<Slabs> {
    let min = Point2::new(rect.left() + position.x, rect.top() + position.y);
    let max = Point2::new(rect.right() + position.x, rect.bottom() + position.y);

    let (mut t_enter, mut t_exit) = (Real::NEG_INFINITY, Real::INFINITY);
    let (mut enter_axis, mut exit_axis) = (Axis::X, Axis::X);

    for axis in [Axis::X, Axis::Y] {
        let (origin, dir, lo, hi) = match axis {
            Axis::X => (ray.origin.x, ray.direction.x, min.x, max.x),
            Axis::Y => (ray.origin.y, ray.direction.y, min.y, max.y),
        };
        if dir.abs() < crate::constants::EPSILON {
            if origin < lo || origin > hi {
                return None; // Parallel to this slab and outside it.
            }
            continue;
        }
        let inv_dir = 1.0 / dir;
        let mut t0 = (lo - origin) * inv_dir;
        let mut t1 = (hi - origin) * inv_dir;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        if t0 > t_enter {
            t_enter = t0;
            enter_axis = axis;
        }
        if t1 < t_exit {
            t_exit = t1;
            exit_axis = axis;
        }
        if t_enter > t_exit {
            return None;
        }
    }
    if t_exit < 0.0 {
        return None; // Rect is entirely behind the ray's origin.
    }
    Some(Slabs {
        t_enter,
        t_exit,
        enter_axis,
        exit_axis,
    })
}

fn axis_normal(axis: Axis, dir: Real) -> Vector2<Real> {
    match axis {
        Axis::X => Vector2::new(if dir > 0.0 { -1.0 } else { 1.0 }, 0.0),
        Axis::Y => Vector2::new(0.0, if dir > 0.0 { -1.0 } else { 1.0 }),
    }
}

/// Whether `ray` hits `rect`.
pub fn ray_rect_intersects(ray: &Ray, rect: &Rect, position: Point2<Real>) -> bool {
    slab_test(ray, rect, position).is_some()
}

/// Entry parametric distance, if `ray` hits `rect`.
pub fn ray_rect_t(ray: &Ray, rect: &Rect, position: Point2<Real>) -> Option<Real> {
    slab_test(ray, rect, position).map(|s| s.t_enter.max(0.0))
}

/// Entry distance and normal, if `ray` hits `rect`.
pub fn ray_rect_hit(ray: &Ray, rect: &Rect, position: Point2<Real>) -> Option<RayHit> {
    slab_test(ray, rect, position).map(|s| {
        let t = s.t_enter.max(0.0);
        let normal = if s.t_enter < 0.0 {
            // Ray starts inside the rect; report the exit-facing axis reversed.
            -axis_normal(
                s.exit_axis,
                match s.exit_axis {
                    Axis::X => ray.direction.x,
                    Axis::Y => ray.direction.y,
                },
            )
        } else {
            axis_normal(
                s.enter_axis,
                match s.enter_axis {
                    Axis::X => ray.direction.x,
                    Axis::Y => ray.direction.y,
                },
            )
        };
        RayHit { t, normal }
    })
}

/// Entry and exit parametric distances, if `ray` hits `rect`.
pub fn ray_rect_interval(ray: &Ray, rect: &Rect, position: Point2<Real>) -> Option<RayInterval> {
    slab_test(ray, rect, position).map(|s| RayInterval {
        t_enter: s.t_enter.max(0.0),
        t_exit: s.t_exit,
    })
}

/// Entry and exit hits (distance + normal), if `ray` hits `rect`.
pub fn ray_rect_hit_interval(ray: &Ray, rect: &Rect, position: Point2<Real>) -> Option<RayHitInterval> {
    slab_test(ray, rect, position).map(|s| RayHitInterval {
        enter: RayHit {
            t: s.t_enter.max(0.0),
            normal: axis_normal(
                s.enter_axis,
                match s.enter_axis {
                    Axis::X => ray.direction.x,
                    Axis::Y => ray.direction.y,
                },
            ),
        },
        exit: RayHit {
            t: s.t_exit,
            normal: -axis_normal(
                s.exit_axis,
                match s.exit_axis {
                    Axis::X => ray.direction.x,
                    Axis::Y => ray.direction.y,
                },
            ),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_through_rect_center() {
        let ray = Ray::new(Point2::new(-10.0, 0.0), Vector2::new(1.0, 0.0));
        let rect = Rect::new(-1.0, -1.0, 2.0, 2.0);
        let hit = ray_rect_hit(&ray, &rect, Point2::new(0.0, 0.0)).unwrap();
        assert_approx_eq::assert_approx_eq!(9.0, hit.t);
        assert_approx_eq::assert_approx_eq!(-1.0, hit.normal.x);
    }

    #[test]
    fn test_ray_missing_rect() {
        let ray = Ray::new(Point2::new(-10.0, 10.0), Vector2::new(1.0, 0.0));
        let rect = Rect::new(-1.0, -1.0, 2.0, 2.0);
        assert!(!ray_rect_intersects(&ray, &rect, Point2::new(0.0, 0.0)));
    }

    #[test]
    fn test_ray_interval_through_rect() {
        let ray = Ray::new(Point2::new(-10.0, 0.0), Vector2::new(1.0, 0.0));
        let rect = Rect::new(-1.0, -1.0, 2.0, 2.0);
        let interval = ray_rect_interval(&ray, &rect, Point2::new(0.0, 0.0)).unwrap();
        assert_approx_eq::assert_approx_eq!(9.0, interval.t_enter);
        assert_approx_eq::assert_approx_eq!(11.0, interval.t_exit);
    }
}
