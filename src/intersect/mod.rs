//! Primitive intersection tests (layer L3): point-in-shape and the
//! ray/shape intersection suite.
//!
//! Every ray query comes in up to five arities, matching how much of the
//! answer a caller actually needs (spec'd this way so a caller doing
//! bulk visibility queries can skip normal computation entirely):
//!
//! - `*_intersects` — boolean only.
//! - `*_t` — entry parametric distance only.
//! - `*_hit` — entry distance plus surface normal ([`RayHit`]).
//! - `*_interval` — entry and exit parametric distances.
//! - `*_hit_interval` — entry and exit, each with its own normal.

pub mod point;
pub mod ray_circle;
pub mod ray_polygon;
pub mod ray_rect;
pub mod ray_segment;
pub mod segment;

pub use point::{point_in_polygon, point_in_rect, point_on_ray, point_on_segment};
pub use ray_segment::{ray_segment_intersection, ray_segment_intersection_ignore_parallel};
pub use segment::{segment_intersection, segments_intersect};

use cgmath::{Point2, Vector2};

use crate::primitives::ShapeRef;
use crate::Real;

/// A ray-shape intersection: the parametric distance along the ray and
/// the outward surface normal at that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Parametric distance along the ray's direction (not normalized to
    /// `[0, 1]`; the ray's `direction` sets the scale).
    pub t: Real,
    /// Outward-facing unit normal of the surface at the hit point.
    pub normal: Vector2<Real>,
}

/// The entry and exit points of a ray through a shape, as parametric
/// distances only (no normals).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayInterval {
    /// Parametric distance at which the ray enters the shape.
    pub t_enter: Real,
    /// Parametric distance at which the ray exits the shape.
    pub t_exit: Real,
}

/// The entry and exit points of a ray through a shape, each with its own
/// surface normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHitInterval {
    /// Where the ray enters the shape.
    pub enter: RayHit,
    /// Where the ray exits the shape.
    pub exit: RayHit,
}

/// Whether `point` lies on or inside `shape`, translated by `position`.
pub fn point_in_shape(shape: ShapeRef<'_>, position: Point2<Real>, point: Point2<Real>) -> bool {
    match shape {
        ShapeRef::Rect(r) => point_in_rect(r, position, point),
        ShapeRef::Polygon(p) => point_in_polygon(p, position, point),
        ShapeRef::Circle(c) => (point - position).x.hypot((point - position).y) <= c.radius,
    }
}

/// Whether `ray` intersects `shape`, translated by `position`.
pub fn ray_intersects(ray: &crate::primitives::Ray, shape: ShapeRef<'_>, position: Point2<Real>) -> bool {
    match shape {
        ShapeRef::Rect(r) => ray_rect::ray_rect_intersects(ray, r, position),
        ShapeRef::Polygon(p) => ray_polygon::ray_polygon_intersects(ray, p, position),
        ShapeRef::Circle(c) => ray_circle::ray_circle_intersects(ray, c, position),
    }
}

/// Nearest [`RayHit`] of `ray` against `shape`, translated by `position`.
pub fn ray_hit(ray: &crate::primitives::Ray, shape: ShapeRef<'_>, position: Point2<Real>) -> Option<RayHit> {
    match shape {
        ShapeRef::Rect(r) => ray_rect::ray_rect_hit(ray, r, position),
        ShapeRef::Polygon(p) => ray_polygon::ray_polygon_hit(ray, p, position),
        ShapeRef::Circle(c) => ray_circle::ray_circle_hit(ray, c, position),
    }
}
