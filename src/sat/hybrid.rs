//! Swept ("hybrid") SAT: static overlap plus a continuous sweep test
//! along the interval `[0, 1]` of a moving shape's delta.
//!
//! Ported from `geom::sat::performHybridSAT`/`_perform_hybrid_SAT` in the
//! original source, with the same per-axis `overlap1`/`overlap2`/`speed`/
//! `enter_time`/`exit_time` bookkeeping.

use cgmath::{EuclideanSpace, InnerSpace, Point2, Vector2};

use super::{overlap_mtv, overlaps, separating_axes, CollisionResult};
use crate::constants::EPSILON;
use crate::intersect::ray_segment_intersection;
use crate::math::closest_point_on_segment_line;
use crate::primitives::{Circle, LineSegment, Polygon, Ray, ShapeRef};
use crate::Real;

const MAX_TIME: Real = 1.0;

/// Hybrid SAT between a moving `first` shape and a stationary `second`
/// shape.
///
/// `first_delta` is the first shape's full movement vector for this
/// test; to test two moving shapes against each other, pass
/// `first_delta - second_delta` (see [`hybrid_sat_relative`]) and treat
/// `second` as stationary, exactly as the original reduces a two-body
/// sweep to a one-body one.
pub fn hybrid_sat(
    first: ShapeRef<'_>,
    first_pos: Point2<Real>,
    first_delta: Vector2<Real>,
    second: ShapeRef<'_>,
    second_pos: Point2<Real>,
) -> CollisionResult {
    if first_delta.magnitude2() == 0.0 {
        struct Pinned<'a> {
            pos: Point2<Real>,
            shape: ShapeRef<'a>,
        }
        impl crate::Collidable for Pinned<'_> {
            fn position(&self) -> Point2<Real> {
                self.pos
            }
            fn shape(&self) -> ShapeRef<'_> {
                self.shape
            }
        }
        let a = Pinned { pos: first_pos, shape: first };
        let b = Pinned { pos: second_pos, shape: second };
        return match overlap_mtv(&a, &b) {
            Some((normal, distance)) => CollisionResult::Mtv { normal, distance },
            None => CollisionResult::None,
        };
    }

    if let ShapeRef::Circle(c1) = first {
        return match second {
            ShapeRef::Circle(c2) => circle_circle(c1, first_pos, first_delta, c2, second_pos),
            ShapeRef::Polygon(p) => circle_polygon(c1, first_pos, first_delta, p, second_pos),
            ShapeRef::Rect(r) => circle_polygon(c1, first_pos, first_delta, &r.to_polygon(), second_pos),
        };
    }
    if let ShapeRef::Circle(c2) = second {
        let result = match first {
            ShapeRef::Polygon(p) => circle_polygon(c2, second_pos, -first_delta, p, first_pos),
            ShapeRef::Rect(r) => circle_polygon(c2, second_pos, -first_delta, &r.to_polygon(), first_pos),
            ShapeRef::Circle(_) => unreachable!("circle-circle handled above"),
        };
        return match result {
            CollisionResult::Mtv { normal, distance } => CollisionResult::Mtv { normal: -normal, distance },
            CollisionResult::Sweep { normal, t } => CollisionResult::Sweep { normal: -normal, t },
            CollisionResult::None => CollisionResult::None,
        };
    }

    let offset = first_pos - second_pos;
    let axes = separating_axes(first, offset, second);
    perform_hybrid_sat(first, first_pos, second, second_pos, &axes, first_delta)
}

/// Hybrid SAT between two moving shapes, reduced to the standard
/// one-moving/one-stationary test via relative velocity.
pub fn hybrid_sat_relative(
    first: ShapeRef<'_>,
    first_pos: Point2<Real>,
    first_delta: Vector2<Real>,
    second: ShapeRef<'_>,
    second_pos: Point2<Real>,
    second_delta: Vector2<Real>,
) -> CollisionResult {
    hybrid_sat(first, first_pos, first_delta - second_delta, second, second_pos)
}

fn perform_hybrid_sat(
    first: ShapeRef<'_>,
    first_pos: Point2<Real>,
    second: ShapeRef<'_>,
    second_pos: Point2<Real>,
    axes: &[Vector2<Real>],
    relative_vel: Vector2<Real>,
) -> CollisionResult {
    let mut currently_overlapping = true;
    let mut mtv_dist: Option<Real> = None;
    let mut mtv_norm = Vector2::new(0.0, 0.0);
    let mut enter_time: Real = -1.0;
    let mut exit_time: Real = MAX_TIME;
    let mut sweep_norm = Vector2::new(0.0, 0.0);

    for &axis in axes {
        let proj_first = first.projection(first_pos, axis);
        let proj_second = second.projection(second_pos, axis);
        let overlap1 = proj_first.max - proj_second.min - EPSILON;
        let overlap2 = proj_second.max - proj_first.min - EPSILON;
        let speed = relative_vel.dot(axis);

        if overlap1 < 0.0 || overlap2 < 0.0 {
            currently_overlapping = false;
            if speed == 0.0 {
                return CollisionResult::None;
            }
            let (test_enter, test_exit) = if overlap1 < 0.0 {
                (-overlap1 / speed, overlap2 / speed)
            } else {
                (overlap2 / speed, -overlap1 / speed)
            };
            if test_enter < 0.0 {
                return CollisionResult::None;
            }
            if test_enter > enter_time {
                enter_time = test_enter;
                sweep_norm = if proj_first.min < proj_second.min { -axis } else { axis };
            }
            if test_exit < exit_time {
                exit_time = test_exit;
            }
            if enter_time > MAX_TIME || enter_time > exit_time {
                return CollisionResult::None;
            }
        } else {
            if speed != 0.0 {
                let test_exit = if speed < 0.0 { -overlap1 } else { overlap2 } / speed;
                if test_exit < exit_time {
                    exit_time = test_exit;
                }
                if enter_time > exit_time {
                    return CollisionResult::None;
                }
            }
            if currently_overlapping {
                let test_dist = (if proj_first.min < proj_second.min { overlap1 } else { overlap2 }) + EPSILON;
                if mtv_dist.map_or(true, |d| test_dist < d) {
                    mtv_dist = Some(test_dist);
                    mtv_norm = if proj_first.min < proj_second.min { -axis } else { axis };
                }
            }
        }
    }

    if currently_overlapping {
        CollisionResult::Mtv {
            normal: mtv_norm,
            distance: mtv_dist.unwrap_or(0.0),
        }
    } else {
        CollisionResult::Sweep {
            normal: sweep_norm,
            t: enter_time,
        }
    }
}

/// Circle-vs-circle specialization.
///
/// Ported from `_circle_circle_hybrid_SAT`: if the circles already
/// overlap, the MTV is along the center-to-center axis; otherwise find
/// the closest approach of the second circle's center to the first
/// circle's travel line, and solve the right triangle formed by the sum
/// of radii (the hypotenuse) to find when the circles first touch.
pub fn circle_circle(first: &Circle, first_pos: Point2<Real>, delta: Vector2<Real>, second: &Circle, second_pos: Point2<Real>) -> CollisionResult {
    let separation = first_pos - second_pos;
    let dist2 = separation.magnitude2();
    let full_rad = first.radius + second.radius - EPSILON;
    let full_rad2 = full_rad * full_rad;

    if dist2 <= full_rad2 {
        let dist = dist2.sqrt();
        let normal = if dist == 0.0 { Vector2::new(0.0, 1.0) } else { separation / dist };
        return CollisionResult::Mtv {
            normal,
            distance: first.radius + second.radius - dist,
        };
    }

    let closest = closest_point_on_segment_line(first_pos, first_pos + delta, second_pos);
    let closest_dist2 = (second_pos - closest).magnitude2();
    if closest_dist2 >= full_rad2 {
        return CollisionResult::None;
    }

    let dist_from_closest_to_collision = (full_rad2 - closest_dist2).sqrt();
    let delta_len2 = delta.magnitude2();
    let delta_len = delta_len2.sqrt();
    let delta_dir = delta / delta_len;
    let collision_point = closest - delta_dir * dist_from_closest_to_collision;
    let dist_from_first2 = (collision_point - first_pos).magnitude2();
    if dist_from_first2 > delta_len2 {
        return CollisionResult::None;
    }
    CollisionResult::Sweep {
        normal: (collision_point - second_pos).normalize(),
        t: dist_from_first2.sqrt() / delta_len,
    }
}

/// Circle-vs-polygon specialization.
///
/// The polygon is fixed; the circle sweeps along `delta`. This first
/// rules out (or resolves) the already-overlapping case with the
/// ordinary static-SAT machinery, then, for the swept case, checks the
/// circle's approach against every edge in the polygon's arc facing the
/// circle (found the same way `Polygon::find_extend_range` finds the
/// acute-normal arc for extending a swept hull). Each edge is tested as
/// a flat span first: offset outward by the circle's radius along the
/// edge's normal and intersected against the travel ray, which catches
/// the circle running flush into the face of an edge. Only when that
/// offset span misses (the contact would land past one of the edge's
/// endpoints) does the edge fall back to the endpoint-wise
/// closest-point-then-right-triangle solve also used by [`circle_circle`],
/// treating each endpoint as a zero-radius "circle swept along a line".
pub fn circle_polygon(circle: &Circle, circle_pos: Point2<Real>, delta: Vector2<Real>, poly: &Polygon, poly_pos: Point2<Real>) -> CollisionResult {
    struct Pinned<'a> {
        pos: Point2<Real>,
        shape: ShapeRef<'a>,
    }
    impl crate::Collidable for Pinned<'_> {
        fn position(&self) -> Point2<Real> {
            self.pos
        }
        fn shape(&self) -> ShapeRef<'_> {
            self.shape
        }
    }
    let circle_shape = ShapeRef::Circle(circle);
    let poly_shape = ShapeRef::Polygon(poly);
    let a = Pinned { pos: circle_pos, shape: circle_shape };
    let b = Pinned { pos: poly_pos, shape: poly_shape };
    if overlaps(&a, &b) {
        return match overlap_mtv(&a, &b) {
            Some((normal, distance)) => CollisionResult::Mtv { normal, distance },
            None => CollisionResult::None,
        };
    }

    // Direction the circle is approaching from, used to find the arc of
    // polygon vertices it could plausibly hit first.
    let approach_dir = -delta;
    let facing = match poly.vertices_facing(if approach_dir.magnitude2() != 0.0 { approach_dir } else { Vector2::new(0.0, -1.0) }) {
        Ok(range) => range,
        Err(_) => (0, poly.vertices().len() - 1),
    };

    let verts = poly.vertices();
    let n = verts.len();
    let mut candidate_edges: Vec<usize> = Vec::new();
    let in_range = |i: usize| -> bool {
        if facing.0 <= facing.1 {
            i >= facing.0 && i <= facing.1
        } else {
            i >= facing.0 || i <= facing.1
        }
    };
    for i in 0..n {
        if in_range(i) {
            candidate_edges.push(i);
        }
    }
    if candidate_edges.is_empty() {
        candidate_edges.extend(0..n);
    }

    let mut best: Option<(Real, Vector2<Real>)> = None;
    let delta_len2 = delta.magnitude2();
    let delta_len = delta_len2.sqrt();
    let delta_dir = delta / delta_len;
    let full_rad = circle.radius - EPSILON;
    let full_rad2 = full_rad.max(0.0) * full_rad.max(0.0);
    let normals = poly.edge_normals();
    let travel_ray = Ray::new(circle_pos, delta);

    for &i in &candidate_edges {
        let a_world = verts[i] + poly_pos.to_vec();
        let b_world = verts[(i + 1) % n] + poly_pos.to_vec();
        let edge_normal = normals[i];
        let offset = edge_normal * circle.radius;
        let offset_edge = LineSegment::new(a_world + offset, b_world + offset);

        if let Some(point) = ray_segment_intersection(&travel_ray, &offset_edge) {
            let t = (point - circle_pos).dot(delta) / delta_len2;
            if (0.0..=1.0).contains(&t) {
                if best.map_or(true, |(best_t, _)| t < best_t) {
                    best = Some((t, edge_normal));
                }
                continue;
            }
        }

        for endpoint in [a_world, b_world] {
            let closest = closest_point_on_segment_line(circle_pos, circle_pos + delta, endpoint);
            let closest_dist2 = (endpoint - closest).magnitude2();
            if closest_dist2 >= full_rad2 {
                continue;
            }
            let dist_from_closest = (full_rad2 - closest_dist2).sqrt();
            let collision_point = closest - delta_dir * dist_from_closest;
            let dist_from_circle2 = (collision_point - circle_pos).magnitude2();
            if dist_from_circle2 > delta_len2 {
                continue;
            }
            let t = dist_from_circle2.sqrt() / delta_len;
            let normal = (collision_point - endpoint).normalize();
            if best.map_or(true, |(best_t, _)| t < best_t) {
                best = Some((t, normal));
            }
        }
    }

    match best {
        Some((t, normal)) => CollisionResult::Sweep { normal, t },
        None => CollisionResult::None,
    }
}
