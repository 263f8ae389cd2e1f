//! The deflection mover (layer L5): advances a moving shape along a
//! delta vector, sliding along obstacles it grazes, and recovering from
//! accidental penetration.
//!
//! Ported from `geom::Movable` (`Movable.hpp`/`Movable.cpp`):
//! `Mover::mv` is `Movable::move`, [`Mover::deflection`] is
//! `_move_deflection`, and [`Mover::recover`] is `_debug_collision`.

use cgmath::{EuclideanSpace, InnerSpace, Point2, Vector2};

use crate::constants::{COLLISION_BUFFER, COLLISION_DEBUG_MAX_ATTEMPTS, MAX_DEPTH, WEDGE_MOVE_THRESH};
use crate::math::{perp_cw, project, reflect};
use crate::primitives::{Collidable, ShapeRef};
use crate::sat::{self, CollisionResult};
use crate::Real;

/// How a [`Mover`] responds to a collision during [`Mover::mv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Collisions are ignored; the mover travels its full delta
    /// regardless of what it passes through.
    None,
    /// Slide along the contact tangent and keep moving for the
    /// remaining distance (the default; matches
    /// `CollisionType::DEFLECTION`).
    #[default]
    Deflection,
    /// Stop at the point of contact and invert the remaining travel
    /// direction.
    Reverse,
    /// Stop at the point of contact and mirror the remaining travel
    /// direction across the contact normal.
    Reflect,
}

/// A source of obstacles the mover can collide against.
pub trait ObstacleSource {
    /// Every obstacle that could plausibly be hit by `collider` (at
    /// `position`) travelling `delta`. A conservative superset (e.g. "all
    /// obstacles" or "everything in a broad-phase cell") is fine; the
    /// mover performs the exact test itself.
    fn candidates(&self, collider: ShapeRef<'_>, position: Point2<Real>, delta: Vector2<Real>) -> Vec<&dyn Collidable>;
}

/// Per-step state threaded through one call to [`Mover::mv`].
#[derive(Debug, Clone)]
pub struct CollisionInfo {
    /// Whether a collision was found during the most recent step.
    pub is_collision: bool,
    /// The delta's direction before any deflection, normalized.
    pub original_dir: Vector2<Real>,
    /// The direction the mover is currently travelling in, normalized.
    pub current_dir: Vector2<Real>,
    /// Distance left for the mover to travel.
    pub remaining_dist: Real,
    /// Distance the mover can move this step before a collision occurs.
    pub move_dist: Real,
    /// The mover's current position.
    pub current_position: Point2<Real>,
    /// The most recent collision normal (zero if there was none).
    pub normal: Vector2<Real>,
}

impl CollisionInfo {
    fn new(position: Point2<Real>, dir: Vector2<Real>, dist: Real) -> Self {
        CollisionInfo {
            is_collision: false,
            original_dir: dir,
            current_dir: dir,
            remaining_dist: dist,
            move_dist: 0.0,
            current_position: position,
            normal: Vector2::new(0.0, 0.0),
        }
    }
}

/// The buffer distance to stop short by when approaching a collision
/// normal head-on at `travel_dir`, so the mover never comes to rest
/// already touching (or past) the obstacle.
///
/// Ported from `Movable::getPushoutDistance`.
fn pushout_distance(travel_dir: Vector2<Real>, collision_normal: Vector2<Real>) -> Real {
    -(COLLISION_BUFFER / collision_normal.dot(travel_dir))
}

/// Drives one mover through a [`CollisionPolicy`] against an
/// [`ObstacleSource`].
pub struct Mover {
    policy: CollisionPolicy,
}

impl Mover {
    /// Create a mover with the given collision policy.
    pub fn new(policy: CollisionPolicy) -> Self {
        Mover { policy }
    }

    /// Move `collider` (currently at `origin`) along `delta`, resolving
    /// collisions against `obstacles` according to this mover's policy.
    /// Returns the final position.
    pub fn mv(&self, collider: ShapeRef<'_>, origin: Point2<Real>, delta: Vector2<Real>, obstacles: &dyn ObstacleSource) -> Point2<Real> {
        if delta.magnitude2() == 0.0 {
            return origin;
        }
        let original_dist = delta.magnitude();
        let mut info = CollisionInfo::new(origin, delta / original_dist, original_dist);

        match self.policy {
            CollisionPolicy::None => {
                info.current_position += delta;
            }
            CollisionPolicy::Deflection => self.deflection(collider, &mut info, obstacles),
            CollisionPolicy::Reverse => self.reverse(collider, &mut info, obstacles),
            CollisionPolicy::Reflect => self.reflect_policy(collider, &mut info, obstacles),
        }
        info.current_position
    }

    /// Find the nearest collision `collider` (at `info.current_position`,
    /// travelling `info.current_dir * info.remaining_dist`) would have
    /// against `obstacles`, writing the result into `info`.
    ///
    /// Ported from `Movable::_find_closest_collision`.
    fn find_closest_collision(&self, collider: ShapeRef<'_>, info: &mut CollisionInfo, obstacles: &dyn ObstacleSource) -> CollisionResult {
        let delta = info.current_dir * info.remaining_dist;
        let candidates = obstacles.candidates(collider, info.current_position, delta);
        info.is_collision = false;

        let mut interval: Real = 1.0;
        let mut best_normal = Vector2::new(0.0, 0.0);

        for obstacle in candidates {
            let result = sat::hybrid_sat(collider, info.current_position, delta, obstacle.shape(), obstacle.position());
            match result {
                CollisionResult::Sweep { normal, t } => {
                    info.is_collision = true;
                    if interval > t {
                        interval = t;
                        best_normal = normal;
                    }
                    if interval < crate::constants::EPSILON {
                        info.normal = best_normal;
                        info.move_dist = 0.0;
                        return CollisionResult::Sweep { normal: best_normal, t: interval };
                    }
                }
                CollisionResult::Mtv { normal, distance } => {
                    info.is_collision = true;
                    info.normal = normal;
                    info.move_dist = distance;
                    return CollisionResult::Mtv { normal, distance };
                }
                CollisionResult::None => {}
            }
        }

        if !info.is_collision {
            info.move_dist = info.remaining_dist;
            return CollisionResult::None;
        }
        info.normal = best_normal;
        info.move_dist = (info.remaining_dist * interval) - pushout_distance(info.current_dir, best_normal);
        if info.move_dist < 0.0 {
            info.move_dist = 0.0;
        }
        CollisionResult::Sweep { normal: best_normal, t: interval }
    }

    /// Default no-op hook run after each collision step, before the mover
    /// decides whether to keep going. A future extension point for
    /// callers who want to react to individual collisions; currently
    /// always continues the algorithm (matches `Movable::onCollision`'s
    /// base implementation).
    fn on_collision(&self, _info: &CollisionInfo) -> bool {
        true
    }

    /// Deflecting movement: slide along the contact tangent and keep
    /// moving for the remaining distance, detecting the "stuck in a
    /// wedge" oscillation case.
    ///
    /// Ported from `Movable::_move_deflection`.
    fn deflection(&self, collider: ShapeRef<'_>, info: &mut CollisionInfo, obstacles: &dyn ObstacleSource) {
        let mut depth = 0u32;
        let mut prev_angle: Real = 0.0;

        while depth < MAX_DEPTH {
            if matches!(self.find_closest_collision(collider, info, obstacles), CollisionResult::Mtv { .. }) {
                self.recover(collider, info, obstacles);
                return;
            }
            info.current_position += info.move_dist * info.current_dir;
            if !info.is_collision {
                return;
            }
            info.remaining_dist -= info.move_dist;
            if !self.on_collision(info) {
                return;
            }
            if info.remaining_dist < crate::constants::EPSILON || info.normal.magnitude2() == 0.0 {
                return;
            }

            let proj_dir = perp_cw(info.normal);
            let projection = project(info.original_dir, proj_dir, info.remaining_dist);
            info.remaining_dist = projection.magnitude();
            if info.remaining_dist < crate::constants::EPSILON {
                return;
            }
            info.current_dir = projection / info.remaining_dist;

            let mut curr_angle: Real = 0.0;
            if info.move_dist < WEDGE_MOVE_THRESH {
                let dot = info.original_dir.dot(info.current_dir);
                curr_angle = if crate::math::cross2(info.original_dir, info.current_dir) < 0.0 {
                    -dot
                } else {
                    dot
                };
                let stuck = if prev_angle < 0.0 {
                    prev_angle <= curr_angle
                } else {
                    prev_angle >= curr_angle
                };
                if prev_angle != 0.0 && stuck {
                    return;
                }
            }
            prev_angle = curr_angle;
            depth += 1;
        }
        log::warn!("mover reached the maximum deflection depth ({MAX_DEPTH}); stopping early");
    }

    /// Reversing movement: stop at the point of contact and invert the
    /// remaining travel direction (spec's resolution of the `Reverse`
    /// open question).
    fn reverse(&self, collider: ShapeRef<'_>, info: &mut CollisionInfo, obstacles: &dyn ObstacleSource) {
        if matches!(self.find_closest_collision(collider, info, obstacles), CollisionResult::Mtv { .. }) {
            self.recover(collider, info, obstacles);
            return;
        }
        info.current_position += info.move_dist * info.current_dir;
        if !info.is_collision {
            return;
        }
        info.remaining_dist -= info.move_dist;
        if !self.on_collision(info) || info.remaining_dist < crate::constants::EPSILON {
            return;
        }
        info.current_dir = -info.original_dir;
        info.current_position += info.remaining_dist * info.current_dir;
    }

    /// Reflecting movement: stop at the point of contact and mirror the
    /// remaining travel direction across the contact normal (spec's
    /// resolution of the `Reflect` open question).
    fn reflect_policy(&self, collider: ShapeRef<'_>, info: &mut CollisionInfo, obstacles: &dyn ObstacleSource) {
        if matches!(self.find_closest_collision(collider, info, obstacles), CollisionResult::Mtv { .. }) {
            self.recover(collider, info, obstacles);
            return;
        }
        info.current_position += info.move_dist * info.current_dir;
        if !info.is_collision {
            return;
        }
        info.remaining_dist -= info.move_dist;
        if !self.on_collision(info) || info.remaining_dist < crate::constants::EPSILON || info.normal.magnitude2() == 0.0 {
            return;
        }
        let reflected = reflect(info.original_dir, info.normal.normalize()) * info.remaining_dist;
        info.remaining_dist = reflected.magnitude();
        if info.remaining_dist < crate::constants::EPSILON {
            return;
        }
        info.current_dir = reflected / info.remaining_dist;
        info.current_position += info.remaining_dist * info.current_dir;
    }

    /// Push the mover out of an already-overlapping obstacle along its
    /// MTV normal, retrying up to [`COLLISION_DEBUG_MAX_ATTEMPTS`] times
    /// and bailing out (with a warning) if the position starts
    /// oscillating between obstacles.
    ///
    /// Ported from `Movable::_debug_collision`.
    fn recover(&self, collider: ShapeRef<'_>, info: &mut CollisionInfo, obstacles: &dyn ObstacleSource) {
        let mut positions = Vec::with_capacity(COLLISION_DEBUG_MAX_ATTEMPTS as usize + 1);
        positions.push(info.current_position);
        info.current_position += (info.move_dist + COLLISION_BUFFER) * info.normal;
        positions.push(info.current_position);

        for attempt in 1..COLLISION_DEBUG_MAX_ATTEMPTS {
            let candidates = obstacles.candidates(collider, info.current_position, Vector2::new(0.0, 0.0));
            info.is_collision = false;
            for obstacle in candidates {
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
                let pinned = Pinned {
                    pos: info.current_position,
                    shape: collider,
                };
                if let Some((normal, distance)) = sat::overlap_mtv(&pinned, obstacle) {
                    info.is_collision = true;
                    info.normal = normal;
                    info.move_dist = distance;
                    break;
                }
            }
            if !info.is_collision {
                log::debug!("MTV collision resolved in {attempt} attempts");
                return;
            }
            info.current_position += (info.move_dist + COLLISION_BUFFER) * info.normal;
            if positions.iter().any(|p| (*p - info.current_position).magnitude2() == 0.0) {
                log::error!("mover is oscillating between obstacles while recovering from an overlap");
                return;
            }
            positions.push(info.current_position);
        }
        log::warn!("mover used the maximum recovery attempts ({COLLISION_DEBUG_MAX_ATTEMPTS}); overlap may remain");
    }
}
