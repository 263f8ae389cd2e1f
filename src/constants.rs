//! Tuning constants shared across the core.
//!
//! These are the authoritative values from the original source's
//! `constants.h`/`Movable.hpp` static consts; every algorithm in this
//! crate that needs a tolerance or a loop bound reads one of these instead
//! of hard-coding its own.

use crate::Real;

/// Universal tolerance for near-zero and near-equal comparisons.
///
/// Used for projection-overlap comparisons in SAT, "almost zero"
/// cross-product tests for parallelism, ray-bound tests, and the mover's
/// remaining-distance termination check.
pub const EPSILON: Real = 1e-6;

/// Per-contact retreat kept along the collision normal so a mover never
/// ends a step exactly touching (and thus one rounding error away from
/// penetrating) an obstacle.
pub const COLLISION_BUFFER: Real = 1e-3;

/// Minimum per-iteration advance below which the deflection loop starts
/// checking for wedge lock-in.
pub const WEDGE_MOVE_THRESH: Real = 1e-4;

/// Maximum number of iterations the deflection loop will run before
/// giving up and returning wherever it got to.
pub const MAX_DEPTH: u32 = 25;

/// Maximum number of pushout attempts in the MTV recovery loop.
pub const COLLISION_DEBUG_MAX_ATTEMPTS: u32 = 3;

/// Default number of segments used to approximate a circle as a polygon.
pub const CIRCLE_SEGMENTS: usize = 20;
