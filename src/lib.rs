//! # swept2d
//!
//! A continuous (swept) 2D collision detection and response core: a
//! hybrid Separating Axis Theorem engine that answers both "are these
//! overlapping right now" and "will this moving shape hit that one before
//! it finishes its step", a ray/shape intersection suite, and a
//! deflection mover built on top of both.
//!
//! The crate is layered bottom-up:
//!
//! * [`math`] — scalar/vector helpers built on `cgmath`.
//! * [`primitives`] — [`Rect`](primitives::Rect), [`Polygon`](primitives::Polygon),
//!   [`Circle`](primitives::Circle), and the [`Collidable`] shape-handle split.
//! * [`intersect`] — point-in-shape and the ray/segment intersection suite.
//! * [`sat`] — static overlap, minimum translation vector, and the swept
//!   hybrid SAT test ([`sat::hybrid_sat`]).
//! * [`mover`] — [`mover::Mover`], which advances a shape along a delta
//!   vector using one of several [`mover::CollisionPolicy`]s.
//!
//! Uses [`cgmath`](https://github.com/rustgd/cgmath) for all vector math.
//! Single precision (`f32`) is used by default; enable the `double`
//! feature to switch [`Real`] to `f64`.
//!
//! # Examples
//!
//! ```rust
//! use cgmath::{Point2, Vector2};
//! use swept2d::primitives::{Circle, OwnedShape, Rect};
//! use swept2d::sat::{hybrid_sat, CollisionResult};
//!
//! let wall: OwnedShape = Rect::new(0.0, 0.0, 10.0, 100.0).into();
//! let ball: OwnedShape = Circle::new(1.0).into();
//!
//! let result = hybrid_sat(
//!     ball.as_ref(),
//!     Point2::new(-20.0, 50.0),
//!     Vector2::new(40.0, 0.0),
//!     wall.as_ref(),
//!     Point2::new(0.0, 0.0),
//! );
//! match result {
//!     CollisionResult::Sweep { t, .. } => assert!(t > 0.0 && t < 1.0),
//!     _ => panic!("expected a sweep hit"),
//! }
//! ```

#![deny(missing_debug_implementations, trivial_casts, unsafe_code, unused_import_braces, unused_qualifications)]
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod intersect;
pub mod math;
pub mod mover;
pub mod primitives;
pub mod sat;

pub use mover::Mover;
pub use primitives::{Collidable, OwnedShape, ShapeRef};
pub use sat::{hybrid_sat, CollisionResult};

/// The crate-wide scalar type. `f32` by default; `f64` with the `double`
/// feature.
#[cfg(not(feature = "double"))]
pub type Real = f32;

/// The crate-wide scalar type. `f32` by default; `f64` with the `double`
/// feature.
#[cfg(feature = "double")]
pub type Real = f64;
