//! Collision primitives for 2D (layer L2).
//!
//! These are the building blocks of all collision detection in this
//! crate: [`Rect`], [`Polygon`], [`Circle`], plus the supporting
//! [`Projection`] interval and [`Ray`]/[`LineSegment`] types used by the
//! ray and segment intersection suite.
//!
//! [`OwnedShape`] and [`ShapeRef`] are the two halves of the tagged
//! shape handle described in the design notes: a [`Collidable`] stores
//! the owning form inline, while every query function in `intersect` and
//! `sat` accepts the borrowing form, so a temporary polygon produced by
//! [`Polygon::extend`] or [`Circle::to_polygon`] can be passed without a
//! copy.

pub mod circle;
pub mod polygon;
pub mod ray;
pub mod rect;

pub use circle::Circle;
pub use polygon::Polygon;
pub use ray::{LineSegment, Ray};
pub use rect::Rect;

use cgmath::{Point2, Vector2};

use crate::Real;

/// A 1D interval `[min, max]` obtained by projecting a shape's vertices
/// onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Lower bound of the interval.
    pub min: Real,
    /// Upper bound of the interval.
    pub max: Real,
}

impl Projection {
    /// Create a new projection. `min` must be `<= max`.
    pub fn new(min: Real, max: Real) -> Self {
        Projection { min, max }
    }

    /// Shift the interval by a scalar offset (`offset = delta.dot(axis)`
    /// in SAT callers).
    pub fn translated(self, offset: Real) -> Self {
        Projection::new(self.min + offset, self.max + offset)
    }

    /// Whether this interval overlaps `other` by more than `epsilon`
    /// (touching is not overlap).
    pub fn overlaps(self, other: Projection, epsilon: Real) -> bool {
        self.min + epsilon <= other.max && self.max - epsilon >= other.min
    }
}

/// An axis-aligned bounding box, `[min, max]` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point2<Real>,
    /// Maximum corner.
    pub max: Point2<Real>,
}

impl Aabb {
    /// Build an AABB from an explicit min/max corner pair.
    pub fn new(min: Point2<Real>, max: Point2<Real>) -> Self {
        Aabb { min, max }
    }

    /// Build the AABB enclosing a non-empty vertex slice.
    pub fn from_points(points: &[Point2<Real>]) -> Self {
        let mut min = points[0];
        let mut max = points[0];
        for p in &points[1..] {
            if p.x < min.x {
                min.x = p.x;
            }
            if p.x > max.x {
                max.x = p.x;
            }
            if p.y < min.y {
                min.y = p.y;
            }
            if p.y > max.y {
                max.y = p.y;
            }
        }
        Aabb { min, max }
    }

    /// Translate the AABB by `delta`.
    pub fn translated(self, delta: Vector2<Real>) -> Self {
        Aabb::new(self.min + delta, self.max + delta)
    }

    /// Union of two AABBs.
    pub fn union(self, other: Aabb) -> Self {
        Aabb::new(
            Point2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            Point2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        )
    }
}

/// The owning form of the tagged shape handle. [`Collidable`] instances
/// store this; it is the inline sum-type value described in the design
/// notes, replacing a tagged pointer union with a plain Rust enum.
#[derive(Debug, Clone)]
pub enum OwnedShape {
    /// Axis-aligned rectangle.
    Rect(Rect),
    /// Convex, CCW-wound polygon.
    Polygon(Polygon),
    /// Circle.
    Circle(Circle),
}

impl OwnedShape {
    /// Borrow this shape as a [`ShapeRef`].
    pub fn as_ref(&self) -> ShapeRef<'_> {
        match self {
            OwnedShape::Rect(r) => ShapeRef::Rect(r),
            OwnedShape::Polygon(p) => ShapeRef::Polygon(p),
            OwnedShape::Circle(c) => ShapeRef::Circle(c),
        }
    }
}

impl From<Rect> for OwnedShape {
    fn from(r: Rect) -> Self {
        OwnedShape::Rect(r)
    }
}

impl From<Polygon> for OwnedShape {
    fn from(p: Polygon) -> Self {
        OwnedShape::Polygon(p)
    }
}

impl From<Circle> for OwnedShape {
    fn from(c: Circle) -> Self {
        OwnedShape::Circle(c)
    }
}

/// The borrowing form of the tagged shape handle. Every collision query
/// in this crate accepts this type so that temporaries (the result of
/// `extend`, `clip_extend`, or `to_polygon`) can be passed in without
/// copying into an owning shape first.
#[derive(Debug, Clone, Copy)]
pub enum ShapeRef<'a> {
    /// Axis-aligned rectangle.
    Rect(&'a Rect),
    /// Convex, CCW-wound polygon.
    Polygon(&'a Polygon),
    /// Circle.
    Circle(&'a Circle),
}

impl<'a> ShapeRef<'a> {
    /// Local-space axis-aligned bounding box of the shape.
    pub fn bound(&self) -> Aabb {
        match self {
            ShapeRef::Rect(r) => r.bound(),
            ShapeRef::Polygon(p) => p.bound(),
            ShapeRef::Circle(c) => c.bound(),
        }
    }

    /// 1D projection of the shape, translated by `position`, onto `axis`.
    ///
    /// `axis` need not be unit length: SAT callers only compare ratios of
    /// projections on the same axis within one call, so normalizing here
    /// would be wasted work.
    pub fn projection(&self, position: Point2<Real>, axis: Vector2<Real>) -> Projection {
        match self {
            ShapeRef::Rect(r) => r.projection(position, axis),
            ShapeRef::Polygon(p) => p.projection(position, axis),
            ShapeRef::Circle(c) => c.projection(position, axis),
        }
    }

    /// Closest point on the shape's boundary (or interior, for a filled
    /// shape with no boundary representation) to `point`, in the shape's
    /// local coordinate space offset by `position`.
    pub fn closest_point(&self, position: Point2<Real>, point: Point2<Real>) -> Point2<Real> {
        match self {
            ShapeRef::Rect(r) => r.closest_point(position, point),
            ShapeRef::Polygon(p) => p.closest_point(position, point),
            ShapeRef::Circle(c) => c.closest_point(position, point),
        }
    }

    /// Convert to an owned [`Polygon`] in local coordinates (identity for
    /// an already-polygonal shape, the four corners for a [`Rect`], a
    /// [`Circle::to_polygon`] approximation for a circle).
    pub fn to_polygon(&self) -> Polygon {
        match self {
            ShapeRef::Rect(r) => r.to_polygon(),
            ShapeRef::Polygon(p) => (*p).clone(),
            ShapeRef::Circle(c) => c.to_polygon(crate::constants::CIRCLE_SEGMENTS),
        }
    }
}

/// Any object that exposes a current world position and a shape.
///
/// The world position is kept separate from the shape's intrinsic
/// coordinates; a shape is expressed in local coordinates and translated
/// by position at query time. Obstacles and movers both satisfy this
/// trait.
pub trait Collidable {
    /// The collidable's current position in world space.
    fn position(&self) -> Point2<Real>;

    /// The collidable's shape, in local coordinates relative to
    /// [`position`](Collidable::position).
    fn shape(&self) -> ShapeRef<'_>;
}
