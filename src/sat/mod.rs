//! Separating Axis Theorem core (layer L4): static overlap, minimum
//! translation vector, and the swept hybrid test.

pub mod hybrid;
pub mod overlap;

pub use hybrid::hybrid_sat;
pub use overlap::{overlap_mtv, overlaps};

use cgmath::{EuclideanSpace, InnerSpace, Point2, Vector2};

use crate::primitives::ShapeRef;
use crate::Real;

/// The outcome of a hybrid (static + swept) SAT test between a moving
/// first shape and a stationary second shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionResult {
    /// The shapes never overlap on the tested interval.
    None,
    /// The shapes are already overlapping; `normal` and `distance`
    /// describe the minimum translation vector that separates them
    /// (applied to the first shape).
    Mtv { normal: Vector2<Real>, distance: Real },
    /// The shapes do not currently overlap, but will before the first
    /// shape finishes travelling its delta; `t` in `[0, 1]` is when,
    /// and `normal` is the collision normal at that moment (relative to
    /// the first shape).
    Sweep { normal: Vector2<Real>, t: Real },
}

/// Enumerate the separating axes to test for `first` (with `offset` from
/// `second`) against `second`.
///
/// Ported from `geom::sat::_get_separating_axes`: a rectangle contributes
/// its two axis-aligned normals (and short-circuits if the other shape is
/// also a rectangle, since the axes are shared); a polygon contributes
/// one axis per edge normal; a circle contributes the single axis from
/// its center to the closest point on the other shape (or, against
/// another circle, the center-to-center axis).
pub fn separating_axes(first: ShapeRef<'_>, offset: Vector2<Real>, second: ShapeRef<'_>) -> Vec<Vector2<Real>> {
    let mut axes = Vec::new();
    if get_shape_axes(first, offset, second, &mut axes) {
        return axes;
    }
    get_shape_axes(second, -offset, first, &mut axes);
    axes
}

/// Push axes contributed by `shape` (positioned at `offset` relative to
/// `other`) onto `axes`. Returns `true` if this call already produced the
/// complete, symmetric axis list (rect-vs-rect, circle-vs-circle) and the
/// caller should not also query the other shape.
fn get_shape_axes(shape: ShapeRef<'_>, offset: Vector2<Real>, other: ShapeRef<'_>, axes: &mut Vec<Vector2<Real>>) -> bool {
    match shape {
        ShapeRef::Rect(_) => {
            axes.push(Vector2::new(1.0, 0.0));
            axes.push(Vector2::new(0.0, 1.0));
            matches!(other, ShapeRef::Rect(_))
        }
        ShapeRef::Polygon(p) => {
            axes.extend(p.edge_normals());
            false
        }
        ShapeRef::Circle(_) => {
            // The circle's center, expressed in `other`'s local frame.
            let circle_center = Point2::new(offset.x, offset.y);
            if let ShapeRef::Circle(_) = other {
                let axis = circle_center.to_vec();
                axes.push(if axis.magnitude2() == 0.0 { Vector2::new(0.0, 1.0) } else { axis.normalize() });
                return true;
            }
            let closest = other.closest_point(Point2::new(0.0, 0.0), circle_center);
            let axis = closest - circle_center;
            if axis.magnitude2() != 0.0 {
                axes.push(axis.normalize());
            }
            false
        }
    }
}
