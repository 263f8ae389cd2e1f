//! Static (non-swept) SAT: boolean overlap test and minimum translation
//! vector.

use cgmath::{EuclideanSpace, InnerSpace, Vector2};

use super::separating_axes;
use crate::constants::EPSILON;
use crate::primitives::ShapeRef;
use crate::Collidable;
use crate::Real;

/// Whether `first` and `second` currently overlap. Touching (zero
/// overlap) does not count, matching `geom::sat::performSAT`.
pub fn overlaps(first: &dyn Collidable, second: &dyn Collidable) -> bool {
    let offset = first.position() - second.position();
    let axes = separating_axes(first.shape(), offset, second.shape());
    for axis in axes {
        let proj_first = first.shape().projection(first.position(), axis);
        let proj_second = second.shape().projection(second.position(), axis);
        if proj_first.min + EPSILON > proj_second.max || proj_first.max < proj_second.min + EPSILON {
            return false;
        }
    }
    true
}

/// The minimum translation vector that separates `first` from `second`,
/// if they currently overlap: `normal` points away from `second`, and
/// moving `first` by `normal * distance` resolves the overlap.
///
/// Ported from `geom::sat::performSAT`'s MTV-output overload: for every
/// axis, track the smaller of the two directional overlaps, and keep the
/// axis/overlap pair with the smallest overlap overall (the "path of
/// least resistance" out of the collision).
pub fn overlap_mtv(first: &dyn Collidable, second: &dyn Collidable) -> Option<(Vector2<Real>, Real)> {
    let offset = first.position() - second.position();
    let axes = separating_axes(first.shape(), offset, second.shape());
    let mut best: Option<(Vector2<Real>, Real)> = None;
    for axis in axes {
        let proj_first = first.shape().projection(first.position(), axis);
        let proj_second = second.shape().projection(second.position(), axis);
        let overlap_a = proj_first.max - proj_second.min;
        let overlap_b = proj_second.max - proj_first.min;
        if overlap_a < EPSILON || overlap_b < EPSILON {
            return None; // A separating axis exists; they don't overlap.
        }
        let (distance, normal) = if proj_first.min < proj_second.min {
            (overlap_a, -axis)
        } else {
            (overlap_b, axis)
        };
        if best.map_or(true, |(_, best_dist)| distance < best_dist) {
            best = Some((normal.normalize(), distance));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Circle, OwnedShape, Rect};
    use cgmath::Point2;

    struct Obj {
        pos: Point2<Real>,
        shape: OwnedShape,
    }
    impl Collidable for Obj {
        fn position(&self) -> Point2<Real> {
            self.pos
        }
        fn shape(&self) -> ShapeRef<'_> {
            self.shape.as_ref()
        }
    }

    #[test]
    fn test_overlapping_rects() {
        let a = Obj {
            pos: Point2::new(0.0, 0.0),
            shape: Rect::new(0.0, 0.0, 10.0, 10.0).into(),
        };
        let b = Obj {
            pos: Point2::new(5.0, 5.0),
            shape: Rect::new(0.0, 0.0, 10.0, 10.0).into(),
        };
        assert!(overlaps(&a, &b));
        let (normal, dist) = overlap_mtv(&a, &b).unwrap();
        assert!(dist > 0.0);
        assert!(normal.magnitude() > 0.99 && normal.magnitude() < 1.01);
    }

    #[test]
    fn test_non_overlapping_rects() {
        let a = Obj {
            pos: Point2::new(0.0, 0.0),
            shape: Rect::new(0.0, 0.0, 10.0, 10.0).into(),
        };
        let b = Obj {
            pos: Point2::new(100.0, 100.0),
            shape: Rect::new(0.0, 0.0, 10.0, 10.0).into(),
        };
        assert!(!overlaps(&a, &b));
        assert!(overlap_mtv(&a, &b).is_none());
    }

    #[test]
    fn test_overlapping_circles() {
        let a = Obj {
            pos: Point2::new(0.0, 0.0),
            shape: Circle::new(5.0).into(),
        };
        let b = Obj {
            pos: Point2::new(6.0, 0.0),
            shape: Circle::new(5.0).into(),
        };
        assert!(overlaps(&a, &b));
    }
}
