//! End-to-end scenarios and universally-quantified invariants, run
//! against the public API as an external caller would use it.

use cgmath::{InnerSpace, Point2, Vector2};

use swept2d::mover::{CollisionPolicy, Mover, ObstacleSource};
use swept2d::primitives::{Circle, Collidable, OwnedShape, Rect, ShapeRef};
use swept2d::sat::{hybrid_sat, overlap_mtv, overlaps, CollisionResult};
use swept2d::constants::COLLISION_BUFFER;

struct Obj {
    pos: Point2<f32>,
    shape: OwnedShape,
}

impl Collidable for Obj {
    fn position(&self) -> Point2<f32> {
        self.pos
    }
    fn shape(&self) -> ShapeRef<'_> {
        self.shape.as_ref()
    }
}

/// A fixed, in-memory obstacle list: every obstacle is always a
/// candidate. Good enough for a test fixture; a real game would filter
/// by a broad-phase AABB check in `candidates`.
struct FixedMap {
    obstacles: Vec<Obj>,
}

impl ObstacleSource for FixedMap {
    fn candidates(&self, _collider: ShapeRef<'_>, _position: Point2<f32>, _delta: Vector2<f32>) -> Vec<&dyn Collidable> {
        self.obstacles.iter().map(|o| o as &dyn Collidable).collect()
    }
}

fn rect_obj(x: f32, y: f32, w: f32, h: f32, pos: Point2<f32>) -> Obj {
    Obj {
        pos,
        shape: Rect::new(x, y, w, h).into(),
    }
}

// --- Universally quantified invariants ---

#[test]
fn invariant_overlap_is_symmetric() {
    let a = rect_obj(0.0, 0.0, 10.0, 10.0, Point2::new(0.0, 0.0));
    let b = rect_obj(0.0, 0.0, 10.0, 10.0, Point2::new(5.0, 5.0));
    assert_eq!(overlaps(&a, &b), overlaps(&b, &a));

    let c = rect_obj(0.0, 0.0, 10.0, 10.0, Point2::new(100.0, 100.0));
    assert_eq!(overlaps(&a, &c), overlaps(&c, &a));
}

#[test]
fn invariant_mtv_separates() {
    let a = rect_obj(0.0, 0.0, 10.0, 10.0, Point2::new(0.0, 0.0));
    let b = rect_obj(0.0, 0.0, 10.0, 10.0, Point2::new(8.0, 0.0));
    let (normal, distance) = overlap_mtv(&a, &b).expect("should overlap");

    let translated = Obj {
        pos: a.pos + normal * (distance + 1e-4),
        shape: a.shape.clone(),
    };
    assert!(!overlaps(&translated, &b));
}

#[test]
fn invariant_hybrid_sat_trichotomy_sweep_t_in_range() {
    let moving: OwnedShape = Circle::new(1.0).into();
    let still: OwnedShape = Rect::new(0.0, 0.0, 10.0, 10.0).into();
    let result = hybrid_sat(
        moving.as_ref(),
        Point2::new(-20.0, 5.0),
        Vector2::new(40.0, 0.0),
        still.as_ref(),
        Point2::new(0.0, 0.0),
    );
    match result {
        CollisionResult::Sweep { t, .. } => assert!((0.0..=1.0).contains(&t)),
        other => panic!("expected Sweep, got {other:?}"),
    }
}

#[test]
fn invariant_mover_bounded_advance() {
    let origin = Point2::new(0.0, -5.0);
    let delta = Vector2::new(0.0, 10.0);
    let map = FixedMap {
        obstacles: vec![rect_obj(0.0, 0.0, 1.0, 1.0, Point2::new(0.0, 0.0))],
    };
    let collider: OwnedShape = Rect::new(0.0, 0.0, 1.0, 1.0).into();
    let mover = Mover::new(CollisionPolicy::Deflection);
    let result = mover.mv(collider.as_ref(), origin, delta, &map);
    assert!((result - origin).magnitude() <= delta.magnitude() + 1e-3);
}

#[test]
fn invariant_ray_idempotence() {
    use swept2d::intersect::{ray_intersects, ray_hit};
    use swept2d::primitives::Ray;

    let rect: OwnedShape = Rect::new(0.0, 0.0, 10.0, 10.0).into();
    let hitting = Ray::new(Point2::new(-5.0, 5.0), Vector2::new(1.0, 0.0));
    let missing = Ray::new(Point2::new(-5.0, 50.0), Vector2::new(1.0, 0.0));

    assert!(ray_intersects(&hitting, rect.as_ref(), Point2::new(0.0, 0.0)));
    assert!(ray_hit(&hitting, rect.as_ref(), Point2::new(0.0, 0.0)).is_some());

    assert!(!ray_intersects(&missing, rect.as_ref(), Point2::new(0.0, 0.0)));
    assert!(ray_hit(&missing, rect.as_ref(), Point2::new(0.0, 0.0)).is_none());
}

// --- End-to-end mover/SAT scenarios ---

#[test]
fn scenario_straight_on_rectangle_stop() {
    let origin = Point2::new(-0.5, -5.0);
    let delta = Vector2::new(0.0, 10.0);
    let map = FixedMap {
        obstacles: vec![rect_obj(0.0, 0.0, 1.0, 1.0, Point2::new(0.0, 0.0))],
    };
    let collider: OwnedShape = Rect::new(0.0, 0.0, 1.0, 1.0).into();
    let mover = Mover::new(CollisionPolicy::Deflection);
    let result = mover.mv(collider.as_ref(), origin, delta, &map);

    // The mover's own bottom edge reaches just short of the obstacle's
    // top edge (y = 0), stopping `COLLISION_BUFFER` short.
    assert!((result.y - (-1.0 - COLLISION_BUFFER)).abs() < 1e-3);
    assert!((result.x - origin.x).abs() < 1e-4);
}

#[test]
fn scenario_corridor_slide_no_deflection() {
    // A 1x1 mover drops straight down a corridor wide enough that it
    // never touches either wall; delta applies unchanged.
    let origin = Point2::new(5.0, -5.0);
    let delta = Vector2::new(0.0, 10.0);
    let map = FixedMap {
        obstacles: vec![
            rect_obj(0.0, -100.0, 1.0, 300.0, Point2::new(0.0, 0.0)),
            rect_obj(0.0, -100.0, 1.0, 300.0, Point2::new(10.0, 0.0)),
        ],
    };
    let collider: OwnedShape = Rect::new(0.0, 0.0, 1.0, 1.0).into();
    let mover = Mover::new(CollisionPolicy::Deflection);
    let result = mover.mv(collider.as_ref(), origin, delta, &map);

    assert!((result - (origin + delta)).magnitude() < 1e-3);
}

#[test]
fn scenario_circle_circle_swept_touch_at_t_zero() {
    let a: OwnedShape = Circle::new(5.0).into();
    let b: OwnedShape = Circle::new(5.0).into();
    let result = hybrid_sat(
        a.as_ref(),
        Point2::new(-10.0, 0.0),
        Vector2::new(-10.0, 0.0),
        b.as_ref(),
        Point2::new(0.0, 0.0),
    );
    match result {
        CollisionResult::Sweep { normal, t } => {
            assert!(t.abs() < 1e-3);
            assert!(normal.x < 0.0);
        }
        other => panic!("expected Sweep, got {other:?}"),
    }
}

#[test]
fn scenario_circle_circle_swept_halfway() {
    let a: OwnedShape = Circle::new(5.0).into();
    let b: OwnedShape = Circle::new(5.0).into();
    let result = hybrid_sat(
        a.as_ref(),
        Point2::new(-15.0, 0.0),
        Vector2::new(-10.0, 0.0),
        b.as_ref(),
        Point2::new(0.0, 0.0),
    );
    match result {
        CollisionResult::Sweep { t, .. } => assert!((t - 0.5).abs() < 1e-2),
        other => panic!("expected Sweep, got {other:?}"),
    }
}

#[test]
fn scenario_overlapping_rects_give_mtv_regardless_of_delta() {
    let rect_a: OwnedShape = Rect::new(0.0, 0.0, 10.0, 10.0).into();
    let rect_b: OwnedShape = Rect::new(0.0, 0.0, 10.0, 10.0).into();
    let pos_a = Point2::new(0.0, 0.0);
    let pos_b = Point2::new(9.99, 0.0);

    for delta in [Vector2::new(0.0, 0.0), Vector2::new(5.0, 5.0), Vector2::new(-3.0, 1.0)] {
        let result = hybrid_sat(rect_a.as_ref(), pos_a, delta, rect_b.as_ref(), pos_b);
        match result {
            CollisionResult::Mtv { normal, distance } => {
                assert!((distance - 0.01).abs() < 1e-3);
                assert!(normal.x < 0.0);
            }
            other => panic!("expected Mtv regardless of delta, got {other:?}"),
        }
    }
}
