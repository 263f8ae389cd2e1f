//! Convex polygon primitive.

use cgmath::{EuclideanSpace, InnerSpace, Point2, Vector2};

use super::{Aabb, Projection};
use crate::constants::EPSILON;
use crate::error::{GeomError, GeomResult};
use crate::math::{almost_zero, cross2};
use crate::Real;

/// Convex polygon primitive.
///
/// Vertices are stored in CCW winding order; edge `i` connects vertex `i`
/// to vertex `(i + 1) % n`. A parallel sequence of unit edge normals and
/// an axis-aligned bounding box are computed at construction time and
/// kept consistent by every mutating method.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point2<Real>>,
    edge_normals: Vec<Vector2<Real>>,
    bound: Aabb,
}

/// The contiguous CCW arc of vertices found by
/// [`Polygon::find_extend_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendRange {
    /// Index of the first vertex in the arc.
    pub first: usize,
    /// Index of the last vertex in the arc.
    pub last: usize,
    /// Whether `first` needs to be duplicated when extending.
    pub dupe_first: bool,
    /// Whether `last` needs to be duplicated when extending.
    pub dupe_last: bool,
}

fn edge_normal(a: Point2<Real>, b: Point2<Real>) -> Vector2<Real> {
    Vector2::new(a.y - b.y, b.x - a.x).normalize()
}

impl Polygon {
    /// Build a polygon from CCW-wound vertices, computing edge normals
    /// and the bounding box eagerly.
    ///
    /// This does not reject non-convex or under-3-vertex input outright
    /// (spec: "validity is asserted where it matters"); such a polygon
    /// will simply fail later on when [`find_extend_range`](Polygon::find_extend_range)
    /// is asked to extend it.
    pub fn new(vertices: Vec<Point2<Real>>) -> Self {
        let edge_normals = Self::compute_normals(&vertices);
        let bound = Aabb::from_points(&vertices);
        Polygon {
            vertices,
            edge_normals,
            bound,
        }
    }

    /// Build a polygon from vertices and a pre-computed, trusted set of
    /// unit edge normals. Fast path for callers (e.g. `extend`) that
    /// already know the normals instead of re-deriving them.
    pub fn with_normals(vertices: Vec<Point2<Real>>, edge_normals: Vec<Vector2<Real>>) -> Self {
        let bound = Aabb::from_points(&vertices);
        Polygon {
            vertices,
            edge_normals,
            bound,
        }
    }

    fn compute_normals(vertices: &[Point2<Real>]) -> Vec<Vector2<Real>> {
        let n = vertices.len();
        (0..n)
            .map(|i| edge_normal(vertices[i], vertices[(i + 1) % n]))
            .collect()
    }

    /// Vertices, in CCW order.
    pub fn vertices(&self) -> &[Point2<Real>] {
        &self.vertices
    }

    /// Unit edge normals, one per edge, `edge_normals()[i]` is the normal
    /// of the edge from vertex `i` to vertex `(i + 1) % n`.
    pub fn edge_normals(&self) -> &[Vector2<Real>] {
        &self.edge_normals
    }

    /// Local-space axis-aligned bounding box.
    pub fn bound(&self) -> Aabb {
        self.bound
    }

    /// 1D projection of the polygon, translated by `position`, onto
    /// `axis`.
    pub fn projection(&self, position: Point2<Real>, axis: Vector2<Real>) -> Projection {
        let offset = position.to_vec();
        let mut min = (self.vertices[0] + offset).to_vec().dot(axis);
        let mut max = min;
        for v in &self.vertices[1..] {
            let proj = (*v + offset).to_vec().dot(axis);
            if proj < min {
                min = proj;
            } else if proj > max {
                max = proj;
            }
        }
        Projection::new(min, max)
    }

    /// Vertex closest to `point` (with the polygon translated by
    /// `position`). Used by SAT's circle-vs-polygon axis construction.
    pub fn closest_point(&self, position: Point2<Real>, point: Point2<Real>) -> Point2<Real> {
        let offset = position.to_vec();
        let mut closest = self.vertices[0] + offset;
        let mut min_dist2 = (point - closest).magnitude2();
        for v in &self.vertices[1..] {
            let candidate = *v + offset;
            let dist2 = (point - candidate).magnitude2();
            if dist2 < min_dist2 {
                min_dist2 = dist2;
                closest = candidate;
            }
        }
        closest
    }

    /// Translate every vertex and the cached bound by `delta`. Edge
    /// normals are translation-invariant and left untouched.
    pub fn translate(&mut self, delta: Vector2<Real>) {
        for v in self.vertices.iter_mut() {
            *v += delta;
        }
        self.bound = self.bound.translated(delta);
    }

    /// Return a translated copy of `self`.
    pub fn translated(&self, delta: Vector2<Real>) -> Self {
        let mut p = self.clone();
        p.translate(delta);
        p
    }

    /// Offset every edge outward by `amount` along its normal; each
    /// vertex moves along the normalized sum of its two incident edge
    /// normals. Negative amounts are rejected (a convex polygon can
    /// self-intersect when shrunk this way).
    pub fn expand(&self, amount: Real) -> Self {
        if amount < 0.0 {
            log::warn!("cannot expand a polygon by a negative amount ({amount}); ignoring");
            return self.clone();
        }
        if amount == 0.0 {
            return self.clone();
        }
        let n = self.vertices.len();
        let new_vertices: Vec<Point2<Real>> = (0..n)
            .map(|i| {
                let prev = self.edge_normals[(i + n - 1) % n];
                let curr = self.edge_normals[i];
                let vertex_norm = (prev + curr).normalize();
                self.vertices[i] + vertex_norm * amount
            })
            .collect();
        Polygon::new(new_vertices)
    }

    /// Find the contiguous CCW arc of vertices whose incident edge
    /// normals have at least one acute angle with `dir`, and whether the
    /// arc's two boundary vertices need duplication (they don't if the
    /// bounding edge is exactly perpendicular to `dir`).
    ///
    /// `dir` must not be the zero vector.
    pub fn find_extend_range(&self, dir: Vector2<Real>) -> GeomResult<ExtendRange> {
        let n = self.vertices.len();
        if n < 3 {
            return Err(GeomError::InvalidPolygon {
                reason: "polygon must have at least three vertices",
            });
        }

        #[derive(PartialEq, Eq, Clone, Copy)]
        enum Angle {
            Acute,
            Perpendicular,
            Obtuse,
        }
        let classify = |normal: Vector2<Real>| -> Angle {
            let d = normal.dot(dir);
            if almost_zero(d, EPSILON) {
                Angle::Perpendicular
            } else if d > 0.0 {
                Angle::Acute
            } else {
                Angle::Obtuse
            }
        };

        let first_edge = classify(self.edge_normals[n - 1]);
        let is_first_edge_acute = first_edge == Angle::Acute;

        let mut prev_edge = first_edge;
        let mut found_at = None;
        let mut found_edge = first_edge;
        for i in 0..n - 1 {
            let curr_edge = classify(self.edge_normals[i]);
            if is_first_edge_acute != (curr_edge == Angle::Acute) {
                found_at = Some(i);
                found_edge = curr_edge;
                break;
            }
            prev_edge = curr_edge;
        }
        let vertex_in_region = match found_at {
            Some(i) => i,
            None => {
                return Err(GeomError::InvalidPolygon {
                    reason: "polygon is not convex (no extend-range boundary found)",
                })
            }
        };

        if is_first_edge_acute {
            // vertex_in_region is the last vertex in the region.
            let last = vertex_in_region;
            let dupe_last = found_edge != Angle::Perpendicular;
            for i in (1..n).rev() {
                let curr_edge = classify(self.edge_normals[i - 1]);
                if curr_edge != Angle::Acute {
                    return Ok(ExtendRange {
                        first: i,
                        last,
                        dupe_first: curr_edge != Angle::Perpendicular,
                        dupe_last,
                    });
                }
            }
            Err(GeomError::InvalidPolygon {
                reason: "polygon is not convex (no extend-range start found)",
            })
        } else {
            // vertex_in_region is the first vertex in the region.
            let first = vertex_in_region;
            let dupe_first = prev_edge != Angle::Perpendicular;
            for i in (vertex_in_region + 1)..n - 1 {
                let curr_edge = classify(self.edge_normals[i]);
                if curr_edge != Angle::Acute {
                    return Ok(ExtendRange {
                        first,
                        last: i,
                        dupe_first,
                        dupe_last: curr_edge != Angle::Perpendicular,
                    });
                }
            }
            // The edge normal between the last and first vertex is the
            // only non-acute one.
            Ok(ExtendRange {
                first,
                last: n - 1,
                dupe_first,
                dupe_last: first_edge != Angle::Perpendicular,
            })
        }
    }

    /// Produce a new polygon by translating every vertex in the
    /// extend-range by `dir * dist`, duplicating the arc endpoints if
    /// needed so the result is still convex and CCW. Used to build
    /// swept-volume hulls.
    pub fn extend(&self, dir: Vector2<Real>, dist: Real) -> GeomResult<Self> {
        if dir.magnitude2() == 0.0 || dist == 0.0 {
            return Ok(self.clone());
        }
        let range = self.find_extend_range(dir)?;
        Ok(self.extend_range(dir, dist, range))
    }

    fn extend_range(&self, dir: Vector2<Real>, dist: Real, range: ExtendRange) -> Self {
        use crate::math::{perp_ccw, perp_cw};
        let translation = dir * dist;
        let in_range = |i: usize| -> bool {
            if range.first > range.last {
                i <= range.last || i >= range.first
            } else {
                i >= range.first && i <= range.last
            }
        };
        let n = self.vertices.len();
        let mut new_vertices = Vec::with_capacity(n + 2);
        let mut new_normals = Vec::with_capacity(n + 2);
        for i in 0..n {
            if i == range.first && range.dupe_first {
                new_vertices.push(self.vertices[i]);
                new_vertices.push(self.vertices[i] + translation);
                new_normals.push(perp_ccw(dir));
                new_normals.push(self.edge_normals[i]);
            } else if i == range.last && range.dupe_last {
                new_vertices.push(self.vertices[i] + translation);
                new_vertices.push(self.vertices[i]);
                new_normals.push(perp_cw(dir));
                new_normals.push(self.edge_normals[i]);
            } else {
                let v = if in_range(i) {
                    self.vertices[i] + translation
                } else {
                    self.vertices[i]
                };
                new_vertices.push(v);
                new_normals.push(self.edge_normals[i]);
            }
        }
        Polygon::with_normals(new_vertices, new_normals)
    }

    /// Like [`extend`](Polygon::extend), but discards the trailing
    /// portion, keeping only the swept strip itself. Used as a bounding
    /// hull for swept-collision shortcuts.
    pub fn clip_extend(&self, dir: Vector2<Real>, dist: Real) -> GeomResult<Self> {
        if dir.magnitude2() == 0.0 || dist == 0.0 {
            return Ok(self.clone());
        }
        let range = self.find_extend_range(dir)?;
        Ok(self.clip_extend_range(dir, dist, range))
    }

    fn clip_extend_range(&self, dir: Vector2<Real>, dist: Real, range: ExtendRange) -> Self {
        use crate::math::{perp_ccw, perp_cw};
        let translation = dir * dist;
        let n = self.vertices.len();
        let mut new_vertices = Vec::new();
        let mut new_normals = Vec::new();

        new_vertices.push(self.vertices[range.first]);
        new_normals.push(perp_ccw(dir));

        if range.first < range.last {
            for i in range.first..range.last {
                new_vertices.push(self.vertices[i] + translation);
                new_normals.push(self.edge_normals[i]);
            }
        } else {
            for i in range.first..n {
                new_vertices.push(self.vertices[i] + translation);
                new_normals.push(self.edge_normals[i]);
            }
            for i in 0..range.last {
                new_vertices.push(self.vertices[i] + translation);
                new_normals.push(self.edge_normals[i]);
            }
        }
        new_vertices.push(self.vertices[range.last] + translation);
        new_vertices.push(self.vertices[range.last]);
        new_normals.push(perp_cw(dir));
        new_normals.push(Vector2::new(0.0, 0.0));

        let mut p = Polygon::with_normals(new_vertices, new_normals);
        // The final edge normal (closing last -> first) was left
        // unfilled above; re-derive the full cache now that the shape is
        // final, matching a freshly-constructed polygon.
        p.edge_normals = Self::compute_normals(&p.vertices);
        p
    }

    /// Returns `true` if `dir` is not the zero vector and `find_extend_range`
    /// would succeed: a quick convexity probe along one direction.
    pub fn can_extend(&self, dir: Vector2<Real>) -> bool {
        dir.magnitude2() != 0.0 && self.find_extend_range(dir).is_ok()
    }

    /// Indices of the contiguous arc of vertices facing `dir`, same arc
    /// [`find_extend_range`](Polygon::find_extend_range) would extend.
    /// Used by ray-polygon's sub-range optimization to avoid sweeping
    /// every edge.
    pub fn vertices_facing(&self, dir: Vector2<Real>) -> GeomResult<(usize, usize)> {
        let range = self.find_extend_range(dir)?;
        Ok((range.first, range.last))
    }
}
