//! Polygon geometry for tunnel wall segments
//!
//! A polygon is an ordered vertex loop. Winding matters: with +y pointing
//! down (screen convention) vertices are listed so that every interior point
//! lies on the non-positive side of each edge's cross product.

use serde::{Deserialize, Serialize};

use crate::Vector2;

/// One directed polygon edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub from: Vector2,
    pub to: Vector2,
}

impl Line {
    pub fn new(from: Vector2, to: Vector2) -> Self {
        Self { from, to }
    }

    /// 2-D cross product of the edge direction with `point - from`.
    ///
    /// Positive means `point` is on the outer side of this edge.
    #[inline]
    pub fn side_of(&self, point: Vector2) -> f64 {
        let a = self.from;
        let b = self.to;
        (b.x - a.x) * (point.y - a.y) - (b.y - a.y) * (point.x - a.x)
    }
}

/// A convex wall segment. Vertex order is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Vector2>,
}

impl Polygon {
    /// Build a polygon from an ordered vertex loop (at least 3 vertices).
    pub fn new(points: Vec<Vector2>) -> Self {
        debug_assert!(points.len() >= 3, "polygon needs at least 3 vertices");
        Self { points }
    }

    /// Axis-aligned rectangle spanning `[x, x + w] × [y, y + h]`.
    ///
    /// Both ends are closed: a point at `y + h` is contained.
    pub fn rectangle(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(vec![
            Vector2::new(x, y),
            Vector2::new(x, y + h),
            Vector2::new(x + w, y + h),
            Vector2::new(x + w, y),
        ])
    }

    /// Parallelogram of width `w` whose edge at `y` starts at `x1` and whose
    /// edge at `y + h` starts at `x2`.
    ///
    /// Consecutive tunnel segments use this to slant between generator
    /// reference points. Vertex order matches [`Polygon::rectangle`].
    pub fn skewed_rectangle(x1: f64, x2: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(vec![
            Vector2::new(x1, y),
            Vector2::new(x2, y + h),
            Vector2::new(x2 + w, y + h),
            Vector2::new(x1 + w, y),
        ])
    }

    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    /// Edges in vertex order, closing back to the first vertex
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Line::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Half-plane containment test. Points on the boundary count as inside.
    ///
    /// Only valid for convex polygons wound as described in the module docs;
    /// reversed winding inverts the result.
    pub fn contains(&self, point: Vector2) -> bool {
        self.edges().all(|edge| edge.side_of(point) <= 0.0)
    }

    /// Smallest y over all vertices (the far end of a segment in travel direction)
    pub fn min_y(&self) -> f64 {
        self.points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min)
    }

    /// Largest y over all vertices
    pub fn max_y(&self) -> f64 {
        self.points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max)
    }

    /// Bounding box as (min corner, max corner)
    pub fn bounds(&self) -> (Vector2, Vector2) {
        let min = self.points.iter().copied().fold(Vector2::INFINITY, Vector2::min);
        let max = self
            .points
            .iter()
            .copied()
            .fold(Vector2::NEG_INFINITY, Vector2::max);
        (min, max)
    }

    /// Vertex average; lies inside any convex polygon
    pub fn centroid(&self) -> Vector2 {
        let sum = self.points.iter().copied().fold(Vector2::ZERO, |acc, p| acc + p);
        sum / self.points.len() as f64
    }
}
