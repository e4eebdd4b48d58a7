//! Triangle index lists for fragment vertex sets.
//!
//! Purpose
//! - Turn a fragment's vertex set into non-overlapping triangles covering its
//!   convex hull, for the mesh assembler.
//!
//! Strategy selection
//! - 3 vertices: the single triangle `(0, 1, 2)`, vertex order untouched.
//! - More: vertices are sorted left to right (ties bottom to top) and handed
//!   to a `Triangulate` strategy. The strategy is a plain value passed in by
//!   the caller; `HullTriangulator` is the default.
//!
//! `HullTriangulator`
//! - Monotone-chain boundary that keeps colinear boundary points, ear
//!   clipping of that CCW loop, then each remaining interior point splits the
//!   triangle containing it (or the two triangles sharing the edge it lies on).
//! - Output triangles are CCW and every distinct input position is referenced
//!   unless rounding places an interior point outside all triangles.

use std::time::Instant;

use tracing::trace;

use crate::error::SliceError;
use crate::geom2::{cross, signed_area, triangle_area, Point2, Vertex};

/// Three indices into a fragment's vertex array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle(pub [usize; 3]);

impl Triangle {
    #[inline]
    pub fn area(&self, points: &[Point2]) -> f64 {
        let [a, b, c] = self.0;
        triangle_area(points[a], points[b], points[c])
    }

    #[inline]
    pub fn is_ccw(&self, points: &[Point2]) -> bool {
        let [a, b, c] = self.0;
        cross(points[a], points[b], points[c]) > 0.0
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        let [a, b, c] = self.0;
        (a, b) == (from, to) || (b, c) == (from, to) || (c, a) == (from, to)
    }
}

/// Sum of triangle areas.
pub fn total_area(triangles: &[Triangle], points: &[Point2]) -> f64 {
    triangles.iter().map(|t| t.area(points)).sum()
}

/// Triangulation strategy over a point set of 4 or more points.
pub trait Triangulate {
    fn triangulate(&self, points: &[Point2]) -> Result<Vec<Triangle>, SliceError>;
}

impl<T: Triangulate + ?Sized> Triangulate for &T {
    fn triangulate(&self, points: &[Point2]) -> Result<Vec<Triangle>, SliceError> {
        (**self).triangulate(points)
    }
}

/// Convex-polygon triangulator (hull boundary + ear clipping + interior splits).
#[derive(Clone, Copy, Debug, Default)]
pub struct HullTriangulator;

/// Left to right, then bottom to top.
pub fn sort_left_to_right(vertices: &mut [Vertex]) {
    vertices.sort_by(|a, b| {
        a.pos
            .x
            .total_cmp(&b.pos.x)
            .then_with(|| a.pos.y.total_cmp(&b.pos.y))
    });
}

/// Normalize the vertex order and triangulate.
///
/// With more than 3 vertices, `vertices` is reordered in place and the
/// returned indices refer to the new order.
pub fn triangulate_vertices<T: Triangulate + ?Sized>(
    vertices: &mut [Vertex],
    strategy: &T,
) -> Result<Vec<Triangle>, SliceError> {
    match vertices.len() {
        n if n < 3 => Err(SliceError::triangulation(format!(
            "need at least 3 vertices, got {n}"
        ))),
        3 => Ok(vec![Triangle([0, 1, 2])]),
        _ => {
            sort_left_to_right(vertices);
            let positions: Vec<Point2> = vertices.iter().map(|v| v.pos).collect();
            strategy.triangulate(&positions)
        }
    }
}

impl Triangulate for HullTriangulator {
    fn triangulate(&self, points: &[Point2]) -> Result<Vec<Triangle>, SliceError> {
        if points.len() < 3 {
            return Err(SliceError::triangulation("fewer than 3 points"));
        }
        let started = Instant::now();

        let mut order: Vec<usize> = (0..points.len()).collect();
        order.sort_by(|&a, &b| {
            points[a]
                .x
                .total_cmp(&points[b].x)
                .then_with(|| points[a].y.total_cmp(&points[b].y))
        });
        let mut distinct = Vec::with_capacity(order.len());
        for i in order {
            if distinct.last().map_or(true, |&j: &usize| points[j] != points[i]) {
                distinct.push(i);
            }
        }

        let ring = boundary_loop(points, &distinct);
        let ring_pts: Vec<Point2> = ring.iter().map(|&i| points[i]).collect();
        if ring.len() < 3 || signed_area(&ring_pts) <= 0.0 {
            return Err(SliceError::triangulation("points are colinear"));
        }

        let mut triangles = clip_ears(points, ring.clone())?;
        for &i in distinct.iter().filter(|i| !ring.contains(i)) {
            insert_interior(points, &mut triangles, i);
        }

        trace!(
            points = points.len(),
            triangles = triangles.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "triangulated"
        );
        Ok(triangles)
    }
}

/// CCW boundary (colinear boundary points kept) of points pre-sorted by (x, y).
fn boundary_loop(points: &[Point2], sorted: &[usize]) -> Vec<usize> {
    fn chain<'a>(points: &[Point2], it: impl Iterator<Item = &'a usize>) -> Vec<usize> {
        let mut out: Vec<usize> = Vec::new();
        for &i in it {
            while out.len() >= 2
                && cross(points[out[out.len() - 2]], points[out[out.len() - 1]], points[i]) < 0.0
            {
                out.pop();
            }
            out.push(i);
        }
        out
    }
    let mut lower = chain(points, sorted.iter());
    let mut upper = chain(points, sorted.iter().rev());
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

fn inside_closed(p: Point2, a: Point2, b: Point2, c: Point2) -> bool {
    cross(a, b, p) >= 0.0 && cross(b, c, p) >= 0.0 && cross(c, a, p) >= 0.0
}

fn clip_ears(points: &[Point2], mut ring: Vec<usize>) -> Result<Vec<Triangle>, SliceError> {
    let mut triangles = Vec::with_capacity(ring.len());
    while ring.len() > 3 {
        let m = ring.len();
        let corners = |k: usize| (ring[(k + m - 1) % m], ring[k], ring[(k + 1) % m]);
        let ear = (0..m).find(|&k| {
            let (prev, cur, next) = corners(k);
            let (a, b, c) = (points[prev], points[cur], points[next]);
            cross(a, b, c) > 0.0
                && ring
                    .iter()
                    .filter(|&&j| j != prev && j != cur && j != next)
                    .all(|&j| !inside_closed(points[j], a, b, c))
        });
        let Some(ear) = ear else {
            return Err(SliceError::triangulation("no ear left to clip"));
        };
        let (prev, cur, next) = corners(ear);
        triangles.push(Triangle([prev, cur, next]));
        ring.remove(ear);
    }
    let last = Triangle([ring[0], ring[1], ring[2]]);
    if !last.is_ccw(points) {
        return Err(SliceError::triangulation("degenerate final ear"));
    }
    triangles.push(last);
    Ok(triangles)
}

/// Split the triangle containing `points[i]`; on an edge, split both sides.
fn insert_interior(points: &[Point2], triangles: &mut Vec<Triangle>, i: usize) {
    let p = points[i];
    let Some(t) = triangles.iter().position(|t| {
        let [a, b, c] = t.0;
        inside_closed(p, points[a], points[b], points[c])
    }) else {
        trace!(index = i, "interior point outside every triangle, left unreferenced");
        return;
    };
    let [a, b, c] = triangles[t].0;
    // (edge start, edge end, opposite corner) for each edge of the triangle.
    let edges = [(a, b, c), (b, c, a), (c, a, b)];
    let on: Vec<(usize, usize, usize)> = edges
        .into_iter()
        .filter(|&(u, v, _)| cross(points[u], points[v], p) == 0.0)
        .collect();
    match on.as_slice() {
        [] => {
            triangles[t] = Triangle([a, b, i]);
            triangles.push(Triangle([b, c, i]));
            triangles.push(Triangle([c, a, i]));
        }
        [(u, v, w)] => {
            let (u, v, w) = (*u, *v, *w);
            triangles[t] = Triangle([u, i, w]);
            triangles.push(Triangle([i, v, w]));
            if let Some(n) = triangles.iter().position(|t| t.has_edge(v, u)) {
                let [x0, x1, x2] = triangles[n].0;
                let x = [x0, x1, x2]
                    .into_iter()
                    .find(|&x| x != u && x != v)
                    .unwrap_or(x0);
                triangles[n] = Triangle([v, i, x]);
                triangles.push(Triangle([i, u, x]));
            }
        }
        // On two edges means on a corner: a coincident point, nothing to split.
        _ => {}
    }
}
