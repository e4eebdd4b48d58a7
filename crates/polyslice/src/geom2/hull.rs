//! Convex hull of a fragment's vertex set (Graham scan).
//!
//! Purpose
//! - Give the slicer a CCW boundary to walk when intersecting a cut line.
//! - Return indices, not copies, so callers can look up the UV of every hull
//!   corner without searching the vertex set by position.
//!
//! Pivot rules
//! - `HullPivot::Lowest` anchors the scan at the lowest-then-leftmost point
//!   and collapses points sharing a ray with it to the farthest one. This is
//!   the textbook scan and always yields the true hull.
//! - `HullPivot::FirstInput` anchors at `points[0]`, orders the rest by the
//!   turn `pivot → a → b` (CCW first, colinear farthest first) and keeps every
//!   point. It reproduces the legacy slicer: correct for any pivot on the
//!   hull, wrong answers when `points[0]` is interior.
//!
//! Code cross-refs: `util::{orientation, distance}`, `types::HullPivot`

use std::cmp::Ordering;

use tracing::warn;

use super::types::{HullPivot, Point2, Vertex};
use super::util::{cross, distance, orientation, Orientation};
use crate::error::SliceError;

/// CCW hull as indices into the point set it was built from.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexHull {
    pub indices: Vec<usize>,
    pub points: Vec<Point2>,
}

impl ConvexHull {
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Hull edges `(k, k+1 mod n)` as positions into `indices`/`points`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.len();
        (0..n).map(move |k| (k, (k + 1) % n))
    }

    /// Point inside or on the boundary, with slack `eps` on each edge test.
    pub fn contains_eps(&self, p: Point2, eps: f64) -> bool {
        self.edges()
            .all(|(a, b)| cross(self.points[a], self.points[b], p) >= -eps)
    }
}

/// Polar sort key about a lowest pivot: angle ascending, then farthest first.
///
/// Every other point sits at an angle in `[0, π]`, so `atan2` never wraps.
#[derive(Clone, Copy, Debug)]
struct PolarKey {
    angle: f64,
    dist: f64,
}

impl PolarKey {
    fn new(pivot: Point2, p: Point2) -> Self {
        let d = p - pivot;
        Self {
            angle: d.y.atan2(d.x),
            dist: distance(pivot, p),
        }
    }
}

impl PartialEq for PolarKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for PolarKey {}
impl PartialOrd for PolarKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for PolarKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.angle
            .total_cmp(&other.angle)
            .then_with(|| other.dist.total_cmp(&self.dist))
    }
}

/// Turn order about `pivot`: `a` before `b` when `pivot → a → b` is CCW,
/// colinear points farthest first.
fn turn_order(pivot: Point2, a: Point2, b: Point2) -> Ordering {
    match orientation(pivot, a, b) {
        Orientation::CounterClockwise => Ordering::Less,
        Orientation::Clockwise => Ordering::Greater,
        Orientation::Colinear => distance(pivot, b).total_cmp(&distance(pivot, a)),
    }
}

/// Stable insertion sort by `turn_order`.
///
/// The turn order is not transitive around an interior pivot; insertion sort
/// still terminates with a deterministic order there.
fn sort_by_turn(points: &[Point2], pivot: Point2, idx: &mut [usize]) {
    for k in 1..idx.len() {
        let mut j = k;
        while j > 0 && turn_order(pivot, points[idx[j - 1]], points[idx[j]]) == Ordering::Greater {
            idx.swap(j - 1, j);
            j -= 1;
        }
    }
}

fn lowest_index(points: &[Point2]) -> usize {
    let mut best = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let b = points[best];
        if p.y < b.y || (p.y == b.y && p.x < b.x) {
            best = i;
        }
    }
    best
}

fn all_colinear(points: &[Point2]) -> bool {
    let a = points[0];
    let Some(b) = points.iter().copied().find(|&p| p != a) else {
        return true;
    };
    points
        .iter()
        .all(|&c| orientation(a, b, c) == Orientation::Colinear)
}

/// Graham-scan hull of `points`, CCW, as indices into `points`.
///
/// Errors with `DegenerateHull` for fewer than 3 points, an all-colinear
/// set, or a scan that pops below 2 points (possible with `FirstInput`).
pub fn convex_hull(points: &[Point2], pivot_rule: HullPivot) -> Result<ConvexHull, SliceError> {
    if points.len() < 3 {
        return Err(SliceError::degenerate(format!(
            "need at least 3 points, got {}",
            points.len()
        )));
    }
    if all_colinear(points) {
        return Err(SliceError::degenerate("all points are colinear"));
    }

    let pivot_idx = match pivot_rule {
        HullPivot::Lowest => lowest_index(points),
        HullPivot::FirstInput => 0,
    };
    let pivot = points[pivot_idx];

    let mut rest: Vec<usize> = (0..points.len())
        .filter(|&i| i != pivot_idx && points[i] != pivot)
        .collect();
    match pivot_rule {
        HullPivot::Lowest => rest.sort_by_cached_key(|&i| PolarKey::new(pivot, points[i])),
        HullPivot::FirstInput => sort_by_turn(points, pivot, &mut rest),
    }

    if pivot_rule == HullPivot::Lowest {
        // Keep only the farthest point of each ray leaving the pivot.
        let mut rays: Vec<usize> = Vec::with_capacity(rest.len());
        for i in rest {
            if let Some(last) = rays.last_mut() {
                if orientation(pivot, points[*last], points[i]) == Orientation::Colinear {
                    if distance(pivot, points[i]) > distance(pivot, points[*last]) {
                        *last = i;
                    }
                    continue;
                }
            }
            rays.push(i);
        }
        rest = rays;
    }

    if rest.len() < 2 {
        return Err(SliceError::degenerate("fewer than 3 distinct directions"));
    }

    let mut hull = vec![pivot_idx, rest[0], rest[1]];
    for &i in &rest[2..] {
        let candidate = points[i];
        while orientation(
            points[hull[hull.len() - 2]],
            points[hull[hull.len() - 1]],
            candidate,
        ) != Orientation::CounterClockwise
        {
            hull.pop();
            if hull.len() < 2 {
                warn!(
                    pivot = ?pivot_rule,
                    "not enough points left on the hull during the scan"
                );
                return Err(SliceError::degenerate(
                    "hull scan popped below 2 points",
                ));
            }
        }
        hull.push(i);
    }

    if hull.len() < 3 {
        return Err(SliceError::degenerate("hull has fewer than 3 corners"));
    }
    let hull_points = hull.iter().map(|&i| points[i]).collect();
    Ok(ConvexHull {
        indices: hull,
        points: hull_points,
    })
}

/// Hull of a vertex set's positions.
pub fn vertex_hull(vertices: &[Vertex], pivot_rule: HullPivot) -> Result<ConvexHull, SliceError> {
    let positions: Vec<Point2> = vertices.iter().map(|v| v.pos).collect();
    convex_hull(&positions, pivot_rule)
}
