//! Cut lines, edge/line intersection, and side classification.
//!
//! Conventions
//! - Edges are finite segments `p1 → p2`; a hit is accepted for edge
//!   parameter `s ∈ [0, 1]`. Hits at `s = 0` or `s = 1` return the endpoint
//!   itself so the two edges meeting at a vertex report identical points.
//! - Side classification is the sign of `dir × (p − line_p1)`: positive is
//!   `Left`, negative `Right`, exact zero `On`.

use super::types::Point2;

/// Which side of a directed line a point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    On,
}

/// Directed cut from `p1` to `p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutLine {
    pub p1: Point2,
    pub p2: Point2,
}

impl CutLine {
    #[inline]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn direction(&self) -> Point2 {
        self.p2 - self.p1
    }

    /// Push both endpoints outward by `factor × (p2 − p1)`.
    pub fn extend(&mut self, factor: f64) {
        let d = self.direction() * factor;
        self.p1 -= d;
        self.p2 += d;
    }

    /// Copy of `self` after `extend(factor)`.
    #[inline]
    pub fn extended(&self, factor: f64) -> Self {
        let mut out = *self;
        out.extend(factor);
        out
    }

    #[inline]
    pub fn side_of(&self, p: Point2) -> Side {
        side_of_line(p, self.p1, self.p2)
    }
}

#[inline]
fn perp(a: Point2, b: Point2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Edge and line parameters `(s, u)` of the crossing, or `None` if parallel.
fn crossing_params(
    edge_p1: Point2,
    edge_p2: Point2,
    line_p1: Point2,
    line_p2: Point2,
) -> Option<(f64, f64)> {
    let e = edge_p2 - edge_p1;
    let l = line_p2 - line_p1;
    let denom = perp(e, l);
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    let w = line_p1 - edge_p1;
    Some((perp(w, l) / denom, perp(w, e) / denom))
}

fn point_on_edge(edge_p1: Point2, edge_p2: Point2, s: f64) -> Option<Point2> {
    if !(0.0..=1.0).contains(&s) {
        return None;
    }
    if s == 0.0 {
        Some(edge_p1)
    } else if s == 1.0 {
        Some(edge_p2)
    } else {
        Some(edge_p1 + (edge_p2 - edge_p1) * s)
    }
}

/// Crossing of the finite edge `edge_p1–edge_p2` with the infinite line
/// through `line_p1`, `line_p2`.
pub fn segments_intersect(
    edge_p1: Point2,
    edge_p2: Point2,
    line_p1: Point2,
    line_p2: Point2,
) -> Option<Point2> {
    let (s, _) = crossing_params(edge_p1, edge_p2, line_p1, line_p2)?;
    point_on_edge(edge_p1, edge_p2, s)
}

/// Like `segments_intersect`, but the crossing must also lie on the finite
/// segment `line_p1–line_p2`.
pub fn bounded_segments_intersect(
    edge_p1: Point2,
    edge_p2: Point2,
    line_p1: Point2,
    line_p2: Point2,
) -> Option<Point2> {
    let (s, u) = crossing_params(edge_p1, edge_p2, line_p1, line_p2)?;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    point_on_edge(edge_p1, edge_p2, s)
}

/// Side of the directed line `line_p1 → line_p2` that `point` lies on.
#[inline]
pub fn side_of_line(point: Point2, line_p1: Point2, line_p2: Point2) -> Side {
    let c = perp(line_p2 - line_p1, point - line_p1);
    if c > 0.0 {
        Side::Left
    } else if c < 0.0 {
        Side::Right
    } else {
        Side::On
    }
}
