//! Single-fragment split: hull crossings, UV interpolation, partition.
//!
//! Steps
//! - Walk the fragment's hull edges and collect the distinct points where the
//!   cut crosses them (exact position dedup), each with a UV interpolated
//!   along its edge. A third distinct crossing aborts the split.
//! - Not exactly two crossings: extend the cut once and walk again.
//! - Partition every vertex against the line through the two crossings:
//!   left, right, or both when it lies on the line. Both crossings join both
//!   sides. Insertion skips near-duplicates in `(x, y, u, v)`.

use tracing::{debug, error};

use super::types::Fragment;
use crate::error::SliceError;
use crate::geom2::{
    bounded_segments_intersect, distance, segments_intersect, ConvexHull, CutExtent, CutLine,
    Point2, SliceCfg, Side, Vertex,
};
use crate::triangulate::Triangulate;

/// A point where the cut crosses the hull, with its interpolated UV.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crossing {
    pub vertex: Vertex,
    /// Vertex indices of the hull edge the crossing lies on.
    pub edge: (usize, usize),
}

/// Vertices on each side of the crossing line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition {
    pub left: Vec<Vertex>,
    pub right: Vec<Vertex>,
}

/// Distinct crossings of `cut` with the hull boundary.
///
/// Errors with `AmbiguousIntersection` when there are more than two.
pub fn hull_crossings(
    vertices: &[Vertex],
    hull: &ConvexHull,
    cut: &CutLine,
    extent: CutExtent,
) -> Result<Vec<Crossing>, SliceError> {
    let intersect: fn(Point2, Point2, Point2, Point2) -> Option<Point2> = match extent {
        CutExtent::Line => segments_intersect,
        CutExtent::Segment => bounded_segments_intersect,
    };
    let mut found: Vec<Crossing> = Vec::with_capacity(2);
    let mut distinct = 0usize;
    for (a, b) in hull.edges() {
        let (ia, ib) = (hull.indices[a], hull.indices[b]);
        let (pa, pb) = (vertices[ia].pos, vertices[ib].pos);
        let Some(hit) = intersect(pa, pb, cut.p1, cut.p2) else {
            continue;
        };
        // Two edges sharing a corner on the cut report the same point.
        if found.iter().any(|c| c.vertex.pos == hit) {
            continue;
        }
        distinct += 1;
        if found.len() == 2 {
            continue;
        }
        let t = distance(hit, pa) / distance(pb, pa);
        let uv = vertices[ia].uv.lerp(&vertices[ib].uv, t);
        found.push(Crossing {
            vertex: Vertex::new(hit, uv),
            edge: (ia, ib),
        });
    }
    if distinct > 2 {
        error!(found = distinct, "cut crosses the hull in more than 2 places");
        return Err(SliceError::AmbiguousIntersection { found: distinct });
    }
    Ok(found)
}

/// Exactly two crossings, extending the cut once if the first walk misses.
pub fn crossing_pair(
    vertices: &[Vertex],
    hull: &ConvexHull,
    cut: &CutLine,
    cfg: &SliceCfg,
) -> Result<[Crossing; 2], SliceError> {
    let first = hull_crossings(vertices, hull, cut, cfg.cut_extent)?;
    if let [a, b] = first.as_slice() {
        return Ok([*a, *b]);
    }
    debug!(
        found = first.len(),
        "cut does not cross the fragment twice, extending both ends and retrying"
    );
    let extended = cut.extended(cfg.extend_factor);
    let second = hull_crossings(vertices, hull, &extended, cfg.cut_extent)?;
    match second.as_slice() {
        [a, b] => Ok([*a, *b]),
        other => Err(SliceError::NoIntersection { found: other.len() }),
    }
}

/// Line through both crossings, running the same way as `cut`.
pub fn crossing_line(pair: &[Crossing; 2], cut: &CutLine) -> CutLine {
    let line = CutLine::new(pair[0].vertex.pos, pair[1].vertex.pos);
    if line.direction().dot(&cut.direction()) < 0.0 {
        CutLine::new(line.p2, line.p1)
    } else {
        line
    }
}

/// Append `v` unless a member lies within `eps` in `(x, y, u, v)`.
pub fn push_unique(list: &mut Vec<Vertex>, v: Vertex, eps: f64) -> bool {
    let packed = v.packed();
    if list.iter().any(|w| (w.packed() - packed).norm() < eps) {
        return false;
    }
    list.push(v);
    true
}

/// Split `vertices` by `line`; both crossings go to both sides.
pub fn partition_vertices(
    vertices: &[Vertex],
    line: &CutLine,
    pair: &[Crossing; 2],
    eps: f64,
) -> Partition {
    let mut part = Partition::default();
    for &v in vertices {
        match line.side_of(v.pos) {
            Side::Right => {
                push_unique(&mut part.right, v, eps);
            }
            Side::Left => {
                push_unique(&mut part.left, v, eps);
            }
            Side::On => {
                push_unique(&mut part.right, v, eps);
                push_unique(&mut part.left, v, eps);
            }
        }
    }
    for c in pair {
        push_unique(&mut part.left, c.vertex, eps);
        push_unique(&mut part.right, c.vertex, eps);
    }
    part
}

/// Split one fragment along `cut` into `(left, right)`.
///
/// `fragment` itself is not modified; on error the caller keeps it as is.
pub fn slice_fragment<T: Triangulate + ?Sized>(
    fragment: &Fragment,
    cut: &CutLine,
    cfg: &SliceCfg,
    strategy: &T,
) -> Result<(Fragment, Fragment), SliceError> {
    let hull = fragment.hull(cfg.hull_pivot)?;
    let pair = crossing_pair(fragment.vertices(), &hull, cut, cfg)?;
    let line = crossing_line(&pair, cut);
    let part = partition_vertices(fragment.vertices(), &line, &pair, cfg.dedup_eps);
    if part.left.len() < 3 || part.right.len() < 3 {
        return Err(SliceError::triangulation(format!(
            "cut leaves {} vertices on the left and {} on the right",
            part.left.len(),
            part.right.len()
        )));
    }
    let strictly = |list: &[Vertex], side: Side| list.iter().any(|v| line.side_of(v.pos) == side);
    if !strictly(&part.left, Side::Left) || !strictly(&part.right, Side::Right) {
        return Err(SliceError::triangulation(
            "cut runs along the fragment boundary, one side has no area",
        ));
    }
    let left = Fragment::build(part.left, strategy)?;
    let right = Fragment::build(part.right, strategy)?;
    Ok((left, right))
}
