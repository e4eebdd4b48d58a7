//! Recursive fragment slicing over an arena of fragments.
//!
//! Purpose
//! - Own every fragment cut from one initial shape, plus the history of cuts.
//! - Apply each cut to all fragments that existed when the cut was issued.
//!
//! Semantics of `Slicer::add_slice`
//! - Snapshot: only ids `0..len` at call time are visited; siblings created by
//!   the call are left for later cuts.
//! - A successful split keeps the left half under the original id and appends
//!   the right half with `parent` pointing at the original.
//! - A failed fragment is logged, reported, and left untouched; fragments
//!   already split earlier in the same call stay split.
//! - The cut stays in the history only if at least one fragment was split.
//!
//! Code cross-refs: `split::slice_fragment`, `mesh::assemble`, `triangulate::Triangulate`

mod split;
mod types;

pub use split::{
    crossing_line, crossing_pair, hull_crossings, partition_vertices, push_unique, slice_fragment,
    Crossing, Partition,
};
pub use types::{Fragment, FragmentId, FragmentOutcome, SliceHistory, SliceReport};

use tracing::{debug, info, warn};

use crate::error::SliceError;
use crate::geom2::{CutLine, SliceCfg, Vertex};
use crate::mesh::{assemble, FragmentMesh};
use crate::triangulate::{HullTriangulator, Triangulate};

/// Unit quad corners in row-major order, UV equal to position.
pub fn default_quad() -> Vec<Vertex> {
    let mut quad = Vec::with_capacity(4);
    for y in 0..=1 {
        for x in 0..=1 {
            let (x, y) = (f64::from(x), f64::from(y));
            quad.push(Vertex::from_xyuv(x, y, x, y));
        }
    }
    quad
}

/// Fragment arena plus cut history.
#[derive(Clone, Debug)]
pub struct Slicer<T: Triangulate = HullTriangulator> {
    cfg: SliceCfg,
    triangulator: T,
    fragments: Vec<Fragment>,
    history: SliceHistory,
}

impl Slicer<HullTriangulator> {
    /// Start from an initial shape (≥3 vertices, not all colinear).
    pub fn new(initial: Vec<Vertex>, cfg: SliceCfg) -> Result<Self, SliceError> {
        Self::with_triangulator(initial, cfg, HullTriangulator)
    }

    /// Start from the unit quad, the fallback when no sprite shape is given.
    pub fn with_default_quad(cfg: SliceCfg) -> Result<Self, SliceError> {
        Self::new(default_quad(), cfg)
    }
}

impl<T: Triangulate> Slicer<T> {
    pub fn with_triangulator(
        initial: Vec<Vertex>,
        cfg: SliceCfg,
        triangulator: T,
    ) -> Result<Self, SliceError> {
        let first = Fragment::build(initial, &triangulator)?;
        // Three colinear vertices triangulate trivially; the hull catches them.
        first.hull(cfg.hull_pivot)?;
        debug!(
            vertices = first.vertices().len(),
            triangles = first.triangles().len(),
            "initial fragment built"
        );
        Ok(Self {
            cfg,
            triangulator,
            fragments: vec![first],
            history: SliceHistory::default(),
        })
    }

    /// Cut every fragment that exists right now along `cut`.
    pub fn add_slice(&mut self, cut: CutLine) -> SliceReport {
        self.history.push(cut);
        let snapshot = self.fragments.len();
        let mut report = SliceReport::default();
        for idx in 0..snapshot {
            let id = FragmentId(idx);
            let result =
                slice_fragment(&self.fragments[idx], &cut, &self.cfg, &self.triangulator);
            let result = match result {
                Ok((left, right)) => {
                    let parent = self.fragments[idx].parent();
                    self.fragments[idx] = left.with_parent(parent);
                    let sibling = FragmentId(self.fragments.len());
                    self.fragments.push(right.with_parent(Some(id)));
                    debug!(fragment = idx, sibling = sibling.0, "fragment split");
                    Ok(sibling)
                }
                Err(err) => {
                    warn!(fragment = idx, %err, "slice skipped for fragment");
                    Err(err)
                }
            };
            report.outcomes.push(FragmentOutcome {
                fragment: id,
                result,
            });
        }
        if report.is_noop() {
            self.history.pop();
            info!(visited = snapshot, "cut did not split any fragment, discarded");
        } else {
            info!(
                split = report.split_count(),
                fragments = self.fragments.len(),
                "cut applied"
            );
        }
        report
    }

    #[inline]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    #[inline]
    pub fn fragment(&self, id: FragmentId) -> Option<&Fragment> {
        self.fragments.get(id.0)
    }

    pub fn ids(&self) -> impl Iterator<Item = FragmentId> {
        (0..self.fragments.len()).map(FragmentId)
    }

    #[inline]
    pub fn history(&self) -> &SliceHistory {
        &self.history
    }

    #[inline]
    pub fn cfg(&self) -> &SliceCfg {
        &self.cfg
    }

    /// Sum of all fragments' triangulated areas.
    pub fn total_area(&self) -> f64 {
        self.fragments.iter().map(Fragment::area).sum()
    }

    /// Renderable records for every fragment, in arena order.
    pub fn meshes(&self) -> Vec<FragmentMesh> {
        self.ids()
            .zip(&self.fragments)
            .map(|(id, f)| assemble(id, f))
            .collect()
    }
}
