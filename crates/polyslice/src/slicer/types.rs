//! Data types for the slicer arena: fragments, handles, history, reports.

use crate::error::SliceError;
use crate::geom2::{vertex_hull, ConvexHull, CutLine, HullPivot, Point2, Vertex};
use crate::triangulate::{total_area, triangulate_vertices, Triangle, Triangulate};

/// Stable handle into the slicer's fragment arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FragmentId(pub usize);

/// An independently triangulated polygon piece.
///
/// Invariants:
/// - `triangles` index into `vertices` and are rebuilt whenever the vertex
///   set changes (construction is the only way to change it).
/// - The hull is derived on demand and never cached.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    vertices: Vec<Vertex>,
    triangles: Vec<Triangle>,
    parent: Option<FragmentId>,
}

impl Fragment {
    /// Normalize and triangulate `vertices` (see `triangulate_vertices`).
    pub fn build<T: Triangulate + ?Sized>(
        mut vertices: Vec<Vertex>,
        strategy: &T,
    ) -> Result<Self, SliceError> {
        let triangles = triangulate_vertices(&mut vertices, strategy)?;
        Ok(Self {
            vertices,
            triangles,
            parent: None,
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Fragment this one was split off from, if any.
    #[inline]
    pub fn parent(&self) -> Option<FragmentId> {
        self.parent
    }

    pub(crate) fn with_parent(mut self, parent: Option<FragmentId>) -> Self {
        self.parent = parent;
        self
    }

    pub fn positions(&self) -> Vec<Point2> {
        self.vertices.iter().map(|v| v.pos).collect()
    }

    pub fn hull(&self, pivot: HullPivot) -> Result<ConvexHull, SliceError> {
        vertex_hull(&self.vertices, pivot)
    }

    /// Area covered by the triangle list.
    pub fn area(&self) -> f64 {
        total_area(&self.triangles, &self.positions())
    }
}

/// Cuts applied so far, oldest first. Diagnostics only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliceHistory {
    cuts: Vec<CutLine>,
}

impl SliceHistory {
    pub(crate) fn push(&mut self, cut: CutLine) {
        self.cuts.push(cut);
    }

    pub(crate) fn pop(&mut self) -> Option<CutLine> {
        self.cuts.pop()
    }

    #[inline]
    pub fn latest(&self) -> Option<&CutLine> {
        self.cuts.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CutLine> {
        self.cuts.iter()
    }
}

/// What happened to one fragment during `Slicer::add_slice`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentOutcome {
    pub fragment: FragmentId,
    /// Id of the new right-hand sibling on success.
    pub result: Result<FragmentId, SliceError>,
}

/// Per-fragment outcomes of one `add_slice` call, in arena order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SliceReport {
    pub outcomes: Vec<FragmentOutcome>,
}

impl SliceReport {
    pub fn split_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// True when no fragment was split.
    pub fn is_noop(&self) -> bool {
        self.split_count() == 0
    }

    pub fn errors(&self) -> impl Iterator<Item = (FragmentId, &SliceError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.fragment, e)))
    }
}
