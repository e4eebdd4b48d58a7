//! Basic 2D types and tolerances for fragment slicing.
//!
//! - `Point2`/`TexCoord`: nalgebra column vectors (positions and UVs).
//! - `Vertex`: a position with its texture coordinate.
//! - `SliceCfg`: centralizes the dedup epsilon, extension factor, and the
//!   hull/cut modes so call sites never juggle loose constants.
//!
//! Code cross-refs: `hull::convex_hull`, `lines::CutLine`, `slicer::slice_fragment`

use nalgebra::{Vector2, Vector4};

/// Position in fragment space.
pub type Point2 = Vector2<f64>;
/// Texture coordinate `(u, v)` attached to a position.
pub type TexCoord = Vector2<f64>;

/// A fragment corner: position plus texture coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub pos: Point2,
    pub uv: TexCoord,
}

impl Vertex {
    #[inline]
    pub fn new(pos: Point2, uv: TexCoord) -> Self {
        Self { pos, uv }
    }

    /// Shorthand for `Vertex::new(Vector2::new(x, y), Vector2::new(u, v))`.
    #[inline]
    pub fn from_xyuv(x: f64, y: f64, u: f64, v: f64) -> Self {
        Self::new(Vector2::new(x, y), Vector2::new(u, v))
    }

    /// `(x, y, u, v)`; dedup distances are measured in this space.
    #[inline]
    pub fn packed(&self) -> Vector4<f64> {
        Vector4::new(self.pos.x, self.pos.y, self.uv.x, self.uv.y)
    }
}

/// Which point anchors the Graham scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HullPivot {
    /// Lowest, then leftmost point. Hull is correct for any input order.
    #[default]
    Lowest,
    /// First point in input order. Matches the legacy sprite slicer, which
    /// yields a non-convex "hull" when that point is not extremal.
    FirstInput,
}

/// How far a cut line reaches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CutExtent {
    /// Infinite line through the two endpoints.
    #[default]
    Line,
    /// Only the drawn segment; the one-shot extension retry can then grow it.
    Segment,
}

/// Slicing configuration (tolerances and modes).
#[derive(Clone, Copy, Debug)]
pub struct SliceCfg {
    /// Two vertices closer than this in `(x, y, u, v)` are the same vertex.
    pub dedup_eps: f64,
    /// Multiplier used by `CutLine::extend` on the retry.
    pub extend_factor: f64,
    pub cut_extent: CutExtent,
    pub hull_pivot: HullPivot,
}

impl Default for SliceCfg {
    fn default() -> Self {
        Self {
            dedup_eps: 1e-3,
            extend_factor: 10.0,
            cut_extent: CutExtent::Line,
            hull_pivot: HullPivot::Lowest,
        }
    }
}
