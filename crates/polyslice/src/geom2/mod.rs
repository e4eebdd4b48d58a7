//! 2D geometry kernel for fragment slicing.
//!
//! Purpose
//! - Primitives (`Point2`, `Vertex`), the exact orientation predicate, the
//!   Graham-scan hull, and edge/line intersection used by the slicer.
//! - Keep predicates explicit: orientation and side tests compare against an
//!   exact zero; tolerances live in `SliceCfg` and are applied by callers.
//!
//! Code cross-refs: `slicer::slice_fragment`, `triangulate::HullTriangulator`

pub mod hull;
pub mod lines;
pub mod rand;
mod types;
mod util;

pub use hull::{convex_hull, vertex_hull, ConvexHull};
pub use lines::{bounded_segments_intersect, segments_intersect, side_of_line, CutLine, Side};
pub use types::{CutExtent, HullPivot, Point2, SliceCfg, TexCoord, Vertex};
pub use util::{cross, distance, lerp, orientation, signed_area, triangle_area, Orientation};

#[cfg(test)]
mod tests;
