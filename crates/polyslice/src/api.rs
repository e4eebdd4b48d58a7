//! Curated surface for the CLI and demos.
//!
//! Not a stable API; re-exports move when the modules behind them do.

// Geometry kernel
pub use crate::geom2::{
    convex_hull, segments_intersect, side_of_line, ConvexHull, CutExtent, CutLine, HullPivot,
    Point2, Side, SliceCfg, TexCoord, Vertex,
};
// Random inputs
pub use crate::geom2::rand::{
    draw_cut_through, draw_fragment_radial, RadialCfg, ReplayToken as FragmentReplay, VertexCount,
};
// Slicing and output
pub use crate::mesh::{assemble, FragmentMesh, DEFAULT_TANGENT};
pub use crate::slicer::{
    default_quad, Fragment, FragmentId, FragmentOutcome, SliceHistory, SliceReport, Slicer,
};
pub use crate::triangulate::{triangulate_vertices, HullTriangulator, Triangle, Triangulate};
pub use crate::SliceError;
