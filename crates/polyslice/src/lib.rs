//! Convex fragment slicing for 2D sprites.
//!
//! A shape (vertex positions with texture coordinates) is cut by straight
//! lines into convex fragments. Each fragment keeps its own vertices and
//! triangle list, ready to be packed into a renderable mesh.
//!
//! Layout
//! - `geom2`: points, hulls, cut lines, random inputs.
//! - `triangulate`: triangle lists for a fragment's vertex set.
//! - `slicer`: the fragment arena and the per-fragment split.
//! - `mesh`: renderer-facing buffers.

pub mod api;
pub mod error;
pub mod geom2;
pub mod mesh;
pub mod slicer;
pub mod triangulate;

pub use error::SliceError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_cut_through, draw_fragment_radial, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::geom2::{CutExtent, CutLine, HullPivot, Point2, SliceCfg, TexCoord, Vertex};
    pub use crate::mesh::FragmentMesh;
    pub use crate::slicer::{Fragment, FragmentId, SliceReport, Slicer};
    pub use crate::SliceError;
    pub use nalgebra::Vector2 as Vec2;
}
