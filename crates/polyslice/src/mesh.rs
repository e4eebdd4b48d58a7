//! Renderable per-fragment records.
//!
//! The renderer consumes `f32` buffers: positions lifted to z = 0, UVs, a
//! fixed tangent per vertex, flat face normals, averaged vertex normals, and
//! a flat `u32` index list. No geometry decisions are made here.

use nalgebra::{Vector2, Vector3, Vector4};

use crate::slicer::{Fragment, FragmentId};

/// Tangent attached to every vertex (x axis, handedness −1).
pub const DEFAULT_TANGENT: Vector4<f32> = Vector4::new(1.0, 0.0, 0.0, -1.0);

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentMesh {
    pub id: FragmentId,
    pub name: String,
    pub positions: Vec<Vector3<f32>>,
    pub uvs: Vec<Vector2<f32>>,
    pub tangents: Vec<Vector4<f32>>,
    pub normals: Vec<Vector3<f32>>,
    pub face_normals: Vec<Vector3<f32>>,
    pub indices: Vec<u32>,
}

impl FragmentMesh {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Pack `fragment` for the renderer.
pub fn assemble(id: FragmentId, fragment: &Fragment) -> FragmentMesh {
    let vertices = fragment.vertices();
    let lifted: Vec<Vector3<f64>> = vertices
        .iter()
        .map(|v| Vector3::new(v.pos.x, v.pos.y, 0.0))
        .collect();

    let mut face_normals = Vec::with_capacity(fragment.triangles().len());
    let mut accum = vec![Vector3::<f64>::zeros(); vertices.len()];
    let mut indices = Vec::with_capacity(fragment.triangles().len() * 3);
    for tri in fragment.triangles() {
        let [a, b, c] = tri.0;
        let n = (lifted[b] - lifted[a])
            .cross(&(lifted[c] - lifted[a]))
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(Vector3::z);
        for i in [a, b, c] {
            accum[i] += n;
            indices.push(i as u32);
        }
        face_normals.push(n.cast::<f32>());
    }

    let normals = accum
        .into_iter()
        .map(|n| {
            n.try_normalize(f64::EPSILON)
                .unwrap_or_else(Vector3::z)
                .cast::<f32>()
        })
        .collect();

    FragmentMesh {
        id,
        name: format!("Fragment{}", id.0 + 1),
        positions: lifted.iter().map(|p| p.cast::<f32>()).collect(),
        uvs: vertices.iter().map(|v| v.uv.cast::<f32>()).collect(),
        tangents: vec![DEFAULT_TANGENT; vertices.len()],
        normals,
        face_normals,
        indices,
    }
}
