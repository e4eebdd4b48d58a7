//! Slice jobs read from JSON and mesh records written back out.

use anyhow::{Context, Result};
use nalgebra::Vector2;
use polyslice::api::{
    CutExtent, CutLine, FragmentMesh, HullPivot, SliceCfg, SliceReport, Slicer, Vertex,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// `{ "vertices": [[x, y, u, v], ...]?, "cuts": [[x1, y1, x2, y2], ...], "config": {...}? }`
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct JobFile {
    /// Initial shape; the unit quad when absent.
    #[serde(default)]
    pub vertices: Option<Vec<[f64; 4]>>,
    pub cuts: Vec<[f64; 4]>,
    #[serde(default)]
    pub config: CfgOverrides,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtentArg {
    Line,
    Segment,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PivotArg {
    Lowest,
    FirstInput,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CfgOverrides {
    pub dedup_eps: Option<f64>,
    pub extend_factor: Option<f64>,
    pub cut_extent: Option<ExtentArg>,
    pub hull_pivot: Option<PivotArg>,
}

impl CfgOverrides {
    pub fn apply(&self, base: SliceCfg) -> SliceCfg {
        SliceCfg {
            dedup_eps: self.dedup_eps.unwrap_or(base.dedup_eps),
            extend_factor: self.extend_factor.unwrap_or(base.extend_factor),
            cut_extent: match self.cut_extent {
                Some(ExtentArg::Line) => CutExtent::Line,
                Some(ExtentArg::Segment) => CutExtent::Segment,
                None => base.cut_extent,
            },
            hull_pivot: match self.hull_pivot {
                Some(PivotArg::Lowest) => HullPivot::Lowest,
                Some(PivotArg::FirstInput) => HullPivot::FirstInput,
                None => base.hull_pivot,
            },
        }
    }
}

pub fn read_job(path: &Path) -> Result<JobFile> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing job {}", path.display()))
}

/// Build the slicer and apply every cut in order.
pub fn run_job(job: &JobFile) -> Result<(Slicer, Vec<SliceReport>)> {
    let cfg = job.config.apply(SliceCfg::default());
    let mut slicer = match &job.vertices {
        Some(raw) => {
            let verts = raw
                .iter()
                .map(|&[x, y, u, v]| Vertex::from_xyuv(x, y, u, v))
                .collect();
            Slicer::new(verts, cfg).context("building the initial fragment")?
        }
        None => Slicer::with_default_quad(cfg).context("building the default quad")?,
    };
    let reports: Vec<SliceReport> = job
        .cuts
        .iter()
        .map(|&[x1, y1, x2, y2]| {
            slicer.add_slice(CutLine::new(Vector2::new(x1, y1), Vector2::new(x2, y2)))
        })
        .collect();
    Ok((slicer, reports))
}

/// JSON shape of one `FragmentMesh`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MeshOut {
    pub id: usize,
    pub name: String,
    pub parent: Option<usize>,
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub tangents: Vec<[f32; 4]>,
    pub normals: Vec<[f32; 3]>,
    pub face_normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl MeshOut {
    pub fn new(mesh: &FragmentMesh, parent: Option<usize>) -> Self {
        Self {
            id: mesh.id.0,
            name: mesh.name.clone(),
            parent,
            positions: mesh.positions.iter().map(|p| [p.x, p.y, p.z]).collect(),
            uvs: mesh.uvs.iter().map(|t| [t.x, t.y]).collect(),
            tangents: mesh.tangents.iter().map(|t| [t.x, t.y, t.z, t.w]).collect(),
            normals: mesh.normals.iter().map(|n| [n.x, n.y, n.z]).collect(),
            face_normals: mesh.face_normals.iter().map(|n| [n.x, n.y, n.z]).collect(),
            indices: mesh.indices.clone(),
        }
    }
}

pub fn mesh_records(slicer: &Slicer) -> Vec<MeshOut> {
    slicer
        .meshes()
        .iter()
        .zip(slicer.fragments())
        .map(|(m, f)| MeshOut::new(m, f.parent().map(|p| p.0)))
        .collect()
}
