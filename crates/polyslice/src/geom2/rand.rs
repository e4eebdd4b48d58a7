//! Random convex fragments and cut lines (radial jitter + replay tokens).
//!
//! Purpose
//! - Reproducible inputs for property tests, benches, and the demo binary.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, keep the convex hull of the resulting points.
//! - UVs map the fragment's bounding box onto the unit square, like a sprite
//!   filling its texture.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `hull::convex_hull`, `lines::CutLine`

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::hull::convex_hull;
use super::lines::CutLine;
use super::types::{HullPivot, Point2, Vertex};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Point2,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 12 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            center: Vector2::zeros(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw a random convex fragment: hull corners in CCW order with bbox UVs.
///
/// Returns `None` only if the jittered points collapse (not expected for
/// sane configs).
pub fn draw_fragment_radial(cfg: RadialCfg, tok: ReplayToken) -> Option<Vec<Vertex>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let pts: Vec<Point2> = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            cfg.center + Vector2::new(th.cos(), th.sin()) * r
        })
        .collect();

    let hull = convex_hull(&pts, HullPivot::Lowest).ok()?;
    let (lo, hi) = bounding_box(&hull.points);
    let span = hi - lo;
    if span.x <= 0.0 || span.y <= 0.0 {
        return None;
    }
    Some(
        hull.points
            .iter()
            .map(|&p| {
                let uv = (p - lo).component_div(&span);
                Vertex::new(p, uv)
            })
            .collect(),
    )
}

/// Random cut through the area centroid of a convex CCW loop.
///
/// The segment reaches past the loop on both sides, so with `CutExtent::Line`
/// and `CutExtent::Segment` alike it crosses the boundary twice.
pub fn draw_cut_through(loop_pts: &[Point2], tok: ReplayToken) -> Option<CutLine> {
    let mut rng = tok.to_std_rng();
    let c = polygon_area_centroid(loop_pts)?;
    let reach = loop_pts
        .iter()
        .map(|p| (p - c).norm())
        .fold(0.0, f64::max)
        * 2.0;
    let th = rng.gen::<f64>() * std::f64::consts::PI;
    let d = Vector2::new(th.cos(), th.sin()) * reach;
    Some(CutLine::new(c - d, c + d))
}

fn bounding_box(pts: &[Point2]) -> (Point2, Point2) {
    let mut lo = Vector2::repeat(f64::INFINITY);
    let mut hi = Vector2::repeat(f64::NEG_INFINITY);
    for p in pts {
        lo = lo.inf(p);
        hi = hi.sup(p);
    }
    (lo, hi)
}

/// Polygon area centroid (assumes vertices in CCW order, non-degenerate).
pub fn polygon_area_centroid(verts: &[Point2]) -> Option<Point2> {
    if verts.len() < 3 {
        return None;
    }
    let mut a: f64 = 0.0;
    let mut cx: f64 = 0.0;
    let mut cy: f64 = 0.0;
    for i in 0..verts.len() {
        let p = verts[i];
        let q = verts[(i + 1) % verts.len()];
        let cross = p.x * q.y - q.x * p.y;
        a += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    a *= 0.5;
    if a.abs() < 1e-18 {
        return None;
    }
    Some(Vector2::new(cx / (6.0 * a), cy / (6.0 * a)))
}
