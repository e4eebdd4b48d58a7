//! Criterion benchmarks for hulls, triangulation, and repeated slicing.
//! Focus sizes: n in {4, 8, 16, 32} hull corners; k in {1, 4, 8} cuts.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p polyslice

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use polyslice::geom2::rand::{draw_cut_through, draw_fragment_radial, RadialCfg, ReplayToken, VertexCount};
use polyslice::geom2::{convex_hull, CutLine, HullPivot, Point2, SliceCfg, Vertex};
use polyslice::slicer::Slicer;
use polyslice::triangulate::{triangulate_vertices, HullTriangulator};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn fragment(n: usize, seed: u64) -> Vec<Vertex> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    (0..)
        .find_map(|i| draw_fragment_radial(cfg, ReplayToken::new(seed, i)))
        .unwrap_or_default()
}

fn random_cloud(n: usize, seed: u64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Vector2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect()
}

fn random_cuts(k: usize, seed: u64) -> Vec<CutLine> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..k)
        .map(|_| {
            let c = Vector2::new(rng.gen_range(0.2..0.8), rng.gen_range(0.2..0.8));
            let th: f64 = rng.gen::<f64>() * std::f64::consts::PI;
            let d = Vector2::new(th.cos(), th.sin()) * 3.0;
            CutLine::new(c - d, c + d)
        })
        .collect()
}

fn bench_slicing(c: &mut Criterion) {
    let mut group = c.benchmark_group("polyslice");
    for &n in &[4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("convex_hull", n), &n, |b, &n| {
            b.iter_batched(
                || random_cloud(n, 41),
                |pts| {
                    let _hull = convex_hull(&pts, HullPivot::Lowest);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("triangulate", n), &n, |b, &n| {
            b.iter_batched(
                || fragment(n, 42),
                |mut verts| {
                    let _tris = triangulate_vertices(&mut verts, &HullTriangulator);
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("centroid_cut", n), &n, |b, &n| {
            let verts = fragment(n, 43);
            let loop_pts: Vec<Point2> = verts.iter().map(|v| v.pos).collect();
            let cut = draw_cut_through(&loop_pts, ReplayToken::new(43, 0));
            b.iter_batched(
                || Slicer::new(verts.clone(), SliceCfg::default()),
                |slicer| {
                    if let (Ok(mut slicer), Some(cut)) = (slicer, cut) {
                        let _report = slicer.add_slice(cut);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    for &k in &[1usize, 4, 8] {
        group.bench_with_input(BenchmarkId::new("shatter_quad", k), &k, |b, &k| {
            b.iter_batched(
                || random_cuts(k, 44),
                |cuts| {
                    let Ok(mut slicer) = Slicer::with_default_quad(SliceCfg::default()) else {
                        return;
                    };
                    for cut in cuts {
                        let _report = slicer.add_slice(cut);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_slicing);
criterion_main!(benches);
