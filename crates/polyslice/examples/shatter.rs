//! Shatter the unit quad with random cuts and print per-fragment counts.
//!
//! Usage:
//!   cargo run -p polyslice --example shatter -- 6
//!
//! Prints one line per cut (fragments visited, split, failed) followed by a
//! table of fragments with vertex/triangle counts and areas.

use polyslice::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() {
    let cuts: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let mut slicer = match Slicer::with_default_quad(SliceCfg::default()) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("cannot build the default quad: {err}");
            return;
        }
    };
    let mut rng = StdRng::seed_from_u64(2025);
    for i in 0..cuts {
        let c = Vec2::new(rng.gen_range(0.1..0.9), rng.gen_range(0.1..0.9));
        let th: f64 = rng.gen::<f64>() * std::f64::consts::PI;
        let d = Vec2::new(th.cos(), th.sin()) * 2.0;
        let report = slicer.add_slice(CutLine::new(c - d, c + d));
        println!(
            "cut {i}: visited={}, split={}, failed={}",
            report.outcomes.len(),
            report.split_count(),
            report.errors().count()
        );
    }
    for (id, f) in slicer.fragments().iter().enumerate() {
        println!(
            "fragment {id}: V={}, T={}, area={:.4}, parent={:?}",
            f.vertices().len(),
            f.triangles().len(),
            f.area(),
            f.parent().map(|p| p.0)
        );
    }
    println!("total area = {:.6}", slicer.total_area());
}
