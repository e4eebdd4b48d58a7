use super::*;
use nalgebra::{vector, Vector2};
use proptest::prelude::*;
use std::collections::HashSet;

fn pts(raw: &[(f64, f64)]) -> Vec<Point2> {
    raw.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
}

#[test]
fn orientation_signs() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    assert_eq!(orientation(a, b, vector![1.0, 1.0]), Orientation::CounterClockwise);
    assert_eq!(orientation(a, b, vector![1.0, -1.0]), Orientation::Clockwise);
    assert_eq!(orientation(a, b, vector![5.0, 0.0]), Orientation::Colinear);
    assert_eq!(cross(a, b, vector![0.0, 2.0]), 2.0);
}

#[test]
fn distance_and_lerp() {
    let a = vector![1.0, 1.0];
    let b = vector![4.0, 5.0];
    assert!((distance(a, b) - 5.0).abs() < 1e-12);
    let m = lerp(a, b, 0.5);
    assert!((m - vector![2.5, 3.0]).norm() < 1e-12);
    assert!((lerp(a, b, 0.0) - a).norm() < 1e-12);
    assert!((lerp(a, b, 1.0) - b).norm() < 1e-12);
}

#[test]
fn areas() {
    let sq = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    assert!((signed_area(&sq) - 4.0).abs() < 1e-12);
    let rev: Vec<_> = sq.iter().rev().copied().collect();
    assert!((signed_area(&rev) + 4.0).abs() < 1e-12);
    assert!((triangle_area(sq[0], sq[2], sq[1]) - 2.0).abs() < 1e-12);
}

#[test]
fn hull_of_default_quad_order() {
    // Row-major quad corners, as produced by the default sprite fallback.
    let quad = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
    for rule in [HullPivot::Lowest, HullPivot::FirstInput] {
        let hull = convex_hull(&quad, rule).unwrap();
        assert_eq!(hull.indices, vec![0, 1, 3, 2]);
        assert!(signed_area(&hull.points) > 0.0);
    }
}

#[test]
fn hull_skips_interior_and_edge_points() {
    let p = pts(&[
        (0.5, 0.5),
        (0.0, 0.0),
        (0.5, 0.0),
        (1.0, 0.0),
        (1.0, 0.5),
        (1.0, 1.0),
        (0.0, 1.0),
    ]);
    let hull = convex_hull(&p, HullPivot::Lowest).unwrap();
    let got: HashSet<usize> = hull.indices.iter().copied().collect();
    assert_eq!(got, HashSet::from([1, 3, 5, 6]));
    assert_eq!(hull.indices[0], 1);
    for q in &p {
        assert!(hull.contains_eps(*q, 0.0));
    }
}

#[test]
fn hull_rejects_degenerate_sets() {
    let two = pts(&[(0.0, 0.0), (1.0, 0.0)]);
    assert!(matches!(
        convex_hull(&two, HullPivot::Lowest),
        Err(crate::SliceError::DegenerateHull { .. })
    ));
    let line = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    assert!(matches!(
        convex_hull(&line, HullPivot::FirstInput),
        Err(crate::SliceError::DegenerateHull { .. })
    ));
    let repeated = pts(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
    assert!(convex_hull(&repeated, HullPivot::Lowest).is_err());
}

#[test]
fn first_input_pivot_keeps_interior_pivot() {
    // Legacy behaviour: an interior first point ends up on the "hull".
    let p = pts(&[(0.5, 0.5), (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let legacy = convex_hull(&p, HullPivot::FirstInput).unwrap();
    assert_eq!(legacy.indices, vec![0, 1, 2, 3, 4]);
    let fixed = convex_hull(&p, HullPivot::Lowest).unwrap();
    assert_eq!(fixed.indices, vec![1, 2, 3, 4]);
}

#[test]
fn first_input_pivot_on_the_upper_right() {
    let p = pts(&[(1.0, 1.0), (0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    let hull = convex_hull(&p, HullPivot::FirstInput).unwrap();
    assert_eq!(hull.indices, vec![0, 3, 1, 2]);
    assert!((signed_area(&hull.points) - 1.0).abs() < 1e-12);
}

#[test]
fn first_input_triangle_comes_out_ccw() {
    let p = pts(&[(0.0, 0.0), (-1.0, 0.1), (-1.0, -0.1)]);
    let hull = convex_hull(&p, HullPivot::FirstInput).unwrap();
    assert_eq!(hull.indices, vec![0, 1, 2]);
    assert!(signed_area(&hull.points) > 0.0);
}

#[test]
fn edge_line_crossings() {
    let e1 = vector![0.0, 0.0];
    let e2 = vector![2.0, 0.0];
    let hit = segments_intersect(e1, e2, vector![1.0, -5.0], vector![1.0, -4.0]).unwrap();
    assert!((hit - vector![1.0, 0.0]).norm() < 1e-12);
    // Parallel.
    assert!(segments_intersect(e1, e2, vector![0.0, 1.0], vector![1.0, 1.0]).is_none());
    // Line crosses the edge's support outside the edge.
    assert!(segments_intersect(e1, e2, vector![3.0, -1.0], vector![3.0, 1.0]).is_none());
}

#[test]
fn crossing_at_endpoint_is_exact() {
    let e1 = vector![0.3, 0.7];
    let e2 = vector![0.9, 0.1];
    let hit = segments_intersect(e1, e2, vector![0.9, -5.0], vector![0.9, 5.0]).unwrap();
    assert_eq!(hit, e2);
    let next = segments_intersect(e2, vector![0.9, 2.0], vector![0.9, -5.0], vector![0.9, 5.0]);
    // The next edge lies on the line itself: parallel, no single crossing.
    assert!(next.is_none());
}

#[test]
fn bounded_crossing_needs_the_segment() {
    let e1 = vector![0.0, 0.0];
    let e2 = vector![0.0, 2.0];
    let short = CutLine::new(vector![0.5, 1.0], vector![1.0, 1.0]);
    assert!(bounded_segments_intersect(e1, e2, short.p1, short.p2).is_none());
    assert!(segments_intersect(e1, e2, short.p1, short.p2).is_some());
    let long = short.extended(10.0);
    let hit = bounded_segments_intersect(e1, e2, long.p1, long.p2).unwrap();
    assert!((hit - vector![0.0, 1.0]).norm() < 1e-12);
}

#[test]
fn sides_of_a_directed_line() {
    let a = vector![0.0, 0.0];
    let b = vector![0.0, 1.0];
    assert_eq!(side_of_line(vector![-1.0, 0.5], a, b), Side::Left);
    assert_eq!(side_of_line(vector![1.0, 0.5], a, b), Side::Right);
    assert_eq!(side_of_line(vector![0.0, 7.0], a, b), Side::On);
    let cut = CutLine::new(b, a);
    assert_eq!(cut.side_of(vector![-1.0, 0.5]), Side::Right);
}

#[test]
fn extend_grows_both_ends() {
    let mut cut = CutLine::new(vector![0.0, 0.0], vector![1.0, 0.0]);
    cut.extend(10.0);
    assert_eq!(cut.p1, vector![-10.0, 0.0]);
    assert_eq!(cut.p2, vector![11.0, 0.0]);
    // Direction is unchanged.
    assert!(cut.direction().x > 0.0 && cut.direction().y == 0.0);
}

fn grid_points() -> impl Strategy<Value = Vec<Point2>> {
    prop::collection::vec((-20i32..=20, -20i32..=20), 3..32).prop_map(|raw| {
        let mut seen = HashSet::new();
        raw.into_iter()
            .filter(|p| seen.insert(*p))
            .map(|(x, y)| Vector2::new(f64::from(x), f64::from(y)))
            .collect()
    })
}

proptest! {
    #[test]
    fn hull_is_ccw_and_contains_every_point(points in grid_points()) {
        prop_assume!(points.len() >= 3);
        let first = points[0];
        let spread = points.iter().any(|&c| {
            points.iter().any(|&b| orientation(first, b, c) != Orientation::Colinear)
        });
        prop_assume!(spread);

        let hull = convex_hull(&points, HullPivot::Lowest).unwrap();
        prop_assert!(hull.len() >= 3);
        let n = hull.len();
        for k in 0..n {
            prop_assert!(hull.indices[k] < points.len());
            prop_assert_eq!(hull.points[k], points[hull.indices[k]]);
            let turn = orientation(hull.points[k], hull.points[(k + 1) % n], hull.points[(k + 2) % n]);
            prop_assert_eq!(turn, Orientation::CounterClockwise);
        }
        for &p in &points {
            prop_assert!(hull.contains_eps(p, 0.0));
        }
    }
}

proptest! {
    #[test]
    fn first_input_from_any_hull_corner_matches_lowest(points in grid_points(), pick in any::<usize>()) {
        prop_assume!(points.len() >= 3);
        let Ok(reference) = convex_hull(&points, HullPivot::Lowest) else {
            return Ok(());
        };
        // Rotate a hull corner, usually not the lowest one, to the front.
        let corner = reference.indices[pick % reference.len()];
        let mut reordered = points.clone();
        reordered.swap(0, corner);

        // Three or more points on one ray from the pivot can exhaust the scan
        // on the first ray; that is a reported failure, not a wrong hull.
        let pivot = reordered[0];
        let crowded_ray = reordered[1..].iter().any(|&a| {
            reordered[1..]
                .iter()
                .filter(|&&b| {
                    orientation(pivot, a, b) == Orientation::Colinear
                        && (b - pivot).dot(&(a - pivot)) > 0.0
                })
                .count()
                >= 3
        });
        let hull = match convex_hull(&reordered, HullPivot::FirstInput) {
            Ok(hull) => hull,
            Err(err) => {
                prop_assert!(crowded_ray, "unexpected failure: {}", err);
                return Ok(());
            }
        };
        prop_assert_eq!(hull.indices[0], 0);
        prop_assert!(signed_area(&hull.points) > 0.0);
        let n = hull.len();
        for k in 0..n {
            let turn = orientation(hull.points[k], hull.points[(k + 1) % n], hull.points[(k + 2) % n]);
            prop_assert_ne!(turn, Orientation::Clockwise);
        }
        for q in &reference.points {
            prop_assert!(hull.points.contains(q));
        }
        for &q in &reordered {
            prop_assert!(hull.contains_eps(q, 0.0));
        }
    }
}
