use std::cmp::Ordering;

use super::types::Point2;

/// Turn direction of the ordered triple `(a, b, c)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Colinear,
    Clockwise,
    CounterClockwise,
}

/// Raw cross product `(b - a) × (c - a)`; positive for a CCW turn.
#[inline]
pub fn cross(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Orientation from the sign of `cross(a, b, c)`.
///
/// Exact zero is the only colinear case; there is no tolerance band, so
/// nearly colinear triples classify by rounding noise.
#[inline]
pub fn orientation(a: Point2, b: Point2, c: Point2) -> Orientation {
    match cross(a, b, c).partial_cmp(&0.0) {
        Some(Ordering::Greater) => Orientation::CounterClockwise,
        Some(Ordering::Less) => Orientation::Clockwise,
        _ => Orientation::Colinear,
    }
}

#[inline]
pub fn distance(a: Point2, b: Point2) -> f64 {
    (b - a).norm()
}

/// `a + (b - a) * t`, unclamped.
#[inline]
pub fn lerp(a: Point2, b: Point2, t: f64) -> Point2 {
    a.lerp(&b, t)
}

/// Shoelace signed area of a closed loop; positive when CCW.
pub fn signed_area(loop_pts: &[Point2]) -> f64 {
    let n = loop_pts.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let p = loop_pts[i];
        let q = loop_pts[(i + 1) % n];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}

#[inline]
pub fn triangle_area(a: Point2, b: Point2, c: Point2) -> f64 {
    0.5 * cross(a, b, c).abs()
}
