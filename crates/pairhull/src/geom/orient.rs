use super::types::{Point, Side};

/// Z component of `(b - a) × (c - a)`.
///
/// Positive when `c` is to the left of the directed line `a → b`.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Which side of `a → b` the point `c` lies on.
///
/// Pre: `a != b` (otherwise every `c` classifies as `Right`).
/// Post: `Left` iff the cross product is strictly positive; zero folds into `Right`.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Side {
    if cross(a, b, c) > 0.0 {
        Side::Left
    } else {
        Side::Right
    }
}
