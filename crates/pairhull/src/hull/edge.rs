use crate::geom::{orientation, PointSet, Side};

use super::types::EdgeClass;

/// Classify the pair `(i, j)` against every other point.
///
/// The first other point fixes the reference side; the scan stops at the
/// first point on the opposite side. O(N) per call.
///
/// Pre: `i != j`, both `< points.count()`.
pub fn is_boundary_edge<P: PointSet + ?Sized>(points: &P, i: usize, j: usize) -> EdgeClass {
    debug_assert!(i != j, "edge test needs two distinct indices");
    let a = points.get(i);
    let b = points.get(j);
    let mut reference: Option<Side> = None;
    for k in 0..points.count() {
        if k == i || k == j {
            continue;
        }
        let side = orientation(a, b, points.get(k));
        match reference {
            None => reference = Some(side),
            Some(r) if r != side => return EdgeClass::NotAnEdge,
            Some(_) => {}
        }
    }
    match reference {
        Some(side) => EdgeClass::Edge(side),
        None => EdgeClass::InsufficientPoints,
    }
}
