//! Seed edge search: brute-force scan over all pairs `i < j`.

use rayon::prelude::*;

use crate::geom::PointSet;

use super::edge::is_boundary_edge;
use super::types::{EdgeClass, HullError, SeedEdge};

/// First boundary edge in `(i, j)` lexicographic order.
pub fn find_seed<P: PointSet + ?Sized>(points: &P) -> Result<SeedEdge, HullError> {
    let n = points.count();
    for i in 0..n.saturating_sub(1) {
        for j in i + 1..n {
            match is_boundary_edge(points, i, j) {
                EdgeClass::InsufficientPoints => {
                    return Err(HullError::InsufficientPoints { count: n })
                }
                EdgeClass::NotAnEdge => continue,
                EdgeClass::Edge(side) => return Ok(SeedEdge { i, j, side }),
            }
        }
    }
    if n < 3 {
        // no pair at all (n < 2)
        return Err(HullError::InsufficientPoints { count: n });
    }
    Err(HullError::NoBoundaryEdge { count: n })
}

/// Same result as `find_seed`, with the pair tests spread over the rayon pool.
///
/// `find_map_first` keeps the lexicographically smallest success, so the seed
/// does not depend on scheduling.
pub fn find_seed_parallel<P: PointSet + Sync + ?Sized>(points: &P) -> Result<SeedEdge, HullError> {
    let n = points.count();
    if n < 3 {
        return Err(HullError::InsufficientPoints { count: n });
    }
    (0..n - 1)
        .into_par_iter()
        .flat_map_iter(|i| (i + 1..n).map(move |j| (i, j)))
        .find_map_first(|(i, j)| {
            is_boundary_edge(points, i, j)
                .side()
                .map(|side| SeedEdge { i, j, side })
        })
        .ok_or(HullError::NoBoundaryEdge { count: n })
}
