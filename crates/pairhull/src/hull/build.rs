//! Chain construction: seed edge, one-ended growth, freeze.

use crate::geom::PointSet;

use super::edge::is_boundary_edge;
use super::seed::{find_seed, find_seed_parallel};
use super::types::{Closure, Hull, HullCfg, HullError, SeedEdge};

/// Compute the boundary chain of `points` with the sequential seed scan.
///
/// Returns the indices starting at the fixed seed end, or `InsufficientPoints`
/// for fewer than 3 points. Running out of candidates is not an error unless
/// `cfg.require_closed` is set; inspect `Hull::closure` otherwise.
pub fn build_hull<P: PointSet + ?Sized>(points: &P, cfg: HullCfg) -> Result<Hull, HullError> {
    let seed = find_seed(points)?;
    grow_from_seed(points, seed, cfg)
}

/// Same result as `build_hull`, with the seed pair search on the rayon pool.
pub fn build_hull_parallel<P: PointSet + Sync + ?Sized>(
    points: &P,
    cfg: HullCfg,
) -> Result<Hull, HullError> {
    let seed = find_seed_parallel(points)?;
    grow_from_seed(points, seed, cfg)
}

/// Convenience: sequential seed search, tolerant termination.
pub fn hull_with_defaults<P: PointSet + ?Sized>(points: &P) -> Result<Hull, HullError> {
    build_hull(points, HullCfg::default())
}

fn grow_from_seed<P: PointSet + ?Sized>(
    points: &P,
    seed: SeedEdge,
    cfg: HullCfg,
) -> Result<Hull, HullError> {
    tracing::debug!(
        n = points.count(),
        seed_i = seed.i,
        seed_j = seed.j,
        side = %seed.side,
        "seed edge"
    );
    let mut chain = ChainBuilder::new(points, seed);
    chain.grow();
    let hull = chain.freeze();
    tracing::debug!(len = hull.len(), closure = %hull.closure, "growth done");
    if cfg.require_closed && !hull.is_closed() {
        return Err(HullError::IncompleteHull {
            chain_len: hull.len(),
        });
    }
    Ok(hull)
}

/// Growth state: membership flags plus the chain itself.
///
/// `chain[0]` is the fixed end (seed `j`), `chain.last()` the growing end.
struct ChainBuilder<'a, P: ?Sized> {
    points: &'a P,
    in_chain: Vec<bool>,
    chain: Vec<usize>,
    seed: SeedEdge,
}

impl<'a, P: PointSet + ?Sized> ChainBuilder<'a, P> {
    fn new(points: &'a P, seed: SeedEdge) -> Self {
        let mut in_chain = vec![false; points.count()];
        in_chain[seed.i] = true;
        in_chain[seed.j] = true;
        Self {
            points,
            in_chain,
            chain: vec![seed.j, seed.i],
            seed,
        }
    }

    #[inline]
    fn growing_end(&self) -> usize {
        self.chain[self.chain.len() - 1]
    }

    #[inline]
    fn target_end(&self) -> usize {
        self.chain[0]
    }

    /// Lowest unmarked index forming a boundary edge with `from`.
    fn next_candidate(&self, from: usize) -> Option<usize> {
        (0..self.points.count())
            .filter(|&c| !self.in_chain[c])
            .find(|&c| is_boundary_edge(self.points, from, c).is_edge())
    }

    fn accept(&mut self, c: usize) {
        debug_assert!(!self.in_chain[c], "point {c} accepted twice");
        self.in_chain[c] = true;
        self.chain.push(c);
        tracing::trace!(point = c, len = self.chain.len(), "accept");
    }

    fn grow(&mut self) {
        while let Some(c) = self.next_candidate(self.growing_end()) {
            self.accept(c);
        }
    }

    /// The target end is marked from the start, so the scan never offers it.
    /// Reconnection is checked once the unmarked candidates are exhausted: the
    /// chain is closed iff it spans a polygon and its growing end forms a
    /// boundary edge with the target end.
    fn closure(&self) -> Closure {
        if self.chain.len() >= 3
            && is_boundary_edge(self.points, self.growing_end(), self.target_end()).is_edge()
        {
            Closure::Closed
        } else {
            Closure::Exhausted
        }
    }

    fn freeze(self) -> Hull {
        let closure = self.closure();
        Hull {
            order: self.chain,
            seed: (self.seed.i, self.seed.j),
            closure,
        }
    }
}
