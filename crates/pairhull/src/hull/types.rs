//! Result, error and configuration types for the hull search.
//!
//! Kept small and explicit to make `edge`, `seed` and `build` easy to read.

use std::fmt;

use crate::geom::Side;

/// Outcome of testing one candidate pair with `is_boundary_edge`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeClass {
    /// No third point exists to test against (fewer than 3 points).
    InsufficientPoints,
    /// At least two other points lie on different sides.
    NotAnEdge,
    /// Every other point lies on the carried side.
    Edge(Side),
}

impl EdgeClass {
    #[inline]
    pub fn is_edge(self) -> bool {
        matches!(self, EdgeClass::Edge(_))
    }
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            EdgeClass::Edge(s) => Some(s),
            _ => None,
        }
    }
}

/// How the growth phase stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Closure {
    /// The growing end connects back to the fixed seed end through a boundary edge.
    Closed,
    /// No unmarked candidate was found and the chain does not close.
    /// The sequence may be an open, truncated piece of the hull.
    Exhausted,
}

impl fmt::Display for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Closure::Closed => f.write_str("closed"),
            Closure::Exhausted => f.write_str("exhausted"),
        }
    }
}

/// Builder configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullCfg {
    /// Turn `Closure::Exhausted` into `HullError::IncompleteHull`.
    pub require_closed: bool,
}

/// The first boundary edge found by the pair search, `i < j`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedEdge {
    pub i: usize,
    pub j: usize,
    pub side: Side,
}

/// Frozen boundary chain.
///
/// `order` starts at the fixed seed end `j`, continues with the other seed
/// point `i`, then lists the grown points in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hull {
    pub order: Vec<usize>,
    pub seed: (usize, usize),
    pub closure: Closure,
}

impl Hull {
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closure == Closure::Closed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consecutive index pairs along the chain, plus the closing pair when closed.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut out: Vec<(usize, usize)> = self.order.windows(2).map(|w| (w[0], w[1])).collect();
        if self.is_closed() && self.order.len() >= 3 {
            if let (Some(&last), Some(&first)) = (self.order.last(), self.order.first()) {
                out.push((last, first));
            }
        }
        out
    }
}

impl fmt::Display for Hull {
    /// Space-separated indices.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, idx) in self.order.iter().enumerate() {
            if k > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{idx}")?;
        }
        Ok(())
    }
}

/// Errors surfaced by the hull search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than 3 points; the edge test has nothing to compare against.
    InsufficientPoints { count: usize },
    /// No pair passed the edge test (only reachable with non-finite coordinates).
    NoBoundaryEdge { count: usize },
    /// Growth ran out of candidates before reconnecting (only with `require_closed`).
    IncompleteHull { chain_len: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::InsufficientPoints { count } => {
                write!(f, "there must be at least 3 points (got {count})")
            }
            HullError::NoBoundaryEdge { count } => {
                write!(f, "no boundary edge among {count} points")
            }
            HullError::IncompleteHull { chain_len } => write!(
                f,
                "hull did not close: growth stopped after {chain_len} points"
            ),
        }
    }
}

impl std::error::Error for HullError {}
