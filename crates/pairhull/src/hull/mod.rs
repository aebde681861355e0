//! Brute-force hull search over point pairs.
//!
//! Purpose
//! - Find one boundary edge by testing all pairs, then walk the hull from one
//!   of its endpoints, each step taking the lowest-indexed unvisited point that
//!   forms a boundary edge with the current end.
//! - Report how the walk ended (`Closure`) instead of guessing: running out of
//!   candidates can leave an open chain when boundary points are collinear.
//!
//! Layout
//! - `edge`: the per-pair test (`is_boundary_edge`), O(N).
//! - `seed`: first boundary edge, sequential or on the rayon pool.
//! - `build`: membership flags, chain growth and the frozen `Hull`. Only
//!   `build_hull_parallel` needs a `Sync` point set.
//!
//! Cost is O(N³) in the worst case: O(N²) pairs for the seed, O(N) candidates
//! per growth step, O(N) per test.

mod build;
mod edge;
mod seed;
mod types;

pub use build::{build_hull, build_hull_parallel, hull_with_defaults};
pub use edge::is_boundary_edge;
pub use seed::{find_seed, find_seed_parallel};
pub use types::{Closure, EdgeClass, Hull, HullCfg, HullError, SeedEdge};
