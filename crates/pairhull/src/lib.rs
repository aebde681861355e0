//! Convex hulls of small, fixed 2D point sets by brute-force pair testing.
//!
//! A pair of points is a hull edge when every other point lies on one side
//! of the line through it. `hull::build_hull` finds one such pair, then walks
//! the boundary from one of its ends until it reconnects or runs out of
//! candidates, and returns the visited indices.
//!
//! API Policy
//! - `geom` holds the predicate and point-set plumbing, `hull` the search.
//! - The `prelude` re-exports what a caller needs to go from points to indices.

pub mod geom;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Point, PointSet, Side};
pub use hull::{build_hull, build_hull_parallel, Closure, Hull, HullCfg, HullError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::rand::{draw_cloud, Cloud, CloudCfg, CloudError, ReplayToken};
    pub use crate::geom::{cross, orientation, Point, PointSet, Side};
    pub use crate::hull::{
        build_hull, build_hull_parallel, find_seed, find_seed_parallel, hull_with_defaults,
        is_boundary_edge, Closure, EdgeClass, Hull, HullCfg, HullError, SeedEdge,
    };
}
