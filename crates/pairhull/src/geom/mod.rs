//! 2D points, the orientation predicate, and point-set providers.
//!
//! Purpose
//! - Provide the leaf layer of the hull search: a `Point` alias, the
//!   `Side` classification, and the `PointSet` trait the builder reads from.
//! - Keep the predicate exact where it can be (plain `f64` cross product, no
//!   epsilon) so the collinear policy is deterministic.
//!
//! Collinear policy
//! - A zero cross product is reported as `Side::Right`. There is no separate
//!   "on the line" outcome; callers that care must inspect `cross` directly.
//!
//! Code cross-refs: `hull::{is_boundary_edge, build_hull}`, `rand::draw_cloud`

mod orient;
mod points;
pub mod rand;
mod types;

pub use orient::{cross, orientation};
pub use points::PointSet;
pub use types::{Point, Side};
