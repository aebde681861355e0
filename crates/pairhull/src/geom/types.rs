//! Basic 2D types shared by the predicate and the hull builder.

use std::fmt;

use nalgebra::Vector2;

/// A point in the plane. Coordinates are read-only once handed to a `PointSet`.
pub type Point = Vector2<f64>;

/// Side of a directed line `a → b` on which a third point lies.
///
/// `Right` also covers points exactly on the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}
