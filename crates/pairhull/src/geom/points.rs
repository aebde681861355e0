//! Read-only, indexed access to a fixed point collection.

use super::types::Point;

/// A fixed, finite, indexed point collection.
///
/// The hull builder only ever asks for the count and for individual points by
/// index, so anything that can answer those two questions can feed it.
pub trait PointSet {
    fn count(&self) -> usize;

    /// Pre: `index < self.count()`.
    fn get(&self, index: usize) -> Point;

    #[inline]
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl PointSet for [Point] {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
    #[inline]
    fn get(&self, index: usize) -> Point {
        self[index]
    }
}

impl PointSet for Vec<Point> {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
    #[inline]
    fn get(&self, index: usize) -> Point {
        self[index]
    }
}

impl<const N: usize> PointSet for [Point; N] {
    #[inline]
    fn count(&self) -> usize {
        N
    }
    #[inline]
    fn get(&self, index: usize) -> Point {
        self[index]
    }
}

impl<P: PointSet + ?Sized> PointSet for &P {
    #[inline]
    fn count(&self) -> usize {
        (**self).count()
    }
    #[inline]
    fn get(&self, index: usize) -> Point {
        (**self).get(index)
    }
}
