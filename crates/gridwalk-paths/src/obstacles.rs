use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use gridwalk_core::Point;

/// Read-only obstacle membership, re-supplied by the caller on every search.
pub trait Obstacles {
    /// Whether `p` may not be walked on.
    fn is_blocked(&self, p: Point) -> bool;
}

impl<S: BuildHasher> Obstacles for HashSet<Point, S> {
    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        self.contains(&p)
    }
}

impl Obstacles for BTreeSet<Point> {
    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        self.contains(&p)
    }
}

impl Obstacles for [Point] {
    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        self.contains(&p)
    }
}

impl<const N: usize> Obstacles for [Point; N] {
    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        self.contains(&p)
    }
}

impl Obstacles for Vec<Point> {
    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        self.contains(&p)
    }
}

impl<T: Obstacles + ?Sized> Obstacles for &T {
    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        (**self).is_blocked(p)
    }
}

/// Adapts a predicate into [`Obstacles`], e.g. a lookup into a terrain grid.
#[derive(Debug, Clone, Copy)]
pub struct ObstacleFn<F>(pub F);

impl<F: Fn(Point) -> bool> Obstacles for ObstacleFn<F> {
    #[inline]
    fn is_blocked(&self, p: Point) -> bool {
        (self.0)(p)
    }
}

/// The empty obstacle set.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObstacles;

impl Obstacles for NoObstacles {
    #[inline]
    fn is_blocked(&self, _p: Point) -> bool {
        false
    }
}
