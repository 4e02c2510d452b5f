use std::collections::HashMap;

use gridwalk_core::{Point, Range};

/// A map from the cells of a [`Range`] to values.
///
/// Only reached cells take up space, so a search on a huge grid costs no
/// more than the cells it actually visits. Every search allocates its own
/// maps and drops them on return.
#[derive(Debug, Clone)]
pub struct CellMap<T> {
    range: Range,
    cells: HashMap<Point, T>,
}

/// Predecessor map: each visited cell maps to the cell it was reached from,
/// the search root maps to `None`.
pub type Predecessors = CellMap<Option<Point>>;

impl<T: Copy> CellMap<T> {
    /// An empty map over `range`.
    pub fn new(range: Range) -> Self {
        Self {
            range,
            cells: HashMap::new(),
        }
    }

    /// The value stored for `p`.
    #[inline]
    pub fn get(&self, p: Point) -> Option<T> {
        self.cells.get(&p).copied()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains_key(&p)
    }

    /// Store `value` for `p`, returning the previous value.
    ///
    /// Cells outside the range are ignored.
    pub fn insert(&mut self, p: Point, value: T) -> Option<T> {
        if !self.range.contains(p) {
            return None;
        }
        self.cells.insert(p, value)
    }

    /// Number of cells with a value.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
