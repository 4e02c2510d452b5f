use gridwalk_core::{Point, Range};

use crate::error::{Endpoint, PathError};
use crate::obstacles::Obstacles;

/// Unit steps in neighbor enumeration order: north, south, east, west.
///
/// Both searches visit neighbors in this order, so it decides which of
/// several equally short paths is returned.
pub const CARDINALS: [Point; 4] = [Point::NORTH, Point::SOUTH, Point::EAST, Point::WEST];

/// Whether `p` lies in `[0, width) × [0, height)`.
///
/// Never fails: non-positive dimensions simply contain nothing.
#[inline]
pub fn in_bounds(p: Point, width: i32, height: i32) -> bool {
    p.x >= 0 && p.x < width && p.y >= 0 && p.y < height
}

/// A validated, bounded 4-connected grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    range: Range,
}

impl Grid {
    /// Create a `width` × `height` grid. Both sides must be positive.
    pub fn new(width: i32, height: i32) -> Result<Self, PathError> {
        if width <= 0 || height <= 0 {
            return Err(PathError::InvalidDimensions { width, height });
        }
        Ok(Self {
            range: Range::with_size(width, height),
        })
    }

    /// The cells of the grid.
    #[inline]
    pub fn range(self) -> Range {
        self.range
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.range.width()
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.range.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.range.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(self) -> bool {
        false
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        self.range.contains(p)
    }

    /// Reject `p` as the given endpoint if it is off the grid.
    pub fn check(self, endpoint: Endpoint, p: Point) -> Result<(), PathError> {
        if self.contains(p) {
            Ok(())
        } else {
            Err(PathError::OutOfBounds { endpoint, pos: p })
        }
    }

    /// Walkable orthogonal neighbors of `p`, in [`CARDINALS`] order.
    ///
    /// A neighbor is walkable when it is on the grid and not blocked. `p`
    /// itself need not be on the grid.
    pub fn neighbors<'a, O: Obstacles + ?Sized>(
        self,
        p: Point,
        blocked: &'a O,
    ) -> impl Iterator<Item = Point> + 'a {
        CARDINALS
            .into_iter()
            .map(move |d| p + d)
            .filter(move |&n| self.contains(n) && !blocked.is_blocked(n))
    }
}

/// Validate grid size and both endpoints, in that order.
pub(crate) fn validate(
    start: Point,
    goal: Point,
    width: i32,
    height: i32,
) -> Result<Grid, PathError> {
    let grid = Grid::new(width, height)?;
    grid.check(Endpoint::Start, start)?;
    grid.check(Endpoint::Goal, goal)?;
    Ok(grid)
}
