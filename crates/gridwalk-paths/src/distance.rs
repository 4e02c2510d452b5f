use gridwalk_core::Point;

/// Manhattan (L1) distance between two points.
///
/// This is the A* heuristic: on a 4-connected grid with unit step cost it
/// never overestimates the remaining cost. Any two cells of a valid grid are
/// less than `2 * i32::MAX` apart, so the result always fits.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}
