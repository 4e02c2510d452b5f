use gridwalk_core::Point;

use crate::cellmap::Predecessors;

/// Walk `parents` backward from `goal` and return the route start → goal.
///
/// `goal` must have been visited; callers check `parents.contains(goal)` and
/// report "no path" otherwise. The walk stops at the first cell without a
/// predecessor, which is the search root.
pub fn reconstruct_path(parents: &Predecessors, goal: Point) -> Vec<Point> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(Some(prev)) = parents.get(cur) {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
