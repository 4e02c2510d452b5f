use std::collections::VecDeque;

use gridwalk_core::Point;

use crate::cellmap::{CellMap, Predecessors};
use crate::error::PathError;
use crate::obstacles::Obstacles;
use crate::reconstruct::reconstruct_path;
use crate::topology::validate;

/// Shortest path from `start` to `goal` by breadth-first search.
///
/// Returns the full path (including both endpoints), or `Ok(None)` if every
/// route is blocked. The path has the minimum number of steps; among equally
/// short paths the one found first in north, south, east, west neighbor
/// order wins.
pub fn find_path_bfs<O: Obstacles + ?Sized>(
    start: Point,
    goal: Point,
    blocked: &O,
    width: i32,
    height: i32,
) -> Result<Option<Vec<Point>>, PathError> {
    find_path_bfs_with_stats(start, goal, blocked, width, height).map(|(path, _)| path)
}

/// Like [`find_path_bfs`], also returning how many cells were visited.
///
/// Every cell is counted once, when it is first reached; the start counts.
pub fn find_path_bfs_with_stats<O: Obstacles + ?Sized>(
    start: Point,
    goal: Point,
    blocked: &O,
    width: i32,
    height: i32,
) -> Result<(Option<Vec<Point>>, usize), PathError> {
    let grid = validate(start, goal, width, height)?;
    log::trace!("bfs {start} -> {goal} on {width}x{height}");

    let mut parents: Predecessors = CellMap::new(grid.range());
    let mut queue: VecDeque<Point> = VecDeque::new();
    parents.insert(start, None);
    queue.push_back(start);

    while let Some(cur) = queue.pop_front() {
        if cur == goal {
            break;
        }
        for nb in grid.neighbors(cur, blocked) {
            if parents.contains(nb) {
                continue;
            }
            parents.insert(nb, Some(cur));
            queue.push_back(nb);
        }
    }

    let visited = parents.len();
    if !parents.contains(goal) {
        log::debug!("bfs {start} -> {goal}: no path, visited {visited}");
        return Ok((None, visited));
    }
    let path = reconstruct_path(&parents, goal);
    log::debug!(
        "bfs {start} -> {goal}: {} steps, visited {visited}",
        path.len() - 1
    );
    Ok((Some(path), visited))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Endpoint;
    use crate::obstacles::NoObstacles;
    use std::collections::HashSet;

    fn set(cells: &[(i32, i32)]) -> HashSet<Point> {
        cells.iter().map(|&c| Point::from(c)).collect()
    }

    #[test]
    fn straight_line() {
        let path = find_path_bfs(Point::new(0, 0), Point::new(5, 0), &NoObstacles, 10, 10)
            .unwrap()
            .unwrap();
        let expected: Vec<_> = (0..=5).map(|x| Point::new(x, 0)).collect();
        assert_eq!(path, expected);
    }

    #[test]
    fn wall_blocks() {
        let wall = set(&[(1, 0), (1, 1), (1, 2), (1, 3)]);
        let (path, visited) =
            find_path_bfs_with_stats(Point::new(0, 0), Point::new(2, 0), &wall, 4, 4).unwrap();
        assert_eq!(path, None);
        // Only the column left of the wall is reachable.
        assert_eq!(visited, 4);
    }

    #[test]
    fn detours_around_gap() {
        // Wall at x=2 with a gap at y=3.
        let wall = set(&[(2, 0), (2, 1), (2, 2)]);
        let path = find_path_bfs(Point::new(0, 0), Point::new(4, 0), &wall, 5, 4)
            .unwrap()
            .unwrap();
        assert_eq!(path.len() - 1, 10);
        assert!(path.contains(&Point::new(2, 3)));
    }

    #[test]
    fn routes_around_single_block() {
        let block = set(&[(1, 0)]);
        let path = find_path_bfs(Point::new(0, 0), Point::new(2, 0), &block, 3, 2)
            .unwrap()
            .unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(2, 0)
            ]
        );
    }

    #[test]
    fn start_equals_goal() {
        let p = Point::new(2, 2);
        let (path, visited) = find_path_bfs_with_stats(p, p, &NoObstacles, 5, 5).unwrap();
        assert_eq!(path, Some(vec![p]));
        assert_eq!(visited, 1);
    }

    #[test]
    fn blocked_start_is_still_root() {
        let start = Point::new(0, 0);
        let blocked = set(&[(0, 0)]);
        let path = find_path_bfs(start, Point::new(2, 0), &blocked, 3, 1)
            .unwrap()
            .unwrap();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn blocked_goal_is_unreachable() {
        let blocked = set(&[(2, 0)]);
        let path = find_path_bfs(Point::new(0, 0), Point::new(2, 0), &blocked, 3, 3).unwrap();
        assert_eq!(path, None);
    }

    #[test]
    fn open_grid_visits_everything_reachable_before_far_goal() {
        let (_, visited) =
            find_path_bfs_with_stats(Point::new(0, 0), Point::new(3, 3), &NoObstacles, 4, 4)
                .unwrap();
        assert_eq!(visited, 16);
    }

    #[test]
    fn huge_grid_only_pays_for_visited_cells() {
        let p = Point::new(0, 0);
        let (path, visited) =
            find_path_bfs_with_stats(p, p, &NoObstacles, i32::MAX, i32::MAX).unwrap();
        assert_eq!(path, Some(vec![p]));
        assert_eq!(visited, 1);

        let path = find_path_bfs(p, Point::new(1, 0), &NoObstacles, i32::MAX, i32::MAX)
            .unwrap()
            .unwrap();
        assert_eq!(path, vec![p, Point::new(1, 0)]);
    }

    #[test]
    fn invalid_input() {
        assert_eq!(
            find_path_bfs(Point::new(0, 0), Point::new(1, 0), &NoObstacles, 0, 3),
            Err(PathError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
        assert_eq!(
            find_path_bfs(Point::new(0, 0), Point::new(3, 0), &NoObstacles, 3, 3),
            Err(PathError::OutOfBounds {
                endpoint: Endpoint::Goal,
                pos: Point::new(3, 0)
            })
        );
    }
}
