use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridwalk_core::Point;

use crate::cellmap::{CellMap, Predecessors};
use crate::distance::manhattan;
use crate::error::PathError;
use crate::obstacles::Obstacles;
use crate::reconstruct::reconstruct_path;
use crate::topology::validate;

/// Frontier entry, ordered by `f` and then by insertion sequence.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    f: u64,
    seq: u64,
    g: u64,
    pos: Point,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // earliest inserted among equal f.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest path from `start` to `goal` by A* with the Manhattan heuristic.
///
/// Returns a path of the same length as [`find_path_bfs`](crate::find_path_bfs)
/// would, usually after exploring fewer cells, or `Ok(None)` if every route
/// is blocked.
pub fn find_path_astar<O: Obstacles + ?Sized>(
    start: Point,
    goal: Point,
    blocked: &O,
    width: i32,
    height: i32,
) -> Result<Option<Vec<Point>>, PathError> {
    find_path_astar_with_stats(start, goal, blocked, width, height).map(|(path, _)| path)
}

/// Like [`find_path_astar`], also returning how many cells were visited.
///
/// The count starts at 1 for the start cell and grows on every cost-map
/// write: a first discovery or a strictly cheaper route to a known cell.
pub fn find_path_astar_with_stats<O: Obstacles + ?Sized>(
    start: Point,
    goal: Point,
    blocked: &O,
    width: i32,
    height: i32,
) -> Result<(Option<Vec<Point>>, usize), PathError> {
    let grid = validate(start, goal, width, height)?;
    log::trace!("astar {start} -> {goal} on {width}x{height}");

    let mut costs: CellMap<u64> = CellMap::new(grid.range());
    let mut parents: Predecessors = CellMap::new(grid.range());
    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut seq: u64 = 0;
    let mut visited: usize = 1;

    costs.insert(start, 0);
    parents.insert(start, None);
    open.push(OpenEntry {
        f: 0,
        seq,
        g: 0,
        pos: start,
    });

    while let Some(current) = open.pop() {
        let cur = current.pos;

        // Skip stale entries.
        if costs.get(cur).is_some_and(|best| current.g > best) {
            continue;
        }

        if cur == goal {
            break;
        }

        let candidate = current.g + 1;
        for nb in grid.neighbors(cur, blocked) {
            if costs.get(nb).is_some_and(|known| candidate >= known) {
                continue;
            }
            costs.insert(nb, candidate);
            parents.insert(nb, Some(cur));
            visited += 1;
            seq += 1;
            open.push(OpenEntry {
                f: candidate + u64::from(manhattan(nb, goal)),
                seq,
                g: candidate,
                pos: nb,
            });
        }
    }

    if !parents.contains(goal) {
        log::debug!("astar {start} -> {goal}: no path, visited {visited}");
        return Ok((None, visited));
    }
    let path = reconstruct_path(&parents, goal);
    log::debug!(
        "astar {start} -> {goal}: {} steps, visited {visited}",
        path.len() - 1
    );
    Ok((Some(path), visited))
}
