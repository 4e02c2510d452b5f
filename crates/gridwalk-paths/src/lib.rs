//! Shortest-path search on bounded 4-connected grids.
//!
//! The caller hands every search a start cell, a goal cell, the set of cells
//! that are blocked right now, and the grid size. Each call builds and drops
//! its own frontier and maps; nothing is cached between calls, so searches
//! on different threads need no coordination.
//!
//! - **BFS** ([`find_path_bfs`]): fewest steps, explores blindly.
//! - **A\*** ([`find_path_astar`]): same path length, guided by the
//!   [`manhattan`] heuristic so it usually visits fewer cells.
//! - `*_with_stats` variants also return how many cells were visited.
//! - [`Solver`] picks an engine at run time and [`Planner`] turns a search
//!   into the next move of a multi-cell mover.
//!
//! "No path" is `Ok(None)`. Malformed input (non-positive sizes, endpoints
//! off the grid) is a [`PathError`].
//!
//! ```
//! use std::collections::HashSet;
//! use gridwalk_core::Point;
//! use gridwalk_paths::{find_path_astar, find_path_bfs};
//!
//! let wall: HashSet<Point> = (0..3).map(|y| Point::new(1, y)).collect();
//! let path = find_path_bfs(Point::new(0, 0), Point::new(2, 0), &wall, 4, 4)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(path.len() - 1, 8);
//! let astar = find_path_astar(Point::new(0, 0), Point::new(2, 0), &wall, 4, 4).unwrap();
//! assert_eq!(astar.map(|p| p.len()), Some(path.len()));
//! ```

mod astar;
mod bfs;
mod cellmap;
mod distance;
mod error;
mod obstacles;
mod planner;
mod reconstruct;
mod solver;
mod topology;

#[cfg(test)]
mod properties;

pub use astar::{find_path_astar, find_path_astar_with_stats};
pub use bfs::{find_path_bfs, find_path_bfs_with_stats};
pub use cellmap::{CellMap, Predecessors};
pub use distance::manhattan;
pub use error::{Endpoint, PathError};
pub use obstacles::{NoObstacles, ObstacleFn, Obstacles};
pub use planner::{Plan, Planner, PlannerConfig, blocked_by_body};
pub use reconstruct::reconstruct_path;
pub use solver::{SearchReport, Solver};
pub use topology::{CARDINALS, Grid, in_bounds};
