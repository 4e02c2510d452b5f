use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use gridwalk_core::Point;

use crate::astar::{find_path_astar, find_path_astar_with_stats};
use crate::bfs::{find_path_bfs, find_path_bfs_with_stats};
use crate::error::PathError;
use crate::obstacles::Obstacles;

/// Which search engine to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Solver {
    /// Breadth-first search.
    Bfs,
    /// A* with the Manhattan heuristic.
    #[default]
    Astar,
}

impl Solver {
    /// Every solver, in display order.
    pub const ALL: [Solver; 2] = [Solver::Astar, Solver::Bfs];

    /// Display name, as shown in reports.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Astar => "A*",
        }
    }

    /// The other solver.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Bfs => Self::Astar,
            Self::Astar => Self::Bfs,
        }
    }

    /// Run this solver. See [`find_path_bfs`] and [`find_path_astar`].
    pub fn find_path<O: Obstacles + ?Sized>(
        self,
        start: Point,
        goal: Point,
        blocked: &O,
        width: i32,
        height: i32,
    ) -> Result<Option<Vec<Point>>, PathError> {
        match self {
            Self::Bfs => find_path_bfs(start, goal, blocked, width, height),
            Self::Astar => find_path_astar(start, goal, blocked, width, height),
        }
    }

    /// Run this solver and return the visited count alongside the path.
    pub fn find_path_with_stats<O: Obstacles + ?Sized>(
        self,
        start: Point,
        goal: Point,
        blocked: &O,
        width: i32,
        height: i32,
    ) -> Result<(Option<Vec<Point>>, usize), PathError> {
        match self {
            Self::Bfs => find_path_bfs_with_stats(start, goal, blocked, width, height),
            Self::Astar => find_path_astar_with_stats(start, goal, blocked, width, height),
        }
    }

    /// Run this solver and time it.
    pub fn search<O: Obstacles + ?Sized>(
        self,
        start: Point,
        goal: Point,
        blocked: &O,
        width: i32,
        height: i32,
    ) -> Result<SearchReport, PathError> {
        let timer = Instant::now();
        let (path, visited) = self.find_path_with_stats(start, goal, blocked, width, height)?;
        Ok(SearchReport {
            solver: self,
            path,
            visited,
            elapsed: timer.elapsed(),
        })
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Solver {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "a*" | "astar" | "a-star" => Ok(Self::Astar),
            _ => Err(PathError::UnknownSolver(s.to_string())),
        }
    }
}

/// Outcome of one timed search, for display and telemetry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub solver: Solver,
    pub path: Option<Vec<Point>>,
    pub visited: usize,
    pub elapsed: Duration,
}

impl SearchReport {
    #[inline]
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Path length in steps; 0 when there is no path.
    pub fn steps(&self) -> usize {
        self.path.as_ref().map_or(0, |p| p.len().saturating_sub(1))
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: visited {}, path {} steps, {:.3}s",
            self.solver,
            self.visited,
            self.steps(),
            self.elapsed.as_secs_f64()
        )
    }
}
