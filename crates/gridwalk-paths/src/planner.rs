//! Turn-by-turn planning for a mover that occupies several cells.
//!
//! A mover's body is listed head first. Each tick the caller asks the
//! [`Planner`] for the next unit step toward a target; the obstacle set is
//! rebuilt from the current body every time.

use std::collections::HashSet;

use gridwalk_core::Point;

use crate::error::PathError;
use crate::solver::{SearchReport, Solver};
use crate::topology::Grid;

/// Cells of `body` that block the mover's own path.
///
/// The head is where the search starts and the tail moves away on the next
/// tick, so neither is included.
pub fn blocked_by_body(body: &[Point]) -> HashSet<Point> {
    if body.len() <= 2 {
        return HashSet::new();
    }
    body[1..body.len() - 1].iter().copied().collect()
}

/// Planner settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    pub solver: Solver,
    pub width: i32,
    pub height: i32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            solver: Solver::Astar,
            width: 40,
            height: 30,
        }
    }
}

/// The result of one planning tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub report: SearchReport,
    /// Unit step to take next, or `None` to hold position and replan.
    pub next: Option<Point>,
}

impl Plan {
    /// Whether the mover should hold its current course this tick.
    #[inline]
    pub fn holds(&self) -> bool {
        self.next.is_none()
    }
}

/// Plans moves on a fixed-size grid.
#[derive(Debug, Clone, Copy)]
pub struct Planner {
    config: PlannerConfig,
    grid: Grid,
}

impl Planner {
    /// Create a planner, rejecting non-positive grid sizes.
    pub fn new(config: PlannerConfig) -> Result<Self, PathError> {
        let grid = Grid::new(config.width, config.height)?;
        Ok(Self { config, grid })
    }

    #[inline]
    pub fn config(&self) -> PlannerConfig {
        self.config
    }

    /// Switch the search engine used by later calls to [`plan`](Self::plan).
    pub fn set_solver(&mut self, solver: Solver) {
        self.config.solver = solver;
    }

    /// Plan the next step of the mover whose cells are `body` (head first)
    /// toward `target`.
    pub fn plan(&self, body: &[Point], target: Point) -> Result<Plan, PathError> {
        let &head = body.first().ok_or(PathError::EmptyBody)?;
        let blocked = blocked_by_body(body);
        let report = self.config.solver.search(
            head,
            target,
            &blocked,
            self.config.width,
            self.config.height,
        )?;

        let next = report
            .path
            .as_deref()
            .and_then(|path| path.get(1).copied())
            .filter(|&step| self.is_safe(step, body))
            .map(|step| step - head);
        if next.is_none() {
            log::debug!("{} plan from {head} to {target}: hold", report.solver);
        }
        Ok(Plan { report, next })
    }

    /// A step is safe when it stays on the grid and does not enter any body
    /// cell except the tail.
    fn is_safe(&self, step: Point, body: &[Point]) -> bool {
        self.grid.contains(step) && !body[..body.len() - 1].contains(&step)
    }
}
