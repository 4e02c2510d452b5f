use std::fmt;

use gridwalk_core::Point;

/// Which end of a search an [`PathError::OutOfBounds`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Errors reported for malformed search input.
///
/// Not finding a path is never an error: searches return `Ok(None)` for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Width or height is zero or negative.
    InvalidDimensions { width: i32, height: i32 },
    /// The start or goal cell lies outside the grid.
    OutOfBounds { endpoint: Endpoint, pos: Point },
    /// A solver name that [`Solver`](crate::Solver) does not recognise.
    UnknownSolver(String),
    /// A planner was asked to move a mover with no cells.
    EmptyBody,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid grid size {width}x{height}: both sides must be positive")
            }
            Self::OutOfBounds { endpoint, pos } => {
                write!(f, "{endpoint} {pos} is outside the grid")
            }
            Self::UnknownSolver(name) => {
                write!(f, "unknown solver {name:?} (expected bfs or astar)")
            }
            Self::EmptyBody => f.write_str("mover body is empty"),
        }
    }
}

impl std::error::Error for PathError {}
