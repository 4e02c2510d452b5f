use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gridwalk_paths::Solver;

#[derive(Parser, Debug)]
#[command(name = "gridwalk")]
#[command(about = "Find the shortest walk between S and G on an ASCII grid map")]
pub struct Args {
    /// Map file; reads stdin when omitted or "-"
    pub map: Option<PathBuf>,

    /// Which search engine to run
    #[arg(short, long, value_enum, default_value_t = SolverChoice::Both)]
    pub solver: SolverChoice,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode - only print the statistics lines
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverChoice {
    Bfs,
    Astar,
    Both,
}

impl SolverChoice {
    pub fn solvers(self) -> &'static [Solver] {
        match self {
            Self::Bfs => &[Solver::Bfs],
            Self::Astar => &[Solver::Astar],
            Self::Both => &Solver::ALL,
        }
    }
}
