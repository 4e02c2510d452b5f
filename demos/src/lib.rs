//! ASCII maps for the `gridwalk` command-line driver.
//!
//! A map is a block of equal-width lines: `#` is blocked, `.` is free, and
//! exactly one `S` (start) and one `G` (goal) mark the search endpoints.
//!
//! ```text
//! S.#....
//! ..#.##.
//! ....#.G
//! ```

use std::collections::HashSet;
use std::fmt;

use crossterm::style::Stylize;
use gridwalk_core::Point;
use gridwalk_paths::SearchReport;

pub mod args;

const WALL: char = '#';
const FLOOR: char = '.';
const START: char = 'S';
const GOAL: char = 'G';
const PATH: char = '*';

/// A parsed map: grid size, blocked cells and the two endpoints.
#[derive(Debug, Clone)]
pub struct AsciiMap {
    width: i32,
    height: i32,
    blocked: HashSet<Point>,
    start: Point,
    goal: Point,
}

impl AsciiMap {
    /// Parse a map. Blank lines before and after the map are ignored.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = s.trim_matches(['\n', '\r']).lines().collect();
        let Some(first) = rows.first() else {
            return Err(MapError::Empty);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut blocked = HashSet::new();
        let mut start = None;
        let mut goal = None;
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(MapError::InconsistentWidth {
                    line: y + 1,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                match ch {
                    WALL => {
                        blocked.insert(pos);
                    }
                    FLOOR => {}
                    START => set_marker(&mut start, START, pos)?,
                    GOAL => set_marker(&mut goal, GOAL, pos)?,
                    _ => return Err(MapError::InvalidChar { ch, pos }),
                }
            }
        }

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            blocked,
            start: start.ok_or(MapError::MissingMarker(START))?,
            goal: goal.ok_or(MapError::MissingMarker(GOAL))?,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn blocked(&self) -> &HashSet<Point> {
        &self.blocked
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Draw the map with `path` overlaid as `*`, optionally in color.
    pub fn render(&self, path: Option<&[Point]>, color: bool) -> String {
        let on_path: HashSet<Point> = path.unwrap_or_default().iter().copied().collect();
        let mut out = String::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let p = Point::new(x, y);
                let ch = if p == self.start {
                    START
                } else if p == self.goal {
                    GOAL
                } else if on_path.contains(&p) {
                    PATH
                } else if self.blocked.contains(&p) {
                    WALL
                } else {
                    FLOOR
                };
                if color {
                    out.push_str(&paint(ch));
                } else {
                    out.push(ch);
                }
            }
            if y + 1 < self.height {
                out.push('\n');
            }
        }
        out
    }
}

fn set_marker(slot: &mut Option<Point>, marker: char, pos: Point) -> Result<(), MapError> {
    if let Some(first) = *slot {
        return Err(MapError::DuplicateMarker {
            marker,
            first,
            second: pos,
        });
    }
    *slot = Some(pos);
    Ok(())
}

fn paint(ch: char) -> String {
    let s = ch.to_string();
    match ch {
        START => s.green().bold().to_string(),
        GOAL => s.red().bold().to_string(),
        PATH => s.blue().bold().to_string(),
        WALL => s.dark_grey().to_string(),
        _ => s,
    }
}

/// One statistics line for a search.
pub fn describe(report: &SearchReport) -> String {
    if report.found() {
        report.to_string()
    } else {
        format!("{}: no path (visited {})", report.solver, report.visited)
    }
}

/// Errors that can occur when parsing a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// No rows, or an empty first row.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than `#`, `.`, `S` or `G`.
    InvalidChar { ch: char, pos: Point },
    /// `S` or `G` is missing.
    MissingMarker(char),
    /// `S` or `G` appears more than once.
    DuplicateMarker {
        marker: char,
        first: Point,
        second: Point,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("map: no rows"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "map contains invalid character {ch:?} at {pos}")
            }
            Self::MissingMarker(m) => write!(f, "map has no {m:?} cell"),
            Self::DuplicateMarker {
                marker,
                first,
                second,
            } => write!(
                f,
                "map has a second {marker:?} at {second} (first at {first})"
            ),
        }
    }
}

impl std::error::Error for MapError {}
