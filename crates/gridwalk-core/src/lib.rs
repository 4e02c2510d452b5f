//! Geometry types shared by the *gridwalk* crates.
//!
//! A [`Point`] is one cell of a bounded 2-D grid and a [`Range`] is the
//! rectangle of cells a search is allowed to walk.

pub mod geom;

pub use geom::{Point, Range};
