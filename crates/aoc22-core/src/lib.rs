//! **aoc22-core**: grid and coordinate types shared by the puzzle solvers.
//!
//! This crate provides a value-semantics [`Point`], the half-open [`Range`]
//! used for bounds, and [`Grid`], a rectangular array of cell labels with
//! neighbour enumeration and label lookup.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Point, Range, RangeIter};
pub use grid::Grid;
