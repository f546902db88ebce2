//! Breadth-first shortest-path search on puzzle grids.
//!
//! All searches go through [`PathRange`], which owns and reuses its distance
//! map, predecessor links and queue. Edges come from a [`Pather`]; for label
//! grids use [`GridPather`], which admits a step `u -> v` when a caller
//! supplied `can_step(label(u), label(v))` holds.
//!
//! - [`PathRange::bfs_to`]: multi-source distance to one target
//! - [`PathRange::bfs_map`]: distances to everything reachable
//! - [`PathRange::bfs_path`]: path reconstruction after either search
//!
//! [`shortest_distance`] and [`shortest_path`] are one-shot wrappers.

mod bfs;
mod neighbors;
mod pathrange;
mod traits;

pub use bfs::{shortest_distance, shortest_path};
pub use neighbors::GridPather;
pub use pathrange::{PathNode, PathRange, UNREACHABLE};
pub use traits::Pather;
