use aoc22_core::Point;

/// Neighbor enumeration for the search engine.
///
/// An edge `u -> v` exists iff `v` is pushed by `neighbors(u, ..)`. Edges
/// need not be symmetric.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
