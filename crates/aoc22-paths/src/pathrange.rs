use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use aoc22_core::{Grid, Point, Range};

/// A position with its distance from the search sources.
///
/// Two nodes compare (and hash) equal when their positions match, whatever
/// their cost, so a set of nodes dedupes on position.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for PathNode {}

impl Hash for PathNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

/// Sentinel value meaning "unreachable" in BFS maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Parent marker for search roots.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Central coordinator for breadth-first search on a grid rectangle.
///
/// `PathRange` owns the distance map, predecessor links and queue so that
/// repeated searches over the same rectangle reuse their allocations.
pub struct PathRange {
    pub(crate) bounds: Range,
    pub(crate) width: usize,
    pub(crate) dist: Vec<i32>,
    pub(crate) parent: Vec<usize>,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) reached: Vec<PathNode>,
    // neighbour buffer reused across expansions
    pub(crate) scratch: Vec<Point>,
}

impl PathRange {
    /// An empty search space over `bounds`.
    pub fn new(bounds: Range) -> Self {
        let len = bounds.len();
        Self {
            bounds,
            width: bounds.width().max(0) as usize,
            dist: vec![UNREACHABLE; len],
            parent: vec![NO_PARENT; len],
            queue: VecDeque::new(),
            reached: Vec::new(),
            scratch: Vec::with_capacity(4),
        }
    }

    /// A `PathRange` covering every cell of `grid`.
    pub fn for_grid<T>(grid: &Grid<T>) -> Self {
        Self::new(grid.bounds())
    }

    /// The rectangle searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.bounds
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Flat cache index of `p`, or `None` outside the bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let col = (p.col - self.bounds.min.col) as usize;
        let row = (p.row - self.bounds.min.row) as usize;
        Some(row * self.width + col)
    }

    /// Inverse of [`Self::idx`].
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let col = (idx % self.width) as i32 + self.bounds.min.col;
        let row = (idx / self.width) as i32 + self.bounds.min.row;
        Point::new(row, col)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bounds.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = Range::deserialize(deserializer)?;
        Ok(PathRange::new(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn idx_and_point_round_trip_with_offset() {
        let pr = PathRange::new(Range::new(2, 3, 5, 7));
        let p = Point::new(4, 5);
        let i = pr.idx(p).unwrap();
        assert_eq!(pr.point(i), p);
        assert!(pr.idx(Point::new(0, 0)).is_none());
        assert!(pr.idx(Point::new(5, 3)).is_none());
    }

    #[test]
    fn caches_cover_the_range() {
        let pr = PathRange::new(Range::with_size(4, 10));
        assert_eq!(pr.range(), Range::with_size(4, 10));
        assert_eq!(pr.dist.len(), 40);
        assert_eq!(pr.parent.len(), 40);
        assert_eq!(pr.width, 10);
        assert!(pr.dist.iter().all(|&d| d == UNREACHABLE));
    }

    #[test]
    fn nodes_compare_by_position_only() {
        let a = PathNode {
            pos: Point::new(1, 1),
            cost: 3,
        };
        let b = PathNode {
            pos: Point::new(1, 1),
            cost: 7,
        };
        assert_eq!(a, b);
        let set: HashSet<PathNode> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Point::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node.pos, back.pos);
        assert_eq!(node.cost, back.cost);
    }

    #[test]
    fn pathrange_round_trip() {
        let bounds = Range::new(1, 2, 10, 20);
        let pr = PathRange::new(bounds);
        let json = serde_json::to_string(&pr).unwrap();
        let back: PathRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back.range(), bounds);
        assert_eq!(back.dist.len(), bounds.len());
    }
}
