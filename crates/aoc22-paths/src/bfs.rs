use aoc22_core::{Grid, Point};

use crate::neighbors::GridPather;
use crate::pathrange::{NO_PARENT, PathNode, PathRange, UNREACHABLE};
use crate::traits::Pather;

impl PathRange {
    /// Clear the distance and predecessor maps and seed every in-range
    /// source at distance 0. Duplicate sources are seeded once.
    fn bfs_seed(&mut self, sources: &[Point]) {
        self.dist.fill(UNREACHABLE);
        self.parent.fill(NO_PARENT);
        self.queue.clear();
        self.reached.clear();

        for &src in sources {
            let Some(si) = self.idx(src) else {
                continue;
            };
            if self.dist[si] != UNREACHABLE {
                continue;
            }
            self.dist[si] = 0;
            self.queue.push_back(si);
            self.reached.push(PathNode { pos: src, cost: 0 });
        }
    }

    /// Expand the front of the queue once. Returns the dequeued index.
    fn bfs_step<P: Pather>(&mut self, pather: &P, scratch: &mut Vec<Point>, max_dist: i32) -> Option<usize> {
        let ci = self.queue.pop_front()?;
        let current_dist = self.dist[ci];
        let cp = self.point(ci);

        scratch.clear();
        pather.neighbors(cp, scratch);

        for &np in scratch.iter() {
            let Some(ni) = self.idx(np) else {
                continue;
            };
            if self.dist[ni] != UNREACHABLE {
                continue;
            }
            let nd = current_dist + 1;
            if nd > max_dist {
                continue;
            }
            self.dist[ni] = nd;
            self.parent[ni] = ci;
            self.queue.push_back(ni);
            self.reached.push(PathNode { pos: np, cost: nd });
        }
        Some(ci)
    }

    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist`. Returns a slice of all reached nodes in visiting order.
    pub fn bfs_map<P: Pather>(&mut self, pather: &P, sources: &[Point], max_dist: i32) -> &[PathNode] {
        self.bfs_seed(sources);
        let mut scratch = std::mem::take(&mut self.scratch);
        while self.bfs_step(pather, &mut scratch, max_dist).is_some() {}
        self.scratch = scratch;
        &self.reached
    }

    /// Minimum number of steps from any of `sources` to `target`.
    ///
    /// All sources start together at distance 0 and share one visited set,
    /// so the result is the minimum over every source. The search stops
    /// when `target` is dequeued. Returns `None` if no source can reach it,
    /// including when `sources` is empty.
    pub fn bfs_to<P: Pather>(&mut self, pather: &P, sources: &[Point], target: Point) -> Option<i32> {
        self.bfs_seed(sources);
        let ti = self.idx(target)?;

        let mut scratch = std::mem::take(&mut self.scratch);
        let mut expanded = 0usize;
        let mut found = None;
        while let Some(ci) = self.bfs_step(pather, &mut scratch, UNREACHABLE - 1) {
            expanded += 1;
            if ci == ti {
                found = Some(self.dist[ci]);
                break;
            }
        }
        self.scratch = scratch;

        match found {
            Some(d) => log::debug!("bfs: reached {target} at distance {d} after {expanded} expansions"),
            None => log::debug!("bfs: {target} unreachable after {expanded} expansions"),
        }
        found
    }

    /// Query the BFS distance at a specific point.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the range or was not
    /// reached by the last search.
    pub fn bfs_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Reconstruct the path found by the last search, from its source to
    /// `target` inclusive, by following predecessor links.
    pub fn bfs_path(&self, target: Point) -> Option<Vec<Point>> {
        let mut i = self.idx(target)?;
        if self.dist[i] == UNREACHABLE {
            return None;
        }
        let mut path = vec![target];
        while self.parent[i] != NO_PARENT {
            i = self.parent[i];
            path.push(self.point(i));
        }
        path.reverse();
        Some(path)
    }
}

/// One-shot multi-source search over `grid`, stepping from `u` to a
/// neighbour `v` only when `can_step(grid[u], grid[v])` holds.
pub fn shortest_distance<T, F>(grid: &Grid<T>, sources: &[Point], target: Point, can_step: F) -> Option<i32>
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    let pather = GridPather::new(grid, can_step);
    PathRange::for_grid(grid).bfs_to(&pather, sources, target)
}

/// Like [`shortest_distance`] but returns the path itself, source first.
pub fn shortest_path<T, F>(grid: &Grid<T>, sources: &[Point], target: Point, can_step: F) -> Option<Vec<Point>>
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    let pather = GridPather::new(grid, can_step);
    let mut pr = PathRange::for_grid(grid);
    pr.bfs_to(&pather, sources, target)?;
    pr.bfs_path(target)
}
