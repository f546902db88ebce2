use aoc22_core::{Grid, Point};

use crate::traits::Pather;

/// A [`Pather`] over a [`Grid`] whose edges are filtered by a step predicate.
///
/// `can_step(from, to)` receives the labels of the current cell and of an
/// in-bounds cardinal neighbour, and decides whether the move is allowed.
pub struct GridPather<'g, T, F> {
    grid: &'g Grid<T>,
    can_step: F,
}

impl<'g, T, F> GridPather<'g, T, F>
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    /// Wrap `grid` with the step rule `can_step`.
    pub fn new(grid: &'g Grid<T>, can_step: F) -> Self {
        Self { grid, can_step }
    }
}

impl<T, F> Pather for GridPather<'_, T, F>
where
    T: Copy,
    F: Fn(T, T) -> bool,
{
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let Some(&from) = self.grid.at(p) else {
            return;
        };
        for n in self.grid.neighbors(p) {
            if let Some(&to) = self.grid.at(n) {
                if (self.can_step)(from, to) {
                    buf.push(n);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_rule_filters_neighbors() {
        let grid = Grid::parse("abc\nbcd").unwrap();
        let pather = GridPather::new(&grid, |from: char, to: char| to as u8 <= from as u8 + 1);
        let mut buf = Vec::new();
        pather.neighbors(Point::new(0, 0), &mut buf);
        // down to 'b', right to 'b'
        assert_eq!(buf, vec![Point::new(1, 0), Point::new(0, 1)]);

        buf.clear();
        pather.neighbors(Point::new(1, 0), &mut buf);
        // up to 'a', right to 'c'
        assert_eq!(buf, vec![Point::new(0, 0), Point::new(1, 1)]);
    }

    #[test]
    fn step_rule_need_not_be_symmetric() {
        let grid = Grid::parse("az").unwrap();
        let pather = GridPather::new(&grid, |from: char, to: char| to as u8 <= from as u8 + 1);
        let mut buf = Vec::new();
        pather.neighbors(Point::new(0, 0), &mut buf);
        assert!(buf.is_empty());
        pather.neighbors(Point::new(0, 1), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 0)]);
    }

    #[test]
    fn outside_point_has_no_neighbors() {
        let grid = Grid::parse("aa").unwrap();
        let pather = GridPather::new(&grid, |_: char, _: char| true);
        let mut buf = Vec::new();
        pather.neighbors(Point::new(-1, 0), &mut buf);
        assert!(buf.is_empty());
    }
}
