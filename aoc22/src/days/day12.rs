//! Hill climbing: fewest steps up a height map, one level at a time.

use aoc22_core::{Grid, Point};
use aoc22_paths::shortest_distance;

use crate::error::PuzzleError;
use crate::solution::Answer;

/// A height map with its start and end markers replaced by `a` and `z`.
struct HeightMap {
    grid: Grid<char>,
    start: Point,
    end: Point,
}

impl HeightMap {
    fn parse(input: &str) -> Result<Self, PuzzleError> {
        let mut grid = Grid::parse(input)?;
        if let Some((p, &ch)) = grid.iter().find(|(_, ch)| !ch.is_ascii_lowercase() && !matches!(**ch, 'S' | 'E')) {
            return Err(PuzzleError::parse(p.row as usize + 1, format!("invalid height {ch:?}")));
        }
        let start = grid.find(&'S').ok_or(PuzzleError::MissingMarker('S'))?;
        let end = grid.find(&'E').ok_or(PuzzleError::MissingMarker('E'))?;
        grid.set(start, 'a')?;
        grid.set(end, 'z')?;
        Ok(Self { grid, start, end })
    }

    fn fewest_steps(&self, sources: &[Point]) -> Result<Answer, PuzzleError> {
        let steps = shortest_distance(&self.grid, sources, self.end, can_climb)
            .ok_or_else(|| PuzzleError::NoAnswer(format!("{} cannot be reached", self.end)))?;
        log::debug!("day 12: {} sources, {steps} steps", sources.len());
        Ok(i64::from(steps).into())
    }
}

/// A step may climb at most one level; descending is unrestricted.
fn can_climb(from: char, to: char) -> bool {
    to as u32 <= from as u32 + 1
}

/// From the marked start.
pub fn part1(input: &str) -> Result<Answer, PuzzleError> {
    let map = HeightMap::parse(input)?;
    map.fewest_steps(&[map.start])
}

/// From whichever lowest square is closest.
pub fn part2(input: &str) -> Result<Answer, PuzzleError> {
    let map = HeightMap::parse(input)?;
    map.fewest_steps(&map.grid.find_all(&'a'))
}
