//! Treetop tree house: visibility and scenic scores on a height map.

use aoc22_core::{Grid, Point};

use super::to_i64;
use crate::error::PuzzleError;
use crate::solution::Answer;

fn heights(input: &str) -> Result<Grid<u8>, PuzzleError> {
    Grid::parse_with(input, |p, ch| {
        ch.to_digit(10)
            .map(|d| d as u8)
            .ok_or_else(|| PuzzleError::parse(p.row as usize + 1, format!("invalid tree height {ch:?}")))
    })
}

/// Looking from `from` towards `dir`: how many trees are seen, and whether
/// the view reaches the edge of the forest without being blocked.
fn look(grid: &Grid<u8>, from: Point, dir: Point) -> (usize, bool) {
    let top_left = Point::ZERO;
    let bottom_right = Point::new(grid.height() - 1, grid.width() - 1);
    let Some(&height) = grid.at(from) else {
        return (0, false);
    };
    let mut seen = 0;
    let mut p = from + dir;
    while p.in_bounding_box(top_left, bottom_right) {
        seen += 1;
        if grid.at(p).is_some_and(|&h| h >= height) {
            return (seen, false);
        }
        p += dir;
    }
    (seen, true)
}

/// Trees visible from outside the grid.
pub fn part1(input: &str) -> Result<Answer, PuzzleError> {
    let grid = heights(input)?;
    let visible = grid
        .bounds()
        .iter()
        .filter(|&p| Point::CARDINALS.iter().any(|&d| look(&grid, p, d).1))
        .count();
    Ok(to_i64(visible)?.into())
}

/// Highest product of viewing distances in the four directions.
pub fn part2(input: &str) -> Result<Answer, PuzzleError> {
    let grid = heights(input)?;
    let best = grid
        .bounds()
        .iter()
        .map(|p| Point::CARDINALS.iter().map(|&d| look(&grid, p, d).0).product::<usize>())
        .max()
        .unwrap_or(0);
    Ok(to_i64(best)?.into())
}
