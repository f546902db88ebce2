//! Calorie counting: sum each elf's snacks and find the best-stocked elves.

use itertools::Itertools;

use super::{checked_sum, parse_num, to_i64};
use crate::error::PuzzleError;
use crate::input::blocks;
use crate::solution::Answer;

/// Total calories carried by each elf, in input order.
fn elf_totals(input: &str) -> Result<Vec<u64>, PuzzleError> {
    blocks(input)
        .into_iter()
        .map(|block| {
            let snacks: Vec<u64> = block
                .into_iter()
                .map(|(n, line)| parse_num::<u64>(n, line))
                .try_collect()?;
            checked_sum("calorie total", snacks)
        })
        .collect()
}

fn top_total(input: &str, k: usize) -> Result<Answer, PuzzleError> {
    let totals = elf_totals(input)?;
    if totals.is_empty() {
        return Err(PuzzleError::NoAnswer("no elves in input".to_owned()));
    }
    log::trace!("day 1: {} elves", totals.len());
    let top = checked_sum("calorie total", totals.into_iter().k_largest(k))?;
    Ok(to_i64(top)?.into())
}

pub fn part1(input: &str) -> Result<Answer, PuzzleError> {
    top_total(input, 1)
}

pub fn part2(input: &str) -> Result<Answer, PuzzleError> {
    top_total(input, 3)
}
