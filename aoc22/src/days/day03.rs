//! Rucksack reorganization: find the item type shared between groups.

use itertools::Itertools;

use super::to_i64;
use crate::error::PuzzleError;
use crate::input::{chunks, numbered_lines};
use crate::solution::Answer;

/// `a..=z` have priorities 1 to 26 and `A..=Z` 27 to 52.
fn priority(item: char) -> Option<u32> {
    match item {
        'a'..='z' => Some(item as u32 - 'a' as u32 + 1),
        'A'..='Z' => Some(item as u32 - 'A' as u32 + 27),
        _ => None,
    }
}

/// Set of item priorities, one bit each.
fn item_set(line: usize, items: &str) -> Result<u64, PuzzleError> {
    items.chars().try_fold(0u64, |set, c| {
        let p = priority(c).ok_or_else(|| PuzzleError::parse(line, format!("invalid item {c:?}")))?;
        Ok(set | 1 << p)
    })
}

/// The single priority present in every set.
fn common(line: usize, sets: &[u64]) -> Result<u32, PuzzleError> {
    let shared = sets.iter().fold(u64::MAX, |acc, s| acc & s);
    if shared.count_ones() != 1 {
        return Err(PuzzleError::parse(
            line,
            format!("expected exactly one shared item, found {}", shared.count_ones()),
        ));
    }
    Ok(shared.trailing_zeros())
}

fn rucksacks(input: &str) -> Vec<(usize, &str)> {
    numbered_lines(input)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| (n, line.trim()))
        .collect()
}

/// Each rucksack's two halves share one item.
pub fn part1(input: &str) -> Result<Answer, PuzzleError> {
    let sum: u64 = rucksacks(input)
        .into_iter()
        .map(|(n, line)| {
            if !line.is_ascii() {
                return Err(PuzzleError::parse(n, "rucksack holds a non-ASCII item"));
            }
            if line.len() % 2 != 0 {
                return Err(PuzzleError::parse(n, "rucksack has an odd number of items"));
            }
            let (a, b) = line.split_at(line.len() / 2);
            common(n, &[item_set(n, a)?, item_set(n, b)?]).map(u64::from)
        })
        .sum::<Result<u64, _>>()?;
    Ok(to_i64(sum)?.into())
}

/// Every three consecutive rucksacks share one badge item.
pub fn part2(input: &str) -> Result<Answer, PuzzleError> {
    let sacks = rucksacks(input);
    if sacks.len() % 3 != 0 {
        return Err(PuzzleError::NoAnswer(format!(
            "{} rucksacks do not split into groups of three",
            sacks.len()
        )));
    }
    let sum: u64 = chunks(&sacks, 3)
        .map(|group| {
            let sets: Vec<u64> = group.iter().map(|&(n, line)| item_set(n, line)).try_collect()?;
            common(group[0].0, &sets).map(u64::from)
        })
        .sum::<Result<u64, _>>()?;
    Ok(to_i64(sum)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE).unwrap(), Answer::Number(157));
        assert_eq!(part2(EXAMPLE).unwrap(), Answer::Number(70));
    }

    #[test]
    fn priorities() {
        assert_eq!(priority('a'), Some(1));
        assert_eq!(priority('z'), Some(26));
        assert_eq!(priority('A'), Some(27));
        assert_eq!(priority('Z'), Some(52));
        assert_eq!(priority('1'), None);
    }

    #[test]
    fn malformed_rucksacks() {
        assert!(matches!(part1("abc\n"), Err(PuzzleError::Parse { line: 1, .. })));
        assert!(matches!(part1("ab\n"), Err(PuzzleError::Parse { line: 1, .. })));
        assert!(matches!(part1("aa\na1a1\n"), Err(PuzzleError::Parse { line: 2, .. })));
        assert!(matches!(part2("aa\nbb\n"), Err(PuzzleError::NoAnswer(_))));
    }

    #[test]
    fn multibyte_items_are_rejected() {
        // "a\u{e9}b" is four bytes, so the byte midpoint falls inside the 'é'.
        assert!(matches!(part1("a\u{e9}b\n"), Err(PuzzleError::Parse { line: 1, .. })));
        assert!(matches!(part1("aa\n\u{e9}\u{e9}\n"), Err(PuzzleError::Parse { line: 2, .. })));
        assert!(matches!(part2("a\u{e9}\nab\nac\n"), Err(PuzzleError::Parse { line: 1, .. })));
    }
}
