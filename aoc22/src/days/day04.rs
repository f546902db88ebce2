//! Camp cleanup: compare pairs of section assignments.

use itertools::Itertools;

use super::{parse_num, to_i64};
use crate::error::PuzzleError;
use crate::input::numbered_lines;
use crate::solution::Answer;

/// Inclusive range of section ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sections {
    start: u32,
    end: u32,
}

impl Sections {
    fn parse(line: usize, s: &str) -> Result<Self, PuzzleError> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| PuzzleError::parse(line, format!("expected \"start-end\", got {s:?}")))?;
        let (start, end) = (parse_num::<u32>(line, start)?, parse_num::<u32>(line, end)?);
        if start > end {
            return Err(PuzzleError::parse(line, format!("range {s:?} ends before it starts")));
        }
        Ok(Self { start, end })
    }

    fn contains(self, other: Sections) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    fn overlaps(self, other: Sections) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

fn pairs(input: &str) -> Result<Vec<(Sections, Sections)>, PuzzleError> {
    numbered_lines(input)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            let (a, b) = line
                .trim()
                .split(',')
                .collect_tuple()
                .ok_or_else(|| PuzzleError::parse(n, format!("expected two ranges, got {line:?}")))?;
            Ok((Sections::parse(n, a)?, Sections::parse(n, b)?))
        })
        .collect()
}

fn count(input: &str, pred: impl Fn(Sections, Sections) -> bool) -> Result<Answer, PuzzleError> {
    let n = pairs(input)?.into_iter().filter(|&(a, b)| pred(a, b)).count();
    Ok(to_i64(n)?.into())
}

/// Pairs where one assignment contains the other.
pub fn part1(input: &str) -> Result<Answer, PuzzleError> {
    count(input, |a, b| a.contains(b) || b.contains(a))
}

/// Pairs that overlap at all.
pub fn part2(input: &str) -> Result<Answer, PuzzleError> {
    count(input, Sections::overlaps)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "2-4,6-8\n2-3,4-5\n5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8\n";

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE).unwrap(), Answer::Number(2));
        assert_eq!(part2(EXAMPLE).unwrap(), Answer::Number(4));
    }

    #[test]
    fn touching_ranges_overlap() {
        let a = Sections { start: 1, end: 3 };
        let b = Sections { start: 3, end: 5 };
        assert!(a.overlaps(b) && b.overlaps(a));
        assert!(!a.contains(b));
    }

    #[test]
    fn malformed_pairs() {
        assert!(matches!(part1("2-4\n"), Err(PuzzleError::Parse { line: 1, .. })));
        assert!(matches!(part1("1-2,3-4\n5-4,1-1\n"), Err(PuzzleError::Parse { line: 2, .. })));
        assert!(matches!(part1("1-2,3-x\n"), Err(PuzzleError::Parse { line: 1, .. })));
    }
}
