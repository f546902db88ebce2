//! One module per puzzle day. Each exposes `part1` and `part2`, taking the
//! raw input text.

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
pub mod day11;
pub mod day12;
pub mod day13;

use crate::error::PuzzleError;

/// Parse a number, reporting failures against `line`.
pub(crate) fn parse_num<T: std::str::FromStr>(line: usize, s: &str) -> Result<T, PuzzleError> {
    s.trim()
        .parse()
        .map_err(|_| PuzzleError::parse(line, format!("invalid number {s:?}")))
}

/// Convert a count or sum to an answer number.
pub(crate) fn to_i64<T: TryInto<i64>>(n: T) -> Result<i64, PuzzleError> {
    n.try_into()
        .map_err(|_| PuzzleError::NoAnswer("answer does not fit in i64".to_owned()))
}

/// Sum `values`, reporting overflow as [`PuzzleError::NoAnswer`].
pub(crate) fn checked_sum<I>(what: &str, values: I) -> Result<u64, PuzzleError>
where
    I: IntoIterator<Item = u64>,
{
    values
        .into_iter()
        .try_fold(0u64, |acc, v| acc.checked_add(v).ok_or_else(|| overflow(what)))
}

pub(crate) fn overflow(what: &str) -> PuzzleError {
    PuzzleError::NoAnswer(format!("{what} overflows"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_sum_reports_overflow() {
        assert_eq!(checked_sum("total", [1, 2, 3]).unwrap(), 6);
        assert_eq!(checked_sum("total", []).unwrap(), 0);
        assert!(matches!(checked_sum("total", [u64::MAX, 1]), Err(PuzzleError::NoAnswer(_))));
    }
}
