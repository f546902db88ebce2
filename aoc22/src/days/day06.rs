//! Tuning trouble: find the first run of distinct characters.

use itertools::Itertools;

use super::to_i64;
use crate::error::PuzzleError;
use crate::solution::Answer;

/// Number of characters read once the last `size` were all different.
fn marker_end(input: &str, size: usize) -> Result<Answer, PuzzleError> {
    let signal = input.trim().as_bytes();
    let start = signal
        .windows(size)
        .position(|w| w.iter().all_unique())
        .ok_or_else(|| PuzzleError::NoAnswer(format!("no {size} distinct characters in a row")))?;
    Ok(to_i64(start + size)?.into())
}

/// Start-of-packet marker.
pub fn part1(input: &str) -> Result<Answer, PuzzleError> {
    marker_end(input, 4)
}

/// Start-of-message marker.
pub fn part2(input: &str) -> Result<Answer, PuzzleError> {
    marker_end(input, 14)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn examples() {
        let cases = [
            ("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7, 19),
            ("bvwbjplbgvbhsrlpgdmjqwftvncz", 5, 23),
            ("nppdvjthqldpwncqszvftbrmjlhg", 6, 23),
            ("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10, 29),
            ("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11, 26),
        ];
        for (signal, p1, p2) in cases {
            assert_eq!(part1(signal).unwrap(), Answer::Number(p1), "{signal}");
            assert_eq!(part2(signal).unwrap(), Answer::Number(p2), "{signal}");
        }
    }

    #[test]
    fn no_marker() {
        assert!(matches!(part1("aabb"), Err(PuzzleError::NoAnswer(_))));
        assert!(matches!(part1("abc"), Err(PuzzleError::NoAnswer(_))));
    }
}
