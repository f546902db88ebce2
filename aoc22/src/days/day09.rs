//! Rope bridge: drag a knotted rope around and track its tail.

use std::collections::HashSet;

use aoc22_core::Point;

use super::{parse_num, to_i64};
use crate::error::PuzzleError;
use crate::input::numbered_lines;
use crate::solution::Answer;

fn motions(input: &str) -> Result<Vec<(Point, u32)>, PuzzleError> {
    numbered_lines(input)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            let Some((dir, steps)) = line.trim().split_once(' ') else {
                return Err(PuzzleError::parse(n, format!("expected \"<dir> <steps>\", got {line:?}")));
            };
            let dir = match dir {
                "U" => Point::UP,
                "D" => Point::DOWN,
                "L" => Point::LEFT,
                "R" => Point::RIGHT,
                _ => return Err(PuzzleError::parse(n, format!("unknown direction {dir:?}"))),
            };
            Ok((dir, parse_num::<u32>(n, steps)?))
        })
        .collect()
}

/// Number of distinct positions visited by the last of `knots` knots.
fn tail_positions(input: &str, knots: usize) -> Result<Answer, PuzzleError> {
    let mut rope = vec![Point::ZERO; knots];
    let mut visited = HashSet::from([Point::ZERO]);
    for (dir, steps) in motions(input)? {
        for _ in 0..steps {
            rope[0] += dir;
            for i in 1..rope.len() {
                let lead = rope[i - 1];
                if lead.chebyshev_distance(rope[i]) <= 1 {
                    break;
                }
                let step = (lead - rope[i]).signum();
                rope[i] += step;
            }
            if let Some(&tail) = rope.last() {
                visited.insert(tail);
            }
        }
    }
    Ok(to_i64(visited.len())?.into())
}

pub fn part1(input: &str) -> Result<Answer, PuzzleError> {
    tail_positions(input, 2)
}

pub fn part2(input: &str) -> Result<Answer, PuzzleError> {
    tail_positions(input, 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2\n";
    const LARGER: &str = "R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20\n";

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE).unwrap(), Answer::Number(13));
        assert_eq!(part2(EXAMPLE).unwrap(), Answer::Number(1));
        assert_eq!(part2(LARGER).unwrap(), Answer::Number(36));
    }

    #[test]
    fn diagonal_catch_up() {
        // Head goes right then up twice; the tail moves diagonally to (-1, 1).
        assert_eq!(part1("R 1\nU 2\n").unwrap(), Answer::Number(2));
    }

    #[test]
    fn knots_follow_in_a_chain() {
        // After "R 3" the head sits at x=3 and the second knot trails at x=2.
        // Every later knot stays put until the one ahead pulls it along.
        assert_eq!(part2("R 3\n").unwrap(), Answer::Number(1));
        assert_eq!(part2("R 10\n").unwrap(), Answer::Number(2));
    }

    #[test]
    fn bad_motions() {
        assert!(matches!(part1("R 1\nX 2\n"), Err(PuzzleError::Parse { line: 2, .. })));
        assert!(matches!(part1("R\n"), Err(PuzzleError::Parse { line: 1, .. })));
        assert!(matches!(part1("R -1\n"), Err(PuzzleError::Parse { line: 1, .. })));
    }
}
