//! Supply stacks: replay crane moves over a drawing of crate stacks.

use itertools::Itertools;

use super::parse_num;
use crate::error::PuzzleError;
use crate::input::numbered_lines;
use crate::solution::Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Move {
    line: usize,
    count: usize,
    from: usize,
    to: usize,
}

/// Stacks bottom to top, and the moves with 0-based stack indices.
fn parse(input: &str) -> Result<(Vec<Vec<char>>, Vec<Move>), PuzzleError> {
    let lines: Vec<(usize, &str)> = numbered_lines(input).collect();
    let blank = lines
        .iter()
        .position(|(_, l)| l.trim().is_empty())
        .ok_or_else(|| PuzzleError::parse(lines.len().max(1), "no blank line after the crate drawing"))?;
    let (drawing, moves) = lines.split_at(blank);
    let Some(((label_line, labels), rows)) = drawing.split_last() else {
        return Err(PuzzleError::parse(1, "crate drawing is empty"));
    };

    let count = labels.split_whitespace().count();
    if count == 0 {
        return Err(PuzzleError::parse(*label_line, "no stack labels"));
    }
    let mut stacks = vec![Vec::new(); count];
    for &(n, row) in rows.iter().rev() {
        for (i, ch) in row.chars().enumerate() {
            if i % 4 != 1 || ch == ' ' {
                continue;
            }
            if !ch.is_ascii_alphabetic() {
                return Err(PuzzleError::parse(n, format!("invalid crate {ch:?}")));
            }
            let stack = stacks
                .get_mut(i / 4)
                .ok_or_else(|| PuzzleError::parse(n, format!("crate {ch:?} is past the last stack")))?;
            stack.push(ch);
        }
    }

    let moves = moves
        .iter()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|&(n, l)| {
            let bad = || PuzzleError::parse(n, format!("expected \"move N from A to B\", got {l:?}"));
            let words: (&str, &str, &str, &str, &str, &str) =
                l.split_whitespace().collect_tuple().ok_or_else(bad)?;
            let ("move", c, "from", a, "to", b) = words else {
                return Err(bad());
            };
            let stack = |s: &str| -> Result<usize, PuzzleError> {
                let i: usize = parse_num(n, s)?;
                if i == 0 || i > count {
                    return Err(PuzzleError::parse(n, format!("no stack {i}")));
                }
                Ok(i - 1)
            };
            Ok(Move {
                line: n,
                count: parse_num(n, c)?,
                from: stack(a)?,
                to: stack(b)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::trace!("day 5: {} stacks, {} moves", stacks.len(), moves.len());
    Ok((stacks, moves))
}

/// Apply every move and read the top crate of each non-empty stack.
/// With `one_at_a_time` the moved crates end up in reverse order.
fn rearrange(input: &str, one_at_a_time: bool) -> Result<Answer, PuzzleError> {
    let (mut stacks, moves) = parse(input)?;
    for m in moves {
        let len = stacks[m.from].len();
        if m.count > len {
            return Err(PuzzleError::parse(
                m.line,
                format!("cannot move {} crates from a stack of {len}", m.count),
            ));
        }
        let mut lifted = stacks[m.from].split_off(len - m.count);
        if one_at_a_time {
            lifted.reverse();
        }
        stacks[m.to].extend(lifted);
    }
    Ok(Answer::Text(stacks.iter().filter_map(|s| s.last()).collect()))
}

pub fn part1(input: &str) -> Result<Answer, PuzzleError> {
    rearrange(input, true)
}

pub fn part2(input: &str) -> Result<Answer, PuzzleError> {
    rearrange(input, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = concat!(
        "    [D]    \n",
        "[N] [C]    \n",
        "[Z] [M] [P]\n",
        " 1   2   3 \n",
        "\n",
        "move 1 from 2 to 1\n",
        "move 3 from 1 to 3\n",
        "move 2 from 2 to 1\n",
        "move 1 from 1 to 2\n",
    );

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE).unwrap(), Answer::Text("CMZ".to_owned()));
        assert_eq!(part2(EXAMPLE).unwrap(), Answer::Text("MCD".to_owned()));
    }

    #[test]
    fn drawing_is_read_bottom_up() {
        let (stacks, moves) = parse(EXAMPLE).unwrap();
        assert_eq!(stacks, vec![vec!['Z', 'N'], vec!['M', 'C', 'D'], vec!['P']]);
        assert_eq!(
            moves[0],
            Move {
                line: 6,
                count: 1,
                from: 1,
                to: 0
            }
        );
    }

    #[test]
    fn empty_stacks_are_skipped() {
        let input = "[A]    \n 1   2 \n\nmove 1 from 1 to 2\nmove 1 from 2 to 1\n";
        assert_eq!(part1(input).unwrap(), Answer::Text("A".to_owned()));
    }

    #[test]
    fn bad_moves() {
        let base = "[A]\n 1 \n\n";
        let err = part1(&format!("{base}move 2 from 1 to 1\n")).unwrap_err();
        assert!(matches!(err, PuzzleError::Parse { line: 4, .. }));
        let err = part1(&format!("{base}move 1 from 1 to 2\n")).unwrap_err();
        assert!(matches!(err, PuzzleError::Parse { line: 4, .. }));
        let err = part1(&format!("{base}shift 1 from 1 to 1\n")).unwrap_err();
        assert!(matches!(err, PuzzleError::Parse { line: 4, .. }));
        assert!(part1("[A]\n 1 \n").is_err());
    }
}
