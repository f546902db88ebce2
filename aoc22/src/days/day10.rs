//! Cathode-ray tube: run a tiny CPU and draw with its register.

use super::{overflow, parse_num, to_i64};
use crate::error::PuzzleError;
use crate::input::{chunks, numbered_lines};
use crate::solution::Answer;

const SCREEN_WIDTH: usize = 40;
const FIRST_SAMPLE: usize = 20;
const SAMPLE_EVERY: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instr {
    Noop,
    Addx(i64),
}

impl Instr {
    fn cycles(self) -> usize {
        match self {
            Instr::Noop => 1,
            Instr::Addx(_) => 2,
        }
    }
}

fn program(input: &str) -> Result<Vec<Instr>, PuzzleError> {
    numbered_lines(input)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| match line.split_whitespace().collect::<Vec<_>>().as_slice() {
            ["noop"] => Ok(Instr::Noop),
            ["addx", v] => Ok(Instr::Addx(parse_num(n, v)?)),
            _ => Err(PuzzleError::parse(n, format!("unknown instruction {line:?}"))),
        })
        .collect()
}

/// Value of X during each cycle, starting with cycle 1.
fn register_trace(program: &[Instr]) -> Result<Vec<i64>, PuzzleError> {
    let mut x: i64 = 1;
    let mut trace = Vec::with_capacity(program.iter().map(|i| i.cycles()).sum());
    for &instr in program {
        trace.extend(std::iter::repeat_n(x, instr.cycles()));
        if let Instr::Addx(v) = instr {
            x = x.checked_add(v).ok_or_else(|| overflow("register X"))?;
        }
    }
    Ok(trace)
}

/// Sum of cycle number times X at cycles 20, 60, 100 and so on.
pub fn part1(input: &str) -> Result<Answer, PuzzleError> {
    let trace = register_trace(&program(input)?)?;
    let strength = trace
        .iter()
        .enumerate()
        .skip(FIRST_SAMPLE - 1)
        .step_by(SAMPLE_EVERY)
        .try_fold(0i64, |acc, (i, &x)| {
            to_i64(i + 1)?
                .checked_mul(x)
                .and_then(|s| acc.checked_add(s))
                .ok_or_else(|| overflow("signal strength"))
        })?;
    Ok(strength.into())
}

/// The picture drawn by the sprite, one 40 pixel row per line.
pub fn part2(input: &str) -> Result<Answer, PuzzleError> {
    let trace = register_trace(&program(input)?)?;
    log::trace!("day 10: {} cycles", trace.len());
    let rows: Vec<String> = chunks(&trace, SCREEN_WIDTH)
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(col, &x)| if x.abs_diff(col as i64) <= 1 { '#' } else { '.' })
                .collect()
        })
        .collect();
    Ok(Answer::Text(rows.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
addx 15
addx -11
addx 6
addx -3
addx 5
addx -1
addx -8
addx 13
addx 4
noop
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx 5
addx -1
addx -35
addx 1
addx 24
addx -19
addx 1
addx 16
addx -11
noop
noop
addx 21
addx -15
noop
noop
addx -3
addx 9
addx 1
addx -3
addx 8
addx 1
addx 5
noop
noop
noop
noop
noop
addx -36
noop
addx 1
addx 7
noop
noop
noop
addx 2
addx 6
noop
noop
noop
noop
noop
addx 1
noop
noop
addx 7
addx 1
noop
addx -13
addx 13
addx 7
noop
addx 1
addx -33
noop
noop
noop
addx 2
noop
noop
noop
addx 8
noop
addx -1
addx 2
addx 1
noop
addx 17
addx -9
addx 1
addx 1
addx -3
addx 11
noop
noop
addx 1
noop
addx 1
noop
noop
addx -13
addx -19
addx 1
addx 3
addx 26
addx -30
addx 12
addx -1
addx 3
addx 1
noop
noop
noop
addx -9
addx 18
addx 1
addx 2
noop
noop
addx 9
noop
noop
noop
addx -1
addx 2
addx -37
addx 1
addx 3
noop
addx 15
addx -21
addx 22
addx -6
addx 1
noop
addx 2
addx 1
noop
addx -10
noop
noop
addx 20
addx 1
addx 2
addx 2
addx -6
addx -11
noop
noop
noop
";

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE).unwrap(), Answer::Number(13140));
        let picture = "\
##..##..##..##..##..##..##..##..##..##..
###...###...###...###...###...###...###.
####....####....####....####....####....
#####.....#####.....#####.....#####.....
######......######......######......####
#######.......#######.......#######.....";
        assert_eq!(part2(EXAMPLE).unwrap(), Answer::Text(picture.to_owned()));
    }

    #[test]
    fn small_program_trace() {
        let prog = program("noop\naddx 3\naddx -5\n").unwrap();
        assert_eq!(register_trace(&prog).unwrap(), vec![1, 1, 1, 4, 4]);
        assert_eq!(part1("noop\naddx 3\naddx -5\n").unwrap(), Answer::Number(0));
        assert_eq!(part2("noop\naddx 3\naddx -5\n").unwrap(), Answer::Text("#####".to_owned()));
    }

    #[test]
    fn idle_program_draws_a_stripe() {
        let input = "noop\n".repeat(240);
        assert_eq!(part1(&input).unwrap(), Answer::Number(20 + 60 + 100 + 140 + 180 + 220));
        let row = format!("###{}", ".".repeat(37));
        let expected = vec![row; 6].join("\n");
        let Answer::Text(picture) = part2(&input).unwrap() else {
            panic!("expected a picture");
        };
        assert_eq!(picture, expected);
    }

    #[test]
    fn addx_takes_effect_after_two_cycles() {
        // X becomes 20 during cycle 21, so cycle 20 still samples X = 1.
        let input = format!("{}addx 19\nnoop\n", "noop\n".repeat(18));
        assert_eq!(part1(&input).unwrap(), Answer::Number(20));
        let input = format!("{}addx 19\nnoop\n", "noop\n".repeat(17));
        assert_eq!(part1(&input).unwrap(), Answer::Number(400));
    }

    #[test]
    fn register_overflow_is_an_error() {
        let input = format!("addx {}\naddx 1\n", i64::MAX);
        assert!(matches!(part1(&input), Err(PuzzleError::NoAnswer(_))));
        assert!(matches!(part2(&input), Err(PuzzleError::NoAnswer(_))));
    }

    #[test]
    fn strength_overflow_is_an_error() {
        // X is huge by cycle 20, so 20 * X no longer fits.
        let input = format!("addx {}\n{}", i64::MAX / 4, "noop\n".repeat(20));
        assert!(matches!(part1(&input), Err(PuzzleError::NoAnswer(_))));
    }

    #[test]
    fn far_away_sprite_draws_nothing() {
        let input = format!("addx {}\n", i64::MIN + 1);
        assert_eq!(part2(&input).unwrap(), Answer::Text("##".to_owned()));
        let input = format!("addx {}\nnoop\n", i64::MIN + 1);
        assert_eq!(part2(&input).unwrap(), Answer::Text("##.".to_owned()));
    }

    #[test]
    fn unknown_instruction() {
        assert!(matches!(part1("noop\nmul 2\n"), Err(PuzzleError::Parse { line: 2, .. })));
        assert!(matches!(part1("addx\n"), Err(PuzzleError::Parse { line: 1, .. })));
    }
}
