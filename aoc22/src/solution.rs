//! Answers and the table of registered days.

use std::fmt;

use crate::days;
use crate::error::PuzzleError;

/// A single puzzle answer. Most are numbers; a few are text, and the
/// day 10 picture spans several lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Number(i64),
    Text(String),
}

impl Answer {
    /// Whether the answer needs more than one line to print.
    pub fn is_multiline(&self) -> bool {
        matches!(self, Answer::Text(s) if s.contains('\n'))
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{n}"),
            Answer::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Answer {
    fn from(n: i64) -> Self {
        Answer::Number(n)
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Text(s)
    }
}

/// Both answers for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub part1: Answer,
    pub part2: Answer,
}

/// A solver for one part of one day.
pub type PartFn = fn(&str) -> Result<Answer, PuzzleError>;

/// A registered day.
#[derive(Clone, Copy)]
pub struct Day {
    pub number: u8,
    pub part1: PartFn,
    pub part2: PartFn,
}

impl Day {
    /// Solve part `part` (1 or 2) of this day.
    pub fn solve_part(&self, part: u8, input: &str) -> Result<Answer, PuzzleError> {
        match part {
            1 => (self.part1)(input),
            2 => (self.part2)(input),
            _ => Err(PuzzleError::UnknownPart(part)),
        }
    }

    /// Solve both parts of this day.
    pub fn solve(&self, input: &str) -> Result<Answers, PuzzleError> {
        Ok(Answers {
            part1: (self.part1)(input)?,
            part2: (self.part2)(input)?,
        })
    }
}

impl fmt::Debug for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Day").field("number", &self.number).finish_non_exhaustive()
    }
}

macro_rules! days {
    ($($n:literal => $module:ident),* $(,)?) => {
        /// Every implemented day, in order.
        pub const DAYS: &[Day] = &[
            $(Day { number: $n, part1: days::$module::part1, part2: days::$module::part2 },)*
        ];
    };
}

days! {
    1 => day01,
    2 => day02,
    3 => day03,
    4 => day04,
    5 => day05,
    6 => day06,
    7 => day07,
    8 => day08,
    9 => day09,
    10 => day10,
    11 => day11,
    12 => day12,
    13 => day13,
}

/// Look up a registered day.
pub fn day(number: u8) -> Result<&'static Day, PuzzleError> {
    DAYS.iter()
        .find(|d| d.number == number)
        .ok_or(PuzzleError::UnknownDay(number))
}

/// Solve both parts of `day` for `input`.
pub fn solve(day_number: u8, input: &str) -> Result<Answers, PuzzleError> {
    day(day_number)?.solve(input)
}

/// Solve one part of `day` for `input`.
pub fn solve_part(day_number: u8, part: u8, input: &str) -> Result<Answer, PuzzleError> {
    day(day_number)?.solve_part(part, input)
}
