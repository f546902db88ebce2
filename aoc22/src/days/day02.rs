//! Rock paper scissors strategy guide.

use super::to_i64;
use crate::error::PuzzleError;
use crate::input::numbered_lines;
use crate::solution::Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    fn score(self) -> u32 {
        match self {
            Shape::Rock => 1,
            Shape::Paper => 2,
            Shape::Scissors => 3,
        }
    }

    /// The shape this one defeats.
    fn beats(self) -> Shape {
        match self {
            Shape::Rock => Shape::Scissors,
            Shape::Paper => Shape::Rock,
            Shape::Scissors => Shape::Paper,
        }
    }

    /// The shape that defeats this one.
    fn beaten_by(self) -> Shape {
        match self {
            Shape::Rock => Shape::Paper,
            Shape::Paper => Shape::Scissors,
            Shape::Scissors => Shape::Rock,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Lose,
    Draw,
    Win,
}

impl Outcome {
    fn of(mine: Shape, theirs: Shape) -> Outcome {
        if mine == theirs {
            Outcome::Draw
        } else if mine.beats() == theirs {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    fn score(self) -> u32 {
        match self {
            Outcome::Lose => 0,
            Outcome::Draw => 3,
            Outcome::Win => 6,
        }
    }

    /// The shape to play against `theirs` to get this outcome.
    fn response_to(self, theirs: Shape) -> Shape {
        match self {
            Outcome::Lose => theirs.beats(),
            Outcome::Draw => theirs,
            Outcome::Win => theirs.beaten_by(),
        }
    }
}

/// The opponent's letter and our column letter (0, 1 or 2 for X, Y, Z).
fn rounds(input: &str) -> Result<Vec<(Shape, usize)>, PuzzleError> {
    numbered_lines(input)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            let bad = || PuzzleError::parse(n, format!("expected \"<A|B|C> <X|Y|Z>\", got {line:?}"));
            let mut parts = line.split_whitespace();
            let theirs = match parts.next() {
                Some("A") => Shape::Rock,
                Some("B") => Shape::Paper,
                Some("C") => Shape::Scissors,
                _ => return Err(bad()),
            };
            let column = match parts.next() {
                Some("X") => 0,
                Some("Y") => 1,
                Some("Z") => 2,
                _ => return Err(bad()),
            };
            if parts.next().is_some() {
                return Err(bad());
            }
            Ok((theirs, column))
        })
        .collect()
}

fn total(input: &str, mine: impl Fn(Shape, usize) -> Shape) -> Result<Answer, PuzzleError> {
    let score: u32 = rounds(input)?
        .into_iter()
        .map(|(theirs, column)| {
            let mine = mine(theirs, column);
            mine.score() + Outcome::of(mine, theirs).score()
        })
        .sum();
    Ok(to_i64(score)?.into())
}

/// The second column is the shape to play.
pub fn part1(input: &str) -> Result<Answer, PuzzleError> {
    const SHAPES: [Shape; 3] = [Shape::Rock, Shape::Paper, Shape::Scissors];
    total(input, |_, column| SHAPES[column])
}

/// The second column is the outcome to aim for.
pub fn part2(input: &str) -> Result<Answer, PuzzleError> {
    const OUTCOMES: [Outcome; 3] = [Outcome::Lose, Outcome::Draw, Outcome::Win];
    total(input, |theirs, column| OUTCOMES[column].response_to(theirs))
}
