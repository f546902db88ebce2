//! Advent of Code 2022 solvers for days 1 to 13.
//!
//! Grid handling comes from [`aoc22_core`] and the day 12 hill climb uses
//! the breadth-first search in [`aoc22_paths`]. Every solver takes the raw
//! puzzle text and returns an [`Answer`] or a [`PuzzleError`].
//!
//! ```
//! let answers = aoc22::solve(1, "1000\n2000\n\n4000\n").unwrap();
//! assert_eq!(answers.part1.to_string(), "4000");
//! ```

pub mod days;
pub mod error;
pub mod input;
pub mod solution;

pub use error::PuzzleError;
pub use solution::{Answer, Answers, DAYS, Day, solve, solve_part};
