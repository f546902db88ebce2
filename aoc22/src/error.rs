//! Error type shared by the day solvers.

use aoc22_core::GridError;
use thiserror::Error;

/// Why a puzzle could not be solved.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// A line of the input does not have the expected shape.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The input could not be turned into a grid.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A required marker character is absent from a grid input.
    #[error("input has no '{0}' marker")]
    MissingMarker(char),

    /// The input is well formed but has no answer.
    #[error("no answer: {0}")]
    NoAnswer(String),

    /// No solver is registered for this day.
    #[error("day {0} is not implemented")]
    UnknownDay(u8),

    /// Puzzles only have parts 1 and 2.
    #[error("part {0} does not exist")]
    UnknownPart(u8),
}

impl PuzzleError {
    /// Shorthand for [`PuzzleError::Parse`]; `line` is 1-based.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
