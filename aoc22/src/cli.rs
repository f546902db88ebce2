//! Command-line arguments.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Run the Advent of Code 2022 solvers
#[derive(Parser, Debug)]
#[command(name = "aoc22", about = "Run Advent of Code 2022 solvers", version)]
pub struct Args {
    /// Day to run (runs every implemented day if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs both parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Directory holding dayNN/input.txt files
    #[arg(long, default_value = "inputs")]
    pub inputs: PathBuf,

    /// Read this file instead of the day's default input
    #[arg(long, requires = "day")]
    pub input: Option<PathBuf>,

    /// More log output; repeat for more detail. RUST_LOG overrides this
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The parts selected for each day.
    pub fn parts(&self) -> Vec<u8> {
        match self.part {
            Some(p) => vec![p],
            None => vec![1, 2],
        }
    }

    /// Default log filter for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["aoc22"]).unwrap();
        assert_eq!(args.day, None);
        assert_eq!(args.parts(), vec![1, 2]);
        assert_eq!(args.inputs, PathBuf::from("inputs"));
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn day_part_and_verbosity() {
        let args = Args::try_parse_from(["aoc22", "-d", "12", "--part", "2", "-vv"]).unwrap();
        assert_eq!(args.day, Some(12));
        assert_eq!(args.parts(), vec![2]);
        assert_eq!(args.log_level(), "debug");
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(Args::try_parse_from(["aoc22", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc22", "--part", "3"]).is_err());
    }

    #[test]
    fn input_requires_day() {
        assert!(Args::try_parse_from(["aoc22", "--input", "x.txt"]).is_err());
        let args = Args::try_parse_from(["aoc22", "--day", "1", "--input", "x.txt"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("x.txt")));
    }
}
