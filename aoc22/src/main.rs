//! aoc22: run the Advent of Code 2022 solvers against local inputs.

mod cli;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aoc22::input;
use aoc22::solution::{self, Answer, DAYS, Day};
use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let days: Vec<&Day> = match args.day {
        Some(n) => vec![solution::day(n)?],
        None => DAYS.iter().collect(),
    };

    for day in days {
        let path = match &args.input {
            Some(path) => path.clone(),
            None => input::input_path(&args.inputs, day.number),
        };
        if args.day.is_none() && !path.exists() {
            log::warn!("skipping day {:02}: {} not found", day.number, path.display());
            continue;
        }
        let text = input::read_to_string(&path)
            .with_context(|| format!("reading input for day {:02} from {}", day.number, path.display()))?;

        for part in args.parts() {
            let start = Instant::now();
            let answer = day
                .solve_part(part, &text)
                .with_context(|| format!("solving day {:02} part {part}", day.number))?;
            log::info!("day {:02} part {part} solved in {:?}", day.number, start.elapsed());
            print_answer(day.number, part, &answer);
        }
    }
    Ok(())
}

fn print_answer(day: u8, part: u8, answer: &Answer) {
    if answer.is_multiline() {
        println!("day {day:02} part {part}:\n{answer}");
    } else {
        println!("day {day:02} part {part}: {answer}");
    }
}
