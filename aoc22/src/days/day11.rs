//! Monkey in the middle: simulate monkeys throwing items by worry level.

use itertools::Itertools;

use super::{overflow, parse_num, to_i64};
use crate::error::PuzzleError;
use crate::input::blocks;
use crate::solution::Answer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand {
    Old,
    Const(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add(Operand),
    Mul(Operand),
}

impl Operation {
    fn apply(self, old: u64) -> Option<u64> {
        let value = |o| match o {
            Operand::Old => old,
            Operand::Const(c) => c,
        };
        match self {
            Operation::Add(o) => old.checked_add(value(o)),
            Operation::Mul(o) => old.checked_mul(value(o)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

/// Text after `prefix` on a trimmed line, or a parse error naming `what`.
fn field<'a>(line: (usize, &'a str), prefix: &str, what: &str) -> Result<&'a str, PuzzleError> {
    let (n, text) = line;
    text.trim()
        .strip_prefix(prefix)
        .map(str::trim)
        .ok_or_else(|| PuzzleError::parse(n, format!("expected {what}, got {text:?}")))
}

fn parse_monkey(index: usize, block: &[(usize, &str)]) -> Result<Monkey, PuzzleError> {
    let &[header, items, operation, test, if_true, if_false] = block else {
        let n = block.first().map_or(0, |&(n, _)| n);
        return Err(PuzzleError::parse(n, format!("monkey block has {} lines, expected 6", block.len())));
    };

    let id: usize = parse_num(header.0, field(header, "Monkey", "a monkey header")?.trim_end_matches(':'))?;
    if id != index {
        return Err(PuzzleError::parse(header.0, format!("expected monkey {index}, found monkey {id}")));
    }

    let items_line = items.0;
    let items = field(items, "Starting items:", "starting items")?
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_num(items_line, s))
        .collect::<Result<Vec<u64>, _>>()?;

    let (n, _) = operation;
    let expr = field(operation, "Operation: new = old", "an operation")?;
    let operand = |s: &str| match s {
        "old" => Ok(Operand::Old),
        s => parse_num(n, s).map(Operand::Const),
    };
    let operation = match expr.split_whitespace().collect_tuple::<(&str, &str)>() {
        Some(("+", rhs)) => Operation::Add(operand(rhs)?),
        Some(("*", rhs)) => Operation::Mul(operand(rhs)?),
        _ => return Err(PuzzleError::parse(n, format!("unsupported operation {expr:?}"))),
    };

    let divisor: u64 = parse_num(test.0, field(test, "Test: divisible by", "a divisibility test")?)?;
    if divisor == 0 {
        return Err(PuzzleError::parse(test.0, "cannot test divisibility by zero"));
    }

    Ok(Monkey {
        items,
        operation,
        divisor,
        if_true: parse_num(if_true.0, field(if_true, "If true: throw to monkey", "a true target")?)?,
        if_false: parse_num(if_false.0, field(if_false, "If false: throw to monkey", "a false target")?)?,
    })
}

fn parse(input: &str) -> Result<Vec<Monkey>, PuzzleError> {
    let blocks = blocks(input);
    let monkeys = blocks
        .iter()
        .enumerate()
        .map(|(i, block)| parse_monkey(i, block))
        .collect::<Result<Vec<_>, _>>()?;
    if monkeys.len() < 2 {
        return Err(PuzzleError::NoAnswer("need at least two monkeys".to_owned()));
    }
    for (i, m) in monkeys.iter().enumerate() {
        for target in [m.if_true, m.if_false] {
            if target >= monkeys.len() || target == i {
                let n = blocks[i][0].0;
                return Err(PuzzleError::parse(n, format!("monkey {i} cannot throw to monkey {target}")));
            }
        }
    }
    log::trace!("day 11: {} monkeys", monkeys.len());
    Ok(monkeys)
}

/// Product of the two highest inspection counts after `rounds` rounds.
/// `relieve` is applied to every new worry level before it is tested.
fn monkey_business(
    mut monkeys: Vec<Monkey>,
    rounds: usize,
    relieve: impl Fn(u64) -> u64,
) -> Result<Answer, PuzzleError> {
    let mut inspected = vec![0u64; monkeys.len()];
    for _ in 0..rounds {
        for i in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[i].items);
            inspected[i] += items.len() as u64;
            let Monkey {
                operation,
                divisor,
                if_true,
                if_false,
                ..
            } = monkeys[i];
            for old in items {
                let worry = operation
                    .apply(old)
                    .map(&relieve)
                    .ok_or_else(|| PuzzleError::NoAnswer(format!("worry level overflows after {old}")))?;
                let target = if worry % divisor == 0 { if_true } else { if_false };
                monkeys[target].items.push(worry);
            }
        }
    }
    let business = inspected
        .into_iter()
        .k_largest(2)
        .try_fold(1u64, |acc, n| acc.checked_mul(n).ok_or_else(|| overflow("monkey business")))?;
    Ok(to_i64(business)?.into())
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Least common multiple of every divisor.
fn lcm(divisors: impl IntoIterator<Item = u64>) -> Result<u64, PuzzleError> {
    divisors.into_iter().try_fold(1u64, |acc, d| {
        (acc / gcd(acc, d))
            .checked_mul(d)
            .ok_or_else(|| overflow("least common multiple of the divisors"))
    })
}

/// 20 rounds, worry divided by three after each inspection.
pub fn part1(input: &str) -> Result<Answer, PuzzleError> {
    monkey_business(parse(input)?, 20, |w| w / 3)
}

/// 10000 rounds without relief; worry is kept modulo the least common
/// multiple of the divisors, which preserves every test.
pub fn part2(input: &str) -> Result<Answer, PuzzleError> {
    let monkeys = parse(input)?;
    let modulus = lcm(monkeys.iter().map(|m| m.divisor))?;
    monkey_business(monkeys, 10_000, |w| w % modulus)
}
