//! Distress signal: order nested integer lists.

use std::cmp::Ordering;

use serde::Deserialize;

use super::to_i64;
use crate::error::PuzzleError;
use crate::input::{blocks, numbered_lines};
use crate::solution::Answer;

/// An integer or a list of packets. Packets are written as JSON arrays.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Packet {
    Int(u64),
    List(Vec<Packet>),
}

impl Packet {
    fn parse(line: usize, text: &str) -> Result<Self, PuzzleError> {
        let packet: Packet = serde_json::from_str(text.trim())
            .map_err(|e| PuzzleError::parse(line, format!("invalid packet: {e}")))?;
        match packet {
            Packet::List(_) => Ok(packet),
            Packet::Int(_) => Err(PuzzleError::parse(line, "a packet must be a list")),
        }
    }

    /// `[[n]]`
    fn divider(n: u64) -> Self {
        Packet::List(vec![Packet::List(vec![Packet::Int(n)])])
    }
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.iter().cmp(b.iter()),
            (Packet::Int(_), Packet::List(b)) => std::slice::from_ref(self).iter().cmp(b.iter()),
            (Packet::List(a), Packet::Int(_)) => a.iter().cmp(std::slice::from_ref(other).iter()),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Equal in packet order, so `2` and `[2]` compare equal.
impl PartialEq for Packet {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Packet {}

/// Sum of the 1-based indices of pairs already in the right order.
pub fn part1(input: &str) -> Result<Answer, PuzzleError> {
    let mut sum = 0;
    for (i, block) in blocks(input).iter().enumerate() {
        let &[(ln, left), (rn, right)] = block.as_slice() else {
            let n = block.first().map_or(0, |&(n, _)| n);
            return Err(PuzzleError::parse(n, format!("expected a pair of packets, got {} lines", block.len())));
        };
        if Packet::parse(ln, left)? <= Packet::parse(rn, right)? {
            sum += i + 1;
        }
    }
    Ok(to_i64(sum)?.into())
}

/// Sort every packet together with `[[2]]` and `[[6]]` and multiply the
/// dividers' 1-based positions.
pub fn part2(input: &str) -> Result<Answer, PuzzleError> {
    let packets = numbered_lines(input)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| Packet::parse(n, line))
        .collect::<Result<Vec<_>, _>>()?;
    log::trace!("day 13: {} packets", packets.len());

    let (two, six) = (Packet::divider(2), Packet::divider(6));
    let first = 1 + packets.iter().filter(|p| **p < two).count();
    let second = 2 + packets.iter().filter(|p| **p < six).count();
    Ok(to_i64(first * second)?.into())
}
