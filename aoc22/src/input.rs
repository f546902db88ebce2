//! Reading puzzle inputs and splitting them up.

use std::io;
use std::path::{Path, PathBuf};

/// Read a whole input file.
pub fn read_to_string(path: impl AsRef<Path>) -> io::Result<String> {
    std::fs::read_to_string(path)
}

/// Conventional location of a day's input below `root`: `dayNN/input.txt`.
pub fn input_path(root: impl AsRef<Path>, day: u8) -> PathBuf {
    root.as_ref().join(format!("day{day:02}")).join("input.txt")
}

/// Lines of `text` paired with their 1-based line numbers.
pub fn numbered_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().map(|(i, line)| (i + 1, line))
}

/// Consecutive chunks of at most `size` items; the last may be shorter.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn chunks<T>(items: &[T], size: usize) -> impl Iterator<Item = &[T]> {
    items.chunks(size)
}

/// Groups of non-blank numbered lines separated by one or more blank lines.
pub fn blocks(text: &str) -> Vec<Vec<(usize, &str)>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for (n, line) in numbered_lines(text) {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push((n, line));
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}
