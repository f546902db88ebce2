//! No space left on device: rebuild a directory tree from a terminal session.

use std::collections::HashMap;

use super::{checked_sum, overflow, parse_num, to_i64};
use crate::error::PuzzleError;
use crate::input::numbered_lines;
use crate::solution::Answer;

const DISK_SIZE: u64 = 70_000_000;
const NEEDED_SPACE: u64 = 30_000_000;
const SMALL_DIR_LIMIT: u64 = 100_000;

const ROOT: usize = 0;

#[derive(Debug, Default)]
struct Dir {
    parent: Option<usize>,
    children: HashMap<String, usize>,
    files: HashMap<String, u64>,
}

/// Directory arena. A child is always created after its parent, so it
/// has a larger index.
#[derive(Debug)]
struct FileSystem {
    dirs: Vec<Dir>,
}

impl FileSystem {
    fn new() -> Self {
        Self {
            dirs: vec![Dir::default()],
        }
    }

    fn child(&mut self, dir: usize, name: &str) -> usize {
        if let Some(&i) = self.dirs[dir].children.get(name) {
            return i;
        }
        let i = self.dirs.len();
        self.dirs.push(Dir {
            parent: Some(dir),
            ..Dir::default()
        });
        self.dirs[dir].children.insert(name.to_owned(), i);
        i
    }

    /// Resolve a `cd` argument, absolute or relative, from `cwd`.
    fn cd(&mut self, line: usize, cwd: usize, path: &str) -> Result<usize, PuzzleError> {
        let mut dir = if path.starts_with('/') { ROOT } else { cwd };
        for part in path.split('/').filter(|p| !p.is_empty()) {
            dir = match part {
                ".." => self.dirs[dir]
                    .parent
                    .ok_or_else(|| PuzzleError::parse(line, "cd .. above the root directory"))?,
                "." => dir,
                name => self.child(dir, name),
            };
        }
        Ok(dir)
    }

    /// Total size of every directory, including nested ones.
    fn dir_sizes(&self) -> Result<Vec<u64>, PuzzleError> {
        let mut sizes = self
            .dirs
            .iter()
            .map(|d| checked_sum("directory size", d.files.values().copied()))
            .collect::<Result<Vec<_>, _>>()?;
        for i in (1..self.dirs.len()).rev() {
            if let Some(parent) = self.dirs[i].parent {
                sizes[parent] = sizes[parent]
                    .checked_add(sizes[i])
                    .ok_or_else(|| overflow("directory size"))?;
            }
        }
        Ok(sizes)
    }
}

fn parse(input: &str) -> Result<FileSystem, PuzzleError> {
    let mut fs = FileSystem::new();
    let mut cwd = ROOT;
    for (n, line) in numbered_lines(input) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(command) = line.strip_prefix("$ ") {
            match command.split_whitespace().collect::<Vec<_>>().as_slice() {
                ["cd", path] => cwd = fs.cd(n, cwd, path)?,
                ["ls"] => {}
                _ => return Err(PuzzleError::parse(n, format!("unknown command {command:?}"))),
            }
            continue;
        }
        let Some((size, name)) = line.split_once(' ') else {
            return Err(PuzzleError::parse(n, format!("expected a listing entry, got {line:?}")));
        };
        if size == "dir" {
            fs.child(cwd, name);
        } else {
            let size: u64 = parse_num(n, size)?;
            fs.dirs[cwd].files.insert(name.to_owned(), size);
        }
    }
    log::trace!("day 7: {} directories", fs.dirs.len());
    Ok(fs)
}

/// Sum of the sizes of directories no larger than 100000.
pub fn part1(input: &str) -> Result<Answer, PuzzleError> {
    let sizes = parse(input)?.dir_sizes()?;
    let small = sizes.into_iter().filter(|&s| s <= SMALL_DIR_LIMIT);
    let total = checked_sum("small directory total", small)?;
    Ok(to_i64(total)?.into())
}

/// Size of the smallest directory whose removal frees enough space.
pub fn part2(input: &str) -> Result<Answer, PuzzleError> {
    let sizes = parse(input)?.dir_sizes()?;
    let used = sizes[ROOT];
    let free = DISK_SIZE.saturating_sub(used);
    let missing = NEEDED_SPACE.saturating_sub(free);
    let best = sizes
        .into_iter()
        .filter(|&s| s >= missing)
        .min()
        .ok_or_else(|| PuzzleError::NoAnswer(format!("no directory frees {missing} bytes")))?;
    Ok(to_i64(best)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

    #[test]
    fn example() {
        assert_eq!(part1(EXAMPLE).unwrap(), Answer::Number(95437));
        assert_eq!(part2(EXAMPLE).unwrap(), Answer::Number(24933642));
    }

    #[test]
    fn sizes_include_nested_dirs() {
        let fs = parse(EXAMPLE).unwrap();
        let mut sizes = fs.dir_sizes().unwrap();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![584, 94853, 24933642, 48381165]);
    }

    #[test]
    fn repeated_listing_is_not_double_counted() {
        let input = "$ cd /\n$ ls\n10 a\n$ ls\n10 a\n";
        assert_eq!(part1(input).unwrap(), Answer::Number(10));
    }

    #[test]
    fn absolute_and_nested_cd() {
        let input = "$ cd /x/y\n$ ls\n5 f\n$ cd /\n$ cd x\n$ ls\n7 g\n";
        let sizes = parse(input).unwrap().dir_sizes().unwrap();
        assert_eq!(sizes, vec![12, 12, 5]);
    }

    #[test]
    fn oversized_tree_fails_instead_of_wrapping() {
        let big = u64::MAX / 2 + 1;
        let same_dir = format!("$ cd /\n$ ls\n{big} a\n{big} b\n");
        assert!(matches!(part1(&same_dir), Err(PuzzleError::NoAnswer(_))));
        let nested = format!("$ cd /\n$ ls\n{big} a\n$ cd sub\n$ ls\n{big} b\n");
        assert!(matches!(part2(&nested), Err(PuzzleError::NoAnswer(_))));
    }

    #[test]
    fn bad_sessions() {
        assert!(matches!(part1("$ cd ..\n"), Err(PuzzleError::Parse { line: 1, .. })));
        assert!(matches!(part1("$ cd /\n$ rm x\n"), Err(PuzzleError::Parse { line: 2, .. })));
        assert!(matches!(part1("$ ls\nbig file\n"), Err(PuzzleError::Parse { line: 2, .. })));
    }
}
