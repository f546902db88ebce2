//! The [`Grid`] type: a rectangular 2D array of cell labels.
//!
//! Cells are stored row-major in a single `Vec`. The shape is fixed at
//! construction; labels can be overwritten afterwards.

use std::fmt;

use crate::error::GridError;
use crate::geom::{Point, Range};

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular grid of labels, usually `char` or small integers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    bounds: Range,
}

impl<T> Grid<T> {
    /// Build a grid from an ordered sequence of equal-length rows.
    ///
    /// Fails with [`GridError::Malformed`] if there are no rows, a row is
    /// empty, or two rows differ in width.
    pub fn from_rows<R, I>(rows: R) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        for (i, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(row);
            let w = cells.len() - before;
            match width {
                None if w == 0 => {
                    return Err(GridError::Malformed("first row is empty".to_string()));
                }
                None => width = Some(w),
                Some(expected) if expected != w => {
                    return Err(GridError::Malformed(format!(
                        "row {i} has width {w}, expected {expected}"
                    )));
                }
                Some(_) => {}
            }
            height += 1;
        }

        let Some(width) = width else {
            return Err(GridError::Malformed("no rows".to_string()));
        };
        Ok(Self {
            cells,
            bounds: Range::with_size(height as i32, width as i32),
        })
    }

    /// Reassemble a grid from its row-major cells and bounds.
    fn from_parts(cells: Vec<T>, bounds: Range) -> Result<Self, GridError> {
        if bounds.min != Point::ZERO || bounds.is_empty() {
            return Err(GridError::Malformed(format!(
                "bounds must start at the origin and be non-empty, got {bounds:?}"
            )));
        }
        if cells.len() != bounds.len() {
            return Err(GridError::Malformed(format!(
                "{} cells do not fill {}x{} bounds",
                cells.len(),
                bounds.height(),
                bounds.width()
            )));
        }
        Ok(Self { cells, bounds })
    }

    /// The bounding range `[0, height) x [0, width)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.width() as usize + p.col as usize)
    }

    /// Borrow the label at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Overwrite the label at `p`.
    pub fn set(&mut self, p: Point, label: T) -> Result<(), GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds(p))?;
        self.cells[i] = label;
        Ok(())
    }

    /// In-bounds cardinal neighbours of `p`, in the order up, down, left,
    /// right.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(move |&n| self.contains(n))
    }

    /// Row-major iterator over `(Point, &label)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.bounds.iter().zip(self.cells.iter())
    }

    /// The rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.width() as usize)
    }
}

impl<T: Copy> Grid<T> {
    /// The label at `p`.
    #[inline]
    pub fn get(&self, p: Point) -> Result<T, GridError> {
        self.at(p).copied().ok_or(GridError::OutOfBounds(p))
    }
}

impl<T: PartialEq> Grid<T> {
    /// Every point whose label equals `label`, in row-major order.
    pub fn find_all(&self, label: &T) -> Vec<Point> {
        self.iter()
            .filter(|(_, cell)| *cell == label)
            .map(|(p, _)| p)
            .collect()
    }

    /// The first point (row-major) whose label equals `label`.
    pub fn find(&self, label: &T) -> Option<Point> {
        self.iter().find(|(_, cell)| *cell == label).map(|(p, _)| p)
    }
}

/// The lines of `text` up to the last non-empty one. Blank lines inside
/// the grid are kept so they fail as empty rows.
fn grid_lines(text: &str) -> impl Iterator<Item = &str> {
    let lines: Vec<&str> = text.lines().collect();
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(0, |i| i + 1);
    lines.into_iter().take(end)
}

impl Grid<char> {
    /// Parse one row per line of `text`. Trailing blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        Self::from_rows(grid_lines(text).map(str::chars))
    }
}

impl<T> Grid<T> {
    /// Parse one row per line of `text`, converting each character with `f`.
    /// Trailing blank lines are ignored. The first conversion error is
    /// returned as-is.
    pub fn parse_with<E, F>(text: &str, mut f: F) -> Result<Self, E>
    where
        F: FnMut(Point, char) -> Result<T, E>,
        E: From<GridError>,
    {
        let rows = grid_lines(text)
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, ch)| f(Point::new(row as i32, col as i32), ch))
                    .collect::<Result<Vec<T>, E>>()
            })
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Self::from_rows(rows)?)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Grid<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw<C> {
            cells: Vec<C>,
            bounds: Range,
        }
        let Raw { cells, bounds } = Raw::deserialize(deserializer)?;
        Grid::from_parts(cells, bounds).map_err(serde::de::Error::custom)
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("Sab\nacd\nabE").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }

    #[test]
    fn cells_must_fill_the_bounds() {
        let json = r#"{"cells":[],"bounds":{"min":{"row":0,"col":0},"max":{"row":2,"col":2}}}"#;
        assert!(serde_json::from_str::<Grid<char>>(json).is_err());
        let json = r#"{"cells":["a"],"bounds":{"min":{"row":1,"col":1},"max":{"row":2,"col":2}}}"#;
        assert!(serde_json::from_str::<Grid<char>>(json).is_err());
    }
}
