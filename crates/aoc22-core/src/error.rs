//! Error type for grid construction and cell access.

use thiserror::Error;

use crate::geom::Point;

/// Errors raised by [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The rows handed to the constructor do not form a non-empty rectangle.
    #[error("malformed grid: {0}")]
    Malformed(String),
    /// A direct `get`/`set` addressed a cell outside the grid.
    #[error("point {0} is outside the grid")]
    OutOfBounds(Point),
}
