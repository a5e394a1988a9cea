//! Errors raised by grid mutators.

use std::fmt;

use crate::direction::Direction;
use crate::geom::Point;

/// Errors that can occur when mutating a [`Grid`](crate::Grid).
///
/// Every mutator validates before writing, so an error always means the
/// grid is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The addressed cell is outside the grid.
    OutOfBounds(Point),
    /// The offset is not one of the four orthogonal unit offsets.
    InvalidDirection(Point),
    /// The wall toward `direction` faces off the board.
    OffGrid { cell: Point, direction: Direction },
    /// The corner run is not axis-aligned or crosses the board edge.
    InvalidSegment { from: Point, to: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "cell {p} is outside the grid"),
            Self::InvalidDirection(d) => {
                write!(f, "offset {d} is not an orthogonal unit direction")
            }
            Self::OffGrid { cell, direction } => {
                write!(f, "wall of cell {cell} toward {direction:?} faces off the grid")
            }
            Self::InvalidSegment { from, to } => {
                write!(f, "wall segment {from} -> {to} is not a run of interior walls")
            }
        }
    }
}

impl std::error::Error for GridError {}
