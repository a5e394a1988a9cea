//! Errors surfaced by the [`Maze`](crate::Maze) facade.

use std::fmt;

use mazeviz_core::GridError;
use mazeviz_paths::PathError;

/// Errors returned by [`Maze`](crate::Maze) operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// A grid mutation was rejected; the grid is unchanged.
    Grid(GridError),
    /// The search engine hit a broken internal invariant.
    Path(PathError),
    /// The configuration cannot describe a maze.
    InvalidConfig(String),
    /// A search was requested while the start or end is unset.
    NoEndpoints,
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Path(e) => write!(f, "search: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid maze configuration: {msg}"),
            Self::NoEndpoints => f.write_str("start and end must both be set to search"),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Path(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for MazeError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<PathError> for MazeError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}
