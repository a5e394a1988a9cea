//! Maze generation for mazeviz grids.

pub mod maze;

pub use maze::{DEFAULT_BRAID_RATIO, GenStats, MazeGen};
