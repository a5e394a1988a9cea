//! **mazeviz**: a grid maze generator and step-by-step pathfinding engine.
//!
//! [`Maze`] ties the workspace together: it owns a fixed-size
//! [`Grid`](mazeviz_core::Grid), carves mazes into it, edits single walls
//! and runs bounded searches whose [`Snapshot`]s a renderer can scrub
//! through. [`Comparison`] runs two strategies in lockstep for a
//! side-by-side view.
//!
//! ```
//! use mazeviz::{Algorithm, Maze, MazeConfig};
//!
//! let mut maze = Maze::new(MazeConfig::with_size(8, 8).with_seed(3)).unwrap();
//! maze.generate().unwrap();
//! let snap = maze.run_search(Algorithm::AStarTieBreak, 5).unwrap().cloned();
//! assert_eq!(snap.map(|s| s.step), Some(5));
//! ```

pub mod compare;
pub mod config;
pub mod error;
pub mod model;

pub use compare::{Comparison, Pane, Side};
pub use config::MazeConfig;
pub use error::MazeError;
pub use model::Maze;

pub use mazeviz_core::{Cell, Direction, Grid, GridError, Point, Walls};
pub use mazeviz_gen::GenStats;
pub use mazeviz_paths::{Algorithm, PathError, PathMap, SearchRun, Snapshot};
