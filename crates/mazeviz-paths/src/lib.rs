//! Step-bounded shortest-path search on grid mazes.
//!
//! This crate provides the search engine the visualizer scrubs through:
//!
//! - **Dijkstra** uniform-cost search ([`Search::dijkstra`])
//! - **A\*** heuristic search, with or without a tie-breaker ([`Search::astar`])
//! - **Depth-first** exploration ([`Search::depth_first`])
//!
//! Every run restarts from scratch and stops after a caller-chosen number
//! of expansions, returning a reproducible [`Snapshot`]. Supporting pieces
//! are the [`MinHeap`] priority queue, the [`trace_path`] path tracer and
//! the breadth-first / flood-fill reference analyses.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | every search, BFS, flood fill |

mod astar;
mod bfs;
mod cc;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod heap;
mod search;
mod trace;
mod traits;

pub use bfs::{PathNode, bfs_distance, bfs_map};
pub use cc::{flood_fill, is_connected};
pub use distance::{TIE_BREAK_WEIGHT, cross_tie_breaker, manhattan};
pub use error::PathError;
pub use heap::MinHeap;
pub use search::{Algorithm, Search, SearchRun, Snapshot};
pub use trace::{PathMap, path_len, path_points, trace_path};
pub use traits::Pather;
