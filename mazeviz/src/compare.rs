//! Side-by-side comparison of two search strategies on one maze.

use log::debug;
use mazeviz_core::Point;
use mazeviz_paths::{Algorithm, PathMap, SearchRun, Snapshot};

use crate::error::MazeError;
use crate::model::Maze;

/// The last observable state of one search view.
#[derive(Debug, Clone)]
pub struct Pane {
    /// Strategy this view runs.
    pub algorithm: Algorithm,
    snapshot: Option<Snapshot>,
    path: PathMap,
    /// The end cell the recorded run stopped on, if it stopped on one.
    reached: Option<Point>,
}

impl Pane {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            snapshot: None,
            path: PathMap::new(),
            reached: None,
        }
    }

    /// Store the outcome of a run. A run that produced no snapshot leaves
    /// the previous one in place. Returns whether anything was stored.
    pub fn record(&mut self, run: Option<SearchRun>) -> bool {
        let Some(run) = run else {
            return false;
        };
        self.reached = run.reached_end.then_some(run.snapshot.current);
        self.snapshot = Some(run.snapshot);
        self.path = run.path;
        true
    }

    #[inline]
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// The traced path to the snapshot's current cell.
    #[inline]
    pub fn path(&self) -> &PathMap {
        &self.path
    }

    /// The traced path, if the recorded run was searching for `end` and
    /// reached it.
    pub fn shortest_path(&self, end: Point) -> Option<&PathMap> {
        (self.reached == Some(end)).then_some(&self.path)
    }
}

/// One of the two comparison views.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// Two panes scrubbed in lockstep over the same maze and endpoints.
#[derive(Debug, Clone)]
pub struct Comparison {
    panes: [Pane; 2],
}

impl Default for Comparison {
    fn default() -> Self {
        Self::new(Algorithm::Dijkstra, Algorithm::AStarTieBreak)
    }
}

impl Comparison {
    pub fn new(left: Algorithm, right: Algorithm) -> Self {
        Self {
            panes: [Pane::new(left), Pane::new(right)],
        }
    }

    #[inline]
    pub fn pane(&self, side: Side) -> &Pane {
        &self.panes[side.index()]
    }

    /// Switch the strategy of one pane. Its snapshot is kept until the next
    /// [`update`](Self::update).
    pub fn set_algorithm(&mut self, side: Side, algorithm: Algorithm) {
        self.panes[side.index()].algorithm = algorithm;
    }

    /// Re-run both panes at `step`. The maze is only read.
    pub fn update(&mut self, maze: &Maze, step: usize) -> Result<(), MazeError> {
        for pane in self.panes.iter_mut() {
            let run = maze.search(pane.algorithm, step)?;
            if !pane.record(run) {
                debug!("{} produced no snapshot at step {}", pane.algorithm.name(), step);
            }
        }
        Ok(())
    }
}
