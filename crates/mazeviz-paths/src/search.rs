//! The step-bounded search engine shared by every [`Algorithm`].
//!
//! A run always starts from scratch: fresh open set, closed list and
//! predecessor map. Expansion order depends only on the maze, the
//! endpoints and the fixed neighbour and tie-break orders, so asking for
//! `step = n` twice yields the same [`Snapshot`], and the run for `n + 1`
//! extends the run for `n` by exactly one expansion.

use std::collections::HashSet;

use log::{debug, trace};
use mazeviz_core::Point;

use crate::error::PathError;
use crate::heap::MinHeap;
use crate::trace::{PathMap, trace_path};
use crate::traits::Pather;

/// Which search strategy to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Uniform-cost search keyed by distance from the start.
    Dijkstra,
    /// Manhattan estimate plus the cross-product tie-breaker.
    AStarTieBreak,
    /// Manhattan estimate alone.
    AStarNoTieBreak,
    /// Always expand the most recently discovered cell.
    DepthFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::AStarTieBreak,
        Algorithm::AStarNoTieBreak,
        Algorithm::DepthFirst,
    ];

    /// Human-readable name for menus.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dijkstra => "Dijkstra's",
            Self::AStarTieBreak => "A* Diagonal Tie Breaker",
            Self::AStarNoTieBreak => "A* No Tie Breaker",
            Self::DepthFirst => "Depth First Search",
        }
    }

    /// One-paragraph explanation of how the strategy picks the next cell.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Dijkstra => {
                "Expands the unvisited cell with the shortest step distance from the start cell."
            }
            Self::AStarTieBreak => {
                "Scores each cell by its Manhattan distance to the end plus 0.001 times its \
                 distance from the line joining start and end; expands the lowest score first."
            }
            Self::AStarNoTieBreak => {
                "Scores each cell by its Manhattan distance to the end; expands the lowest \
                 score first."
            }
            Self::DepthFirst => {
                "Expands the most recently discovered cell along the current branch. \
                 Does not find the shortest path."
            }
        }
    }
}

/// The externally visible result of a bounded run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Expansions actually performed before stopping.
    pub step: usize,
    /// The most recently expanded cell (the start before any expansion).
    pub current: Point,
    /// Expanded cells in expansion order.
    pub visited: Vec<Point>,
}

/// A snapshot plus the search state it was taken from.
#[derive(Clone, Debug)]
pub struct SearchRun {
    pub snapshot: Snapshot,
    /// Parent links of every discovered cell.
    pub predecessors: PathMap,
    /// The chain from `snapshot.current` back to the start.
    pub path: PathMap,
    /// Whether the run stopped because it reached the end.
    pub reached_end: bool,
}

/// Open-set discipline used by [`Search::explore`].
pub(crate) trait Frontier {
    type Score: Copy;

    fn push(&mut self, p: Point, score: Self::Score);
    fn pop(&mut self) -> Result<(Point, Self::Score), PathError>;
    fn is_empty(&self) -> bool;
}

impl<S: PartialOrd + Copy> Frontier for MinHeap<Point, S> {
    type Score = S;

    #[inline]
    fn push(&mut self, p: Point, score: S) {
        MinHeap::push(self, p, score);
    }

    #[inline]
    fn pop(&mut self) -> Result<(Point, S), PathError> {
        self.pop_with_score()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        MinHeap::is_empty(self)
    }
}

/// Last-in first-out frontier for depth-first order.
impl Frontier for Vec<Point> {
    type Score = ();

    #[inline]
    fn push(&mut self, p: Point, _: ()) {
        Vec::push(self, p);
    }

    #[inline]
    fn pop(&mut self) -> Result<(Point, ()), PathError> {
        Vec::pop(self).map(|p| (p, ())).ok_or(PathError::EmptyQueue)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

/// A search between two fixed endpoints.
///
/// `Search` holds no per-run state, so several runs (even concurrent ones
/// on other threads) may share one `Search` and one maze.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Search {
    start: Point,
    end: Point,
}

impl Search {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Run `algorithm` from scratch and stop after `step` expansions or on
    /// reaching the end, whichever comes first.
    ///
    /// Returns `Ok(None)` when the open set runs dry first: the end is
    /// unreachable, or `step` exceeds the number of reachable cells. No
    /// snapshot is produced in that case.
    pub fn run<P: Pather>(
        &self,
        pather: &P,
        algorithm: Algorithm,
        step: usize,
    ) -> Result<Option<SearchRun>, PathError> {
        match algorithm {
            Algorithm::Dijkstra => self.dijkstra(pather, step),
            Algorithm::AStarTieBreak => self.astar(pather, step, true),
            Algorithm::AStarNoTieBreak => self.astar(pather, step, false),
            Algorithm::DepthFirst => self.depth_first(pather, step),
        }
    }

    /// The loop shared by every strategy.
    ///
    /// `score` maps a newly discovered cell and its parent's score to the
    /// cell's own score. A cell is scored and given a parent exactly once,
    /// when first discovered; it is never re-relaxed.
    pub(crate) fn explore<P, F>(
        &self,
        pather: &P,
        mut frontier: F,
        seed: F::Score,
        score: impl Fn(Point, F::Score) -> F::Score,
        step: usize,
    ) -> Result<Option<SearchRun>, PathError>
    where
        P: Pather,
        F: Frontier,
    {
        let mut predecessors = PathMap::new();
        let mut discovered: HashSet<Point> = HashSet::new();
        let mut closed: Vec<Point> = Vec::new();
        let mut nbuf: Vec<Point> = Vec::with_capacity(4);
        let mut current = self.start;

        discovered.insert(self.start);
        frontier.push(self.start, seed);

        loop {
            let reached_end = current == self.end;
            if reached_end || closed.len() == step {
                let path = trace_path(&predecessors, self.start, current)?;
                debug!(
                    "search {} -> {}: stopped at {} after {} expansions (reached end: {})",
                    self.start,
                    self.end,
                    current,
                    closed.len(),
                    reached_end
                );
                return Ok(Some(SearchRun {
                    snapshot: Snapshot {
                        step: closed.len(),
                        current,
                        visited: closed,
                    },
                    predecessors,
                    path,
                    reached_end,
                }));
            }

            if frontier.is_empty() {
                debug!(
                    "search {} -> {}: open set exhausted after {} expansions",
                    self.start,
                    self.end,
                    closed.len()
                );
                return Ok(None);
            }

            let (node, node_score) = frontier.pop()?;
            closed.push(node);
            current = node;

            nbuf.clear();
            pather.neighbors(node, &mut nbuf);
            for &n in nbuf.iter() {
                if discovered.insert(n) {
                    predecessors.insert(n, node);
                    frontier.push(n, score(n, node_score));
                }
            }
            trace!("expanded {} (#{})", node, closed.len());
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn snapshot_round_trip() {
        let snap = Snapshot {
            step: 2,
            current: Point::new(1, 0),
            visited: vec![Point::new(0, 0), Point::new(1, 0)],
        };
        let json = serde_json::to_string(&snap).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
