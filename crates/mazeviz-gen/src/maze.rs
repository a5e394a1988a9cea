//! Maze generation.
//!
//! [`MazeGen::generate`] runs two passes over a [`Grid`]:
//! - **Carving**: a randomized depth-first backtracker knocks down walls
//!   until every cell is part of one spanning tree (a *perfect* maze with
//!   exactly one route between any two cells).
//! - **Braiding**: a few extra interior walls are removed afterwards so the
//!   maze has loops and several equally short routes can exist.

use log::debug;
use mazeviz_core::{Direction, Grid, GridError, Point};
use rand::Rng;

/// Fraction of the cell count used to size the braiding pass.
pub const DEFAULT_BRAID_RATIO: f64 = 0.05;

/// What a [`MazeGen::generate`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenStats {
    /// Cells joined to the spanning tree, the starting cell included.
    pub cells_carved: usize,
    /// Extra walls knocked down by braiding.
    pub walls_removed: usize,
}

/// Maze generator drawing its randomness from `rng`.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub braid_ratio: f64,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator with the default braid ratio.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            braid_ratio: DEFAULT_BRAID_RATIO,
        }
    }

    /// Set the braid ratio (builder).
    pub fn with_braid_ratio(mut self, ratio: f64) -> Self {
        self.braid_ratio = ratio;
        self
    }

    /// Replace every wall of `grid` with a freshly carved, braided maze.
    pub fn generate(&mut self, grid: &mut Grid) -> Result<GenStats, GridError> {
        let cells_carved = self.carve(grid)?;
        let walls_removed = self.braid(grid)?;
        debug!(
            "generated {}x{} maze: {} cells carved, {} loops added",
            grid.width(),
            grid.height(),
            cells_carved,
            walls_removed
        );
        Ok(GenStats {
            cells_carved,
            walls_removed,
        })
    }

    /// Raise every wall, then carve a spanning tree with a randomized
    /// depth-first backtracker starting from a uniformly random cell.
    ///
    /// A cell whose four walls are all standing has not been reached yet.
    /// Returns the number of cells in the tree.
    pub fn carve(&mut self, grid: &mut Grid) -> Result<usize, GridError> {
        grid.close_all();
        let total = grid.len();
        if total == 0 {
            return Ok(0);
        }

        let mut current = Point::new(
            self.rng.random_range(0..grid.width()),
            self.rng.random_range(0..grid.height()),
        );
        let mut stack: Vec<Point> = Vec::new();
        let mut visited = 1;

        while visited < total {
            let fresh = grid.walled_neighbors(current);
            if fresh.is_empty() {
                // Dead end: backtrack.
                match stack.pop() {
                    Some(prev) => current = prev,
                    None => break,
                }
                continue;
            }
            let next = fresh[self.rng.random_range(0..fresh.len())];
            grid.connect(current, next)?;
            stack.push(current);
            current = next;
            visited += 1;
        }

        Ok(visited)
    }

    /// Knock down `floor(cells * braid_ratio) + 1` more interior walls.
    ///
    /// Each try picks a uniformly random interior cell (four in-grid
    /// neighbours), then one of its standing walls uniformly. A picked cell
    /// with no standing wall is dropped from the pool. Edge cells are never
    /// picked. Stops early when the pool runs dry. Returns the number of
    /// walls removed.
    pub fn braid(&mut self, grid: &mut Grid) -> Result<usize, GridError> {
        let budget = (grid.len() as f64 * self.braid_ratio).floor() as usize + 1;
        let mut pool: Vec<Point> = grid
            .bounds()
            .iter()
            .filter(|&p| !grid.is_edge_cell(p))
            .collect();
        let mut removed = 0;

        while removed < budget {
            if pool.is_empty() {
                debug!("braiding stopped early: no interior walls left");
                break;
            }
            let i = self.rng.random_range(0..pool.len());
            let closed: Vec<Direction> = grid
                .cell(pool[i])
                .map(|c| c.walls().closed().collect())
                .unwrap_or_default();
            if closed.is_empty() {
                pool.swap_remove(i);
                continue;
            }
            let dir = closed[self.rng.random_range(0..closed.len())];
            grid.set_wall(pool[i], dir, false)?;
            removed += 1;
        }

        Ok(removed)
    }
}
