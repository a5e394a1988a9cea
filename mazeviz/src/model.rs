//! The [`Maze`] facade: the engine surface a renderer drives.

use log::debug;
use mazeviz_core::{Direction, Grid, GridError, Point};
use mazeviz_gen::{GenStats, MazeGen};
use mazeviz_paths::{Algorithm, PathMap, Search, SearchRun, Snapshot};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::compare::Pane;
use crate::config::MazeConfig;
use crate::error::MazeError;

/// A maze, its endpoints and the result of the latest search.
///
/// Only one caller mutates a `Maze` at a time (`&mut self`). Read-only
/// searches through [`search`](Self::search) borrow it immutably and may
/// run side by side.
pub struct Maze {
    grid: Grid,
    start: Option<Point>,
    end: Option<Point>,
    generator: MazeGen<StdRng>,
    latest: Pane,
}

impl Maze {
    /// Build an open (wall-free) maze from `config`.
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            grid: Grid::new(config.width, config.height),
            start: Some(config.start_point()),
            end: Some(config.end_point()),
            generator: MazeGen::new(rng).with_braid_ratio(config.braid_ratio),
            latest: Pane::new(Algorithm::Dijkstra),
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// The largest step a scrubbing control needs: one per cell.
    #[inline]
    pub fn max_step(&self) -> usize {
        self.grid.len()
    }

    /// Move (or with `None`, remove) the start cell.
    pub fn set_start(&mut self, start: Option<Point>) -> Result<(), MazeError> {
        self.check_endpoint(start)?;
        debug!("start moved to {start:?}");
        self.start = start;
        Ok(())
    }

    /// Move (or with `None`, remove) the end cell.
    pub fn set_end(&mut self, end: Option<Point>) -> Result<(), MazeError> {
        self.check_endpoint(end)?;
        debug!("end moved to {end:?}");
        self.end = end;
        Ok(())
    }

    fn check_endpoint(&self, p: Option<Point>) -> Result<(), MazeError> {
        match p {
            Some(p) if !self.grid.contains(p) => Err(GridError::OutOfBounds(p).into()),
            _ => Ok(()),
        }
    }

    // -----------------------------------------------------------------------
    // Grid mutators
    // -----------------------------------------------------------------------

    /// Carve a new braided maze over the whole grid.
    pub fn generate(&mut self) -> Result<GenStats, MazeError> {
        Ok(self.generator.generate(&mut self.grid)?)
    }

    /// Knock down every wall without carving a new maze.
    pub fn clear_grid(&mut self) {
        self.grid.clear();
        debug!("grid cleared");
    }

    /// Flip the wall between `cell` and its neighbour toward `dir`.
    pub fn toggle_wall(&mut self, cell: Point, dir: Direction) -> Result<(), MazeError> {
        Ok(self.grid.toggle_wall(cell, dir)?)
    }

    /// Flip every wall along a run of lattice corners; see
    /// [`Grid::toggle_wall_segment`].
    pub fn toggle_wall_segment(&mut self, from: Point, to: Point) -> Result<usize, MazeError> {
        Ok(self.grid.toggle_wall_segment(from, to)?)
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// The search between the current endpoints.
    pub fn endpoints(&self) -> Result<Search, MazeError> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Ok(Search::new(start, end)),
            _ => Err(MazeError::NoEndpoints),
        }
    }

    /// Run `algorithm` from scratch for at most `step` expansions without
    /// recording anything.
    pub fn search(&self, algorithm: Algorithm, step: usize) -> Result<Option<SearchRun>, MazeError> {
        Ok(self.endpoints()?.run(&self.grid, algorithm, step)?)
    }

    /// Run `algorithm` for at most `step` expansions and record the result.
    ///
    /// Returns the fresh snapshot, or `None` when the run ended with an
    /// empty open set. In that case the previously recorded snapshot stays
    /// the latest one.
    pub fn run_search(&mut self, algorithm: Algorithm, step: usize) -> Result<Option<&Snapshot>, MazeError> {
        let run = self.search(algorithm, step)?;
        self.latest.algorithm = algorithm;
        if self.latest.record(run) {
            Ok(self.latest.snapshot())
        } else {
            Ok(None)
        }
    }

    /// The latest recorded snapshot.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.latest.snapshot()
    }

    /// The traced path of the latest snapshot, once that snapshot has
    /// reached the end.
    pub fn shortest_path(&self) -> Option<&PathMap> {
        self.latest.shortest_path(self.end?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(w: i32, h: i32, seed: u64) -> Maze {
        Maze::new(MazeConfig::with_size(w, h).with_seed(seed)).unwrap()
    }

    #[test]
    fn new_maze_is_open_with_corner_endpoints() {
        let maze = seeded(6, 4, 1);
        assert_eq!(maze.grid().closed_wall_count(), 0);
        assert_eq!(maze.start(), Some(Point::new(0, 0)));
        assert_eq!(maze.end(), Some(Point::new(5, 3)));
        assert_eq!(maze.max_step(), 24);
        assert!(maze.snapshot().is_none());
        assert!(maze.shortest_path().is_none());
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert!(matches!(
            Maze::new(MazeConfig::with_size(0, 3)),
            Err(MazeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn endpoints_must_be_set_and_in_grid() {
        let mut maze = seeded(4, 4, 1);
        assert!(maze.set_start(Some(Point::new(4, 0))).is_err());
        assert_eq!(maze.start(), Some(Point::new(0, 0)));

        maze.set_end(None).unwrap();
        assert_eq!(
            maze.run_search(Algorithm::Dijkstra, 3).unwrap_err(),
            MazeError::NoEndpoints
        );
        maze.set_end(Some(Point::new(1, 1))).unwrap();
        assert!(maze.run_search(Algorithm::Dijkstra, 3).unwrap().is_some());
    }

    #[test]
    fn shortest_path_needs_the_end() {
        let mut maze = seeded(3, 3, 1);
        maze.run_search(Algorithm::Dijkstra, 2).unwrap();
        assert!(maze.snapshot().is_some());
        assert!(maze.shortest_path().is_none());
        maze.run_search(Algorithm::Dijkstra, usize::MAX).unwrap();
        assert_eq!(maze.shortest_path().map(|p| p.len()), Some(4));
    }

    #[test]
    fn moving_the_end_onto_a_partial_run_is_not_a_path() {
        let mut maze = seeded(3, 3, 1);
        let snap = maze.run_search(Algorithm::Dijkstra, 2).unwrap().cloned().unwrap();
        assert_eq!(snap.current, Point::new(1, 0));

        maze.set_end(Some(Point::new(1, 0))).unwrap();
        assert!(maze.shortest_path().is_none());
        maze.run_search(Algorithm::Dijkstra, 2).unwrap();
        assert_eq!(maze.shortest_path().map(|p| p.len()), Some(1));

        maze.set_end(Some(Point::new(2, 2))).unwrap();
        assert!(maze.shortest_path().is_none());
    }

    #[test]
    fn starved_run_keeps_previous_snapshot() {
        let mut maze = seeded(3, 1, 1);
        let first = maze.run_search(Algorithm::Dijkstra, 1).unwrap().cloned();
        assert!(first.is_some());

        maze.toggle_wall(Point::new(1, 0), Direction::East).unwrap();
        assert!(maze.run_search(Algorithm::Dijkstra, 10).unwrap().is_none());
        assert_eq!(maze.snapshot().cloned(), first);
    }

    #[test]
    fn rejected_toggle_leaves_grid_alone() {
        let mut maze = seeded(3, 3, 1);
        let before = maze.grid().clone();
        assert!(maze.toggle_wall(Point::new(2, 2), Direction::East).is_err());
        assert!(maze.toggle_wall_segment(Point::new(0, 0), Point::new(1, 1)).is_err());
        assert_eq!(maze.grid(), &before);
        assert_eq!(maze.toggle_wall_segment(Point::new(1, 0), Point::new(1, 3)).unwrap(), 3);
    }
}
