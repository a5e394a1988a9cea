//! The [`Grid`] type: every [`Cell`] of a fixed `width × height` maze.
//!
//! Cells are stored flat in row-major order and addressed by [`Point`].
//! Cells never hold references to each other; all topology queries go
//! through the grid.
//!
//! Every wall between two in-grid cells is stored twice, once on each side.
//! Mutators always update both flags together, so for any cell `c` and
//! direction `d` with an in-grid neighbour, `c.walls[d] == neighbour.walls[-d]`.
//! Flags facing off the board carry no connectivity meaning.

use crate::cell::{Cell, Walls};
use crate::direction::Direction;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// A fixed-size grid of walled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a grid of the given dimensions with every wall down.
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        let cells = bounds.iter().map(Cell::new).collect();
        Self { cells, bounds }
    }

    /// The rectangle covered by the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width() as usize + p.x as usize)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    // -----------------------------------------------------------------------
    // Topology
    // -----------------------------------------------------------------------

    /// In-grid neighbours of `p`, in [`Direction::ALL`] order. Off-grid
    /// offsets are dropped; an off-grid `p` has no neighbours.
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        if !self.contains(p) {
            return Vec::new();
        }
        Direction::ALL
            .iter()
            .map(|d| p + d.offset())
            .filter(|&n| self.contains(n))
            .collect()
    }

    /// Neighbours of `p` whose four walls are all still standing, i.e. cells
    /// not yet reached by the carving pass.
    pub fn walled_neighbors(&self, p: Point) -> Vec<Point> {
        self.neighbors(p)
            .into_iter()
            .filter(|&n| self.cell(n).is_some_and(|c| c.walls().all_closed()))
            .collect()
    }

    /// Neighbours reachable from `p` through a wall that is down on `p`'s
    /// side. Empty when `p` is outside the grid.
    pub fn open_neighbors(&self, p: Point) -> Vec<Point> {
        let Some(cell) = self.cell(p) else {
            return Vec::new();
        };
        cell.walls()
            .open()
            .map(|d| p + d.offset())
            .filter(|&n| self.contains(n))
            .collect()
    }

    /// Whether `p` has fewer than four in-grid neighbours.
    #[inline]
    pub fn is_edge_cell(&self, p: Point) -> bool {
        Direction::ALL.iter().any(|d| !self.contains(p + d.offset()))
    }

    /// Whether `a` and `b` are adjacent with the shared wall down.
    pub fn is_open_between(&self, a: Point, b: Point) -> bool {
        let Some(dir) = Direction::from_offset(b - a) else {
            return false;
        };
        match (self.cell(a), self.cell(b)) {
            (Some(ca), Some(_)) => !ca.has_wall(dir),
            _ => false,
        }
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Set the wall between `p` and its neighbour toward `dir` on both sides.
    pub fn set_wall(&mut self, p: Point, dir: Direction, closed: bool) -> Result<(), GridError> {
        let (i, j) = self.wall_pair(p, dir)?;
        self.cells[i].walls.set(dir, closed);
        self.cells[j].walls.set(dir.opposite(), closed);
        Ok(())
    }

    /// Flip the wall between `p` and its neighbour toward `dir` on both sides.
    ///
    /// Fails without mutating anything when `p` or the neighbour is off the
    /// grid.
    pub fn toggle_wall(&mut self, p: Point, dir: Direction) -> Result<(), GridError> {
        let (i, j) = self.wall_pair(p, dir)?;
        let closed = !self.cells[i].walls.get(dir);
        self.cells[i].walls.set(dir, closed);
        self.cells[j].walls.set(dir.opposite(), closed);
        Ok(())
    }

    /// [`toggle_wall`](Self::toggle_wall) addressed by a raw offset, which
    /// must be one of the four orthogonal unit offsets.
    pub fn toggle_wall_offset(&mut self, p: Point, offset: Point) -> Result<(), GridError> {
        let dir = Direction::from_offset(offset).ok_or(GridError::InvalidDirection(offset))?;
        self.toggle_wall(p, dir)
    }

    /// Knock down the wall shared by adjacent cells `a` and `b`.
    pub fn connect(&mut self, a: Point, b: Point) -> Result<(), GridError> {
        let dir = Direction::from_offset(b - a).ok_or(GridError::InvalidDirection(b - a))?;
        self.set_wall(a, dir, false)
    }

    /// Raise every wall of every cell, including flags facing off the board.
    pub fn close_all(&mut self) {
        self.fill_walls(Walls::CLOSED);
    }

    /// Knock down every wall of every cell.
    pub fn clear(&mut self) {
        self.fill_walls(Walls::OPEN);
    }

    fn fill_walls(&mut self, walls: Walls) {
        for c in self.cells.iter_mut() {
            c.walls = walls;
        }
    }

    /// Number of standing wall flags over all cells and directions.
    pub fn closed_wall_count(&self) -> usize {
        self.cells.iter().map(|c| c.walls().closed().count()).sum()
    }

    /// Toggle every wall along the axis-aligned run of lattice corners from
    /// `from` to `to`. Corner `(x, y)` is the top-left corner of cell
    /// `(x, y)`, so corners range over `0..=width` and `0..=height`.
    ///
    /// Each unit segment must separate two in-grid cells; otherwise nothing
    /// is toggled and [`GridError::InvalidSegment`] is returned. Returns the
    /// number of walls toggled.
    pub fn toggle_wall_segment(&mut self, from: Point, to: Point) -> Result<usize, GridError> {
        let invalid = GridError::InvalidSegment { from, to };
        let delta = to - from;
        if delta.x != 0 && delta.y != 0 {
            return Err(invalid);
        }
        let step = Point::new(delta.x.signum(), delta.y.signum());
        let count = (delta.x.abs() + delta.y.abs()) as usize;

        let mut walls = Vec::with_capacity(count);
        let mut corner = from;
        for _ in 0..count {
            let next = corner + step;
            let lo = Point::new(corner.x.min(next.x), corner.y.min(next.y));
            // Horizontal segments separate the cells above and below,
            // vertical ones the cells to the left and right.
            let (cell, dir) = if step.y == 0 {
                (Point::new(lo.x, lo.y - 1), Direction::South)
            } else {
                (Point::new(lo.x - 1, lo.y), Direction::East)
            };
            if !self.contains(cell) || !self.contains(cell + dir.offset()) {
                return Err(invalid);
            }
            walls.push((cell, dir));
            corner = next;
        }

        for &(cell, dir) in &walls {
            self.toggle_wall(cell, dir)?;
        }
        Ok(walls.len())
    }

    fn wall_pair(&self, p: Point, dir: Direction) -> Result<(usize, usize), GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds(p))?;
        let j = self
            .idx(p + dir.offset())
            .ok_or(GridError::OffGrid { cell: p, direction: dir })?;
        Ok((i, j))
    }
}
