//! The [`Cell`] type: one lattice position and its four wall flags.

use crate::direction::Direction;
use crate::geom::Point;

/// Per-direction wall flags. `true` means a wall blocks movement that way.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walls([bool; 4]);

impl Walls {
    /// Every wall up.
    pub const CLOSED: Self = Self([true; 4]);
    /// Every wall down.
    pub const OPEN: Self = Self([false; 4]);

    #[inline]
    pub const fn get(self, dir: Direction) -> bool {
        self.0[dir.index()]
    }

    #[inline]
    pub fn set(&mut self, dir: Direction, closed: bool) {
        self.0[dir.index()] = closed;
    }

    /// Whether all four walls are still standing.
    #[inline]
    pub fn all_closed(self) -> bool {
        self.0.iter().all(|&w| w)
    }

    /// Directions whose wall is standing, in [`Direction::ALL`] order.
    pub fn closed(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.get(d))
    }

    /// Directions whose wall is down, in [`Direction::ALL`] order.
    pub fn open(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| !self.get(d))
    }
}

/// One grid position. The location is fixed at construction; only the
/// walls change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    location: Point,
    pub(crate) walls: Walls,
}

impl Cell {
    /// A cell with every wall down.
    #[inline]
    pub const fn new(location: Point) -> Self {
        Self {
            location,
            walls: Walls::OPEN,
        }
    }

    #[inline]
    pub const fn location(&self) -> Point {
        self.location
    }

    #[inline]
    pub const fn walls(&self) -> Walls {
        self.walls
    }

    /// Whether the wall toward `dir` is standing.
    #[inline]
    pub const fn has_wall(&self, dir: Direction) -> bool {
        self.walls.get(dir)
    }
}
