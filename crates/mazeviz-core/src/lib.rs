//! **mazeviz-core**: the grid maze data model.
//!
//! This crate provides the types shared by the rest of the *mazeviz*
//! workspace: geometry primitives, the four orthogonal directions, walled
//! cells and the [`Grid`] that owns them.

pub mod cell;
pub mod direction;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, Walls};
pub use direction::Direction;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::Grid;
