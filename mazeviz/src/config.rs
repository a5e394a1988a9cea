//! Construction-time settings for a [`Maze`](crate::Maze).

use mazeviz_core::Point;
use mazeviz_gen::DEFAULT_BRAID_RATIO;

use crate::error::MazeError;

/// Grid size and generation settings. The size is fixed for the lifetime
/// of the maze.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    /// Cells per row.
    pub width: i32,
    /// Cells per column.
    pub height: i32,
    /// Fraction of the cell count used to size the braiding pass.
    pub braid_ratio: f64,
    /// Seed for reproducible mazes; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Start cell; `None` means the top-left corner.
    pub start: Option<Point>,
    /// End cell; `None` means the bottom-right corner.
    pub end: Option<Point>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            braid_ratio: DEFAULT_BRAID_RATIO,
            seed: None,
            start: None,
            end: None,
        }
    }
}

impl MazeConfig {
    /// A default configuration of the given size.
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the generation seed (builder).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The start cell after applying the corner default.
    pub fn start_point(&self) -> Point {
        self.start.unwrap_or(Point::ZERO)
    }

    /// The end cell after applying the corner default.
    pub fn end_point(&self) -> Point {
        self.end
            .unwrap_or(Point::new(self.width - 1, self.height - 1))
    }

    /// Reject sizes, ratios and endpoints that cannot describe a maze.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(MazeError::InvalidConfig(format!(
                "grid size {}x{} must be positive",
                self.width, self.height
            )));
        }
        if !(0.0..=1.0).contains(&self.braid_ratio) {
            return Err(MazeError::InvalidConfig(format!(
                "braid ratio {} is outside [0, 1]",
                self.braid_ratio
            )));
        }
        for (name, p) in [("start", self.start_point()), ("end", self.end_point())] {
            if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
                return Err(MazeError::InvalidConfig(format!(
                    "{name} {p} is outside the {}x{} grid",
                    self.width, self.height
                )));
            }
        }
        Ok(())
    }
}
