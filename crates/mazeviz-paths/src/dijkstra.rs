use mazeviz_core::Point;

use crate::heap::MinHeap;
use crate::search::{Search, SearchRun};
use crate::traits::Pather;
use crate::PathError;

impl Search {
    /// Uniform-cost search from the start, bounded by `step` expansions.
    ///
    /// Cells are keyed by their distance from the start. With unit edge
    /// costs the first discovery of a cell already carries its final
    /// distance, so the traced path to the end is a shortest one. Equal
    /// distances expand in discovery order, which makes the expansion order
    /// that of a breadth-first search.
    pub fn dijkstra<P: Pather>(&self, pather: &P, step: usize) -> Result<Option<SearchRun>, PathError> {
        let open: MinHeap<Point, u32> = MinHeap::new();
        self.explore(pather, open, 0, |_, dist| dist + 1, step)
    }
}
