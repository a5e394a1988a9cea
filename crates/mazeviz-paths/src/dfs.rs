use mazeviz_core::Point;

use crate::search::{Search, SearchRun};
use crate::traits::Pather;
use crate::PathError;

impl Search {
    /// Depth-first exploration bounded by `step` expansions.
    ///
    /// Discovered cells go on a stack and the most recently discovered one
    /// is expanded next. Parents are still fixed at first discovery, so the
    /// traced path is a valid route but carries no length guarantee.
    pub fn depth_first<P: Pather>(&self, pather: &P, step: usize) -> Result<Option<SearchRun>, PathError> {
        let stack: Vec<Point> = Vec::new();
        self.explore(pather, stack, (), |_, _| (), step)
    }
}
