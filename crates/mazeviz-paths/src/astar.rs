use mazeviz_core::Point;

use crate::distance::{cross_tie_breaker, manhattan};
use crate::heap::MinHeap;
use crate::search::{Search, SearchRun};
use crate::traits::Pather;
use crate::PathError;

impl Search {
    /// The A* score of `p`: its Manhattan distance to the end, plus the
    /// cross-product tie-breaker when `tie_break` is set.
    pub fn f_score(&self, p: Point, tie_break: bool) -> f64 {
        let h = f64::from(manhattan(p, self.end()));
        if tie_break {
            h + cross_tie_breaker(p, self.start(), self.end())
        } else {
            h
        }
    }

    /// Heuristic-guided search bounded by `step` expansions.
    ///
    /// Cells are keyed by [`f_score`](Self::f_score) alone, which pulls the
    /// frontier straight toward the end. With `tie_break`, cells closer to
    /// the start-end line win among equal Manhattan estimates, giving
    /// visually straighter exploration.
    pub fn astar<P: Pather>(
        &self,
        pather: &P,
        step: usize,
        tie_break: bool,
    ) -> Result<Option<SearchRun>, PathError> {
        let open: MinHeap<Point, f64> = MinHeap::new();
        let seed = self.f_score(self.start(), tie_break);
        self.explore(pather, open, seed, |p, _| self.f_score(p, tie_break), step)
    }
}
