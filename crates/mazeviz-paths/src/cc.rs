//! Flood fill and connectivity checks.

use std::collections::HashSet;

use mazeviz_core::{Point, Range};

use crate::traits::Pather;

/// Every cell reachable from `source`, `source` included.
pub fn flood_fill<P: Pather>(pather: &P, source: Point) -> HashSet<Point> {
    let mut seen: HashSet<Point> = HashSet::new();
    let mut stack = vec![source];
    let mut nbuf = Vec::with_capacity(4);
    seen.insert(source);

    // Iterative DFS.
    while let Some(cp) = stack.pop() {
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            if seen.insert(np) {
                stack.push(np);
            }
        }
    }

    seen
}

/// Whether every cell of `range` is reachable from every other.
pub fn is_connected<P: Pather>(pather: &P, range: Range) -> bool {
    if range.is_empty() {
        return true;
    }
    let reached = flood_fill(pather, range.min);
    range.iter().all(|p| reached.contains(&p))
}
