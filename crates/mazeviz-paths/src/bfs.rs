//! Plain breadth-first distances, the reference the weighted searches are
//! checked against.

use std::collections::{HashMap, VecDeque};

use mazeviz_core::Point;

use crate::traits::Pather;

/// A position with its distance from the BFS source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: usize,
}

/// Breadth-first distance map from `source`, in visiting order. Each move
/// costs 1; only cells reachable from `source` appear.
pub fn bfs_map<P: Pather>(pather: &P, source: Point) -> Vec<PathNode> {
    let mut dist: HashMap<Point, usize> = HashMap::new();
    let mut queue: VecDeque<Point> = VecDeque::new();
    let mut results = Vec::new();
    let mut nbuf = Vec::with_capacity(4);

    dist.insert(source, 0);
    queue.push_back(source);
    results.push(PathNode { pos: source, cost: 0 });

    while let Some(cp) = queue.pop_front() {
        let nd = dist[&cp] + 1;
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            if dist.contains_key(&np) {
                continue;
            }
            dist.insert(np, nd);
            queue.push_back(np);
            results.push(PathNode { pos: np, cost: nd });
        }
    }

    results
}

/// Number of moves on a shortest route from `from` to `to`, or `None` if
/// `to` is unreachable.
pub fn bfs_distance<P: Pather>(pather: &P, from: Point, to: Point) -> Option<usize> {
    bfs_map(pather, from)
        .into_iter()
        .find(|n| n.pos == to)
        .map(|n| n.cost)
}
