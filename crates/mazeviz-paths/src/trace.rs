//! Path reconstruction from a predecessor map.

use std::collections::HashMap;

use mazeviz_core::Point;

use crate::error::PathError;

/// Child → parent links, as recorded by a search or traced back from a
/// target.
pub type PathMap = HashMap<Point, Point>;

/// Walk `predecessors` from `target` back to `start` and return the links
/// on that chain, each cell mapped to its parent.
///
/// The result is empty when `target == start`. Fails with
/// [`PathError::CorruptPredecessorMap`] when the chain breaks off or
/// revisits a cell before reaching `start`.
pub fn trace_path(predecessors: &PathMap, start: Point, target: Point) -> Result<PathMap, PathError> {
    let mut path = PathMap::new();
    let mut node = target;
    while node != start {
        let Some(&prev) = predecessors.get(&node) else {
            return Err(PathError::CorruptPredecessorMap(node));
        };
        if path.insert(node, prev).is_some() {
            return Err(PathError::CorruptPredecessorMap(node));
        }
        node = prev;
    }
    Ok(path)
}

/// The cells of a traced path in order, `start` first and `target` last.
pub fn path_points(path: &PathMap, start: Point, target: Point) -> Result<Vec<Point>, PathError> {
    let mut points = vec![target];
    let mut node = target;
    while node != start {
        if points.len() > path.len() {
            return Err(PathError::CorruptPredecessorMap(node));
        }
        let Some(&prev) = path.get(&node) else {
            return Err(PathError::CorruptPredecessorMap(node));
        };
        points.push(prev);
        node = prev;
    }
    points.reverse();
    Ok(points)
}

/// Number of moves on a traced path.
#[inline]
pub fn path_len(path: &PathMap) -> usize {
    path.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(points: &[(i32, i32)]) -> PathMap {
        points
            .windows(2)
            .map(|w| (Point::from(w[1]), Point::from(w[0])))
            .collect()
    }

    #[test]
    fn traces_only_the_chain_to_target() {
        let mut preds = chain(&[(0, 0), (1, 0), (2, 0), (2, 1)]);
        // A side branch that is not on the way to (2, 1).
        preds.insert(Point::new(0, 1), Point::new(0, 0));

        let path = trace_path(&preds, Point::new(0, 0), Point::new(2, 1)).unwrap();
        assert_eq!(path_len(&path), 3);
        assert!(!path.contains_key(&Point::new(0, 1)));
        assert_eq!(path[&Point::new(2, 1)], Point::new(2, 0));

        let pts = path_points(&path, Point::new(0, 0), Point::new(2, 1)).unwrap();
        assert_eq!(
            pts,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0), Point::new(2, 1)]
        );
    }

    #[test]
    fn target_equal_to_start_is_empty() {
        let path = trace_path(&PathMap::new(), Point::new(3, 3), Point::new(3, 3)).unwrap();
        assert!(path.is_empty());
        assert_eq!(
            path_points(&path, Point::new(3, 3), Point::new(3, 3)).unwrap(),
            vec![Point::new(3, 3)]
        );
    }

    #[test]
    fn broken_chain_is_reported() {
        let preds = chain(&[(5, 5), (1, 0), (2, 0)]);
        assert_eq!(
            trace_path(&preds, Point::new(0, 0), Point::new(2, 0)),
            Err(PathError::CorruptPredecessorMap(Point::new(5, 5)))
        );
    }

    #[test]
    fn cycle_is_reported() {
        let mut preds = PathMap::new();
        preds.insert(Point::new(1, 0), Point::new(2, 0));
        preds.insert(Point::new(2, 0), Point::new(1, 0));
        assert!(matches!(
            trace_path(&preds, Point::new(0, 0), Point::new(1, 0)),
            Err(PathError::CorruptPredecessorMap(_))
        ));
        assert!(path_points(&preds, Point::new(0, 0), Point::new(1, 0)).is_err());
    }
}
