use mazeviz_core::{Grid, Point};

/// Minimal search interface: neighbour enumeration over open edges.
///
/// Every edge has cost 1. Implementations must enumerate neighbours in a
/// fixed order so that repeated runs expand cells identically.
pub trait Pather {
    /// Append the cells reachable in one move from `p` into `buf`. The
    /// caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let Some(cell) = self.cell(p) else {
            return;
        };
        for d in cell.walls().open() {
            let n = p + d.offset();
            if self.contains(n) {
                buf.push(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazeviz_core::Direction;

    #[test]
    fn grid_pather_matches_open_neighbors() {
        let mut g = Grid::new(3, 3);
        g.toggle_wall(Point::new(1, 1), Direction::East).unwrap();
        for p in g.bounds().iter() {
            let mut buf = Vec::new();
            Pather::neighbors(&g, p, &mut buf);
            assert_eq!(buf, g.open_neighbors(p));
        }
    }
}
