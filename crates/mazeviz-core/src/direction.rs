//! The four orthogonal [`Direction`]s used to address walls and neighbours.

use crate::geom::Point;

/// One of the four orthogonal unit offsets. Y grows down, so `North` is
/// `(0, -1)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    West,
    East,
    North,
    South,
}

impl Direction {
    /// All four directions, in neighbour enumeration order.
    ///
    /// Every neighbour query walks this array front to back, which fixes the
    /// exploration order of the searches for a given maze.
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    /// The unit offset for this direction.
    #[inline]
    pub const fn offset(self) -> Point {
        match self {
            Self::West => Point::new(-1, 0),
            Self::East => Point::new(1, 0),
            Self::North => Point::new(0, -1),
            Self::South => Point::new(0, 1),
        }
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::West => Self::East,
            Self::East => Self::West,
            Self::North => Self::South,
            Self::South => Self::North,
        }
    }

    /// Map a unit offset back to its direction. Zero, diagonal and longer
    /// offsets have no direction.
    pub fn from_offset(offset: Point) -> Option<Self> {
        match (offset.x, offset.y) {
            (-1, 0) => Some(Self::West),
            (1, 0) => Some(Self::East),
            (0, -1) => Some(Self::North),
            (0, 1) => Some(Self::South),
            _ => None,
        }
    }

    /// Slot of this direction inside a per-direction array.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::West => 0,
            Self::East => 1,
            Self::North => 2,
            Self::South => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_round_trip() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_offset(d.offset()), Some(d));
            assert_eq!(d.opposite().offset(), -d.offset());
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn diagonal_and_zero_offsets_rejected() {
        assert_eq!(Direction::from_offset(Point::new(1, 1)), None);
        assert_eq!(Direction::from_offset(Point::new(-1, 1)), None);
        assert_eq!(Direction::from_offset(Point::ZERO), None);
        assert_eq!(Direction::from_offset(Point::new(2, 0)), None);
    }

    #[test]
    fn indices_are_distinct() {
        let mut seen = [false; 4];
        for d in Direction::ALL {
            assert!(!seen[d.index()]);
            seen[d.index()] = true;
        }
    }
}
