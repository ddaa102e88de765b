//! Face directions between neighboring cells.

use crate::BlockPos;
use crate::math::Vector3;

/// The six face directions of a cell.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Downward (-Y direction)
    Down = 0,
    /// Upward (+Y direction)
    Up = 1,
    /// North (-Z direction)
    North = 2,
    /// South (+Z direction)
    South = 3,
    /// West (-X direction)
    West = 4,
    /// East (+X direction)
    East = 5,
}

impl Direction {
    /// All six directions in array form for iteration.
    pub const ALL: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The four lateral directions in flow order: -x, +x, -z, +z.
    ///
    /// Flow cost tables are indexed in this order.
    pub const HORIZONTAL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Gets the offset in the given direction.
    ///
    /// Returns (dx, dy, dz) for this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Self::Down => (0, -1, 0),
            Self::Up => (0, 1, 0),
            Self::North => (0, 0, -1),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::East => (1, 0, 0),
        }
    }

    /// The offset as a vector.
    #[must_use]
    pub const fn normal(self) -> Vector3<i32> {
        let (dx, dy, dz) = self.offset();
        Vector3::new(dx, dy, dz)
    }

    /// Returns true for the four lateral directions.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        !matches!(self, Self::Down | Self::Up)
    }

    /// Index of this direction inside [`Direction::HORIZONTAL`].
    #[must_use]
    pub const fn horizontal_index(self) -> Option<usize> {
        match self {
            Self::West => Some(0),
            Self::East => Some(1),
            Self::North => Some(2),
            Self::South => Some(3),
            Self::Down | Self::Up => None,
        }
    }

    /// Returns a new `BlockPos` relative to the given position in this direction.
    #[must_use]
    pub const fn relative(self, pos: BlockPos) -> BlockPos {
        let (dx, dy, dz) = self.offset();
        pos.offset(dx, dy, dz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
        assert_eq!(Direction::West.opposite(), Direction::East);
        assert_eq!(Direction::North.opposite(), Direction::South);
    }

    #[test]
    fn test_horizontal_order() {
        let offsets: Vec<_> = Direction::HORIZONTAL.iter().map(|d| d.offset()).collect();
        assert_eq!(offsets, vec![(-1, 0, 0), (1, 0, 0), (0, 0, -1), (0, 0, 1)]);
        for (i, direction) in Direction::HORIZONTAL.iter().enumerate() {
            assert_eq!(direction.horizontal_index(), Some(i));
            assert!(direction.is_horizontal());
        }
        assert_eq!(Direction::Up.horizontal_index(), None);
    }

    #[test]
    fn test_relative() {
        let pos = BlockPos::new(0, 64, 0);
        assert_eq!(Direction::Down.relative(pos), BlockPos::new(0, 63, 0));
        assert_eq!(Direction::East.relative(pos), BlockPos::new(1, 64, 0));
        assert_eq!(Direction::North.relative(pos), BlockPos::new(0, 64, -1));
    }
}
