//! Geometry primitives: [`Cell`] and [`Direction`].
//!
//! Coordinates are `(row, column)` with rows growing down and columns growing
//! right. Both are unsigned, so stepping off the top or left edge yields
//! `None` instead of a negative coordinate.

use std::fmt;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A grid address. Rows grow down, columns grow right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub column: usize,
}

impl Cell {
    /// Top-left corner (0, 0).
    pub const ORIGIN: Self = Self { row: 0, column: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The adjacent cell in direction `dir`, or `None` when that would take
    /// a coordinate below zero.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.offset();
        let row = self.row.checked_add_signed(dr)?;
        let column = self.column.checked_add_signed(dc)?;
        Some(Self { row, column })
    }

    /// Whether `other` is one of the four cardinal neighbours of `self`.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.row.abs_diff(other.row) + self.column.abs_diff(other.column) == 1
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.column.cmp(&other.column))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four cardinal moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Expansion order used by every search in this workspace. Changing it
    /// changes the order in which equal-length routes are discovered.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(Δrow, Δcolumn)` for one step in this direction.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let c = Cell::new(0, 1);
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
