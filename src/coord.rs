//! Coordinate representation for the 8×8 Ddama board.
//!
//! This module defines the [`Coord`] value type addressing a cell by
//! `(column, row)`, and the [`Direction`] enum for the four orthogonal
//! movement axes.
//!
//! # Board Layout
//!
//! ```text
//!       0   1   2   3   4   5   6   7   (col)
//!     +---+---+---+---+---+---+---+---+
//!   7 |   |   |   |   |   |   |   |   |  ← Yellow promotes here
//!     +---+---+---+---+---+---+---+---+
//!  ...
//!     +---+---+---+---+---+---+---+---+
//!   0 |   |   |   |   |   |   |   |   |  ← Black promotes here
//!     +---+---+---+---+---+---+---+---+
//! (row)
//! ```
//!
//! # Range
//!
//! Coordinates are plain signed pairs with structural equality. Values
//! outside `[0, 7] × [0, 7]` are representable so that ray scans can step
//! off the edge of the board; [`Coord::is_in_range`] is the single place
//! that decides validity, and every rule check validates range before
//! touching the grid.
//!
//! # Example
//!
//! ```rust
//! use ddama::{Coord, Direction};
//!
//! let c = Coord::new(2, 2);
//! assert!(c.is_in_range());
//! assert_eq!(c.step(Direction::Up), Coord::new(2, 3));
//! assert_eq!(Coord::new(-1, 0).is_in_range(), false);
//! ```

use std::fmt;

/// Number of cells along each edge of the board.
pub const BOARD_SIZE: i8 = 8;

/// A cell address on (or off) the board: `(column, row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// The column (file), 0-7 when in range.
    pub col: i8,
    /// The row (rank), 0-7 when in range.
    pub row: i8,
}

impl Coord {
    /// Creates a new coordinate.
    #[inline]
    #[must_use]
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    /// Checks whether the coordinate lies on the board.
    #[inline]
    #[must_use]
    pub const fn is_in_range(&self) -> bool {
        self.col >= 0 && self.col < BOARD_SIZE && self.row >= 0 && self.row < BOARD_SIZE
    }

    /// Returns the coordinate offset by the given column and row deltas.
    ///
    /// The result may be off the board; check [`is_in_range`](Self::is_in_range).
    #[inline]
    #[must_use]
    pub const fn offset(&self, dcol: i8, drow: i8) -> Self {
        Self::new(self.col + dcol, self.row + drow)
    }

    /// Returns the adjacent coordinate one step in the given direction.
    #[inline]
    #[must_use]
    pub const fn step(&self, direction: Direction) -> Self {
        let (dcol, drow) = direction.delta();
        self.offset(dcol, drow)
    }

    /// Returns the manhattan distance between two coordinates.
    #[inline]
    #[must_use]
    pub const fn manhattan(&self, other: Self) -> i8 {
        (self.col - other.col).abs() + (self.row - other.row).abs()
    }

    /// Checks whether two coordinates are orthogonally adjacent.
    #[inline]
    #[must_use]
    pub const fn is_adjacent(&self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i8, i8)> for Coord {
    #[inline]
    fn from((col, row): (i8, i8)) -> Self {
        Self::new(col, row)
    }
}

impl fmt::Display for Coord {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// One of the four orthogonal movement directions.
///
/// Ddama pieces never move diagonally, so these four axes cover every
/// legal path on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward higher rows (Yellow's forward).
    Up,
    /// Toward lower rows (Black's forward).
    Down,
    /// Toward lower columns.
    Left,
    /// Toward higher columns.
    Right,
}

impl Direction {
    /// All four directions, in scan order.
    pub const ALL: [Self; 4] = [Self::Right, Self::Left, Self::Up, Self::Down];

    /// Returns the `(column, row)` delta of one step in this direction.
    #[inline]
    #[must_use]
    pub const fn delta(&self) -> (i8, i8) {
        match self {
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}
