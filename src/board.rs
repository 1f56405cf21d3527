//! Board representation for Ddama.
//!
//! This module defines the [`Board`] struct: an 8×8 grid where every cell is
//! either empty or holds one owned [`Piece`]. The board is pure data plus
//! accessors; it performs no legality checking of its own. All mutation goes
//! through the turn controller in [`Game`](crate::Game), which is the only
//! component allowed to write the grid.
//!
//! # Invariants
//!
//! - A piece occupies exactly one cell (or none at all, once captured).
//! - Each team has at most 16 pieces.
//!
//! [`Board::validate`] checks these in debug builds.
//!
//! # Example
//!
//! ```rust
//! use ddama::{Board, Coord, Team};
//!
//! let board = Board::new_default();
//!
//! // Yellow seeds rows 1-2, Black seeds rows 5-6
//! assert_eq!(board.piece_at(Coord::new(0, 1)).unwrap().team, Team::Yellow);
//! assert_eq!(board.piece_at(Coord::new(0, 6)).unwrap().team, Team::Black);
//! assert!(board.piece_at(Coord::new(0, 0)).is_none());
//!
//! assert_eq!(board.count(Team::Yellow), 16);
//! assert_eq!(board.count(Team::Black), 16);
//! ```

use std::fmt;

use crate::coord::BOARD_SIZE;
use crate::{Coord, Piece, Team};

/// Number of cells on the board.
const CELL_COUNT: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// Number of pieces each team starts with.
pub const PIECES_PER_TEAM: usize = 16;

/// The 8×8 grid of cells, each empty or holding one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Cells indexed `row * 8 + col`.
    cells: [Option<Piece>; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new_empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Creates a board with the standard starting layout: 16 unpromoted
    /// pieces per team on that team's two home rows.
    #[must_use]
    pub fn new_default() -> Self {
        let mut board = Self::new_empty();
        for team in [Team::Yellow, Team::Black] {
            for row in team.home_rows() {
                for col in 0..BOARD_SIZE {
                    board.place_(Coord::new(col, row), Piece::new(team));
                }
            }
        }
        board
    }

    /// Creates a board from an explicit list of placements, for tests and
    /// custom positions.
    ///
    /// # Panics
    /// Panics if a coordinate is off the board or listed twice.
    #[must_use]
    pub fn from_pieces(placements: &[(Coord, Piece)]) -> Self {
        let mut board = Self::new_empty();
        for &(coord, piece) in placements {
            assert!(coord.is_in_range(), "placement off the board: {coord}");
            assert!(
                board.piece_at(coord).is_none(),
                "duplicate placement at {coord}"
            );
            board.place_(coord, piece);
        }
        board
    }

    /// Converts an in-range coordinate to its cell index.
    #[inline]
    fn index(coord: Coord) -> usize {
        debug_assert!(coord.is_in_range(), "coordinate off the board: {coord}");
        (coord.row * BOARD_SIZE + coord.col) as usize
    }

    /// Returns the occupant of the given cell, or `None` if the cell is
    /// empty or the coordinate is off the board.
    ///
    /// Rule checks validate range before consulting the grid, so an
    /// off-board query here is answered rather than asserted.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        if !coord.is_in_range() {
            return None;
        }
        self.cells[Self::index(coord)]
    }

    /// Checks whether the cell is on the board and empty.
    #[inline]
    #[must_use]
    pub fn is_free(&self, coord: Coord) -> bool {
        coord.is_in_range() && self.cells[Self::index(coord)].is_none()
    }

    /// Puts a piece on the given cell, replacing any occupant.
    ///
    /// Direct mutator with no legality checking; only the turn controller
    /// calls this when applying a validated move.
    #[inline]
    pub fn place_(&mut self, coord: Coord, piece: Piece) {
        self.cells[Self::index(coord)] = Some(piece);
    }

    /// Empties the given cell, returning the removed piece if there was one.
    #[inline]
    pub fn clear_(&mut self, coord: Coord) -> Option<Piece> {
        self.cells[Self::index(coord)].take()
    }

    /// Promotes the piece on the given cell to a sheikh.
    ///
    /// A no-op for empty cells and for pieces that are already sheikhs.
    #[inline]
    pub fn promote_at_(&mut self, coord: Coord) {
        if let Some(piece) = &mut self.cells[Self::index(coord)] {
            piece.promote_();
        }
    }

    /// Counts the pieces belonging to the given team.
    #[must_use]
    pub fn count(&self, team: Team) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|piece| piece.team == team)
            .count()
    }

    /// Iterates over all occupied cells as `(coordinate, piece)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(|(index, cell)| {
            let index = index as i8;
            let coord = Coord::new(index % BOARD_SIZE, index / BOARD_SIZE);
            cell.map(|piece| (coord, piece))
        })
    }

    /// Validates the board invariants in debug builds.
    ///
    /// In release builds this is a no-op.
    ///
    /// # Panics (debug builds only)
    /// Panics if a team has more than 16 pieces.
    pub fn validate(&self) {
        for team in [Team::Yellow, Team::Black] {
            debug_assert!(
                self.count(team) <= PIECES_PER_TEAM,
                "more than {PIECES_PER_TEAM} pieces for {team}",
            );
        }
    }
}

impl Default for Board {
    /// Returns the standard starting layout.
    fn default() -> Self {
        Self::new_default()
    }
}

impl fmt::Display for Board {
    /// Formats the board as a diagram, highest row on top, with `y`/`b` for
    /// men and `Y`/`B` for sheikhs.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut result = "   0 1 2 3 4 5 6 7\n".to_string();

        for row in (0..BOARD_SIZE).rev() {
            let mut line = format!("{row} ");
            for col in 0..BOARD_SIZE {
                match self.piece_at(Coord::new(col, row)) {
                    Some(piece) => line += &format!(" {piece}"),
                    None => line += " .",
                }
            }
            line += &format!("  {row}\n");
            result += &line;
        }

        result += "   0 1 2 3 4 5 6 7";
        write!(f, "{result}")
    }
}
