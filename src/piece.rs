//! Piece representation for Ddama.
//!
//! A [`Piece`] belongs to one of the two teams and carries a single bit of
//! state: whether it has been promoted to a sheikh. Promotion happens at
//! most once, when the piece reaches the opponent's back rank, and is never
//! undone. A piece keeps its identity across moves: the controller moves the
//! record between cells rather than recreating it.

use std::fmt;

use crate::Team;

/// A single piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    /// The team that owns the piece.
    pub team: Team,
    /// Whether the piece has been promoted to a sheikh.
    sheikh: bool,
}

impl Piece {
    /// Creates a new unpromoted piece for the given team.
    #[inline]
    #[must_use]
    pub const fn new(team: Team) -> Self {
        Self {
            team,
            sheikh: false,
        }
    }

    /// Creates a sheikh for the given team, for setting up custom positions.
    #[inline]
    #[must_use]
    pub const fn sheikh(team: Team) -> Self {
        Self { team, sheikh: true }
    }

    /// Checks whether the piece has been promoted.
    #[inline]
    #[must_use]
    pub const fn is_sheikh(&self) -> bool {
        self.sheikh
    }

    /// Promotes the piece to a sheikh.
    ///
    /// Promoting a sheikh again is a no-op; the flag never goes back.
    #[inline]
    pub fn promote_(&mut self) {
        self.sheikh = true;
    }
}

impl fmt::Display for Piece {
    /// Formats the piece as a single character: `y`/`b` for men,
    /// `Y`/`B` for sheikhs.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ch = match (self.team, self.sheikh) {
            (Team::Yellow, false) => 'y',
            (Team::Yellow, true) => 'Y',
            (Team::Black, false) => 'b',
            (Team::Black, true) => 'B',
        };
        write!(f, "{ch}")
    }
}
