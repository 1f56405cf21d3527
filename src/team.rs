//! Team representation for Ddama.
//!
//! This module defines the [`Team`] enum representing the two players:
//! Yellow and Black. Yellow always moves first in a standard game.
//!
//! # Orientation
//!
//! Yellow advances toward higher rows and promotes on row 7; Black advances
//! toward lower rows and promotes on row 0. The per-team direction helpers
//! here are what the move validator uses to decide what "backward" means.
//!
//! # Representation
//!
//! Teams use `#[repr(usize)]` for efficient array indexing:
//! - `Team::Yellow = 0`
//! - `Team::Black = 1`
//!
//! # Example
//!
//! ```rust
//! use ddama::Team;
//!
//! let yellow = Team::Yellow;
//! let black = yellow.opponent();
//!
//! assert_eq!(yellow.forward_step(), 1);
//! assert_eq!(black.forward_step(), -1);
//! assert_eq!(black.opponent(), yellow);
//! ```

use std::fmt;
use std::ops::Not;

/// Represents a team (player) in the game.
#[repr(usize)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Team {
    /// The yellow team.
    #[default]
    Yellow = 0,
    /// The black team.
    Black = 1,
}

impl Team {
    /// Returns the opponent team.
    #[inline]
    #[must_use]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::Yellow => Self::Black,
            Self::Black => Self::Yellow,
        }
    }

    /// Returns the row delta of a forward move for this team.
    ///
    /// Yellow advances up the board (+1), Black advances down (-1).
    #[inline]
    #[must_use]
    pub const fn forward_step(&self) -> i8 {
        match self {
            Self::Yellow => 1,
            Self::Black => -1,
        }
    }

    /// Returns the row on which this team's pieces are promoted to sheikh.
    ///
    /// This is the opponent's back rank: row 7 for Yellow, row 0 for Black.
    #[inline]
    #[must_use]
    pub const fn back_rank(&self) -> i8 {
        match self {
            Self::Yellow => 7,
            Self::Black => 0,
        }
    }

    /// Returns the two rows seeded with this team's pieces at game start.
    #[inline]
    #[must_use]
    pub const fn home_rows(&self) -> [i8; 2] {
        match self {
            Self::Yellow => [1, 2],
            Self::Black => [5, 6],
        }
    }

    /// Converts a team to its index.
    #[inline]
    #[must_use]
    pub const fn to_usize(&self) -> usize {
        *self as usize
    }
}

impl From<Team> for usize {
    #[inline]
    fn from(team: Team) -> Self {
        team.to_usize()
    }
}

/// Error returned when converting an invalid index to a [`Team`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTeamIndex(pub usize);

impl fmt::Display for InvalidTeamIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid team index: {} (expected 0 or 1)", self.0)
    }
}

impl std::error::Error for InvalidTeamIndex {}

impl TryFrom<usize> for Team {
    type Error = InvalidTeamIndex;

    #[inline]
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Yellow),
            1 => Ok(Self::Black),
            _ => Err(InvalidTeamIndex(index)),
        }
    }
}

impl fmt::Display for Team {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Yellow => write!(f, "Yellow"),
            Self::Black => write!(f, "Black"),
        }
    }
}

impl Not for Team {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        self.opponent()
    }
}
