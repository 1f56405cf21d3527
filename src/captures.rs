//! Capture enumeration for Ddama.
//!
//! Captures are mandatory: a player with any legal capture may not play a
//! non-capturing move. This module computes the full set of captures
//! available to a side, which the turn controller recomputes once per
//! completed turn (and after a minigame resolves, since that can change the
//! board) — never per input event.
//!
//! # Scan
//!
//! For each of the side's pieces, each of the four orthogonal rays is walked
//! outward: empty cells are skipped, the first occupied cell is the only
//! capture candidate on that ray, and the landing is the cell immediately
//! beyond it. The candidate is checked with
//! [`rules::validate_capture`](crate::rules::validate_capture); whether it
//! passes or not, the ray stops there — anything further down the line is
//! occluded by that first blocker.
//!
//! No ordering is guaranteed among the returned captures; the engine only
//! requires *that* one of them is played.

use std::fmt;

use crate::{rules, Board, Coord, Direction, Team};

/// A single available capture: jump from `from`, landing on `to`.
///
/// The victim cell is implied (the cell adjacent to `to` on the side facing
/// `from`) and can be recovered with
/// [`rules::victim_coord`](crate::rules::victim_coord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capture {
    /// The attacker's current cell.
    pub from: Coord,
    /// The cell the attacker lands on.
    pub to: Coord,
}

impl Capture {
    /// Creates a new capture pair.
    #[inline]
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Capture {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} x {}", self.from, self.to)
    }
}

/// Enumerates every capture available to `team` on the given board.
#[must_use]
pub fn enumerate_captures(board: &Board, team: Team) -> Vec<Capture> {
    let mut captures = Vec::new();

    for (from, piece) in board.iter() {
        if piece.team != team {
            continue;
        }
        captures_from_into(board, team, from, &mut captures);
    }

    captures
}

/// Enumerates the captures available to `team` from a single cell.
#[must_use]
pub fn captures_from(board: &Board, team: Team, from: Coord) -> Vec<Capture> {
    let mut captures = Vec::new();
    if board.piece_at(from).is_some_and(|piece| piece.team == team) {
        captures_from_into(board, team, from, &mut captures);
    }
    captures
}

/// Walks the four rays out of `from` and appends any legal captures.
fn captures_from_into(board: &Board, team: Team, from: Coord, captures: &mut Vec<Capture>) {
    for direction in Direction::ALL {
        let mut cell = from.step(direction);

        // skip empties up to the first blocker on this ray
        while board.is_free(cell) {
            cell = cell.step(direction);
        }
        if !cell.is_in_range() {
            continue;
        }

        let landing = cell.step(direction);
        if rules::validate_capture(board, team, from, landing).is_ok() {
            captures.push(Capture::new(from, landing));
        }
    }
}
