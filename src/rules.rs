//! Move legality rules for Ddama.
//!
//! Pure functions deciding whether a single candidate move is legal given
//! the board and the side to move. Nothing here mutates state; the turn
//! controller in [`Game`](crate::Game) applies moves only after these checks
//! pass.
//!
//! # Move kinds
//!
//! - **Simple move**: one orthogonal step for a man (never backward,
//!   sideways always allowed), or any clear straight orthogonal line for a
//!   sheikh. Diagonals are always illegal.
//! - **Capture**: jump over exactly one enemy piece — the *victim* — landing
//!   on the empty cell immediately beyond it. The path from the source to
//!   the victim follows the same rule as a simple move for that piece, so a
//!   man captures at distance exactly 2 while a sheikh captures along any
//!   clear line.
//!
//! # Example
//!
//! ```rust
//! use ddama::{rules, Board, Coord, Piece, Team};
//!
//! let board = Board::from_pieces(&[
//!     (Coord::new(2, 2), Piece::new(Team::Yellow)),
//!     (Coord::new(2, 3), Piece::new(Team::Black)),
//! ]);
//!
//! // Yellow jumps the black piece and lands beyond it
//! let victim = rules::validate_capture(
//!     &board,
//!     Team::Yellow,
//!     Coord::new(2, 2),
//!     Coord::new(2, 4),
//! );
//! assert_eq!(victim, Ok(Coord::new(2, 3)));
//! ```

use std::fmt;

use crate::{Board, Coord, Team};

/// The reason a move attempt was refused.
///
/// Every rejection is a local no-op; none is fatal and none is retried.
/// The engine surfaces rejection as a single
/// [`MoveResult::Rejected`](crate::MoveResult::Rejected) value and keeps the
/// specific reason for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleViolation {
    /// A referenced coordinate lies off the board.
    OutOfRange,
    /// The source cell holds no piece.
    NoPieceAtSource,
    /// The source piece does not belong to the side to move.
    NotYourTurn,
    /// The destination cell is occupied.
    DestinationOccupied,
    /// The path is not a legal one for the piece (diagonal, backward for a
    /// man, too far, blocked, or no valid victim for a capture).
    IllegalPath,
    /// A capture was available, so a non-capturing move is forbidden.
    MandatoryCaptureViolation,
    /// A capture's minigame has not reported its outcome yet.
    MinigameUnresolved,
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::OutOfRange => write!(f, "coordinate is off the board"),
            Self::NoPieceAtSource => write!(f, "no piece at the source cell"),
            Self::NotYourTurn => write!(f, "piece does not belong to the side to move"),
            Self::DestinationOccupied => write!(f, "destination cell is occupied"),
            Self::IllegalPath => write!(f, "path is not legal for the piece"),
            Self::MandatoryCaptureViolation => {
                write!(f, "a capture is available and must be played")
            }
            Self::MinigameUnresolved => {
                write!(f, "minigame outcome is pending")
            }
        }
    }
}

impl std::error::Error for RuleViolation {}

/// Checks that `to` is a valid landing cell: on the board and empty.
fn validate_landing(board: &Board, to: Coord) -> Result<(), RuleViolation> {
    if !to.is_in_range() {
        return Err(RuleViolation::OutOfRange);
    }
    if board.piece_at(to).is_some() {
        return Err(RuleViolation::DestinationOccupied);
    }
    Ok(())
}

/// Checks that the piece at `from` exists and belongs to `turn`, returning
/// whether it is a sheikh.
fn validate_mover(
    board: &Board,
    turn: Team,
    from: Coord,
) -> Result<bool, RuleViolation> {
    if !from.is_in_range() {
        return Err(RuleViolation::OutOfRange);
    }
    let piece = board.piece_at(from).ok_or(RuleViolation::NoPieceAtSource)?;
    if piece.team != turn {
        return Err(RuleViolation::NotYourTurn);
    }
    Ok(piece.is_sheikh())
}

/// Checks whether moving from `from` to `to` decreases the mover's advance.
///
/// Backward is a decreasing row for Yellow and an increasing row for Black;
/// sideways moves change no row and are never backward.
fn is_backward(turn: Team, from: Coord, to: Coord) -> bool {
    (to.row - from.row) * turn.forward_step() < 0
}

/// Checks whether every cell strictly between `from` and `to` on a shared
/// row or column is empty. Diagonal pairs always fail.
fn is_straight_clear_path(board: &Board, from: Coord, to: Coord) -> bool {
    if from.col == to.col {
        let min = from.row.min(to.row) + 1;
        let max = from.row.max(to.row) - 1;
        (min..=max).all(|row| board.piece_at(Coord::new(from.col, row)).is_none())
    } else if from.row == to.row {
        let min = from.col.min(to.col) + 1;
        let max = from.col.max(to.col) - 1;
        (min..=max).all(|col| board.piece_at(Coord::new(col, from.row)).is_none())
    } else {
        false
    }
}

/// Checks the path rule for the mover's promotion state: adjacency without
/// retreat for a man, a clear straight line for a sheikh.
fn is_valid_path(board: &Board, turn: Team, from: Coord, to: Coord, sheikh: bool) -> bool {
    if sheikh {
        is_straight_clear_path(board, from, to)
    } else {
        !is_backward(turn, from, to) && from.is_adjacent(to)
    }
}

/// Derives the victim cell of a candidate capture: the cell adjacent to
/// `to` on the side facing `from`.
///
/// Returns `None` when `from` and `to` do not share a row or column, in
/// which case there is no valid victim and the capture is illegal.
#[must_use]
pub fn victim_coord(from: Coord, to: Coord) -> Option<Coord> {
    if from.col == to.col {
        let drow = if from.row < to.row { -1 } else { 1 };
        Some(Coord::new(from.col, to.row + drow))
    } else if from.row == to.row {
        let dcol = if from.col < to.col { -1 } else { 1 };
        Some(Coord::new(to.col + dcol, from.row))
    } else {
        None
    }
}

/// Decides whether a simple (non-capturing) move is legal.
///
/// # Errors
/// Returns the first [`RuleViolation`] encountered: landing validity, then
/// ownership, then path legality.
pub fn validate_move(
    board: &Board,
    turn: Team,
    from: Coord,
    to: Coord,
) -> Result<(), RuleViolation> {
    validate_landing(board, to)?;
    let sheikh = validate_mover(board, turn, from)?;

    if !is_valid_path(board, turn, from, to, sheikh) {
        return Err(RuleViolation::IllegalPath);
    }

    Ok(())
}

/// Decides whether a capture move is legal, returning the victim cell.
///
/// The victim is the single enemy piece jumped over; the landing cell `to`
/// is the empty cell immediately beyond it. The sub-path from `from` to the
/// victim must be legal as a simple move for the attacking piece, which
/// limits a man to distance-2 captures and a sheikh to captures along a
/// clear line.
///
/// # Errors
/// Returns the first [`RuleViolation`] encountered. A missing, friendly, or
/// misaligned victim is an [`IllegalPath`](RuleViolation::IllegalPath).
pub fn validate_capture(
    board: &Board,
    turn: Team,
    from: Coord,
    to: Coord,
) -> Result<Coord, RuleViolation> {
    validate_landing(board, to)?;
    let sheikh = validate_mover(board, turn, from)?;

    let victim = victim_coord(from, to).ok_or(RuleViolation::IllegalPath)?;
    if !victim.is_in_range() {
        return Err(RuleViolation::IllegalPath);
    }

    if !is_valid_path(board, turn, from, victim, sheikh) {
        return Err(RuleViolation::IllegalPath);
    }

    match board.piece_at(victim) {
        Some(piece) if piece.team != turn => Ok(victim),
        _ => Err(RuleViolation::IllegalPath),
    }
}
