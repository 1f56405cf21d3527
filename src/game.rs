//! The Ddama turn controller.
//!
//! [`Game`] owns the whole session state — board, side to move, the current
//! capture list, and the minigame phase — and is the only component that
//! mutates the [`Board`]. The presentation layer talks to it through
//! [`attempt_move`](Game::attempt_move) and read-only queries, and reacts to
//! [`GameEvent`]s drained after each call; the engine never touches
//! presentation concerns.
//!
//! # Turn lifecycle
//!
//! ```text
//! AwaitingInput --attempt_move--> validate --> apply --> promotion check
//!      ^                                                      |
//!      |                                         (capture) MinigamePending
//!      |                                                      |
//!      +--- flip turn, recompute captures, game-over check <--+
//! ```
//!
//! Processing is strictly sequential: each call runs to completion and
//! nothing blocks. The only pause is semantic — after a capture the engine
//! sits in a pending phase until
//! [`resume_after_minigame`](Game::resume_after_minigame) reports the
//! external outcome.
//!
//! # Example
//!
//! ```rust
//! use ddama::{Coord, Game, MoveResult, Team};
//!
//! let mut game = Game::new();
//! assert_eq!(game.current_turn(), Team::Yellow);
//!
//! // open with a simple forward step
//! let result = game.attempt_move(Coord::new(0, 2), Coord::new(0, 3));
//! assert_eq!(result, MoveResult::Accepted { was_capture: false });
//! assert_eq!(game.current_turn(), Team::Black);
//! ```

use std::fmt;

use crate::captures::{self, Capture};
use crate::minigame::{MinigameGate, SilentGate};
use crate::rules::{self, RuleViolation};
use crate::{Board, Coord, Piece, Team};

/// The outcome of a move attempt.
///
/// Rejection carries the specific [`RuleViolation`] for diagnostics and
/// tests; callers that only care about accept/reject can use
/// [`is_accepted`](Self::is_accepted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The move was applied to the board.
    Accepted {
        /// Whether the move was a capture (and a minigame round started).
        was_capture: bool,
    },
    /// The move was refused; the board is unchanged.
    Rejected(RuleViolation),
}

impl MoveResult {
    /// Checks whether the attempt was accepted.
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Returns the violation of a rejected attempt.
    #[inline]
    #[must_use]
    pub const fn violation(&self) -> Option<RuleViolation> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(violation) => Some(*violation),
        }
    }
}

/// A state change the presentation layer should react to.
///
/// Events accumulate inside the engine and are collected with
/// [`Game::drain_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The piece on the given cell became a sheikh.
    Promotion(Coord),
    /// One side ran out of pieces; a reset follows immediately.
    GameOver {
        /// The team with no pieces left.
        loser: Team,
    },
    /// The board returned to the initial layout with Yellow to move.
    Reset,
}

/// Where the engine is between inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Ready for the next move attempt.
    AwaitingInput,
    /// A capture happened and its minigame has not reported back.
    MinigamePending {
        /// The cell the capturing piece landed on.
        attacker: Coord,
    },
}

/// A complete two-player Ddama session.
pub struct Game {
    board: Board,
    turn: Team,
    captures: Vec<Capture>,
    phase: Phase,
    gate: Box<dyn MinigameGate>,
    events: Vec<GameEvent>,
}

impl Game {
    /// Creates a new game with the standard starting position, Yellow to
    /// move, and a gate that ignores minigame notifications.
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Board::new_default(), Team::Yellow)
    }

    /// Creates a game from an arbitrary position.
    ///
    /// The capture list for the side to move is computed immediately.
    #[must_use]
    pub fn from_position(board: Board, turn: Team) -> Self {
        board.validate();
        let captures = captures::enumerate_captures(&board, turn);
        Self {
            board,
            turn,
            captures,
            phase: Phase::AwaitingInput,
            gate: Box::new(SilentGate),
            events: Vec::new(),
        }
    }

    /// Replaces the minigame gate.
    pub fn set_gate(&mut self, gate: Box<dyn MinigameGate>) {
        self.gate = gate;
    }

    /// Returns the side to move.
    #[inline]
    #[must_use]
    pub const fn current_turn(&self) -> Team {
        self.turn
    }

    /// Returns the occupant of the given cell, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.board.piece_at(coord)
    }

    /// Returns the board, read-only.
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the captures available to the side to move.
    ///
    /// Stable between calls unless an [`attempt_move`](Self::attempt_move)
    /// or [`resume_after_minigame`](Self::resume_after_minigame) intervenes.
    #[inline]
    #[must_use]
    pub fn legal_captures(&self) -> &[Capture] {
        &self.captures
    }

    /// Returns the team whose minigame round is unresolved, if any.
    #[must_use]
    pub fn pending_minigame(&self) -> Option<Team> {
        match self.phase {
            Phase::AwaitingInput => None,
            Phase::MinigamePending { attacker } => {
                self.board.piece_at(attacker).map(|piece| piece.team)
            }
        }
    }

    /// Checks whether the piece on `from` may be picked up at all.
    ///
    /// The UI uses this to refuse a drag before any destination is known:
    /// the cell must hold a piece of the side to move, and while captures
    /// are mandatory the piece must be the source of at least one of them.
    #[must_use]
    pub fn is_movable(&self, from: Coord) -> bool {
        if self.phase != Phase::AwaitingInput {
            return false;
        }
        let Some(piece) = self.board.piece_at(from) else {
            return false;
        };
        if piece.team != self.turn {
            return false;
        }
        self.captures.is_empty() || self.captures.iter().any(|capture| capture.from == from)
    }

    /// Collects the events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Attempts to move the piece on `from` to `to`.
    ///
    /// A legal capture is preferred; while the capture list is non-empty a
    /// non-capturing attempt is refused outright. Every rejection leaves the
    /// engine untouched — the caller simply re-presents input.
    pub fn attempt_move(&mut self, from: Coord, to: Coord) -> MoveResult {
        if self.phase != Phase::AwaitingInput {
            return MoveResult::Rejected(RuleViolation::MinigameUnresolved);
        }

        match rules::validate_capture(&self.board, self.turn, from, to) {
            Ok(victim) => {
                self.perform_capture(from, to, victim);
                MoveResult::Accepted { was_capture: true }
            }
            Err(_) if !self.captures.is_empty() => {
                // captures are mandatory; report the most informative reason
                let violation = match rules::validate_move(&self.board, self.turn, from, to) {
                    Ok(()) => RuleViolation::MandatoryCaptureViolation,
                    Err(violation) => violation,
                };
                MoveResult::Rejected(violation)
            }
            Err(_) => match rules::validate_move(&self.board, self.turn, from, to) {
                Ok(()) => {
                    self.perform_move(from, to);
                    MoveResult::Accepted { was_capture: false }
                }
                Err(violation) => MoveResult::Rejected(violation),
            },
        }
    }

    /// Reports the outcome of the pending minigame round.
    ///
    /// Must be called exactly once per pending round, before any further
    /// move attempt is accepted. On `false` the capturing piece is
    /// retroactively removed, which can end the game on the spot. Calling
    /// this with no round pending (including after a reset cancelled one)
    /// is a no-op.
    pub fn resume_after_minigame(&mut self, survived: bool) {
        let Phase::MinigamePending { attacker } = self.phase else {
            return;
        };
        self.phase = Phase::AwaitingInput;

        if !survived {
            self.board.clear_(attacker);
        }

        // the board may have changed under the current side's capture list
        self.captures = captures::enumerate_captures(&self.board, self.turn);
        self.check_game_over();
    }

    /// Restores the initial layout with Yellow to move.
    ///
    /// Any pending minigame round is cancelled; its late outcome report
    /// will be ignored.
    pub fn reset(&mut self) {
        self.board = Board::new_default();
        self.turn = Team::Yellow;
        self.phase = Phase::AwaitingInput;
        self.captures = captures::enumerate_captures(&self.board, self.turn);
        self.events.push(GameEvent::Reset);
    }

    /// Applies a validated simple move and completes the turn.
    fn perform_move(&mut self, from: Coord, to: Coord) {
        self.relocate(from, to);
        self.complete_turn(to);
    }

    /// Applies a validated capture: relocate the attacker, remove the
    /// victim, open the minigame round, then complete the turn.
    fn perform_capture(&mut self, from: Coord, to: Coord, victim: Coord) {
        self.relocate(from, to);
        self.board.clear_(victim);

        self.phase = Phase::MinigamePending { attacker: to };
        let team = self.turn;
        self.gate.play_round(team);

        self.complete_turn(to);
        self.check_game_over();
    }

    /// Moves the piece record from one cell to another.
    fn relocate(&mut self, from: Coord, to: Coord) {
        debug_assert!(self.board.piece_at(from).is_some(), "relocate from empty cell");
        if let Some(piece) = self.board.clear_(from) {
            self.board.place_(to, piece);
        }
    }

    /// Promotion check, turn flip, and capture-list refresh for the mover's
    /// opponent.
    fn complete_turn(&mut self, dest: Coord) {
        if let Some(piece) = self.board.piece_at(dest) {
            if !piece.is_sheikh() && dest.row == piece.team.back_rank() {
                self.board.promote_at_(dest);
                self.events.push(GameEvent::Promotion(dest));
            }
        }

        self.turn = self.turn.opponent();
        self.captures = captures::enumerate_captures(&self.board, self.turn);
        self.board.validate();
    }

    /// Declares a side with no pieces left the loser, then resets.
    ///
    /// Runs after every capture and after every minigame resolution, the
    /// only two points where a piece leaves the board.
    fn check_game_over(&mut self) {
        let Some(loser) = [Team::Yellow, Team::Black]
            .into_iter()
            .find(|&team| self.board.count(team) == 0)
        else {
            return;
        };
        self.events.push(GameEvent::GameOver { loser });
        self.reset();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("turn", &self.turn)
            .field("captures", &self.captures)
            .field("phase", &self.phase)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Turn: {}\n{}", self.turn, self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture_setup() -> Game {
        // yellow at (2,2) can jump black at (2,3), landing on (2,4)
        Game::from_position(
            Board::from_pieces(&[
                (Coord::new(2, 2), Piece::new(Team::Yellow)),
                (Coord::new(0, 0), Piece::new(Team::Yellow)),
                (Coord::new(2, 3), Piece::new(Team::Black)),
                (Coord::new(7, 7), Piece::new(Team::Black)),
            ]),
            Team::Yellow,
        )
    }

    #[test]
    fn new_game_starts_with_yellow() {
        let game = Game::new();
        assert_eq!(game.current_turn(), Team::Yellow);
        assert!(game.legal_captures().is_empty());
        assert!(game.pending_minigame().is_none());
    }

    #[test]
    fn simple_move_flips_turn() {
        let mut game = Game::new();
        let result = game.attempt_move(Coord::new(3, 2), Coord::new(3, 3));
        assert_eq!(result, MoveResult::Accepted { was_capture: false });
        assert_eq!(game.current_turn(), Team::Black);
        assert!(game.piece_at(Coord::new(3, 2)).is_none());
        assert_eq!(
            game.piece_at(Coord::new(3, 3)).unwrap().team,
            Team::Yellow
        );
    }

    #[test]
    fn rejection_preserves_state() {
        let mut game = Game::new();
        let before = *game.board();
        let result = game.attempt_move(Coord::new(3, 2), Coord::new(3, 5));
        assert_eq!(result, MoveResult::Rejected(RuleViolation::IllegalPath));
        assert_eq!(*game.board(), before);
        assert_eq!(game.current_turn(), Team::Yellow);
    }

    #[test]
    fn capture_enters_pending_phase() {
        let mut game = capture_setup();
        let result = game.attempt_move(Coord::new(2, 2), Coord::new(2, 4));
        assert_eq!(result, MoveResult::Accepted { was_capture: true });

        // victim gone, attacker landed, turn flipped, minigame pending
        assert!(game.piece_at(Coord::new(2, 3)).is_none());
        assert_eq!(game.piece_at(Coord::new(2, 4)).unwrap().team, Team::Yellow);
        assert_eq!(game.current_turn(), Team::Black);
        assert_eq!(game.pending_minigame(), Some(Team::Yellow));
    }

    #[test]
    fn input_refused_while_minigame_pending() {
        let mut game = capture_setup();
        game.attempt_move(Coord::new(2, 2), Coord::new(2, 4));

        let result = game.attempt_move(Coord::new(7, 7), Coord::new(7, 6));
        assert_eq!(
            result,
            MoveResult::Rejected(RuleViolation::MinigameUnresolved)
        );

        game.resume_after_minigame(true);
        let result = game.attempt_move(Coord::new(7, 7), Coord::new(7, 6));
        assert!(result.is_accepted());
    }

    #[test]
    fn failed_minigame_removes_attacker() {
        let mut game = capture_setup();
        game.attempt_move(Coord::new(2, 2), Coord::new(2, 4));

        game.resume_after_minigame(false);
        assert!(game.piece_at(Coord::new(2, 4)).is_none());
        assert!(game.pending_minigame().is_none());
    }

    #[test]
    fn resume_without_pending_round_is_noop() {
        let mut game = Game::new();
        let before = *game.board();
        game.resume_after_minigame(false);
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn mandatory_capture_blocks_other_pieces() {
        let mut game = Game::from_position(
            Board::from_pieces(&[
                (Coord::new(2, 2), Piece::new(Team::Yellow)),
                (Coord::new(2, 3), Piece::new(Team::Black)),
                (Coord::new(6, 2), Piece::new(Team::Yellow)),
            ]),
            Team::Yellow,
        );
        assert_eq!(game.legal_captures().len(), 1);

        // the other piece's perfectly ordinary step is refused
        let result = game.attempt_move(Coord::new(6, 2), Coord::new(6, 3));
        assert_eq!(
            result,
            MoveResult::Rejected(RuleViolation::MandatoryCaptureViolation)
        );

        // the capture itself goes through
        assert!(game
            .attempt_move(Coord::new(2, 2), Coord::new(2, 4))
            .is_accepted());
    }

    #[test]
    fn is_movable_tracks_mandatory_captures() {
        let game = Game::from_position(
            Board::from_pieces(&[
                (Coord::new(2, 2), Piece::new(Team::Yellow)),
                (Coord::new(2, 3), Piece::new(Team::Black)),
                (Coord::new(6, 2), Piece::new(Team::Yellow)),
            ]),
            Team::Yellow,
        );
        assert!(game.is_movable(Coord::new(2, 2)), "capture source");
        assert!(!game.is_movable(Coord::new(6, 2)), "idle piece");
        assert!(!game.is_movable(Coord::new(2, 3)), "opponent piece");
        assert!(!game.is_movable(Coord::new(0, 0)), "empty cell");
    }

    #[test]
    fn promotion_emits_event() {
        let mut game = Game::from_position(
            Board::from_pieces(&[
                (Coord::new(4, 6), Piece::new(Team::Yellow)),
                (Coord::new(0, 5), Piece::new(Team::Black)),
            ]),
            Team::Yellow,
        );
        game.attempt_move(Coord::new(4, 6), Coord::new(4, 7));
        assert!(game.piece_at(Coord::new(4, 7)).unwrap().is_sheikh());
        assert_eq!(
            game.drain_events(),
            vec![GameEvent::Promotion(Coord::new(4, 7))]
        );
    }

    #[test]
    fn drain_events_empties_the_queue() {
        let mut game = Game::new();
        game.reset();
        assert_eq!(game.drain_events(), vec![GameEvent::Reset]);
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn reset_restores_initial_position() {
        let mut game = Game::new();
        game.attempt_move(Coord::new(0, 2), Coord::new(0, 3));
        game.reset();
        assert_eq!(*game.board(), Board::new_default());
        assert_eq!(game.current_turn(), Team::Yellow);
    }

    #[test]
    fn display_mentions_turn() {
        let game = Game::new();
        assert!(game.to_string().starts_with("Turn: Yellow\n"));
    }
}
