//! Minigame gate tests
//!
//! Tests for the post-capture minigame round: the gate notification, the
//! pending phase that refuses input, and the two resume outcomes.

use std::cell::RefCell;
use std::rc::Rc;

use ddama::{
    Board, Coord, Game, GameEvent, MinigameGate, MoveResult, Piece, RuleViolation, Team,
};

/// A gate that records every notification it receives.
struct RecordingGate {
    rounds: Rc<RefCell<Vec<Team>>>,
}

impl MinigameGate for RecordingGate {
    fn play_round(&mut self, team: Team) {
        self.rounds.borrow_mut().push(team);
    }
}

fn game_with(placements: &[(Coord, Piece)], turn: Team) -> (Game, Rc<RefCell<Vec<Team>>>) {
    let mut game = Game::from_position(Board::from_pieces(placements), turn);
    let rounds = Rc::new(RefCell::new(Vec::new()));
    game.set_gate(Box::new(RecordingGate {
        rounds: Rc::clone(&rounds),
    }));
    (game, rounds)
}

fn capture_setup() -> (Game, Rc<RefCell<Vec<Team>>>) {
    // yellow at (2,2) jumps black at (2,3), landing on (2,4); the spares
    // keep both sides alive whatever the round's outcome
    game_with(
        &[
            (Coord::new(2, 2), Piece::new(Team::Yellow)),
            (Coord::new(0, 0), Piece::new(Team::Yellow)),
            (Coord::new(2, 3), Piece::new(Team::Black)),
            (Coord::new(7, 7), Piece::new(Team::Black)),
        ],
        Team::Yellow,
    )
}

// =============================================================================
// Gate notification
// =============================================================================

/// Every capture notifies the gate once, for the capturing team.
#[test]
fn capture_notifies_the_gate() {
    let (mut game, rounds) = capture_setup();
    assert!(game.attempt_move(Coord::new(2, 2), Coord::new(2, 4)).is_accepted());
    assert_eq!(*rounds.borrow(), vec![Team::Yellow]);
}

/// Simple moves never notify the gate.
#[test]
fn simple_move_does_not_notify() {
    let (mut game, rounds) = game_with(
        &[
            (Coord::new(2, 2), Piece::new(Team::Yellow)),
            (Coord::new(7, 7), Piece::new(Team::Black)),
        ],
        Team::Yellow,
    );
    assert!(game.attempt_move(Coord::new(2, 2), Coord::new(2, 3)).is_accepted());
    assert!(rounds.borrow().is_empty());
}

/// Each side's capture opens its own round.
#[test]
fn rounds_follow_the_capturing_team() {
    let (mut game, rounds) = game_with(
        &[
            (Coord::new(2, 2), Piece::new(Team::Yellow)),
            (Coord::new(2, 3), Piece::new(Team::Black)),
            (Coord::new(5, 5), Piece::new(Team::Black)),
            (Coord::new(5, 4), Piece::new(Team::Yellow)),
        ],
        Team::Yellow,
    );

    assert!(game.attempt_move(Coord::new(2, 2), Coord::new(2, 4)).is_accepted());
    game.resume_after_minigame(true);

    assert!(game.attempt_move(Coord::new(5, 5), Coord::new(5, 3)).is_accepted());
    game.resume_after_minigame(true);

    assert_eq!(*rounds.borrow(), vec![Team::Yellow, Team::Black]);
}

// =============================================================================
// Pending phase
// =============================================================================

/// While a round is unresolved all input is refused.
#[test]
fn input_refused_while_pending() {
    let (mut game, _rounds) = capture_setup();
    game.attempt_move(Coord::new(2, 2), Coord::new(2, 4));
    assert_eq!(game.pending_minigame(), Some(Team::Yellow));

    let result = game.attempt_move(Coord::new(7, 7), Coord::new(7, 6));
    assert_eq!(
        result,
        MoveResult::Rejected(RuleViolation::MinigameUnresolved)
    );
    assert!(!game.is_movable(Coord::new(7, 7)));
}

/// The turn still flips at the capture; the pending round belongs to the
/// previous mover.
#[test]
fn turn_flips_despite_pending_round() {
    let (mut game, _rounds) = capture_setup();
    game.attempt_move(Coord::new(2, 2), Coord::new(2, 4));
    assert_eq!(game.current_turn(), Team::Black);
    assert_eq!(game.pending_minigame(), Some(Team::Yellow));
}

// =============================================================================
// Resume outcomes
// =============================================================================

/// Surviving the round leaves the attacker in place and reopens input.
#[test]
fn survival_keeps_the_attacker() {
    let (mut game, _rounds) = capture_setup();
    game.attempt_move(Coord::new(2, 2), Coord::new(2, 4));

    game.resume_after_minigame(true);
    assert!(game.pending_minigame().is_none());
    assert_eq!(game.piece_at(Coord::new(2, 4)).unwrap().team, Team::Yellow);
    assert!(game.attempt_move(Coord::new(7, 7), Coord::new(7, 6)).is_accepted());
}

/// Failing the round removes the attacker, so the exchange cost one piece
/// on each side.
#[test]
fn failure_removes_the_attacker() {
    let (mut game, _rounds) = capture_setup();
    game.attempt_move(Coord::new(2, 2), Coord::new(2, 4));

    game.resume_after_minigame(false);
    assert!(game.piece_at(Coord::new(2, 4)).is_none());
    assert_eq!(game.board().count(Team::Yellow), 1);
    assert_eq!(game.board().count(Team::Black), 1);
}

/// The resolved board feeds a fresh capture list for the side to move.
#[test]
fn resume_refreshes_the_capture_list() {
    // after yellow's capture lands on (2,4), black at (2,5) could jump it;
    // that capture must exist only while the attacker survives
    let (mut game, _rounds) = game_with(
        &[
            (Coord::new(2, 2), Piece::new(Team::Yellow)),
            (Coord::new(2, 3), Piece::new(Team::Black)),
            (Coord::new(2, 5), Piece::new(Team::Black)),
            (Coord::new(0, 2), Piece::new(Team::Yellow)),
        ],
        Team::Yellow,
    );
    game.attempt_move(Coord::new(2, 2), Coord::new(2, 4));

    game.resume_after_minigame(false);
    assert!(
        game.legal_captures().is_empty(),
        "the removed attacker is no longer a target"
    );
}

/// Resuming with no round pending changes nothing.
#[test]
fn stray_resume_is_ignored() {
    let (mut game, _rounds) = capture_setup();
    let before = format!("{game}");
    game.resume_after_minigame(false);
    assert_eq!(format!("{game}"), before);
}

/// A second resume call after the first is a no-op.
#[test]
fn resume_resolves_exactly_once() {
    let (mut game, _rounds) = capture_setup();
    game.attempt_move(Coord::new(2, 2), Coord::new(2, 4));

    game.resume_after_minigame(true);
    // the late duplicate must not remove the attacker
    game.resume_after_minigame(false);
    assert!(game.piece_at(Coord::new(2, 4)).is_some());
}

/// Resetting mid-round cancels it; the late outcome report is ignored.
#[test]
fn reset_cancels_a_pending_round() {
    let (mut game, _rounds) = capture_setup();
    game.attempt_move(Coord::new(2, 2), Coord::new(2, 4));
    game.drain_events();

    game.reset();
    assert!(game.pending_minigame().is_none());
    assert_eq!(game.drain_events(), vec![GameEvent::Reset]);

    game.resume_after_minigame(false);
    assert_eq!(*game.board(), Board::new_default());
}
