//! # Ddama - rules engine for an orthogonal checkers variant
//!
//! Ddama is a checkers-like game played on an 8×8 board where pieces move
//! horizontally and vertically, never diagonally. This crate implements the
//! complete rules engine: board state, legal-move and legal-capture
//! determination, mandatory-capture enforcement, promotion, turn
//! alternation, and win detection. Presentation (rendering, input,
//! animation) lives entirely outside; the engine is driven through
//! [`Game::attempt_move`] and read-only queries.
//!
//! ## Rules Summary
//!
//! 1. **Movement**: men move 1 cell forward/left/right; sheikhs slide any
//!    distance along a clear orthogonal line.
//! 2. **Captures are mandatory**: a player with a capture may not play a
//!    non-capturing move.
//! 3. **Capturing**: jump a single adjacent enemy (men) or the single enemy
//!    on a clear line (sheikhs), landing immediately beyond it.
//! 4. **The minigame**: after each capture the capturing piece plays an
//!    external mini-challenge; failing it removes the capturing piece too.
//! 5. **Promotion**: a man reaching the opponent's back rank becomes a
//!    sheikh, permanently.
//! 6. **Winning**: a side with no pieces left when it is to move has lost;
//!    the board then resets for a new game.
//!
//! ## Board Layout
//!
//! ```text
//!       0   1   2   3   4   5   6   7   (col)
//!     +---+---+---+---+---+---+---+---+
//!   7 |   |   |   |   |   |   |   |   |  ← Yellow promotes here
//!     +---+---+---+---+---+---+---+---+
//!   6 | b | b | b | b | b | b | b | b |  ← Black pieces start (rows 5-6)
//!     +---+---+---+---+---+---+---+---+
//!   5 | b | b | b | b | b | b | b | b |
//!     +---+---+---+---+---+---+---+---+
//!   4 |   |   |   |   |   |   |   |   |
//!     +---+---+---+---+---+---+---+---+
//!   3 |   |   |   |   |   |   |   |   |
//!     +---+---+---+---+---+---+---+---+
//!   2 | y | y | y | y | y | y | y | y |
//!     +---+---+---+---+---+---+---+---+
//!   1 | y | y | y | y | y | y | y | y |  ← Yellow pieces start (rows 1-2)
//!     +---+---+---+---+---+---+---+---+
//!   0 |   |   |   |   |   |   |   |   |  ← Black promotes here
//!     +---+---+---+---+---+---+---+---+
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use ddama::{Coord, Game, GameEvent, MoveResult, Team};
//!
//! let mut game = Game::new();
//! assert_eq!(game.current_turn(), Team::Yellow);
//!
//! // Yellow opens with a forward step
//! let result = game.attempt_move(Coord::new(3, 2), Coord::new(3, 3));
//! assert_eq!(result, MoveResult::Accepted { was_capture: false });
//!
//! // the presentation layer reacts to drained events
//! for event in game.drain_events() {
//!     match event {
//!         GameEvent::Promotion(at) => println!("promotion at {at}"),
//!         GameEvent::GameOver { loser } => println!("{loser} lost"),
//!         GameEvent::Reset => println!("new game"),
//!     }
//! }
//! ```
//!
//! ## Key Types
//!
//! - [`Game`]: the turn controller — the single owner of all session state
//! - [`Board`]: the 8×8 grid of cells, each empty or holding one [`Piece`]
//! - [`Coord`]: a `(column, row)` cell address
//! - [`Team`]: Yellow or Black
//! - [`Capture`]: an available `(from, to)` capture pair
//! - [`MoveResult`]: accepted (with capture flag) or rejected (with reason)
//! - [`GameEvent`]: promotion / game-over / reset notifications
//! - [`MinigameGate`]: the engine's one external capability
//!
//! ## The Minigame
//!
//! Every capture opens an external mini-challenge for the capturing side.
//! The engine notifies its [`MinigameGate`], pauses in a pending phase
//! where further input is refused, and resumes when
//! [`Game::resume_after_minigame`] reports the boolean outcome — `false`
//! retroactively removes the capturing piece.

mod board;
mod captures;
mod coord;
mod game;
mod minigame;
mod piece;
pub mod rules;
mod team;

pub use board::{Board, PIECES_PER_TEAM};
pub use captures::{captures_from, enumerate_captures, Capture};
pub use coord::{Coord, Direction, BOARD_SIZE};
pub use game::{Game, GameEvent, MoveResult};
pub use minigame::{MinigameGate, SilentGate};
pub use piece::Piece;
pub use rules::RuleViolation;
pub use team::{InvalidTeamIndex, Team};
