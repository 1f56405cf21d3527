//! The minigame gate: the engine's one external capability.
//!
//! After every capture, the capturing side plays an external mini-challenge
//! whose outcome decides whether the attacker survives. The engine knows
//! nothing about how the challenge is played; it only notifies the gate that
//! a round should start, pauses in a pending state, and is resumed later via
//! [`Game::resume_after_minigame`](crate::Game::resume_after_minigame) —
//! which must be called exactly once per round, with `false` retroactively
//! removing the attacker from the board.

use crate::Team;

/// Receiver for "a minigame round should start" notifications.
///
/// Implementations launch whatever external challenge they like and
/// eventually report the outcome back through
/// [`Game::resume_after_minigame`](crate::Game::resume_after_minigame).
/// The notification is fire-and-forget: the gate must not call back into the
/// engine synchronously.
pub trait MinigameGate {
    /// Called when the given team's capturing piece must play a round.
    fn play_round(&mut self, team: Team);
}

/// A gate that ignores notifications.
///
/// The default for [`Game::new`](crate::Game::new); useful when the caller
/// drives the minigame entirely from the engine's pending state
/// ([`Game::pending_minigame`](crate::Game::pending_minigame)) rather than
/// from the notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentGate;

impl MinigameGate for SilentGate {
    fn play_round(&mut self, _team: Team) {}
}
