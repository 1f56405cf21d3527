//! Scripted game demo - drive the engine through a short opening.
//!
//! Run with: `cargo run --example scripted_game`

use ddama::{Coord, Game, GameEvent, MoveResult};

fn main() {
    // Create a new game with the standard starting position
    let mut game = Game::new();
    println!("Starting position:");
    println!("{game}");
    println!();

    // Two quiet steps, then the forced capture exchange they set up
    let script = [
        (Coord::new(3, 2), Coord::new(3, 3)),
        (Coord::new(3, 5), Coord::new(3, 4)),
        (Coord::new(3, 3), Coord::new(3, 5)),
        (Coord::new(3, 6), Coord::new(3, 4)),
    ];

    println!("Playing the script:");
    for (from, to) in script {
        let mover = game.current_turn();
        match game.attempt_move(from, to) {
            MoveResult::Accepted { was_capture: false } => {
                println!("  {mover}: {from} -> {to}");
            }
            MoveResult::Accepted { was_capture: true } => {
                println!("  {mover}: {from} x {to} (minigame round opens)");
                // every capture pauses the game until the round reports back
                game.resume_after_minigame(true);
                println!("    ... round survived, play continues");
            }
            MoveResult::Rejected(violation) => {
                println!("  {mover}: {from} -> {to} refused: {violation}");
            }
        }

        for event in game.drain_events() {
            match event {
                GameEvent::Promotion(at) => println!("    promotion at {at}"),
                GameEvent::GameOver { loser } => println!("    {loser} lost"),
                GameEvent::Reset => println!("    board reset"),
            }
        }
    }

    println!();
    println!("Final position:");
    println!("{game}");
}
