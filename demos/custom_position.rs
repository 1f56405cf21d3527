//! Custom position demo - set up specific board states.
//!
//! Run with: `cargo run --example custom_position`

use ddama::{Board, Coord, Game, Piece, Team};

fn main() {
    // A yellow sheikh on (3, 3) and a yellow man on (4, 2),
    // black men on (3, 6) and (5, 3)
    let board = Board::from_pieces(&[
        (Coord::new(3, 3), Piece::sheikh(Team::Yellow)),
        (Coord::new(4, 2), Piece::new(Team::Yellow)),
        (Coord::new(3, 6), Piece::new(Team::Black)),
        (Coord::new(5, 3), Piece::new(Team::Black)),
    ]);

    println!("Custom position:");
    println!("{board}");
    println!();

    println!("Yellow pieces: {}", board.count(Team::Yellow));
    println!("Black pieces: {}", board.count(Team::Black));
    println!();

    // Hand the position to the engine with Yellow to move
    let game = Game::from_position(board, Team::Yellow);

    if game.legal_captures().is_empty() {
        println!("No captures available; any legal move may be played");
    } else {
        println!("Mandatory captures for {}:", game.current_turn());
        for capture in game.legal_captures() {
            println!("  {capture}");
        }
    }
    println!();

    // Only capture sources may be picked up while captures exist
    for (coord, piece) in game.board().iter() {
        println!(
            "  {piece} at {coord} is {}",
            if game.is_movable(coord) {
                "movable"
            } else {
                "pinned"
            }
        );
    }
}
