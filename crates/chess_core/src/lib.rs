// Board state and move legality for two-player chess
pub mod board;
pub mod error;
pub mod game;
pub mod inventory;
pub mod moves;
pub mod piece;
pub mod square;

// Re-export main types for convenience
pub use board::Board;
pub use error::{MoveError, SquareError};
pub use game::Game;
pub use inventory::{Inventory, InventoryEntry};
pub use moves::{path_clear, Move};
pub use piece::{Color, Piece, PieceType};
pub use square::Square;

/// A game in the standard opening position, White to move.
pub fn new_game() -> Game {
    Game::new()
}
