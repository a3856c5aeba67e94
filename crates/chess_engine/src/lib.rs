pub mod movegen;
pub mod suggest;

pub use movegen::{generate_legal_moves, LegalMoves};
pub use suggest::{suggest, Suggester};
