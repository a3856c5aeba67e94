use chess_core::{Game, Move, Square};

/// Every legal move for the side to move, split by whether it takes a piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves {
    pub quiet: Vec<Move>,
    pub captures: Vec<Move>,
}

impl LegalMoves {
    pub fn len(&self) -> usize {
        self.quiet.len() + self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quiet.is_empty() && self.captures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.quiet.iter().chain(self.captures.iter())
    }
}

/// Enumerates legal moves square by square in row-major order, so a
/// seeded pick stays reproducible.
pub fn generate_legal_moves(game: &Game) -> LegalMoves {
    let mut moves = LegalMoves::default();
    for mv in Square::all().flat_map(|square| game.legal_moves_from(square)) {
        if game.is_capture(mv) {
            moves.captures.push(mv);
        } else {
            moves.quiet.push(mv);
        }
    }
    moves
}
