use crate::{
    board::{Board, BLACK_PAWN_ROW, WHITE_PAWN_ROW},
    piece::{Color, Piece, PieceType},
    square::Square,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    fn row_diff(&self) -> i8 {
        self.to.row() as i8 - self.from.row() as i8
    }

    fn col_diff(&self) -> i8 {
        self.to.col() as i8 - self.from.col() as i8
    }

    /// Whether the geometry and path suit `piece`. Turn order and the colour
    /// of the destination are checked by the game, not here.
    pub fn is_valid_piece_movement(&self, piece: Piece, board: &Board) -> bool {
        match piece.piece_type {
            PieceType::Pawn => self.is_valid_pawn_move(piece.color, board),
            PieceType::Rook => self.is_valid_straight_move(board),
            PieceType::Knight => self.is_valid_knight_move(),
            PieceType::Bishop => self.is_valid_diagonal_move(board),
            PieceType::Queen => self.is_valid_straight_move(board) || self.is_valid_diagonal_move(board),
            PieceType::King => self.is_valid_king_move(),
        }
    }

    fn is_valid_pawn_move(&self, color: Color, board: &Board) -> bool {
        let (direction, start_row) = match color {
            Color::White => (-1, WHITE_PAWN_ROW),
            Color::Black => (1, BLACK_PAWN_ROW),
        };

        let rank_diff = self.row_diff();
        let file_diff = self.col_diff();

        if file_diff == 0 {
            if rank_diff == direction {
                return board.is_empty(self.to);
            }
            if rank_diff == 2 * direction && self.from.row() == start_row {
                return match self.from.offset(direction, 0) {
                    Some(between) => board.is_empty(between) && board.is_empty(self.to),
                    None => false,
                };
            }
            return false;
        }

        // Diagonal steps are captures only.
        if file_diff.abs() == 1 && rank_diff == direction {
            return board.piece_at(self.to).map_or(false, |target| target.color != color);
        }

        false
    }

    fn is_valid_knight_move(&self) -> bool {
        let rank_diff = self.row_diff().abs();
        let file_diff = self.col_diff().abs();

        (rank_diff == 2 && file_diff == 1) || (rank_diff == 1 && file_diff == 2)
    }

    fn is_valid_diagonal_move(&self, board: &Board) -> bool {
        let rank_diff = self.row_diff().abs();
        let file_diff = self.col_diff().abs();

        if rank_diff != file_diff || rank_diff == 0 {
            return false;
        }

        path_clear(self.from, self.to, board)
    }

    fn is_valid_straight_move(&self, board: &Board) -> bool {
        if self.from == self.to || (self.row_diff() != 0 && self.col_diff() != 0) {
            return false;
        }

        path_clear(self.from, self.to, board)
    }

    fn is_valid_king_move(&self) -> bool {
        let rank_diff = self.row_diff().abs();
        let file_diff = self.col_diff().abs();

        self.from != self.to && rank_diff <= 1 && file_diff <= 1
    }
}

/// True when every square strictly between `from` and `to` is empty.
///
/// Only meaningful for squares sharing a row, column or diagonal.
pub fn path_clear(from: Square, to: Square, board: &Board) -> bool {
    let rank_step = (to.row() as i8 - from.row() as i8).signum();
    let file_step = (to.col() as i8 - from.col() as i8).signum();

    let mut current = from.offset(rank_step, file_step);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !board.is_empty(sq) {
            return false;
        }
        current = sq.offset(rank_step, file_step);
    }

    // Walked off the board: `to` was not on a line from `from`.
    false
}
