use std::fmt;

use crate::{
    piece::{Color, Piece, PieceType},
    square::{Square, BOARD_SIZE},
};

/// Back rank from file a to file h.
pub const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

pub const WHITE_HOME_ROW: u8 = 7;
pub const WHITE_PAWN_ROW: u8 = 6;
pub const BLACK_PAWN_ROW: u8 = 1;
pub const BLACK_HOME_ROW: u8 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// The standard opening position.
    pub fn new() -> Self {
        let mut board = Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        };
        board.setup_initial_position();
        board
    }

    fn setup_initial_position(&mut self) {
        for (col, &piece_type) in BACK_RANK.iter().enumerate() {
            self.squares[BLACK_HOME_ROW as usize][col] = Some(Piece::new(piece_type, Color::Black));
            self.squares[BLACK_PAWN_ROW as usize][col] = Some(Piece::new(PieceType::Pawn, Color::Black));
            self.squares[WHITE_PAWN_ROW as usize][col] = Some(Piece::new(PieceType::Pawn, Color::White));
            self.squares[WHITE_HOME_ROW as usize][col] = Some(Piece::new(piece_type, Color::White));
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let sq = Square::new_unchecked(row, col);
                let c = self.piece_at(sq).map_or('.', Piece::symbol);
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn opening_position_matches_layout() {
        let board = Board::new();
        for col in 0..8 {
            let kind = BACK_RANK[col as usize];
            assert_eq!(board.piece_at(sq(0, col)), Some(Piece::new(kind, Color::Black)));
            assert_eq!(board.piece_at(sq(1, col)), Some(Piece::new(PieceType::Pawn, Color::Black)));
            assert_eq!(board.piece_at(sq(6, col)), Some(Piece::new(PieceType::Pawn, Color::White)));
            assert_eq!(board.piece_at(sq(7, col)), Some(Piece::new(kind, Color::White)));
            for row in 2..6 {
                assert!(board.is_empty(sq(row, col)));
            }
        }
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn queens_and_kings_sit_on_d_and_e_files() {
        let board = Board::new();
        assert_eq!(board.piece_at(sq(7, 3)), Some(Piece::new(PieceType::Queen, Color::White)));
        assert_eq!(board.piece_at(sq(7, 4)), Some(Piece::new(PieceType::King, Color::White)));
        assert_eq!(board.piece_at(sq(0, 3)), Some(Piece::new(PieceType::Queen, Color::Black)));
        assert_eq!(board.piece_at(sq(0, 4)), Some(Piece::new(PieceType::King, Color::Black)));
    }

    #[test]
    fn display_renders_one_line_per_row() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "r n b q k b n r");
        assert_eq!(lines[4], ". . . . . . . .");
        assert_eq!(lines[7], "R N B Q K B N R");
    }
}
