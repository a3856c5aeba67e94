use log::{debug, info, trace};

use crate::{
    board::Board,
    error::MoveError,
    inventory::Inventory,
    moves::Move,
    piece::{Color, Piece, PieceType},
    square::Square,
};

/// One game from the opening position onward.
///
/// The board, both inventories, the side to move and the captured lists only
/// change together inside [`Game::make_move`]. If a game is shared between
/// threads, guard the whole value with one lock.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    white_pieces: Inventory,
    black_pieces: Inventory,
    current_turn: Color,
    white_captured: Vec<PieceType>,
    black_captured: Vec<PieceType>,
}

impl Game {
    pub fn new() -> Self {
        let board = Board::new();
        let white_pieces = Inventory::from_board(&board, Color::White);
        let black_pieces = Inventory::from_board(&board, Color::Black);
        Self {
            board,
            white_pieces,
            black_pieces,
            current_turn: Color::White,
            white_captured: Vec::new(),
            black_captured: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    pub fn side_to_move(&self) -> Color {
        self.current_turn
    }

    pub fn inventory(&self, color: Color) -> &Inventory {
        match color {
            Color::White => &self.white_pieces,
            Color::Black => &self.black_pieces,
        }
    }

    fn inventory_mut(&mut self, color: Color) -> &mut Inventory {
        match color {
            Color::White => &mut self.white_pieces,
            Color::Black => &mut self.black_pieces,
        }
    }

    /// Piece kinds taken from `color`, oldest first.
    pub fn captured(&self, color: Color) -> &[PieceType] {
        match color {
            Color::White => &self.white_captured,
            Color::Black => &self.black_captured,
        }
    }

    /// Decides whether `from -> to` is legal, and if not, why.
    pub fn check_move(&self, from: Square, to: Square) -> Result<(), MoveError> {
        let piece = self.board.piece_at(from).ok_or(MoveError::EmptySource)?;

        if piece.color != self.current_turn {
            return Err(MoveError::WrongTurn {
                expected: self.current_turn,
                found: piece.color,
            });
        }

        if let Some(target) = self.board.piece_at(to) {
            if target.color == piece.color {
                return Err(MoveError::OwnPieceCapture);
            }
        }

        if !Move::new(from, to).is_valid_piece_movement(piece, &self.board) {
            return Err(MoveError::IllegalPattern { kind: piece.piece_type });
        }

        Ok(())
    }

    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Whether the destination of a move currently holds a piece.
    pub fn is_capture(&self, chess_move: Move) -> bool {
        self.board.piece_at(chess_move.to).is_some()
    }

    /// Validates and plays a move, returning the captured piece if any.
    ///
    /// A rejected move leaves the game untouched.
    ///
    /// # Panics
    ///
    /// Panics if the inventories have drifted from the board, which means an
    /// invariant of this type was broken.
    pub fn make_move(&mut self, chess_move: Move) -> Result<Option<Piece>, MoveError> {
        let Move { from, to } = chess_move;
        if let Err(err) = self.check_move(from, to) {
            debug!("rejected {:?} -> {:?}: {}", from, to, err);
            return Err(err);
        }

        let mover = self.piece_at(from).ok_or(MoveError::EmptySource)?;
        let captured = self.board.piece_at(to);

        if let Some(victim) = captured {
            if self.inventory_mut(victim.color).remove_at(to).is_none() {
                panic!("no inventory entry for captured {:?} at {:?}", victim, to);
            }
            match victim.color {
                Color::White => self.white_captured.push(victim.piece_type),
                Color::Black => self.black_captured.push(victim.piece_type),
            }
            info!("Captured: {:?} {:?} at {:?}", victim.color, victim.piece_type, to);
        }

        self.board.set(to, Some(mover));
        self.board.set(from, None);

        if !self.inventory_mut(mover.color).relocate(from, to) {
            panic!("no inventory entry for moving {:?} at {:?}", mover, from);
        }

        self.current_turn = self.current_turn.opposite();
        trace!("{:?} {:?} {:?} -> {:?}", mover.color, mover.piece_type, from, to);

        debug_assert!(self.inventories_consistent());
        Ok(captured)
    }

    pub fn apply_move(&mut self, from: Square, to: Square) -> bool {
        self.make_move(Move::new(from, to)).is_ok()
    }

    /// Every legal move for the piece on `square`. Empty if the square is
    /// empty or holds a piece of the side not to move.
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.current_turn => Square::all()
                .filter(|&to| self.is_legal(square, to))
                .map(|to| Move::new(square, to))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Whether both inventories agree with the board.
    pub fn inventories_consistent(&self) -> bool {
        self.white_pieces.matches_board(&self.board) && self.black_pieces.matches_board(&self.board)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
