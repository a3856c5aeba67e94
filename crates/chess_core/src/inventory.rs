use crate::{
    board::Board,
    piece::{Color, PieceType},
    square::Square,
};

/// A surviving piece and where it currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryEntry {
    pub kind: PieceType,
    pub square: Square,
}

/// Surviving pieces of one color, in the order they were first listed.
///
/// The board is authoritative; an inventory is an index over it that the
/// game keeps in step on every move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    color: Color,
    entries: Vec<InventoryEntry>,
}

impl Inventory {
    /// Scans the board row by row and records every piece of `color`.
    pub fn from_board(board: &Board, color: Color) -> Self {
        let entries = board
            .pieces()
            .filter(|(_, piece)| piece.color == color)
            .map(|(square, piece)| InventoryEntry {
                kind: piece.piece_type,
                square,
            })
            .collect();
        Self { color, entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, square: Square) -> Option<&InventoryEntry> {
        self.entries.iter().find(|entry| entry.square == square)
    }

    pub fn count(&self, kind: PieceType) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }

    /// Returns false when no entry stands on `from`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> bool {
        match self.entries.iter_mut().find(|entry| entry.square == from) {
            Some(entry) => {
                entry.square = to;
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove_at(&mut self, square: Square) -> Option<InventoryEntry> {
        let idx = self.entries.iter().position(|entry| entry.square == square)?;
        Some(self.entries.remove(idx))
    }

    /// Checks the inventory against the board in both directions.
    pub fn matches_board(&self, board: &Board) -> bool {
        let on_board = board.pieces().filter(|(_, piece)| piece.color == self.color).count();
        if on_board != self.entries.len() {
            return false;
        }
        let mut seen = [false; 64];
        self.entries.iter().all(|entry| {
            let fresh = !std::mem::replace(&mut seen[entry.square.index()], true);
            fresh
                && board
                    .piece_at(entry.square)
                    .map_or(false, |piece| piece.color == self.color && piece.piece_type == entry.kind)
        })
    }
}
