use crate::error::SquareError;

pub const BOARD_SIZE: u8 = 8;

/// A board coordinate. Row 0 is Black's back rank, row 7 is White's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Result<Self, SquareError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(SquareError::OutOfRange { row, col })
        }
    }

    /// Callers must already hold in-range coordinates.
    pub(crate) const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major index in `0..64`.
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index < (BOARD_SIZE as usize).pow(2) {
            let size = BOARD_SIZE as usize;
            Some(Self::new_unchecked((index / size) as u8, (index % size) as u8))
        } else {
            None
        }
    }

    /// The square `dr` rows and `dc` columns away, if it is still on the board.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col) {
            Some(Self::new_unchecked(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::new_unchecked(row, col)))
    }
}
