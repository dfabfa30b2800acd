use super::player::PlayerColor;

pub const ROWS: usize = 5;
pub const COLS: usize = 5;
pub const CELL_COUNT: usize = ROWS * COLS;

/// A snapshot of one board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub index: usize,
    pub occupant: Option<PlayerColor>,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell index {0} is outside the 5x5 board")]
    OutOfRange(usize),

    #[error("cell {0} is already occupied")]
    AlreadyOccupied(usize),

    #[error("cell {0} has no piece to move")]
    SourceEmpty(usize),

    #[error("destination cell {0} is occupied")]
    DestinationOccupied(usize),
}

/// The 5x5 grid, indexed row-major from 0 (top-left) to 24 (bottom-right).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<PlayerColor>; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [None; CELL_COUNT],
        }
    }

    /// Split an index into (row, col)
    pub fn row_col(index: usize) -> (usize, usize) {
        (index / COLS, index % COLS)
    }

    fn check(index: usize) -> Result<usize, BoardError> {
        if index < CELL_COUNT {
            Ok(index)
        } else {
            Err(BoardError::OutOfRange(index))
        }
    }

    pub fn cell_at(&self, index: usize) -> Result<Cell, BoardError> {
        let index = Self::check(index)?;
        Ok(Cell {
            index,
            occupant: self.cells[index],
        })
    }

    /// Out-of-range indices are never occupied
    pub fn is_occupied(&self, index: usize) -> bool {
        self.owner_of(index).is_some()
    }

    pub fn owner_of(&self, index: usize) -> Option<PlayerColor> {
        self.cells.get(index).copied().flatten()
    }

    /// Put a new piece on an empty cell
    pub fn place(&mut self, index: usize, color: PlayerColor) -> Result<(), BoardError> {
        let index = Self::check(index)?;
        if self.cells[index].is_some() {
            return Err(BoardError::AlreadyOccupied(index));
        }
        self.cells[index] = Some(color);
        Ok(())
    }

    /// Relocate the piece on `from` to the empty cell `to`
    pub fn move_occupant(&mut self, from: usize, to: usize) -> Result<(), BoardError> {
        let from = Self::check(from)?;
        let to = Self::check(to)?;
        let piece = self.cells[from].ok_or(BoardError::SourceEmpty(from))?;
        if self.cells[to].is_some() {
            return Err(BoardError::DestinationOccupied(to));
        }
        self.cells[to] = Some(piece);
        self.cells[from] = None;
        Ok(())
    }

    /// Clear a cell, returning whatever was on it
    pub fn remove(&mut self, index: usize) -> Result<Option<PlayerColor>, BoardError> {
        let index = Self::check(index)?;
        Ok(self.cells[index].take())
    }

    /// Iterate over occupied cells in index order
    pub fn occupied(&self) -> impl Iterator<Item = (usize, PlayerColor)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|color| (i, color)))
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    /// Number of pieces of one color on the board
    pub fn count(&self, color: PlayerColor) -> usize {
        self.occupied().filter(|&(_, c)| c == color).count()
    }

    /// The color owning every piece on the board, if there is exactly one.
    /// An empty board has no owner.
    pub fn sole_owner(&self) -> Option<PlayerColor> {
        let mut pieces = self.occupied().map(|(_, c)| c);
        let first = pieces.next()?;
        pieces.all(|c| c == first).then_some(first)
    }

    /// Render as five lines of `O`, `G` and `.`
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(CELL_COUNT + ROWS);
        for row in 0..ROWS {
            for col in 0..COLS {
                out.push(self.cells[row * COLS + col].map_or('.', PlayerColor::glyph));
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
