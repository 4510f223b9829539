//! Board module - manages the game grid
//!
//! The board is a 10x22 grid where every cell is either `Cell::Empty` or holds
//! the kind of the piece that was locked there.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..21 (top to bottom)

use crate::pieces::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board - 10 columns x 22 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a single position is within bounds and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// Check whether `piece` fits with its pivot at `(x, y)`: every cell in
    /// bounds and empty. No side effects.
    pub fn is_valid_position(&self, piece: &Piece, x: i8, y: i8) -> bool {
        piece.cells_at(x, y).all(|(cx, cy)| self.is_free(cx, cy))
    }

    /// Write the piece kind into every cell the piece covers at `(x, y)`.
    ///
    /// Cells above the top row are skipped. Callers only lock positions that
    /// passed [`Board::is_valid_position`].
    pub fn lock(&mut self, piece: &Piece, x: i8, y: i8) {
        let cell = Cell::from(piece.kind());
        for (cx, cy) in piece.cells_at(x, y) {
            if cy < 0 {
                continue;
            }
            self.set(cx, cy, cell);
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH]
            .iter()
            .all(|cell| !cell.is_empty())
    }

    /// Check if a row is completely empty
    pub fn is_row_empty(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH]
            .iter()
            .all(|cell| cell.is_empty())
    }

    /// Remove every full row, shift the rows above it down and refill the top
    /// with empty rows. Returns the number of rows removed.
    ///
    /// Two-pointer compaction from the bottom up; the row count never changes
    /// and surviving rows keep their relative order.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(Cell::Empty);
        cleared
    }

    /// Read-only view of the flat cell array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over `(x, y, cell)` for every non-empty cell
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_empty())
            .map(|(i, &cell)| ((i % WIDTH) as i8, (i / WIDTH) as i8, cell))
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(WIDTH).map(|row| row.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
