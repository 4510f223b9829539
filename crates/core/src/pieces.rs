//! Pieces module - tetromino shapes and the quarter-turn rotation
//!
//! Every piece is four cells given as (dx, dy) offsets from a pivot, x to the
//! right and y down. Rotation maps each offset `(dx, dy)` to `(-dy, dx)`
//! around the pivot; there are no wall kicks.

use crate::types::PieceKind;

/// Offset of a single cell relative to the piece pivot
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the pivot
pub type PieceShape = [CellOffset; 4];

/// Canonical spawn layout for a piece kind
pub fn coordinates_for(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::Z => [(-1, 0), (0, 0), (0, 1), (1, 1)],
        PieceKind::S => [(-1, 1), (0, 1), (0, 0), (1, 0)],
        PieceKind::Line => [(-2, 0), (-1, 0), (0, 0), (1, 0)],
        PieceKind::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        PieceKind::Square => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::L => [(-1, 0), (0, 0), (1, 0), (-1, 1)],
        PieceKind::MirroredL => [(-1, 0), (0, 0), (1, 0), (1, 1)],
    }
}

/// An immutable tetromino: a kind and its current four offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    coords: PieceShape,
}

impl Piece {
    /// Piece in its spawn orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            coords: coordinates_for(kind),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn coords(&self) -> &PieceShape {
        &self.coords
    }

    /// The piece turned a quarter turn.
    ///
    /// The square is returned unchanged: its layout is already symmetric
    /// about the pivot cell it occupies.
    pub fn rotated(&self) -> Self {
        if self.kind == PieceKind::Square {
            return *self;
        }
        Self {
            kind: self.kind,
            coords: self.coords.map(|(dx, dy)| (-dy, dx)),
        }
    }

    /// Absolute board cells when the pivot sits at `(x, y)`
    pub fn cells_at(&self, x: i8, y: i8) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.coords.iter().map(move |&(dx, dy)| (x + dx, y + dy))
    }
}

/// Free-function form of [`Piece::rotated`]
pub fn rotate(piece: &Piece) -> Piece {
    piece.rotated()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_t_once() {
        let t = Piece::new(PieceKind::T);
        assert_eq!(t.rotated().coords(), &[(0, -1), (0, 0), (0, 1), (-1, 0)]);
    }

    #[test]
    fn test_square_is_fixed_point() {
        let o = Piece::new(PieceKind::Square);
        assert_eq!(o.rotated(), o);
        assert_eq!(rotate(&o), o);
    }

    #[test]
    fn test_cells_at_translates_offsets() {
        let line = Piece::new(PieceKind::Line);
        let cells: Vec<_> = line.cells_at(5, 0).collect();
        assert_eq!(cells, vec![(3, 0), (4, 0), (5, 0), (6, 0)]);
    }
}
