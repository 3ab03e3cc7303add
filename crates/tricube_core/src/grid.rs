use std::array;
use std::ops::Index;

use crate::coords::CubeCoords;
use crate::piece::Piece;

/// Arena mapping the 27 grid slots to pieces, indexed by [`CubeCoords`].
///
/// Invariant: the mapping is always a bijection, with exactly one piece per
/// slot. Turns permute it; nothing else may write to it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PieceGrid([Piece; Piece::COUNT]);

impl Default for PieceGrid {
    fn default() -> Self {
        Self::solved()
    }
}

impl PieceGrid {
    /// Returns the solved grid, with every piece at its home slot.
    pub fn solved() -> Self {
        PieceGrid(array::from_fn(|i| Piece(i as u8)))
    }

    /// Returns whether every piece occupies exactly one slot. Always true
    /// for a correct turn implementation; checked by debug assertions.
    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; Piece::COUNT];
        for piece in self.0 {
            seen[piece.idx()] = true;
        }
        seen.iter().all(|&s| s)
    }

    /// Iterates over `(slot, piece)` pairs in linear-index order.
    pub fn iter(&self) -> impl Iterator<Item = (CubeCoords, Piece)> + '_ {
        CubeCoords::iter().map(|coords| (coords, self[coords]))
    }

    pub(crate) fn set(&mut self, coords: CubeCoords, piece: Piece) {
        self.0[coords.linear_index()] = piece;
    }
}

impl Index<CubeCoords> for PieceGrid {
    type Output = Piece;

    fn index(&self, coords: CubeCoords) -> &Piece {
        &self.0[coords.linear_index()]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_solved_grid_is_bijection() {
        let grid = PieceGrid::solved();
        assert!(grid.is_bijection());
        for (coords, piece) in grid.iter() {
            assert_eq!(coords, piece.home());
        }
    }

    #[test]
    fn test_duplicate_piece_is_not_bijection() {
        let mut grid = PieceGrid::solved();
        grid.set(CubeCoords::new(0, 0, 0), Piece(1));
        assert!(!grid.is_bijection());
    }
}
