use itertools::Itertools;
use smallvec::SmallVec;

use crate::axis::Axis;
use crate::coords::CubeCoords;
use crate::grid::PieceGrid;
use crate::piece::Piece;

/// Magnitude of a single face turn, in degrees.
pub const TURN_DEGREES: f32 = 90.0;

/// One piece affected by a turn, with the rotation it must visually animate
/// through. The grid has already been permuted when this is produced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PieceTwist {
    /// Piece that moved.
    pub piece: Piece,
    /// World-space axis to rotate about.
    pub axis: Axis,
    /// Signed rotation angle in degrees.
    pub angle: f32,
}

/// Cube state: the piece-to-slot mapping, mutated only by turns.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct CubeState {
    grid: PieceGrid,
}

impl CubeState {
    /// Returns a solved cube.
    pub fn new() -> Self {
        CubeState {
            grid: PieceGrid::solved(),
        }
    }

    /// Returns the current piece-to-slot mapping.
    pub fn grid(&self) -> &PieceGrid {
        &self.grid
    }

    /// Returns the piece currently occupying `coords`.
    pub fn piece_at(&self, coords: CubeCoords) -> Piece {
        self.grid[coords]
    }

    /// Returns whether every piece is at its home slot.
    pub fn is_solved(&self) -> bool {
        self.grid == PieceGrid::solved()
    }

    /// Turns one layer of the cube ±90° about `axis`.
    ///
    /// Forward (`reverse == false`) is −90° about the positive world axis;
    /// `reverse` is +90°. The grid is permuted immediately; the returned
    /// list names the 9 pieces that moved and the rotation each must
    /// animate through.
    ///
    /// Panics if `layer >= 3`.
    pub fn turn(&mut self, axis: Axis, layer: u8, reverse: bool) -> SmallVec<[PieceTwist; 9]> {
        assert!(layer < 3, "layer index out of range: {layer}");
        log::trace!("turning {axis} layer {layer} (reverse: {reverse})");

        let angle = if reverse { TURN_DEGREES } else { -TURN_DEGREES };
        // Snapshot before writing: the permutation reads and writes the same
        // 9 slots, so sources must come from the pre-turn grid.
        let before = self.grid;
        let mut moved = SmallVec::new();

        // Each arm rewrites the selected plane with a ±90° index rotation of
        // the two free coordinates; `rot` selects the direction.
        let plane = (0..3_u8).cartesian_product(0..3_u8);
        match axis {
            Axis::X => {
                let rot: u8 = if reverse { 0 } else { 2 };
                for (j, k) in plane {
                    let dst = CubeCoords::new(layer, j, k);
                    let src = CubeCoords::new(layer, (2 - rot).abs_diff(k), rot.abs_diff(j));
                    moved.push(PieceTwist {
                        piece: before[dst],
                        axis,
                        angle,
                    });
                    self.grid.set(dst, before[src]);
                }
            }
            Axis::Y => {
                let rot: u8 = if reverse { 2 } else { 0 };
                for (i, j) in plane {
                    let dst = CubeCoords::new(i, j, layer);
                    let src = CubeCoords::new(rot.abs_diff(j), (2 - rot).abs_diff(i), layer);
                    moved.push(PieceTwist {
                        piece: before[dst],
                        axis,
                        angle,
                    });
                    self.grid.set(dst, before[src]);
                }
            }
            Axis::Z => {
                let rot: u8 = if reverse { 2 } else { 0 };
                for (i, k) in plane {
                    let dst = CubeCoords::new(i, layer, k);
                    let src = CubeCoords::new((2 - rot).abs_diff(k), layer, rot.abs_diff(i));
                    moved.push(PieceTwist {
                        piece: before[dst],
                        axis,
                        angle,
                    });
                    self.grid.set(dst, before[src]);
                }
            }
        }

        debug_assert!(self.grid.is_bijection(), "turn broke the grid bijection");
        moved
    }

    /// Turns all three layers along `axis` in sequence, rotating the whole
    /// cube as a rigid body.
    pub fn spin(&mut self, axis: Axis, reverse: bool) -> SmallVec<[PieceTwist; 27]> {
        let mut moved = SmallVec::new();
        for layer in 0..3 {
            moved.extend(self.turn(axis, layer, reverse));
        }
        moved
    }
}
