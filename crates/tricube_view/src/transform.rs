//! Per-piece pose: a translation fixed at creation plus the rotation
//! accumulated from turns.

use std::array;
use std::ops::Index;

use cgmath::{InnerSpace, Matrix4, One, Quaternion, Vector3};
use tricube_core::{CubeCoords, Piece};

/// Distance between adjacent piece centers, in world units.
pub const PIECE_SPACING: f32 = 1.0;

/// Attitude of one piece.
///
/// The translation is assigned once from the piece's home slot and never
/// recomputed from grid coordinates; grid coordinates are a logical index
/// only. The rotation is the product of every committed turn rotation plus
/// the in-flight animation delta, applied about the cube's center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PieceTransform {
    translation: Vector3<f32>,
    rotation: Quaternion<f32>,
}

impl PieceTransform {
    fn at_home(piece: Piece) -> Self {
        // Grid coordinates are (column, row, tier) with the tier stored
        // third, while world space is Y-up.
        let CubeCoords { x, y, z } = piece.home();
        let centered = |c: u8| (c as f32 - 1.0) * PIECE_SPACING;
        PieceTransform {
            translation: Vector3::new(centered(x), centered(z), centered(y)),
            rotation: Quaternion::one(),
        }
    }

    /// The piece's fixed translation from the cube's center.
    pub fn translation(&self) -> Vector3<f32> {
        self.translation
    }

    /// The piece's accumulated rotation about the cube's center.
    pub fn rotation(&self) -> Quaternion<f32> {
        self.rotation
    }

    /// Composed world matrix for the drawing layer: translate to the home
    /// position, then rotate about the cube's center.
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::from(self.rotation) * Matrix4::from_translation(self.translation)
    }

    /// Applies `delta` after the current rotation, renormalizing to keep the
    /// quaternion unit-length across long turn sequences.
    pub(crate) fn rotate(&mut self, delta: Quaternion<f32>) {
        self.rotation = (delta * self.rotation).normalize();
    }
}

/// Arena of piece transforms, indexed by [`Piece`].
#[derive(Debug, Clone, PartialEq)]
pub struct PieceTransforms([PieceTransform; Piece::COUNT]);

impl Default for PieceTransforms {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceTransforms {
    /// Returns the solved-cube layout, every piece at its home position with
    /// no rotation.
    pub fn new() -> Self {
        PieceTransforms(array::from_fn(|i| PieceTransform::at_home(Piece(i as u8))))
    }

    /// Iterates over `(piece, transform)` pairs in piece-id order.
    pub fn iter(&self) -> impl Iterator<Item = (Piece, &PieceTransform)> + '_ {
        self.0.iter().enumerate().map(|(i, t)| (Piece(i as u8), t))
    }

    pub(crate) fn get_mut(&mut self, piece: Piece) -> &mut PieceTransform {
        &mut self.0[piece.idx()]
    }
}

impl Index<Piece> for PieceTransforms {
    type Output = PieceTransform;

    fn index(&self, piece: Piece) -> &PieceTransform {
        &self.0[piece.idx()]
    }
}
