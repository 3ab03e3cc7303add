//! Logical model of a 3×3×3 twisty cube: piece identifiers, the grid arena
//! mapping slots to pieces, and the face-turn permutation algorithm.
//!
//! This crate knows nothing about drawing. A turn permutes the grid
//! immediately and reports which pieces moved and what rotation each must
//! animate through; smoothing that rotation over time is the view layer's
//! job.

mod axis;
mod coords;
mod grid;
mod piece;
mod state;

pub use axis::Axis;
pub use coords::{CubeCoords, MeshNameError};
pub use grid::PieceGrid;
pub use piece::Piece;
pub use state::{CubeState, PieceTwist, TURN_DEGREES};
