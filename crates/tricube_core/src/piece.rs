use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coords::{CubeCoords, MeshNameError};

/// ID of a **piece**, one of the 27 rigid sub-cubes. The id is the linear
/// index of the piece's home slot in the solved cube, so ids double as
/// indices into per-piece arenas.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Piece(pub u8);

impl Piece {
    /// Number of pieces in the cube.
    pub const COUNT: usize = 27;

    /// Returns the piece whose home slot is `coords`.
    pub fn from_home(coords: CubeCoords) -> Self {
        Piece(coords.linear_index() as u8)
    }

    /// Returns the piece bound to a drawable mesh named `<prefix>_x,y,z`,
    /// i.e. the piece whose home slot the mesh occupies in the solved cube.
    pub fn from_mesh_name(name: &str) -> Result<Self, MeshNameError> {
        CubeCoords::from_mesh_name(name).map(Self::from_home)
    }

    /// The piece's home slot in the solved cube.
    pub fn home(self) -> CubeCoords {
        CubeCoords::from_linear_index(self.idx())
    }

    /// Index into per-piece arenas.
    pub fn idx(self) -> usize {
        self.0 as usize
    }

    /// Iterates over all 27 pieces in id order.
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u8).map(Piece)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece {}", self.home())
    }
}
