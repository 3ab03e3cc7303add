use std::fmt;
use std::num::ParseIntError;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grid slot coordinates, each component in `0..3`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubeCoords {
    /// Column index.
    pub x: u8,
    /// Row index within the horizontal plane.
    pub y: u8,
    /// Tier index (vertical).
    pub z: u8,
}

impl CubeCoords {
    /// Constructs coordinates, panicking if any component is out of range.
    pub fn new(x: u8, y: u8, z: u8) -> Self {
        assert!(x < 3 && y < 3 && z < 3, "coordinates out of range: ({x},{y},{z})");
        CubeCoords { x, y, z }
    }

    /// Linear index into a 27-element slot array.
    pub fn linear_index(self) -> usize {
        self.x as usize * 9 + self.y as usize * 3 + self.z as usize
    }

    /// Inverse of [`CubeCoords::linear_index()`].
    pub fn from_linear_index(i: usize) -> Self {
        assert!(i < 27, "linear index out of range: {i}");
        CubeCoords {
            x: (i / 9) as u8,
            y: (i / 3 % 3) as u8,
            z: (i % 3) as u8,
        }
    }

    /// Iterates over all 27 slots in linear-index order.
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..3_u8)
            .cartesian_product(0..3_u8)
            .cartesian_product(0..3_u8)
            .map(|((x, y), z)| CubeCoords { x, y, z })
    }

    /// Parses coordinates from a drawable mesh name of the form
    /// `<prefix>_x,y,z` (e.g., `piece_0,1,2`), the naming scheme cube model
    /// files use to tag each sub-cube mesh with its home slot.
    pub fn from_mesh_name(name: &str) -> Result<Self, MeshNameError> {
        let (_, suffix) = name
            .split_once('_')
            .ok_or_else(|| MeshNameError::MissingSuffix(name.to_owned()))?;
        let components: Vec<u8> = suffix
            .split(',')
            .map(|s| s.trim().parse())
            .try_collect()
            .map_err(|source: ParseIntError| MeshNameError::BadInteger {
                name: name.to_owned(),
                source,
            })?;
        let [x, y, z] = components[..] else {
            return Err(MeshNameError::WrongArity(name.to_owned()));
        };
        if x >= 3 || y >= 3 || z >= 3 {
            return Err(MeshNameError::OutOfRange(name.to_owned()));
        }
        Ok(CubeCoords { x, y, z })
    }
}

impl fmt::Display for CubeCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// Error parsing grid coordinates from a drawable mesh name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshNameError {
    /// The name contains no `_`-separated index suffix.
    #[error("mesh name {0:?} has no index suffix")]
    MissingSuffix(String),
    /// A coordinate component is not a valid integer.
    #[error("bad coordinate in mesh name {name:?}")]
    BadInteger {
        /// The offending mesh name.
        name: String,
        /// The underlying integer parse error.
        source: ParseIntError,
    },
    /// The suffix does not have exactly three components.
    #[error("mesh name {0:?} does not have exactly three coordinates")]
    WrongArity(String),
    /// A coordinate component is outside `0..3`.
    #[error("coordinate out of range in mesh name {0:?}")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_linear_index_round_trip() {
        for (i, coords) in CubeCoords::iter().enumerate() {
            assert_eq!(i, coords.linear_index());
            assert_eq!(coords, CubeCoords::from_linear_index(i));
        }
    }

    #[test]
    fn test_mesh_name_parsing() {
        assert_eq!(
            Ok(CubeCoords::new(0, 1, 2)),
            CubeCoords::from_mesh_name("piece_0,1,2"),
        );
        assert_eq!(
            Ok(CubeCoords::new(2, 2, 0)),
            CubeCoords::from_mesh_name("corner_2, 2, 0"),
        );
        assert_eq!(
            Err(MeshNameError::MissingSuffix("piece".to_owned())),
            CubeCoords::from_mesh_name("piece"),
        );
        assert_eq!(
            Err(MeshNameError::WrongArity("piece_0,1".to_owned())),
            CubeCoords::from_mesh_name("piece_0,1"),
        );
        assert_eq!(
            Err(MeshNameError::OutOfRange("piece_0,1,3".to_owned())),
            CubeCoords::from_mesh_name("piece_0,1,3"),
        );
        assert!(matches!(
            CubeCoords::from_mesh_name("piece_0,one,2"),
            Err(MeshNameError::BadInteger { .. }),
        ));
    }
}
