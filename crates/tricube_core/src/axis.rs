use std::fmt;

use serde::{Deserialize, Serialize};
use strum::VariantArray;

/// World-space turn axis.
///
/// Grid space stores the vertical coordinate in its third slot, so a turn
/// about `Y` fixes the grid `z` coordinate while `X` and `Z` turns fix grid
/// `x` and `y` respectively.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, VariantArray)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left/right axis.
    X,
    /// Up/down axis.
    Y,
    /// Front/back axis.
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}
