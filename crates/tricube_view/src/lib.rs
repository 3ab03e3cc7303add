//! Turn animation and piece-pose layer for a 3×3×3 cube visualizer.
//!
//! [`tricube_core`] permutes the grid the instant a turn is issued; this
//! crate smooths the visible motion. Each moved piece gets a rotation job
//! that drives it through its ±90° rotation over a fixed duration, and
//! [`CubeSimulation`] ties the
//! logical state, the per-piece transforms, and the animation state together
//! behind the surface a rendering shell drives:
//!
//! ```
//! use tricube_core::Axis;
//! use tricube_view::{AnimationPreferences, CubeSimulation};
//!
//! let mut sim = CubeSimulation::new(AnimationPreferences::default());
//! sim.turn(Axis::Y, 0, false);
//! while sim.advance(1.0 / 60.0) {
//!     for (_piece, transform) in sim.transforms() {
//!         let _uniform = transform.matrix(); // upload per-piece model matrix
//!     }
//! }
//! ```

mod interpolate;
mod simulation;
mod transform;
mod twist;

pub use interpolate::{AnimationPreferences, InterpolateFn};
pub use simulation::CubeSimulation;
pub use transform::{PieceTransform, PieceTransforms, PIECE_SPACING};
pub use twist::TwistAnimationState;
