//! Simulation facade tying the logical cube state to the animation layer.

use cgmath::{Deg, Quaternion, Rotation3, Vector3};
use tricube_core::{Axis, CubeCoords, CubeState, Piece, PieceTwist};

use crate::interpolate::AnimationPreferences;
use crate::transform::{PieceTransform, PieceTransforms};
use crate::twist::TwistAnimationState;

/// Cube simulation, which manages the logical cube state, the per-piece
/// transforms, and the in-flight turn animations.
///
/// The external shell drives it on one control thread: discrete
/// [`turn`](CubeSimulation::turn)/[`spin`](CubeSimulation::spin) commands
/// from the input layer, one [`advance`](CubeSimulation::advance) call per
/// simulation tick from the frame loop, and per-piece transform queries from
/// the drawing layer.
#[derive(Debug, Clone)]
pub struct CubeSimulation {
    /// Authoritative piece-to-slot mapping, not including any transient
    /// rotation.
    state: CubeState,
    /// Attitude of each piece.
    transforms: PieceTransforms,
    twist_anim: TwistAnimationState,
    /// Animation settings, fixed for the simulation's lifetime.
    prefs: AnimationPreferences,
}

impl CubeSimulation {
    /// Constructs a solved cube with the given animation settings.
    pub fn new(prefs: AnimationPreferences) -> Self {
        CubeSimulation {
            state: CubeState::new(),
            transforms: PieceTransforms::new(),
            twist_anim: TwistAnimationState::default(),
            prefs,
        }
    }

    /// Returns the logical cube state.
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// Returns the animation settings.
    pub fn prefs(&self) -> &AnimationPreferences {
        &self.prefs
    }

    /// Returns the piece currently occupying `coords`.
    pub fn piece_at(&self, coords: CubeCoords) -> Piece {
        self.state.piece_at(coords)
    }

    /// Returns a piece's current pose.
    pub fn piece_transform(&self, piece: Piece) -> &PieceTransform {
        &self.transforms[piece]
    }

    /// Iterates over every piece's current pose, for the drawing layer.
    pub fn transforms(&self) -> impl Iterator<Item = (Piece, &PieceTransform)> + '_ {
        self.transforms.iter()
    }

    /// Returns whether any turn animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.twist_anim.is_animating()
    }

    /// Turns one layer of the cube. The logical state updates immediately;
    /// the visible rotation plays out over the configured duration.
    pub fn turn(&mut self, axis: Axis, layer: u8, reverse: bool) {
        let moved = self.state.turn(axis, layer, reverse);
        self.queue_twists(&moved);
    }

    /// Rotates the whole cube as a rigid body.
    pub fn spin(&mut self, axis: Axis, reverse: bool) {
        let moved = self.state.spin(axis, reverse);
        self.queue_twists(&moved);
    }

    /// Steps animations forward by `dt` seconds. Call once per simulation
    /// tick. Returns whether the scene should be redrawn next frame.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.twist_anim.proceed(dt, &self.prefs, &mut self.transforms)
    }

    fn queue_twists(&mut self, moved: &[PieceTwist]) {
        for twist in moved {
            let rotation = Quaternion::from_axis_angle(axis_vector(twist.axis), Deg(twist.angle));
            self.twist_anim.animate(twist.piece, rotation, &mut self.transforms);
        }
    }
}

/// World-space unit vector for a turn axis.
fn axis_vector(axis: Axis) -> Vector3<f32> {
    match axis {
        Axis::X => Vector3::unit_x(),
        Axis::Y => Vector3::unit_y(),
        Axis::Z => Vector3::unit_z(),
    }
}
