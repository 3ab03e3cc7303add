//! In-flight turn animations.

use cgmath::{One, Quaternion, Rotation};
use tricube_core::Piece;

use crate::interpolate::AnimationPreferences;
use crate::transform::PieceTransforms;

/// One piece's rotation animation. `inv_last_rotation` is the inverse of the
/// partial rotation applied on the previous tick, so each tick applies only
/// the delta instead of re-deriving from zero.
#[derive(Debug, Copy, Clone)]
struct RotationJob {
    piece: Piece,
    final_rotation: Quaternion<f32>,
    inv_last_rotation: Quaternion<f32>,
    /// Time elapsed within the job, clamped to the configured duration.
    elapsed: f32,
}

/// Set of active rotation jobs. While a job is active, this is the only
/// writer of that piece's rotation.
#[derive(Debug, Default, Clone)]
pub struct TwistAnimationState {
    jobs: Vec<RotationJob>,
}

impl TwistAnimationState {
    /// Registers a job rotating `piece` from its current attitude through
    /// `rotation`.
    ///
    /// If a job for `piece` is already active, its remaining rotation is
    /// committed into the piece's transform first, so overlapping turns on
    /// one piece never lose or double-apply a partial rotation.
    pub fn animate(
        &mut self,
        piece: Piece,
        rotation: Quaternion<f32>,
        transforms: &mut PieceTransforms,
    ) {
        if let Some(i) = self.jobs.iter().position(|job| job.piece == piece) {
            let job = self.jobs.swap_remove(i);
            transforms
                .get_mut(piece)
                .rotate(job.final_rotation * job.inv_last_rotation);
            log::trace!("snapped pending job for {piece} before a new turn");
        }

        self.jobs.push(RotationJob {
            piece,
            final_rotation: rotation,
            inv_last_rotation: Quaternion::one(),
            elapsed: 0.0,
        });
    }

    /// Steps every active job forward by `dt` seconds and applies the
    /// resulting rotation deltas. Returns whether the scene should be
    /// redrawn next frame.
    ///
    /// The last tick of a job clamps its elapsed time to the duration, and
    /// every easing maps 1.0 to exactly 1.0, so a completed job leaves the
    /// piece exactly at its final rotation no matter how `dt` was
    /// partitioned.
    pub fn proceed(
        &mut self,
        dt: f32,
        prefs: &AnimationPreferences,
        transforms: &mut PieceTransforms,
    ) -> bool {
        if self.jobs.is_empty() {
            return false;
        }

        let duration = prefs.twist_duration;
        for job in &mut self.jobs {
            job.elapsed = (job.elapsed + dt).min(duration);
            let t = if duration > 0.0 {
                job.elapsed / duration
            } else {
                1.0 // Zero duration completes a job on its first tick.
            };
            let new_rotation = Quaternion::one().slerp(
                job.final_rotation,
                prefs.interpolation.interpolate(t),
            );
            transforms
                .get_mut(job.piece)
                .rotate(new_rotation * job.inv_last_rotation);
            job.inv_last_rotation = new_rotation.invert();
        }
        self.jobs.retain(|job| job.elapsed < duration);

        true
    }

    /// Returns whether any job is active.
    pub fn is_animating(&self) -> bool {
        !self.jobs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{Deg, InnerSpace, Rotation3, Vector3};

    use super::*;
    use crate::interpolate::InterpolateFn;
    use strum::VariantArray;

    fn assert_same_rotation(expected: Quaternion<f32>, actual: Quaternion<f32>) {
        // q and -q represent the same rotation.
        let dot = expected.normalize().dot(actual.normalize()).abs();
        assert!(dot > 1.0 - 1e-5, "rotations differ: {expected:?} vs {actual:?}");
    }

    fn quarter_turn_y() -> Quaternion<f32> {
        Quaternion::from_axis_angle(Vector3::unit_y(), Deg(-90.0))
    }

    #[test]
    fn test_convergence_is_tick_size_independent() {
        for &interpolation in InterpolateFn::VARIANTS {
            let prefs = AnimationPreferences {
                twist_duration: 0.5,
                interpolation,
            };
            let piece = Piece(0);

            let mut coarse = (TwistAnimationState::default(), PieceTransforms::new());
            coarse.0.animate(piece, quarter_turn_y(), &mut coarse.1);
            coarse.0.proceed(0.5, &prefs, &mut coarse.1);
            assert!(!coarse.0.is_animating());

            // 8 × 1/16 s sums to the duration with no rounding error.
            let mut fine = (TwistAnimationState::default(), PieceTransforms::new());
            fine.0.animate(piece, quarter_turn_y(), &mut fine.1);
            for _ in 0..8 {
                fine.0.proceed(0.0625, &prefs, &mut fine.1);
            }
            assert!(!fine.0.is_animating());

            assert_same_rotation(quarter_turn_y(), coarse.1[piece].rotation());
            assert_same_rotation(quarter_turn_y(), fine.1[piece].rotation());
        }
    }

    #[test]
    fn test_overshooting_tick_still_lands_exactly() {
        let prefs = AnimationPreferences::default();
        let piece = Piece(13);
        let mut anim = TwistAnimationState::default();
        let mut transforms = PieceTransforms::new();

        anim.animate(piece, quarter_turn_y(), &mut transforms);
        anim.proceed(0.3, &prefs, &mut transforms);
        anim.proceed(100.0, &prefs, &mut transforms);

        assert!(!anim.is_animating());
        assert_same_rotation(quarter_turn_y(), transforms[piece].rotation());
    }

    #[test]
    fn test_job_replacement_commits_pending_rotation() {
        let prefs = AnimationPreferences::default();
        let piece = Piece(4);
        let mut anim = TwistAnimationState::default();
        let mut transforms = PieceTransforms::new();

        anim.animate(piece, quarter_turn_y(), &mut transforms);
        anim.proceed(0.2, &prefs, &mut transforms);
        // Replace mid-flight; the first job must be fully applied first.
        anim.animate(piece, quarter_turn_y(), &mut transforms);
        anim.proceed(prefs.twist_duration, &prefs, &mut transforms);

        let half_turn = Quaternion::from_axis_angle(Vector3::unit_y(), Deg(-180.0));
        assert_same_rotation(half_turn, transforms[piece].rotation());
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let prefs = AnimationPreferences {
            twist_duration: 0.0,
            ..AnimationPreferences::default()
        };
        let piece = Piece(26);
        let mut anim = TwistAnimationState::default();
        let mut transforms = PieceTransforms::new();

        anim.animate(piece, quarter_turn_y(), &mut transforms);
        assert!(anim.proceed(1.0 / 60.0, &prefs, &mut transforms));
        assert!(!anim.is_animating());
        assert_same_rotation(quarter_turn_y(), transforms[piece].rotation());
    }

    #[test]
    fn test_idle_state_requests_no_redraw() {
        let prefs = AnimationPreferences::default();
        let mut anim = TwistAnimationState::default();
        let mut transforms = PieceTransforms::new();
        assert!(!anim.proceed(1.0 / 60.0, &prefs, &mut transforms));
    }
}
