//! Player kinematics
//!
//! The integrator is a pure function of its inputs: gravity, an optional
//! flap impulse, and forward travel. It never clamps; floor/ceiling checks
//! belong to the run controller, which owns the crash transition.

use super::state::PlayerState;
use crate::tuning::Tuning;

/// Advance the player by one step of `dt` seconds.
///
/// A flap overwrites vertical velocity with the configured impulse instead
/// of adding to it, so rapid repeated flaps do not stack.
#[must_use]
pub fn integrate(mut player: PlayerState, dt: f32, flap: bool, tuning: &Tuning) -> PlayerState {
    player.vel_y -= tuning.gravity * dt;
    if flap {
        player.vel_y = tuning.jump_impulse;
    }
    player.pos_y += player.vel_y * dt;
    player.pos_z -= player.forward_speed * dt;
    player
}
