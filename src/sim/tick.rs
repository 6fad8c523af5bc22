//! Per-frame run controller
//!
//! One [`tick`] advances the simulation by one displayed frame: integrate
//! the player, bounds-check, advance the obstacle field, advance the coin
//! field, in that fixed order. Movement is applied before any collision
//! test so a crash is attributed to the position that caused it.
//!
//! Events come back as plain data; the host dispatches them to audio, HUD
//! and account plumbing however it likes. The controller is the sole
//! mutator of the state it is handed.

use log::debug;

use super::kinematics::integrate;
use super::state::{CrashCause, GameEvent, GameState, RunPhase, RunStats};

/// Input commands for a single step, already edge-coalesced by the host:
/// however many taps landed since the last frame, one flap is one flap.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap impulse requested. Honored only while playing.
    pub flap: bool,
    /// Start a run from the menu, or restart after a crash.
    pub start: bool,
}

/// Advance the game by one frame of `dt` seconds.
///
/// Returns the lifecycle events produced this step, in the order they
/// occurred. Once the run has crashed the state is frozen and further calls
/// return nothing until `start` is requested again.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase != RunPhase::Playing {
        if input.start {
            debug!("starting run (seed {})", state.seed);
            state.reset_run();
        }
        return events;
    }

    state.time_ticks += 1;

    // --- PHYSICS ---
    state.player = integrate(state.player, dt, input.flap, &state.tuning);

    // --- BOUNDS ---
    if state.player.pos_y > state.tuning.ceiling_y || state.player.pos_y < state.tuning.floor_y {
        crash(state, CrashCause::OutOfBounds, &mut events);
        return events;
    }

    // --- OBSTACLES ---
    let (player_z, player_y) = (state.player.pos_z, state.player.pos_y);
    let outcome = state
        .obstacles
        .advance(player_z, player_y, &mut state.rng, &state.tuning);
    for _ in 0..outcome.passed {
        state.score += 1;
        // Each scored gate nudges the pace up toward the cap.
        state.player.forward_speed = (state.player.forward_speed
            + state.tuning.speed_increment)
            .min(state.tuning.max_speed);
        events.push(GameEvent::Score);
    }
    if outcome.collided {
        crash(state, CrashCause::Obstacle, &mut events);
        return events;
    }

    // --- COINS ---
    let picked = state
        .coins
        .advance(player_z, player_y, &mut state.rng, &state.tuning);
    for _ in 0..picked {
        state.coins_collected += 1;
        events.push(GameEvent::Coin);
    }

    events
}

/// End the run: snapshot the stats, freeze the state, emit the one crash
/// event this run gets.
fn crash(state: &mut GameState, cause: CrashCause, events: &mut Vec<GameEvent>) {
    debug!(
        "run over after {} steps: {:?}, score {}, coins {}",
        state.time_ticks, cause, state.score, state.coins_collected
    );
    state.final_stats = Some(RunStats {
        score: state.score,
        coins: state.coins_collected,
        distance: -state.player.pos_z,
        final_speed: state.player.forward_speed,
    });
    state.phase = RunPhase::Crashed;
    events.push(GameEvent::Crash(cause));
}
