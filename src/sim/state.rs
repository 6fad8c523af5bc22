//! Run state and core simulation types
//!
//! Everything the run controller owns lives here: the player's kinematic
//! state, the two recycled record fields, the run phase, and the stats
//! snapshot taken when a run ends.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field::{CoinField, ObstacleField};
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunPhase {
    /// Menu / attract mode; the simulation is parked
    #[default]
    Idle,
    /// Active run
    Playing,
    /// Run ended; state frozen until restart
    Crashed,
}

/// Player kinematic state. Owned by the run controller; nothing else
/// mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Vertical velocity (units/s)
    pub vel_y: f32,
    /// Vertical position
    pub pos_y: f32,
    /// Depth position; travel is toward -z
    pub pos_z: f32,
    /// Forward speed; never decreases within a run
    pub forward_speed: f32,
}

impl PlayerState {
    /// State at the start of a run.
    pub fn at_start(base_speed: f32) -> Self {
        Self {
            vel_y: 0.0,
            pos_y: 0.0,
            pos_z: 0.0,
            forward_speed: base_speed,
        }
    }
}

/// One gated obstacle in the recycled field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Depth of the obstacle plane
    pub z: f32,
    /// Vertical center of the gap
    pub gap_center: f32,
    /// Scored latch; cleared on recycle
    pub passed: bool,
}

/// One coin pickup in the recycled field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Depth of the coin
    pub z: f32,
    /// Height of the coin
    pub y: f32,
    /// Pickup latch; cleared on recycle
    pub collected: bool,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Flew above the ceiling or below the floor
    OutOfBounds,
    /// Hit an obstacle body outside its gap
    Obstacle,
}

/// Lifecycle events handed to the host, in the order they occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An obstacle was passed through its gap
    Score,
    /// A coin was picked up
    Coin,
    /// The run ended. At most one per run.
    Crash(CrashCause),
}

/// Final numbers for a finished run, frozen at the moment of the crash.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Obstacles passed
    pub score: u32,
    /// Coins picked up
    pub coins: u32,
    /// Depth actually traveled
    pub distance: f32,
    /// Forward speed at the crash
    pub final_speed: f32,
}

/// Complete simulation state. [`tick`](super::tick::tick) is the only
/// mutator; the presentation layer reads snapshots.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub phase: RunPhase,
    pub player: PlayerState,
    pub obstacles: ObstacleField,
    pub coins: CoinField,
    /// Obstacles passed this run
    pub score: u32,
    /// Coins picked up this run
    pub coins_collected: u32,
    /// Simulation steps taken this run
    pub time_ticks: u64,
    /// Set when a run crashes; cleared on the next start
    pub final_stats: Option<RunStats>,
    pub tuning: Tuning,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Parked (idle) state with the default balance. The fields are laid out
    /// immediately so attract mode has something to show.
    pub fn new(seed: u64) -> Self {
        Self::new_unchecked(seed, Tuning::default())
    }

    /// Parked state with custom balance. Malformed tuning is rejected here,
    /// before the first step can run on it.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::new_unchecked(seed, tuning))
    }

    fn new_unchecked(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacles = ObstacleField::generate(&mut rng, &tuning);
        let coins = CoinField::generate(&mut rng, &tuning);
        Self {
            seed,
            phase: RunPhase::Idle,
            player: PlayerState::at_start(tuning.base_speed),
            obstacles,
            coins,
            score: 0,
            coins_collected: 0,
            time_ticks: 0,
            final_stats: None,
            tuning,
            rng,
        }
    }

    /// (Re)start a run: fresh player state, fresh randomized field layouts,
    /// zeroed counters. The RNG stream continues, so a fixed seed plus a
    /// fixed input sequence reproduces a whole session of runs.
    pub(crate) fn reset_run(&mut self) {
        self.player = PlayerState::at_start(self.tuning.base_speed);
        self.obstacles = ObstacleField::generate(&mut self.rng, &self.tuning);
        self.coins = CoinField::generate(&mut self.rng, &self.tuning);
        self.score = 0;
        self.coins_collected = 0;
        self.time_ticks = 0;
        self.final_stats = None;
        self.phase = RunPhase::Playing;
    }

    /// Host navigation back to the menu after a crash. Keeps the last run's
    /// stats around for the results screen.
    pub fn return_to_menu(&mut self) {
        self.phase = RunPhase::Idle;
    }
}
