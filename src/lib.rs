//! Sky Plumber - endless-runner flight game, simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, obstacle/coin fields, run state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, menus and account plumbing belong to the host application; the
//! crate talks to them through `sim::TickInput` going in and `sim::GameEvent`
//! coming back out of each step.

pub mod sim;
pub mod tuning;

pub use sim::{GameEvent, GameState, TickInput, tick};
pub use tuning::{Tuning, TuningError};

/// Game loop constants
pub mod consts {
    /// Step cadence the demo binary and the tests run at (display refresh).
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Clamp for wall-clock frame deltas. A backgrounded tab otherwise
    /// teleports the player through whole obstacle rows on resume.
    pub const MAX_FRAME_DT: f32 = 0.1;
}
