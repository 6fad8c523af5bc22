//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable record order (fields are index-addressed rings)
//! - No rendering or platform dependencies
//!
//! The host drives it with one [`tick`] per rendered frame and reacts to the
//! returned [`GameEvent`]s; everything else is plain data it may snapshot.

pub mod field;
pub mod kinematics;
pub mod state;
pub mod tick;
pub mod view;

pub use field::{CoinField, ObstacleField, ObstacleOutcome};
pub use kinematics::integrate;
pub use state::{
    Coin, CrashCause, GameEvent, GameState, Obstacle, PlayerState, RunPhase, RunStats,
};
pub use tick::{TickInput, tick};
pub use view::{ObstacleView, PlayerView, coin_view, coin_views, obstacle_view, obstacle_views, player_view};
