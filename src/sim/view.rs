//! Derived render views
//!
//! The presentation layer never owns or mutates simulation records; it
//! consumes these per-index snapshots instead. Each view is recomputed on
//! demand from the records, so instance buffers can key by record index and
//! stay valid across recycles.

use glam::Vec3;

use super::state::{Coin, GameState, Obstacle, PlayerState};
use crate::tuning::Tuning;

/// World transforms for one obstacle: two pipe bodies flanking the gap,
/// each with a lip cap sitting just inside the gap edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleView {
    pub top_body: Vec3,
    pub top_cap: Vec3,
    pub bottom_body: Vec3,
    pub bottom_cap: Vec3,
}

/// Camera placement for the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub position: Vec3,
    /// Roll angle leaning into climbs and dives.
    pub roll: f32,
}

pub fn obstacle_view(ob: &Obstacle, t: &Tuning) -> ObstacleView {
    let gap_top = ob.gap_center + t.gap_size / 2.0;
    let gap_bottom = ob.gap_center - t.gap_size / 2.0;
    ObstacleView {
        top_body: Vec3::new(0.0, gap_top + t.obstacle_height / 2.0, ob.z),
        top_cap: Vec3::new(0.0, gap_top + 0.5, ob.z),
        bottom_body: Vec3::new(0.0, gap_bottom - t.obstacle_height / 2.0, ob.z),
        bottom_cap: Vec3::new(0.0, gap_bottom - 0.5, ob.z),
    }
}

/// Collected coins are parked far below the arena instead of despawning, so
/// instance indices stay stable for the whole run.
pub fn coin_view(coin: &Coin) -> Vec3 {
    if coin.collected {
        Vec3::new(0.0, -1000.0, 0.0)
    } else {
        Vec3::new(0.0, coin.y, coin.z)
    }
}

pub fn player_view(player: &PlayerState) -> PlayerView {
    PlayerView {
        position: Vec3::new(0.0, player.pos_y, player.pos_z),
        roll: -player.vel_y * 0.01,
    }
}

/// Snapshot every obstacle in record-index order.
pub fn obstacle_views(state: &GameState) -> Vec<ObstacleView> {
    state
        .obstacles
        .records()
        .iter()
        .map(|ob| obstacle_view(ob, &state.tuning))
        .collect()
}

/// Snapshot every coin in record-index order.
pub fn coin_views(state: &GameState) -> Vec<Vec3> {
    state.coins.records().iter().map(coin_view).collect()
}
