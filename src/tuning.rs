//! Data-driven game balance
//!
//! Every numeric knob the simulation consumes lives in [`Tuning`]. Defaults
//! match the shipped balance; hosts may deserialize partial overrides from
//! JSON. Malformed values are rejected up front by [`Tuning::validate`] so
//! the per-step code never has to defend against them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A tuning value that cannot produce a playable game.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("field cardinality must be at least 1")]
    ZeroFieldSize,
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: f32 },
    #[error("max speed {max} is below base speed {base}")]
    SpeedCapBelowBase { base: f32, max: f32 },
    #[error("vertical bounds are inverted (floor {floor}, ceiling {ceiling})")]
    InvertedBounds { floor: f32, ceiling: f32 },
    #[error("{name} range is empty ({min}..{max})")]
    EmptyRange { name: &'static str, min: f32, max: f32 },
}

/// Numeric game balance. All distances are world units, speeds are units per
/// second, and depth increases toward the player (travel is along -z).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration on the player.
    pub gravity: f32,
    /// Vertical velocity set (not added) by a flap.
    pub jump_impulse: f32,
    /// Forward speed at the start of a run.
    pub base_speed: f32,
    /// Forward speed cap.
    pub max_speed: f32,
    /// Forward speed gained per scored obstacle.
    pub speed_increment: f32,
    /// Depth between consecutive obstacle rows (and coin rows).
    pub obstacle_spacing: f32,
    /// Vertical opening in each obstacle.
    pub gap_size: f32,
    /// Obstacle body diameter along the travel axis.
    pub obstacle_width: f32,
    /// Length of each pipe body, used by the render views.
    pub obstacle_height: f32,
    /// Number of records in each recycled field.
    pub field_size: usize,
    /// Player collision radius.
    pub hit_radius: f32,
    /// Coin pickup window along the travel axis.
    pub pickup_radius_z: f32,
    /// Coin pickup window along the vertical axis.
    pub pickup_radius_y: f32,
    /// Hard ceiling; flying above it ends the run.
    pub ceiling_y: f32,
    /// Hard floor; falling below it ends the run.
    pub floor_y: f32,
    /// Gap centers are drawn uniformly from this range.
    pub gap_center_min: f32,
    pub gap_center_max: f32,
    /// Coin heights are drawn uniformly from this range.
    pub coin_y_min: f32,
    pub coin_y_max: f32,
    /// How far behind the player a record must fall before it recycles.
    pub recycle_margin: f32,
    /// Depth of the first obstacle row ahead of the start position.
    pub spawn_lead: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 25.0,
            jump_impulse: 9.0,
            base_speed: 12.0,
            max_speed: 25.0,
            speed_increment: 0.2,
            obstacle_spacing: 20.0,
            gap_size: 5.0,
            obstacle_width: 3.5,
            obstacle_height: 20.0,
            field_size: 8,
            hit_radius: 0.4,
            pickup_radius_z: 1.0,
            pickup_radius_y: 1.0,
            ceiling_y: 15.0,
            floor_y: -8.0,
            gap_center_min: -2.0,
            gap_center_max: 6.0,
            coin_y_min: -3.0,
            coin_y_max: 3.0,
            recycle_margin: 20.0,
            spawn_lead: 40.0,
        }
    }
}

impl Tuning {
    /// Reject values the simulation cannot run on. Called once at state
    /// construction; per-step code assumes a validated tuning.
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(name: &'static str, value: f32) -> Result<(), TuningError> {
            if value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::NonPositive { name, value })
            }
        }
        fn non_negative(name: &'static str, value: f32) -> Result<(), TuningError> {
            if value >= 0.0 {
                Ok(())
            } else {
                Err(TuningError::Negative { name, value })
            }
        }

        if self.field_size == 0 {
            return Err(TuningError::ZeroFieldSize);
        }
        positive("gravity", self.gravity)?;
        positive("jump_impulse", self.jump_impulse)?;
        positive("base_speed", self.base_speed)?;
        positive("obstacle_spacing", self.obstacle_spacing)?;
        positive("gap_size", self.gap_size)?;
        positive("obstacle_width", self.obstacle_width)?;
        positive("obstacle_height", self.obstacle_height)?;
        positive("pickup_radius_z", self.pickup_radius_z)?;
        positive("pickup_radius_y", self.pickup_radius_y)?;
        positive("recycle_margin", self.recycle_margin)?;
        positive("spawn_lead", self.spawn_lead)?;
        non_negative("hit_radius", self.hit_radius)?;
        non_negative("speed_increment", self.speed_increment)?;
        if self.max_speed < self.base_speed {
            return Err(TuningError::SpeedCapBelowBase {
                base: self.base_speed,
                max: self.max_speed,
            });
        }
        if self.floor_y >= self.ceiling_y {
            return Err(TuningError::InvertedBounds {
                floor: self.floor_y,
                ceiling: self.ceiling_y,
            });
        }
        if self.gap_center_min >= self.gap_center_max {
            return Err(TuningError::EmptyRange {
                name: "gap_center",
                min: self.gap_center_min,
                max: self.gap_center_max,
            });
        }
        if self.coin_y_min >= self.coin_y_max {
            return Err(TuningError::EmptyRange {
                name: "coin_y",
                min: self.coin_y_min,
                max: self.coin_y_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_field_size() {
        let t = Tuning {
            field_size: 0,
            ..Tuning::default()
        };
        assert_eq!(t.validate(), Err(TuningError::ZeroFieldSize));
    }

    #[test]
    fn test_rejects_negative_spacing() {
        let t = Tuning {
            obstacle_spacing: -5.0,
            ..Tuning::default()
        };
        assert_eq!(
            t.validate(),
            Err(TuningError::NonPositive {
                name: "obstacle_spacing",
                value: -5.0,
            })
        );
    }

    #[test]
    fn test_rejects_speed_cap_below_base() {
        let t = Tuning {
            base_speed: 12.0,
            max_speed: 10.0,
            ..Tuning::default()
        };
        assert!(matches!(
            t.validate(),
            Err(TuningError::SpeedCapBelowBase { .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let t = Tuning {
            floor_y: 20.0,
            ceiling_y: 15.0,
            ..Tuning::default()
        };
        assert!(matches!(t.validate(), Err(TuningError::InvertedBounds { .. })));
    }

    #[test]
    fn test_rejects_empty_gap_center_range() {
        let t = Tuning {
            gap_center_min: 6.0,
            gap_center_max: -2.0,
            ..Tuning::default()
        };
        assert!(matches!(
            t.validate(),
            Err(TuningError::EmptyRange { name: "gap_center", .. })
        ));
    }

    #[test]
    fn test_partial_json_override_keeps_defaults() {
        let t: Tuning = serde_json::from_str(r#"{ "gravity": 30.0 }"#).unwrap();
        assert_eq!(t.gravity, 30.0);
        assert_eq!(t.field_size, Tuning::default().field_size);
        assert!(t.validate().is_ok());
    }
}
