//! Recycled obstacle and coin fields
//!
//! Both fields are fixed-cardinality, index-addressed rings of plain value
//! records. Nothing is ever spawned or despawned mid-run: a record that has
//! fallen a margin behind the player teleports to one spacing beyond the
//! farthest record ahead, takes a fresh random placement, and clears its
//! latch. Record order is stable, so render instances can key by index.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{Coin, Obstacle};
use crate::tuning::Tuning;

/// The gated obstacle ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    records: Vec<Obstacle>,
}

/// What an obstacle-field advance observed in one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObstacleOutcome {
    /// Obstacles newly passed this step
    pub passed: u32,
    /// The player hit an obstacle body; record processing stopped there
    pub collided: bool,
}

impl ObstacleField {
    /// Lay out a fresh field: one row per spacing starting `spawn_lead`
    /// ahead of the player, gap centers drawn from the configured range.
    pub fn generate(rng: &mut Pcg32, t: &Tuning) -> Self {
        let records = (0..t.field_size)
            .map(|i| Obstacle {
                z: -t.spawn_lead - i as f32 * t.obstacle_spacing,
                gap_center: rng.random_range(t.gap_center_min..t.gap_center_max),
                passed: false,
            })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[Obstacle] {
        &self.records
    }

    #[cfg(test)]
    pub(crate) fn from_records(records: Vec<Obstacle>) -> Self {
        Self { records }
    }

    /// Advance the field against the player's position: recycle records the
    /// player has left behind, latch newly passed gaps, and test the body
    /// slab for a collision. A collision stops record processing for the
    /// step; nothing past it matters once the run is over.
    pub fn advance(
        &mut self,
        player_z: f32,
        player_y: f32,
        rng: &mut Pcg32,
        t: &Tuning,
    ) -> ObstacleOutcome {
        let mut outcome = ObstacleOutcome::default();

        for i in 0..self.records.len() {
            // Recycle once comfortably behind the player. The minimum is
            // taken over the current set, so burst recycles within one step
            // still land each record on its own row.
            if self.records[i].z > player_z + t.recycle_margin {
                let min_z = self.records.iter().map(|o| o.z).fold(player_z, f32::min);
                let rec = &mut self.records[i];
                rec.z = min_z - t.obstacle_spacing;
                rec.gap_center = rng.random_range(t.gap_center_min..t.gap_center_max);
                rec.passed = false;
            }

            let rec = &mut self.records[i];

            // Score exactly once when the player's depth crosses the plane.
            if !rec.passed && player_z < rec.z {
                rec.passed = true;
                outcome.passed += 1;
            }

            // Slab test against the gap edges while inside the body width.
            if (player_z - rec.z).abs() < t.obstacle_width / 2.0 + t.hit_radius {
                let gap_top = rec.gap_center + t.gap_size / 2.0;
                let gap_bottom = rec.gap_center - t.gap_size / 2.0;
                if player_y + t.hit_radius > gap_top || player_y - t.hit_radius < gap_bottom {
                    outcome.collided = true;
                    return outcome;
                }
            }
        }

        outcome
    }
}

/// The coin pickup ring. Same recycling shape as the obstacles, with a
/// randomized height and an axis-aligned pickup window instead of a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinField {
    records: Vec<Coin>,
}

impl CoinField {
    /// Coin rows sit half a spacing offset from the obstacle rows, so a coin
    /// is always collected between two gates rather than inside one.
    pub fn generate(rng: &mut Pcg32, t: &Tuning) -> Self {
        let records = (0..t.field_size)
            .map(|i| Coin {
                z: -t.spawn_lead - i as f32 * t.obstacle_spacing + t.obstacle_spacing / 2.0,
                y: rng.random_range(t.coin_y_min..t.coin_y_max),
                collected: false,
            })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[Coin] {
        &self.records
    }

    #[cfg(test)]
    pub(crate) fn from_records(records: Vec<Coin>) -> Self {
        Self { records }
    }

    /// Advance the field; returns how many coins were picked up this step.
    /// A collected coin stays inert until it recycles.
    pub fn advance(&mut self, player_z: f32, player_y: f32, rng: &mut Pcg32, t: &Tuning) -> u32 {
        let mut picked = 0;

        for i in 0..self.records.len() {
            if self.records[i].z > player_z + t.recycle_margin {
                let min_z = self.records.iter().map(|c| c.z).fold(player_z, f32::min);
                let rec = &mut self.records[i];
                rec.z = min_z - t.obstacle_spacing;
                rec.y = rng.random_range(t.coin_y_min..t.coin_y_max);
                rec.collected = false;
            }

            let rec = &mut self.records[i];
            if !rec.collected
                && (player_z - rec.z).abs() < t.pickup_radius_z
                && (player_y - rec.y).abs() < t.pickup_radius_y
            {
                rec.collected = true;
                picked += 1;
            }
        }

        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn rng(seed: u64) -> Pcg32 {
        Pcg32::seed_from_u64(seed)
    }

    #[test]
    fn test_generate_spaces_rows_evenly() {
        let t = Tuning::default();
        let field = ObstacleField::generate(&mut rng(1), &t);
        let records = field.records();
        assert_eq!(records.len(), t.field_size);
        assert_eq!(records[0].z, -t.spawn_lead);
        for pair in records.windows(2) {
            assert_eq!(pair[0].z - pair[1].z, t.obstacle_spacing);
        }
        for rec in records {
            assert!(rec.gap_center >= t.gap_center_min && rec.gap_center < t.gap_center_max);
            assert!(!rec.passed);
        }
    }

    #[test]
    fn test_recycle_places_record_one_spacing_past_minimum() {
        let t = Tuning::default();
        let mut rng = rng(2);
        let mut field = ObstacleField::generate(&mut rng, &t);
        let min_z = field.records().iter().map(|o| o.z).fold(f32::MAX, f32::min);

        // Walk the player far enough past the first row to trigger a recycle.
        let player_z = field.records()[0].z - t.recycle_margin - 0.1;
        field.advance(player_z, 0.0, &mut rng, &t);

        let recycled = field.records()[0];
        assert_eq!(recycled.z, min_z - t.obstacle_spacing);
        assert!(!recycled.passed);
    }

    #[test]
    fn test_pass_scores_exactly_once() {
        let t = Tuning::default();
        let mut rng = rng(3);
        let mut field = ObstacleField::from_records(vec![Obstacle {
            z: -40.0,
            gap_center: 0.0,
            passed: false,
        }]);

        let first = field.advance(-40.01, 0.0, &mut rng, &t);
        assert_eq!(first.passed, 1);
        assert!(!first.collided);

        // Still behind the plane on later steps: no more score.
        let second = field.advance(-41.0, 0.0, &mut rng, &t);
        assert_eq!(second.passed, 0);
    }

    #[test]
    fn test_collision_outside_gap_edges() {
        let t = Tuning::default();
        let mut rng = rng(4);
        let make = || {
            ObstacleField::from_records(vec![Obstacle {
                z: -40.0,
                gap_center: 0.0,
                passed: false,
            }])
        };

        // Centered in the gap: clean pass.
        let mut field = make();
        assert!(!field.advance(-40.0, 0.0, &mut rng, &t).collided);

        // Above the gap top (2.5 with a 0.4 hit radius): crash.
        let mut field = make();
        assert!(field.advance(-40.0, 2.2, &mut rng, &t).collided);

        // Below the gap bottom: crash.
        let mut field = make();
        assert!(field.advance(-40.0, -2.2, &mut rng, &t).collided);

        // Same heights outside the body slab: no contact at all.
        let mut field = make();
        assert!(!field.advance(-30.0, 2.2, &mut rng, &t).collided);
    }

    #[test]
    fn test_coin_collects_exactly_once_until_recycled() {
        let t = Tuning::default();
        let mut rng = rng(5);
        let mut field = CoinField::from_records(vec![Coin {
            z: -40.0,
            y: 0.0,
            collected: false,
        }]);

        assert_eq!(field.advance(-40.2, 0.2, &mut rng, &t), 1);
        assert_eq!(field.advance(-40.2, 0.2, &mut rng, &t), 0);

        // Move far past it so it recycles, which re-arms the latch.
        let player_z = -40.0 - t.recycle_margin - 60.1;
        assert_eq!(field.advance(player_z, 0.2, &mut rng, &t), 0);
        let rec = field.records()[0];
        assert!(!rec.collected);
        assert!(rec.z < player_z);
    }

    #[test]
    fn test_coin_outside_pickup_window_is_ignored() {
        let t = Tuning::default();
        let mut rng = rng(6);
        let mut field = CoinField::from_records(vec![Coin {
            z: -40.0,
            y: 0.0,
            collected: false,
        }]);
        assert_eq!(field.advance(-40.0, 1.5, &mut rng, &t), 0);
        assert_eq!(field.advance(-42.0, 0.0, &mut rng, &t), 0);
    }

    proptest! {
        // Records never crowd closer than one spacing, no matter how the
        // player advances or how many recycles land in a single step.
        #[test]
        fn prop_recycled_records_stay_spaced(
            seed in any::<u64>(),
            steps in vec(0.01f32..0.5, 1..150),
        ) {
            let t = Tuning::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut field = ObstacleField::generate(&mut rng, &t);
            let mut player_z = 0.0f32;

            for dt in steps {
                // Cover ground faster than any real run would.
                player_z -= t.max_speed * dt * 4.0;
                field.advance(player_z, 0.0, &mut rng, &t);

                let zs: Vec<f32> = field.records().iter().map(|o| o.z).collect();
                for i in 0..zs.len() {
                    for j in (i + 1)..zs.len() {
                        prop_assert!((zs[i] - zs[j]).abs() >= t.obstacle_spacing - 1e-3);
                    }
                }
            }
        }
    }
}
