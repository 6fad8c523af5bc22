//! Headless demo runner
//!
//! Plays a seeded run with a simple gap-seeking autopilot and logs the
//! event stream. Handy for eyeballing balance changes without a frontend:
//!
//! ```text
//! RUST_LOG=debug sky-plumber --seed 7 --tuning balance.json
//! ```

use std::error::Error;

use log::info;

use sky_plumber::consts::FRAME_DT;
use sky_plumber::sim::{GameEvent, GameState, RunPhase, TickInput, tick};
use sky_plumber::tuning::Tuning;

/// Two minutes at the demo cadence; the autopilot is good enough that a run
/// may otherwise never end.
const MAX_DEMO_TICKS: u64 = 2 * 60 * 60;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut seed = 42u64;
    let mut tuning = Tuning::default();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                seed = args.next().ok_or("--seed needs a value")?.parse()?;
            }
            "--tuning" => {
                let path = args.next().ok_or("--tuning needs a path")?;
                tuning = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
            }
            other => return Err(format!("unknown argument: {other}").into()),
        }
    }

    let mut state = GameState::with_tuning(seed, tuning)?;
    tick(&mut state, &TickInput { flap: false, start: true }, FRAME_DT);

    while state.phase == RunPhase::Playing && state.time_ticks < MAX_DEMO_TICKS {
        let input = TickInput {
            flap: autopilot(&state),
            start: false,
        };
        for event in tick(&mut state, &input, FRAME_DT) {
            match event {
                GameEvent::Score => info!("score! total {}", state.score),
                GameEvent::Coin => info!("coin! total {}", state.coins_collected),
                GameEvent::Crash(cause) => info!("crashed: {cause:?}"),
            }
        }
    }

    match state.final_stats {
        Some(stats) => println!(
            "seed {seed}: score {}, coins {}, distance {:.1}, final speed {:.1}",
            stats.score, stats.coins, stats.distance, stats.final_speed
        ),
        None => println!(
            "seed {seed}: still flying after {} steps (score {}, coins {})",
            state.time_ticks, state.score, state.coins_collected
        ),
    }
    Ok(())
}

/// Flap whenever the player is sinking below the next gap center.
fn autopilot(state: &GameState) -> bool {
    let target = state
        .obstacles
        .records()
        .iter()
        .filter(|ob| ob.z < state.player.pos_z)
        .max_by(|a, b| a.z.total_cmp(&b.z))
        .map(|ob| ob.gap_center)
        .unwrap_or(0.0);
    state.player.pos_y < target && state.player.vel_y < 0.0
}
