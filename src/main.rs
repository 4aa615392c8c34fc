//! Epicenter entry point
//!
//! Headless demo loop: seeds a deterministic run, autoplays by firing at
//! the nearest live enemy on a fixed cadence, and logs the outcome. The
//! rendering surface is an external collaborator; this binary exercises
//! the sim boundary on its own.

use glam::Vec2;

use epicenter::HighScores;
use epicenter::sim::{Bounds, GameState, tick};

/// Fire cadence for the autoplayer, in ticks.
const AUTOFIRE_INTERVAL: u64 = 30;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    let max_ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3600);

    log::info!("epicenter demo starting (seed {seed}, up to {max_ticks} ticks)");

    let mut state = GameState::new(seed, Bounds::from_size(800.0, 600.0));
    let mut scores = HighScores::new();

    for _ in 0..max_ticks {
        if state.elapsed_ticks % AUTOFIRE_INTERVAL == 0 {
            if let Some(target) = nearest_enemy(&state) {
                state.fire_at(target);
            }
        }
        let summary = tick(&mut state);
        if summary.score_delta > 0 {
            log::debug!(target: "shooter-score", "+{} -> {}", summary.score_delta, state.score);
        }
        if summary.ended {
            break;
        }
    }

    scores.record(state.score, state.elapsed_ticks);
    if state.ended {
        log::info!(
            "run over: score {} after {} ticks",
            state.score,
            state.elapsed_ticks
        );
    } else {
        log::info!(
            "demo stopped at tick {} with score {}",
            state.elapsed_ticks,
            state.score
        );
    }
    if let Some(best) = scores.best() {
        println!(
            "seed {seed}: score {} over {} ticks",
            best.score, best.ticks
        );
    }
}

/// Aim point for the autoplayer: the enemy closest to the player.
fn nearest_enemy(state: &GameState) -> Option<Vec2> {
    let player = state.player.pos;
    state
        .enemies
        .iter()
        .min_by(|a, b| {
            a.pos
                .distance_squared(player)
                .partial_cmp(&b.pos.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|e| e.pos)
}
