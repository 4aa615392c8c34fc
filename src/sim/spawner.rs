//! Periodic off-screen enemy generation.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::enemy::Enemy;
use super::entity::Bounds;
use crate::aim_velocity;
use crate::tuning::Tuning;

/// Produce one enemy just outside a uniformly chosen edge of the play
/// area, aimed at the player's current position.
///
/// The spawn point is offset outward by the enemy's own radius so it
/// enters the viewport on its first few ticks instead of popping in.
pub fn spawn_enemy(rng: &mut Pcg32, bounds: &Bounds, player_pos: Vec2, tuning: &Tuning) -> Enemy {
    let radius = rng.random_range(tuning.enemy_min_radius..=tuning.enemy_max_radius) as f32;

    let width = bounds.width();
    let height = bounds.height();
    let pos = match rng.random_range(0u8..4) {
        // right
        0 => Vec2::new(bounds.right + radius, bounds.top + rng.random::<f32>() * height),
        // top
        1 => Vec2::new(bounds.left + rng.random::<f32>() * width, bounds.top - radius),
        // left
        2 => Vec2::new(bounds.left - radius, bounds.top + rng.random::<f32>() * height),
        // bottom
        _ => Vec2::new(
            bounds.left + rng.random::<f32>() * width,
            bounds.bottom + radius,
        ),
    };

    let speed = rng.random_range(tuning.enemy_min_speed..=tuning.enemy_max_speed);
    let vel = aim_velocity(pos, player_pos, speed);
    let tint_mix = rng.random::<f32>();

    Enemy::new(pos, radius, vel, tint_mix)
}
