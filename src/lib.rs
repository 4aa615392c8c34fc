//! Epicenter - simulation core for a top-down arcade shooter
//!
//! The player sits at the viewport center, enemies drift inward from
//! off-screen edges, and taps fire projectiles that trail cosmetic
//! follower segments. Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Session leaderboard
//!
//! Rendering, screen layout, and input capture are external collaborators;
//! they talk to the sim only through its spawn/fire/tick/reset/resize
//! boundary.

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Ticks between spawner invocations (one enemy per second at 60 Hz)
    pub const SPAWN_INTERVAL_TICKS: u64 = 60;

    /// Player defaults - fixed circle at the viewport center
    pub const PLAYER_RADIUS: f32 = 30.0;
    pub const PLAYER_DAMAGE: u32 = 20;
    pub const PLAYER_HEALTH: u32 = 100;
    pub const PLAYER_COLOR: u32 = 0xffffff;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 20.0;
    /// Fired radius is uniform in [min, min + spread)
    pub const PROJECTILE_MIN_RADIUS: f32 = 5.0;
    pub const PROJECTILE_RADIUS_SPREAD: f32 = 15.0;
    pub const PROJECTILE_COLOR: u32 = 0xffffff;

    /// Trail segments per whole unit of projectile radius
    pub const TRAIL_SEGMENTS_PER_RADIUS: usize = 3;
    /// Easing factor at the head (loose) and tail (nearly rigid) of a trail
    pub const TRAIL_EASE_HEAD: f32 = 0.5;
    pub const TRAIL_EASE_TAIL: f32 = 0.01;
    /// Below this gap a trail segment snaps onto its shadow position
    pub const TRAIL_MIN_DELTA: f32 = 0.05;
    pub const TRAIL_ALPHA_BASE: f32 = 0.9;
    pub const TRAIL_ALPHA_FALLOFF: f32 = 0.8;

    /// Enemy defaults
    pub const ENEMY_MIN_RADIUS: u32 = 15;
    pub const ENEMY_MAX_RADIUS: u32 = 30;
    pub const ENEMY_MIN_SPEED: f32 = 1.0;
    pub const ENEMY_MAX_SPEED: f32 = 3.0;
    /// At or below this radius an enemy is removed, never rendered
    pub const ENEMY_KILL_RADIUS: f32 = 5.0;
    /// Reference tints for the spawn-time interpolation
    pub const ENEMY_COLOR_LOW: u32 = 0xff0000;
    pub const ENEMY_COLOR_HIGH: u32 = 0x00ff00;
    /// Per-tick easing of the display radius toward the collision radius
    pub const ENEMY_EASE_RATE: f32 = 0.2;

    /// Hit-burst particle defaults
    pub const PARTICLE_RADIUS: f32 = 2.0;
    /// Linear alpha decay per tick
    pub const PARTICLE_FADE: f32 = 0.01;
    /// Burst velocity is uniform in (-jitter, jitter) per axis
    pub const PARTICLE_JITTER: f32 = 5.0;
    /// Burst particles per unit of struck-enemy radius
    pub const PARTICLES_PER_RADIUS: f32 = 3.0;
    /// Particle population cap; the oldest particle is evicted first
    pub const MAX_PARTICLES: usize = 2000;

    /// Flat score for any projectile hit
    pub const HIT_SCORE: u64 = 100;
}

/// Velocity vector of magnitude `speed` aimed from `from` toward `to`.
#[inline]
pub fn aim_velocity(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    Vec2::new(angle.cos() * speed, angle.sin() * speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aim_velocity_axis_aligned() {
        let v = aim_velocity(Vec2::new(400.0, 300.0), Vec2::new(500.0, 300.0), 20.0);
        assert_eq!(v.x, 20.0);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn test_aim_velocity_magnitude() {
        let v = aim_velocity(Vec2::new(0.0, 0.0), Vec2::new(-3.0, 4.0), 2.5);
        assert!((v.length() - 2.5).abs() < 1e-5);
        // Points toward the target
        assert!(v.x < 0.0 && v.y > 0.0);
    }
}
