//! Data-driven game balance.
//!
//! Every knob a designer would reach for, with serde round-trip support so
//! a scene can load balance tweaks from JSON without a rebuild. Defaults
//! come from the named constants in `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance knobs consumed by the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Ticks between spawner invocations.
    pub spawn_interval_ticks: u64,

    // === Player ===
    pub player_radius: f32,
    pub player_damage: u32,
    pub player_health: u32,

    // === Projectiles ===
    pub projectile_speed: f32,
    /// Fired radius is uniform in [min, min + spread).
    pub projectile_min_radius: f32,
    pub projectile_radius_spread: f32,

    // === Enemies ===
    /// Spawned radius is a uniform integer in [min, max].
    pub enemy_min_radius: u32,
    pub enemy_max_radius: u32,
    /// Spawned speed is uniform in [min, max].
    pub enemy_min_speed: f32,
    pub enemy_max_speed: f32,

    // === Scoring ===
    /// Flat score for any projectile hit; the surviving-enemy bonus is
    /// the projectile radius, rounded.
    pub hit_score: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            player_radius: PLAYER_RADIUS,
            player_damage: PLAYER_DAMAGE,
            player_health: PLAYER_HEALTH,
            projectile_speed: PROJECTILE_SPEED,
            projectile_min_radius: PROJECTILE_MIN_RADIUS,
            projectile_radius_spread: PROJECTILE_RADIUS_SPREAD,
            enemy_min_radius: ENEMY_MIN_RADIUS,
            enemy_max_radius: ENEMY_MAX_RADIUS,
            enemy_min_speed: ENEMY_MIN_SPEED,
            enemy_max_speed: ENEMY_MAX_SPEED,
            hit_score: HIT_SCORE,
        }
    }
}

impl Tuning {
    /// Parse from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
