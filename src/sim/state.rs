//! Game state and the validated spawn boundaries.
//!
//! Everything a run needs to be reproduced lives here and serializes,
//! RNG included.

use std::fmt;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::entity::Bounds;
use super::particle::Particle;
use super::shot::{Projectile, Shot};
use crate::consts::*;
use crate::tuning::Tuning;

/// The player: a fixed circle recentered only on viewport resize.
///
/// `damage` and `health` are carried in the data model, but the collision
/// rule never consults them: any enemy overlap is an immediate loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub damage: u32,
    pub health: u32,
    /// 0xRRGGBB tint.
    pub color: u32,
}

/// Precondition violation at a spawn boundary. These are programmer
/// errors, rejected here so they never reach the tick loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// Radius must be a positive finite number.
    InvalidRadius,
    /// Velocity components must be finite.
    InvalidVelocity,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::InvalidRadius => write!(f, "spawn radius must be positive and finite"),
            SpawnError::InvalidVelocity => write!(f, "spawn velocity must be finite"),
        }
    }
}

impl std::error::Error for SpawnError {}

/// Handle for a spawn request: the projectile id plus the number of trail
/// segments appended directly after it in the shot population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireReceipt {
    pub id: u32,
    pub trail_segments: usize,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng: Pcg32,
    /// Simulation tick counter. Survives `reset`.
    pub elapsed_ticks: u64,
    /// Terminal flag; set at most once per run, cleared by `reset`.
    pub ended: bool,
    /// Play area rectangle
    pub bounds: Bounds,
    pub player: Player,
    /// Projectiles and their trail segments, insertion-ordered: each
    /// projectile is directly followed by its own contiguous segments.
    pub shots: Vec<Shot>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    /// Monotonic, integer-rounded accumulator
    pub score: u64,
    /// Balance knobs
    pub tuning: Tuning,
    /// Next projectile id; never reused within a run
    next_id: u32,
}

impl GameState {
    pub fn new(seed: u64, bounds: Bounds) -> Self {
        Self::with_tuning(seed, bounds, Tuning::default())
    }

    pub fn with_tuning(seed: u64, bounds: Bounds, tuning: Tuning) -> Self {
        let player = Player {
            pos: bounds.center(),
            radius: tuning.player_radius,
            damage: tuning.player_damage,
            health: tuning.player_health,
            color: PLAYER_COLOR,
        };
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            elapsed_ticks: 0,
            ended: false,
            bounds,
            player,
            shots: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            score: 0,
            tuning,
            next_id: 0,
        }
    }

    /// Allocate a projectile id (first id is 1).
    fn next_shot_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Integer-rounded score addition; returns the rounded delta.
    pub fn add_score(&mut self, points: f32) -> u64 {
        let delta = points.round() as u64;
        self.score += delta;
        delta
    }

    /// Aim event: fire one projectile from the player toward `point`,
    /// with a randomized radius and a fixed speed. Ignored entirely while
    /// in terminal state.
    pub fn fire_at(&mut self, point: Vec2) -> Option<FireReceipt> {
        if self.ended {
            return None;
        }
        let diff = point - self.player.pos;
        let angle = diff.y.atan2(diff.x);
        log::debug!(
            target: "shooter-pointer",
            "fire angle={angle:.3} dx={} dy={}",
            diff.x,
            diff.y
        );

        let radius = self.tuning.projectile_min_radius
            + self.rng.random::<f32>() * self.tuning.projectile_radius_spread;
        let speed = self.tuning.projectile_speed;
        let vel = Vec2::new(angle.cos() * speed, angle.sin() * speed);

        // Inputs computed above always satisfy the spawn preconditions.
        self.spawn_projectile(self.player.pos, radius, vel).ok()
    }

    /// Validated spawn boundary: push the projectile plus its trail chain,
    /// all pre-positioned at `origin`. Non-positive or non-finite radius
    /// and non-finite velocity are rejected here rather than propagated
    /// into the tick loop.
    pub fn spawn_projectile(
        &mut self,
        origin: Vec2,
        radius: f32,
        vel: Vec2,
    ) -> Result<FireReceipt, SpawnError> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(SpawnError::InvalidRadius);
        }
        if !vel.x.is_finite() || !vel.y.is_finite() {
            return Err(SpawnError::InvalidVelocity);
        }

        let id = self.next_shot_id();
        let projectile = Projectile::new(id, origin, radius, vel);
        let trail = projectile.build_trail();
        let trail_segments = trail.len();
        self.shots.push(Shot::Projectile(projectile));
        self.shots.extend(trail.into_iter().map(Shot::Trail));
        log::debug!(
            target: "shooter-projectile",
            "added projectile {id} +{trail_segments} trail ({} shots)",
            self.shots.len()
        );
        Ok(FireReceipt { id, trail_segments })
    }

    /// Restart: clear the transient populations, the score, and the
    /// terminal flag. The tick and id counters keep running so ids are
    /// never reused within a run.
    pub fn reset(&mut self) {
        self.shots.clear();
        self.enemies.clear();
        self.particles.clear();
        self.score = 0;
        self.ended = false;
        log::info!("game restarted");
    }

    /// Viewport change: recenter the player and swap the bounds.
    /// In-flight entities are left untouched.
    pub fn resize(&mut self, bounds: Bounds) {
        log::debug!(
            target: "shooter-layout",
            "resize {}x{} -> {}x{}",
            self.bounds.width(),
            self.bounds.height(),
            bounds.width(),
            bounds.height()
        );
        self.bounds = bounds;
        self.player.pos = bounds.center();
    }

    /// Enter terminal state. Idempotent: a second call is not an error.
    pub fn end_game(&mut self) {
        if !self.ended {
            self.ended = true;
            log::info!("game over, final score {}", self.score);
        }
    }
}
