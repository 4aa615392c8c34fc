//! Inward-drifting hostiles.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::consts::*;

/// A hostile aimed at the player's position as of its spawn instant.
/// No homing after spawn: the velocity is fixed for its lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Collision radius; shrinks by the hitting projectile's radius.
    pub radius: f32,
    /// Render-facing radius, eased toward `radius` each tick so a hit
    /// shrinks the sprite smoothly while collision reacts instantly.
    pub display_radius: f32,
    /// Fraction of the remaining gap closed per tick.
    pub ease_rate: f32,
    /// 0xRRGGBB tint fixed at spawn.
    pub color: u32,
}

impl Enemy {
    /// `tint_mix` is the uniform draw in [0, 1) weighting the two
    /// reference tints; the caller owns the RNG.
    pub fn new(pos: Vec2, radius: f32, vel: Vec2, tint_mix: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            display_radius: radius,
            ease_rate: ENEMY_EASE_RATE,
            color: interpolate_tint(tint_mix),
        }
    }

    /// Take a hit from a projectile of the given radius. Returns true when
    /// the enemy is depleted (radius at or below the removal threshold).
    pub fn shrink_by(&mut self, amount: f32) -> bool {
        self.radius -= amount;
        self.radius <= ENEMY_KILL_RADIUS
    }
}

impl Entity for Enemy {
    fn position(&self) -> Vec2 {
        self.pos
    }
    fn velocity(&self) -> Vec2 {
        self.vel
    }
    fn radius(&self) -> f32 {
        self.radius
    }

    fn advance(&mut self) {
        self.pos += self.vel;
        self.display_radius += (self.radius - self.display_radius) * self.ease_rate;
    }
}

/// Channel-wise linear interpolation between the reference tints with
/// weights `p` on the high color and `1 - p` on the low color.
pub fn interpolate_tint(p: f32) -> u32 {
    let q = 1.0 - p;
    let (hr, hg, hb) = split_rgb(ENEMY_COLOR_HIGH);
    let (lr, lg, lb) = split_rgb(ENEMY_COLOR_LOW);
    let r = (hr as f32 * p + lr as f32 * q).round() as u32;
    let g = (hg as f32 * p + lg as f32 * q).round() as u32;
    let b = (hb as f32 * p + lb as f32 * q).round() as u32;
    (r << 16) | (g << 8) | b
}

fn split_rgb(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xff) as u8,
        ((color >> 8) & 0xff) as u8,
        (color & 0xff) as u8,
    )
}
