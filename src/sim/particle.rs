//! Hit-burst visuals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::consts::*;

/// Short-lived decaying visual spawned at an enemy's struck rim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// 0xRRGGBB tint inherited from the struck enemy.
    pub color: u32,
    /// Fades linearly from 1.0; clamped at 0, where the particle dies.
    pub alpha: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, color: u32) -> Self {
        Self {
            pos,
            vel,
            radius: PARTICLE_RADIUS,
            color,
            alpha: 1.0,
        }
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.alpha <= 0.0
    }
}

impl Entity for Particle {
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
        self.alpha = (self.alpha - PARTICLE_FADE).max(0.0);
    }
}
