//! Projectiles and their cosmetic trail segments.
//!
//! Both kinds share one population so that removal can work on insertion
//! order: a projectile is pushed first and its segments immediately after,
//! giving each projectile one contiguous block that the trail sweep in the
//! tick pass drains by index range.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Bounds, Entity};
use crate::consts::*;

/// A player-fired shot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Unique within a run; ids are never reused.
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// 0xRRGGBB tint.
    pub color: u32,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2, radius: f32, vel: Vec2) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            color: PROJECTILE_COLOR,
        }
    }

    /// Build the follower chain: `floor(radius) * 3` segments, shrinking
    /// and fading toward the tail. Segments near the head ease loosely
    /// (0.5); the tail is nearly rigid (0.01).
    pub fn build_trail(&self) -> Vec<TrailSegment> {
        let count = (self.radius.floor() as usize) * TRAIL_SEGMENTS_PER_RADIUS;
        (0..count)
            .map(|i| {
                let t = i as f32 / count as f32;
                TrailSegment {
                    main_id: self.id,
                    main_pos: self.pos,
                    pos: self.pos,
                    vel: self.vel,
                    radius: self.radius - (self.radius - 1.0) * t,
                    ease: TRAIL_EASE_HEAD - (TRAIL_EASE_HEAD - TRAIL_EASE_TAIL) * t,
                    min_delta: TRAIL_MIN_DELTA,
                    alpha: TRAIL_ALPHA_BASE - TRAIL_ALPHA_FALLOFF * (i + 1) as f32 / count as f32,
                }
            })
            .collect()
    }
}

impl Entity for Projectile {
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
    }
}

/// A cosmetic follower lagging behind its owning projectile.
///
/// Each segment tracks a shadow of the owner's position (`main_pos`),
/// advanced by the owner's velocity every tick, and eases its own rendered
/// position toward that shadow. The lag chain falls out of the per-segment
/// easing factors without storing any positional history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailSegment {
    /// Owning projectile id; lifecycle is bound to it.
    pub main_id: u32,
    /// Shadow of the owner's position.
    pub main_pos: Vec2,
    pub pos: Vec2,
    /// Copy of the owner's (constant) velocity.
    pub vel: Vec2,
    pub radius: f32,
    /// Per-axis easing factor toward the shadow position.
    pub ease: f32,
    /// At or below this gap the segment snaps onto the shadow exactly.
    pub min_delta: f32,
    pub alpha: f32,
}

impl Entity for TrailSegment {
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
        self.main_pos += self.vel;

        // Per axis: close a fraction of the gap, signed by the owner's
        // velocity on that axis, or snap when the gap is small enough.
        let dx = (self.pos.x - self.main_pos.x).abs();
        if dx > self.min_delta {
            self.pos.x += if self.vel.x > 0.0 {
                dx * self.ease
            } else {
                -dx * self.ease
            };
        } else {
            self.pos.x = self.main_pos.x;
        }

        let dy = (self.pos.y - self.main_pos.y).abs();
        if dy > self.min_delta {
            self.pos.y += if self.vel.y > 0.0 {
                dy * self.ease
            } else {
                -dy * self.ease
            };
        } else {
            self.pos.y = self.main_pos.y;
        }
    }
}

/// One element of the shot population, discriminated explicitly rather
/// than through a flag on a shared shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shot {
    Projectile(Projectile),
    Trail(TrailSegment),
}

impl Shot {
    pub fn advance(&mut self) {
        match self {
            Shot::Projectile(p) => p.advance(),
            Shot::Trail(t) => t.advance(),
        }
    }

    pub fn is_out_of_viewport(&self, bounds: &Bounds) -> bool {
        match self {
            Shot::Projectile(p) => p.is_out_of_viewport(bounds),
            Shot::Trail(t) => t.is_out_of_viewport(bounds),
        }
    }

    pub fn as_projectile(&self) -> Option<&Projectile> {
        match self {
            Shot::Projectile(p) => Some(p),
            Shot::Trail(_) => None,
        }
    }

    pub fn as_trail(&self) -> Option<&TrailSegment> {
        match self {
            Shot::Trail(t) => Some(t),
            Shot::Projectile(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projectile(radius: f32) -> Projectile {
        Projectile::new(1, Vec2::new(400.0, 300.0), radius, Vec2::new(20.0, 0.0))
    }

    #[test]
    fn test_trail_length_is_floor_radius_times_three() {
        assert_eq!(projectile(10.0).build_trail().len(), 30);
        assert_eq!(projectile(7.3).build_trail().len(), 21);
        assert_eq!(projectile(5.999).build_trail().len(), 15);
    }

    #[test]
    fn test_trail_starts_at_owner_position() {
        let p = projectile(6.0);
        for segment in p.build_trail() {
            assert_eq!(segment.pos, p.pos);
            assert_eq!(segment.main_pos, p.pos);
            assert_eq!(segment.main_id, p.id);
        }
    }

    #[test]
    fn test_trail_shrinks_and_fades_toward_tail() {
        let p = projectile(8.0);
        let trail = p.build_trail();
        let n = trail.len() as f32;

        // Head segment: full radius, loose easing
        assert_eq!(trail[0].radius, 8.0);
        assert_eq!(trail[0].ease, TRAIL_EASE_HEAD);
        assert!((trail[0].alpha - (0.9 - 0.8 / n)).abs() < 1e-6);

        // Monotone decay along the chain
        for pair in trail.windows(2) {
            assert!(pair[1].radius < pair[0].radius);
            assert!(pair[1].ease < pair[0].ease);
            assert!(pair[1].alpha < pair[0].alpha);
        }

        let tail = trail.last().unwrap();
        assert!(tail.radius > 1.0);
        assert!(tail.ease > TRAIL_EASE_TAIL - 1e-6);
    }

    #[test]
    fn test_segment_eases_toward_shadow() {
        let p = projectile(6.0);
        let mut segment = p.build_trail().into_iter().next().unwrap();
        segment.advance();
        // Shadow moved a full step; the segment closed only a fraction
        assert_eq!(segment.main_pos.x, 420.0);
        assert!(segment.pos.x > 400.0 && segment.pos.x < 420.0);
        // No vertical velocity: gap stays zero, so y snaps to the shadow
        assert_eq!(segment.pos.y, segment.main_pos.y);
    }

    #[test]
    fn test_segment_snaps_within_min_delta() {
        let p = projectile(6.0);
        let mut segment = p.build_trail().into_iter().next().unwrap();
        segment.vel = Vec2::new(0.04, 0.0);
        segment.advance();
        // Gap 0.04 <= 0.05: exact snap, no easing drift
        assert_eq!(segment.pos.x, segment.main_pos.x);
    }

    #[test]
    fn test_segment_eases_in_velocity_sign() {
        let p = Projectile::new(1, Vec2::new(400.0, 300.0), 6.0, Vec2::new(-20.0, 0.0));
        let mut segment = p.build_trail().into_iter().next().unwrap();
        segment.advance();
        assert_eq!(segment.main_pos.x, 380.0);
        // Negative owner velocity: the segment moves left
        assert!(segment.pos.x < 400.0);
    }

    #[test]
    fn test_shot_discriminants() {
        let p = projectile(6.0);
        let trail = p.build_trail().into_iter().next().unwrap();
        let shot = Shot::Projectile(p);
        assert!(shot.as_projectile().is_some());
        assert!(shot.as_trail().is_none());
        let shot = Shot::Trail(trail);
        assert!(shot.as_projectile().is_none());
        assert!(shot.as_trail().is_some());
    }
}
