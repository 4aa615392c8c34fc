//! Proximity tests for the collision pass.
//!
//! Everything in the arena is a circle, so the whole pass reduces to one
//! predicate: two circles collide when the center distance minus both radii
//! goes strictly negative. Touching circles do not count.

use glam::Vec2;

/// Strict circle overlap test: `distance - r_a - r_b < 0`.
#[inline]
pub fn circles_overlap(a: Vec2, r_a: f32, b: Vec2, r_b: f32) -> bool {
    a.distance(b) - r_a - r_b < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_circles() {
        assert!(circles_overlap(
            Vec2::new(0.0, 0.0),
            10.0,
            Vec2::new(15.0, 0.0),
            10.0
        ));
    }

    #[test]
    fn test_separated_circles() {
        assert!(!circles_overlap(
            Vec2::new(0.0, 0.0),
            10.0,
            Vec2::new(25.0, 0.0),
            10.0
        ));
    }

    #[test]
    fn test_touching_is_not_overlap() {
        // distance == r_a + r_b: strictly-less-than means no hit
        assert!(!circles_overlap(
            Vec2::new(0.0, 0.0),
            10.0,
            Vec2::new(20.0, 0.0),
            10.0
        ));
    }

    #[test]
    fn test_player_loss_distance() {
        // Enemy radius 20 at 30px from a radius-30 player: 30 - 20 - 30 < 0
        assert!(circles_overlap(
            Vec2::new(400.0, 300.0),
            30.0,
            Vec2::new(430.0, 300.0),
            20.0
        ));
    }

    #[test]
    fn test_containment_is_overlap() {
        assert!(circles_overlap(
            Vec2::new(0.0, 0.0),
            30.0,
            Vec2::new(2.0, 1.0),
            3.0
        ));
    }
}
