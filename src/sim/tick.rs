//! Fixed timestep simulation tick
//!
//! Per tick: advance every live entity, prune what left the viewport or
//! burned out, run the collision pass, cascade trail cleanup, then apply
//! the spawn cadence. Population mutation is synchronous within the tick
//! that decides it.

use glam::Vec2;
use rand::Rng;

use super::collision::circles_overlap;
use super::entity::Entity;
use super::particle::Particle;
use super::shot::Shot;
use super::spawner::spawn_enemy;
use super::state::GameState;
use crate::consts::*;

/// What one tick produced, for the score/UI collaborators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Score gained this tick.
    pub score_delta: u64,
    /// Whether the run is in terminal state after this tick.
    pub ended: bool,
}

/// Advance the game state by one fixed timestep.
///
/// A no-op once terminal state is set; `reset` re-arms the loop.
pub fn tick(state: &mut GameState) -> TickSummary {
    if state.ended {
        return TickSummary {
            score_delta: 0,
            ended: true,
        };
    }
    state.elapsed_ticks += 1;
    let bounds = state.bounds;

    // Kinematics and pruning. Particles also die of alpha exhaustion.
    for particle in state.particles.iter_mut() {
        particle.advance();
    }
    state
        .particles
        .retain(|p| !p.expired() && !p.is_out_of_viewport(&bounds));

    for enemy in state.enemies.iter_mut() {
        enemy.advance();
    }
    state.enemies.retain(|e| !e.is_out_of_viewport(&bounds));

    for shot in state.shots.iter_mut() {
        shot.advance();
    }
    state.shots.retain(|s| !s.is_out_of_viewport(&bounds));

    let score_delta = resolve_collisions(state);

    // Spawn cadence: exactly one spawner invocation on the modulus tick,
    // including the tick that just entered terminal state.
    if state.elapsed_ticks % state.tuning.spawn_interval_ticks == 0 {
        let enemy = spawn_enemy(
            &mut state.rng,
            &state.bounds,
            state.player.pos,
            &state.tuning,
        );
        log::debug!(
            target: "shooter-enemy",
            "spawned enemy r={} ({} live)",
            enemy.radius,
            state.enemies.len() + 1
        );
        state.enemies.push(enemy);
    }

    TickSummary {
        score_delta,
        ended: state.ended,
    }
}

/// Detect and resolve enemy-player and projectile-enemy proximity.
///
/// Populations mutate during the pass, so the outer loop walks enemies by
/// index (the index does not advance past a removed enemy) and projectile
/// removal goes through a pending-id set: a projectile consumed by an
/// earlier enemy this tick can no longer hit a later one. Physical shot
/// removal and the trail sweep run after the loops.
fn resolve_collisions(state: &mut GameState) -> u64 {
    let mut score_delta = 0u64;
    let mut removed_ids: Vec<u32> = Vec::new();

    let player_pos = state.player.pos;
    let player_radius = state.player.radius;
    let hit_score = state.tuning.hit_score as f32;

    let mut i = 0;
    while i < state.enemies.len() {
        // Player-loss check: the first overlapping enemy ends the run and
        // stops the pass; enemies behind it in iteration order are not
        // processed this tick.
        {
            let enemy = &state.enemies[i];
            if circles_overlap(player_pos, player_radius, enemy.pos, enemy.radius) {
                state.end_game();
                break;
            }
        }

        let mut depleted = false;
        for shot_idx in 0..state.shots.len() {
            let Shot::Projectile(projectile) = &state.shots[shot_idx] else {
                continue;
            };
            if removed_ids.contains(&projectile.id) {
                continue;
            }
            let (projectile_id, projectile_pos, projectile_radius) =
                (projectile.id, projectile.pos, projectile.radius);

            // Hits test against the live radius, so earlier hits this tick
            // shrink the target for later ones.
            let enemy = &state.enemies[i];
            if !circles_overlap(projectile_pos, projectile_radius, enemy.pos, enemy.radius) {
                continue;
            }

            removed_ids.push(projectile_id);
            log::debug!(
                target: "shooter-projectile",
                "projectile {projectile_id} hit enemy ({} shots pending removal)",
                removed_ids.len()
            );
            score_delta += state.add_score(hit_score);

            // Burst at the pre-shrink rim. Every particle leaves from the
            // impact-facing rim point: the burst is a jittered cluster,
            // not a fan.
            let (burst_origin, burst_count, tint) = {
                let enemy = &state.enemies[i];
                let rim_angle =
                    (projectile_pos.y - enemy.pos.y).atan2(projectile_pos.x - enemy.pos.x);
                let origin =
                    enemy.pos + Vec2::new(rim_angle.cos(), rim_angle.sin()) * enemy.radius;
                let count = (enemy.radius * PARTICLES_PER_RADIUS).floor().max(0.0) as usize;
                (origin, count, enemy.color)
            };
            for _ in 0..burst_count {
                if state.particles.len() >= MAX_PARTICLES {
                    state.particles.remove(0);
                }
                let vel = Vec2::new(
                    (state.rng.random::<f32>() - 0.5) * (PARTICLE_JITTER * 2.0),
                    (state.rng.random::<f32>() - 0.5) * (PARTICLE_JITTER * 2.0),
                );
                state.particles.push(Particle::new(burst_origin, vel, tint));
            }
            log::debug!(
                target: "shooter-particle",
                "burst {burst_count} ({} live)",
                state.particles.len()
            );

            // Shrink and decide removal immediately after this hit; the
            // decision is not revisited, so later projectiles this tick
            // still resolve against the depleted enemy.
            let killed = state.enemies[i].shrink_by(projectile_radius);
            if killed {
                depleted = true;
            } else {
                // Radius-proportional bonus only when the enemy survives.
                score_delta += state.add_score(projectile_radius);
            }
        }

        if depleted {
            state.enemies.remove(i);
            log::debug!(
                target: "shooter-enemy",
                "enemy killed ({} live)",
                state.enemies.len()
            );
        } else {
            i += 1;
        }
    }

    // Cascading trail cleanup: one projectile's segments sit in one
    // contiguous block directly behind it, so a single inclusive index
    // range covers everything the removed ids own.
    if !removed_ids.is_empty() {
        state.shots.retain(|shot| match shot {
            Shot::Projectile(p) => !removed_ids.contains(&p.id),
            Shot::Trail(_) => true,
        });

        let mut start = None;
        let mut end = None;
        for (idx, shot) in state.shots.iter().enumerate() {
            if let Shot::Trail(trail) = shot {
                if removed_ids.contains(&trail.main_id) {
                    if start.is_none() {
                        start = Some(idx);
                    }
                    end = Some(idx);
                }
            }
        }
        if let (Some(start), Some(end)) = (start, end) {
            state.shots.drain(start..=end);
            log::debug!(target: "shooter-trail", "removed trail range [{start}:{end}]");
        }
    }

    score_delta
}
