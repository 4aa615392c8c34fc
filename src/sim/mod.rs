//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable population order (insertion order, monotonic ids)
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod entity;
pub mod particle;
pub mod shot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::circles_overlap;
pub use enemy::Enemy;
pub use entity::{Bounds, Entity};
pub use particle::Particle;
pub use shot::{Projectile, Shot, TrailSegment};
pub use spawner::spawn_enemy;
pub use state::{FireReceipt, GameState, Player, SpawnError};
pub use tick::{TickSummary, tick};
