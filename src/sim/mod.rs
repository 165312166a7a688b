//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame; wall-clock time only drives spawn timing and easing
//! - Seeded RNG only
//! - Stable iteration order (pool insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod pool;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Hit, HitOutcome, enemy_reaches_player, gap, overlaps};
pub use entity::{Body, Enemy, Particle, Player, Projectile};
pub use pool::{EntityPool, Visit};
pub use spawner::{Spawner, spawn_enemy, spawn_interval};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
