//! Circle overlap tests and hit resolution
//!
//! Two circles touch when the distance between their centers minus both radii
//! drops below [`OVERLAP_THRESHOLD`].

use glam::Vec2;
use rand::Rng;

use super::entity::{Enemy, Particle, Player, Projectile};
use super::pool::{EntityPool, Visit};
use crate::consts::*;
use crate::theme::Rgba;

/// Edge-to-edge distance between two circles (negative when they overlap)
#[inline]
pub fn gap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> f32 {
    a.distance(b) - a_radius - b_radius
}

#[inline]
pub fn overlaps(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    gap(a, a_radius, b, b_radius) < OVERLAP_THRESHOLD
}

/// True when `enemy` has reached the player
pub fn enemy_reaches_player(enemy: &Enemy, player: &Player) -> bool {
    overlaps(enemy.body.pos, enemy.body.radius, player.pos, player.radius)
}

/// What a single projectile did to an enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitOutcome {
    /// Enemy survived with a smaller radius
    Shrunk { from: f32, to: f32 },
    /// Enemy was at or below the kill radius and is gone
    Destroyed,
}

/// One projectile striking one enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Projectile position at impact
    pub at: Vec2,
    /// Projectile color, inherited by the burst
    pub color: Rgba,
    /// Enemy radius when struck
    pub enemy_radius: f32,
    pub outcome: HitOutcome,
}

/// Test every live projectile against `enemy`, in pool order.
///
/// Each overlapping projectile is consumed and resolved against the enemy's
/// current radius: above [`ENEMY_KILL_RADIUS`] it shrinks, otherwise it is
/// destroyed. A destroyed enemy keeps its last position and radius for the
/// rest of the pass, so every later overlapping projectile is consumed as
/// another [`HitOutcome::Destroyed`].
pub fn resolve_projectile_hits(
    enemy: &mut Enemy,
    projectiles: &mut EntityPool<Projectile>,
) -> Vec<Hit> {
    let mut hits = Vec::new();

    projectiles.for_each_mut(|projectile| {
        let shot = &projectile.body;
        if !overlaps(shot.pos, shot.radius, enemy.body.pos, enemy.body.radius) {
            return Visit::Keep;
        }

        let enemy_radius = enemy.body.radius;
        let outcome = if enemy.is_fragile() {
            HitOutcome::Destroyed
        } else {
            enemy.shrink();
            HitOutcome::Shrunk {
                from: enemy_radius,
                to: enemy.body.radius,
            }
        };
        hits.push(Hit {
            at: shot.pos,
            color: shot.color,
            enemy_radius,
            outcome,
        });
        Visit::Remove
    });

    hits
}

/// Number of particles thrown off by a hit on an enemy of `enemy_radius`
#[inline]
pub fn burst_size(enemy_radius: f32) -> usize {
    (enemy_radius * PARTICLES_PER_RADIUS).floor().max(0.0) as usize
}

/// Spray particles from a hit point
pub fn particle_burst<R: Rng + ?Sized>(rng: &mut R, hit: &Hit, particles: &mut EntityPool<Particle>) {
    for _ in 0..burst_size(hit.enemy_radius) {
        let radius = rng.random::<f32>() * PARTICLE_MAX_RADIUS;
        let vel = Vec2::new(spark_speed(rng), spark_speed(rng));
        particles.add(Particle::new(hit.at, vel, radius, hit.color));
    }
}

/// One velocity component: signed, biased toward small values
fn spark_speed<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    (rng.random::<f32>() - 0.5) * (rng.random::<f32>() * PARTICLE_SPREAD)
}
