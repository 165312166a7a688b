//! Enemy spawning
//!
//! The spawner is a countdown fed with wall-clock milliseconds by each tick.
//! When it expires one enemy enters from a random edge and a new interval is
//! drawn.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::Enemy;
use crate::consts::*;
use crate::theme::Rgba;
use crate::velocity_toward;

/// Countdown to the next enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Milliseconds until the next spawn
    pub until_next_ms: f32,
}

impl Spawner {
    /// A spawner with a freshly drawn interval
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            until_next_ms: spawn_interval(rng),
        }
    }

    /// Run the countdown for `dt_ms` and return the enemies that came due.
    /// Long gaps may produce more than one.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt_ms: f32,
        rng: &mut R,
        canvas: Vec2,
        color: Rgba,
    ) -> Vec<Enemy> {
        let mut spawned = Vec::new();
        self.until_next_ms -= dt_ms;
        while self.until_next_ms <= 0.0 {
            spawned.push(spawn_enemy(rng, canvas, color));
            self.until_next_ms += spawn_interval(rng);
        }
        spawned
    }
}

/// Draw a spawn interval from [`SPAWN_MIN_MS`, `SPAWN_MAX_MS`)
pub fn spawn_interval<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(SPAWN_MIN_MS..SPAWN_MAX_MS)
}

/// Create an enemy just beyond a random edge of a `canvas`-sized area,
/// heading for its center
pub fn spawn_enemy<R: Rng + ?Sized>(rng: &mut R, canvas: Vec2, color: Rgba) -> Enemy {
    let radius = rng.random_range(ENEMY_MIN_RADIUS..ENEMY_MAX_RADIUS);

    let pos = if rng.random_bool(0.5) {
        // Left or right edge
        let x = if rng.random_bool(0.5) {
            -radius
        } else {
            canvas.x + radius
        };
        Vec2::new(x, rng.random_range(0.0..canvas.y))
    } else {
        // Top or bottom edge
        let x = rng.random_range(0.0..canvas.x);
        let y = if rng.random_bool(0.5) {
            -radius
        } else {
            canvas.y + radius
        };
        Vec2::new(x, y)
    };

    let vel = velocity_toward(pos, canvas / 2.0, ENEMY_SPEED);
    Enemy::new(pos, vel, radius, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_enemies_start_offscreen_aimed_at_center() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let enemy = spawn_enemy(&mut rng, CANVAS, Rgba::WHITE);
            let r = enemy.body.radius;
            assert!((ENEMY_MIN_RADIUS..ENEMY_MAX_RADIUS).contains(&r));

            let pos = enemy.body.pos;
            let on_side = (pos.x == -r || pos.x == CANVAS.x + r) && (0.0..CANVAS.y).contains(&pos.y);
            let on_cap = (pos.y == -r || pos.y == CANVAS.y + r) && (0.0..CANVAS.x).contains(&pos.x);
            assert!(on_side || on_cap, "spawned at {pos:?} with radius {r}");

            assert!((enemy.body.vel.length() - ENEMY_SPEED).abs() < 1e-4);
            let to_center = (CANVAS / 2.0 - pos).normalize();
            assert!(enemy.body.vel.normalize().dot(to_center) > 0.9999);
        }
    }

    #[test]
    fn test_intervals_in_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let ms = spawn_interval(&mut rng);
            assert!((SPAWN_MIN_MS..SPAWN_MAX_MS).contains(&ms));
        }
    }

    #[test]
    fn test_advance_counts_down() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner { until_next_ms: 100.0 };

        assert!(spawner.advance(60.0, &mut rng, CANVAS, Rgba::WHITE).is_empty());
        assert_eq!(spawner.until_next_ms, 40.0);

        let spawned = spawner.advance(40.0, &mut rng, CANVAS, Rgba::WHITE);
        assert_eq!(spawned.len(), 1);
        assert!(spawner.until_next_ms >= SPAWN_MIN_MS);
    }

    #[test]
    fn test_long_gap_spawns_several() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut spawner = Spawner { until_next_ms: 1.0 };
        let spawned = spawner.advance(SPAWN_MAX_MS * 2.0, &mut rng, CANVAS, Rgba::WHITE);
        assert!(spawned.len() >= 2);
        assert!(spawner.until_next_ms > 0.0);
    }
}
