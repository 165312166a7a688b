//! Orb Blaster - defend the centre of the screen from incoming orbs
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity pools, spawning, collisions, game state)
//! - `renderer`: Drawing-surface abstraction and the Canvas 2D backend
//! - `config`: Session configuration and validation
//! - `theme`: Color presets used when constructing entities

pub mod config;
pub mod renderer;
pub mod sim;
pub mod theme;

pub use config::{ConfigError, GameConfig};
pub use theme::{Rgba, Theme, ThemeKind};

use glam::Vec2;

/// Game tuning constants
///
/// Speeds are in pixels per frame; the simulation advances one frame per tick.
pub mod consts {
    /// Player radius (pixels)
    pub const PLAYER_RADIUS: f32 = 12.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    pub const PROJECTILE_SPEED: f32 = 7.0;

    /// Enemy radius is drawn from [ENEMY_MIN_RADIUS, ENEMY_MAX_RADIUS)
    pub const ENEMY_MIN_RADIUS: f32 = 15.0;
    pub const ENEMY_MAX_RADIUS: f32 = 50.0;
    pub const ENEMY_SPEED: f32 = 0.8;
    /// Enemies above this radius shrink when hit; at or below it they die
    pub const ENEMY_KILL_RADIUS: f32 = 12.0;
    /// Radius lost per non-lethal hit
    pub const ENEMY_SHRINK: f32 = 7.0;
    /// Time for the drawn radius to catch up after a shrink (ms)
    pub const SHRINK_EASE_MS: f32 = 500.0;

    /// Spawn interval is drawn from [SPAWN_MIN_MS, SPAWN_MAX_MS)
    pub const SPAWN_MIN_MS: f32 = 800.0;
    pub const SPAWN_MAX_MS: f32 = 2500.0;

    /// Particles per unit of enemy radius in a hit burst
    pub const PARTICLES_PER_RADIUS: f32 = 0.7;
    pub const PARTICLE_MAX_RADIUS: f32 = 2.0;
    /// Upper bound of the random speed factor for burst particles
    pub const PARTICLE_SPREAD: f32 = 5.0;
    /// Per-frame velocity multiplier for particles
    pub const FRICTION: f32 = 0.98;
    /// Per-frame alpha decay for particles
    pub const ALPHA_DECAY: f32 = 0.01;

    /// Collision registers when center distance minus both radii is below this
    pub const OVERLAP_THRESHOLD: f32 = 1.0;

    /// Score awards
    pub const HIT_SCORE: u64 = 100;
    pub const KILL_BONUS: u64 = 250;

    /// Nominal frame length at 60 Hz (ms)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Longest wall-clock gap a single tick will account for (ms)
    pub const MAX_FRAME_MS: f32 = 100.0;
}

/// Angle (radians) from `origin` toward `target`
///
/// `atan2(0, 0)` is 0, so a target on the origin aims along +x.
#[inline]
pub fn aim_angle(origin: Vec2, target: Vec2) -> f32 {
    let d = target - origin;
    d.y.atan2(d.x)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Velocity of magnitude `speed` pointing from `origin` toward `target`
#[inline]
pub fn velocity_toward(origin: Vec2, target: Vec2, speed: f32) -> Vec2 {
    polar_to_cartesian(speed, aim_angle(origin, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aim_angle_zero_offset() {
        assert_eq!(aim_angle(Vec2::new(3.0, 4.0), Vec2::new(3.0, 4.0)), 0.0);
    }

    #[test]
    fn test_velocity_toward_magnitude() {
        let v = velocity_toward(Vec2::ZERO, Vec2::new(-30.0, 40.0), 7.0);
        assert!((v.length() - 7.0).abs() < 1e-4);
        assert!(v.x < 0.0 && v.y > 0.0);
    }
}
