//! Entity types
//!
//! Every moving entity is a circular [`Body`] plus a little per-kind state.
//! Motion is per frame: velocities are pixels per tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::theme::Rgba;
use crate::velocity_toward;

/// Shared shape of every moving entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Rgba) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Advance one frame of linear motion
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    /// True once the whole circle has left the `width` x `height` canvas
    pub fn is_outside(&self, width: f32, height: f32) -> bool {
        self.pos.x + self.radius < 0.0
            || self.pos.x - self.radius > width
            || self.pos.y + self.radius < 0.0
            || self.pos.y - self.radius > height
    }
}

/// The stationary player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

impl Player {
    pub fn new(pos: Vec2, radius: f32, color: Rgba) -> Self {
        Self { pos, radius, color }
    }
}

/// A shot fired from the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub body: Body,
}

impl Projectile {
    /// Fire from `origin` toward `target` at [`PROJECTILE_SPEED`]
    pub fn fire(origin: Vec2, target: Vec2, color: Rgba) -> Self {
        let vel = velocity_toward(origin, target, PROJECTILE_SPEED);
        Self {
            body: Body::new(origin, vel, PROJECTILE_RADIUS, color),
        }
    }

    pub fn update(&mut self) {
        self.body.integrate();
    }
}

/// An incoming orb
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    /// Radius the renderer draws; trails `body.radius` after a shrink
    pub drawn_radius: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Rgba) -> Self {
        Self {
            body: Body::new(pos, vel, radius, color),
            drawn_radius: radius,
        }
    }

    pub fn update(&mut self) {
        self.body.integrate();
    }

    /// A hit at this size destroys the enemy instead of shrinking it
    #[inline]
    pub fn is_fragile(&self) -> bool {
        self.body.radius <= ENEMY_KILL_RADIUS
    }

    /// Drop the collision radius by [`ENEMY_SHRINK`]; the drawn radius follows
    /// via [`Enemy::ease`]
    pub fn shrink(&mut self) {
        self.body.radius -= ENEMY_SHRINK;
    }

    /// Move the drawn radius toward the real one at a fixed rate
    pub fn ease(&mut self, dt_ms: f32) {
        let step = ENEMY_SHRINK * dt_ms / SHRINK_EASE_MS;
        if self.drawn_radius > self.body.radius {
            self.drawn_radius = (self.drawn_radius - step).max(self.body.radius);
        } else {
            self.drawn_radius = self.body.radius;
        }
    }
}

/// A fading spark from a hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub body: Body,
    /// Opacity, 1 at spawn
    pub alpha: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Rgba) -> Self {
        Self {
            body: Body::new(pos, vel, radius, color),
            alpha: 1.0,
        }
    }

    /// Fully faded; removed on the next pass
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.alpha <= 0.0
    }

    /// Apply friction, move, fade
    pub fn update(&mut self) {
        self.body.vel *= FRICTION;
        self.body.integrate();
        self.alpha -= ALPHA_DECAY;
    }
}
