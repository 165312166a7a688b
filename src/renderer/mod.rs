//! Rendering
//!
//! The simulation never draws. After each tick the front end hands the state
//! to [`draw_frame`], which issues one call per visible entity against a
//! [`Surface`].

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use glam::Vec2;

use crate::sim::GameState;
use crate::theme::Rgba;

/// A 2D drawing target
pub trait Surface {
    /// Fill the whole surface. A translucent color fades the previous frame
    /// instead of erasing it.
    fn clear(&mut self, color: Rgba);

    /// Fill a circle at `alpha` opacity
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Rgba, alpha: f32);
}

/// Draw one frame: background, player, particles, projectiles, enemies
pub fn draw_frame<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    surface.clear(state.theme.background);

    let player = &state.player;
    surface.draw_circle(player.pos, player.radius, player.color, 1.0);

    for particle in &state.particles {
        // Faded particles wait for removal on the next tick
        if particle.is_spent() {
            continue;
        }
        let body = &particle.body;
        surface.draw_circle(body.pos, body.radius, body.color, particle.alpha);
    }

    for projectile in &state.projectiles {
        let body = &projectile.body;
        surface.draw_circle(body.pos, body.radius, body.color, 1.0);
    }

    for enemy in &state.enemies {
        let body = &enemy.body;
        surface.draw_circle(body.pos, enemy.drawn_radius, body.color, 1.0);
    }
}
