//! Per-frame simulation step
//!
//! One tick per display refresh. Order within a frame:
//! spawns and shots, particles, projectiles, then enemies with collisions.

use glam::Vec2;

use super::collision::{HitOutcome, enemy_reaches_player, particle_burst, resolve_projectile_hits};
use super::pool::Visit;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Canvas points clicked or tapped, oldest first
    pub shots: Vec<Vec2>,
}

impl TickInput {
    pub fn clear(&mut self) {
        self.shots.clear();
    }
}

/// Advance the session by one frame. `dt_ms` is the wall-clock time since the
/// previous frame and only drives the spawn countdown and radius easing;
/// motion is per frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    if state.phase != GamePhase::Running {
        return;
    }
    let dt_ms = dt_ms.clamp(0.0, MAX_FRAME_MS);
    state.frame += 1;

    for &target in &input.shots {
        state.fire_at(target);
    }

    let canvas = state.canvas();
    let spawned = state
        .spawner
        .advance(dt_ms, &mut state.rng, canvas, state.theme.enemy);
    for enemy in spawned {
        log::debug!(
            "Enemy spawned at ({:.0}, {:.0}) radius {:.1}",
            enemy.body.pos.x,
            enemy.body.pos.y,
            enemy.body.radius
        );
        state.events.push(GameEvent::EnemySpawned {
            pos: enemy.body.pos,
            radius: enemy.body.radius,
        });
        state.enemies.add(enemy);
    }

    // Spent particles go before they would move again
    state.particles.for_each_mut(|particle| {
        if particle.is_spent() {
            return Visit::Remove;
        }
        particle.update();
        Visit::Keep
    });

    state.projectiles.for_each_mut(|projectile| {
        projectile.update();
        Visit::remove_if(projectile.body.is_outside(canvas.x, canvas.y))
    });

    let GameState {
        player,
        projectiles,
        enemies,
        particles,
        score,
        events,
        rng,
        ..
    } = state;

    let mut game_over = false;
    enemies.for_each_mut(|enemy| {
        if game_over {
            return Visit::Keep;
        }
        enemy.update();
        enemy.ease(dt_ms);

        if enemy_reaches_player(enemy, player) {
            game_over = true;
            return Visit::Keep;
        }

        let mut destroyed = false;
        for hit in resolve_projectile_hits(enemy, projectiles) {
            *score += HIT_SCORE;
            particle_burst(&mut *rng, &hit, particles);

            match hit.outcome {
                HitOutcome::Shrunk { to, .. } => {
                    events.push(GameEvent::EnemyHit {
                        pos: enemy.body.pos,
                        radius: to,
                    });
                }
                HitOutcome::Destroyed => {
                    *score += KILL_BONUS;
                    log::debug!("Enemy destroyed, score {}", *score);
                    if !destroyed {
                        events.push(GameEvent::EnemyDestroyed {
                            pos: enemy.body.pos,
                        });
                    }
                    destroyed = true;
                }
            }
        }
        Visit::remove_if(destroyed)
    });

    if game_over {
        state.end_game();
    }
}
