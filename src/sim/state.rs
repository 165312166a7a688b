//! Game state and session lifecycle
//!
//! A session owns the player, every entity pool, the spawner and the RNG.
//! Restarting replaces all of them.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Enemy, Particle, Player, Projectile};
use super::pool::EntityPool;
use super::spawner::Spawner;
use crate::config::{ConfigError, GameConfig};
use crate::theme::Theme;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first start; nothing moves
    Idle,
    /// Active gameplay
    Running,
    /// An enemy reached the player; frozen until restart
    GameOver,
}

/// Something the front end may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemySpawned { pos: Vec2, radius: f32 },
    /// A non-lethal hit; `radius` is what the enemy shrank to
    EnemyHit { pos: Vec2, radius: f32 },
    EnemyDestroyed { pos: Vec2 },
    GameOver { score: u64 },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GameConfig,
    /// Colors applied to entities created from now on
    pub theme: Theme,
    pub phase: GamePhase,
    pub score: u64,
    /// Ticks simulated this session
    pub frame: u64,
    /// Sessions started since construction
    pub sessions: u32,
    pub player: Player,
    pub projectiles: EntityPool<Projectile>,
    pub enemies: EntityPool<Enemy>,
    /// Visual only; never affects gameplay
    pub particles: EntityPool<Particle>,
    pub spawner: Spawner,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create an idle session. The config is validated here and nowhere else.
    pub fn new(config: GameConfig, theme: Theme, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let spawner = Spawner::new(&mut rng);
        let player = Player::new(config.center(), config.player_radius, theme.projectile);

        Ok(Self {
            seed,
            config,
            theme,
            phase: GamePhase::Idle,
            score: 0,
            frame: 0,
            sessions: 0,
            player,
            projectiles: EntityPool::new(),
            enemies: EntityPool::new(),
            particles: EntityPool::new(),
            spawner,
            events: Vec::new(),
            rng,
        })
    }

    /// Canvas size as a vector
    pub fn canvas(&self) -> Vec2 {
        Vec2::new(self.config.width, self.config.height)
    }

    /// Start a fresh session: new player, empty pools, zero score, new
    /// spawn countdown. Works from any phase.
    pub fn start(&mut self) {
        self.player = Player::new(
            self.config.center(),
            self.config.player_radius,
            self.theme.projectile,
        );
        self.projectiles.clear();
        self.enemies.clear();
        self.particles.clear();
        self.events.clear();
        self.score = 0;
        self.frame = 0;
        self.spawner = Spawner::new(&mut self.rng);
        self.phase = GamePhase::Running;
        self.sessions += 1;
        log::info!(
            "Session {} started (seed {}, first spawn in {:.0} ms)",
            self.sessions,
            self.seed,
            self.spawner.until_next_ms
        );
    }

    /// Fire a projectile from the player toward a canvas point.
    /// Ignored unless running.
    pub fn fire_at(&mut self, target: Vec2) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.projectiles
            .add(Projectile::fire(self.player.pos, target, self.theme.projectile));
        true
    }

    /// Swap the theme; only entities created afterwards pick it up
    pub fn set_theme(&mut self, theme: Theme) {
        log::info!("Theme set to {}", theme.kind.as_str());
        self.theme = theme;
    }

    /// Enter the terminal phase and report the score
    pub(crate) fn end_game(&mut self) {
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!(
            "Game over after {} frames, final score {}",
            self.frame,
            self.score
        );
    }

    /// Final score, once the session has ended
    pub fn final_score(&self) -> Option<u64> {
        (self.phase == GamePhase::GameOver).then_some(self.score)
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
