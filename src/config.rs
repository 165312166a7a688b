//! Session configuration
//!
//! Validated once when a session is created. Nothing here is re-checked
//! mid-session.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::PLAYER_RADIUS;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Canvas width or height is zero, negative, or not finite
    #[error("invalid canvas size {width}x{height}")]
    CanvasSize { width: f32, height: f32 },

    /// Player radius is not positive or does not fit on the canvas
    #[error("invalid player radius {0}")]
    PlayerRadius(f32),

    /// JSON parse error
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Canvas width (CSS pixels)
    pub width: f32,
    /// Canvas height (CSS pixels)
    pub height: f32,
    pub player_radius: f32,
    /// Fixed RNG seed; the front end picks one from the clock when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            player_radius: PLAYER_RADIUS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Config for a canvas of the given size with default tuning
    pub fn with_canvas(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let size_ok = |v: f32| v.is_finite() && v > 0.0;
        if !size_ok(self.width) || !size_ok(self.height) {
            return Err(ConfigError::CanvasSize {
                width: self.width,
                height: self.height,
            });
        }

        let r = self.player_radius;
        if !r.is_finite() || r <= 0.0 || r * 2.0 >= self.width.min(self.height) {
            return Err(ConfigError::PlayerRadius(r));
        }

        Ok(())
    }

    /// Canvas center, where the player sits
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}
