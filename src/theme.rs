//! Color themes
//!
//! The session holds the current theme and copies colors into entities when
//! they are created, so a theme swap only affects what spawns afterwards.

use serde::{Deserialize, Serialize};

/// An sRGB color with straight alpha
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string (`rgba(r, g, b, a)`)
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "Dark",
            ThemeKind::Light => "Light",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dark" => Some(ThemeKind::Dark),
            "light" => Some(ThemeKind::Light),
            _ => None,
        }
    }

    /// The preset the theme button switches to
    pub fn next(&self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }
}

/// Colors used by the simulation and the page chrome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub kind: ThemeKind,
    /// Frame fill; translucent so moving orbs leave a short trail
    pub background: Rgba,
    pub enemy: Rgba,
    /// Projectiles, the player, and hit particles
    pub projectile: Rgba,
    pub button: Rgba,
    pub score: Rgba,
}

impl Default for Theme {
    fn default() -> Self {
        Self::preset(ThemeKind::Dark)
    }
}

impl Theme {
    pub fn preset(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self {
                kind,
                background: Rgba::rgba(0, 0, 0, 0.1),
                enemy: Rgba::rgb(0, 255, 26),
                projectile: Rgba::WHITE,
                button: Rgba::rgb(6, 149, 20),
                score: Rgba::WHITE,
            },
            ThemeKind::Light => Self {
                kind,
                background: Rgba::rgba(255, 255, 255, 0.1),
                enemy: Rgba::rgb(149, 6, 6),
                projectile: Rgba::BLACK,
                button: Rgba::rgb(100, 10, 3),
                score: Rgba::BLACK,
            },
        }
    }

    /// Switch to the other preset
    pub fn toggled(&self) -> Self {
        Self::preset(self.kind.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_cycles_presets() {
        let dark = Theme::default();
        let light = dark.toggled();
        assert_eq!(light.kind, ThemeKind::Light);
        assert_eq!(light.projectile, Rgba::BLACK);
        assert_eq!(light.toggled(), dark);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(ThemeKind::from_str("LIGHT"), Some(ThemeKind::Light));
        assert_eq!(ThemeKind::from_str("sepia"), None);
        assert_eq!(ThemeKind::Dark.as_str(), "Dark");
    }

    #[test]
    fn test_css_string() {
        assert_eq!(Rgba::rgba(0, 0, 0, 0.1).to_css(), "rgba(0, 0, 0, 0.1)");
        assert_eq!(Rgba::rgb(0, 255, 26).to_css(), "rgba(0, 255, 26, 1)");
    }
}
