//! Game settings
//!
//! Optionally loaded from a JSON file named by `AVOID_COLLISION_SETTINGS`.
//! Missing fields fall back to the defaults in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

/// Environment variable holding the settings file path
pub const SETTINGS_ENV: &str = "AVOID_COLLISION_SETTINGS";

/// Largest accepted `obstacle_cap`
pub const MAX_OBSTACLE_CAP: usize = 1024;

/// Largest accepted screen width or height, in logical units
pub const MAX_SCREEN_DIM: i32 = 1 << 20;

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logical screen width
    pub screen_width: i32,
    /// Logical screen height
    pub screen_height: i32,
    /// Maximum simultaneous obstacles
    pub obstacle_cap: usize,
    /// Per-tick spawn chance in [0, 1]
    pub spawn_chance: f64,
    /// Ticks per second
    pub tick_rate: u32,
    /// Game-over display delay
    pub game_over_delay_ms: u64,
    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            obstacle_cap: OBSTACLE_CAP,
            spawn_chance: SPAWN_CHANCE,
            tick_rate: GAME_TICK_RATE,
            game_over_delay_ms: GAME_OVER_DELAY_MS,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from the file named by `AVOID_COLLISION_SETTINGS`, or use defaults
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Reject configurations the simulation can't run with
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_OBSTACLE_CAP).contains(&self.obstacle_cap) {
            return Err(Error::InvalidSettings(format!(
                "obstacle_cap {} is outside [1, {MAX_OBSTACLE_CAP}]",
                self.obstacle_cap
            )));
        }
        if self.tick_rate == 0 {
            return Err(Error::InvalidSettings("tick_rate must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(Error::InvalidSettings(format!(
                "spawn_chance {} is outside [0, 1]",
                self.spawn_chance
            )));
        }
        // Player needs a margin of its own size on both sides, and obstacles must fit
        if self.screen_width < 3 * PLAYER_SIZE || self.screen_width < OBSTACLE_SIZE {
            return Err(Error::InvalidSettings(format!(
                "screen_width {} is too narrow",
                self.screen_width
            )));
        }
        if self.screen_width > MAX_SCREEN_DIM || self.screen_height > MAX_SCREEN_DIM {
            return Err(Error::InvalidSettings(format!(
                "screen {}x{} exceeds {MAX_SCREEN_DIM} on a side",
                self.screen_width, self.screen_height
            )));
        }
        if self.screen_height < PLAYER_SIZE {
            return Err(Error::InvalidSettings(format!(
                "screen_height {} is too short",
                self.screen_height
            )));
        }
        Ok(())
    }

    /// Game-over delay as a `Duration`
    pub fn game_over_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.game_over_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let settings = Settings::default();
        assert_eq!(settings.screen_width, 1280);
        assert_eq!(settings.screen_height, 720);
        assert_eq!(settings.obstacle_cap, 10);
        assert_eq!(settings.tick_rate, 12);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "obstacle_cap": 3, "seed": 42 }"#).unwrap();
        assert_eq!(settings.obstacle_cap, 3);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.screen_width, SCREEN_WIDTH);
        assert_eq!(settings.game_over_delay_ms, GAME_OVER_DELAY_MS);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "obstacle_cap": 0 }"#),
            Err(Error::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "spawn_chance": 1.5 }"#),
            Err(Error::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "screen_width": 100 }"#),
            Err(Error::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json("not json"),
            Err(Error::SettingsParse(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "obstacle_cap": 18446744073709551615 }"#),
            Err(Error::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "obstacle_cap": 1025 }"#),
            Err(Error::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "screen_height": 2147483647 }"#),
            Err(Error::InvalidSettings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "screen_width": 2147483647 }"#),
            Err(Error::InvalidSettings(_))
        ));
        let edge = Settings::from_json(r#"{ "obstacle_cap": 1024, "screen_height": 1048576 }"#);
        assert!(edge.is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::SettingsRead { .. }));
    }
}
