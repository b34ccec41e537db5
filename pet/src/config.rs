use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use murka_core::{GameConfig, GridEngine};

use crate::Result;
use crate::assets::AssetDirs;

/// Application settings, loadable from a TOML file. Every field has a
/// default matching the shipped configuration, so a partial file works.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetConfig {
    pub pet_size: (u32, u32),
    pub movement_interval_ms: u64,
    pub state_change_interval_ms: u64,
    pub popup_interval_ms: u64,
    pub windows: WindowSettings,
    pub game: GameSettings,
    pub assets_dir: PathBuf,
}

/// Fixed sizes of the companion's popup windows, width by height.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub messenger: (u32, u32),
    pub about: (u32, u32),
    pub game: (u32, u32),
}

/// Parameters handed to the puzzle mini-game.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub grid_size: u8,
    pub kinds: u8,
    pub reward: u32,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            pet_size: (200, 200),
            movement_interval_ms: 3000,
            state_change_interval_ms: 8000,
            popup_interval_ms: 1500,
            windows: WindowSettings::default(),
            game: GameSettings::default(),
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            messenger: (400, 500),
            about: (450, 600),
            game: (400, 500),
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: 8,
            kinds: 6,
            reward: 30,
        }
    }
}

impl PetConfig {
    /// Reads the configuration file; a missing file yields the defaults, a
    /// malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Ok(toml::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn asset_dirs(&self) -> AssetDirs {
        AssetDirs::under(&self.assets_dir)
    }
}

impl GameSettings {
    /// Spawns a puzzle session with these parameters.
    pub fn new_game(&self, seed: u64) -> Result<GridEngine> {
        let config = GameConfig::new(self.grid_size, self.kinds, self.reward)?;
        Ok(GridEngine::new(config, seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = PetConfig::load(Path::new("/nonexistent/murka.toml")).unwrap();
        assert_eq!(config, PetConfig::default());
        assert_eq!(config.pet_size, (200, 200));
        assert_eq!(config.windows.about, (450, 600));
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config: PetConfig = toml::from_str(
            r#"
            popup_interval_ms = 4000

            [game]
            grid_size = 6
            "#,
        )
        .unwrap();

        assert_eq!(config.popup_interval_ms, 4000);
        assert_eq!(config.game.grid_size, 6);
        assert_eq!(config.game.kinds, 6);
        assert_eq!(config.movement_interval_ms, 3000);
    }

    #[test]
    fn game_settings_spawn_a_matching_session() {
        let game = GameSettings::default().new_game(3).unwrap();
        assert_eq!(game.size(), 8);
        assert_eq!(game.config().reward, 30);
    }

    #[test]
    fn degenerate_game_settings_are_rejected() {
        let settings = GameSettings {
            grid_size: 0,
            ..GameSettings::default()
        };
        assert!(settings.new_game(0).is_err());
    }
}
