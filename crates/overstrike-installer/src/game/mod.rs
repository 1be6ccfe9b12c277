//! Game level settings
//!
//! Everything here takes the discovery result as an explicit argument. There is
//! no process-wide "current game path": callers pass a [`GameDiscovery`] once
//! the host has located the game.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::install::error::{InstallError, Result};

pub mod downloads;
pub mod mod_types;
pub mod paths;
pub mod tools;
pub mod verify;

pub use mod_types::{MODS_LIBRARY_FOLDER, ModType, PriorityClass};
pub use paths::PathVariables;

/// Store the game was discovered through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStore {
    Steam,
    Epic,
    Gog,
    Xbox,
}

/// Launcher the game has to be started through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Launcher {
    Steam,
}

/// Result of locating the game on disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDiscovery {
    pub path: Option<PathBuf>,
    pub store: Option<GameStore>,
}

impl GameDiscovery {
    /// Discovery that has not found the game yet
    pub fn undiscovered() -> Self {
        Self::default()
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            store: None,
        }
    }

    pub fn with_store(mut self, store: GameStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn is_discovered(&self) -> bool {
        self.path.is_some()
    }

    /// Install directory or [`InstallError::ApplicationNotLocated`]
    pub fn game_path(&self, game_id: &str) -> Result<&Path> {
        self.path.as_deref().ok_or_else(|| InstallError::ApplicationNotLocated {
            game_id: game_id.to_string(),
        })
    }
}

/// Steam copies must be launched through Steam; other stores need nothing
pub fn requires_launcher(store: Option<&GameStore>) -> Option<Launcher> {
    match store {
        Some(GameStore::Steam) => Some(Launcher::Steam),
        _ => None,
    }
}

/// Directory mods are staged to, relative to the game unless configured
/// otherwise
pub fn mod_path(config: &GameConfig, vars: &PathVariables) -> Result<PathBuf> {
    if config.mod_path_is_relative {
        let path = if config.mod_path.is_empty() { "." } else { config.mod_path.as_str() };
        return Ok(PathBuf::from(path));
    }
    paths::render_pattern(&config.mod_path, vars, &config.id, "modPath")
}

/// `Mods Library` folder the host must keep writable during setup
pub fn mods_library_dir(config: &GameConfig, discovery: &GameDiscovery) -> Result<PathBuf> {
    Ok(discovery.game_path(&config.id)?.join(MODS_LIBRARY_FOLDER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_launcher() {
        assert_eq!(requires_launcher(Some(&GameStore::Steam)), Some(Launcher::Steam));
        assert_eq!(requires_launcher(Some(&GameStore::Epic)), None);
        assert_eq!(requires_launcher(None), None);
    }

    #[test]
    fn test_relative_mod_path() {
        let config = GameConfig::default();
        assert_eq!(mod_path(&config, &PathVariables::default()).unwrap(), PathBuf::from("."));
    }

    #[test]
    fn test_templated_mod_path_needs_discovery() {
        let config = GameConfig {
            mod_path: "{gamePath}/mods".to_string(),
            mod_path_is_relative: false,
            ..GameConfig::default()
        };
        assert!(mod_path(&config, &PathVariables::default()).is_err());

        let vars = PathVariables::default().with_game_path("/g");
        assert_eq!(mod_path(&config, &vars).unwrap(), PathBuf::from("/g/mods"));
    }

    #[test]
    fn test_mods_library_dir() {
        let config = GameConfig::default();
        let err = mods_library_dir(&config, &GameDiscovery::undiscovered()).unwrap_err();
        assert!(matches!(err, InstallError::ApplicationNotLocated { .. }));

        let dir = mods_library_dir(&config, &GameDiscovery::at("/games/sm2")).unwrap();
        assert_eq!(dir, Path::new("/games/sm2").join("Mods Library"));
    }

    #[test]
    fn test_store_names() {
        let store: GameStore = serde_json::from_str(r#""steam""#).unwrap();
        assert_eq!(store, GameStore::Steam);
        assert!(serde_json::from_str::<GameStore>(r#""humble""#).is_err());
    }
}
