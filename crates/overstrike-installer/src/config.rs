//! Configuration types for the target game

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::install::error::{InstallError, Result};

/// Static description of the game the installers are registered for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    /// Game id the host uses to dispatch installers
    pub id: String,
    pub name: String,
    pub short_name: String,
    /// Game executable, relative to the install directory
    pub executable: String,
    pub steam_app_id: String,
    /// Empty when the game is not sold on the Epic store
    pub epic_app_id: String,
    pub mod_path: String,
    pub mod_path_is_relative: bool,
    /// Files that must exist for a directory to count as the game install
    pub required_files: Vec<String>,
    /// Nexus mod page hosting Overstrike
    pub overstrike_page_id: u32,
    /// Known-good Overstrike file on that page
    pub overstrike_file_id: u32,
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file; missing keys fall back to the defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|source| InstallError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Derive a game-scoped id such as `marvelsspiderman2-osmod`
    pub fn scoped_id(&self, suffix: &str) -> String {
        format!("{}-{}", self.id, suffix)
    }

    /// Store ids used by discovery, skipping stores the game is not on
    pub fn discovery_ids(&self) -> Vec<&str> {
        [self.steam_app_id.as_str(), self.epic_app_id.as_str()]
            .into_iter()
            .filter(|id| !id.is_empty())
            .collect()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            id: "marvelsspiderman2".to_string(),
            name: "Marvel's Spider-Man 2".to_string(),
            short_name: "Spider-Man 2".to_string(),
            executable: "Spider-Man2.exe".to_string(),
            steam_app_id: "2651280".to_string(),
            epic_app_id: String::new(),
            mod_path: ".".to_string(),
            mod_path_is_relative: true,
            required_files: vec!["Spider-Man2.exe".to_string()],
            overstrike_page_id: 1,
            overstrike_file_id: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_targets_spider_man_2() {
        let config = GameConfig::default();
        assert_eq!(config.id, "marvelsspiderman2");
        assert_eq!(config.scoped_id("osmod"), "marvelsspiderman2-osmod");
        assert_eq!(config.discovery_ids(), vec!["2651280"]);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json_str(r#"{ "id": "spidermanremastered", "epicAppId": "abc" }"#).unwrap();
        assert_eq!(config.id, "spidermanremastered");
        assert_eq!(config.executable, "Spider-Man2.exe");
        assert_eq!(config.discovery_ids(), vec!["2651280", "abc"]);
    }

    #[test]
    fn test_from_json_file_reports_path_on_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = GameConfig::from_json_file(file.path()).unwrap_err();
        match err {
            InstallError::Config { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
