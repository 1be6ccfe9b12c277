//! Launchable third-party tools

use std::path::PathBuf;

use serde::Serialize;

use crate::config::GameConfig;
use crate::game::GameDiscovery;
use crate::install::error::Result;
use crate::install::kinds::overstrike::{OVERSTRIKE_EXEC, OVERSTRIKE_NAME, OVERSTRIKE_SUFFIX};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub executable: String,
    pub required_files: Vec<String>,
    /// Keep running after the host exits
    pub detach: bool,
    /// Executable path is relative to the game directory
    pub relative: bool,
    /// Game and tool cannot run at the same time
    pub exclusive: bool,
}

impl ToolDefinition {
    pub fn executable_path(&self, config: &GameConfig, discovery: &GameDiscovery) -> Result<PathBuf> {
        if self.relative {
            Ok(discovery.game_path(&config.id)?.join(&self.executable))
        } else {
            Ok(PathBuf::from(&self.executable))
        }
    }
}

pub fn overstrike_tool(config: &GameConfig) -> ToolDefinition {
    ToolDefinition {
        id: config.scoped_id(OVERSTRIKE_SUFFIX),
        name: OVERSTRIKE_NAME.to_string(),
        logo: "overstrike.png".to_string(),
        executable: OVERSTRIKE_EXEC.to_string(),
        required_files: vec![OVERSTRIKE_EXEC.to_string()],
        detach: true,
        relative: true,
        exclusive: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overstrike_tool_resolves_under_game() {
        let config = GameConfig::default();
        let tool = overstrike_tool(&config);
        assert_eq!(tool.id, "marvelsspiderman2-overstrike");

        assert!(tool.executable_path(&config, &GameDiscovery::undiscovered()).is_err());
        let path = tool.executable_path(&config, &GameDiscovery::at("/g")).unwrap();
        assert_eq!(path, PathBuf::from("/g").join("overstrike.exe"));
    }
}
