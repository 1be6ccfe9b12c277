//! Game file verification after a game update
//!
//! Overstrike patches the game's `toc`. After an update the stale `toc` and its
//! `toc.BAK` backup must be removed and the files re-verified through Steam.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::GameConfig;
use crate::game::GameDiscovery;
use crate::install::error::Result;

pub const TOC_FILE: &str = "toc";
pub const TOC_BACKUP_FILE: &str = "toc.BAK";

/// Files to delete before verifying
pub fn toc_files(config: &GameConfig, discovery: &GameDiscovery) -> Result<Vec<PathBuf>> {
    let game_path = discovery.game_path(&config.id)?;
    Ok(vec![game_path.join(TOC_FILE), game_path.join(TOC_BACKUP_FILE)])
}

/// Parameters for a Steam file integrity check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyRequest {
    pub file_list: String,
    pub install_directory: PathBuf,
    pub verify_all: bool,
    pub app_id: String,
}

impl VerifyRequest {
    pub fn for_game(config: &GameConfig, discovery: &GameDiscovery) -> Result<Self> {
        Ok(Self {
            file_list: TOC_FILE.to_string(),
            install_directory: discovery.game_path(&config.id)?.to_path_buf(),
            verify_all: false,
            app_id: config.steam_app_id.clone(),
        })
    }
}
