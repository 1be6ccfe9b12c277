//! Overstrike mod installer
//!
//! Mod packages loaded by Overstrike (`.smpcmod`, `.suit`, `.stage`,
//! `.modular`). They are deployed to the `Mods Library` folder where
//! Overstrike picks them up. Archives that also ship a fomod script are left
//! to the fomod installer.

use crate::config::GameConfig;
use crate::install::kinds::KindInstaller;
use crate::install::kinds::common_kind_utils::has_fomod_installer;
use crate::listing::{self, ArchiveListing};

/// Package extensions Overstrike understands, lower case with leading dot
pub const OSMOD_EXTENSIONS: [&str; 4] = [".smpcmod", ".suit", ".stage", ".modular"];

pub const OSMOD_SUFFIX: &str = "osmod";
pub const OSMOD_NAME: &str = "Overstrike Mod";

#[derive(Debug, Clone)]
pub struct OsModInstaller {
    id: String,
    game_id: String,
}

impl OsModInstaller {
    pub const PRIORITY: i32 = 30;

    pub fn new(config: &GameConfig) -> Self {
        Self {
            id: config.scoped_id(OSMOD_SUFFIX),
            game_id: config.id.clone(),
        }
    }
}

impl KindInstaller for OsModInstaller {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        OSMOD_NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn game_id(&self) -> &str {
        &self.game_id
    }

    fn is_signature(&self, path: &str) -> bool {
        listing::extension(path)
            .map(|ext| OSMOD_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false)
    }

    fn is_excluded(&self, listing: &ArchiveListing) -> bool {
        has_fomod_installer(listing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn installer() -> OsModInstaller {
        OsModInstaller::new(&GameConfig::default())
    }

    #[test]
    fn test_signature_extensions() {
        let installer = installer();
        for path in ["a.smpcmod", "b/c.SUIT", "d.Stage", "e/f/g.modular"] {
            assert!(installer.is_signature(path), "{path} should match");
        }
        for path in ["a.zip", "suit", ".suit", "a.suit.txt"] {
            assert!(!installer.is_signature(path), "{path} should not match");
        }
    }

    #[test]
    fn test_fomod_pair_withdraws_match() {
        let listing = ArchiveListing::new(["fomod/ModuleConfig.xml", "Options/A/a.suit"]);
        assert!(!installer().matches(&listing, "marvelsspiderman2"));
    }

    #[test]
    fn test_wrong_game_never_matches() {
        let listing = ArchiveListing::new(["a.suit"]);
        assert!(!installer().matches(&listing, "spidermanremastered"));
    }
}
