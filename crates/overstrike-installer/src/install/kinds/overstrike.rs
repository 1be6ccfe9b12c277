//! Overstrike launcher installer
//!
//! Archives shipping the Overstrike mod manager itself. They are recognised by
//! the launcher executable and deployed to the game's root folder.

use crate::config::GameConfig;
use crate::install::kinds::KindInstaller;
use crate::listing;

/// Launcher executable, compared case-insensitively
pub const OVERSTRIKE_EXEC: &str = "overstrike.exe";

pub const OVERSTRIKE_SUFFIX: &str = "overstrike";
pub const OVERSTRIKE_NAME: &str = "Overstrike";

#[derive(Debug, Clone)]
pub struct OverstrikeInstaller {
    id: String,
    game_id: String,
}

impl OverstrikeInstaller {
    pub const PRIORITY: i32 = 25;

    pub fn new(config: &GameConfig) -> Self {
        Self {
            id: config.scoped_id(OVERSTRIKE_SUFFIX),
            game_id: config.id.clone(),
        }
    }
}

impl KindInstaller for OverstrikeInstaller {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        OVERSTRIKE_NAME
    }

    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    fn game_id(&self) -> &str {
        &self.game_id
    }

    fn is_signature(&self, path: &str) -> bool {
        listing::base_name(path).to_lowercase() == OVERSTRIKE_EXEC
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ArchiveListing;

    #[test]
    fn test_signature_is_case_insensitive_base_name() {
        let installer = OverstrikeInstaller::new(&GameConfig::default());
        assert!(installer.is_signature("Overstrike/OverStrike.EXE"));
        assert!(installer.is_signature("overstrike.exe"));
        assert!(!installer.is_signature("overstrike.exe.bak"));
        assert!(!installer.is_signature("not-overstrike.exe"));
    }

    #[test]
    fn test_install_example_plan() {
        let installer = OverstrikeInstaller::new(&GameConfig::default());
        let listing = ArchiveListing::new(["X/overstrike.exe", "X/data.bin"]);

        assert!(installer.matches(&listing, "marvelsspiderman2"));
        assert_eq!(installer.resolve_root(&listing).unwrap(), "X");

        let plan = installer.install(&listing).unwrap();
        assert_eq!(plan.destinations().collect::<Vec<_>>(), vec!["overstrike.exe", "data.bin"]);
        assert_eq!(plan.mod_type(), "marvelsspiderman2-overstrike");
    }
}
