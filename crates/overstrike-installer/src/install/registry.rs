//! Kind registry
//!
//! The registry holds the game's mod types (where files are deployed) and its
//! installers (how archives are classified and planned). Installers are tried
//! in registration order and the first one that supports a listing wins, so
//! more specific kinds must be registered before more general ones.

use std::path::PathBuf;

use tracing::info;

use crate::config::GameConfig;
use crate::game::mod_types::{ModType, standard_mod_types};
use crate::game::paths::{PathVariables, render_pattern};
use crate::game::GameDiscovery;
use crate::install::error::{InstallError, Result};
use crate::install::instructions::InstallPlan;
use crate::install::kinds::{KindInstaller, OsModInstaller, OverstrikeInstaller};
use crate::listing::ArchiveListing;

/// Registry of mod types and kind installers for one game
pub struct KindRegistry {
    game: GameConfig,
    mod_types: Vec<ModType>,
    installers: Vec<Box<dyn KindInstaller>>,
}

impl KindRegistry {
    /// Create an empty registry
    pub fn new(game: GameConfig) -> Self {
        Self {
            game,
            mod_types: Vec::new(),
            installers: Vec::new(),
        }
    }

    /// Registry with the game's standard mod types and installers.
    ///
    /// The Overstrike launcher installer is registered ahead of the mod
    /// installer.
    pub fn for_game(game: GameConfig) -> Self {
        let mod_types = standard_mod_types(&game);
        let launcher = OverstrikeInstaller::new(&game);
        let mods = OsModInstaller::new(&game);

        mod_types
            .into_iter()
            .fold(Self::new(game), |registry, mod_type| registry.register_mod_type(mod_type))
            .register(launcher)
            .register(mods)
    }

    pub fn register_mod_type(mut self, mod_type: ModType) -> Self {
        self.mod_types.push(mod_type);
        self
    }

    /// Register an installer; earlier registrations take precedence
    pub fn register<I: KindInstaller + 'static>(mut self, installer: I) -> Self {
        self.installers.push(Box::new(installer));
        self
    }

    pub fn game(&self) -> &GameConfig {
        &self.game
    }

    pub fn mod_types(&self) -> &[ModType] {
        &self.mod_types
    }

    pub fn mod_type(&self, id: &str) -> Result<&ModType> {
        self.mod_types
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| InstallError::UnknownModType(id.to_string()))
    }

    /// Deployment priority: the class base plus the registration index
    pub fn deploy_priority(&self, id: &str) -> Result<i32> {
        self.mod_types
            .iter()
            .position(|t| t.id == id)
            .map(|idx| self.mod_types[idx].priority.base() + idx as i32)
            .ok_or_else(|| InstallError::UnknownModType(id.to_string()))
    }

    /// A mod type applies once the game it belongs to has been located
    pub fn is_mod_type_supported(&self, game_id: &str, discovery: &GameDiscovery) -> bool {
        game_id == self.game.id && discovery.is_discovered()
    }

    pub fn installers(&self) -> impl Iterator<Item = &dyn KindInstaller> {
        self.installers.iter().map(|i| i.as_ref())
    }

    pub fn installer(&self, id: &str) -> Result<&dyn KindInstaller> {
        self.installers()
            .find(|i| i.id() == id)
            .ok_or_else(|| InstallError::UnknownInstaller(id.to_string()))
    }

    /// First installer, in registration order, that supports the listing
    pub fn classify(&self, listing: &ArchiveListing, game_id: &str) -> Option<&dyn KindInstaller> {
        let found = self.installers().find(|i| i.matches(listing, game_id));
        match found {
            Some(installer) => info!(installer = installer.id(), files = listing.len(), "classified listing"),
            None => info!(files = listing.len(), "no installer supports listing"),
        }
        found
    }

    /// Classify and plan in one step; `Ok(None)` when no kind applies
    pub fn plan(&self, listing: &ArchiveListing, game_id: &str) -> Result<Option<InstallPlan>> {
        self.classify(listing, game_id)
            .map(|installer| installer.install(listing))
            .transpose()
    }

    /// Deployment directory for a mod type
    pub fn resolve_destination(&self, mod_type_id: &str, vars: &PathVariables) -> Result<PathBuf> {
        let mod_type = self.mod_type(mod_type_id)?;
        render_pattern(&mod_type.target_path, vars, &self.game.id, &mod_type.id)
    }
}

impl Default for KindRegistry {
    fn default() -> Self {
        Self::for_game(GameConfig::default())
    }
}
