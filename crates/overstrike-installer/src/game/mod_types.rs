//! Deployment mod types
//!
//! A mod type decides where the deployment engine puts an installed mod's
//! files. Installers assign one through the trailing `setmodtype`
//! instruction of their plan.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::install::kinds::os_mod::{OSMOD_NAME, OSMOD_SUFFIX};
use crate::install::kinds::overstrike::{OVERSTRIKE_NAME, OVERSTRIKE_SUFFIX};

/// Folder, relative to the game, that Overstrike loads mods from
pub const MODS_LIBRARY_FOLDER: &str = "Mods Library";

pub const ROOT_SUFFIX: &str = "root";
pub const ROOT_NAME: &str = "Binaries / Root Folder";

/// Coarse deployment priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityClass {
    High,
    Low,
}

impl PriorityClass {
    pub fn base(self) -> i32 {
        match self {
            PriorityClass::High => 25,
            PriorityClass::Low => 75,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModType {
    pub id: String,
    pub name: String,
    pub priority: PriorityClass,
    /// Target directory pattern, see [`crate::game::paths`]
    pub target_path: String,
}

impl ModType {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        priority: PriorityClass,
        target_path: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            priority,
            target_path: target_path.into(),
        }
    }
}

/// Mod types registered for the game, in registration order
pub fn standard_mod_types(config: &GameConfig) -> Vec<ModType> {
    vec![
        ModType::new(config.scoped_id(ROOT_SUFFIX), ROOT_NAME, PriorityClass::High, "{gamePath}"),
        ModType::new(
            config.scoped_id(OSMOD_SUFFIX),
            OSMOD_NAME,
            PriorityClass::High,
            format!("{{gamePath}}/{MODS_LIBRARY_FOLDER}"),
        ),
        ModType::new(
            config.scoped_id(OVERSTRIKE_SUFFIX),
            OVERSTRIKE_NAME,
            PriorityClass::Low,
            "{gamePath}",
        ),
    ]
}
