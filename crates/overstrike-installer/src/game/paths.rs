//! Target path templating
//!
//! Mod type target paths are patterns such as `{gamePath}/Mods Library`.
//! The recognised placeholders are `gamePath`, `documents`, `localAppData` and
//! `appData`. A referenced placeholder without a value is an error, never an
//! empty substitution.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::game::GameDiscovery;
use crate::install::error::{InstallError, Result};

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"));

pub const GAME_PATH: &str = "gamePath";
pub const DOCUMENTS: &str = "documents";
pub const LOCAL_APP_DATA: &str = "localAppData";
pub const APP_DATA: &str = "appData";

/// Values available for substitution into target path patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathVariables {
    /// Install directory, `None` until discovery has located the game
    pub game_path: Option<PathBuf>,
    pub documents: Option<PathBuf>,
    pub local_app_data: Option<PathBuf>,
    pub app_data: Option<PathBuf>,
}

impl PathVariables {
    pub fn from_discovery(discovery: &GameDiscovery) -> Self {
        Self {
            game_path: discovery.path.clone(),
            ..Self::default()
        }
    }

    pub fn with_game_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.game_path = Some(path.into());
        self
    }

    pub fn with_documents(mut self, path: impl Into<PathBuf>) -> Self {
        self.documents = Some(path.into());
        self
    }

    pub fn with_local_app_data(mut self, path: impl Into<PathBuf>) -> Self {
        self.local_app_data = Some(path.into());
        self
    }

    pub fn with_app_data(mut self, path: impl Into<PathBuf>) -> Self {
        self.app_data = Some(path.into());
        self
    }

    /// Outer `None` for unknown names, inner `None` for unset values
    fn lookup(&self, name: &str) -> Option<Option<&Path>> {
        let value = match name {
            GAME_PATH => &self.game_path,
            DOCUMENTS => &self.documents,
            LOCAL_APP_DATA => &self.local_app_data,
            APP_DATA => &self.app_data,
            _ => return None,
        };
        Some(value.as_deref())
    }
}

/// Substitute every placeholder in `pattern`.
///
/// `game_id` and `mod_type` only feed error messages.
pub fn render_pattern(pattern: &str, vars: &PathVariables, game_id: &str, mod_type: &str) -> Result<PathBuf> {
    let mut rendered = String::with_capacity(pattern.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(pattern) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let name = name.as_str();

        let value = match vars.lookup(name) {
            Some(Some(value)) => value,
            Some(None) if name == GAME_PATH => {
                return Err(InstallError::ApplicationNotLocated {
                    game_id: game_id.to_string(),
                });
            }
            Some(None) => {
                return Err(InstallError::UnresolvedPlaceholder {
                    placeholder: name.to_string(),
                    mod_type: mod_type.to_string(),
                });
            }
            None => {
                return Err(InstallError::UnknownPlaceholder {
                    placeholder: name.to_string(),
                    mod_type: mod_type.to_string(),
                });
            }
        };

        rendered.push_str(&pattern[last..whole.start()]);
        rendered.push_str(&value.to_string_lossy());
        last = whole.end();
    }
    rendered.push_str(&pattern[last..]);

    Ok(PathBuf::from(rendered))
}
