//! Installation error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while classifying a listing or planning an install
#[derive(Debug, Error)]
pub enum InstallError {
    /// An installer was asked to build a plan for a listing its matcher
    /// never accepted
    #[error("Installer '{installer}' has no signature file in the listing: {reason}")]
    SignatureViolation { installer: String, reason: String },

    #[error("Unknown mod type: {0}")]
    UnknownModType(String),

    #[error("Unknown installer: {0}")]
    UnknownInstaller(String),

    /// The game install directory is needed but discovery has not completed
    #[error("Game '{game_id}' has not been located on disk yet")]
    ApplicationNotLocated { game_id: String },

    #[error("Placeholder '{{{placeholder}}}' in target path of '{mod_type}' has no value")]
    UnresolvedPlaceholder { placeholder: String, mod_type: String },

    #[error("Unknown placeholder '{{{placeholder}}}' in target path of '{mod_type}'")]
    UnknownPlaceholder { placeholder: String, mod_type: String },

    #[error("No {tool} main file found")]
    NoMainFile { tool: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid game configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InstallError {
    /// Recoverable errors leave the host free to defer the attempt and retry
    /// once the missing piece (usually discovery) is available
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            InstallError::ApplicationNotLocated { .. } | InstallError::UnresolvedPlaceholder { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, InstallError>;
