//! Install instructions handed to the deployment engine
//!
//! A plan is a list of copy instructions followed by exactly one
//! `setmodtype` instruction. The JSON shape matches what the host's
//! deployment engine consumes:
//!
//! ```json
//! { "instructions": [
//!     { "type": "copy", "source": "X/overstrike.exe", "destination": "overstrike.exe" },
//!     { "type": "setmodtype", "value": "marvelsspiderman2-overstrike" }
//! ] }
//! ```

use serde::{Deserialize, Serialize};

/// Copy one file from the extracted archive to a root-relative destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyInstruction {
    /// Path as it appears in the archive listing
    pub source: String,
    /// Path relative to the mod type's deployment directory
    pub destination: String,
}

/// Single instruction in the host's wire format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InstallInstruction {
    #[serde(rename = "copy")]
    Copy { source: String, destination: String },

    #[serde(rename = "setmodtype")]
    SetModType { value: String },
}

impl From<CopyInstruction> for InstallInstruction {
    fn from(copy: CopyInstruction) -> Self {
        InstallInstruction::Copy {
            source: copy.source,
            destination: copy.destination,
        }
    }
}

/// Ordered install plan for one archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "InstallResult")]
pub struct InstallPlan {
    copies: Vec<CopyInstruction>,
    mod_type: String,
}

impl InstallPlan {
    pub fn new(copies: Vec<CopyInstruction>, mod_type: impl Into<String>) -> Self {
        Self {
            copies,
            mod_type: mod_type.into(),
        }
    }

    pub fn copies(&self) -> &[CopyInstruction] {
        &self.copies
    }

    /// Mod type assigned by the trailing `setmodtype` instruction
    pub fn mod_type(&self) -> &str {
        &self.mod_type
    }

    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.copies.iter().map(|c| c.destination.as_str())
    }

    /// Flatten to wire instructions; the mod type assignment always comes last
    pub fn instructions(&self) -> Vec<InstallInstruction> {
        self.copies
            .iter()
            .cloned()
            .map(InstallInstruction::from)
            .chain(std::iter::once(InstallInstruction::SetModType {
                value: self.mod_type.clone(),
            }))
            .collect()
    }
}

/// Result returned to the host's installer dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallResult {
    pub instructions: Vec<InstallInstruction>,
}

impl From<InstallPlan> for InstallResult {
    fn from(plan: InstallPlan) -> Self {
        Self {
            instructions: plan.instructions(),
        }
    }
}

/// Result of an installer's support test
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedResult {
    pub supported: bool,
    pub required_files: Vec<String>,
}

impl SupportedResult {
    pub fn new(supported: bool) -> Self {
        Self {
            supported,
            required_files: Vec::new(),
        }
    }
}
