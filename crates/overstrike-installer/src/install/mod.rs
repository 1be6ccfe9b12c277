//! Installation module
//!
//! This module classifies archive listings into mod kinds and turns them into
//! install plans for the host's deployment engine.

pub mod error;
pub mod host;
pub mod instructions;
pub mod kinds;
pub mod registry;

// Re-export commonly used types
pub use error::{InstallError, Result};
pub use host::HostInstaller;
pub use instructions::{CopyInstruction, InstallInstruction, InstallPlan, InstallResult, SupportedResult};
pub use kinds::{KindInstaller, OsModInstaller, OverstrikeInstaller};
pub use registry::KindRegistry;
