//! Overstrike Installer Library
//!
//! This library classifies the extracted file listing of a mod archive for
//! Marvel's Spider-Man 2 into one of the supported mod kinds and produces the
//! root-relative install plan the host's deployment engine executes.
//!
//! # Quick Start
//!
//! ```rust
//! use overstrike_installer::{ArchiveListing, KindInstaller, KindRegistry, PathVariables};
//!
//! # fn example() -> overstrike_installer::Result<()> {
//! let registry = KindRegistry::default();
//! let listing = ArchiveListing::new(["X/overstrike.exe", "X/data.bin"]);
//!
//! if let Some(installer) = registry.classify(&listing, "marvelsspiderman2") {
//!     let plan = installer.install(&listing)?;
//!     println!("{}", serde_json::to_string_pretty(&plan)?);
//!
//!     let vars = PathVariables::default().with_game_path("C:/Games/Spider-Man 2");
//!     let target = registry.resolve_destination(plan.mod_type(), &vars)?;
//!     println!("deploys to {}", target.display());
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Features
//!
//! - **Kind matching**: launcher (`overstrike.exe`) and mod package
//!   (`.smpcmod`, `.suit`, `.stage`, `.modular`) archives; fomod packaged
//!   archives are left to the fomod installer
//! - **Root resolution**: the payload is anchored at the first signature file
//! - **Install plans**: copy instructions relative to the root plus a trailing
//!   mod type assignment
//! - **Target paths**: `{gamePath}`-style patterns resolved against explicit
//!   discovery results
//! - **Game settings**: launcher requirements, Overstrike tool, auto-download
//!   and file verification planning

pub mod config;
pub mod game;
pub mod install;
pub mod listing;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use game::{GameDiscovery, GameStore, Launcher, ModType, PathVariables, PriorityClass};
pub use install::{
    CopyInstruction, HostInstaller, InstallError, InstallInstruction, InstallPlan, InstallResult,
    KindInstaller, KindRegistry, Result, SupportedResult,
};
pub use listing::ArchiveListing;
