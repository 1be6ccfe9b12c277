//! Mod kind installers
//!
//! Each supported kind of mod archive lives in its own file and implements
//! [`KindInstaller`]. A kind only has to describe its signature: which single
//! file marks an archive as belonging to it, and optionally which listings it
//! must leave to a more specialized installer. Matching, root resolution and
//! instruction building are shared.

use tracing::debug;

use crate::install::error::{InstallError, Result};
use crate::install::instructions::InstallPlan;
use crate::listing::ArchiveListing;

pub mod common_kind_utils;
pub mod os_mod;
pub mod overstrike;

pub use os_mod::{OsModInstaller, OSMOD_EXTENSIONS};
pub use overstrike::{OverstrikeInstaller, OVERSTRIKE_EXEC};

use common_kind_utils::{build_copy_instructions, find_signature_file};

/// Interface every mod kind installer implements
///
/// Implementations must be pure: the same listing always yields the same
/// answer and the same plan.
pub trait KindInstaller: Send + Sync {
    /// Installer id, also the mod type assigned to installed archives
    fn id(&self) -> &str;

    /// Human readable label
    fn name(&self) -> &str;

    /// Priority the host sorts installers by (lower is tried first)
    fn priority(&self) -> i32;

    /// Game this installer is registered for
    fn game_id(&self) -> &str;

    /// Whether a single file carries this kind's signature
    fn is_signature(&self, path: &str) -> bool;

    /// Listings that must be left to another installer even though they match
    fn is_excluded(&self, _listing: &ArchiveListing) -> bool {
        false
    }

    /// Decide whether the listing is an instance of this kind for the game
    fn matches(&self, listing: &ArchiveListing, game_id: &str) -> bool {
        if game_id != self.game_id() {
            debug!(installer = self.id(), game_id, "game mismatch, not supported");
            return false;
        }

        if find_signature_file(listing, |p| self.is_signature(p)).is_none() {
            debug!(installer = self.id(), "no signature file in listing");
            return false;
        }

        // Exclusion only ever withdraws a positive match
        if self.is_excluded(listing) {
            debug!(installer = self.id(), "listing deferred to a specialized installer");
            return false;
        }

        debug!(installer = self.id(), "listing supported");
        true
    }

    /// Parent directory of the first signature file, in listing order
    fn resolve_root(&self, listing: &ArchiveListing) -> Result<String> {
        find_signature_file(listing, |p| self.is_signature(p))
            .map(|file| crate::listing::parent_dir(file).to_string())
            .ok_or_else(|| self.signature_violation(listing))
    }

    /// Build the plan for `listing` anchored at `root`
    fn build_instructions(&self, listing: &ArchiveListing, root: &str) -> Result<InstallPlan> {
        if find_signature_file(listing, |p| self.is_signature(p)).is_none() {
            return Err(self.signature_violation(listing));
        }
        Ok(InstallPlan::new(build_copy_instructions(listing, root), self.id()))
    }

    /// Resolve the root and build the plan in one step
    fn install(&self, listing: &ArchiveListing) -> Result<InstallPlan> {
        let root = self.resolve_root(listing)?;
        debug!(installer = self.id(), root = %root, "resolved payload root");
        self.build_instructions(listing, &root)
    }

    #[doc(hidden)]
    fn signature_violation(&self, listing: &ArchiveListing) -> InstallError {
        InstallError::SignatureViolation {
            installer: self.id().to_string(),
            reason: format!(
                "none of the {} listed entries matches the {} signature",
                listing.len(),
                self.name()
            ),
        }
    }
}
