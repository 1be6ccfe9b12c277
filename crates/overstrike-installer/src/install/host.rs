//! Host-facing installer API
//!
//! The host's installer dispatch works with asynchronous `test`/`install`
//! callbacks. Every [`KindInstaller`] gets them for free; the futures resolve
//! immediately since classification and planning do no I/O.

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::install::error::Result;
use crate::install::instructions::{InstallResult, SupportedResult};
use crate::install::kinds::KindInstaller;
use crate::install::registry::KindRegistry;
use crate::listing::ArchiveListing;

#[async_trait]
pub trait HostInstaller: Send + Sync {
    /// Report whether the archive's files are supported for `game_id`
    async fn test(&self, files: &[String], game_id: &str) -> Result<SupportedResult>;

    /// Produce install instructions for a supported archive.
    ///
    /// `destination_path` is the host's staging directory; plans are
    /// root-relative so it is only logged.
    async fn install(&self, files: &[String], destination_path: &Path, game_id: &str) -> Result<InstallResult>;
}

#[async_trait]
impl<T> HostInstaller for T
where
    T: KindInstaller + ?Sized,
{
    async fn test(&self, files: &[String], game_id: &str) -> Result<SupportedResult> {
        let listing = ArchiveListing::new(files);
        Ok(SupportedResult::new(KindInstaller::matches(self, &listing, game_id)))
    }

    async fn install(&self, files: &[String], destination_path: &Path, game_id: &str) -> Result<InstallResult> {
        debug!(installer = KindInstaller::id(self), game_id, destination = %destination_path.display(), "installing");
        let listing = ArchiveListing::new(files);
        Ok(KindInstaller::install(self, &listing)?.into())
    }
}

impl KindRegistry {
    /// Run the host `test` callback of one registered installer
    pub async fn test(&self, installer_id: &str, files: &[String], game_id: &str) -> Result<SupportedResult> {
        HostInstaller::test(self.installer(installer_id)?, files, game_id).await
    }

    /// Run the host `install` callback of one registered installer
    pub async fn install(
        &self,
        installer_id: &str,
        files: &[String],
        destination_path: &Path,
        game_id: &str,
    ) -> Result<InstallResult> {
        HostInstaller::install(self.installer(installer_id)?, files, destination_path, game_id).await
    }
}
