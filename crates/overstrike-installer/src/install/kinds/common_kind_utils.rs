//! Common utilities for kind installers
//!
//! Shared signature lookup, fomod detection and copy instruction building.

use tracing::warn;

use crate::install::instructions::CopyInstruction;
use crate::listing::{self, ArchiveListing};

/// First file entry (directory markers skipped) satisfying `is_signature`
pub fn find_signature_file<'a, F>(listing: &'a ArchiveListing, is_signature: F) -> Option<&'a str>
where
    F: Fn(&str) -> bool,
{
    listing.file_entries().find(|&path| is_signature(path))
}

/// Whether the listing ships a fomod installer script.
///
/// Only `fomod/ModuleConfig.xml` is checked, at any depth and in any case.
pub fn has_fomod_installer(listing: &ArchiveListing) -> bool {
    listing.file_entries().any(|path| {
        listing::base_name(path).to_lowercase() == "moduleconfig.xml"
            && listing::base_name(listing::parent_dir(path)).to_lowercase() == "fomod"
    })
}

/// One copy instruction per file at or below `root`, in listing order.
///
/// Sources are the raw entries, destinations use `/`.
pub fn build_copy_instructions(listing: &ArchiveListing, root: &str) -> Vec<CopyInstruction> {
    listing
        .file_entries_with_raw()
        .filter_map(|(source, path)| {
            let destination = listing::relative_to(path, root)?;
            if !listing::is_safe_destination(destination) {
                warn!(source, root, "dropping entry that escapes the mod root");
                return None;
            }
            Some(CopyInstruction {
                source: source.to_string(),
                destination: destination.to_string(),
            })
        })
        .collect()
}
