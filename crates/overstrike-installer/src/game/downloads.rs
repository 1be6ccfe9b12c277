//! Overstrike auto-download planning
//!
//! The host downloads and installs Overstrike when no installed mod carries the
//! Overstrike mod type. This module makes the decisions for that workflow
//! (whether to download, which file, which URLs) without doing any network I/O.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::config::GameConfig;
use crate::install::error::{InstallError, Result};
use crate::install::kinds::overstrike::{OVERSTRIKE_NAME, OVERSTRIKE_SUFFIX};

/// Nexus file category for "main" files
pub const MAIN_FILE_CATEGORY: u32 = 1;

/// Nexus file information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NexusFile {
    #[serde(rename = "file_id")]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    pub category_id: u32,
    /// Upload time as a unix timestamp
    pub uploaded_timestamp: u64,
}

/// Nexus file list response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NexusFileList {
    pub files: Vec<NexusFile>,
}

/// Everything the host needs to fetch and register Overstrike
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadPlan {
    pub name: String,
    /// `nxm://` link handed to the download manager
    pub nxm_url: Url,
    /// Page opened for the user when the automatic download fails
    pub fallback_page: Url,
    /// Mod type assigned to the installed download
    pub mod_type: String,
}

/// Whether any installed mod already has the Overstrike mod type
pub fn is_overstrike_installed<'a, I>(config: &GameConfig, installed_mod_types: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let overstrike_id = config.scoped_id(OVERSTRIKE_SUFFIX);
    installed_mod_types.into_iter().any(|mod_type| mod_type == overstrike_id)
}

/// Newest file in the main category
pub fn select_main_file(files: &[NexusFile]) -> Result<&NexusFile> {
    files
        .iter()
        .filter(|file| file.category_id == MAIN_FILE_CATEGORY)
        .max_by_key(|file| file.uploaded_timestamp)
        .ok_or_else(|| InstallError::NoMainFile {
            tool: OVERSTRIKE_NAME.to_string(),
        })
}

pub fn nxm_url(game_id: &str, page_id: u32, file_id: u32) -> Result<Url> {
    Ok(Url::parse(&format!("nxm://{game_id}/mods/{page_id}/files/{file_id}"))?)
}

pub fn files_page_url(game_id: &str, page_id: u32) -> Result<Url> {
    Ok(Url::parse(&format!(
        "https://www.nexusmods.com/{game_id}/mods/{page_id}/files/?tab=files"
    ))?)
}

/// Plan the Overstrike download, or `None` when it is already installed
pub fn plan_overstrike_download<'a, I>(
    config: &GameConfig,
    installed_mod_types: I,
    file_list: &NexusFileList,
) -> Result<Option<DownloadPlan>>
where
    I: IntoIterator<Item = &'a str>,
{
    if is_overstrike_installed(config, installed_mod_types) {
        debug!("{} already installed, skipping download", OVERSTRIKE_NAME);
        return Ok(None);
    }

    let file = select_main_file(&file_list.files)?;
    info!(file_id = file.id, name = %file.name, "selected {} main file", OVERSTRIKE_NAME);

    Ok(Some(DownloadPlan {
        name: OVERSTRIKE_NAME.to_string(),
        nxm_url: nxm_url(&config.id, config.overstrike_page_id, file.id)?,
        fallback_page: files_page_url(&config.id, config.overstrike_page_id)?,
        mod_type: config.scoped_id(OVERSTRIKE_SUFFIX),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: u32, category_id: u32, uploaded_timestamp: u64) -> NexusFile {
        NexusFile {
            id,
            name: format!("file {id}"),
            category_id,
            uploaded_timestamp,
        }
    }

    #[test]
    fn test_selects_newest_main_file() {
        let files = vec![file(10, 1, 100), file(30, 1, 300), file(40, 4, 400), file(20, 1, 200)];
        assert_eq!(select_main_file(&files).unwrap().id, 30);
    }

    #[test]
    fn test_no_main_file() {
        let files = vec![file(40, 4, 400)];
        let err = select_main_file(&files).unwrap_err();
        assert_eq!(err.to_string(), "No Overstrike main file found");
    }

    #[test]
    fn test_urls() {
        assert_eq!(
            nxm_url("marvelsspiderman2", 1, 30).unwrap().as_str(),
            "nxm://marvelsspiderman2/mods/1/files/30"
        );
        assert_eq!(
            files_page_url("marvelsspiderman2", 1).unwrap().as_str(),
            "https://www.nexusmods.com/marvelsspiderman2/mods/1/files/?tab=files"
        );
    }

    #[test]
    fn test_plan_skips_when_installed() {
        let config = GameConfig::default();
        let installed = ["marvelsspiderman2-osmod", "marvelsspiderman2-overstrike"];
        let list = NexusFileList { files: vec![file(1, 1, 1)] };
        let plan = plan_overstrike_download(&config, installed, &list).unwrap();
        assert!(plan.is_none());
    }

    #[test]
    fn test_plan_from_file_list_json() {
        let list: NexusFileList = serde_json::from_str(
            r#"{ "files": [
                { "file_id": 30, "name": "Overstrike", "category_id": 1, "uploaded_timestamp": 1700000000 },
                { "file_id": 12, "category_id": 6, "uploaded_timestamp": 1800000000 }
            ] }"#,
        )
        .unwrap();

        let config = GameConfig::default();
        let plan = plan_overstrike_download(&config, std::iter::empty(), &list)
            .unwrap()
            .unwrap();
        assert_eq!(plan.nxm_url.as_str(), "nxm://marvelsspiderman2/mods/1/files/30");
        assert_eq!(plan.mod_type, "marvelsspiderman2-overstrike");
    }
}
