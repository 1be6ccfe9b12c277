use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use overstrike_installer::game::{self, tools, verify};
use overstrike_installer::{ArchiveListing, GameDiscovery, GameStore, KindRegistry, PathVariables};
use tracing::debug;

use crate::cli::PathArgs;

const ENV_GAME_PATH: &str = "OVERSTRIKE_GAME_PATH";
const ENV_DOCUMENTS: &str = "OVERSTRIKE_DOCUMENTS";
const ENV_LOCAL_APP_DATA: &str = "OVERSTRIKE_LOCAL_APP_DATA";
const ENV_APP_DATA: &str = "OVERSTRIKE_APP_DATA";

/// Read a listing from a file, or stdin for "-"
pub fn read_listing(path: &Path) -> Result<ArchiveListing> {
    read_listing_from(path, std::io::stdin())
}

fn read_listing_from(path: &Path, mut stdin: impl Read) -> Result<ArchiveListing> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .context("Failed to read listing from stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read listing {}", path.display()))?
    };

    let listing = ArchiveListing::from_lines(&text);
    debug!(entries = listing.len(), "read listing");
    Ok(listing)
}

fn flag_or_env(flag: Option<PathBuf>, var: &str) -> Option<PathBuf> {
    flag.or_else(|| std::env::var_os(var).filter(|v| !v.is_empty()).map(PathBuf::from))
}

pub fn path_variables(args: PathArgs) -> PathVariables {
    PathVariables {
        game_path: flag_or_env(args.game_path, ENV_GAME_PATH),
        documents: flag_or_env(args.documents, ENV_DOCUMENTS),
        local_app_data: flag_or_env(args.local_app_data, ENV_LOCAL_APP_DATA),
        app_data: flag_or_env(args.app_data, ENV_APP_DATA),
    }
}

/// Installer id for a listing, or "none"
fn classification(registry: &KindRegistry, listing: &ArchiveListing, game_id: &str) -> String {
    registry
        .classify(listing, game_id)
        .map_or_else(|| "none".to_string(), |installer| installer.id().to_string())
}

pub fn classify(registry: &KindRegistry, listing: &Path, game_id: &str) -> Result<()> {
    let listing = read_listing(listing)?;
    println!("{}", classification(registry, &listing, game_id));
    Ok(())
}

/// Run the same test/install sequence the host's installer dispatch runs
pub async fn plan(registry: &KindRegistry, listing: &Path, staging: &Path, game_id: &str) -> Result<()> {
    let listing = read_listing(listing)?;
    let Some(installer) = registry.classify(&listing, game_id) else {
        bail!("No installer supports this archive for game '{}'", game_id);
    };

    let result = registry
        .install(installer.id(), listing.files(), staging, game_id)
        .await
        .with_context(|| format!("Installer '{}' failed", installer.id()))?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub fn destination(registry: &KindRegistry, mod_type: &str, vars: &PathVariables) -> Result<()> {
    let path = registry
        .resolve_destination(mod_type, vars)
        .with_context(|| format!("Cannot resolve target path of '{}'", mod_type))?;
    println!("{}", path.display());
    Ok(())
}

pub fn kinds(registry: &KindRegistry) -> Result<()> {
    println!("Mod types:");
    for mod_type in registry.mod_types() {
        println!(
            "  {:<32} {:>3}  {:<24} {}",
            mod_type.id,
            registry.deploy_priority(&mod_type.id)?,
            mod_type.name,
            mod_type.target_path
        );
    }

    println!("Installers:");
    for installer in registry.installers() {
        println!("  {:<32} {:>3}  {}", installer.id(), installer.priority(), installer.name());
    }
    Ok(())
}

fn parse_store(store: &str) -> Result<GameStore> {
    serde_json::from_value(serde_json::Value::String(store.to_lowercase()))
        .with_context(|| format!("Unknown store '{}'", store))
}

pub fn game(registry: &KindRegistry, vars: &PathVariables, store: Option<&str>) -> Result<()> {
    let config = registry.game();
    let mut discovery = match &vars.game_path {
        Some(path) => GameDiscovery::at(path),
        None => GameDiscovery::undiscovered(),
    };
    if let Some(store) = store {
        discovery = discovery.with_store(parse_store(store)?);
    }

    println!("{} ({})", config.name, config.id);
    println!("  discovery ids:  {}", config.discovery_ids().join(", "));
    println!("  mod path:       {}", game::mod_path(config, vars)?.display());
    match game::requires_launcher(discovery.store.as_ref()) {
        Some(launcher) => println!("  launcher:       {:?}", launcher),
        None => println!("  launcher:       none"),
    }
    println!(
        "  mod types:      {}",
        if registry.is_mod_type_supported(&config.id, &discovery) { "available" } else { "waiting for discovery" }
    );

    if !discovery.is_discovered() {
        println!("  game path:      not located (set --game-path or {})", ENV_GAME_PATH);
        return Ok(());
    }

    let tool = tools::overstrike_tool(config);
    println!("  mods library:   {}", game::mods_library_dir(config, &discovery)?.display());
    println!("  {}:     {}", tool.name, tool.executable_path(config, &discovery)?.display());
    for toc in verify::toc_files(config, &discovery)? {
        println!("  stale toc:      {}", toc.display());
    }
    let request = verify::VerifyRequest::for_game(config, &discovery)?;
    println!("  verify request: {}", serde_json::to_string(&request)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const GAME_ID: &str = "marvelsspiderman2";

    fn listing_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_listing_from_file_skips_blank_lines() {
        let file = listing_file("Mods/a.suit\r\n\r\n   \nMods/b.stage\n");
        let listing = read_listing(file.path()).unwrap();
        assert_eq!(listing.files(), &["Mods/a.suit", "Mods/b.stage"]);
    }

    #[test]
    fn test_read_listing_dash_reads_stdin() {
        let stdin = "X/overstrike.exe\r\n\nX/data.bin\r\n".as_bytes();
        let listing = read_listing_from(Path::new("-"), stdin).unwrap();
        assert_eq!(listing.files(), &["X/overstrike.exe", "X/data.bin"]);
    }

    #[test]
    fn test_read_listing_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_listing(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read listing"));
    }

    #[test]
    fn test_flag_wins_over_env() {
        let var = "OVERSTRIKE_TEST_FLAG_WINS_OVER_ENV";
        unsafe { std::env::set_var(var, "/from/env") };
        assert_eq!(flag_or_env(Some(PathBuf::from("/from/flag")), var), Some(PathBuf::from("/from/flag")));
        assert_eq!(flag_or_env(None, var), Some(PathBuf::from("/from/env")));
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_empty_env_is_unset() {
        let var = "OVERSTRIKE_TEST_EMPTY_ENV_IS_UNSET";
        unsafe { std::env::set_var(var, "") };
        assert_eq!(flag_or_env(None, var), None);
        unsafe { std::env::remove_var(var) };
        assert_eq!(flag_or_env(None, var), None);
    }

    #[test]
    fn test_parse_store_ignores_case() {
        assert_eq!(parse_store("Steam").unwrap(), GameStore::Steam);
        assert_eq!(parse_store("EPIC").unwrap(), GameStore::Epic);
        assert_eq!(parse_store("xbox").unwrap(), GameStore::Xbox);
    }

    #[test]
    fn test_parse_store_rejects_unknown() {
        let err = parse_store("origin").unwrap_err();
        assert_eq!(err.to_string(), "Unknown store 'origin'");
    }

    #[test]
    fn test_classification_of_listing_files() {
        let registry = KindRegistry::default();

        let launcher = read_listing(listing_file("X/overstrike.exe\nX/data.bin\n").path()).unwrap();
        assert_eq!(classification(&registry, &launcher, GAME_ID), "marvelsspiderman2-overstrike");

        let unsupported = read_listing(listing_file("docs/readme.txt\n").path()).unwrap();
        assert_eq!(classification(&registry, &unsupported, GAME_ID), "none");
    }
}
