mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use overstrike_installer::{GameConfig, KindRegistry};
use tracing::Level;

use cli::{Cli, Commands};

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables if .env file exists
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)
            .with_context(|| format!("Failed to load game configuration {}", path.display()))?,
        None => GameConfig::default(),
    };
    let game_id = cli.game.clone().unwrap_or_else(|| config.id.clone());
    let registry = KindRegistry::for_game(config);

    match cli.command {
        Commands::Classify { listing } => commands::classify(&registry, &listing, &game_id)?,
        Commands::Plan { listing, staging } => {
            commands::plan(&registry, &listing, &staging, &game_id).await?;
        }
        Commands::Destination { mod_type, paths } => {
            let vars = commands::path_variables(paths);
            commands::destination(&registry, &mod_type, &vars)?;
        }
        Commands::Kinds => commands::kinds(&registry)?,
        Commands::Game { paths, store } => {
            let vars = commands::path_variables(paths);
            commands::game(&registry, &vars, store.as_deref())?;
        }
    }

    Ok(())
}
